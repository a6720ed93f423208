use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("'{0}' is not a valid amount")]
    InvalidAmount(String),

    #[error("'{0}' exceeds the largest supported amount")]
    AmountTooLarge(String),

    #[error("'{0}' must not be negative")]
    NegativeAmount(String),

    #[error("'{0}' is not a valid identifier")]
    InvalidId(String),

    #[error("'{0}' is not a valid date (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("'{0}' is not a valid payment status")]
    InvalidStatus(String),
}

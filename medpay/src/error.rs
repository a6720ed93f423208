use medpay_model::{ModelError, PaymentId};
use thiserror::Error;

use crate::controller::PaymentField;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Payment {0} not found")]
    NotFound(PaymentId),

    #[error("Invalid {field}: {message}")]
    Validation {
        field: PaymentField,
        message: String,
    },

    #[error("Export failed: {0}")]
    Export(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid settings: {0}")]
    InvalidSettings(String),
}

impl Error {
    pub(crate) fn validation(field: PaymentField, source: ModelError) -> Self {
        Self::Validation {
            field,
            message: source.to_string(),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;

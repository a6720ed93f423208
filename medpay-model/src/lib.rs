pub mod records;
mod error;
mod macros;

pub use crate::error::ModelError;
pub use records::{
    Cents, PaymentId, ProviderId,
    payments::{NewPayment, Payment, PaymentStatus, parse_service_date},
    providers::{Provider, find_provider},
};

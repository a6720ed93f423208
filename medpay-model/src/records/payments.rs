use super::{Cents, PaymentId, ProviderId};
use crate::ModelError;
use crate::macros::setter;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Paid,
    Pending,
    Overdue,
}

impl PaymentStatus {
    pub const ALL: [PaymentStatus; 3] = [Self::Paid, Self::Pending, Self::Overdue];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Paid => "paid",
            Self::Pending => "pending",
            Self::Overdue => "overdue",
        }
    }

    /// Cycle to the next status
    pub fn next(&self) -> Self {
        match self {
            Self::Paid => Self::Pending,
            Self::Pending => Self::Overdue,
            Self::Overdue => Self::Paid,
        }
    }

    /// Cycle to the previous status
    pub fn previous(&self) -> Self {
        match self {
            Self::Paid => Self::Overdue,
            Self::Pending => Self::Paid,
            Self::Overdue => Self::Pending,
        }
    }

    /// Anything not yet paid counts towards the outstanding balance.
    pub fn is_outstanding(&self) -> bool {
        *self != Self::Paid
    }
}

impl Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentStatus {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ModelError::InvalidStatus(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    pub id: PaymentId,
    /// ISO-8601 `YYYY-MM-DD`; string comparison orders dates chronologically.
    pub service_date: String,
    pub provider_id: ProviderId,
    pub service_type: String,
    pub total_amount: Cents,
    pub insurance_coverage: Cents,
    /// `total_amount - insurance_coverage`, negative when coverage exceeds the total.
    pub your_cost: Cents,
    pub status: PaymentStatus,
    pub notes: String,
}

impl Payment {
    pub fn new(id: PaymentId, payment: NewPayment) -> Self {
        let your_cost = payment.your_cost();
        Self {
            id,
            service_date: payment.service_date,
            provider_id: payment.provider_id,
            service_type: payment.service_type,
            total_amount: payment.total_amount,
            insurance_coverage: payment.insurance_coverage,
            your_cost,
            status: payment.status,
            notes: payment.notes,
        }
    }

    pub fn is_outstanding(&self) -> bool {
        self.status.is_outstanding()
    }
}

/// A payment that has not been assigned an identifier yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPayment {
    pub service_date: String,
    pub provider_id: ProviderId,
    pub service_type: String,
    pub total_amount: Cents,
    pub insurance_coverage: Cents,
    pub status: PaymentStatus,
    pub notes: String,
}

impl NewPayment {
    pub fn new(
        service_date: impl Into<String>,
        provider_id: ProviderId,
        service_type: impl Into<String>,
        total_amount: Cents,
    ) -> Self {
        Self {
            service_date: service_date.into(),
            provider_id,
            service_type: service_type.into(),
            total_amount,
            insurance_coverage: Cents::ZERO,
            status: PaymentStatus::Pending,
            notes: String::new(),
        }
    }

    setter!(insurance_coverage: Cents);
    setter!(status: PaymentStatus);
    setter!(notes: String);

    pub fn your_cost(&self) -> Cents {
        self.total_amount - self.insurance_coverage
    }
}

/// Validate an ISO `YYYY-MM-DD` service date and return it unchanged.
///
/// Only the zero-padded form is accepted so that lexicographic comparison of
/// stored dates stays chronological.
pub fn parse_service_date(input: &str) -> Result<String, ModelError> {
    let trimmed = input.trim();
    let date = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map_err(|_| ModelError::InvalidDate(input.to_string()))?;

    let canonical = date.format("%Y-%m-%d").to_string();
    if canonical != trimmed {
        return Err(ModelError::InvalidDate(input.to_string()));
    }

    Ok(canonical)
}

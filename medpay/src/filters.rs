use medpay_model::{Payment, PaymentStatus, ProviderId};
use serde::Serialize;

/// Value of the "all" option in both filter selections.
pub const ALL_VALUE: &str = "all";

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Only(PaymentStatus),
}

impl StatusFilter {
    /// Cycle `All → Paid → Pending → Overdue → All`
    pub fn next(&self) -> Self {
        match self {
            Self::All => Self::Only(PaymentStatus::Paid),
            Self::Only(PaymentStatus::Overdue) => Self::All,
            Self::Only(status) => Self::Only(status.next()),
        }
    }

    /// Parse a selection value: `all` or a status name.
    pub fn from_value(value: &str) -> Self {
        value.parse().map(Self::Only).unwrap_or_default()
    }

    pub fn value(&self) -> &'static str {
        match self {
            Self::All => ALL_VALUE,
            Self::Only(status) => status.as_str(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All Statuses",
            Self::Only(PaymentStatus::Paid) => "Paid",
            Self::Only(PaymentStatus::Pending) => "Pending",
            Self::Only(PaymentStatus::Overdue) => "Overdue",
        }
    }

    pub fn matches(&self, status: PaymentStatus) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => *wanted == status,
        }
    }
}

/// Provider selection as the raw option value, compared to the payment's
/// provider id by string equality.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderFilter {
    #[default]
    All,
    Only(String),
}

impl ProviderFilter {
    pub fn from_value(value: &str) -> Self {
        if value.is_empty() || value == ALL_VALUE {
            Self::All
        } else {
            Self::Only(value.to_string())
        }
    }

    pub fn value(&self) -> &str {
        match self {
            Self::All => ALL_VALUE,
            Self::Only(value) => value,
        }
    }

    pub fn matches(&self, provider_id: ProviderId) -> bool {
        match self {
            Self::All => true,
            Self::Only(value) => provider_id.to_string() == *value,
        }
    }
}

/// The three filters of the payments table, applied conjunctively.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaymentFilters {
    pub status: StatusFilter,
    pub provider: ProviderFilter,
    /// ISO `YYYY-MM-DD`; empty disables the filter.
    pub min_date: String,
}

impl PaymentFilters {
    pub fn new(status: StatusFilter, provider: ProviderFilter, min_date: impl Into<String>) -> Self {
        Self {
            status,
            provider,
            min_date: min_date.into(),
        }
    }

    pub fn matches(&self, payment: &Payment) -> bool {
        self.status.matches(payment.status)
            && self.provider.matches(payment.provider_id)
            && (self.min_date.is_empty() || payment.service_date.as_str() >= self.min_date.as_str())
    }

    pub fn is_open(&self) -> bool {
        *self == Self::default()
    }

    /// Short description for table titles, e.g. `status: pending, from: 2024-02-01`.
    pub fn describe(&self, provider_name: Option<&str>) -> Option<String> {
        let mut parts = Vec::new();
        if let StatusFilter::Only(status) = self.status {
            parts.push(format!("status: {}", status));
        }
        if let ProviderFilter::Only(ref value) = self.provider {
            parts.push(format!("provider: {}", provider_name.unwrap_or(value)));
        }
        if !self.min_date.is_empty() {
            parts.push(format!("from: {}", self.min_date));
        }

        if parts.is_empty() {
            None
        } else {
            Some(parts.join(", "))
        }
    }
}

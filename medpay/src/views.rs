//! Presentation models derived from the payment and provider collections.
//!
//! Every function here is a pure projection: it reads the records and returns
//! a model that a [`Surface`](crate::surface::Surface) can display.

use medpay_model::{find_provider, Cents, Payment, PaymentId, PaymentStatus, Provider, ProviderId};
use serde::Serialize;

use crate::filters::{PaymentFilters, ALL_VALUE};
use crate::format::Formatter;

/// Provider label on the dashboard when a payment's provider is missing.
pub const UNKNOWN_PROVIDER: &str = "Unknown Provider";

/// Provider label in the table, detail and export when the provider is missing.
pub const UNKNOWN: &str = "Unknown";

/// Number of payments listed under recent activity.
pub const RECENT_ACTIVITY_LIMIT: usize = 3;

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Dashboard,
    Payments,
    Providers,
}

impl View {
    pub const ALL: [View; 3] = [Self::Dashboard, Self::Payments, Self::Providers];

    pub fn title(&self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Payments => "Payments",
            Self::Providers => "Providers",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Self::Dashboard => 0,
            Self::Payments => 1,
            Self::Providers => 2,
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Self::Dashboard => Self::Payments,
            Self::Payments => Self::Providers,
            Self::Providers => Self::Dashboard,
        }
    }

    pub fn previous(&self) -> Self {
        match self {
            Self::Dashboard => Self::Providers,
            Self::Payments => Self::Dashboard,
            Self::Providers => Self::Payments,
        }
    }
}

#[derive(Default, Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub total_payments: Cents,
    pub pending_count: usize,
    pub outstanding_balance: Cents,
    pub formatted_total: String,
    pub formatted_outstanding: String,
    /// Newest first.
    pub recent: Vec<RecentPayment>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecentPayment {
    pub payment_id: PaymentId,
    pub provider_name: String,
    pub service_type: String,
    pub date: String,
    pub your_cost: String,
    pub status: PaymentStatus,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize)]
pub struct PaymentsTableView {
    pub filters: PaymentFilters,
    pub rows: Vec<PaymentRow>,
    /// Size of the unfiltered collection.
    pub total_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaymentRow {
    pub payment_id: PaymentId,
    pub date: String,
    pub provider_name: String,
    pub service_type: String,
    pub total_amount: String,
    pub insurance_coverage: String,
    pub your_cost: String,
    pub status: PaymentStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RowAction {
    View(PaymentId),
    Delete(PaymentId),
}

impl PaymentRow {
    pub fn actions(&self) -> [RowAction; 2] {
        [
            RowAction::View(self.payment_id),
            RowAction::Delete(self.payment_id),
        ]
    }
}

#[derive(Default, Debug, Clone, PartialEq, Serialize)]
pub struct ProvidersView {
    pub cards: Vec<ProviderCard>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProviderCard {
    pub provider_id: ProviderId,
    pub name: String,
    pub specialty: String,
    pub phone: String,
    pub visits: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaymentDetail {
    pub payment_id: PaymentId,
    pub date: String,
    pub provider_name: String,
    pub service_type: String,
    pub total_amount: String,
    pub insurance_coverage: String,
    pub your_cost: String,
    pub status: PaymentStatus,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProviderOption {
    pub value: String,
    pub label: String,
}

impl ProviderOption {
    fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// The provider selection lists of the add-payment form and the table filter.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProviderOptions {
    pub form: Vec<ProviderOption>,
    pub filter: Vec<ProviderOption>,
}

pub fn provider_name(providers: &[Provider], id: ProviderId) -> Option<&str> {
    find_provider(providers, id).map(|p| p.name.as_str())
}

pub fn dashboard(payments: &[Payment], providers: &[Provider], fmt: &Formatter) -> DashboardView {
    let total_payments: Cents = payments.iter().map(|p| p.total_amount).sum();
    let pending_count = payments
        .iter()
        .filter(|p| p.status == PaymentStatus::Pending)
        .count();
    let outstanding_balance: Cents = payments
        .iter()
        .filter(|p| p.is_outstanding())
        .map(|p| p.your_cost)
        .sum();

    let recent = payments
        .iter()
        .rev()
        .take(RECENT_ACTIVITY_LIMIT)
        .map(|p| RecentPayment {
            payment_id: p.id,
            provider_name: provider_name(providers, p.provider_id)
                .unwrap_or(UNKNOWN_PROVIDER)
                .to_string(),
            service_type: p.service_type.clone(),
            date: fmt.date(&p.service_date),
            your_cost: fmt.money(p.your_cost),
            status: p.status,
        })
        .collect();

    DashboardView {
        total_payments,
        pending_count,
        outstanding_balance,
        formatted_total: fmt.money(total_payments),
        formatted_outstanding: fmt.money(outstanding_balance),
        recent,
    }
}

pub fn payments_table(
    payments: &[Payment],
    providers: &[Provider],
    filters: &PaymentFilters,
    fmt: &Formatter,
) -> PaymentsTableView {
    let rows = payments
        .iter()
        .filter(|p| filters.matches(p))
        .map(|p| PaymentRow {
            payment_id: p.id,
            date: fmt.date(&p.service_date),
            provider_name: provider_name(providers, p.provider_id)
                .unwrap_or(UNKNOWN)
                .to_string(),
            service_type: p.service_type.clone(),
            total_amount: fmt.money(p.total_amount),
            insurance_coverage: fmt.money(p.insurance_coverage),
            your_cost: fmt.money(p.your_cost),
            status: p.status,
        })
        .collect();

    PaymentsTableView {
        filters: filters.clone(),
        rows,
        total_count: payments.len(),
    }
}

pub fn provider_cards(providers: &[Provider], payments: &[Payment]) -> ProvidersView {
    let cards = providers
        .iter()
        .map(|provider| ProviderCard {
            provider_id: provider.id,
            name: provider.name.clone(),
            specialty: provider.specialty.clone(),
            phone: provider.phone.clone(),
            visits: payments
                .iter()
                .filter(|p| p.provider_id == provider.id)
                .count(),
        })
        .collect();

    ProvidersView { cards }
}

pub fn payment_detail(payment: &Payment, providers: &[Provider], fmt: &Formatter) -> PaymentDetail {
    PaymentDetail {
        payment_id: payment.id,
        date: fmt.date(&payment.service_date),
        provider_name: provider_name(providers, payment.provider_id)
            .unwrap_or(UNKNOWN)
            .to_string(),
        service_type: payment.service_type.clone(),
        total_amount: fmt.money(payment.total_amount),
        insurance_coverage: fmt.money(payment.insurance_coverage),
        your_cost: fmt.money(payment.your_cost),
        status: payment.status,
        notes: payment.notes.clone(),
    }
}

pub fn provider_options(providers: &[Provider]) -> ProviderOptions {
    let choices = providers
        .iter()
        .map(|p| ProviderOption::new(p.id.to_string(), p.name.clone()));

    let form = std::iter::once(ProviderOption::new("", "Select Provider"))
        .chain(choices.clone())
        .collect();
    let filter = std::iter::once(ProviderOption::new(ALL_VALUE, "All Providers"))
        .chain(choices)
        .collect();

    ProviderOptions { form, filter }
}

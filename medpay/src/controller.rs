use std::fmt::Display;
use std::path::PathBuf;

use medpay_model::{
    parse_service_date, Cents, ModelError, NewPayment, Payment, PaymentId, PaymentStatus,
    Provider, ProviderId,
};
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::export::{export_csv, EXPORT_FILENAME, EXPORT_MIME_TYPE};
use crate::filters::PaymentFilters;
use crate::format::Formatter;
use crate::seed;
use crate::surface::Surface;
use crate::views::{self, DashboardView, PaymentDetail, PaymentsTableView, ProvidersView, View};

pub const PAYMENT_ADDED_MESSAGE: &str = "Payment added successfully!";

/// Fields of the add-payment form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentField {
    ServiceDate,
    Provider,
    ServiceType,
    TotalAmount,
    InsuranceCoverage,
    Status,
    Notes,
}

impl PaymentField {
    /// Form order.
    pub const ALL: [PaymentField; 7] = [
        Self::ServiceDate,
        Self::Provider,
        Self::ServiceType,
        Self::TotalAmount,
        Self::InsuranceCoverage,
        Self::Status,
        Self::Notes,
    ];

    pub fn next(&self) -> Self {
        let index = Self::ALL.iter().position(|f| f == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    pub fn previous(&self) -> Self {
        let index = Self::ALL.iter().position(|f| f == self).unwrap_or(0);
        Self::ALL[(index + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Fields chosen from a fixed list rather than typed.
    pub fn is_choice(&self) -> bool {
        matches!(self, Self::Provider | Self::Status)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::ServiceDate => "Date",
            Self::Provider => "Provider",
            Self::ServiceType => "Service",
            Self::TotalAmount => "Total Amount",
            Self::InsuranceCoverage => "Insurance Coverage",
            Self::Status => "Status",
            Self::Notes => "Notes",
        }
    }

    /// Form element name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::ServiceDate => "service-date",
            Self::Provider => "provider-select",
            Self::ServiceType => "service-type",
            Self::TotalAmount => "total-amount",
            Self::InsuranceCoverage => "insurance-coverage",
            Self::Status => "payment-status",
            Self::Notes => "notes",
        }
    }
}

impl Display for PaymentField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::ServiceDate => "service date",
            Self::Provider => "provider",
            Self::ServiceType => "service type",
            Self::TotalAmount => "total amount",
            Self::InsuranceCoverage => "insurance coverage",
            Self::Status => "status",
            Self::Notes => "notes",
        };
        f.write_str(label)
    }
}

/// Raw form input for a new payment, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaymentFields {
    pub service_date: String,
    pub provider_id: String,
    pub service_type: String,
    pub total_amount: String,
    pub insurance_coverage: String,
    pub status: String,
    pub notes: String,
}

impl PaymentFields {
    /// Check every field and build the payment it describes.
    ///
    /// Blank or unparsable insurance counts as no coverage, but a negative or
    /// out-of-range one is an error. A blank status means pending.
    pub fn validate(&self) -> Result<NewPayment> {
        let service_date = parse_service_date(&self.service_date)
            .map_err(|e| Error::validation(PaymentField::ServiceDate, e))?;

        let provider_id: ProviderId = self
            .provider_id
            .parse()
            .map_err(|e| Error::validation(PaymentField::Provider, e))?;

        let service_type = self.service_type.trim();
        if service_type.is_empty() {
            return Err(Error::Validation {
                field: PaymentField::ServiceType,
                message: "a service type is required".to_string(),
            });
        }

        let total_amount = Cents::parse_non_negative(&self.total_amount)
            .map_err(|e| Error::validation(PaymentField::TotalAmount, e))?;

        let insurance_coverage = match Cents::parse(&self.insurance_coverage) {
            Ok(amount) if amount.is_negative() => {
                return Err(Error::validation(
                    PaymentField::InsuranceCoverage,
                    ModelError::NegativeAmount(self.insurance_coverage.clone()),
                ));
            }
            Ok(amount) => amount,
            Err(e @ ModelError::AmountTooLarge(_)) => {
                return Err(Error::validation(PaymentField::InsuranceCoverage, e));
            }
            Err(_) => Cents::ZERO,
        };

        let status = if self.status.trim().is_empty() {
            PaymentStatus::Pending
        } else {
            self.status
                .parse()
                .map_err(|e| Error::validation(PaymentField::Status, e))?
        };

        Ok(
            NewPayment::new(service_date, provider_id, service_type, total_amount)
                .insurance_coverage(insurance_coverage)
                .status(status)
                .notes(self.notes.clone()),
        )
    }
}

/// Owns the payment and provider collections and projects them onto a
/// [`Surface`].
///
/// Every mutating operation finishes by re-rendering the regions it affects,
/// so the surface never shows stale data.
#[derive(Debug, Clone)]
pub struct Controller {
    payments: Vec<Payment>,
    providers: Vec<Provider>,
    current_view: View,
    filters: PaymentFilters,
    next_id: u32,
    formatter: Formatter,
}

impl Controller {
    pub fn new(formatter: Formatter) -> Self {
        Self {
            payments: Vec::new(),
            providers: Vec::new(),
            current_view: View::Dashboard,
            filters: PaymentFilters::default(),
            next_id: 1,
            formatter,
        }
    }

    /// Load the sample records and draw the starting dashboard.
    pub fn initialize(&mut self, surface: &mut impl Surface) {
        self.load(seed::sample_providers(), seed::sample_payments(), surface);
    }

    /// Replace both collections and reset to the dashboard.
    pub fn load(
        &mut self,
        providers: Vec<Provider>,
        payments: Vec<Payment>,
        surface: &mut impl Surface,
    ) {
        self.next_id = payments.iter().map(|p| p.id.inner()).max().unwrap_or(0) + 1;
        self.providers = providers;
        self.payments = payments;
        self.filters = PaymentFilters::default();
        self.current_view = View::Dashboard;

        info!(
            "Loaded {} providers and {} payments",
            self.providers.len(),
            self.payments.len()
        );

        surface.activate_view(View::Dashboard);
        self.render_dashboard(surface);
        surface.show_provider_options(views::provider_options(&self.providers));
    }

    pub fn switch_view(&mut self, view: View, surface: &mut impl Surface) {
        debug!("Switching view: {:?} -> {:?}", self.current_view, view);
        self.current_view = view;
        surface.activate_view(view);
        self.render_view(view, surface);
    }

    pub fn render_dashboard(&self, surface: &mut impl Surface) {
        debug!("Rendering dashboard");
        surface.show_dashboard(self.dashboard());
    }

    /// Render the table using the filters last passed to [`Controller::apply_filters`].
    pub fn render_payments_table(&self, surface: &mut impl Surface) {
        debug!("Rendering payments table with filters {:?}", self.filters);
        surface.show_payments(self.payments_table());
    }

    pub fn render_providers(&self, surface: &mut impl Surface) {
        debug!("Rendering providers");
        surface.show_providers(self.providers_view());
    }

    pub fn apply_filters(&mut self, filters: PaymentFilters, surface: &mut impl Surface) {
        self.filters = filters;
        self.render_payments_table(surface);
    }

    pub fn add_payment(
        &mut self,
        fields: &PaymentFields,
        surface: &mut impl Surface,
    ) -> Result<PaymentId> {
        let new_payment = fields.validate().inspect_err(|e| {
            warn!("Rejected new payment: {}", e);
        })?;

        let id = PaymentId::new(self.next_id);
        self.next_id += 1;

        let payment = Payment::new(id, new_payment);
        info!(
            "Added payment {} ({} on {}, cost {})",
            id, payment.service_type, payment.service_date, payment.your_cost
        );
        self.payments.push(payment);

        surface.notify(PAYMENT_ADDED_MESSAGE);
        self.render_view(self.current_view, surface);

        Ok(id)
    }

    pub fn view_payment(&self, id: PaymentId, surface: &mut impl Surface) -> Result<PaymentDetail> {
        let Some(payment) = self.payment(id) else {
            warn!("Payment {} not found", id);
            return Err(Error::NotFound(id));
        };

        let detail = views::payment_detail(payment, &self.providers, &self.formatter);
        surface.show_payment_detail(detail.clone());
        Ok(detail)
    }

    /// Remove a payment. The caller is responsible for having confirmed the
    /// deletion; an unknown id removes nothing.
    pub fn delete_payment(&mut self, id: PaymentId, surface: &mut impl Surface) -> Option<Payment> {
        let removed = self
            .payments
            .iter()
            .position(|p| p.id == id)
            .map(|index| self.payments.remove(index));

        match removed {
            Some(_) => info!("Deleted payment {}", id),
            None => debug!("Payment {} already absent, nothing deleted", id),
        }

        self.render_payments_table(surface);
        if self.current_view == View::Dashboard {
            self.render_dashboard(surface);
        }

        removed
    }

    pub fn export_all(&self, surface: &mut impl Surface) -> Result<PathBuf> {
        let body = export_csv(&self.payments, &self.providers)?;
        let path = surface.deliver_file(&body, EXPORT_MIME_TYPE, EXPORT_FILENAME)?;
        info!(
            "Exported {} payments to {}",
            self.payments.len(),
            path.display()
        );
        Ok(path)
    }

    pub fn dashboard(&self) -> DashboardView {
        views::dashboard(&self.payments, &self.providers, &self.formatter)
    }

    pub fn payments_table(&self) -> PaymentsTableView {
        views::payments_table(
            &self.payments,
            &self.providers,
            &self.filters,
            &self.formatter,
        )
    }

    pub fn providers_view(&self) -> ProvidersView {
        views::provider_cards(&self.providers, &self.payments)
    }

    pub fn payment(&self, id: PaymentId) -> Option<&Payment> {
        self.payments.iter().find(|p| p.id == id)
    }

    pub fn payments(&self) -> &[Payment] {
        &self.payments
    }

    pub fn providers(&self) -> &[Provider] {
        &self.providers
    }

    pub fn current_view(&self) -> View {
        self.current_view
    }

    pub fn filters(&self) -> &PaymentFilters {
        &self.filters
    }

    pub fn formatter(&self) -> &Formatter {
        &self.formatter
    }

    fn render_view(&self, view: View, surface: &mut impl Surface) {
        match view {
            View::Dashboard => self.render_dashboard(surface),
            View::Payments => self.render_payments_table(surface),
            View::Providers => self.render_providers(surface),
        }
    }
}

impl Default for Controller {
    fn default() -> Self {
        Self::new(Formatter::default())
    }
}

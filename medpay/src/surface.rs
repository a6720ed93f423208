use std::path::PathBuf;

use crate::error::Result;
use crate::views::{
    DashboardView, PaymentDetail, PaymentsTableView, ProviderOptions, ProvidersView, View,
};

/// The display the controller renders into.
///
/// Each `show_*` call replaces the whole content of one display region. The
/// terminal UI state implements this; tests use
/// [`RecordingSurface`](crate::testing::RecordingSurface).
pub trait Surface {
    /// Make `view` the visible tab.
    fn activate_view(&mut self, view: View);

    fn show_dashboard(&mut self, dashboard: DashboardView);

    fn show_payments(&mut self, table: PaymentsTableView);

    fn show_providers(&mut self, providers: ProvidersView);

    /// Replace both provider selection lists.
    fn show_provider_options(&mut self, options: ProviderOptions);

    fn show_payment_detail(&mut self, detail: PaymentDetail);

    /// Show a transient message to the user.
    fn notify(&mut self, message: &str);

    /// Hand a generated document to the user, returning where it ended up.
    fn deliver_file(&mut self, body: &str, mime_type: &str, filename: &str) -> Result<PathBuf>;
}

pub mod form;

pub use form::PaymentFormState;

use medpay_model::PaymentId;
use ratatui::widgets::TableState;
use std::cell::RefCell;
use std::path::PathBuf;

use crate::error::Result;
use crate::surface::Surface;
use crate::views::{
    DashboardView, PaymentDetail, PaymentRow, PaymentsTableView, ProviderOptions, ProvidersView,
    View,
};

/// Represents input mode for the main screens
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    #[default]
    Normal,
    DateFilter,
    PaymentForm,
    DeleteConfirmation,
}

/// Modal content layered over the current screen
#[derive(Debug, Clone, PartialEq)]
pub enum Popup {
    Notice(String),
    Detail(PaymentDetail),
}

#[derive(Default, Debug, Clone)]
pub struct PaymentsState {
    pub table: PaymentsTableView,
    pub table_state: RefCell<TableState>,
    /// Minimum-date filter being typed; applied on Enter.
    pub date_filter_input: String,
}

impl PaymentsState {
    pub fn selected_row(&self) -> Option<&PaymentRow> {
        let index = self.table_state.borrow().selected()?;
        self.table.rows.get(index)
    }

    fn replace_table(&mut self, table: PaymentsTableView) {
        let len = table.rows.len();
        self.table = table;

        let mut table_state = self.table_state.borrow_mut();
        match table_state.selected() {
            _ if len == 0 => table_state.select(None),
            Some(index) if index >= len => table_state.select(Some(len - 1)),
            Some(_) => {}
            None => table_state.select(Some(0)),
        }
    }
}

#[derive(Default, Debug, Clone)]
pub struct LogsState {
    pub scroll_offset: usize, // Lines scrolled up from bottom (0 = showing latest)
    pub total_entries: usize,
}

/// Everything the terminal draws. Display regions are filled in by the
/// controller through the [`Surface`] implementation below.
#[derive(Debug, Clone)]
pub struct AppState {
    pub active_view: View,
    pub dashboard: DashboardView,
    pub payments: PaymentsState,
    pub providers: ProvidersView,
    pub provider_options: ProviderOptions,

    pub input_mode: InputMode,
    pub form_state: Option<PaymentFormState>,
    pub delete_confirmation_payment_id: Option<PaymentId>,
    pub popup: Option<Popup>,

    /// Set while the session log screen is open.
    pub logs: Option<LogsState>,
    pub export_dir: PathBuf,

    pub help_visible: bool,
    pub pending_key: Option<char>,

    pub should_quit: bool,
}

impl AppState {
    pub fn new(export_dir: impl Into<PathBuf>) -> Self {
        Self {
            active_view: View::Dashboard,
            dashboard: DashboardView::default(),
            payments: PaymentsState::default(),
            providers: ProvidersView::default(),
            provider_options: ProviderOptions::default(),

            input_mode: InputMode::Normal,
            form_state: None,
            delete_confirmation_payment_id: None,
            popup: None,

            logs: None,
            export_dir: export_dir.into(),

            help_visible: false,
            pending_key: None,

            should_quit: false,
        }
    }

    pub fn on_logs_screen(&self) -> bool {
        self.logs.is_some()
    }

    pub fn notice(&self) -> Option<&str> {
        match &self.popup {
            Some(Popup::Notice(message)) => Some(message),
            _ => None,
        }
    }

    pub fn reset_input_mode(&mut self) {
        self.input_mode = InputMode::Normal;
        self.form_state = None;
        self.delete_confirmation_payment_id = None;
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(".")
    }
}

impl Surface for AppState {
    fn activate_view(&mut self, view: View) {
        tracing::debug!("Activating view {:?}", view);
        self.active_view = view;
    }

    fn show_dashboard(&mut self, dashboard: DashboardView) {
        self.dashboard = dashboard;
    }

    fn show_payments(&mut self, table: PaymentsTableView) {
        self.payments.replace_table(table);
    }

    fn show_providers(&mut self, providers: ProvidersView) {
        self.providers = providers;
    }

    fn show_provider_options(&mut self, options: ProviderOptions) {
        self.provider_options = options;
    }

    fn show_payment_detail(&mut self, detail: PaymentDetail) {
        self.popup = Some(Popup::Detail(detail));
    }

    fn notify(&mut self, message: &str) {
        self.popup = Some(Popup::Notice(message.to_string()));
    }

    fn deliver_file(&mut self, body: &str, mime_type: &str, filename: &str) -> Result<PathBuf> {
        std::fs::create_dir_all(&self.export_dir)?;
        let path = self.export_dir.join(filename);
        std::fs::write(&path, body)?;
        tracing::debug!("Wrote {} bytes of {} to {}", body.len(), mime_type, path.display());
        Ok(path)
    }
}

pub trait Scrollable {
    fn num_items(&self) -> usize;
    fn table_state(&self) -> &RefCell<TableState>;

    fn select_prev(&mut self) {
        let num_items = self.num_items();
        let mut table_state = self.table_state().borrow_mut();
        if num_items > 0 {
            match table_state.selected() {
                Some(0) | None => table_state.select(Some(num_items - 1)),
                Some(index) => table_state.select(Some(index.min(num_items) - 1)),
            }
        }
    }

    fn select_next(&mut self) {
        let num_items = self.num_items();
        let mut table_state = self.table_state().borrow_mut();
        if num_items > 0 {
            match table_state.selected() {
                Some(index) if index + 1 < num_items => table_state.select(Some(index + 1)),
                _ => table_state.select(Some(0)),
            }
        }
    }

    fn select_top(&mut self) {
        if self.num_items() > 0 {
            self.table_state().borrow_mut().select(Some(0));
        }
    }

    fn select_bottom(&mut self) {
        let num_items = self.num_items();
        if num_items > 0 {
            self.table_state().borrow_mut().select(Some(num_items - 1));
        }
    }
}

impl Scrollable for PaymentsState {
    fn num_items(&self) -> usize {
        self.table.rows.len()
    }

    fn table_state(&self) -> &RefCell<TableState> {
        &self.table_state
    }
}

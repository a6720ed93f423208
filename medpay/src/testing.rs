use std::path::{Path, PathBuf};

use crate::app_core::AppCore;
use crate::config::Settings;
use crate::controller::Controller;
use crate::error::{Error, Result};
use crate::input::{Key, KeyEvent};
use crate::state::AppState;
use crate::surface::Surface;
use crate::views::{
    DashboardView, PaymentDetail, PaymentsTableView, ProviderOptions, ProvidersView, View,
};

/// One call made against a [`RecordingSurface`]
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCall {
    ActivateView(View),
    Dashboard(DashboardView),
    Payments(PaymentsTableView),
    Providers(ProvidersView),
    ProviderOptions(ProviderOptions),
    PaymentDetail(PaymentDetail),
    Notify(String),
    DeliverFile {
        body: String,
        mime_type: String,
        filename: String,
    },
}

/// Surface that records every call for later inspection
///
/// Deliveries are not written anywhere; the returned path is just the
/// filename. Set `fail_delivery` to simulate a failing download.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub calls: Vec<SurfaceCall>,
    pub fail_delivery: bool,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }

    pub fn notifications(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                SurfaceCall::Notify(message) => Some(message.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn last_dashboard(&self) -> Option<&DashboardView> {
        self.calls.iter().rev().find_map(|call| match call {
            SurfaceCall::Dashboard(dashboard) => Some(dashboard),
            _ => None,
        })
    }

    pub fn last_payments(&self) -> Option<&PaymentsTableView> {
        self.calls.iter().rev().find_map(|call| match call {
            SurfaceCall::Payments(table) => Some(table),
            _ => None,
        })
    }

    pub fn last_providers(&self) -> Option<&ProvidersView> {
        self.calls.iter().rev().find_map(|call| match call {
            SurfaceCall::Providers(providers) => Some(providers),
            _ => None,
        })
    }

    pub fn last_provider_options(&self) -> Option<&ProviderOptions> {
        self.calls.iter().rev().find_map(|call| match call {
            SurfaceCall::ProviderOptions(options) => Some(options),
            _ => None,
        })
    }

    pub fn last_detail(&self) -> Option<&PaymentDetail> {
        self.calls.iter().rev().find_map(|call| match call {
            SurfaceCall::PaymentDetail(detail) => Some(detail),
            _ => None,
        })
    }

    /// `(body, mime_type, filename)` of the latest delivery
    pub fn last_delivery(&self) -> Option<(&str, &str, &str)> {
        self.calls.iter().rev().find_map(|call| match call {
            SurfaceCall::DeliverFile {
                body,
                mime_type,
                filename,
            } => Some((body.as_str(), mime_type.as_str(), filename.as_str())),
            _ => None,
        })
    }
}

impl Surface for RecordingSurface {
    fn activate_view(&mut self, view: View) {
        self.calls.push(SurfaceCall::ActivateView(view));
    }

    fn show_dashboard(&mut self, dashboard: DashboardView) {
        self.calls.push(SurfaceCall::Dashboard(dashboard));
    }

    fn show_payments(&mut self, table: PaymentsTableView) {
        self.calls.push(SurfaceCall::Payments(table));
    }

    fn show_providers(&mut self, providers: ProvidersView) {
        self.calls.push(SurfaceCall::Providers(providers));
    }

    fn show_provider_options(&mut self, options: ProviderOptions) {
        self.calls.push(SurfaceCall::ProviderOptions(options));
    }

    fn show_payment_detail(&mut self, detail: PaymentDetail) {
        self.calls.push(SurfaceCall::PaymentDetail(detail));
    }

    fn notify(&mut self, message: &str) {
        self.calls.push(SurfaceCall::Notify(message.to_string()));
    }

    fn deliver_file(&mut self, body: &str, mime_type: &str, filename: &str) -> Result<PathBuf> {
        if self.fail_delivery {
            return Err(Error::Io(std::io::Error::other("delivery refused")));
        }
        self.calls.push(SurfaceCall::DeliverFile {
            body: body.to_string(),
            mime_type: mime_type.to_string(),
            filename: filename.to_string(),
        });
        Ok(PathBuf::from(filename))
    }
}

/// Drives an [`AppCore`] with synthetic key presses
pub struct TestApp {
    core: AppCore,
}

impl TestApp {
    /// Create a test app with default settings and the sample records
    pub fn new() -> Self {
        Self::with_settings(&Settings::default())
    }

    pub fn with_settings(settings: &Settings) -> Self {
        Self {
            core: AppCore::new(settings),
        }
    }

    /// Create a test app whose exports land in `dir`
    pub fn with_export_dir(dir: impl AsRef<Path>) -> Self {
        let settings = Settings {
            export_dir: dir.as_ref().to_path_buf(),
            ..Settings::default()
        };
        Self::with_settings(&settings)
    }

    /// Send a single key event
    pub fn send_key(&mut self, key: Key) {
        self.core.handle_key(KeyEvent::new(key));
    }

    /// Send a key event with modifiers
    pub fn send_key_event(&mut self, event: KeyEvent) {
        self.core.handle_key(event);
    }

    /// Send multiple keys in sequence
    pub fn send_keys(&mut self, keys: &[Key]) {
        for key in keys {
            self.send_key(*key);
        }
    }

    /// Send each character of `text` as a key press
    pub fn type_text(&mut self, text: &str) {
        for c in text.chars() {
            self.send_key(Key::Char(c));
        }
    }

    /// Get read-only access to current state
    pub fn state(&self) -> &AppState {
        self.core.state()
    }

    pub fn controller(&self) -> &Controller {
        self.core.controller()
    }

    /// Assert that the app is showing a specific tab
    pub fn assert_view(&self, expected: View) {
        assert_eq!(
            self.state().active_view,
            expected,
            "Expected different view. Current: {:?}",
            self.state().active_view
        );
    }

    /// Assert that the app should quit
    pub fn assert_should_quit(&self) {
        assert!(
            self.core.should_quit(),
            "App should be marked for quit but is not"
        );
    }

    /// Assert that the app should NOT quit
    pub fn assert_not_quit(&self) {
        assert!(
            !self.core.should_quit(),
            "App should NOT be marked for quit but is"
        );
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

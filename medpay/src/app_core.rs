use crate::commands::{executor, handlers};
use crate::config::Settings;
use crate::controller::Controller;
use crate::events::AppCommand;
use crate::format::Formatter;
use crate::input::KeyEvent;
use crate::state::AppState;

/// Testable application core without terminal dependencies
///
/// Owns the UI state (which doubles as the controller's surface) and the
/// controller. The terminal loop and [`TestApp`](crate::testing::TestApp)
/// both drive the app through this type.
pub struct AppCore {
    ui_state: AppState,
    controller: Controller,
}

impl AppCore {
    /// Build the core and load the starting records
    pub fn new(settings: &Settings) -> Self {
        let mut ui_state = AppState::new(settings.export_dir.clone());
        let mut controller = Controller::new(Formatter::from(settings));
        controller.initialize(&mut ui_state);

        Self {
            ui_state,
            controller,
        }
    }

    /// Translate a key press into a command and execute it
    pub fn handle_key(&mut self, event: KeyEvent) {
        if let Some(command) = handlers::handle_key_input(event, &self.ui_state) {
            self.execute(command);
        }
    }

    pub fn execute(&mut self, command: AppCommand) {
        // Don't log while on the logs screen to avoid a feedback loop
        if !self.ui_state.on_logs_screen() {
            tracing::debug!("Executing command: {:?}", command);
        }
        executor::execute_command(command, &mut self.ui_state, &mut self.controller);
    }

    /// Read-only access to the UI state (for rendering or assertions)
    pub fn state(&self) -> &AppState {
        &self.ui_state
    }

    pub(crate) fn state_mut(&mut self) -> &mut AppState {
        &mut self.ui_state
    }

    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    pub fn should_quit(&self) -> bool {
        self.ui_state.should_quit
    }
}

pub mod components;
pub mod layouts;
pub mod screens;
pub mod theme;

use crate::log_buffer::LogBuffer;
use crate::state::{AppState, InputMode, Popup};
use crate::views::View;
use ratatui::Frame;
use screens::*;

/// Pure render dispatcher - routes to appropriate screen renderer
/// This function is read-only and never mutates state
pub fn render_app(f: &mut Frame, state: &AppState, log_buffer: &LogBuffer) {
    if let Some(ref logs_state) = state.logs {
        logs_screen::render(f, logs_state, log_buffer);
    } else {
        match state.active_view {
            View::Dashboard => dashboard_screen::render(f, &state.dashboard),
            View::Payments => payments_screen::render(
                f,
                &state.payments,
                state.input_mode,
                &state.provider_options.filter,
            ),
            View::Providers => providers_screen::render(f, &state.providers),
        }
    }

    match state.input_mode {
        InputMode::PaymentForm => {
            if let Some(ref form) = state.form_state {
                components::payment_form::render_payment_form(
                    f,
                    form,
                    &state.provider_options.form,
                );
            }
        }
        InputMode::DeleteConfirmation => {
            if let Some(payment_id) = state.delete_confirmation_payment_id {
                let row = state
                    .payments
                    .table
                    .rows
                    .iter()
                    .find(|row| row.payment_id == payment_id);
                components::delete_confirmation::render_delete_confirmation(f, row);
            }
        }
        InputMode::Normal | InputMode::DateFilter => {}
    }

    // Render help popup on top if visible
    if state.help_visible {
        components::help_popup::render_help_popup(f, state);
    }

    // Notices and details sit above everything else
    match state.popup {
        Some(Popup::Notice(ref message)) => components::popup::render_notice(f, message),
        Some(Popup::Detail(ref detail)) => {
            components::payment_detail::render_payment_detail(f, detail)
        }
        None => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::Controller;
    use crate::surface::Surface;
    use ratatui::{backend::TestBackend, Terminal};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn draw(state: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(140, 40)).unwrap();
        let log_buffer = LogBuffer::new(10);
        terminal
            .draw(|f| render_app(f, state, &log_buffer))
            .unwrap();
        buffer_text(&terminal)
    }

    fn started(view: View) -> AppState {
        let mut controller = Controller::default();
        let mut state = AppState::default();
        controller.initialize(&mut state);
        controller.switch_view(view, &mut state);
        state
    }

    #[test]
    fn dashboard_shows_totals() {
        let screen = draw(&started(View::Dashboard));
        assert!(screen.contains("Total Payments"));
        assert!(screen.contains("$1375.00"));
        assert!(screen.contains("$126.00"));
        assert!(screen.contains("Recent Activity"));
    }

    #[test]
    fn payments_table_lists_rows() {
        let screen = draw(&started(View::Payments));
        assert!(screen.contains("Payments (5)"));
        assert!(screen.contains("Showing all payments"));
    }

    #[test]
    fn providers_screen_shows_cards() {
        let screen = draw(&started(View::Providers));
        assert!(screen.contains("visit"));
    }

    #[test]
    fn notice_is_drawn_over_the_screen() {
        let mut state = started(View::Dashboard);
        state.notify("Payment added successfully!");
        let screen = draw(&state);
        assert!(screen.contains("Payment added successfully!"));
    }
}

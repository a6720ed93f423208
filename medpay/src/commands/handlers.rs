use crate::events::AppCommand;
use crate::filters::ProviderFilter;
use crate::input::{Key, KeyEvent};
use crate::state::*;
use crate::views::View;

/// Map user input (KeyEvent) to AppCommand based on current UI state
/// Returns None if the key should be ignored
pub fn handle_key_input(event: KeyEvent, state: &AppState) -> Option<AppCommand> {
    let key = event.key;

    // Priority 0: any open popup swallows the next key
    if state.popup.is_some() {
        return Some(AppCommand::DismissPopup);
    }

    // Priority 1: add-payment form
    if state.input_mode == InputMode::PaymentForm {
        return handle_payment_form_keys(event, state);
    }

    // Priority 2: delete confirmation popup
    if state.input_mode == InputMode::DeleteConfirmation {
        return handle_delete_confirmation_keys(key, state);
    }

    // Priority 3: typing the minimum-date filter
    if state.input_mode == InputMode::DateFilter {
        return match key {
            Key::Enter => Some(AppCommand::ApplyDateFilter),
            Key::Esc => Some(AppCommand::ClearDateFilter),
            Key::Backspace => Some(AppCommand::DeleteDateFilterChar),
            Key::Char(c) => Some(AppCommand::AppendDateFilterChar(c)),
            _ => None,
        };
    }

    // Priority 4: help popup
    if state.help_visible {
        return match key {
            Key::Char('?') | Key::Esc => Some(AppCommand::ToggleHelp),
            Key::Char('q') => Some(AppCommand::Quit),
            _ => None,
        };
    }

    // Multi-key sequences
    if let Some(pending) = state.pending_key {
        return match (pending, key) {
            ('g', Key::Char('g')) => Some(AppCommand::NavigateToTop),
            ('g', Key::Char('l')) => Some(AppCommand::NavigateToLogs),
            _ => Some(AppCommand::ClearPendingKey),
        };
    }

    if state.on_logs_screen() {
        return handle_logs_keys(key);
    }

    match (state.active_view, key) {
        (_, Key::Char('?')) => Some(AppCommand::ToggleHelp),
        (_, Key::Char('q')) => Some(AppCommand::Quit),
        (_, Key::Char('g')) => Some(AppCommand::SetPendingKey('g')),
        (_, Key::Char('G')) => Some(AppCommand::NavigateToBottom),

        // Tabs
        (_, Key::Char('1')) => Some(AppCommand::SwitchView(View::Dashboard)),
        (_, Key::Char('2')) => Some(AppCommand::SwitchView(View::Payments)),
        (_, Key::Char('3')) => Some(AppCommand::SwitchView(View::Providers)),
        (_, Key::Tab) => Some(AppCommand::NextView),
        (_, Key::BackTab) => Some(AppCommand::PreviousView),

        (_, Key::Char('n')) => Some(AppCommand::EnterPaymentForm),
        (_, Key::Char('e')) => Some(AppCommand::ExportAll),

        // Payments screen
        (View::Payments, Key::Up | Key::Char('k')) => Some(AppCommand::SelectPrevious),
        (View::Payments, Key::Down | Key::Char('j')) => Some(AppCommand::SelectNext),
        (View::Payments, Key::Home) => Some(AppCommand::NavigateToTop),
        (View::Payments, Key::End) => Some(AppCommand::NavigateToBottom),
        (View::Payments, Key::Enter | Key::Char('v')) => {
            let row = state.payments.selected_row()?;
            Some(AppCommand::ViewPayment {
                payment_id: row.payment_id,
            })
        }
        (View::Payments, Key::Backspace | Key::Char('d')) => {
            let row = state.payments.selected_row()?;
            Some(AppCommand::InitiateDelete {
                payment_id: row.payment_id,
            })
        }
        (View::Payments, Key::Char('s')) => Some(AppCommand::SetStatusFilter(
            state.payments.table.filters.status.next(),
        )),
        (View::Payments, Key::Char('p')) => {
            Some(AppCommand::SetProviderFilter(next_provider_filter(state)))
        }
        (View::Payments, Key::Char('/')) => Some(AppCommand::EnterDateFilterMode),
        (View::Payments, Key::Char('x') | Key::Esc) => Some(AppCommand::ClearFilters),

        // Ignore other keys
        _ => None,
    }
}

/// Handle keyboard input when the add-payment form is open
fn handle_payment_form_keys(event: KeyEvent, state: &AppState) -> Option<AppCommand> {
    let key = event.key;

    // Ctrl+L to clear current field
    if event.modifiers.ctrl && matches!(key, Key::Char('l')) {
        return Some(AppCommand::ClearFormField);
    }

    let on_choice = state
        .form_state
        .as_ref()
        .is_some_and(|form| form.current_field.is_choice());

    match key {
        Key::Esc => Some(AppCommand::ExitPaymentForm),
        Key::Enter => Some(AppCommand::SubmitPaymentForm),
        Key::Tab | Key::Down => Some(AppCommand::NavigateFormField { forward: true }),
        Key::BackTab | Key::Up => Some(AppCommand::NavigateFormField { forward: false }),
        Key::Right if on_choice => Some(AppCommand::CycleFormChoice { forward: true }),
        Key::Left if on_choice => Some(AppCommand::CycleFormChoice { forward: false }),
        Key::Char(' ') if on_choice => Some(AppCommand::CycleFormChoice { forward: true }),
        Key::Backspace => Some(AppCommand::DeleteFormFieldChar),
        _ => event
            .text()
            .map(|c| AppCommand::AppendFormFieldChar { c }),
    }
}

/// Handle keyboard input when in delete confirmation mode
fn handle_delete_confirmation_keys(key: Key, state: &AppState) -> Option<AppCommand> {
    match key {
        // Confirm deletion with 'y'
        Key::Char('y') | Key::Char('Y') => state
            .delete_confirmation_payment_id
            .map(|payment_id| AppCommand::ConfirmDelete { payment_id }),

        // Any other key cancels
        _ => Some(AppCommand::CancelDelete),
    }
}

fn handle_logs_keys(key: Key) -> Option<AppCommand> {
    match key {
        Key::Char('?') => Some(AppCommand::ToggleHelp),
        Key::Char('q') => Some(AppCommand::Quit),
        Key::Char('g') => Some(AppCommand::SetPendingKey('g')),
        Key::Char('G') => Some(AppCommand::NavigateToBottom),
        Key::Up | Key::Char('k') => Some(AppCommand::ScrollLogsUp),
        Key::Down | Key::Char('j') => Some(AppCommand::ScrollLogsDown),
        Key::PageUp => Some(AppCommand::ScrollLogsPageUp),
        Key::PageDown => Some(AppCommand::ScrollLogsPageDown),
        Key::Esc | Key::Left | Key::Char('h') => Some(AppCommand::NavigateBack),
        _ => None,
    }
}

/// The provider filter option after the current one, wrapping to "all".
fn next_provider_filter(state: &AppState) -> ProviderFilter {
    let options = &state.provider_options.filter;
    let current = state.payments.table.filters.provider.value();

    let next = options
        .iter()
        .position(|o| o.value == current)
        .and_then(|index| options.get(index + 1))
        .or_else(|| options.first());

    next.map(|o| ProviderFilter::from_value(&o.value))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::{Controller, PaymentField};
    use crate::filters::StatusFilter;
    use medpay_model::{PaymentId, PaymentStatus};

    fn started_state(view: View) -> AppState {
        let mut controller = Controller::default();
        let mut state = AppState::default();
        controller.initialize(&mut state);
        controller.switch_view(view, &mut state);
        state
    }

    fn press(state: &AppState, key: Key) -> Option<AppCommand> {
        handle_key_input(KeyEvent::new(key), state)
    }

    // ============================================================================
    // Global Commands
    // ============================================================================

    #[test]
    fn test_quit_command() {
        let state = started_state(View::Dashboard);
        assert_eq!(press(&state, Key::Char('q')), Some(AppCommand::Quit));
    }

    #[test]
    fn test_number_keys_switch_views() {
        let state = started_state(View::Dashboard);
        assert_eq!(
            press(&state, Key::Char('2')),
            Some(AppCommand::SwitchView(View::Payments))
        );
        assert_eq!(
            press(&state, Key::Char('3')),
            Some(AppCommand::SwitchView(View::Providers))
        );
        assert_eq!(press(&state, Key::Tab), Some(AppCommand::NextView));
    }

    #[test]
    fn test_help_visible_blocks_other_commands() {
        let mut state = started_state(View::Payments);
        state.help_visible = true;

        assert_eq!(press(&state, Key::Char('j')), None);
        assert_eq!(press(&state, Key::Char('n')), None);
        assert_eq!(press(&state, Key::Esc), Some(AppCommand::ToggleHelp));
        assert_eq!(press(&state, Key::Char('q')), Some(AppCommand::Quit));
    }

    #[test]
    fn test_popup_swallows_keys() {
        let mut state = started_state(View::Payments);
        state.popup = Some(Popup::Notice("hello".to_string()));
        assert_eq!(press(&state, Key::Char('q')), Some(AppCommand::DismissPopup));
    }

    // ============================================================================
    // Multi-key Sequences
    // ============================================================================

    #[test]
    fn test_g_sequences() {
        let mut state = started_state(View::Payments);
        assert_eq!(press(&state, Key::Char('g')), Some(AppCommand::SetPendingKey('g')));

        state.pending_key = Some('g');
        assert_eq!(press(&state, Key::Char('g')), Some(AppCommand::NavigateToTop));
        assert_eq!(press(&state, Key::Char('l')), Some(AppCommand::NavigateToLogs));
        assert_eq!(press(&state, Key::Char('z')), Some(AppCommand::ClearPendingKey));
    }

    // ============================================================================
    // Payments Screen
    // ============================================================================

    #[test]
    fn test_row_actions_use_selected_payment() {
        let state = started_state(View::Payments);
        state.payments.table_state.borrow_mut().select(Some(2));

        assert_eq!(
            press(&state, Key::Enter),
            Some(AppCommand::ViewPayment {
                payment_id: PaymentId::new(3)
            })
        );
        assert_eq!(
            press(&state, Key::Char('d')),
            Some(AppCommand::InitiateDelete {
                payment_id: PaymentId::new(3)
            })
        );
    }

    #[test]
    fn test_row_actions_ignored_on_other_views() {
        let state = started_state(View::Dashboard);
        assert_eq!(press(&state, Key::Char('d')), None);
        assert_eq!(press(&state, Key::Char('j')), None);
    }

    #[test]
    fn test_status_filter_cycles() {
        let state = started_state(View::Payments);
        assert_eq!(
            press(&state, Key::Char('s')),
            Some(AppCommand::SetStatusFilter(StatusFilter::Only(
                PaymentStatus::Paid
            )))
        );
    }

    #[test]
    fn test_provider_filter_cycles_through_options() {
        let mut state = started_state(View::Payments);
        assert_eq!(
            press(&state, Key::Char('p')),
            Some(AppCommand::SetProviderFilter(ProviderFilter::from_value("1")))
        );

        state.payments.table.filters.provider = ProviderFilter::from_value("5");
        assert_eq!(
            press(&state, Key::Char('p')),
            Some(AppCommand::SetProviderFilter(ProviderFilter::All))
        );
    }

    #[test]
    fn test_date_filter_mode_keys() {
        let mut state = started_state(View::Payments);
        assert_eq!(press(&state, Key::Char('/')), Some(AppCommand::EnterDateFilterMode));

        state.input_mode = InputMode::DateFilter;
        assert_eq!(
            press(&state, Key::Char('2')),
            Some(AppCommand::AppendDateFilterChar('2'))
        );
        assert_eq!(press(&state, Key::Enter), Some(AppCommand::ApplyDateFilter));
        assert_eq!(press(&state, Key::Esc), Some(AppCommand::ClearDateFilter));
    }

    // ============================================================================
    // Form and Confirmation
    // ============================================================================

    #[test]
    fn test_form_keys() {
        let mut state = started_state(View::Dashboard);
        state.input_mode = InputMode::PaymentForm;
        state.form_state = Some(PaymentFormState::new("2024-01-01"));

        assert_eq!(
            press(&state, Key::Char('q')),
            Some(AppCommand::AppendFormFieldChar { c: 'q' })
        );
        assert_eq!(press(&state, Key::Enter), Some(AppCommand::SubmitPaymentForm));
        assert_eq!(press(&state, Key::Esc), Some(AppCommand::ExitPaymentForm));
        assert_eq!(
            handle_key_input(KeyEvent::with_ctrl(Key::Char('l')), &state),
            Some(AppCommand::ClearFormField)
        );
        assert_eq!(press(&state, Key::Right), None);

        if let Some(form) = state.form_state.as_mut() {
            form.current_field = PaymentField::Status;
        }
        assert_eq!(
            press(&state, Key::Right),
            Some(AppCommand::CycleFormChoice { forward: true })
        );
    }

    #[test]
    fn test_delete_confirmation_keys() {
        let mut state = started_state(View::Payments);
        state.input_mode = InputMode::DeleteConfirmation;
        state.delete_confirmation_payment_id = Some(PaymentId::new(2));

        assert_eq!(
            press(&state, Key::Char('y')),
            Some(AppCommand::ConfirmDelete {
                payment_id: PaymentId::new(2)
            })
        );
        assert_eq!(press(&state, Key::Char('n')), Some(AppCommand::CancelDelete));
        assert_eq!(press(&state, Key::Esc), Some(AppCommand::CancelDelete));
    }

    #[test]
    fn test_logs_screen_keys() {
        let mut state = started_state(View::Payments);
        state.logs = Some(LogsState::default());

        assert_eq!(press(&state, Key::Char('k')), Some(AppCommand::ScrollLogsUp));
        assert_eq!(press(&state, Key::Char('h')), Some(AppCommand::NavigateBack));
        assert_eq!(press(&state, Key::Char('d')), None);
    }
}

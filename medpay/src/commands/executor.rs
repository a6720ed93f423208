use medpay_model::parse_service_date;

use crate::controller::Controller;
use crate::events::AppCommand;
use crate::filters::PaymentFilters;
use crate::state::*;
use crate::surface::Surface;
use crate::utils::dates::append_iso_date_char;
use crate::views::View;

const LOGS_PAGE_SIZE: usize = 20;

/// Apply a command to the UI state, routing record operations through the
/// controller so that the affected regions are re-rendered.
pub fn execute_command(command: AppCommand, state: &mut AppState, controller: &mut Controller) {
    // Save whether we're setting a pending key (we don't want to clear it in that case)
    let is_setting_pending_key = matches!(command, AppCommand::SetPendingKey(_));

    match command {
        AppCommand::SelectNext => {
            if state.active_view == View::Payments {
                state.payments.select_next();
            }
        }
        AppCommand::SelectPrevious => {
            if state.active_view == View::Payments {
                state.payments.select_prev();
            }
        }
        AppCommand::NavigateToTop => {
            if let Some(logs) = state.logs.as_mut() {
                logs.scroll_offset = logs.total_entries.saturating_sub(1);
            } else if state.active_view == View::Payments {
                state.payments.select_top();
            }
        }
        AppCommand::NavigateToBottom => {
            if let Some(logs) = state.logs.as_mut() {
                logs.scroll_offset = 0;
            } else if state.active_view == View::Payments {
                state.payments.select_bottom();
            }
        }

        AppCommand::SwitchView(view) => controller.switch_view(view, state),
        AppCommand::NextView => controller.switch_view(state.active_view.next(), state),
        AppCommand::PreviousView => controller.switch_view(state.active_view.previous(), state),
        AppCommand::NavigateToLogs => {
            // No logging here: the logs screen would record its own navigation
            state.logs = Some(LogsState::default());
        }
        AppCommand::NavigateBack => {
            state.logs = None;
        }

        AppCommand::ViewPayment { payment_id } => {
            if let Err(e) = controller.view_payment(payment_id, state) {
                state.notify(&e.to_string());
            }
        }
        AppCommand::InitiateDelete { payment_id } => {
            state.delete_confirmation_payment_id = Some(payment_id);
            state.input_mode = InputMode::DeleteConfirmation;
        }
        AppCommand::ConfirmDelete { payment_id } => {
            state.reset_input_mode();
            controller.delete_payment(payment_id, state);
        }
        AppCommand::CancelDelete => {
            tracing::debug!("Delete cancelled");
            state.reset_input_mode();
        }

        AppCommand::SetStatusFilter(status) => {
            let filters = PaymentFilters {
                status,
                ..controller.filters().clone()
            };
            controller.apply_filters(filters, state);
        }
        AppCommand::SetProviderFilter(provider) => {
            let filters = PaymentFilters {
                provider,
                ..controller.filters().clone()
            };
            controller.apply_filters(filters, state);
        }
        AppCommand::EnterDateFilterMode => {
            state.payments.date_filter_input = controller.filters().min_date.clone();
            state.input_mode = InputMode::DateFilter;
        }
        AppCommand::AppendDateFilterChar(c) => {
            if let Some(input) = append_iso_date_char(&state.payments.date_filter_input, c) {
                state.payments.date_filter_input = input;
            }
        }
        AppCommand::DeleteDateFilterChar => {
            state.payments.date_filter_input.pop();
        }
        AppCommand::ApplyDateFilter => {
            let input = state.payments.date_filter_input.clone();
            let min_date = if input.is_empty() {
                Ok(String::new())
            } else {
                parse_service_date(&input)
            };

            match min_date {
                Ok(min_date) => {
                    state.input_mode = InputMode::Normal;
                    let filters = PaymentFilters {
                        min_date,
                        ..controller.filters().clone()
                    };
                    controller.apply_filters(filters, state);
                }
                Err(e) => {
                    tracing::warn!("Ignoring date filter: {}", e);
                    state.notify(&e.to_string());
                }
            }
        }
        AppCommand::ClearDateFilter => {
            state.input_mode = InputMode::Normal;
            state.payments.date_filter_input.clear();
            let filters = PaymentFilters {
                min_date: String::new(),
                ..controller.filters().clone()
            };
            controller.apply_filters(filters, state);
        }
        AppCommand::ClearFilters => {
            state.payments.date_filter_input.clear();
            controller.apply_filters(PaymentFilters::default(), state);
        }

        AppCommand::EnterPaymentForm => {
            state.form_state = Some(PaymentFormState::today());
            state.input_mode = InputMode::PaymentForm;
        }
        AppCommand::ExitPaymentForm => {
            state.reset_input_mode();
        }
        AppCommand::NavigateFormField { forward } => {
            if let Some(form) = state.form_state.as_mut() {
                form.navigate(forward);
            }
        }
        AppCommand::AppendFormFieldChar { c } => {
            if let Some(form) = state.form_state.as_mut() {
                form.append_char(c);
            }
        }
        AppCommand::DeleteFormFieldChar => {
            if let Some(form) = state.form_state.as_mut() {
                form.delete_char();
            }
        }
        AppCommand::ClearFormField => {
            if let Some(form) = state.form_state.as_mut() {
                form.clear_field();
            }
        }
        AppCommand::CycleFormChoice { forward } => {
            let option_count = state.provider_options.form.len();
            if let Some(form) = state.form_state.as_mut() {
                form.cycle_choice(forward, option_count);
            }
        }
        AppCommand::SubmitPaymentForm => {
            let fields = state
                .form_state
                .as_ref()
                .map(|form| form.to_fields(&state.provider_options.form));

            if let Some(fields) = fields {
                match controller.add_payment(&fields, state) {
                    Ok(_) => state.reset_input_mode(),
                    Err(e) if e.is_validation() => {
                        if let Some(form) = state.form_state.as_mut() {
                            form.validation_error = Some(e.to_string());
                        }
                    }
                    Err(e) => state.notify(&e.to_string()),
                }
            }
        }

        AppCommand::ExportAll => match controller.export_all(state) {
            Ok(path) => {
                let message = format!(
                    "Exported {} payments to {}",
                    controller.payments().len(),
                    path.display()
                );
                state.notify(&message);
            }
            Err(e) => {
                tracing::error!("Export failed: {}", e);
                state.notify(&format!("Export failed: {}", e));
            }
        },
        AppCommand::DismissPopup => {
            state.popup = None;
        }

        AppCommand::ScrollLogsUp => {
            if let Some(logs) = state.logs.as_mut() {
                // Up goes back in time
                if logs.scroll_offset < logs.total_entries.saturating_sub(1) {
                    logs.scroll_offset += 1;
                }
            }
        }
        AppCommand::ScrollLogsDown => {
            if let Some(logs) = state.logs.as_mut() {
                logs.scroll_offset = logs.scroll_offset.saturating_sub(1);
            }
        }
        AppCommand::ScrollLogsPageUp => {
            if let Some(logs) = state.logs.as_mut() {
                logs.scroll_offset = (logs.scroll_offset + LOGS_PAGE_SIZE)
                    .min(logs.total_entries.saturating_sub(1));
            }
        }
        AppCommand::ScrollLogsPageDown => {
            if let Some(logs) = state.logs.as_mut() {
                logs.scroll_offset = logs.scroll_offset.saturating_sub(LOGS_PAGE_SIZE);
            }
        }

        AppCommand::ToggleHelp => state.help_visible = !state.help_visible,
        AppCommand::SetPendingKey(key) => state.pending_key = Some(key),
        AppCommand::ClearPendingKey => state.pending_key = None,
        AppCommand::Quit => {
            tracing::info!("Quit requested");
            state.should_quit = true;
        }
    }

    // Clear pending key after any command except SetPendingKey
    if !is_setting_pending_key && state.pending_key.is_some() {
        state.pending_key = None;
    }
}

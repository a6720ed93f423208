use medpay_model::PaymentId;

use crate::filters::{ProviderFilter, StatusFilter};
use crate::views::View;

/// Commands produced by key handlers and applied by the executor
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    SelectNext,
    SelectPrevious,
    NavigateToTop,
    NavigateToBottom,

    // Views
    SwitchView(View),
    NextView,
    PreviousView,
    NavigateToLogs,
    NavigateBack,

    // Row actions
    ViewPayment {
        payment_id: PaymentId,
    },
    InitiateDelete {
        payment_id: PaymentId,
    },
    ConfirmDelete {
        payment_id: PaymentId,
    },
    CancelDelete,

    // Filters
    SetStatusFilter(StatusFilter),
    SetProviderFilter(ProviderFilter),
    EnterDateFilterMode,
    AppendDateFilterChar(char),
    DeleteDateFilterChar,
    ApplyDateFilter,
    ClearDateFilter,
    ClearFilters,

    // Add-payment form
    EnterPaymentForm,
    ExitPaymentForm,
    NavigateFormField {
        forward: bool,
    },
    AppendFormFieldChar {
        c: char,
    },
    DeleteFormFieldChar,
    ClearFormField,
    CycleFormChoice {
        forward: bool,
    },
    SubmitPaymentForm,

    ExportAll,
    DismissPopup,

    // Logs screen
    ScrollLogsUp,
    ScrollLogsDown,
    ScrollLogsPageUp,
    ScrollLogsPageDown,

    ToggleHelp,
    SetPendingKey(char),
    ClearPendingKey,
    Quit,
}

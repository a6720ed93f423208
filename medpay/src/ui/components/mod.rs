pub mod delete_confirmation;
pub mod empty_state;
pub mod filter_input;
pub mod help_bar;
pub mod help_popup;
pub mod payment_detail;
pub mod payment_form;
pub mod popup;
pub mod tab_bar;

use medpay::controller::{PaymentField, PAYMENT_ADDED_MESSAGE};
use medpay::filters::{ProviderFilter, StatusFilter};
use medpay::input::{Key, KeyEvent};
use medpay::state::{InputMode, Popup};
use medpay::testing::TestApp;
use medpay::views::View;
use medpay_model::{Cents, PaymentId, PaymentStatus};

/// Fill in the add-payment form for provider 2 and submit it.
fn add_stress_test(app: &mut TestApp) {
    app.send_key(Key::Char('n'));

    // Date: clear today's date and type a fixed one
    app.send_key_event(KeyEvent::with_ctrl(Key::Char('l')));
    app.type_text("20240401");

    // Provider: skip the placeholder and the first provider
    app.send_key(Key::Tab);
    app.send_keys(&[Key::Right, Key::Right]);

    app.send_key(Key::Tab);
    app.type_text("Stress Test");
    app.send_key(Key::Tab);
    app.type_text("200");
    app.send_key(Key::Tab);
    app.type_text("150");

    // Status: pending -> overdue
    app.send_key(Key::Tab);
    app.send_key(Key::Right);

    app.send_key(Key::Tab);
    app.type_text("Treadmill");

    app.send_key(Key::Enter);
}

// ============================================================================
// Global Commands
// ============================================================================

#[test]
fn test_quit_flow() {
    let mut app = TestApp::new();

    // Initially should not quit
    app.assert_not_quit();

    app.send_key(Key::Char('q'));
    app.assert_should_quit();
}

#[test]
fn test_help_toggle() {
    let mut app = TestApp::new();

    assert!(!app.state().help_visible);

    app.send_key(Key::Char('?'));
    assert!(app.state().help_visible);

    app.send_key(Key::Char('?'));
    assert!(!app.state().help_visible);

    app.send_key(Key::Char('?'));
    assert!(app.state().help_visible);

    // Esc also hides it
    app.send_key(Key::Esc);
    assert!(!app.state().help_visible);
}

#[test]
fn test_help_overlay_blocks_other_commands() {
    let mut app = TestApp::new();

    app.send_key(Key::Char('?'));
    app.send_key(Key::Char('2'));

    app.assert_view(View::Dashboard);
    assert!(app.state().help_visible);
}

// ============================================================================
// Tabs
// ============================================================================

#[test]
fn test_starts_on_dashboard_with_seed_totals() {
    let app = TestApp::new();

    app.assert_view(View::Dashboard);
    let dashboard = &app.state().dashboard;
    assert_eq!(dashboard.formatted_total, "$1375.00");
    assert_eq!(dashboard.pending_count, 1);
    assert_eq!(dashboard.formatted_outstanding, "$126.00");
    assert_eq!(dashboard.recent.len(), 3);
    assert_eq!(dashboard.recent[0].payment_id, PaymentId::new(5));
}

#[test]
fn test_number_keys_switch_tabs() {
    let mut app = TestApp::new();

    app.send_key(Key::Char('2'));
    app.assert_view(View::Payments);
    assert_eq!(app.state().payments.table.rows.len(), 5);

    app.send_key(Key::Char('3'));
    app.assert_view(View::Providers);
    assert_eq!(app.state().providers.cards.len(), 5);

    app.send_key(Key::Char('1'));
    app.assert_view(View::Dashboard);
}

#[test]
fn test_tab_cycles_views() {
    let mut app = TestApp::new();

    app.send_key(Key::Tab);
    app.assert_view(View::Payments);
    app.send_key(Key::Tab);
    app.assert_view(View::Providers);
    app.send_key(Key::Tab);
    app.assert_view(View::Dashboard);

    app.send_key(Key::BackTab);
    app.assert_view(View::Providers);
}

// ============================================================================
// Add Payment
// ============================================================================

#[test]
fn test_add_payment_through_form() {
    let mut app = TestApp::new();

    add_stress_test(&mut app);

    assert_eq!(app.state().input_mode, InputMode::Normal);
    assert!(app.state().form_state.is_none());
    assert_eq!(app.state().notice(), Some(PAYMENT_ADDED_MESSAGE));

    let payments = app.controller().payments();
    assert_eq!(payments.len(), 6);
    let added = &payments[5];
    assert_eq!(added.id, PaymentId::new(6));
    assert_eq!(added.service_date, "2024-04-01");
    assert_eq!(added.your_cost, Cents::from_parts(50, 0));
    assert_eq!(added.status, PaymentStatus::Overdue);
    assert_eq!(added.notes, "Treadmill");

    // Dashboard was visible, so it reflects the new payment
    let dashboard = &app.state().dashboard;
    assert_eq!(dashboard.formatted_total, "$1575.00");
    assert_eq!(dashboard.formatted_outstanding, "$176.00");
    assert_eq!(dashboard.recent[0].service_type, "Stress Test");
    assert_eq!(dashboard.recent[0].provider_name, "Dr. Smith Cardiology");

    // Any key dismisses the notice
    app.send_key(Key::Char('x'));
    assert!(app.state().popup.is_none());
}

#[test]
fn test_add_payment_increments_provider_visits() {
    let mut app = TestApp::new();

    add_stress_test(&mut app);
    app.send_key(Key::Esc); // dismiss notice
    app.send_key(Key::Char('3'));

    let card = app
        .state()
        .providers
        .cards
        .iter()
        .find(|c| c.name == "Dr. Smith Cardiology")
        .unwrap();
    assert_eq!(card.visits, 2);
}

#[test]
fn test_form_validation_error_keeps_form_open() {
    let mut app = TestApp::new();

    app.send_key(Key::Char('n'));
    assert_eq!(app.state().input_mode, InputMode::PaymentForm);

    // No provider chosen
    app.send_key(Key::Enter);

    assert_eq!(app.state().input_mode, InputMode::PaymentForm);
    let form = app.state().form_state.as_ref().unwrap();
    assert!(form.validation_error.as_ref().unwrap().contains("provider"));
    assert_eq!(app.controller().payments().len(), 5);
}

#[test]
fn test_form_rejects_missing_amount() {
    let mut app = TestApp::new();

    app.send_key(Key::Char('n'));
    app.send_key(Key::Tab);
    app.send_key(Key::Right);
    app.send_key(Key::Tab);
    app.type_text("Checkup");
    app.send_key(Key::Enter);

    let form = app.state().form_state.as_ref().unwrap();
    assert_eq!(form.current_field, PaymentField::ServiceType);
    assert!(form
        .validation_error
        .as_ref()
        .unwrap()
        .contains("total amount"));
}

#[test]
fn test_form_rejects_out_of_range_amount() {
    let mut app = TestApp::new();

    app.send_key(Key::Char('n'));
    app.send_key(Key::Tab);
    app.send_key(Key::Right);
    app.send_key(Key::Tab);
    app.type_text("Checkup");
    app.send_key(Key::Tab);
    app.type_text("100000000000000000");
    app.send_key(Key::Enter);

    assert_eq!(app.state().input_mode, InputMode::PaymentForm);
    let form = app.state().form_state.as_ref().unwrap();
    assert!(form
        .validation_error
        .as_ref()
        .unwrap()
        .contains("total amount"));
    assert_eq!(app.controller().payments().len(), 5);
}

#[test]
fn test_form_rejects_exponent_amount() {
    let mut app = TestApp::new();

    app.send_key(Key::Char('n'));
    app.send_key(Key::Tab);
    app.send_key(Key::Right);
    app.send_key(Key::Tab);
    app.type_text("Checkup");
    app.send_key(Key::Tab);
    app.type_text("1e17");
    app.send_key(Key::Enter);

    assert_eq!(app.state().input_mode, InputMode::PaymentForm);
    assert!(app
        .state()
        .form_state
        .as_ref()
        .unwrap()
        .validation_error
        .is_some());
    assert_eq!(app.controller().payments().len(), 5);
}

#[test]
fn test_form_escape_discards_input() {
    let mut app = TestApp::new();

    app.send_key(Key::Char('n'));
    app.send_key(Key::Tab);
    app.send_key(Key::Tab);
    app.type_text("Ignored");
    app.send_key(Key::Esc);

    assert_eq!(app.state().input_mode, InputMode::Normal);
    assert!(app.state().form_state.is_none());
    assert_eq!(app.controller().payments().len(), 5);
}

#[test]
fn test_form_keys_do_not_trigger_global_commands() {
    let mut app = TestApp::new();

    app.send_key(Key::Char('n'));
    app.send_key(Key::Tab);
    app.send_key(Key::Tab);
    app.type_text("q2e");

    app.assert_not_quit();
    app.assert_view(View::Dashboard);
    let form = app.state().form_state.as_ref().unwrap();
    assert_eq!(form.service_type, "q2e");
}

// ============================================================================
// Payments Table
// ============================================================================

#[test]
fn test_navigation_with_j_k() {
    let mut app = TestApp::new();
    app.send_key(Key::Char('2'));

    let selected = |app: &TestApp| app.state().payments.table_state.borrow().selected();
    assert_eq!(selected(&app), Some(0));

    app.send_key(Key::Char('j'));
    assert_eq!(selected(&app), Some(1));

    app.send_key(Key::Char('k'));
    app.send_key(Key::Char('k'));
    // Wraps to the last row
    assert_eq!(selected(&app), Some(4));

    app.send_keys(&[Key::Char('g'), Key::Char('g')]);
    assert_eq!(selected(&app), Some(0));
    assert_eq!(app.state().pending_key, None);

    app.send_key(Key::Char('G'));
    assert_eq!(selected(&app), Some(4));
}

#[test]
fn test_view_payment_detail() {
    let mut app = TestApp::new();
    app.send_key(Key::Char('2'));
    app.send_key(Key::Char('j'));
    app.send_key(Key::Enter);

    match app.state().popup.as_ref() {
        Some(Popup::Detail(detail)) => {
            assert_eq!(detail.payment_id, PaymentId::new(2));
            assert_eq!(detail.service_type, "Dental Cleaning");
            assert_eq!(detail.your_cost, "$24.00");
            assert_eq!(detail.notes, "Semi-annual cleaning");
        }
        other => panic!("Expected payment detail, got {:?}", other),
    }

    app.send_key(Key::Esc);
    assert!(app.state().popup.is_none());
    app.assert_view(View::Payments);
}

#[test]
fn test_delete_requires_confirmation() {
    let mut app = TestApp::new();
    app.send_key(Key::Char('2'));

    app.send_key(Key::Char('d'));
    assert_eq!(app.state().input_mode, InputMode::DeleteConfirmation);
    assert_eq!(
        app.state().delete_confirmation_payment_id,
        Some(PaymentId::new(1))
    );

    // Anything but 'y' cancels
    app.send_key(Key::Char('n'));
    assert_eq!(app.state().input_mode, InputMode::Normal);
    assert_eq!(app.controller().payments().len(), 5);

    app.send_key(Key::Char('d'));
    app.send_key(Key::Char('y'));
    assert_eq!(app.controller().payments().len(), 4);
    assert_eq!(app.state().payments.table.rows.len(), 4);
    assert!(app.controller().payment(PaymentId::new(1)).is_none());

    // Dashboard catches up when shown again
    app.send_key(Key::Char('1'));
    assert_eq!(app.state().dashboard.formatted_total, "$1025.00");
}

#[test]
fn test_delete_last_row_moves_selection_up() {
    let mut app = TestApp::new();
    app.send_key(Key::Char('2'));
    app.send_key(Key::Char('G'));
    app.send_keys(&[Key::Char('d'), Key::Char('y')]);

    assert_eq!(app.state().payments.table.rows.len(), 4);
    assert_eq!(app.state().payments.table_state.borrow().selected(), Some(3));
}

// ============================================================================
// Filters
// ============================================================================

#[test]
fn test_status_filter_cycles() {
    let mut app = TestApp::new();
    app.send_key(Key::Char('2'));

    app.send_key(Key::Char('s'));
    let table = &app.state().payments.table;
    assert_eq!(table.filters.status, StatusFilter::Only(PaymentStatus::Paid));
    assert_eq!(table.rows.len(), 3);
    assert_eq!(table.total_count, 5);

    app.send_key(Key::Char('s'));
    assert_eq!(app.state().payments.table.rows.len(), 1);

    app.send_key(Key::Char('x'));
    let table = &app.state().payments.table;
    assert_eq!(table.filters.status, StatusFilter::All);
    assert_eq!(table.rows.len(), 5);
}

#[test]
fn test_provider_filter_cycles_through_options() {
    let mut app = TestApp::new();
    app.send_key(Key::Char('2'));

    app.send_key(Key::Char('p'));
    let table = &app.state().payments.table;
    assert_eq!(table.filters.provider, ProviderFilter::Only("1".to_string()));
    assert_eq!(table.rows.len(), 1);
    assert_eq!(table.rows[0].provider_name, "City General Hospital");

    // Past the last provider wraps back to all
    app.send_keys(&[Key::Char('p'); 5]);
    assert_eq!(app.state().payments.table.filters.provider, ProviderFilter::All);
    assert_eq!(app.state().payments.table.rows.len(), 5);
}

#[test]
fn test_date_filter_mode() {
    let mut app = TestApp::new();
    app.send_key(Key::Char('2'));

    app.send_key(Key::Char('/'));
    assert_eq!(app.state().input_mode, InputMode::DateFilter);

    app.type_text("20240301");
    assert_eq!(app.state().payments.date_filter_input, "2024-03-01");

    app.send_key(Key::Enter);
    assert_eq!(app.state().input_mode, InputMode::Normal);
    let table = &app.state().payments.table;
    assert_eq!(table.filters.min_date, "2024-03-01");
    assert_eq!(table.rows.len(), 2);

    // Re-entering starts from the applied date; Esc clears it
    app.send_key(Key::Char('/'));
    assert_eq!(app.state().payments.date_filter_input, "2024-03-01");
    app.send_key(Key::Esc);
    assert_eq!(app.state().payments.table.rows.len(), 5);
}

#[test]
fn test_incomplete_date_filter_is_not_applied() {
    let mut app = TestApp::new();
    app.send_key(Key::Char('2'));

    app.send_key(Key::Char('/'));
    app.type_text("2024");
    app.send_key(Key::Enter);

    assert!(app.state().notice().is_some());
    assert_eq!(app.state().payments.table.filters.min_date, "");

    // Dismiss the notice, still typing
    app.send_key(Key::Esc);
    assert_eq!(app.state().input_mode, InputMode::DateFilter);
}

#[test]
fn test_filters_combine() {
    let mut app = TestApp::new();
    app.send_key(Key::Char('2'));

    app.send_key(Key::Char('s')); // paid
    app.send_key(Key::Char('/'));
    app.type_text("20240201");
    app.send_key(Key::Enter);

    let table = &app.state().payments.table;
    let ids: Vec<PaymentId> = table.rows.iter().map(|r| r.payment_id).collect();
    assert_eq!(ids, vec![PaymentId::new(2), PaymentId::new(5)]);
}

// ============================================================================
// Export
// ============================================================================

#[test]
fn test_export_writes_csv() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = TestApp::with_export_dir(dir.path());

    app.send_key(Key::Char('e'));

    let path = dir.path().join("healthcare_payments.csv");
    let body = std::fs::read_to_string(&path).unwrap();
    let mut lines = body.lines();
    assert_eq!(
        lines.next(),
        Some("Date,Provider,Service,Total Amount,Insurance Coverage,Your Cost,Status,Notes")
    );
    assert_eq!(body.lines().count(), 6);
    assert!(app.state().notice().unwrap().starts_with("Exported 5 payments"));
}

#[test]
fn test_export_failure_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("not-a-dir");
    std::fs::write(&blocker, "").unwrap();

    let mut app = TestApp::with_export_dir(&blocker);
    app.send_key(Key::Char('e'));

    assert!(app.state().notice().unwrap().starts_with("Export failed"));
    app.assert_not_quit();
}

// ============================================================================
// Logs Screen
// ============================================================================

#[test]
fn test_logs_screen_round_trip() {
    let mut app = TestApp::new();
    app.send_key(Key::Char('2'));

    app.send_keys(&[Key::Char('g'), Key::Char('l')]);
    assert!(app.state().on_logs_screen());

    // Tab keys are inert on the logs screen
    app.send_key(Key::Char('1'));
    assert!(app.state().on_logs_screen());

    app.send_key(Key::Char('h'));
    assert!(!app.state().on_logs_screen());
    app.assert_view(View::Payments);
}

#[test]
fn test_pending_key_cleared_after_invalid_sequence() {
    let mut app = TestApp::new();

    app.send_key(Key::Char('g'));
    assert_eq!(app.state().pending_key, Some('g'));

    app.send_key(Key::Char('z'));
    assert_eq!(app.state().pending_key, None);
    app.assert_view(View::Dashboard);
}

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::controller::PaymentField;
use crate::state::PaymentFormState;
use crate::ui::{layouts, theme};
use crate::views::ProviderOption;

const LABEL_WIDTH: usize = 16;

/// Render the add-payment form as a popup over the current tab
pub fn render_payment_form(f: &mut Frame, form: &PaymentFormState, options: &[ProviderOption]) {
    let inner = super::popup::render_popup_frame(
        f,
        f.area(),
        layouts::popup_sizes::LARGE,
        " Add Payment ",
        theme::accent_border_style(),
    );

    let mut constraints: Vec<Constraint> = PaymentField::ALL
        .iter()
        .map(|_| Constraint::Length(1))
        .collect();
    constraints.push(Constraint::Length(1)); // Spacer
    constraints.push(Constraint::Length(1)); // Validation error
    constraints.push(Constraint::Min(0));
    constraints.push(Constraint::Length(1)); // Instructions

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints(constraints)
        .split(inner);

    for (field, area) in PaymentField::ALL.iter().zip(chunks.iter()) {
        render_field(f, *area, form, *field, options);
    }

    let fields = PaymentField::ALL.len();
    if let Some(ref error) = form.validation_error {
        let error = Paragraph::new(format!(" Error: {} ", error)).style(theme::error_style());
        f.render_widget(error, chunks[fields + 1]);
    }

    let instructions = if form.current_field.is_choice() {
        "←/→/Space: choose | Tab/↓: next | Shift+Tab/↑: previous | Enter: save | Esc: cancel"
    } else {
        "Type to edit | Ctrl+L: clear | Tab/↓: next | Shift+Tab/↑: previous | Enter: save | Esc: cancel"
    };
    let instructions = Paragraph::new(instructions).style(theme::help_text_style());
    f.render_widget(instructions, chunks[fields + 3]);
}

fn render_field(
    f: &mut Frame,
    area: Rect,
    form: &PaymentFormState,
    field: PaymentField,
    options: &[ProviderOption],
) {
    let focused = form.current_field == field;
    let value_style = if focused {
        theme::form_field_focused_style()
    } else {
        theme::form_field_style()
    };

    let mut value = field_value(form, field, options);
    if focused && !field.is_choice() {
        value.push('▏');
    }

    let line = Line::from(vec![
        Span::styled(
            format!("{:width$}", field.label(), width = LABEL_WIDTH),
            theme::header_style(),
        ),
        Span::styled(value, value_style),
    ]);

    f.render_widget(Paragraph::new(line), area);
}

/// Display text for one form field; choice fields get `< >` markers.
pub fn field_value(
    form: &PaymentFormState,
    field: PaymentField,
    options: &[ProviderOption],
) -> String {
    match field {
        PaymentField::ServiceDate => form.service_date.clone(),
        PaymentField::Provider => format!("< {} >", form.provider_label(options)),
        PaymentField::ServiceType => form.service_type.clone(),
        PaymentField::TotalAmount => form.total_amount.clone(),
        PaymentField::InsuranceCoverage => form.insurance_coverage.clone(),
        PaymentField::Status => format!("< {} >", form.status),
        PaymentField::Notes => form.notes.clone(),
    }
}

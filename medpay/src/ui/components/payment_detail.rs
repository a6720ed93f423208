use ratatui::{
    layout::{Constraint, Direction, Layout},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::ui::{layouts, theme};
use crate::views::PaymentDetail;

const LABEL_WIDTH: usize = 18;

/// Render the read-only summary of a single payment
pub fn render_payment_detail(f: &mut Frame, detail: &PaymentDetail) {
    let title = format!(" Payment {} ", detail.payment_id);
    let inner = super::popup::render_popup_frame(
        f,
        f.area(),
        layouts::popup_sizes::MEDIUM,
        &title,
        theme::accent_border_style(),
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(inner);

    let notes = if detail.notes.is_empty() {
        "-"
    } else {
        detail.notes.as_str()
    };

    let mut lines = vec![
        field_line("Date", Span::raw(detail.date.clone())),
        field_line("Provider", Span::raw(detail.provider_name.clone())),
        field_line("Service", Span::raw(detail.service_type.clone())),
        field_line("Total Amount", Span::raw(detail.total_amount.clone())),
        field_line(
            "Insurance Coverage",
            Span::raw(detail.insurance_coverage.clone()),
        ),
        field_line(
            "Your Cost",
            Span::styled(detail.your_cost.clone(), theme::title_style()),
        ),
        field_line(
            "Status",
            Span::styled(detail.status.to_string(), theme::status_style(detail.status)),
        ),
        Line::from(""),
    ];
    lines.push(field_line("Notes", Span::raw(notes.to_string())));

    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), chunks[0]);

    let hint = Paragraph::new("Press any key to close").style(theme::help_text_style());
    f.render_widget(hint, chunks[1]);
}

fn field_line(label: &str, value: Span<'static>) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:width$}", label, width = LABEL_WIDTH), theme::header_style()),
        value,
    ])
}

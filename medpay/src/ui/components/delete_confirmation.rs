use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::ui::{layouts, theme};
use crate::views::PaymentRow;

/// Render a confirmation popup for payment deletion
pub fn render_delete_confirmation(f: &mut Frame, row: Option<&PaymentRow>) {
    let inner = super::popup::render_popup_frame(
        f,
        f.area(),
        layouts::popup_sizes::SMALL,
        " Confirm Delete ",
        theme::danger_border_style(),
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1), // Warning message
            Constraint::Length(1), // Payment summary
            Constraint::Length(1), // Empty line
            Constraint::Length(1), // Instructions
        ])
        .split(inner);

    let warning = Paragraph::new("Are you sure you want to delete this payment?")
        .style(theme::input_style().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    f.render_widget(warning, chunks[0]);

    if let Some(row) = row {
        let summary = format!(
            "{}  {}  {}  {}",
            row.date, row.provider_name, row.service_type, row.total_amount
        );
        let summary = Paragraph::new(summary)
            .style(theme::help_text_style())
            .alignment(Alignment::Center);
        f.render_widget(summary, chunks[1]);
    }

    let instructions = Line::from(vec![
        Span::styled(
            "[Y]es ",
            Style::default()
                .fg(theme::COLOR_POSITIVE)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("/ "),
        Span::styled(
            "[N]o ",
            Style::default()
                .fg(theme::COLOR_NEGATIVE)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("/ "),
        Span::styled("[Esc]", Style::default().fg(theme::COLOR_HELP_TEXT)),
        Span::raw(" Cancel"),
    ]);
    let instructions_para = Paragraph::new(instructions).alignment(Alignment::Center);
    f.render_widget(instructions_para, chunks[3]);
}

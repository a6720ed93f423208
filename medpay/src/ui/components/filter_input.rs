//! Minimum-date filter input shown above the payments table.

use ratatui::prelude::Rect;
use ratatui::{
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::theme;

const DATE_PLACEHOLDER: &str = "YYYY-MM-DD";

/// Render the date being typed, with the rest of the `YYYY-MM-DD` mask greyed out.
pub fn render_date_filter_input(f: &mut Frame, area: Rect, input: &str) {
    let remaining = DATE_PLACEHOLDER.get(input.len()..).unwrap_or("");

    let line = Line::from(vec![
        Span::styled(input.to_string(), theme::input_style()),
        Span::styled(remaining, theme::help_text_style()),
    ]);

    let paragraph = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Payments from date (Enter: apply, Esc: clear)"),
    );

    f.render_widget(paragraph, area);
}

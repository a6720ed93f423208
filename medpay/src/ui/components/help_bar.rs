//! Shared help bar component for consistent bottom navigation hints.

use itertools::Itertools;
use ratatui::prelude::Rect;
use ratatui::{
    layout::Alignment,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::theme;

/// Render a standard help bar with the given text.
pub fn render_help_bar(f: &mut Frame, area: Rect, text: &str) {
    let help = Paragraph::new(text)
        .style(theme::help_text_style())
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(help, area);
}

/// Join `key: action` hints with the separator every help bar uses.
pub fn hints(items: &[(&str, &str)]) -> String {
    items
        .iter()
        .map(|(key, action)| format!("{key}: {action}"))
        .join(" | ")
}

/// Screen-specific hints followed by [`GLOBAL_HINTS`].
pub fn hints_with_global(items: &[(&str, &str)]) -> String {
    let all: Vec<(&str, &str)> = items.iter().chain(GLOBAL_HINTS.iter()).copied().collect();
    hints(&all)
}

/// Hints shown on every tab
pub const GLOBAL_HINTS: [(&str, &str); 4] = [
    ("1-3/Tab", "switch"),
    ("n", "add payment"),
    ("e", "export"),
    ("?", "help"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hints_are_pipe_separated() {
        assert_eq!(hints(&[("q", "quit"), ("?", "help")]), "q: quit | ?: help");
        assert_eq!(hints(&[]), "");
    }

    #[test]
    fn global_hints_follow_screen_hints() {
        let text = hints_with_global(&[("s", "status")]);
        assert!(text.starts_with("s: status | 1-3/Tab: switch"));
        assert!(text.ends_with("?: help"));
    }
}

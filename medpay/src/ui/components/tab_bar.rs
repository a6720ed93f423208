use ratatui::prelude::Rect;
use ratatui::{style::Stylize, text::Line, widgets::Tabs, Frame};

use crate::ui::theme;
use crate::views::View;

/// Render the `1 Dashboard | 2 Payments | 3 Providers` tab strip.
pub fn render_tab_bar(f: &mut Frame, area: Rect, active: View) {
    let titles = View::ALL
        .iter()
        .enumerate()
        .map(|(i, view)| Line::from(format!(" {} {} ", i + 1, view.title())));

    let tabs = Tabs::new(titles)
        .select(active.index())
        .style(theme::help_text_style())
        .highlight_style(theme::title_style().reversed())
        .divider("|");

    f.render_widget(tabs, area);
}

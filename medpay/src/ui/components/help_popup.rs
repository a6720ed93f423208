use ratatui::{
    prelude::*,
    widgets::{List, ListItem},
    Frame,
};

use crate::state::AppState;
use crate::ui::{layouts, theme};
use crate::views::View;

pub fn render_help_popup(f: &mut Frame, state: &AppState) {
    let help_items = get_help_items(state);

    let inner = super::popup::render_popup_frame(
        f,
        f.area(),
        layouts::popup_sizes::LARGE,
        " Help (press ? or Esc to close) ",
        theme::accent_border_style(),
    );

    let items: Vec<ListItem> = help_items
        .iter()
        .map(|(key, description)| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:15}", key), theme::header_style()),
                Span::raw(*description),
            ]))
        })
        .collect();

    let list = List::new(items).style(Style::default().fg(Color::White));

    f.render_widget(list, inner);
}

fn get_help_items(state: &AppState) -> Vec<(&'static str, &'static str)> {
    let mut items = vec![];

    if state.on_logs_screen() {
        items.push(("↑/k", "Scroll up (older logs)"));
        items.push(("↓/j", "Scroll down (newer logs)"));
        items.push(("Page Up", "Scroll up one page"));
        items.push(("Page Down", "Scroll down one page"));
        items.push(("g then g", "Scroll to oldest logs"));
        items.push(("G", "Scroll to newest logs"));
        items.push(("h/←/Esc", "Back to the payments app"));
    } else {
        match state.active_view {
            View::Dashboard => {
                items.push(("", "Totals, pending count and outstanding balance"));
                items.push(("", "Recent activity lists the last three payments added"));
            }
            View::Payments => {
                items.push(("↑/k", "Move selection up"));
                items.push(("↓/j", "Move selection down"));
                items.push(("g then g/Home", "Jump to first payment"));
                items.push(("G/End", "Jump to last payment"));
                items.push(("Enter/v", "View selected payment"));
                items.push(("d/Backspace", "Delete selected payment"));
                items.push(("s", "Cycle status filter"));
                items.push(("p", "Cycle provider filter"));
                items.push(("/", "Filter by minimum date"));
                items.push(("x/Esc", "Clear all filters"));
            }
            View::Providers => {
                items.push(("", "Each card shows contact details and visit count"));
            }
        }
    }

    items.push(("", ""));
    items.push(("--- Global ---", ""));
    items.push(("1/2/3", "Dashboard / Payments / Providers"));
    items.push(("Tab/Shift+Tab", "Next / previous tab"));
    items.push(("n", "Add a payment"));
    items.push(("e", "Export all payments to CSV"));
    items.push(("g then l", "Go to logs"));
    items.push(("?", "Toggle this help"));
    items.push(("q", "Quit application"));

    items
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payments_help_lists_filters() {
        let state = AppState {
            active_view: View::Payments,
            ..AppState::default()
        };
        let items = get_help_items(&state);
        assert!(items.contains(&("s", "Cycle status filter")));
        assert!(items.contains(&("q", "Quit application")));
    }

    #[test]
    fn logs_help_replaces_view_help() {
        let mut state = AppState::default();
        state.logs = Some(Default::default());
        let items = get_help_items(&state);
        assert!(items.contains(&("G", "Scroll to newest logs")));
        assert!(!items.contains(&("s", "Cycle status filter")));
    }
}

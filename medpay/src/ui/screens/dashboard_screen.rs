use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
};

use crate::ui::{
    components::{empty_state, help_bar, tab_bar},
    layouts, theme,
};
use crate::views::{DashboardView, View};

pub fn render(f: &mut Frame, dashboard: &DashboardView) {
    let (title_area, content_area, help_area) = layouts::screen_layout(f.area());

    tab_bar::render_tab_bar(f, title_area, View::Dashboard);
    render_content(f, content_area, dashboard);
    help_bar::render_help_bar(
        f,
        help_area,
        &help_bar::hints_with_global(&[("q", "quit")]),
    );
}

fn render_content(f: &mut Frame, area: Rect, dashboard: &DashboardView) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(theme::SUMMARY_CARD_HEIGHT),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

    render_summary_cards(f, chunks[0], dashboard);
    render_recent_activity(f, chunks[2], dashboard);
}

fn render_summary_cards(f: &mut Frame, area: Rect, dashboard: &DashboardView) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    render_summary_card(
        f,
        chunks[0],
        &dashboard.formatted_total,
        "Total Payments",
        theme::COLOR_TITLE,
    );
    render_summary_card(
        f,
        chunks[1],
        &dashboard.pending_count.to_string(),
        "Pending",
        theme::COLOR_PENDING,
    );

    let outstanding_color = if dashboard.outstanding_balance.is_positive() {
        theme::COLOR_NEGATIVE
    } else {
        theme::COLOR_POSITIVE
    };
    render_summary_card(
        f,
        chunks[2],
        &dashboard.formatted_outstanding,
        "Outstanding Balance",
        outstanding_color,
    );
}

fn render_summary_card(f: &mut Frame, area: Rect, value: &str, label: &str, color: Color) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::COLOR_ZERO))
        .title(Span::styled(format!(" {} ", label), theme::help_text_style()));

    let paragraph = Paragraph::new(Span::styled(
        value.to_string(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center)
    .block(block);

    f.render_widget(paragraph, area);
}

fn render_recent_activity(f: &mut Frame, area: Rect, dashboard: &DashboardView) {
    if dashboard.recent.is_empty() {
        empty_state::render_empty_state(
            f,
            area,
            "Recent Activity",
            "No payments recorded yet",
            Some("Press n to add one"),
        );
        return;
    }

    let header = Row::new(vec!["Provider", "Service", "Date", "Your Cost", "Status"])
        .style(theme::header_style())
        .underlined();

    let rows: Vec<Row> = dashboard
        .recent
        .iter()
        .map(|payment| {
            Row::new(vec![
                Cell::from(payment.provider_name.clone()),
                Cell::from(payment.service_type.clone()),
                Cell::from(payment.date.clone()),
                Cell::from(Text::from(payment.your_cost.clone()).right_aligned()),
                Cell::from(Span::styled(
                    payment.status.to_string(),
                    theme::status_style(payment.status),
                )),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(30),
            Constraint::Percentage(30),
            Constraint::Length(10),
            Constraint::Length(12),
            Constraint::Length(8),
        ],
    )
    .header(header)
    .block(Block::default().borders(Borders::ALL).title("Recent Activity"))
    .column_spacing(theme::TABLE_COLUMN_SPACING);

    f.render_widget(table, area);
}

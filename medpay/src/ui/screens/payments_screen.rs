use ratatui::{
    prelude::*,
    text::Text,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
};

use crate::filters::ProviderFilter;
use crate::state::{InputMode, PaymentsState};
use crate::ui::{
    components::{empty_state, filter_input, help_bar, tab_bar},
    layouts, theme,
};
use crate::views::{PaymentRow, ProviderOption, View};

const HINTS: [(&str, &str); 6] = [
    ("j/k", "move"),
    ("Enter", "view"),
    ("d", "delete"),
    ("s", "status"),
    ("p", "provider"),
    ("/", "from date"),
];

pub fn render(
    f: &mut Frame,
    state: &PaymentsState,
    input_mode: InputMode,
    provider_options: &[ProviderOption],
) {
    let help_text = help_bar::hints_with_global(&HINTS);

    if input_mode == InputMode::DateFilter {
        let (title_area, filter_area, content_area, help_area) =
            layouts::screen_layout_with_filter(f.area());

        tab_bar::render_tab_bar(f, title_area, View::Payments);
        filter_input::render_date_filter_input(f, filter_area, &state.date_filter_input);
        render_content(f, content_area, state, input_mode, provider_options);
        help_bar::render_help_bar(f, help_area, &help_text);
    } else {
        let (title_area, content_area, help_area) = layouts::screen_layout(f.area());

        tab_bar::render_tab_bar(f, title_area, View::Payments);
        render_content(f, content_area, state, input_mode, provider_options);
        help_bar::render_help_bar(f, help_area, &help_text);
    }
}

fn render_content(
    f: &mut Frame,
    area: Rect,
    state: &PaymentsState,
    input_mode: InputMode,
    provider_options: &[ProviderOption],
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(area);

    render_filter_summary(f, chunks[0], state, provider_options);

    let table = &state.table;
    if table.rows.is_empty() {
        let (message, hint) = if table.total_count == 0 {
            ("No payments recorded yet", Some("Press n to add one"))
        } else {
            ("No payments match the current filters", Some("Press x to clear filters"))
        };
        empty_state::render_empty_state(f, chunks[1], "Payments", message, hint);
        return;
    }

    let header = Row::new(vec![
        Cell::from("Date"),
        Cell::from("Provider"),
        Cell::from("Service"),
        Cell::from(Text::from("Total").right_aligned()),
        Cell::from(Text::from("Insurance").right_aligned()),
        Cell::from(Text::from("Your Cost").right_aligned()),
        Cell::from("Status"),
    ])
    .style(theme::header_style())
    .underlined();

    let rows: Vec<Row> = table.rows.iter().map(build_payment_row).collect();

    let title = if table.filters.is_open() {
        format!("Payments ({})", table.total_count)
    } else {
        format!("Payments ({} of {})", table.rows.len(), table.total_count)
    };

    let mut widget = Table::new(
        rows,
        [
            Constraint::Length(10),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Length(11),
            Constraint::Length(11),
            Constraint::Length(11),
            Constraint::Length(8),
        ],
    )
    .header(header)
    .block(Block::default().borders(Borders::ALL).title(title))
    .column_spacing(theme::TABLE_COLUMN_SPACING);

    if input_mode == InputMode::Normal {
        widget = widget.row_highlight_style(theme::selection_style());
    }

    f.render_stateful_widget(widget, chunks[1], &mut state.table_state.borrow_mut());
}

fn build_payment_row(row: &PaymentRow) -> Row<'static> {
    Row::new(vec![
        Cell::from(row.date.clone()),
        Cell::from(row.provider_name.clone()),
        Cell::from(row.service_type.clone()),
        Cell::from(Text::from(row.total_amount.clone()).right_aligned()),
        Cell::from(Text::from(row.insurance_coverage.clone()).right_aligned()),
        Cell::from(
            Text::from(row.your_cost.clone())
                .right_aligned()
                .style(theme::title_style()),
        ),
        Cell::from(Span::styled(
            row.status.to_string(),
            theme::status_style(row.status),
        )),
    ])
}

fn render_filter_summary(
    f: &mut Frame,
    area: Rect,
    state: &PaymentsState,
    provider_options: &[ProviderOption],
) {
    let filters = &state.table.filters;
    let provider_label = match &filters.provider {
        ProviderFilter::All => None,
        ProviderFilter::Only(value) => provider_options
            .iter()
            .find(|o| &o.value == value)
            .map(|o| o.label.as_str()),
    };

    let line = match filters.describe(provider_label) {
        Some(description) => Line::from(vec![
            Span::styled("Filtered by ", theme::help_text_style()),
            Span::styled(description, theme::input_style()),
        ]),
        None => Line::from(Span::styled("Showing all payments", theme::help_text_style())),
    };

    f.render_widget(Paragraph::new(line), area);
}

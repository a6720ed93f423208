use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::ui::{
    components::{empty_state, help_bar, tab_bar},
    layouts, theme,
};
use crate::views::{ProviderCard, ProvidersView, View};

const CARD_COLUMNS: u16 = 2;

pub fn render(f: &mut Frame, providers: &ProvidersView) {
    let (title_area, content_area, help_area) = layouts::screen_layout(f.area());

    tab_bar::render_tab_bar(f, title_area, View::Providers);

    if providers.cards.is_empty() {
        empty_state::render_empty_state(f, content_area, "Providers", "No providers", None);
    } else {
        let cells = layouts::card_grid(
            content_area,
            providers.cards.len(),
            CARD_COLUMNS,
            theme::PROVIDER_CARD_HEIGHT,
        );
        for (card, cell) in providers.cards.iter().zip(cells) {
            render_card(f, cell, card);
        }
    }

    help_bar::render_help_bar(
        f,
        help_area,
        &help_bar::hints_with_global(&[("q", "quit")]),
    );
}

fn render_card(f: &mut Frame, area: Rect, card: &ProviderCard) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent_border_style())
        .title(Span::styled(format!(" {} ", card.name), theme::title_style()));

    let visits = match card.visits {
        1 => "1 visit".to_string(),
        n => format!("{} visits", n),
    };

    let lines = vec![
        Line::from(Span::raw(card.specialty.clone())),
        Line::from(Span::styled(card.phone.clone(), theme::help_text_style())),
        Line::from(""),
        Line::from(Span::styled(visits, theme::header_style())),
    ];

    f.render_widget(Paragraph::new(lines).block(block), area);
}

//! Dashboard statistics cards
//!
//! Renders total raised, donor count and active campaigns

use super::super::utils::format_amount;
use crate::controller::DashboardState;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

pub fn render_stats_cards(f: &mut Frame, area: Rect, state: &DashboardState) {
    let card_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    let stats = &state.stats;
    let cards = [
        ("TOTAL RAISED", format_amount(stats.total_raised), Color::LightGreen),
        ("TOTAL DONORS", stats.total_donors.to_string(), Color::LightBlue),
        (
            "ACTIVE CAMPAIGNS",
            stats.active_campaigns.to_string(),
            Color::LightYellow,
        ),
    ];

    for ((title, value, color), chunk) in cards.into_iter().zip(card_chunks.iter()) {
        render_card(f, *chunk, title, value, color);
    }
}

fn render_card(f: &mut Frame, area: Rect, title: &str, value: String, color: Color) {
    let card = Paragraph::new(Line::from(Span::styled(
        value,
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(color)),
    );
    f.render_widget(card, area);
}

//! Dashboard header component
//!
//! Renders the title, the tab bar and the activity indicator

use super::super::state::ViewState;
use crate::controller::{DashboardState, Tab};
use crate::environment::Environment;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Tabs};

const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];

pub fn render_header(
    f: &mut Frame,
    area: Rect,
    state: &DashboardState,
    view: &ViewState,
    environment: &Environment,
) {
    let header_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(2)])
        .split(area);

    let env_color = match environment {
        Environment::Local => Color::Yellow,
        Environment::Hosted { .. } => Color::Green,
    };
    let title = Paragraph::new(Line::from(vec![
        Span::styled(
            format!("CAMPAIGN ADMIN v{}", env!("CARGO_PKG_VERSION")),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            format!("[{}] {}", environment, environment.base_url()),
            Style::default().fg(env_color),
        ),
    ]))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_type(BorderType::Thick),
    );
    f.render_widget(title, header_chunks[0]);

    let tab_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Fill(1), Constraint::Length(24)])
        .split(header_chunks[1]);

    let selected = match state.active_tab {
        Tab::Campaigns => 0,
        Tab::Gallery => 1,
    };
    let tabs = Tabs::new(vec![
        format!("Campaigns ({})", state.campaigns.len()),
        format!("Gallery ({})", state.gallery.len()),
    ])
    .select(selected)
    .style(Style::default().fg(Color::Gray))
    .highlight_style(
        Style::default()
            .fg(Color::LightYellow)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
    )
    .divider("|");
    f.render_widget(tabs, tab_chunks[0]);

    let status = match (&view.working, state.loading) {
        (Some(label), _) => Span::styled(
            format!("{} {}...", SPINNER[view.tick % SPINNER.len()], label),
            Style::default().fg(Color::LightYellow),
        ),
        (None, true) => Span::styled("Loading...", Style::default().fg(Color::LightYellow)),
        (None, false) => Span::styled("Ready", Style::default().fg(Color::LightGreen)),
    };
    f.render_widget(
        Paragraph::new(Line::from(status)).alignment(Alignment::Right),
        tab_chunks[1],
    );
}

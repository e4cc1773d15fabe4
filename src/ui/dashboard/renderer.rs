//! Dashboard main renderer

use super::components::{
    campaigns, donations, footer, header, info_panel, logs, modal, stats,
};
use super::state::ViewState;
use crate::controller::{DashboardState, Tab};
use crate::environment::Environment;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::{Color, Style};
use ratatui::widgets::Block;

pub fn render_dashboard(
    f: &mut Frame,
    state: &DashboardState,
    view: &ViewState,
    environment: &Environment,
) {
    if view.with_background_color {
        f.render_widget(
            Block::default().style(Style::default().bg(Color::Rgb(16, 20, 24))),
            f.area(),
        );
    }

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(3),
            Constraint::Fill(1),
            Constraint::Percentage(30),
            Constraint::Length(2),
        ])
        .margin(1)
        .split(f.area());

    header::render_header(f, main_chunks[0], state, view, environment);
    stats::render_stats_cards(f, main_chunks[1], state);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(main_chunks[2]);

    match state.active_tab {
        Tab::Campaigns => campaigns::render_campaign_list(f, content_chunks[0], state, view),
        Tab::Gallery => campaigns::render_gallery_list(f, content_chunks[0], state, view),
    }
    info_panel::render_info_panel(f, content_chunks[1], state, view);

    let bottom_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(main_chunks[3]);

    donations::render_donations_table(f, bottom_chunks[0], state);
    logs::render_logs_panel(f, bottom_chunks[1], state);
    footer::render_footer(f, main_chunks[4], state, view);

    if let Some(editor) = &view.form {
        modal::render_form(f, state, editor);
    }
    if let Some(pending) = &view.pending_delete {
        modal::render_confirm_dialog(f, pending);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Campaign, EntityId};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_dashboard_renders_stats_and_campaigns() {
        let mut state = DashboardState::default();
        state.campaigns = vec![Campaign {
            id: Some(EntityId::Number(1)),
            title: "Clean Water".to_string(),
            target_amount: 2000.0,
            raised_amount: 500.0,
            ..Campaign::default()
        }];
        state.stats.total_raised = 1234.0;
        let view = ViewState::default();

        let mut terminal = Terminal::new(TestBackend::new(140, 45)).unwrap();
        terminal
            .draw(|f| render_dashboard(f, &state, &view, &Environment::Local))
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("TOTAL RAISED"));
        assert!(text.contains("$1,234"));
        assert!(text.contains("Clean Water"));
        assert!(text.contains("25.0%"));
    }

    #[test]
    fn test_form_overlay_is_drawn_on_tiny_terminals() {
        let state = DashboardState::default();
        let mut view = ViewState::default();
        view.open_form(&state.modal.target, Tab::Campaigns);

        let mut terminal = Terminal::new(TestBackend::new(30, 10)).unwrap();
        terminal
            .draw(|f| render_dashboard(f, &state, &view, &Environment::Local))
            .unwrap();
        assert!(buffer_text(&terminal).contains("NEW CAMPAIGN"));
    }
}

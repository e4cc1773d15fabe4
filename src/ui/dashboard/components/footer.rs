//! Dashboard footer component
//!
//! Renders the key hints for whatever currently has focus

use super::super::state::ViewState;
use crate::controller::{DashboardState, Tab};

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

pub fn render_footer(f: &mut Frame, area: Rect, state: &DashboardState, view: &ViewState) {
    let footer_text = if view.pending_delete.is_some() {
        "[Y] Delete | [N/Esc] Keep"
    } else if view.form.is_some() {
        "[Tab/↓] Next field | [↑] Previous | [Enter] Save | [Esc] Cancel"
    } else if state.active_tab == Tab::Campaigns {
        "[Tab] Gallery | [↑/↓] Select | [N] New | [E] Edit | [D] Delete | [R] Refresh | [Q] Quit"
    } else {
        "[Tab] Campaigns | [↑/↓] Select | [N] Upload | [D] Delete | [R] Refresh | [Q] Quit"
    };

    let footer = Paragraph::new(footer_text)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_type(BorderType::Thick),
        );
    f.render_widget(footer, area);
}

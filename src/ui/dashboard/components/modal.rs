//! Overlays: the create/edit form and the delete confirmation dialog

use super::super::state::{FormEditor, FormField, PendingDelete};
use crate::controller::{DashboardState, Tab};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Flex, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph, Wrap};

/// Centers a box of at most `width` x `height` inside `area`.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    cell
}

pub fn render_form(f: &mut Frame, state: &DashboardState, editor: &FormEditor) {
    let title = match (state.active_tab, state.modal.target.is_edit()) {
        (Tab::Gallery, _) => " UPLOAD PHOTO ",
        (Tab::Campaigns, true) => " EDIT CAMPAIGN ",
        (Tab::Campaigns, false) => " NEW CAMPAIGN ",
    };
    let hint = match (state.active_tab, state.modal.target.is_edit()) {
        (Tab::Campaigns, true) => "Leave the image empty to keep the current one.",
        _ => "An image file is required.",
    };

    let fields = editor.fields();
    let height = fields.len() as u16 * 2 + 5;
    let area = centered(f.area(), 70, height);
    f.render_widget(Clear, area);

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(Color::LightYellow))
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut constraints: Vec<Constraint> = fields.iter().map(|_| Constraint::Length(2)).collect();
    constraints.push(Constraint::Length(1));
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (i, field) in fields.iter().enumerate() {
        let focused = i == editor.focus;
        render_field(f, rows[i], *field, editor.value(*field), focused);
    }

    f.render_widget(
        Paragraph::new(Span::styled(hint, Style::default().fg(Color::DarkGray))),
        rows[fields.len()],
    );
}

fn render_field(f: &mut Frame, area: Rect, field: FormField, value: &str, focused: bool) {
    let label_style = if focused {
        Style::default()
            .fg(Color::LightYellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    let cursor = if focused { "_" } else { "" };
    let lines = vec![
        Line::from(Span::styled(field.to_string(), label_style)),
        Line::from(vec![
            Span::styled(if focused { "> " } else { "  " }, label_style),
            Span::raw(value.to_string()),
            Span::styled(cursor, Style::default().fg(Color::LightYellow)),
        ]),
    ];
    f.render_widget(Paragraph::new(lines), area);
}

pub fn render_confirm_dialog(f: &mut Frame, pending: &PendingDelete) {
    let area = centered(f.area(), 56, 7);
    f.render_widget(Clear, area);

    let lines = vec![
        Line::from(format!("Delete {} \"{}\"?", pending.kind, pending.label)),
        Line::from(Span::styled(
            format!("id {}. This cannot be undone.", pending.id),
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "[Y] Delete   [N] Keep",
            Style::default()
                .fg(Color::LightRed)
                .add_modifier(Modifier::BOLD),
        )),
    ];
    let dialog = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(" CONFIRM ")
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(Color::LightRed)),
        );
    f.render_widget(dialog, area);
}

//! Campaign and gallery list components

use super::super::state::ViewState;
use super::super::utils::{campaign_status_color, format_amount, format_date, truncate};
use crate::controller::DashboardState;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, List, ListItem, ListState};

fn list_block(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
}

fn highlight() -> Style {
    Style::default()
        .bg(Color::Rgb(40, 52, 64))
        .add_modifier(Modifier::BOLD)
}

pub fn render_campaign_list(f: &mut Frame, area: Rect, state: &DashboardState, view: &ViewState) {
    let title_width = (area.width as usize).saturating_sub(36).max(8);
    let items: Vec<ListItem> = state
        .campaigns
        .iter()
        .map(|campaign| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<7} ", campaign.status.to_string()),
                    Style::default().fg(campaign_status_color(campaign.status)),
                ),
                Span::raw(format!(
                    "{:<width$} ",
                    truncate(&campaign.title, title_width),
                    width = title_width
                )),
                Span::styled(
                    format!("{:>5.1}% ", campaign.progress_percent()),
                    Style::default().fg(Color::LightGreen),
                ),
                Span::styled(
                    format!(
                        "{} / {}",
                        format_amount(campaign.raised_amount),
                        format_amount(campaign.target_amount)
                    ),
                    Style::default().fg(Color::Gray),
                ),
            ]))
        })
        .collect();

    let list = if items.is_empty() {
        List::new(vec![ListItem::new("No campaigns yet. Press N to create one.")])
    } else {
        List::new(items)
    }
    .block(list_block("CAMPAIGNS"))
    .highlight_style(highlight())
    .highlight_symbol("> ");

    let mut list_state = ListState::default();
    if !state.campaigns.is_empty() {
        list_state.select(Some(view.campaign_selection));
    }
    f.render_stateful_widget(list, area, &mut list_state);
}

pub fn render_gallery_list(f: &mut Frame, area: Rect, state: &DashboardState, view: &ViewState) {
    let items: Vec<ListItem> = state
        .gallery
        .iter()
        .map(|item| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{} ", format_date(item.created_at.as_deref())),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    item.display_title().to_string(),
                    Style::default().fg(Color::LightMagenta),
                ),
            ]))
        })
        .collect();

    let list = if items.is_empty() {
        List::new(vec![ListItem::new("No photos yet. Press N to upload one.")])
    } else {
        List::new(items)
    }
    .block(list_block("GALLERY"))
    .highlight_style(highlight())
    .highlight_symbol("> ");

    let mut list_state = ListState::default();
    if !state.gallery.is_empty() {
        list_state.select(Some(view.gallery_selection));
    }
    f.render_stateful_widget(list, area, &mut list_state);
}

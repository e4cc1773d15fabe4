//! Dashboard info panel component
//!
//! Renders the details of the selected campaign or photo

use super::super::state::ViewState;
use super::super::utils::{campaign_status_color, format_amount, format_date};
use crate::controller::{DashboardState, Tab};
use crate::models::{Campaign, GalleryItem};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Gauge, Padding, Paragraph, Wrap};

fn info_block() -> Block<'static> {
    Block::default()
        .title("DETAILS")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1))
}

fn field<'a>(label: &'a str, value: String, color: Color) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{}: ", label), Style::default().fg(Color::Gray)),
        Span::styled(value, Style::default().fg(color)),
    ])
}

pub fn render_info_panel(f: &mut Frame, area: Rect, state: &DashboardState, view: &ViewState) {
    match state.active_tab {
        Tab::Campaigns => match state.campaigns.get(view.campaign_selection) {
            Some(campaign) => render_campaign_info(f, area, campaign),
            None => render_placeholder(f, area),
        },
        Tab::Gallery => match state.gallery.get(view.gallery_selection) {
            Some(item) => render_gallery_info(f, area, item),
            None => render_placeholder(f, area),
        },
    }
}

fn render_placeholder(f: &mut Frame, area: Rect) {
    let paragraph = Paragraph::new("Nothing selected").block(info_block());
    f.render_widget(paragraph, area);
}

fn render_campaign_info(f: &mut Frame, area: Rect, campaign: &Campaign) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Fill(1), Constraint::Length(3)])
        .split(area);

    let location = match (campaign.latitude, campaign.longitude) {
        (Some(lat), Some(lng)) => format!("{:.4}, {:.4}", lat, lng),
        _ => "-".to_string(),
    };
    let info_lines = vec![
        Line::from(Span::styled(
            campaign.title.clone(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        field(
            "Status",
            campaign.status.to_string(),
            campaign_status_color(campaign.status),
        ),
        field(
            "Key",
            campaign
                .key()
                .map(|id| id.to_string())
                .unwrap_or_else(|| "missing".to_string()),
            Color::LightBlue,
        ),
        field(
            "Region",
            campaign.region.clone().unwrap_or_else(|| "-".to_string()),
            Color::LightCyan,
        ),
        field("Location", location, Color::LightCyan),
        field(
            "Raised",
            format_amount(campaign.raised_amount),
            Color::LightGreen,
        ),
        field(
            "Target",
            format_amount(campaign.target_amount),
            Color::LightYellow,
        ),
        field(
            "Created",
            format_date(campaign.created_at.as_deref()),
            Color::Gray,
        ),
        field(
            "Image",
            campaign.image_url.clone().unwrap_or_else(|| "-".to_string()),
            Color::DarkGray,
        ),
        Line::from(""),
        Line::from(campaign.description.clone().unwrap_or_default()),
    ];

    let info_paragraph = Paragraph::new(info_lines)
        .block(info_block())
        .wrap(Wrap { trim: true });
    f.render_widget(info_paragraph, chunks[0]);

    let progress = campaign.progress_percent();
    let gauge = Gauge::default()
        .block(
            Block::default()
                .title("Progress")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::LightGreen)),
        )
        .gauge_style(
            Style::default()
                .fg(Color::LightGreen)
                .add_modifier(Modifier::BOLD),
        )
        .ratio((progress / 100.0).clamp(0.0, 1.0))
        .label(format!("{:.1}%", progress));
    f.render_widget(gauge, chunks[1]);
}

fn render_gallery_info(f: &mut Frame, area: Rect, item: &GalleryItem) {
    let info_lines = vec![
        Line::from(Span::styled(
            item.display_title().to_string(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        field(
            "Id",
            item.id
                .as_ref()
                .map(|id| id.to_string())
                .unwrap_or_else(|| "missing".to_string()),
            Color::LightBlue,
        ),
        field(
            "Uploaded",
            format_date(item.created_at.as_deref()),
            Color::Gray,
        ),
        field(
            "URL",
            item.image_url.clone().unwrap_or_else(|| "-".to_string()),
            Color::LightMagenta,
        ),
    ];

    let info_paragraph = Paragraph::new(info_lines)
        .block(info_block())
        .wrap(Wrap { trim: true });
    f.render_widget(info_paragraph, area);
}

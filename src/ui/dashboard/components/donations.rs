//! Donation ledger table

use super::super::utils::{donation_status_color, format_amount, format_date, truncate};
use crate::controller::DashboardState;
use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Cell, Row, Table};

pub fn render_donations_table(f: &mut Frame, area: Rect, state: &DashboardState) {
    // Header row and borders take three rows
    let visible = area.height.saturating_sub(3) as usize;

    let rows: Vec<Row> = state
        .donations
        .iter()
        .take(visible)
        .map(|donation| {
            let donor = donation.donor_name();
            Row::new(vec![
                Cell::from(format_date(donation.created_at.as_deref())),
                Cell::from(if donor.is_empty() {
                    "Anonymous".to_string()
                } else {
                    truncate(&donor, 24)
                }),
                Cell::from(truncate(donation.campaign_title(), 28)),
                Cell::from(format!("+{}", format_amount(donation.amount)))
                    .style(Style::default().fg(Color::LightGreen)),
                Cell::from(donation.status.to_string())
                    .style(Style::default().fg(donation_status_color(donation.status))),
            ])
        })
        .collect();

    let header = Row::new(vec!["Date", "Donor", "Campaign", "Amount", "Status"]).style(
        Style::default()
            .fg(Color::Gray)
            .add_modifier(Modifier::BOLD),
    );

    let table = Table::new(
        rows,
        [
            Constraint::Length(10),
            Constraint::Fill(1),
            Constraint::Fill(1),
            Constraint::Length(14),
            Constraint::Length(8),
        ],
    )
    .header(header)
    .column_spacing(2)
    .block(
        Block::default()
            .title(format!("RECENT DONATIONS ({})", state.donations.len()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(table, area);
}

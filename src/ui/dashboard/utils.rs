//! Dashboard utility functions
//!
//! Formatting helpers shared by the dashboard components and the headless
//! listings.

use crate::events::Topic;
use crate::models::{CampaignStatus, DonationStatus};
use ratatui::prelude::Color;

/// Get a ratatui color for a notification based on what it concerns
pub fn get_topic_color(topic: Topic) -> Color {
    match topic {
        Topic::Data => Color::Cyan,
        Topic::Campaign => Color::Yellow,
        Topic::Gallery => Color::LightMagenta,
    }
}

pub fn campaign_status_color(status: CampaignStatus) -> Color {
    match status {
        CampaignStatus::Active => Color::Green,
        CampaignStatus::Closed => Color::DarkGray,
        CampaignStatus::Unknown => Color::Gray,
    }
}

pub fn donation_status_color(status: DonationStatus) -> Color {
    match status {
        DonationStatus::Paid => Color::Green,
        DonationStatus::Pending => Color::Yellow,
        DonationStatus::Other => Color::Gray,
    }
}

/// Formats a monetary amount as `$1,234` or `$1,234.50`.
pub fn format_amount(amount: f64) -> String {
    let amount = if amount.is_finite() { amount } else { 0.0 };
    let cents = (amount.abs() * 100.0).round() as u64;
    let (whole, fraction) = (cents / 100, cents % 100);

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    if fraction == 0 {
        format!("{}${}", sign, grouped)
    } else {
        format!("{}${}.{:02}", sign, grouped, fraction)
    }
}

/// Format compact timestamp with date and time from full timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    // Extract from "YYYY-MM-DD HH:MM:SS" format
    let mut parts = timestamp.split(' ');
    if let (Some(date_part), Some(time_part)) = (parts.next(), parts.next()) {
        if let (Some(month_day), Some(hour_min)) = (date_part.get(5..10), time_part.get(0..5)) {
            return format!("{} {}", month_day, hour_min);
        }
    }
    timestamp.to_string()
}

/// Renders a backend `created_at` value (RFC 3339) as a local date.
pub fn format_date(created_at: Option<&str>) -> String {
    match created_at {
        Some(raw) => chrono::DateTime::parse_from_rfc3339(raw)
            .map(|dt| {
                dt.with_timezone(&chrono::Local)
                    .format("%Y-%m-%d")
                    .to_string()
            })
            .unwrap_or_else(|_| raw.chars().take(10).collect()),
        None => "-".to_string(),
    }
}

/// Clean HTTP error messages
pub fn clean_http_error_message(msg: &str) -> String {
    if msg.contains("error sending request") {
        return msg
            .split_once(": error sending request")
            .map(|(context, _)| format!("{}: backend unreachable", context))
            .unwrap_or_else(|| "Backend unreachable".to_string());
    }
    if msg.contains("operation timed out") {
        return "Request timed out".to_string();
    }
    msg.to_string()
}

/// Truncates to `max` characters, marking the cut with an ellipsis.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", kept)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount_groups_thousands() {
        assert_eq!(format_amount(0.0), "$0");
        assert_eq!(format_amount(999.0), "$999");
        assert_eq!(format_amount(1234.0), "$1,234");
        assert_eq!(format_amount(1234567.5), "$1,234,567.50");
        assert_eq!(format_amount(-42.0), "-$42");
        assert_eq!(format_amount(f64::NAN), "$0");
    }

    #[test]
    fn test_format_compact_timestamp() {
        assert_eq!(format_compact_timestamp("2025-03-14 09:26:53"), "03-14 09:26");
        assert_eq!(format_compact_timestamp("garbage"), "garbage");
    }

    #[test]
    fn test_format_date_falls_back_to_prefix() {
        assert_eq!(format_date(None), "-");
        assert_eq!(format_date(Some("2025-01-02T03:04:05")), "2025-01-02");
    }

    #[test]
    fn test_truncate_marks_cut() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a long campaign title", 6), "a lon…");
    }

    #[test]
    fn test_clean_http_error_message() {
        assert_eq!(
            clean_http_error_message("Failed to load data: error sending request for url"),
            "Failed to load data: backend unreachable"
        );
        assert_eq!(clean_http_error_message("Deleted campaign 3"), "Deleted campaign 3");
    }
}

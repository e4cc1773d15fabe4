//! Aggregate figures shown on the stat cards.

use crate::models::{Campaign, Donation};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DashboardStats {
    /// Sum of paid donation amounts.
    pub total_raised: f64,
    /// Every fetched donation, whatever its status.
    pub total_donors: usize,
    pub active_campaigns: usize,
}

impl DashboardStats {
    /// Derives the statistics from a freshly fetched snapshot.
    pub fn compute(campaigns: &[Campaign], donations: &[Donation]) -> Self {
        let total_raised = donations
            .iter()
            .filter(|d| d.is_paid())
            .map(|d| d.amount)
            .sum();

        Self {
            total_raised,
            total_donors: donations.len(),
            active_campaigns: campaigns.iter().filter(|c| c.is_active()).count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CampaignStatus, DonationStatus};

    fn donation(amount: f64, status: DonationStatus) -> Donation {
        Donation {
            amount,
            status,
            ..Donation::default()
        }
    }

    fn campaign(status: CampaignStatus) -> Campaign {
        Campaign {
            status,
            ..Campaign::default()
        }
    }

    #[test]
    fn test_only_paid_donations_count_towards_raised() {
        let donations = vec![
            donation(100.0, DonationStatus::Paid),
            donation(50.0, DonationStatus::Pending),
        ];
        let stats = DashboardStats::compute(&[], &donations);

        assert_eq!(stats.total_raised, 100.0);
        assert_eq!(stats.total_donors, 2);
    }

    #[test]
    fn test_donor_count_ignores_status() {
        let donations = vec![
            donation(10.0, DonationStatus::Other),
            donation(20.0, DonationStatus::Pending),
            donation(30.0, DonationStatus::Paid),
            donation(40.0, DonationStatus::Paid),
        ];
        let stats = DashboardStats::compute(&[], &donations);

        assert_eq!(stats.total_donors, 4);
        assert_eq!(stats.total_raised, 70.0);
    }

    #[test]
    fn test_active_campaigns_are_counted() {
        let campaigns = vec![
            campaign(CampaignStatus::Active),
            campaign(CampaignStatus::Active),
            campaign(CampaignStatus::Closed),
        ];
        let stats = DashboardStats::compute(&campaigns, &[]);

        assert_eq!(stats.active_campaigns, 2);
        assert_eq!(stats.total_raised, 0.0);
        assert_eq!(stats.total_donors, 0);
    }

    #[test]
    fn test_rows_without_status_are_not_active() {
        let campaigns: Vec<Campaign> = serde_json::from_value(serde_json::json!([
            { "status": "active" },
            { "status": null },
            {},
            { "status": "paused" }
        ]))
        .unwrap();
        let stats = DashboardStats::compute(&campaigns, &[]);

        assert_eq!(stats.active_campaigns, 1);
        assert_eq!(campaigns[1].status, CampaignStatus::Unknown);
        assert_eq!(campaigns[2].status, CampaignStatus::Unknown);
    }

    #[test]
    fn test_empty_snapshot_yields_zeroes() {
        assert_eq!(DashboardStats::compute(&[], &[]), DashboardStats::default());
    }
}

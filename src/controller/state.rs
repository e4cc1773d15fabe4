//! Dashboard state container
//!
//! The view only ever sees `&DashboardState`; every mutation goes through the
//! controller.

use crate::consts::cli_consts::MAX_NOTIFICATIONS;
use crate::events::Event;
use crate::models::{Campaign, CampaignForm, Donation, EntityId, GalleryItem};
use crate::stats::DashboardStats;

use std::collections::VecDeque;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, strum::Display)]
pub enum Tab {
    #[default]
    Campaigns,
    Gallery,
}

impl Tab {
    pub fn toggle(self) -> Self {
        match self {
            Tab::Campaigns => Tab::Gallery,
            Tab::Gallery => Tab::Campaigns,
        }
    }
}

/// What the modal form is editing.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum EditTarget {
    #[default]
    New,
    Existing(Box<Campaign>),
}

impl EditTarget {
    /// Id of the campaign being edited, if it has one.
    pub fn key(&self) -> Option<EntityId> {
        match self {
            EditTarget::New => None,
            EditTarget::Existing(campaign) => campaign.key().cloned(),
        }
    }

    pub fn is_edit(&self) -> bool {
        self.key().is_some()
    }

    /// Initial form contents for this target.
    pub fn form(&self) -> CampaignForm {
        match self {
            EditTarget::New => CampaignForm::default(),
            EditTarget::Existing(campaign) => CampaignForm::from_campaign(campaign),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ModalState {
    pub open: bool,
    pub target: EditTarget,
}

#[derive(Debug, Default)]
pub struct DashboardState {
    pub active_tab: Tab,
    /// Set while a refresh is in flight.
    pub loading: bool,
    pub modal: ModalState,
    pub campaigns: Vec<Campaign>,
    pub donations: Vec<Donation>,
    pub gallery: Vec<GalleryItem>,
    pub stats: DashboardStats,
    /// Most recent notifications, oldest first.
    pub notifications: VecDeque<Event>,
}

impl DashboardState {
    /// Swaps in a freshly fetched snapshot and recomputes the statistics.
    pub(super) fn replace_snapshot(
        &mut self,
        campaigns: Vec<Campaign>,
        donations: Vec<Donation>,
        gallery: Vec<GalleryItem>,
    ) {
        self.stats = DashboardStats::compute(&campaigns, &donations);
        self.campaigns = campaigns;
        self.donations = donations;
        self.gallery = gallery;
    }

    pub(super) fn push_notification(&mut self, event: Event) {
        if self.notifications.len() >= MAX_NOTIFICATIONS {
            self.notifications.pop_front();
        }
        self.notifications.push_back(event);
    }

    pub fn latest_notification(&self) -> Option<&Event> {
        self.notifications.back()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::Topic;

    #[test]
    fn test_notifications_are_bounded() {
        let mut state = DashboardState::default();
        for i in 0..MAX_NOTIFICATIONS + 5 {
            state.push_notification(Event::success(Topic::Data, format!("event {}", i)));
        }
        assert_eq!(state.notifications.len(), MAX_NOTIFICATIONS);
        assert_eq!(state.notifications.front().unwrap().msg, "event 5");
        assert_eq!(
            state.latest_notification().unwrap().msg,
            format!("event {}", MAX_NOTIFICATIONS + 4)
        );
    }

    #[test]
    fn test_edit_target_key_and_form() {
        assert_eq!(EditTarget::New.key(), None);
        assert_eq!(EditTarget::New.form(), CampaignForm::default());

        let campaign = Campaign {
            id: Some(EntityId::Number(7)),
            title: "Wells".to_string(),
            ..Campaign::default()
        };
        let target = EditTarget::Existing(Box::new(campaign));
        assert!(target.is_edit());
        assert_eq!(target.key(), Some(EntityId::Number(7)));
        assert_eq!(target.form().title, "Wells");
    }
}

//! Dashboard actions

use super::state::{DashboardState, EditTarget, ModalState, Tab};
use super::{Confirmation, DashboardError};
use crate::backend::Backend;
use crate::environment::Environment;
use crate::error_classifier::ErrorClassifier;
use crate::events::{Event, Topic};
use crate::logging;
use crate::models::{
    Campaign, CampaignForm, CampaignPayload, EntityId, EntityKind, GalleryPayload, ImageFile,
};

/// Result of a delete request that passed validation.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    /// The operator answered no; nothing was sent.
    Declined,
}

impl From<EntityKind> for Topic {
    fn from(kind: EntityKind) -> Self {
        match kind {
            EntityKind::Campaign => Topic::Campaign,
            EntityKind::Gallery => Topic::Gallery,
        }
    }
}

pub struct DashboardController {
    backend: Box<dyn Backend>,
    confirmation: Box<dyn Confirmation>,
    classifier: ErrorClassifier,
    state: DashboardState,
}

impl DashboardController {
    pub fn new(backend: Box<dyn Backend>, confirmation: Box<dyn Confirmation>) -> Self {
        Self {
            backend,
            confirmation,
            classifier: ErrorClassifier::new(),
            state: DashboardState::default(),
        }
    }

    /// Read-only view of the current state.
    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    pub fn environment(&self) -> &Environment {
        self.backend.environment()
    }

    pub fn set_active_tab(&mut self, tab: Tab) {
        self.state.active_tab = tab;
    }

    /// Opens the modal for a new record.
    pub fn open_create(&mut self) {
        self.state.modal = ModalState {
            open: true,
            target: EditTarget::New,
        };
    }

    /// Opens the modal prefilled with an existing campaign.
    pub fn open_edit(&mut self, campaign: Campaign) {
        self.state.modal = ModalState {
            open: true,
            target: EditTarget::Existing(Box::new(campaign)),
        };
    }

    pub fn close_modal(&mut self) {
        self.state.modal.open = false;
    }

    /// Fetches campaigns, donations and gallery items concurrently and
    /// replaces the snapshot. On failure the previous snapshot is kept.
    pub async fn refresh(&mut self) -> Result<(), DashboardError> {
        self.state.loading = true;
        self.notify(Event::refresh("Refreshing data..."));

        let result = tokio::try_join!(
            self.backend.list_campaigns(),
            self.backend.list_donations(),
            self.backend.list_gallery(),
        );
        self.state.loading = false;

        match result {
            Ok((campaigns, donations, gallery)) => {
                self.state.replace_snapshot(campaigns, donations, gallery);
                self.notify(Event::refresh(format!(
                    "Loaded {} campaigns, {} donations, {} photos",
                    self.state.campaigns.len(),
                    self.state.donations.len(),
                    self.state.gallery.len()
                )));
                Ok(())
            }
            Err(e) => {
                let err = DashboardError::from(e);
                self.fail(Topic::Data, "Failed to load data", &err);
                Err(err)
            }
        }
    }

    /// Saves the modal form for the active tab.
    ///
    /// Uploads `image` first when given. On success the modal closes and the
    /// data is refreshed; on failure the modal stays open.
    pub async fn submit(
        &mut self,
        form: &CampaignForm,
        image: Option<ImageFile>,
    ) -> Result<(), DashboardError> {
        let topic = match self.state.active_tab {
            Tab::Campaigns => Topic::Campaign,
            Tab::Gallery => Topic::Gallery,
        };

        match self.save(form, image).await {
            Ok(message) => {
                self.notify(Event::success(topic, message));
                self.close_modal();
                // A failed reload is already reported; the save itself went through.
                let _ = self.refresh().await;
                Ok(())
            }
            Err(err) => {
                self.fail(topic, "Failed to save", &err);
                Err(err)
            }
        }
    }

    async fn save(
        &self,
        form: &CampaignForm,
        image: Option<ImageFile>,
    ) -> Result<&'static str, DashboardError> {
        match self.state.active_tab {
            Tab::Campaigns => {
                let payload =
                    CampaignPayload::from_form(form).map_err(DashboardError::Validation)?;
                let target = self.state.modal.target.key();
                if target.is_none() && matches!(self.state.modal.target, EditTarget::Existing(_)) {
                    return Err(DashboardError::validation(
                        "Cannot update campaign: missing id",
                    ));
                }

                if target.is_none() {
                    if image.is_none() {
                        return Err(DashboardError::validation(
                            "An image is required to create a campaign",
                        ));
                    }
                    if payload.title.is_none() {
                        return Err(DashboardError::validation("A title is required"));
                    }
                }

                let payload = match image {
                    Some(image) => {
                        let url = self.backend.upload_image(&image).await?;
                        payload.merge(CampaignPayload::with_image(url))
                    }
                    None => payload,
                };

                match target {
                    Some(id) => {
                        self.backend.update_campaign(&id, &payload).await?;
                        Ok("Campaign updated")
                    }
                    None => {
                        let payload = payload.merge(CampaignPayload::activation());
                        self.backend.create_campaign(&payload).await?;
                        Ok("Campaign created")
                    }
                }
            }
            Tab::Gallery => {
                let image =
                    image.ok_or_else(|| DashboardError::validation("A photo is required"))?;
                let image_url = self.backend.upload_image(&image).await?;
                let payload = GalleryPayload {
                    title: form.title.trim().to_string(),
                    image_url,
                };
                self.backend.create_gallery_item(&payload).await?;
                Ok("Photo uploaded")
            }
        }
    }

    /// Deletes a record after confirmation. A missing or blank id fails
    /// before the operator is asked and before any remote call.
    pub async fn delete(
        &mut self,
        id: Option<EntityId>,
        kind: EntityKind,
    ) -> Result<DeleteOutcome, DashboardError> {
        let topic = Topic::from(kind);
        let Some(id) = id.filter(|id| !id.is_blank()) else {
            let err = DashboardError::validation(format!("Cannot delete {}: missing id", kind));
            self.fail(topic, "Failed to delete", &err);
            return Err(err);
        };

        let prompt = format!("Delete {} {}?", kind, id);
        if !self.confirmation.confirm(&prompt) {
            return Ok(DeleteOutcome::Declined);
        }

        let result = match kind {
            EntityKind::Campaign => self.backend.delete_campaign(&id).await,
            EntityKind::Gallery => self.backend.delete_gallery_item(&id).await,
        };

        match result {
            Ok(()) => {
                self.notify(Event::success(topic, format!("Deleted {} {}", kind, id)));
                let _ = self.refresh().await;
                Ok(DeleteOutcome::Deleted)
            }
            Err(e) => {
                let err = DashboardError::from(e);
                self.fail(topic, "Failed to delete", &err);
                Err(err)
            }
        }
    }

    /// Records a failure raised outside the controller, e.g. an unreadable
    /// image path typed into the form.
    pub fn report(&mut self, topic: Topic, context: &str, err: &DashboardError) {
        self.fail(topic, context, err);
    }

    /// Removes and returns all notifications recorded so far.
    pub fn drain_notifications(&mut self) -> Vec<Event> {
        self.state.notifications.drain(..).collect()
    }

    fn fail(&mut self, topic: Topic, context: &str, err: &DashboardError) {
        let log_level = self.classifier.classify(err);
        self.notify(Event::failure(topic, format!("{}: {}", context, err), log_level));
    }

    fn notify(&mut self, event: Event) {
        logging::emit(event.log_level, &event.msg);
        self.state.push_notification(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MockBackend;
    use crate::backend::error::BackendError;
    use crate::controller::{AssumeYes, MockConfirmation};
    use crate::events::EventType;
    use crate::models::{CampaignStatus, Donation, DonationStatus, GalleryItem};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn campaign(id: i64, status: CampaignStatus) -> Campaign {
        Campaign {
            id: Some(EntityId::Number(id)),
            title: format!("Campaign {}", id),
            target_amount: 1000.0,
            status,
            ..Campaign::default()
        }
    }

    fn donation(amount: f64, status: DonationStatus) -> Donation {
        Donation {
            amount,
            status,
            ..Donation::default()
        }
    }

    fn server_error() -> BackendError {
        BackendError::Http {
            status: 500,
            message: "boom".to_string(),
        }
    }

    /// Expects exactly `times` refreshes returning a fixed snapshot.
    fn expect_refresh(backend: &mut MockBackend, times: usize) {
        backend.expect_list_campaigns().times(times).returning(|| {
            Ok(vec![
                campaign(1, CampaignStatus::Active),
                campaign(2, CampaignStatus::Active),
                campaign(3, CampaignStatus::Closed),
            ])
        });
        backend.expect_list_donations().times(times).returning(|| {
            Ok(vec![
                donation(100.0, DonationStatus::Paid),
                donation(50.0, DonationStatus::Pending),
            ])
        });
        backend
            .expect_list_gallery()
            .times(times)
            .returning(|| Ok(vec![GalleryItem::default()]));
    }

    fn controller(backend: MockBackend) -> DashboardController {
        DashboardController::new(Box::new(backend), Box::new(AssumeYes))
    }

    fn last_event(controller: &DashboardController) -> Event {
        controller.state().latest_notification().unwrap().clone()
    }

    fn campaign_form() -> CampaignForm {
        CampaignForm {
            title: "Clean Water".to_string(),
            description: "Wells for the village".to_string(),
            target: "5000".to_string(),
            region: "Asia".to_string(),
            ..CampaignForm::default()
        }
    }

    #[tokio::test]
    async fn test_refresh_replaces_snapshot_and_computes_stats() {
        let mut backend = MockBackend::new();
        expect_refresh(&mut backend, 1);
        let mut controller = controller(backend);

        controller.refresh().await.unwrap();

        let state = controller.state();
        assert!(!state.loading);
        assert_eq!(state.campaigns.len(), 3);
        assert_eq!(state.gallery.len(), 1);
        assert_eq!(state.stats.total_raised, 100.0);
        assert_eq!(state.stats.total_donors, 2);
        assert_eq!(state.stats.active_campaigns, 2);
    }

    #[tokio::test]
    async fn test_failed_refresh_keeps_previous_snapshot() {
        let mut backend = MockBackend::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        backend.expect_list_campaigns().returning(move || {
            if counter.fetch_add(1, Ordering::SeqCst) == 0 {
                Ok(vec![campaign(1, CampaignStatus::Active)])
            } else {
                Err(server_error())
            }
        });
        backend.expect_list_donations().returning(|| {
            Ok(vec![donation(10.0, DonationStatus::Paid)])
        });
        backend.expect_list_gallery().returning(|| Ok(vec![]));
        let mut controller = controller(backend);

        controller.refresh().await.unwrap();
        let result = controller.refresh().await;

        assert!(matches!(result, Err(DashboardError::Backend(_))));
        let state = controller.state();
        assert!(!state.loading);
        assert_eq!(state.campaigns.len(), 1);
        assert_eq!(state.stats.total_raised, 10.0);
        let event = last_event(&controller);
        assert_eq!(event.event_type, EventType::Error);
        assert!(event.msg.starts_with("Failed to load data:"));
        assert!(event.msg.contains("boom"));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_delete_without_id_never_reaches_backend() {
        // No expectations: any backend or confirmation call panics.
        let backend = MockBackend::new();
        let confirmation = MockConfirmation::new();
        let mut controller = DashboardController::new(Box::new(backend), Box::new(confirmation));

        let result = controller.delete(None, EntityKind::Campaign).await;
        assert!(matches!(result, Err(DashboardError::Validation(_))));

        let result = controller
            .delete(Some(EntityId::Text("  ".to_string())), EntityKind::Gallery)
            .await;
        assert!(matches!(result, Err(DashboardError::Validation(_))));

        let event = last_event(&controller);
        assert_eq!(event.event_type, EventType::Error);
        assert!(event.msg.contains("missing id"));
    }

    #[tokio::test]
    async fn test_declined_delete_sends_nothing() {
        let backend = MockBackend::new();
        let mut confirmation = MockConfirmation::new();
        confirmation
            .expect_confirm()
            .withf(|prompt| prompt.contains("campaign 4"))
            .times(1)
            .returning(|_| false);
        let mut controller = DashboardController::new(Box::new(backend), Box::new(confirmation));

        let outcome = controller
            .delete(Some(EntityId::Number(4)), EntityKind::Campaign)
            .await
            .unwrap();
        assert_eq!(outcome, DeleteOutcome::Declined);
    }

    #[tokio::test]
    async fn test_confirmed_delete_routes_by_kind_and_refreshes() {
        let mut backend = MockBackend::new();
        backend
            .expect_delete_gallery_item()
            .withf(|id| *id == EntityId::Text("img-9".to_string()))
            .times(1)
            .returning(|_| Ok(()));
        backend.expect_delete_campaign().never();
        expect_refresh(&mut backend, 1);
        let mut confirmation = MockConfirmation::new();
        confirmation.expect_confirm().times(1).returning(|_| true);
        let mut controller = DashboardController::new(Box::new(backend), Box::new(confirmation));

        let outcome = controller
            .delete(Some(EntityId::Text("img-9".to_string())), EntityKind::Gallery)
            .await
            .unwrap();

        assert_eq!(outcome, DeleteOutcome::Deleted);
        assert_eq!(controller.state().campaigns.len(), 3);
        assert!(
            controller
                .state()
                .notifications
                .iter()
                .any(|e| e.event_type == EventType::Success && e.msg == "Deleted gallery img-9")
        );
    }

    #[tokio::test]
    async fn test_failed_delete_is_reported_without_refresh() {
        let mut backend = MockBackend::new();
        backend
            .expect_delete_campaign()
            .times(1)
            .returning(|_| Err(BackendError::Http {
                status: 403,
                message: "permission denied".to_string(),
            }));
        let mut controller = controller(backend);

        let result = controller
            .delete(Some(EntityId::Number(2)), EntityKind::Campaign)
            .await;

        assert!(result.is_err());
        let event = last_event(&controller);
        assert_eq!(event.log_level, crate::logging::LogLevel::Error);
        assert!(event.msg.contains("permission denied"));
    }

    #[tokio::test]
    async fn test_create_without_image_fails_before_any_call() {
        let backend = MockBackend::new();
        let mut controller = controller(backend);
        controller.open_create();

        let result = controller.submit(&campaign_form(), None).await;

        assert!(matches!(result, Err(DashboardError::Validation(_))));
        assert!(controller.state().modal.open);
        assert!(last_event(&controller).msg.contains("image is required"));
    }

    #[tokio::test]
    async fn test_edit_without_file_keeps_existing_image() {
        let mut backend = MockBackend::new();
        backend
            .expect_update_campaign()
            .withf(|id, payload| {
                *id == EntityId::Number(7)
                    && payload.image_url.is_none()
                    && payload.status.is_none()
                    && payload.title.as_deref() == Some("Clean Water")
            })
            .times(1)
            .returning(|_, _| Ok(()));
        backend.expect_upload_image().never();
        backend.expect_create_campaign().never();
        expect_refresh(&mut backend, 1);
        let mut controller = controller(backend);

        let existing = Campaign {
            image_url: Some("https://cdn/old.png".to_string()),
            ..campaign(7, CampaignStatus::Active)
        };
        controller.open_edit(existing);
        controller.submit(&campaign_form(), None).await.unwrap();

        assert!(!controller.state().modal.open);
        assert_eq!(controller.state().stats.active_campaigns, 2);
    }

    #[tokio::test]
    async fn test_create_uploads_image_and_activates_campaign() {
        let mut backend = MockBackend::new();
        backend
            .expect_upload_image()
            .withf(|image| image.file_name == "well.png")
            .times(1)
            .returning(|_| Ok("https://cdn/public/1-well.png".to_string()));
        backend
            .expect_create_campaign()
            .withf(|payload| {
                payload.image_url.as_deref() == Some("https://cdn/public/1-well.png")
                    && payload.status == Some(CampaignStatus::Active)
                    && payload.target_amount == Some(5000.0)
            })
            .times(1)
            .returning(|_| Ok(()));
        expect_refresh(&mut backend, 1);
        let mut controller = controller(backend);

        controller.open_create();
        controller
            .submit(
                &campaign_form(),
                Some(ImageFile::new("well.png", vec![1, 2, 3])),
            )
            .await
            .unwrap();

        assert!(!controller.state().modal.open);
        assert!(
            controller
                .state()
                .notifications
                .iter()
                .any(|e| e.msg == "Campaign created")
        );
    }

    #[tokio::test]
    async fn test_failed_submit_keeps_modal_open() {
        let mut backend = MockBackend::new();
        backend
            .expect_update_campaign()
            .times(1)
            .returning(|_, _| Err(server_error()));
        let mut controller = controller(backend);

        controller.open_edit(campaign(3, CampaignStatus::Closed));
        let result = controller.submit(&campaign_form(), None).await;

        assert!(result.is_err());
        assert!(controller.state().modal.open);
        assert_eq!(last_event(&controller).log_level, crate::logging::LogLevel::Warn);
    }

    #[tokio::test]
    async fn test_editing_keyless_campaign_does_not_create() {
        let mut backend = MockBackend::new();
        backend.expect_upload_image().never();
        backend.expect_update_campaign().never();
        backend.expect_create_campaign().never();
        let mut controller = controller(backend);

        controller.open_edit(Campaign {
            id: Some(EntityId::Text(String::new())),
            ..Campaign::default()
        });
        let result = controller
            .submit(&campaign_form(), Some(ImageFile::new("x.png", vec![1])))
            .await;

        assert!(matches!(result, Err(DashboardError::Validation(_))));
        assert!(controller.state().modal.open);
        assert!(last_event(&controller).msg.contains("missing id"));
    }

    #[tokio::test]
    async fn test_invalid_form_is_rejected_before_upload() {
        let backend = MockBackend::new();
        let mut controller = controller(backend);
        controller.open_create();

        let form = CampaignForm {
            latitude: "north".to_string(),
            ..campaign_form()
        };
        let result = controller
            .submit(&form, Some(ImageFile::new("a.png", vec![0])))
            .await;

        assert!(matches!(result, Err(DashboardError::Validation(msg)) if msg.contains("latitude")));
    }

    #[tokio::test]
    async fn test_gallery_submit_requires_photo() {
        let backend = MockBackend::new();
        let mut controller = controller(backend);
        controller.set_active_tab(Tab::Gallery);
        controller.open_create();

        let form = CampaignForm {
            title: "Harvest day".to_string(),
            ..CampaignForm::default()
        };
        let result = controller.submit(&form, None).await;

        assert!(matches!(result, Err(DashboardError::Validation(_))));
        assert_eq!(last_event(&controller).topic, Topic::Gallery);
    }

    #[tokio::test]
    async fn test_gallery_submit_creates_item() {
        let mut backend = MockBackend::new();
        backend
            .expect_upload_image()
            .times(1)
            .returning(|_| Ok("https://cdn/public/2-harvest.jpg".to_string()));
        backend
            .expect_create_gallery_item()
            .withf(|payload| {
                payload.title == "Harvest day"
                    && payload.image_url == "https://cdn/public/2-harvest.jpg"
            })
            .times(1)
            .returning(|_| Ok(()));
        expect_refresh(&mut backend, 1);
        let mut controller = controller(backend);
        controller.set_active_tab(Tab::Gallery);
        controller.open_create();

        let form = CampaignForm {
            title: " Harvest day ".to_string(),
            ..CampaignForm::default()
        };
        controller
            .submit(&form, Some(ImageFile::new("harvest.jpg", vec![9])))
            .await
            .unwrap();

        assert!(!controller.state().modal.open);
    }

    #[test]
    fn test_modal_actions() {
        let mut controller = controller(MockBackend::new());
        controller.open_edit(campaign(5, CampaignStatus::Active));
        assert!(controller.state().modal.open);
        assert_eq!(controller.state().modal.target.key(), Some(EntityId::Number(5)));

        controller.close_modal();
        assert!(!controller.state().modal.open);

        controller.open_create();
        assert_eq!(controller.state().modal.target, EditTarget::New);
    }

    #[tokio::test]
    async fn test_drain_notifications_empties_log() {
        let mut backend = MockBackend::new();
        expect_refresh(&mut backend, 1);
        let mut controller = controller(backend);
        controller.refresh().await.unwrap();

        let drained = controller.drain_notifications();
        assert!(!drained.is_empty());
        assert!(controller.state().notifications.is_empty());
    }
}

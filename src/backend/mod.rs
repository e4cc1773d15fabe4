use crate::backend::error::BackendError;
use crate::environment::Environment;
use crate::models::{
    Campaign, CampaignPayload, Donation, EntityId, GalleryItem, GalleryPayload, ImageFile,
};

pub(crate) mod client;
pub use client::BackendClient;
pub mod error;

#[cfg(test)]
use mockall::automock;

/// Data-access operations against the hosted tables and storage bucket.
///
/// Every call is a single attempt; failures reported by the service are
/// returned as-is.
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait Backend: Send + Sync {
    fn environment(&self) -> &Environment;

    /// Campaigns with their running totals, newest first.
    async fn list_campaigns(&self) -> Result<Vec<Campaign>, BackendError>;

    /// Donations joined with the title of their campaign.
    async fn list_donations(&self) -> Result<Vec<Donation>, BackendError>;

    /// Gallery items, newest first.
    async fn list_gallery(&self) -> Result<Vec<GalleryItem>, BackendError>;

    /// Uploads an image to the bucket and returns its public URL.
    async fn upload_image(&self, image: &ImageFile) -> Result<String, BackendError>;

    async fn create_campaign(&self, payload: &CampaignPayload) -> Result<(), BackendError>;

    async fn update_campaign(
        &self,
        id: &EntityId,
        payload: &CampaignPayload,
    ) -> Result<(), BackendError>;

    async fn delete_campaign(&self, id: &EntityId) -> Result<(), BackendError>;

    async fn create_gallery_item(&self, payload: &GalleryPayload) -> Result<(), BackendError>;

    async fn delete_gallery_item(&self, id: &EntityId) -> Result<(), BackendError>;
}

//! Backend Client
//!
//! HTTP client for the hosted table API (`/rest/v1`) and storage API
//! (`/storage/v1`).

use crate::backend::Backend;
use crate::backend::error::BackendError;
use crate::consts::cli_consts::{http, storage, tables};
use crate::environment::Environment;
use crate::models::{
    Campaign, CampaignPayload, Donation, EntityId, GalleryItem, GalleryPayload, ImageFile,
};
use chrono::Utc;
use log::debug;
use reqwest::{Client, ClientBuilder, Method, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;

// User-Agent string with CLI version
const USER_AGENT: &str = concat!("campaign-admin/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct BackendClient {
    client: Client,
    environment: Environment,
    api_key: String,
    bucket: String,
}

impl BackendClient {
    /// Creates a client for the given deployment.
    ///
    /// # Errors
    /// Returns a `BackendError::Reqwest` if the HTTP client cannot be built.
    pub fn new(
        environment: Environment,
        api_key: impl Into<String>,
        bucket: impl Into<String>,
    ) -> Result<Self, BackendError> {
        let client = ClientBuilder::new()
            .connect_timeout(http::connect_timeout())
            .timeout(http::request_timeout())
            .build()?;
        Ok(Self {
            client,
            environment,
            api_key: api_key.into(),
            bucket: bucket.into(),
        })
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.environment.base_url(),
            endpoint.trim_start_matches('/')
        )
    }

    fn table_url(&self, table: &str, query: &str) -> String {
        if query.is_empty() {
            self.build_url(&format!("rest/v1/{}", table))
        } else {
            self.build_url(&format!("rest/v1/{}?{}", table, query))
        }
    }

    /// Address at which an uploaded object is publicly served.
    pub fn public_url(&self, object_path: &str) -> String {
        self.build_url(&format!(
            "storage/v1/object/public/{}/{}",
            self.bucket, object_path
        ))
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        debug!("{} {}", method, url);
        self.client
            .request(method, url)
            .header("apikey", &self.api_key)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("User-Agent", USER_AGENT)
    }

    async fn handle_response_status(response: Response) -> Result<Response, BackendError> {
        if !response.status().is_success() {
            return Err(BackendError::from_response(response).await);
        }
        Ok(response)
    }

    async fn get_rows<T: DeserializeOwned>(
        &self,
        table: &str,
        query: &str,
    ) -> Result<Vec<T>, BackendError> {
        let url = self.table_url(table, query);
        let response = self.request(Method::GET, &url).send().await?;

        let response = Self::handle_response_status(response).await?;
        let response_bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&response_bytes)?)
    }

    async fn send_json(
        &self,
        method: Method,
        url: &str,
        body: Vec<u8>,
    ) -> Result<(), BackendError> {
        let response = self
            .request(method, url)
            .header("Content-Type", "application/json")
            .header("Prefer", "return=minimal")
            .body(body)
            .send()
            .await?;

        Self::handle_response_status(response).await?;
        Ok(())
    }

    async fn delete_row(&self, table: &str, id: &EntityId) -> Result<(), BackendError> {
        let url = self.table_url(table, &id_filter(id));
        let response = self.request(Method::DELETE, &url).send().await?;

        Self::handle_response_status(response).await?;
        Ok(())
    }
}

/// Filter selecting a single row by id, e.g. `id=eq.7`.
fn id_filter(id: &EntityId) -> String {
    format!("id=eq.{}", urlencoding::encode(&id.to_string()))
}

/// Inserts go out as a one-element array of rows.
fn insert_body<T: Serialize>(row: &T) -> Result<Vec<u8>, BackendError> {
    Ok(serde_json::to_vec(&[row])?)
}

/// Object path for an upload: `public/<millis>-<name with whitespace dashed>`.
pub(crate) fn object_path(file_name: &str, timestamp_millis: i64) -> String {
    let sanitized: String = file_name
        .chars()
        .map(|c| if c.is_whitespace() { '-' } else { c })
        .collect();
    format!(
        "{}/{}-{}",
        storage::UPLOAD_PREFIX,
        timestamp_millis,
        urlencoding::encode(&sanitized)
    )
}

#[async_trait::async_trait]
impl Backend for BackendClient {
    fn environment(&self) -> &Environment {
        &self.environment
    }

    async fn list_campaigns(&self) -> Result<Vec<Campaign>, BackendError> {
        self.get_rows(tables::CAMPAIGN_STATS, "select=*&order=created_at.desc")
            .await
    }

    async fn list_donations(&self) -> Result<Vec<Donation>, BackendError> {
        let query = format!("select=*,{}(title)", tables::CAMPAIGN_STATS);
        self.get_rows(tables::DONATIONS, &query).await
    }

    async fn list_gallery(&self) -> Result<Vec<GalleryItem>, BackendError> {
        self.get_rows(tables::GALLERY, "select=*&order=created_at.desc")
            .await
    }

    async fn upload_image(&self, image: &ImageFile) -> Result<String, BackendError> {
        let path = object_path(&image.file_name, Utc::now().timestamp_millis());
        let url = self.build_url(&format!("storage/v1/object/{}/{}", self.bucket, path));
        let response = self
            .request(Method::POST, &url)
            .header("Content-Type", image.content_type())
            .header("x-upsert", "false")
            .body(image.bytes.clone())
            .send()
            .await?;

        Self::handle_response_status(response).await?;
        Ok(self.public_url(&path))
    }

    async fn create_campaign(&self, payload: &CampaignPayload) -> Result<(), BackendError> {
        let url = self.table_url(tables::CAMPAIGNS, "");
        self.send_json(Method::POST, &url, insert_body(payload)?)
            .await
    }

    async fn update_campaign(
        &self,
        id: &EntityId,
        payload: &CampaignPayload,
    ) -> Result<(), BackendError> {
        let url = self.table_url(tables::CAMPAIGNS, &id_filter(id));
        self.send_json(Method::PATCH, &url, serde_json::to_vec(payload)?)
            .await
    }

    async fn delete_campaign(&self, id: &EntityId) -> Result<(), BackendError> {
        self.delete_row(tables::CAMPAIGNS, id).await
    }

    async fn create_gallery_item(&self, payload: &GalleryPayload) -> Result<(), BackendError> {
        let url = self.table_url(tables::GALLERY, "");
        self.send_json(Method::POST, &url, insert_body(payload)?)
            .await
    }

    async fn delete_gallery_item(&self, id: &EntityId) -> Result<(), BackendError> {
        self.delete_row(tables::GALLERY, id).await
    }
}

//! Records exchanged with the backend
//!
//! Row types returned by the table API and the payload types sent back to it.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt::{Display, Formatter};
use std::path::Path;

/// Opaque row identifier. Tables may key rows by integer or by string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntityId {
    Number(i64),
    Text(String),
}

impl EntityId {
    /// A string id with no visible characters is treated as missing.
    pub fn is_blank(&self) -> bool {
        match self {
            EntityId::Number(_) => false,
            EntityId::Text(text) => text.trim().is_empty(),
        }
    }

    /// Parses an id typed by the operator. Integers become `Number`.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        match trimmed.parse::<i64>() {
            Ok(n) => EntityId::Number(n),
            Err(_) => EntityId::Text(trimmed.to_string()),
        }
    }
}

impl Display for EntityId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityId::Number(n) => write!(f, "{}", n),
            EntityId::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Which kind of record a delete targets.
#[derive(Debug, Copy, Clone, PartialEq, Eq, strum::Display, clap::ValueEnum)]
#[strum(serialize_all = "lowercase")]
pub enum EntityKind {
    Campaign,
    Gallery,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
pub enum CampaignStatus {
    #[strum(serialize = "ACTIVE")]
    Active,
    #[strum(serialize = "CLOSED")]
    Closed,
    /// Also used when the row has no status at all.
    #[default]
    #[serde(other)]
    #[strum(serialize = "UNKNOWN")]
    Unknown,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
pub enum DonationStatus {
    #[strum(serialize = "PAID")]
    Paid,
    #[default]
    #[strum(serialize = "PENDING")]
    Pending,
    #[serde(other)]
    #[strum(serialize = "OTHER")]
    Other,
}

/// A row of the `campaign_stats` view.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Campaign {
    #[serde(default)]
    pub id: Option<EntityId>,
    /// The stats view exposes the campaign key under this name.
    #[serde(default)]
    pub campaign_id: Option<EntityId>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub target_amount: f64,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub raised_amount: f64,
    #[serde(default, deserialize_with = "lenient_optional_amount")]
    pub progress_percentage: Option<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: CampaignStatus,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default, deserialize_with = "lenient_optional_amount")]
    pub latitude: Option<f64>,
    #[serde(default, deserialize_with = "lenient_optional_amount")]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Campaign {
    /// Key used for updates and deletes: `campaign_id`, falling back to `id`.
    pub fn key(&self) -> Option<&EntityId> {
        self.campaign_id
            .as_ref()
            .filter(|id| !id.is_blank())
            .or(self.id.as_ref())
            .filter(|id| !id.is_blank())
    }

    pub fn is_active(&self) -> bool {
        self.status == CampaignStatus::Active
    }

    /// Funding progress in percent, capped at 100. A zero target counts as 1.
    pub fn progress_percent(&self) -> f64 {
        let target = if self.target_amount > 0.0 {
            self.target_amount
        } else {
            1.0
        };
        (self.raised_amount.max(0.0) / target * 100.0).min(100.0)
    }
}

/// Title of the campaign a donation belongs to, as embedded by the join.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CampaignRef {
    #[serde(default)]
    pub title: Option<String>,
}

/// A row of the `donations` table joined with its campaign title.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Donation {
    #[serde(default)]
    pub id: Option<EntityId>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub amount: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: DonationStatus,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default, rename = "campaign_stats", alias = "campaigns")]
    pub campaign: Option<CampaignRef>,
}

impl Donation {
    pub fn is_paid(&self) -> bool {
        self.status == DonationStatus::Paid
    }

    pub fn donor_name(&self) -> String {
        let parts: Vec<&str> = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .filter(|part| !part.trim().is_empty())
            .collect();
        parts.join(" ")
    }

    pub fn campaign_title(&self) -> &str {
        self.campaign
            .as_ref()
            .and_then(|c| c.title.as_deref())
            .unwrap_or("Unknown")
    }
}

/// A row of the `gallery` table.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GalleryItem {
    #[serde(default)]
    pub id: Option<EntityId>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl GalleryItem {
    pub fn display_title(&self) -> &str {
        match self.title.as_deref() {
            Some(title) if !title.trim().is_empty() => title,
            _ => "Untitled",
        }
    }
}

/// Raw text entered in the create/edit form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CampaignForm {
    pub title: String,
    pub description: String,
    pub target: String,
    pub region: String,
    pub latitude: String,
    pub longitude: String,
}

impl CampaignForm {
    /// Prefills the form from an existing campaign.
    pub fn from_campaign(campaign: &Campaign) -> Self {
        fn number(value: Option<f64>) -> String {
            value.map(|v| v.to_string()).unwrap_or_default()
        }
        let target = if campaign.target_amount > 0.0 {
            campaign.target_amount.to_string()
        } else {
            String::new()
        };
        Self {
            title: campaign.title.clone(),
            description: campaign.description.clone().unwrap_or_default(),
            target,
            region: campaign.region.clone().unwrap_or_default(),
            latitude: number(campaign.latitude),
            longitude: number(campaign.longitude),
        }
    }
}

/// Partial campaign record. `None` fields are left out of the request body.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct CampaignPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<CampaignStatus>,
}

impl CampaignPayload {
    /// Builds a payload from the non-empty form fields.
    ///
    /// # Errors
    /// Returns the offending field name when a numeric field does not parse
    /// or the target is below 1.
    pub fn from_form(form: &CampaignForm) -> Result<Self, String> {
        let target_amount = parse_number("target", &form.target)?;
        if let Some(target) = target_amount {
            if target < 1.0 {
                return Err("target must be at least 1".to_string());
            }
        }
        Ok(Self {
            title: non_empty(&form.title),
            description: non_empty(&form.description),
            target_amount,
            region: non_empty(&form.region),
            latitude: parse_number("latitude", &form.latitude)?,
            longitude: parse_number("longitude", &form.longitude)?,
            image_url: None,
            status: None,
        })
    }

    pub fn with_image(image_url: impl Into<String>) -> Self {
        Self {
            image_url: Some(image_url.into()),
            ..Self::default()
        }
    }

    pub fn activation() -> Self {
        Self {
            status: Some(CampaignStatus::Active),
            ..Self::default()
        }
    }

    /// Combines two payloads; fields set in `overlay` win.
    pub fn merge(self, overlay: CampaignPayload) -> Self {
        Self {
            title: overlay.title.or(self.title),
            description: overlay.description.or(self.description),
            target_amount: overlay.target_amount.or(self.target_amount),
            region: overlay.region.or(self.region),
            latitude: overlay.latitude.or(self.latitude),
            longitude: overlay.longitude.or(self.longitude),
            image_url: overlay.image_url.or(self.image_url),
            status: overlay.status.or(self.status),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GalleryPayload {
    pub title: String,
    pub image_url: String,
}

/// An image picked by the operator, read fully into memory before upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl ImageFile {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }

    /// Reads an image from disk.
    ///
    /// # Errors
    /// Returns an `std::io::Error` if the file cannot be read.
    pub fn from_path(path: &Path) -> Result<Self, std::io::Error> {
        let bytes = std::fs::read(path)?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "image".to_string());
        Ok(Self { file_name, bytes })
    }

    /// MIME type guessed from the file extension.
    pub fn content_type(&self) -> &'static str {
        let extension = Path::new(&self.file_name)
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        match extension.as_str() {
            "png" => "image/png",
            "jpg" | "jpeg" => "image/jpeg",
            "gif" => "image/gif",
            "webp" => "image/webp",
            "svg" => "image/svg+xml",
            _ => "application/octet-stream",
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn parse_number(field: &str, value: &str) -> Result<Option<f64>, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .map(Some)
        .ok_or_else(|| format!("{} must be a number, got '{}'", field, trimmed))
}

/// Numeric columns can come back as numbers, strings or null.
#[derive(Deserialize)]
#[serde(untagged)]
enum LenientNumber {
    Number(f64),
    Text(String),
}

impl LenientNumber {
    fn value(self) -> Option<f64> {
        match self {
            LenientNumber::Number(n) => Some(n),
            LenientNumber::Text(s) => s.trim().parse::<f64>().ok(),
        }
    }
}

fn lenient_optional_amount<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<LenientNumber> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(LenientNumber::value))
}

fn lenient_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_optional_amount(deserializer)?.unwrap_or(0.0))
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

//! Dashboard view state
//!
//! What only the terminal view needs to remember between frames: cursor
//! positions, the text being typed into the modal form, and the open delete
//! dialog. Fetched data lives in the controller.

use crate::controller::Tab;
use crate::models::{CampaignForm, EntityId, EntityKind};

/// A field of the create/edit form.
#[derive(Debug, Copy, Clone, PartialEq, Eq, strum::Display)]
pub enum FormField {
    Title,
    Description,
    #[strum(serialize = "Target amount")]
    Target,
    Region,
    Latitude,
    Longitude,
    #[strum(serialize = "Image file")]
    ImagePath,
}

const CAMPAIGN_FIELDS: [FormField; 7] = [
    FormField::Title,
    FormField::Description,
    FormField::Target,
    FormField::Region,
    FormField::Latitude,
    FormField::Longitude,
    FormField::ImagePath,
];

const GALLERY_FIELDS: [FormField; 2] = [FormField::Title, FormField::ImagePath];

/// Text typed into the modal, plus the path of an image to upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormEditor {
    pub form: CampaignForm,
    pub image_path: String,
    pub focus: usize,
    fields: &'static [FormField],
}

impl FormEditor {
    pub fn new(form: CampaignForm, tab: Tab) -> Self {
        let fields: &'static [FormField] = match tab {
            Tab::Campaigns => &CAMPAIGN_FIELDS,
            Tab::Gallery => &GALLERY_FIELDS,
        };
        Self {
            form,
            image_path: String::new(),
            focus: 0,
            fields,
        }
    }

    pub fn fields(&self) -> &'static [FormField] {
        self.fields
    }

    pub fn focused(&self) -> FormField {
        self.fields[self.focus]
    }

    pub fn next_field(&mut self) {
        self.focus = (self.focus + 1) % self.fields.len();
    }

    pub fn previous_field(&mut self) {
        self.focus = (self.focus + self.fields.len() - 1) % self.fields.len();
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Title => &self.form.title,
            FormField::Description => &self.form.description,
            FormField::Target => &self.form.target,
            FormField::Region => &self.form.region,
            FormField::Latitude => &self.form.latitude,
            FormField::Longitude => &self.form.longitude,
            FormField::ImagePath => &self.image_path,
        }
    }

    fn value_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Title => &mut self.form.title,
            FormField::Description => &mut self.form.description,
            FormField::Target => &mut self.form.target,
            FormField::Region => &mut self.form.region,
            FormField::Latitude => &mut self.form.latitude,
            FormField::Longitude => &mut self.form.longitude,
            FormField::ImagePath => &mut self.image_path,
        }
    }

    pub fn insert_char(&mut self, c: char) {
        let field = self.focused();
        self.value_mut(field).push(c);
    }

    pub fn backspace(&mut self) {
        let field = self.focused();
        self.value_mut(field).pop();
    }
}

/// Delete awaiting a y/n answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDelete {
    pub kind: EntityKind,
    pub id: EntityId,
    /// Title shown in the dialog.
    pub label: String,
}

#[derive(Debug, Default)]
pub struct ViewState {
    /// Whether to paint a background color
    pub with_background_color: bool,
    pub campaign_selection: usize,
    pub gallery_selection: usize,
    pub form: Option<FormEditor>,
    pub pending_delete: Option<PendingDelete>,
    /// Label of the action being awaited, shown while it runs.
    pub working: Option<String>,
    /// Animation tick counter
    pub tick: usize,
}

impl ViewState {
    pub fn new(with_background_color: bool) -> Self {
        Self {
            with_background_color,
            ..Self::default()
        }
    }

    pub fn selection(&self, tab: Tab) -> usize {
        match tab {
            Tab::Campaigns => self.campaign_selection,
            Tab::Gallery => self.gallery_selection,
        }
    }

    /// Keeps both cursors inside their lists after a refresh or delete.
    pub fn clamp_selection(&mut self, campaigns: usize, gallery: usize) {
        self.campaign_selection = self.campaign_selection.min(campaigns.saturating_sub(1));
        self.gallery_selection = self.gallery_selection.min(gallery.saturating_sub(1));
    }
}

//! Dashboard key handling
//!
//! Turns key presses into view changes and, where the backend is involved,
//! into a `UiAction` for the application loop to run against the controller.

use super::state::{FormEditor, PendingDelete, ViewState};
use crate::controller::{DashboardState, EditTarget, Tab};
use crate::models::{Campaign, CampaignForm, EntityId, EntityKind};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Work the application loop performs on behalf of the view.
#[derive(Debug, Clone, PartialEq)]
pub enum UiAction {
    Quit,
    Refresh,
    SwitchTab(Tab),
    OpenCreate,
    OpenEdit(Box<Campaign>),
    CloseModal,
    Submit {
        form: CampaignForm,
        image_path: String,
    },
    Delete {
        id: Option<EntityId>,
        kind: EntityKind,
    },
}

impl UiAction {
    /// Label shown while the action is awaited, for the ones that hit the backend.
    pub fn working_label(&self) -> Option<&'static str> {
        match self {
            UiAction::Refresh => Some("Refreshing"),
            UiAction::Submit { .. } => Some("Saving"),
            UiAction::Delete { .. } => Some("Deleting"),
            _ => None,
        }
    }
}

impl ViewState {
    /// Handles a key press on the dashboard screen.
    pub fn handle_key(&mut self, key: KeyEvent, state: &DashboardState) -> Option<UiAction> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(UiAction::Quit);
        }
        if self.pending_delete.is_some() {
            return self.handle_confirm_key(key);
        }
        if self.form.is_some() {
            return self.handle_form_key(key);
        }
        self.handle_browse_key(key, state)
    }

    /// Opens the form for the target the controller just switched to.
    pub fn open_form(&mut self, target: &EditTarget, tab: Tab) {
        self.form = Some(FormEditor::new(target.form(), tab));
    }

    fn handle_confirm_key(&mut self, key: KeyEvent) -> Option<UiAction> {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => {
                let pending = self.pending_delete.take()?;
                Some(UiAction::Delete {
                    id: Some(pending.id),
                    kind: pending.kind,
                })
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                self.pending_delete = None;
                None
            }
            _ => None,
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) -> Option<UiAction> {
        let editor = self.form.as_mut()?;
        match key.code {
            KeyCode::Esc => Some(UiAction::CloseModal),
            KeyCode::Enter => Some(UiAction::Submit {
                form: editor.form.clone(),
                image_path: editor.image_path.trim().to_string(),
            }),
            KeyCode::Tab | KeyCode::Down => {
                editor.next_field();
                None
            }
            KeyCode::BackTab | KeyCode::Up => {
                editor.previous_field();
                None
            }
            KeyCode::Backspace => {
                editor.backspace();
                None
            }
            KeyCode::Char(c) => {
                editor.insert_char(c);
                None
            }
            _ => None,
        }
    }

    fn handle_browse_key(&mut self, key: KeyEvent, state: &DashboardState) -> Option<UiAction> {
        let tab = state.active_tab;
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(UiAction::Quit),
            KeyCode::Char('r') => Some(UiAction::Refresh),
            KeyCode::Tab => Some(UiAction::SwitchTab(tab.toggle())),
            KeyCode::Up => {
                self.move_selection(tab, state, -1);
                None
            }
            KeyCode::Down => {
                self.move_selection(tab, state, 1);
                None
            }
            KeyCode::Char('n') => Some(UiAction::OpenCreate),
            KeyCode::Char('e') if tab == Tab::Campaigns => state
                .campaigns
                .get(self.campaign_selection)
                .map(|campaign| UiAction::OpenEdit(Box::new(campaign.clone()))),
            KeyCode::Char('d') => self.request_delete(tab, state),
            _ => None,
        }
    }

    /// Opens the y/n dialog for the selected row. Rows without a usable id
    /// go straight to the controller, which rejects them.
    fn request_delete(&mut self, tab: Tab, state: &DashboardState) -> Option<UiAction> {
        let (kind, id, label) = match tab {
            Tab::Campaigns => {
                let campaign = state.campaigns.get(self.campaign_selection)?;
                (
                    EntityKind::Campaign,
                    campaign.key().cloned(),
                    campaign.title.clone(),
                )
            }
            Tab::Gallery => {
                let item = state.gallery.get(self.gallery_selection)?;
                (
                    EntityKind::Gallery,
                    item.id.clone(),
                    item.display_title().to_string(),
                )
            }
        };

        match id.filter(|id| !id.is_blank()) {
            Some(id) => {
                self.pending_delete = Some(PendingDelete { kind, id, label });
                None
            }
            None => Some(UiAction::Delete { id: None, kind }),
        }
    }

    fn move_selection(&mut self, tab: Tab, state: &DashboardState, step: isize) {
        let (selection, len) = match tab {
            Tab::Campaigns => (&mut self.campaign_selection, state.campaigns.len()),
            Tab::Gallery => (&mut self.gallery_selection, state.gallery.len()),
        };
        if len == 0 {
            *selection = 0;
            return;
        }
        *selection = selection.saturating_add_signed(step).min(len - 1);
    }
}

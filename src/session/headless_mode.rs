//! Headless mode execution
//!
//! Runs a single controller action from the shell and prints the resulting
//! notifications instead of drawing the dashboard.

use super::{SessionData, messages::print_notification};
use crate::controller::{
    Confirmation, DashboardController, DashboardError, DeleteOutcome, Tab,
};
use crate::events::Topic;
use crate::models::{Campaign, CampaignForm, EntityId, EntityKind, ImageFile};
use crate::ui::dashboard::utils::{format_amount, format_date, truncate};
use crate::{print_cmd_info, print_cmd_section};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Which list `list` prints.
#[derive(Debug, Copy, Clone, PartialEq, Eq, strum::Display, clap::ValueEnum)]
#[strum(serialize_all = "lowercase")]
pub enum ListTarget {
    Campaigns,
    Donations,
    Gallery,
}

/// A one-shot action requested on the command line.
#[derive(Debug, Clone, PartialEq)]
pub enum HeadlessCommand {
    Stats,
    List(ListTarget),
    CreateCampaign {
        form: CampaignForm,
        image: PathBuf,
    },
    UpdateCampaign {
        id: String,
        form: CampaignForm,
        image: Option<PathBuf>,
    },
    UploadPhoto {
        title: String,
        image: PathBuf,
    },
    Delete {
        kind: EntityKind,
        id: String,
    },
}

/// Asks on stdin; anything but `y`/`yes` declines.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdinConfirmation;

impl Confirmation for StdinConfirmation {
    fn confirm(&self, prompt: &str) -> bool {
        print!("{} [y/N] ", prompt);
        if io::stdout().flush().is_err() {
            return false;
        }
        let mut answer = String::new();
        match io::stdin().lock().read_line(&mut answer) {
            Ok(_) => is_yes(&answer),
            Err(_) => false,
        }
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

/// Runs one headless command
///
/// Every notification the controller records is printed, errors to stderr.
///
/// # Returns
/// * `Ok(())` - The action succeeded (a declined delete counts as success)
/// * `Err` - The action failed; the failure has already been printed
pub async fn run_headless_mode(
    session: SessionData,
    command: HeadlessCommand,
) -> Result<(), DashboardError> {
    let mut controller = session.controller;
    let result = execute(&mut controller, command).await;
    for event in controller.drain_notifications() {
        print_notification(&event);
    }
    result
}

async fn execute(
    controller: &mut DashboardController,
    command: HeadlessCommand,
) -> Result<(), DashboardError> {
    match command {
        HeadlessCommand::Stats => {
            controller.refresh().await?;
            print_stats(controller);
        }
        HeadlessCommand::List(target) => {
            controller.refresh().await?;
            print_list(controller, target);
        }
        HeadlessCommand::CreateCampaign { form, image } => {
            let image = read_image(controller, Topic::Campaign, image)?;
            controller.set_active_tab(Tab::Campaigns);
            controller.open_create();
            controller.submit(&form, Some(image)).await?;
        }
        HeadlessCommand::UpdateCampaign { id, form, image } => {
            let id = EntityId::parse(&id);
            if id.is_blank() {
                let err = DashboardError::validation("Cannot update campaign: missing id");
                controller.report(Topic::Campaign, "Failed to save", &err);
                return Err(err);
            }
            let image = match image {
                Some(path) => Some(read_image(controller, Topic::Campaign, path)?),
                None => None,
            };
            controller.set_active_tab(Tab::Campaigns);
            controller.open_edit(Campaign {
                id: Some(id),
                ..Campaign::default()
            });
            controller.submit(&form, image).await?;
        }
        HeadlessCommand::UploadPhoto { title, image } => {
            let image = read_image(controller, Topic::Gallery, image)?;
            let form = CampaignForm {
                title,
                ..CampaignForm::default()
            };
            controller.set_active_tab(Tab::Gallery);
            controller.open_create();
            controller.submit(&form, Some(image)).await?;
        }
        HeadlessCommand::Delete { kind, id } => {
            let id = Some(EntityId::parse(&id));
            if controller.delete(id, kind).await? == DeleteOutcome::Declined {
                print_cmd_info!("Delete cancelled", "Nothing was removed");
            }
        }
    }
    Ok(())
}

fn read_image(
    controller: &mut DashboardController,
    topic: Topic,
    path: PathBuf,
) -> Result<ImageFile, DashboardError> {
    ImageFile::from_path(&path).map_err(|e| {
        let err = DashboardError::from(e);
        controller.report(
            topic,
            &format!("Failed to read image {}", path.display()),
            &err,
        );
        err
    })
}

fn print_stats(controller: &DashboardController) {
    let stats = &controller.state().stats;
    print_cmd_section!("Dashboard statistics");
    println!("  Total raised      {}", format_amount(stats.total_raised));
    println!("  Total donors      {}", stats.total_donors);
    println!("  Active campaigns  {}", stats.active_campaigns);
}

fn print_list(controller: &DashboardController, target: ListTarget) {
    let state = controller.state();
    match target {
        ListTarget::Campaigns => {
            print_cmd_section!(&format!("Campaigns ({})", state.campaigns.len()));
            for campaign in &state.campaigns {
                let key = campaign
                    .key()
                    .map(|id| id.to_string())
                    .unwrap_or_else(|| "-".to_string());
                println!(
                    "  {:<8} {:<7} {:<32} {:>5.1}%  {} / {}  {}",
                    truncate(&key, 8),
                    campaign.status.to_string(),
                    truncate(&campaign.title, 32),
                    campaign.progress_percent(),
                    format_amount(campaign.raised_amount),
                    format_amount(campaign.target_amount),
                    campaign.region.as_deref().unwrap_or("-"),
                );
            }
        }
        ListTarget::Donations => {
            print_cmd_section!(&format!("Donations ({})", state.donations.len()));
            for donation in &state.donations {
                let donor = donation.donor_name();
                println!(
                    "  {} {:<24} {:<28} +{:<12} {}",
                    format_date(donation.created_at.as_deref()),
                    truncate(if donor.is_empty() { "Anonymous" } else { donor.as_str() }, 24),
                    truncate(donation.campaign_title(), 28),
                    format_amount(donation.amount),
                    donation.status,
                );
            }
        }
        ListTarget::Gallery => {
            print_cmd_section!(&format!("Gallery ({})", state.gallery.len()));
            for item in &state.gallery {
                let id = item
                    .id
                    .as_ref()
                    .map(|id| id.to_string())
                    .unwrap_or_else(|| "-".to_string());
                println!(
                    "  {:<8} {} {:<32} {}",
                    truncate(&id, 8),
                    format_date(item.created_at.as_deref()),
                    truncate(item.display_title(), 32),
                    item.image_url.as_deref().unwrap_or("-"),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MockBackend;
    use crate::controller::AssumeYes;
    use crate::environment::Environment;
    use crate::events::EventType;

    fn session(backend: MockBackend) -> SessionData {
        SessionData {
            controller: DashboardController::new(Box::new(backend), Box::new(AssumeYes)),
            environment: Environment::Local,
        }
    }

    #[test]
    fn test_is_yes() {
        assert!(is_yes("y\n"));
        assert!(is_yes(" YES "));
        assert!(!is_yes("\n"));
        assert!(!is_yes("nope"));
    }

    #[tokio::test]
    async fn test_missing_image_fails_before_any_call() {
        let dir = tempfile::tempdir().unwrap();
        let command = HeadlessCommand::UploadPhoto {
            title: "Harvest".to_string(),
            image: dir.path().join("nope.jpg"),
        };

        let result = run_headless_mode(session(MockBackend::new()), command).await;
        assert!(matches!(result, Err(DashboardError::Io(_))));
    }

    #[tokio::test]
    async fn test_blank_delete_id_is_rejected() {
        let command = HeadlessCommand::Delete {
            kind: EntityKind::Campaign,
            id: "   ".to_string(),
        };
        let result = run_headless_mode(session(MockBackend::new()), command).await;
        assert!(matches!(result, Err(DashboardError::Validation(_))));
    }

    #[tokio::test]
    async fn test_blank_update_id_never_creates() {
        let mut backend = MockBackend::new();
        backend.expect_create_campaign().times(0);
        backend.expect_update_campaign().times(0);
        backend.expect_upload_image().times(0);

        let mut controller = DashboardController::new(Box::new(backend), Box::new(AssumeYes));
        let command = HeadlessCommand::UpdateCampaign {
            id: "  ".to_string(),
            form: CampaignForm {
                title: "T".to_string(),
                ..CampaignForm::default()
            },
            image: Some(PathBuf::from("x.png")),
        };
        let result = execute(&mut controller, command).await;

        assert!(matches!(result, Err(DashboardError::Validation(_))));
        let events = controller.drain_notifications();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].event_type, EventType::Error);
        assert!(events[0].msg.contains("missing id"));
    }

    #[tokio::test]
    async fn test_update_patches_by_parsed_id() {
        let mut backend = MockBackend::new();
        backend
            .expect_update_campaign()
            .withf(|id, payload| {
                *id == EntityId::Number(12) && payload.region.as_deref() == Some("Africa")
            })
            .times(1)
            .returning(|_, _| Ok(()));
        backend.expect_list_campaigns().returning(|| Ok(vec![]));
        backend.expect_list_donations().returning(|| Ok(vec![]));
        backend.expect_list_gallery().returning(|| Ok(vec![]));

        let mut controller = DashboardController::new(Box::new(backend), Box::new(AssumeYes));
        let command = HeadlessCommand::UpdateCampaign {
            id: "12".to_string(),
            form: CampaignForm {
                region: "Africa".to_string(),
                ..CampaignForm::default()
            },
            image: None,
        };
        execute(&mut controller, command).await.unwrap();

        assert!(
            controller
                .drain_notifications()
                .iter()
                .any(|e| e.event_type == EventType::Success && e.msg == "Campaign updated")
        );
    }

    #[tokio::test]
    async fn test_create_campaign_reads_image_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("school roof.png");
        std::fs::write(&path, [137, 80, 78, 71]).unwrap();

        let mut backend = MockBackend::new();
        backend
            .expect_upload_image()
            .withf(|image| {
                image.file_name == "school roof.png" && image.content_type() == "image/png"
            })
            .times(1)
            .returning(|_| Ok("https://cdn/img.png".to_string()));
        backend
            .expect_create_campaign()
            .times(1)
            .returning(|_| Ok(()));
        backend.expect_list_campaigns().returning(|| Ok(vec![]));
        backend.expect_list_donations().returning(|| Ok(vec![]));
        backend.expect_list_gallery().returning(|| Ok(vec![]));

        let command = HeadlessCommand::CreateCampaign {
            form: CampaignForm {
                title: "School Roof".to_string(),
                target: "800".to_string(),
                ..CampaignForm::default()
            },
            image: path,
        };
        run_headless_mode(session(backend), command).await.unwrap();
    }
}

mod backend;
mod cli_messages;
mod config;
mod consts;
mod controller;
mod environment;
mod error_classifier;
mod events;
mod logging;
mod models;
mod session;
mod stats;
mod ui;

use crate::config::{Config, get_config_path};
use crate::controller::{AssumeYes, Confirmation};
use crate::environment::Environment;
use crate::models::{CampaignForm, EntityKind};
use crate::session::{
    HeadlessCommand, ListTarget, SessionData, StdinConfirmation, run_headless_mode,
    run_tui_mode, setup_session,
};
use clap::{Parser, Subcommand};
use std::error::Error;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Command-line arguments
struct Args {
    /// Command to execute. Opens the dashboard when omitted.
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Open the interactive dashboard
    Dashboard {
        /// Paint a dark background behind the dashboard
        #[arg(long, default_value_t = false)]
        with_background: bool,
    },
    /// Print total raised, donor count and active campaigns
    Stats,
    /// Print campaigns, donations or gallery items
    List {
        #[arg(value_enum)]
        target: ListTarget,
    },
    /// Create a campaign. New campaigns start out active.
    CreateCampaign {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: String,
        /// Target amount, at least 1
        #[arg(long)]
        target: String,
        #[command(flatten)]
        location: LocationArgs,
        /// Cover image to upload
        #[arg(long, value_name = "PATH")]
        image: PathBuf,
    },
    /// Update the given fields of an existing campaign
    UpdateCampaign {
        #[arg(long)]
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        target: Option<String>,
        #[command(flatten)]
        location: LocationArgs,
        /// Replacement cover image. The current one is kept when omitted.
        #[arg(long, value_name = "PATH")]
        image: Option<PathBuf>,
    },
    /// Upload a photo to the gallery
    UploadPhoto {
        #[arg(long)]
        title: String,
        #[arg(long, value_name = "PATH")]
        image: PathBuf,
    },
    /// Delete a campaign or gallery item
    Delete {
        #[arg(value_enum)]
        kind: EntityKind,
        #[arg(long)]
        id: String,
        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },
    /// Save the backend URL and API key
    Configure {
        /// Backend base URL, or `local` for the local development stack
        #[arg(long)]
        url: String,
        #[arg(long)]
        api_key: String,
        /// Storage bucket for uploaded images
        #[arg(long)]
        bucket: Option<String>,
    },
    /// Remove the saved configuration
    Reset,
}

#[derive(clap::Args, Debug, Default)]
struct LocationArgs {
    #[arg(long)]
    region: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    latitude: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    longitude: Option<String>,
}

impl LocationArgs {
    fn into_form(
        self,
        title: Option<String>,
        description: Option<String>,
        target: Option<String>,
    ) -> CampaignForm {
        CampaignForm {
            title: title.unwrap_or_default(),
            description: description.unwrap_or_default(),
            target: target.unwrap_or_default(),
            region: self.region.unwrap_or_default(),
            latitude: self.latitude.unwrap_or_default(),
            longitude: self.longitude.unwrap_or_default(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let config_path = get_config_path()?;

    let command = args.command.unwrap_or(Command::Dashboard {
        with_background: false,
    });
    match command {
        Command::Configure {
            url,
            api_key,
            bucket,
        } => {
            let environment = url.parse::<Environment>()?;
            Config::new(url, api_key, bucket)
                .save(&config_path)
                .map_err(|e| format!("Failed to save config: {}", e))?;
            print_cmd_success!(
                "Configuration saved",
                "{} ({:?})",
                config_path.display(),
                environment
            );
            Ok(())
        }
        Command::Reset => {
            print_cmd_info!("Resetting", "Removing {}", config_path.display());
            Config::clear(&config_path).map_err(Into::into)
        }
        Command::Dashboard { with_background } => {
            let session = open_session(&config_path, Box::new(AssumeYes));
            run_tui_mode(session, with_background).await
        }
        other => {
            let Some((headless, confirmation)) = into_headless(other) else {
                return Ok(());
            };
            let session = open_session(&config_path, confirmation);
            if run_headless_mode(session, headless).await.is_err() {
                // Already reported by the controller
                std::process::exit(1);
            }
            Ok(())
        }
    }
}

/// Builds the session or exits with the reason the backend cannot be used.
fn open_session(config_path: &Path, confirmation: Box<dyn Confirmation>) -> SessionData {
    match setup_session(config_path, confirmation) {
        Ok(session) => session,
        Err(e) => {
            print_cmd_error!("Unable to start", &e.to_string());
            std::process::exit(1);
        }
    }
}

/// Maps the one-shot subcommands onto controller actions. Deletes confirm on
/// stdin unless `--yes` was given.
fn into_headless(command: Command) -> Option<(HeadlessCommand, Box<dyn Confirmation>)> {
    let headless = match command {
        Command::Stats => HeadlessCommand::Stats,
        Command::List { target } => HeadlessCommand::List(target),
        Command::CreateCampaign {
            title,
            description,
            target,
            location,
            image,
        } => HeadlessCommand::CreateCampaign {
            form: location.into_form(Some(title), Some(description), Some(target)),
            image,
        },
        Command::UpdateCampaign {
            id,
            title,
            description,
            target,
            location,
            image,
        } => HeadlessCommand::UpdateCampaign {
            id,
            form: location.into_form(title, description, target),
            image,
        },
        Command::UploadPhoto { title, image } => HeadlessCommand::UploadPhoto { title, image },
        Command::Delete { kind, id, yes } => {
            let confirmation: Box<dyn Confirmation> = if yes {
                Box::new(AssumeYes)
            } else {
                Box::new(StdinConfirmation)
            };
            return Some((HeadlessCommand::Delete { kind, id }, confirmation));
        }
        Command::Dashboard { .. } | Command::Configure { .. } | Command::Reset => return None,
    };
    Some((headless, Box::new(AssumeYes)))
}

//! Command-line front end over the study group controller.

use std::io::Write;
use std::path::PathBuf;

use chrono::Utc;
use clap::{Parser, Subcommand};
use serde::Serialize;
use studygroup_api::{ApiResponse, StudyGroupController};
use studygroup_core::models::study_group::{SortingOrder, StudyGroup, StudyGroupId, Subject};
use studygroup_core::models::user::{User, UserId};
use studygroup_core::repository::StudyGroupRepository;

#[derive(Debug, Parser)]
#[command(name = "studygroup", version, about = "Manage study groups")]
pub struct Cli {
    /// Path to a TOML configuration file.
    #[arg(long, env = "STUDYGROUP_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create a study group; the creator becomes its first member.
    Create {
        #[arg(long)]
        name: String,
        /// Math, Physics or Chemistry.
        #[arg(long)]
        subject: Subject,
        #[arg(long)]
        creator: UserId,
    },
    /// List all study groups.
    List,
    /// Search study groups by name or subject, sorted by creation date.
    Search {
        #[arg(long)]
        subject: String,
        /// ascending or descending.
        #[arg(long, default_value = "ascending")]
        order: SortingOrder,
    },
    /// Add a user to a study group.
    Join {
        #[arg(long)]
        group: StudyGroupId,
        #[arg(long)]
        user: UserId,
    },
    /// Remove a user from a study group.
    Leave {
        #[arg(long)]
        group: StudyGroupId,
        #[arg(long)]
        user: UserId,
    },
}

/// Execute `command`, write the response as JSON to `out`, and return
/// its status code.
pub async fn run<R: StudyGroupRepository>(
    controller: &StudyGroupController<R>,
    command: Command,
    out: &mut impl Write,
) -> anyhow::Result<u16> {
    match command {
        Command::Create {
            name,
            subject,
            creator,
        } => {
            let response =
                match StudyGroup::new(0, name, subject, Utc::now(), vec![User::new(creator)]) {
                    Ok(group) => controller.create_study_group(group).await,
                    Err(err) => ApiResponse::from(err),
                };
            render(out, &response)
        }
        Command::List => render(out, &controller.get_study_groups().await),
        Command::Search { subject, order } => {
            render(out, &controller.search_study_groups(&subject, order).await)
        }
        Command::Join { group, user } => {
            render(out, &controller.join_study_group(group, user).await)
        }
        Command::Leave { group, user } => {
            render(out, &controller.leave_study_group(group, user).await)
        }
    }
}

fn render<T: Serialize>(out: &mut impl Write, response: &ApiResponse<T>) -> anyhow::Result<u16> {
    serde_json::to_writer_pretty(&mut *out, response)?;
    writeln!(out)?;
    Ok(response.status_code())
}

//! Study Groups — application entry point.

mod cli;
mod config;
mod logging;

use std::process::ExitCode;

use clap::Parser;
use studygroup_api::StudyGroupController;
use studygroup_db::DbManager;
use studygroup_db::repository::SurrealStudyGroupRepository;

use crate::cli::Cli;
use crate::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref())?;
    logging::init(&config.log);

    let db = DbManager::connect(&config.database).await?;
    studygroup_db::run_migrations(db.client()).await?;

    let repo = SurrealStudyGroupRepository::new(db.client().clone());
    let controller = StudyGroupController::new(repo);

    let status = cli::run(&controller, cli.command, &mut std::io::stdout().lock()).await?;
    tracing::debug!(status, "Command finished");

    Ok(if status == 200 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

// fcra/src/commands/mod.rs

pub mod as_of;
pub mod export;
pub mod filters;
pub mod import;
pub mod open_tasks;
pub mod portfolio;
pub mod records;
pub mod render;
pub mod seed;
pub mod serve;
pub mod summary;
pub mod trend;
pub mod update;

use anyhow::Context;
use std::path::Path;
use std::sync::Arc;

use fcra_core::application::ReportingService;
use fcra_core::infrastructure::adapters::duckdb::DuckDbRecordStore;
use fcra_core::infrastructure::config::{AppConfig, load_config};
use fcra_core::ports::RecordStore;

use crate::cli::{Cli, Commands};

/// Configuration plus the opened store, shared by every subcommand.
pub struct AppContext {
    pub config: AppConfig,
    pub service: ReportingService,
}

impl AppContext {
    pub fn open(config_path: Option<&Path>, db_path: Option<&str>) -> anyhow::Result<Self> {
        let cwd = std::env::current_dir()?;
        let mut config = load_config(&cwd, config_path)?;
        if let Some(path) = db_path {
            config.database_path = path.to_string();
        }

        let store = DuckDbRecordStore::new(&config.database_path)
            .with_context(|| format!("Failed to open database at {}", config.database_path))?;

        Ok(Self {
            service: ReportingService::new(Arc::new(store)),
            config,
        })
    }

    pub fn store(&self) -> &dyn RecordStore {
        self.service.store().as_ref()
    }
}

pub async fn dispatch(cli: Cli) -> anyhow::Result<()> {
    let ctx = AppContext::open(cli.config.as_deref(), cli.db_path.as_deref())?;

    match cli.command {
        Commands::Import { csv } => import::execute(&ctx, csv).await,
        Commands::Seed => seed::execute(&ctx).await,
        Commands::Summary { json } => summary::execute(&ctx, json).await,
        Commands::AsOf => as_of::execute(&ctx).await,
        Commands::Trend { metric, json } => trend::execute(&ctx, &metric, json).await,
        Commands::Portfolio { name, json } => portfolio::execute(&ctx, &name, json).await,
        Commands::Records {
            name,
            status,
            category,
            json,
        } => records::execute(&ctx, &name, status.as_deref(), category.as_deref(), json).await,
        Commands::Update { id, field, value } => update::execute(&ctx, id, &field, &value).await,
        Commands::Filters { name, json } => filters::execute(&ctx, &name, json).await,
        Commands::OpenTasks { assignee } => open_tasks::execute(&ctx, &assignee).await,
        Commands::Export { target, output } => export::execute(&ctx, &target, output).await,
        Commands::Serve { bind } => serve::execute(ctx, bind).await,
    }
}

// fcra-core/src/infrastructure/config/mod.rs

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

use crate::infrastructure::error::InfrastructureError;

pub const CONFIG_CANDIDATES: [&str; 2] = ["fcra.yaml", "fcra.yml"];

/// Runtime settings of the dashboard.
///
/// Resolution order, last wins: built-in defaults, the YAML file,
/// `FCRA_*` environment variables, then command-line flags (applied by the
/// binary).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub database_path: String,
    pub csv_path: String,
    pub bind: String,
    pub export_dir: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_path: "fcra_data.duckdb".to_string(),
            csv_path: "FCRA data.csv".to_string(),
            bind: "127.0.0.1:5000".to_string(),
            export_dir: ".".to_string(),
        }
    }
}

/// Loads settings from `explicit` when given, otherwise from the first
/// candidate file found in `dir`. A missing candidate file is not an error;
/// a missing explicit file is.
#[instrument(skip(dir))]
pub fn load_config(dir: &Path, explicit: Option<&Path>) -> Result<AppConfig, InfrastructureError> {
    let path = match explicit {
        Some(path) if path.exists() => Some(path.to_path_buf()),
        Some(path) => {
            return Err(InfrastructureError::ConfigNotFound(
                path.display().to_string(),
            ));
        }
        None => find_config(dir),
    };

    let mut config = match path {
        Some(path) => {
            info!(path = ?path, "Loading configuration");
            let content = fs::read_to_string(&path)?;
            parse_config(&content)?
        }
        None => {
            debug!("No configuration file, using defaults");
            AppConfig::default()
        }
    };

    apply_env_overrides(&mut config, |key| std::env::var(key).ok());
    Ok(config)
}

fn find_config(dir: &Path) -> Option<PathBuf> {
    CONFIG_CANDIDATES
        .iter()
        .map(|name| dir.join(name))
        .find(|p| p.exists())
}

fn parse_config(content: &str) -> Result<AppConfig, InfrastructureError> {
    // An empty file deserializes to null, not to an empty mapping.
    if content.trim().is_empty() {
        return Ok(AppConfig::default());
    }
    Ok(serde_yaml::from_str(content)?)
}

fn apply_env_overrides(config: &mut AppConfig, lookup: impl Fn(&str) -> Option<String>) {
    let targets: [(&str, &mut String); 4] = [
        ("FCRA_DATABASE_PATH", &mut config.database_path),
        ("FCRA_CSV_PATH", &mut config.csv_path),
        ("FCRA_BIND", &mut config.bind),
        ("FCRA_EXPORT_DIR", &mut config.export_dir),
    ];
    for (key, slot) in targets {
        if let Some(val) = lookup(key).filter(|v| !v.is_empty()) {
            info!(key, old = %slot, new = %val, "Overriding setting via ENV");
            *slot = val;
        }
    }
}

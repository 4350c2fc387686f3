use clap::Parser;
use serde::Deserialize;

use crate::error::Result;

const DEFAULT_CONFIG_PATH: &str = "config/scorta.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub storage: String,
    pub backend: String,
    pub strict_amounts: bool,
    pub level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage: "db/products.csv".to_string(),
            backend: "csv".to_string(),
            strict_amounts: false,
            level: "info".to_string(),
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "scorta", disable_version_flag = true)]
struct Args {
    /// Optional config file path (TOML).
    #[arg(long)]
    config: Option<String>,
    /// Override the storage file path (e.g. db/products.csv).
    #[arg(long)]
    storage: Option<String>,
    /// Override the storage backend (csv or json).
    #[arg(long)]
    backend: Option<String>,
    /// Refuse withdrawal amounts that are zero or negative.
    #[arg(long)]
    strict_amounts: bool,
    /// Override the log level.
    #[arg(long)]
    level: Option<String>,
}

pub fn load() -> Result<AppConfig> {
    let args = Args::parse();

    let config_path = args.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);
    let mut builder = config::Config::builder();
    builder = builder.add_source(config::File::with_name(config_path).required(false));
    builder = builder.add_source(config::Environment::with_prefix("SCORTA"));
    let mut settings: AppConfig = builder.build()?.try_deserialize()?;

    if let Some(storage) = args.storage {
        settings.storage = storage;
    }
    if let Some(backend) = args.backend {
        settings.backend = backend;
    }
    if args.strict_amounts {
        settings.strict_amounts = true;
    }
    if let Some(level) = args.level {
        settings.level = level;
    }

    Ok(settings)
}

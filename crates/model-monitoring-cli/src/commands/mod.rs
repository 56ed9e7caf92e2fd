//! CLI command handlers

pub mod build;
pub mod check;
pub mod init;

pub use build::{BuildSummary, run_build};
pub use check::{CheckReport, run_check};
pub use init::{SAMPLE_CONFIG, run_init};

use crate::SchemaArg;
use crate::error::CliError;
use model_monitoring::MonitoringConfig;
use std::path::Path;
use tracing::info;

/// Load the config file, applying a schema override from the command line
pub(crate) fn load_config(
    path: &Path,
    schema: Option<SchemaArg>,
) -> Result<MonitoringConfig, CliError> {
    if !path.exists() {
        return Err(CliError::InvalidInput(format!(
            "Config file not found: {}. Run 'model-monitoring init' to create one.",
            path.display()
        )));
    }

    let mut config = MonitoringConfig::load_from_file(path)?;
    info!("Configuration loaded from: {}", path.display());

    if let Some(schema) = schema {
        config.schema = schema.into();
    }
    Ok(config)
}

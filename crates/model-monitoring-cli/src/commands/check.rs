//! Check command handler
//!
//! Confirms that the explicit v1 to v1beta1 mapping and a raw byte-level
//! reinterpretation of the v1 message agree for the configured objective.

use super::load_config;
use crate::error::CliError;
use model_monitoring::proto::v1beta1;
use model_monitoring_core::{encode, reinterpret};
use serde::Serialize;
use std::path::Path;
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckReport {
    pub current_len: usize,
    pub legacy_len: usize,
    pub compatible: bool,
}

pub async fn run_check(config_path: &Path) -> Result<CheckReport, CliError> {
    let config = load_config(config_path, None)?;
    let objective = config.objective_config();

    let current = objective.as_proto()?;
    let mapped = objective.as_legacy_proto()?;
    let by_bytes: v1beta1::ModelMonitoringObjectiveConfig = reinterpret(&current)
        .map_err(|e| CliError::Incompatible(format!("v1 bytes do not decode as v1beta1: {}", e)))?;

    let report = CheckReport {
        current_len: encode(&current).len(),
        legacy_len: encode(&mapped).len(),
        compatible: mapped == by_bytes,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);

    if !report.compatible {
        warn!("explicit mapping and wire reinterpretation disagree");
        return Err(CliError::Incompatible(
            "explicit v1beta1 mapping differs from wire reinterpretation".to_string(),
        ));
    }

    info!("v1 and v1beta1 objective messages agree");
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::SAMPLE_CONFIG;

    #[tokio::test]
    async fn test_check_sample_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("monitoring.toml");
        std::fs::write(&path, SAMPLE_CONFIG).unwrap();

        let report = run_check(&path).await.unwrap();
        assert!(report.compatible);
        assert_eq!(report.current_len, report.legacy_len);
    }
}

//! Init command handler

use crate::error::CliError;
use std::fs;
use std::path::Path;
use tracing::info;

/// Sample configuration written by `model-monitoring init`
pub const SAMPLE_CONFIG: &str = r#"# Model monitoring configuration
log_level = "info"

# "v1", or "v1beta1" for batch prediction monitoring
schema = "v1"

# Leave empty to build a single objective message
deployed_model_ids = []

[objective.skew_detection]
# gs:/ (Cloud Storage), bq:/ (BigQuery) or a dataset reference
data_source = "gs://my-bucket/training/data.csv"
# tf-record, csv or jsonl; only used for Cloud Storage sources
data_format = "csv"
target_field = "label"
# A single number applies to every feature
skew_thresholds = { age = 0.3, income = 0.3 }
attribute_skew_thresholds = { age = 0.2 }

[objective.drift_detection]
drift_thresholds = { age = 0.3, income = 0.3 }
attribute_drift_thresholds = { age = 0.2 }

[objective.explanation]
enable_feature_attributes = true
"#;

pub async fn run_init(path: &Path) -> Result<(), CliError> {
    if path.exists() {
        return Err(CliError::InvalidInput(format!(
            "{} already exists, refusing to overwrite",
            path.display()
        )));
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, SAMPLE_CONFIG)?;
    info!("Wrote sample config to {}", path.display());

    println!("Created {}", path.display());
    println!("\nNext steps:");
    println!("  1. Edit the data source and thresholds");
    println!("  2. Run 'model-monitoring build --config {}'", path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use model_monitoring::MonitoringConfig;

    #[test]
    fn test_sample_config_builds() {
        let config = MonitoringConfig::from_toml_str(SAMPLE_CONFIG).unwrap();
        let proto = config.objective_config().as_proto().unwrap();
        assert!(proto.training_dataset.is_some());
        assert!(proto.explanation_config.unwrap().enable_feature_attributes);
    }

    #[tokio::test]
    async fn test_init_refuses_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("monitoring.toml");

        run_init(&path).await.unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), SAMPLE_CONFIG);

        let err = run_init(&path).await.unwrap_err();
        assert!(matches!(err, CliError::InvalidInput(_)));
    }
}

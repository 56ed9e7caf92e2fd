use crate::deployment::DeployedModelObjectives;
use crate::error::Result;
use crate::objective::ObjectiveConfig;
use crate::schema::Schema;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Model monitoring configuration file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct MonitoringConfig {
    /// Log level
    pub log_level: String,

    /// Wire schema to build
    pub schema: Schema,

    /// Objective to monitor
    pub objective: ObjectiveConfig,

    /// Deployed models the objective applies to. Empty builds a single
    /// objective message.
    pub deployed_model_ids: Vec<String>,
}

impl Default for MonitoringConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            schema: Schema::V1,
            objective: ObjectiveConfig::default(),
            deployed_model_ids: vec![],
        }
    }
}

impl MonitoringConfig {
    /// Load from configuration file. `.json` files are read as JSON,
    /// everything else as TOML.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json_str(&content),
            _ => Self::from_toml_str(&content),
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// The objective with the configured schema applied
    pub fn objective_config(&self) -> ObjectiveConfig {
        match self.schema {
            Schema::V1 => self.objective.clone(),
            Schema::V1beta1 => self.objective.clone().for_batch_prediction(),
        }
    }

    /// The objective applied to every configured deployed model
    pub fn deployed_model_objectives(&self) -> DeployedModelObjectives {
        DeployedModelObjectives::uniform(&self.deployed_model_ids, &self.objective_config())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objective::SkewThresholds;

    const SAMPLE: &str = r#"
log_level = "debug"
schema = "v1beta1"
deployed_model_ids = ["111", "222"]

[objective.skew_detection]
data_source = "gs://bucket/train.csv"
data_format = "csv"
target_field = "label"
skew_thresholds = { age = 0.3 }

[objective.drift_detection]
drift_thresholds = { age = 0.2 }
attribute_drift_thresholds = {}

[objective.explanation]
"#;

    #[test]
    fn test_from_toml() {
        let config = MonitoringConfig::from_toml_str(SAMPLE).unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.schema, Schema::V1beta1);
        assert_eq!(config.deployed_model_ids, vec!["111", "222"]);

        let skew = config.objective.skew_detection().unwrap();
        assert_eq!(skew.data_format(), Some("csv"));
        assert!(matches!(
            skew.skew_thresholds(),
            Some(SkewThresholds::PerFeature(_))
        ));
        assert!(config.objective.explanation().unwrap().enable_feature_attributes());
        assert_eq!(config.objective_config().schema(), Schema::V1beta1);
        assert_eq!(config.deployed_model_objectives().len(), 2);
    }

    #[test]
    fn test_defaults() {
        let config = MonitoringConfig::from_toml_str("").unwrap();
        assert_eq!(config, MonitoringConfig::default());
        assert_eq!(config.objective_config().schema(), Schema::V1);
    }

    #[test]
    fn test_from_json() {
        let config = MonitoringConfig::from_json_str(
            r#"{"objective": {"skew_detection": {"data_source": "bq://p.d.t", "skew_thresholds": 0.5}}}"#,
        )
        .unwrap();
        let skew = config.objective.skew_detection().unwrap();
        assert_eq!(skew.skew_thresholds(), Some(&SkewThresholds::Default(0.5)));
    }

    #[test]
    fn test_unknown_schema_rejected() {
        assert!(MonitoringConfig::from_toml_str(r#"schema = "v2""#).is_err());
    }

    #[test]
    fn test_misspelled_keys_rejected() {
        let err = MonitoringConfig::from_toml_str(
            r#"
[objective.skew_detection]
data_source = "gs://bucket/x"
data_fromat = "xml"
skew_threshold = 0.1
"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("data_fromat"), "{}", err);

        assert!(MonitoringConfig::from_toml_str(r#"log_levle = "debug""#).is_err());
        assert!(MonitoringConfig::from_toml_str("[objective.skew]").is_err());
        assert!(
            MonitoringConfig::from_toml_str(
                r#"
[objective.drift_detection]
drift_thresholds = {}
attribute_drift_thresholds = {}
drift_threshold = 0.2
"#
            )
            .is_err()
        );
        assert!(
            MonitoringConfig::from_toml_str(
                r#"
[objective.explanation]
enable_feature_attribute = false
"#
            )
            .is_err()
        );
    }
}

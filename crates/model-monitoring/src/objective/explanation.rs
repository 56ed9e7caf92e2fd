use model_monitoring_core::proto::v1::model_monitoring_objective_config::ExplanationConfig as ExplanationConfigProto;
use serde::{Deserialize, Serialize};

/// Explainable AI toggle for monitoring.
///
/// Only applicable when the model has an explanation spec. The `Default`
/// value is disabled; [`ExplanationConfig::new`] enables feature attributions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExplanationConfig {
    #[serde(default = "enabled")]
    enable_feature_attributes: bool,
}

fn enabled() -> bool {
    true
}

impl ExplanationConfig {
    /// Create an explanation config with feature attributions enabled
    pub fn new() -> Self {
        Self {
            enable_feature_attributes: true,
        }
    }

    pub fn enable_feature_attributes(&self) -> bool {
        self.enable_feature_attributes
    }

    pub fn as_proto(&self) -> ExplanationConfigProto {
        ExplanationConfigProto {
            enable_feature_attributes: self.enable_feature_attributes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_enables_default_disables() {
        assert!(ExplanationConfig::new().enable_feature_attributes());
        assert!(!ExplanationConfig::default().enable_feature_attributes());
    }

    #[test]
    fn test_empty_section_enables() {
        let config: ExplanationConfig = toml::from_str("").unwrap();
        assert!(config.as_proto().enable_feature_attributes);

        let config: ExplanationConfig =
            toml::from_str("enable_feature_attributes = false").unwrap();
        assert!(!config.as_proto().enable_feature_attributes);
    }
}

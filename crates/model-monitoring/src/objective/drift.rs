use super::threshold_entries;
use model_monitoring_core::proto::v1::model_monitoring_objective_config::PredictionDriftDetectionConfig;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Prediction drift detection.
///
/// Drift compares the serving feature distribution across time windows. Use
/// it when the original training data is unavailable; otherwise prefer
/// [`SkewDetectionConfig`](super::SkewDetectionConfig).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DriftDetectionConfig {
    drift_thresholds: BTreeMap<String, f64>,
    attribute_drift_thresholds: BTreeMap<String, f64>,
}

impl DriftDetectionConfig {
    /// Create a drift detection config from feature and attribution thresholds
    pub fn new<D, A, K, L>(drift_thresholds: D, attribute_drift_thresholds: A) -> Self
    where
        D: IntoIterator<Item = (K, f64)>,
        A: IntoIterator<Item = (L, f64)>,
        K: Into<String>,
        L: Into<String>,
    {
        Self {
            drift_thresholds: drift_thresholds
                .into_iter()
                .map(|(feature, value)| (feature.into(), value))
                .collect(),
            attribute_drift_thresholds: attribute_drift_thresholds
                .into_iter()
                .map(|(feature, value)| (feature.into(), value))
                .collect(),
        }
    }

    pub fn drift_thresholds(&self) -> &BTreeMap<String, f64> {
        &self.drift_thresholds
    }

    pub fn attribute_drift_thresholds(&self) -> &BTreeMap<String, f64> {
        &self.attribute_drift_thresholds
    }

    /// Convert to the drift detection section of the objective message
    pub fn as_proto(&self) -> PredictionDriftDetectionConfig {
        PredictionDriftDetectionConfig {
            drift_thresholds: threshold_entries(&self.drift_thresholds),
            attribution_score_drift_thresholds: threshold_entries(
                &self.attribute_drift_thresholds,
            ),
            default_drift_threshold: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_maps_fail_to_deserialize() {
        let result: Result<DriftDetectionConfig, _> =
            toml::from_str(r#"drift_thresholds = { age = 0.1 }"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_maps_allowed() {
        let config = DriftDetectionConfig::new(Vec::<(String, f64)>::new(), [("age", 0.3)]);
        let proto = config.as_proto();
        assert!(proto.drift_thresholds.is_empty());
        assert_eq!(proto.attribution_score_drift_thresholds.len(), 1);
        assert!(proto.default_drift_threshold.is_none());
    }
}

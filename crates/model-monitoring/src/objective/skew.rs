use super::{threshold_entries, training_dataset::build_training_dataset};
use crate::error::Result;
use model_monitoring_core::proto::v1::{
    ThresholdConfig,
    model_monitoring_objective_config::{TrainingDataset, TrainingPredictionSkewDetectionConfig},
};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Alert threshold applied by the platform when no skew threshold is configured
pub const BACKEND_DEFAULT_SKEW_THRESHOLD: f64 = 0.3;

/// Skew thresholds, either one value for every feature or one per feature
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SkewThresholds {
    /// Same threshold for all features
    Default(f64),
    /// Feature name to threshold
    PerFeature(BTreeMap<String, f64>),
}

impl From<f64> for SkewThresholds {
    fn from(value: f64) -> Self {
        SkewThresholds::Default(value)
    }
}

impl From<BTreeMap<String, f64>> for SkewThresholds {
    fn from(value: BTreeMap<String, f64>) -> Self {
        SkewThresholds::PerFeature(value)
    }
}

impl From<HashMap<String, f64>> for SkewThresholds {
    fn from(value: HashMap<String, f64>) -> Self {
        SkewThresholds::PerFeature(value.into_iter().collect())
    }
}

impl<K: Into<String>, const N: usize> From<[(K, f64); N]> for SkewThresholds {
    fn from(value: [(K, f64); N]) -> Self {
        SkewThresholds::PerFeature(value.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

/// Training-serving skew detection.
///
/// Skew is the distance between the training feature distribution and what
/// the deployed model sees in production.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SkewDetectionConfig {
    /// Path to the training dataset
    data_source: String,

    /// Feature distribution distance thresholds. `None` leaves the
    /// backend default in effect.
    #[serde(default)]
    skew_thresholds: Option<SkewThresholds>,

    /// Feature attribution score distance thresholds
    #[serde(default)]
    attribute_skew_thresholds: Option<BTreeMap<String, f64>>,

    /// Dataset format, only meaningful for Cloud Storage sources
    #[serde(default)]
    data_format: Option<String>,

    /// Target field excluded from prediction on training data
    #[serde(default)]
    target_field: Option<String>,
}

impl SkewDetectionConfig {
    /// Create a skew detection config for a training data source
    pub fn new(data_source: impl Into<String>) -> Self {
        Self {
            data_source: data_source.into(),
            skew_thresholds: None,
            attribute_skew_thresholds: None,
            data_format: None,
            target_field: None,
        }
    }

    /// Set the skew thresholds
    pub fn with_skew_thresholds(mut self, thresholds: impl Into<SkewThresholds>) -> Self {
        self.skew_thresholds = Some(thresholds.into());
        self
    }

    /// Set the attribution score skew thresholds
    pub fn with_attribute_skew_thresholds<I, K>(mut self, thresholds: I) -> Self
    where
        I: IntoIterator<Item = (K, f64)>,
        K: Into<String>,
    {
        self.attribute_skew_thresholds = Some(
            thresholds
                .into_iter()
                .map(|(feature, value)| (feature.into(), value))
                .collect(),
        );
        self
    }

    /// Set the data format. Validated when the message is built.
    pub fn with_data_format(mut self, data_format: impl Into<String>) -> Self {
        self.data_format = Some(data_format.into());
        self
    }

    /// Set the target field
    pub fn with_target_field(mut self, target_field: impl Into<String>) -> Self {
        self.target_field = Some(target_field.into());
        self
    }

    pub fn data_source(&self) -> &str {
        &self.data_source
    }

    pub fn skew_thresholds(&self) -> Option<&SkewThresholds> {
        self.skew_thresholds.as_ref()
    }

    pub fn attribute_skew_thresholds(&self) -> Option<&BTreeMap<String, f64>> {
        self.attribute_skew_thresholds.as_ref()
    }

    pub fn data_format(&self) -> Option<&str> {
        self.data_format.as_deref()
    }

    pub fn target_field(&self) -> Option<&str> {
        self.target_field.as_deref()
    }

    /// Threshold applied to features without their own entry: the scalar
    /// threshold, the backend default when none is set, or `None` for a
    /// per-feature mapping
    pub fn default_threshold(&self) -> Option<f64> {
        match &self.skew_thresholds {
            Some(SkewThresholds::Default(value)) => Some(*value),
            Some(SkewThresholds::PerFeature(_)) => None,
            None => Some(BACKEND_DEFAULT_SKEW_THRESHOLD),
        }
    }

    /// Convert to the skew detection section of the objective message
    pub fn as_proto(&self) -> TrainingPredictionSkewDetectionConfig {
        let mut proto = TrainingPredictionSkewDetectionConfig::default();

        match &self.skew_thresholds {
            Some(SkewThresholds::Default(value)) => {
                proto.default_skew_threshold = Some(ThresholdConfig::with_value(*value));
            }
            Some(SkewThresholds::PerFeature(thresholds)) => {
                proto.skew_thresholds = threshold_entries(thresholds);
            }
            None => {}
        }

        if let Some(thresholds) = &self.attribute_skew_thresholds {
            proto.attribution_score_skew_thresholds = threshold_entries(thresholds);
        }

        proto
    }

    /// Derive the training dataset descriptor from the data source
    pub fn training_dataset(&self) -> Result<TrainingDataset> {
        build_training_dataset(
            &self.data_source,
            self.data_format.as_deref(),
            self.target_field.as_deref(),
        )
    }
}

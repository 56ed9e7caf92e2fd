use super::{DriftDetectionConfig, ExplanationConfig, SkewDetectionConfig};
use crate::error::Result;
use crate::schema::{ObjectiveConfigMessage, Schema};
use model_monitoring_core::proto::{v1, v1beta1};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Skew detection, drift detection and explanation settings for one model
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ObjectiveConfig {
    #[serde(default, alias = "skew_detection_config")]
    skew_detection: Option<SkewDetectionConfig>,

    #[serde(default, alias = "drift_detection_config")]
    drift_detection: Option<DriftDetectionConfig>,

    #[serde(default, alias = "explanation_config")]
    explanation: Option<ExplanationConfig>,

    // Batch prediction monitoring still consumes the v1beta1 message.
    // TODO: drop once batch prediction monitoring accepts v1.
    #[serde(skip)]
    config_for_batch_prediction: bool,
}

impl ObjectiveConfig {
    /// Create an empty objective config
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_skew_detection(mut self, config: SkewDetectionConfig) -> Self {
        self.skew_detection = Some(config);
        self
    }

    pub fn with_drift_detection(mut self, config: DriftDetectionConfig) -> Self {
        self.drift_detection = Some(config);
        self
    }

    pub fn with_explanation(mut self, config: ExplanationConfig) -> Self {
        self.explanation = Some(config);
        self
    }

    /// Target the legacy schema used by batch prediction monitoring
    pub fn for_batch_prediction(mut self) -> Self {
        self.config_for_batch_prediction = true;
        self
    }

    pub fn skew_detection(&self) -> Option<&SkewDetectionConfig> {
        self.skew_detection.as_ref()
    }

    pub fn drift_detection(&self) -> Option<&DriftDetectionConfig> {
        self.drift_detection.as_ref()
    }

    pub fn explanation(&self) -> Option<&ExplanationConfig> {
        self.explanation.as_ref()
    }

    /// Schema [`build`](Self::build) will produce
    pub fn schema(&self) -> Schema {
        if self.config_for_batch_prediction {
            Schema::V1beta1
        } else {
            Schema::V1
        }
    }

    /// Build the current schema message
    pub fn as_proto(&self) -> Result<v1::ModelMonitoringObjectiveConfig> {
        let training_dataset = self
            .skew_detection
            .as_ref()
            .map(SkewDetectionConfig::training_dataset)
            .transpose()?;

        Ok(v1::ModelMonitoringObjectiveConfig {
            training_dataset,
            training_prediction_skew_detection_config: self
                .skew_detection
                .as_ref()
                .map(SkewDetectionConfig::as_proto),
            prediction_drift_detection_config: self
                .drift_detection
                .as_ref()
                .map(DriftDetectionConfig::as_proto),
            explanation_config: self.explanation.as_ref().map(ExplanationConfig::as_proto),
        })
    }

    /// Build the message and map it onto the legacy schema
    pub fn as_legacy_proto(&self) -> Result<v1beta1::ModelMonitoringObjectiveConfig> {
        let current = self.as_proto()?;
        debug!("mapping objective config onto v1beta1 schema");
        Ok(current.into())
    }

    /// Build the message in the schema this config targets
    pub fn build(&self) -> Result<ObjectiveConfigMessage> {
        match self.schema() {
            Schema::V1 => Ok(ObjectiveConfigMessage::Current(self.as_proto()?)),
            Schema::V1beta1 => Ok(ObjectiveConfigMessage::Legacy(self.as_legacy_proto()?)),
        }
    }
}

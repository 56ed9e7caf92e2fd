//! Field-by-field mapping from the `v1` messages to their `v1beta1` twins.
//!
//! Every field is named here so a field added to one schema and not the
//! other fails to compile instead of vanishing on the wire.

use super::{v1, v1beta1};

impl From<v1::ThresholdConfig> for v1beta1::ThresholdConfig {
    fn from(value: v1::ThresholdConfig) -> Self {
        let threshold = value.threshold.map(|threshold| match threshold {
            v1::threshold_config::Threshold::Value(value) => {
                v1beta1::threshold_config::Threshold::Value(value)
            }
        });
        Self { threshold }
    }
}

impl From<v1::GcsSource> for v1beta1::GcsSource {
    fn from(value: v1::GcsSource) -> Self {
        Self { uris: value.uris }
    }
}

impl From<v1::BigQuerySource> for v1beta1::BigQuerySource {
    fn from(value: v1::BigQuerySource) -> Self {
        Self {
            input_uri: value.input_uri,
        }
    }
}

impl From<v1::model_monitoring_objective_config::TrainingDataset>
    for v1beta1::model_monitoring_objective_config::TrainingDataset
{
    fn from(value: v1::model_monitoring_objective_config::TrainingDataset) -> Self {
        use v1::model_monitoring_objective_config::training_dataset::DataSource as Current;
        use v1beta1::model_monitoring_objective_config::training_dataset::DataSource as Legacy;

        let data_source = value.data_source.map(|source| match source {
            Current::Dataset(dataset) => Legacy::Dataset(dataset),
            Current::GcsSource(gcs) => Legacy::GcsSource(gcs.into()),
            Current::BigquerySource(bigquery) => Legacy::BigquerySource(bigquery.into()),
        });

        Self {
            data_format: value.data_format,
            target_field: value.target_field,
            data_source,
        }
    }
}

impl From<v1::model_monitoring_objective_config::TrainingPredictionSkewDetectionConfig>
    for v1beta1::model_monitoring_objective_config::TrainingPredictionSkewDetectionConfig
{
    fn from(
        value: v1::model_monitoring_objective_config::TrainingPredictionSkewDetectionConfig,
    ) -> Self {
        Self {
            skew_thresholds: convert_thresholds(value.skew_thresholds),
            attribution_score_skew_thresholds: convert_thresholds(
                value.attribution_score_skew_thresholds,
            ),
            default_skew_threshold: value.default_skew_threshold.map(Into::into),
        }
    }
}

impl From<v1::model_monitoring_objective_config::PredictionDriftDetectionConfig>
    for v1beta1::model_monitoring_objective_config::PredictionDriftDetectionConfig
{
    fn from(value: v1::model_monitoring_objective_config::PredictionDriftDetectionConfig) -> Self {
        Self {
            drift_thresholds: convert_thresholds(value.drift_thresholds),
            attribution_score_drift_thresholds: convert_thresholds(
                value.attribution_score_drift_thresholds,
            ),
            default_drift_threshold: value.default_drift_threshold.map(Into::into),
        }
    }
}

impl From<v1::model_monitoring_objective_config::ExplanationConfig>
    for v1beta1::model_monitoring_objective_config::ExplanationConfig
{
    fn from(value: v1::model_monitoring_objective_config::ExplanationConfig) -> Self {
        Self {
            enable_feature_attributes: value.enable_feature_attributes,
        }
    }
}

impl From<v1::ModelMonitoringObjectiveConfig> for v1beta1::ModelMonitoringObjectiveConfig {
    fn from(value: v1::ModelMonitoringObjectiveConfig) -> Self {
        Self {
            training_dataset: value.training_dataset.map(Into::into),
            training_prediction_skew_detection_config: value
                .training_prediction_skew_detection_config
                .map(Into::into),
            prediction_drift_detection_config: value
                .prediction_drift_detection_config
                .map(Into::into),
            explanation_config: value.explanation_config.map(Into::into),
        }
    }
}

impl From<v1::ModelDeploymentMonitoringObjectiveConfig>
    for v1beta1::ModelDeploymentMonitoringObjectiveConfig
{
    fn from(value: v1::ModelDeploymentMonitoringObjectiveConfig) -> Self {
        Self {
            deployed_model_id: value.deployed_model_id,
            objective_config: value.objective_config.map(Into::into),
        }
    }
}

fn convert_thresholds(
    thresholds: std::collections::BTreeMap<String, v1::ThresholdConfig>,
) -> std::collections::BTreeMap<String, v1beta1::ThresholdConfig> {
    thresholds
        .into_iter()
        .map(|(feature, threshold)| (feature, threshold.into()))
        .collect()
}

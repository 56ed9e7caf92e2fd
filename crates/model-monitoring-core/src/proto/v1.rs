// @generated
// Generated from: google/cloud/aiplatform/v1/{io,model_monitoring,model_deployment_monitoring_job}.proto
// Manual check-in for offline builds. Only the messages used by objective configs are kept.

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GcsSource {
    #[prost(string, repeated, tag = "1")]
    pub uris: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BigQuerySource {
    #[prost(string, tag = "1")]
    pub input_uri: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ThresholdConfig {
    #[prost(oneof = "threshold_config::Threshold", tags = "1")]
    pub threshold: ::core::option::Option<threshold_config::Threshold>,
}

/// Nested message and enum types in `ThresholdConfig`.
pub mod threshold_config {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Threshold {
        #[prost(double, tag = "1")]
        Value(f64),
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ModelMonitoringObjectiveConfig {
    #[prost(message, optional, tag = "1")]
    pub training_dataset:
        ::core::option::Option<model_monitoring_objective_config::TrainingDataset>,
    #[prost(message, optional, tag = "2")]
    pub training_prediction_skew_detection_config: ::core::option::Option<
        model_monitoring_objective_config::TrainingPredictionSkewDetectionConfig,
    >,
    #[prost(message, optional, tag = "3")]
    pub prediction_drift_detection_config: ::core::option::Option<
        model_monitoring_objective_config::PredictionDriftDetectionConfig,
    >,
    #[prost(message, optional, tag = "5")]
    pub explanation_config:
        ::core::option::Option<model_monitoring_objective_config::ExplanationConfig>,
}

/// Nested message and enum types in `ModelMonitoringObjectiveConfig`.
pub mod model_monitoring_objective_config {
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct TrainingDataset {
        #[prost(string, tag = "2")]
        pub data_format: ::prost::alloc::string::String,
        #[prost(string, tag = "6")]
        pub target_field: ::prost::alloc::string::String,
        #[prost(oneof = "training_dataset::DataSource", tags = "3, 4, 5")]
        pub data_source: ::core::option::Option<training_dataset::DataSource>,
    }

    /// Nested message and enum types in `TrainingDataset`.
    pub mod training_dataset {
        #[derive(Clone, PartialEq, ::prost::Oneof)]
        pub enum DataSource {
            #[prost(string, tag = "3")]
            Dataset(::prost::alloc::string::String),
            #[prost(message, tag = "4")]
            GcsSource(super::super::GcsSource),
            #[prost(message, tag = "5")]
            BigquerySource(super::super::BigQuerySource),
        }
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct TrainingPredictionSkewDetectionConfig {
        #[prost(btree_map = "string, message", tag = "1")]
        pub skew_thresholds: ::prost::alloc::collections::BTreeMap<
            ::prost::alloc::string::String,
            super::ThresholdConfig,
        >,
        #[prost(btree_map = "string, message", tag = "2")]
        pub attribution_score_skew_thresholds: ::prost::alloc::collections::BTreeMap<
            ::prost::alloc::string::String,
            super::ThresholdConfig,
        >,
        #[prost(message, optional, tag = "6")]
        pub default_skew_threshold: ::core::option::Option<super::ThresholdConfig>,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct PredictionDriftDetectionConfig {
        #[prost(btree_map = "string, message", tag = "1")]
        pub drift_thresholds: ::prost::alloc::collections::BTreeMap<
            ::prost::alloc::string::String,
            super::ThresholdConfig,
        >,
        #[prost(btree_map = "string, message", tag = "2")]
        pub attribution_score_drift_thresholds: ::prost::alloc::collections::BTreeMap<
            ::prost::alloc::string::String,
            super::ThresholdConfig,
        >,
        #[prost(message, optional, tag = "5")]
        pub default_drift_threshold: ::core::option::Option<super::ThresholdConfig>,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct ExplanationConfig {
        #[prost(bool, tag = "1")]
        pub enable_feature_attributes: bool,
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ModelDeploymentMonitoringObjectiveConfig {
    #[prost(string, tag = "1")]
    pub deployed_model_id: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "2")]
    pub objective_config: ::core::option::Option<ModelMonitoringObjectiveConfig>,
}

//! Objective configuration builder for model monitoring
//!
//! Turns skew detection, drift detection and explanation settings into the
//! `ModelMonitoringObjectiveConfig` request message, in the current (`v1`)
//! schema or the legacy (`v1beta1`) schema used by batch prediction
//! monitoring.

pub mod config;
pub mod deployment;
pub mod error;
pub mod objective;
pub mod schema;

// Re-export core types
pub use model_monitoring_core::{CoreError, proto};

pub use config::MonitoringConfig;
pub use deployment::DeployedModelObjectives;
pub use error::{MonitoringError, Result};
pub use objective::{
    DataFormat, DataSource, DriftDetectionConfig, ExplanationConfig, ObjectiveConfig,
    SkewDetectionConfig, SkewThresholds,
};
pub use schema::{DeploymentObjectiveMessages, ObjectiveConfigMessage, Schema};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::objective::{
        DriftDetectionConfig, ExplanationConfig, ObjectiveConfig, SkewDetectionConfig,
    };
    pub use crate::schema::Schema;
}

pub mod drift;
pub mod explanation;
pub mod objective_config;
pub mod skew;
pub mod training_dataset;

pub use drift::DriftDetectionConfig;
pub use explanation::ExplanationConfig;
pub use objective_config::ObjectiveConfig;
pub use skew::{BACKEND_DEFAULT_SKEW_THRESHOLD, SkewDetectionConfig, SkewThresholds};
pub use training_dataset::{DataFormat, DataSource};

use model_monitoring_core::proto::v1::ThresholdConfig;
use std::collections::BTreeMap;

/// One threshold entry per feature, values carried verbatim
fn threshold_entries(thresholds: &BTreeMap<String, f64>) -> BTreeMap<String, ThresholdConfig> {
    thresholds
        .iter()
        .map(|(feature, value)| (feature.clone(), ThresholdConfig::with_value(*value)))
        .collect()
}

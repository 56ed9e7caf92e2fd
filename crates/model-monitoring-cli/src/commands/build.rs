//! Build command handler

use super::load_config;
use crate::SchemaArg;
use crate::error::CliError;
use model_monitoring::{MonitoringConfig, ObjectiveConfig, SkewThresholds};
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// What `build` produced
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BuildSummary {
    pub schema: String,
    /// Number of messages; deployed model objectives are written length-delimited
    pub messages: usize,
    pub encoded_len: usize,
    pub training_dataset: bool,
    pub skew_features: usize,
    /// Skew threshold for features without their own entry
    pub default_skew_threshold: Option<f64>,
    pub drift_features: usize,
    pub explanation: Option<bool>,
}

pub async fn run_build(
    config_path: &Path,
    schema: Option<SchemaArg>,
    output: Option<&Path>,
) -> Result<BuildSummary, CliError> {
    let config = load_config(config_path, schema)?;
    let (bytes, summary) = build_bytes(&config)?;

    if let Some(output) = output {
        fs::write(output, &bytes)?;
        info!("Wrote {} bytes to {}", bytes.len(), output.display());
    }

    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(summary)
}

fn build_bytes(config: &MonitoringConfig) -> Result<(Vec<u8>, BuildSummary), CliError> {
    let (bytes, messages) = if config.deployed_model_ids.is_empty() {
        let message = config.objective_config().build()?;
        (message.encode_to_vec(), 1)
    } else {
        let messages = config.deployed_model_objectives().build()?;
        debug!(
            deployed_models = messages.len(),
            "built deployed model objectives"
        );
        (messages.encode_length_delimited(), messages.len())
    };

    let summary = summarize(&config.objective_config(), messages, bytes.len());
    Ok((bytes, summary))
}

fn summarize(objective: &ObjectiveConfig, messages: usize, encoded_len: usize) -> BuildSummary {
    let skew_features = match objective.skew_detection().and_then(|s| s.skew_thresholds()) {
        Some(SkewThresholds::PerFeature(thresholds)) => thresholds.len(),
        _ => 0,
    };

    BuildSummary {
        schema: objective.schema().to_string(),
        messages,
        encoded_len,
        training_dataset: objective.skew_detection().is_some(),
        skew_features,
        default_skew_threshold: objective
            .skew_detection()
            .and_then(|s| s.default_threshold()),
        drift_features: objective
            .drift_detection()
            .map_or(0, |d| d.drift_thresholds().len()),
        explanation: objective
            .explanation()
            .map(|e| e.enable_feature_attributes()),
    }
}

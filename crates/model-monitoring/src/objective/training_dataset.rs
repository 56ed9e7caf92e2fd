//! Training dataset derivation for skew detection
//!
//! The data source string decides which `TrainingDataset.data_source` case
//! is set. Discrimination is by prefix only: `bq:/` is a BigQuery table,
//! `gs:/` is a Cloud Storage object, anything else is a dataset reference.

use crate::error::{MonitoringError, Result};
use model_monitoring_core::proto::v1::{
    BigQuerySource, GcsSource, model_monitoring_objective_config::TrainingDataset,
    model_monitoring_objective_config::training_dataset::DataSource as ProtoDataSource,
};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum_macros::{Display, EnumString};
use tracing::{debug, warn};

pub const BIGQUERY_PREFIX: &str = "bq:/";
pub const GCS_PREFIX: &str = "gs:/";

/// Format of a Cloud Storage training dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum DataFormat {
    /// TFRecord file
    TfRecord,
    /// CSV file
    Csv,
    /// JSONL file
    Jsonl,
}

impl DataFormat {
    /// Parse a user supplied format, case-sensitively
    pub fn parse(value: &str) -> Result<Self> {
        Self::from_str(value)
            .map_err(|_| MonitoringError::UnsupportedDataFormat(value.to_string()))
    }
}

/// Where the training data lives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource<'a> {
    /// BigQuery table URI
    BigQuery(&'a str),
    /// Cloud Storage object URI
    Gcs(&'a str),
    /// Opaque dataset reference
    Dataset(&'a str),
}

impl<'a> DataSource<'a> {
    /// Classify a data source string by its prefix
    pub fn classify(uri: &'a str) -> Self {
        if uri.starts_with(BIGQUERY_PREFIX) {
            DataSource::BigQuery(uri)
        } else if uri.starts_with(GCS_PREFIX) {
            DataSource::Gcs(uri)
        } else {
            DataSource::Dataset(uri)
        }
    }
}

/// Build the `TrainingDataset` message for a skew detection source.
///
/// `data_format` is only validated and carried for Cloud Storage sources.
pub(crate) fn build_training_dataset(
    data_source: &str,
    data_format: Option<&str>,
    target_field: Option<&str>,
) -> Result<TrainingDataset> {
    let mut dataset = TrainingDataset {
        target_field: target_field.unwrap_or_default().to_string(),
        ..Default::default()
    };

    match DataSource::classify(data_source) {
        DataSource::BigQuery(uri) => {
            debug!(uri, "training dataset from BigQuery source");
            ignore_data_format(data_format, uri);
            dataset.data_source = Some(ProtoDataSource::BigquerySource(BigQuerySource {
                input_uri: uri.to_string(),
            }));
        }
        DataSource::Gcs(uri) => {
            let format = data_format.map(DataFormat::parse).transpose()?;
            debug!(uri, format = ?format, "training dataset from Cloud Storage source");
            dataset.data_source = Some(ProtoDataSource::GcsSource(GcsSource {
                uris: vec![uri.to_string()],
            }));
            dataset.data_format = format.map(|f| f.to_string()).unwrap_or_default();
        }
        DataSource::Dataset(name) => {
            debug!(dataset = name, "training dataset from dataset reference");
            ignore_data_format(data_format, name);
            dataset.data_source = Some(ProtoDataSource::Dataset(name.to_string()));
        }
    }

    Ok(dataset)
}

fn ignore_data_format(data_format: Option<&str>, source: &str) {
    if let Some(format) = data_format {
        warn!(
            data_format = format,
            source, "data_format only applies to Cloud Storage sources, ignoring"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(
            DataSource::classify("bq://project.dataset.table"),
            DataSource::BigQuery("bq://project.dataset.table")
        );
        assert_eq!(
            DataSource::classify("gs://bucket/train.csv"),
            DataSource::Gcs("gs://bucket/train.csv")
        );
        assert_eq!(
            DataSource::classify("projects/p/datasets/123"),
            DataSource::Dataset("projects/p/datasets/123")
        );
        // Scheme tokens are matched on a single slash
        assert_eq!(DataSource::classify("gs:/bucket"), DataSource::Gcs("gs:/bucket"));
        assert_eq!(DataSource::classify("gs:bucket"), DataSource::Dataset("gs:bucket"));
    }

    #[test]
    fn test_data_format_parse() {
        assert_eq!(DataFormat::parse("tf-record").unwrap(), DataFormat::TfRecord);
        assert_eq!(DataFormat::parse("csv").unwrap(), DataFormat::Csv);
        assert_eq!(DataFormat::parse("jsonl").unwrap(), DataFormat::Jsonl);
        assert!(DataFormat::parse("CSV").is_err());
        assert!(DataFormat::parse("tfrecord").is_err());
        assert_eq!(DataFormat::TfRecord.to_string(), "tf-record");
    }

    #[test]
    fn test_bigquery_ignores_data_format() {
        let dataset = build_training_dataset("bq://p.d.t", Some("xml"), Some("label")).unwrap();
        assert_eq!(dataset.data_format, "");
        assert_eq!(dataset.target_field, "label");
        assert!(matches!(
            dataset.data_source,
            Some(ProtoDataSource::BigquerySource(ref source)) if source.input_uri == "bq://p.d.t"
        ));
    }

    #[test]
    fn test_gcs_without_format() {
        let dataset = build_training_dataset("gs://bucket/data", None, None).unwrap();
        assert_eq!(dataset.data_format, "");
        assert_eq!(dataset.target_field, "");
    }
}

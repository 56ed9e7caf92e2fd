use model_monitoring::proto::v1::model_monitoring_objective_config::training_dataset::DataSource;
use model_monitoring::{
    DriftDetectionConfig, ExplanationConfig, MonitoringError, ObjectiveConfig,
    SkewDetectionConfig,
};
use std::collections::BTreeMap;

fn features() -> BTreeMap<String, f64> {
    BTreeMap::from([
        ("age".to_string(), 0.1),
        ("income".to_string(), 0.25),
        ("zip_code".to_string(), 0.9),
    ])
}

#[test]
fn test_skew_mapping_one_entry_per_feature() {
    let thresholds = features();
    let proto = SkewDetectionConfig::new("gs://bucket/train.csv")
        .with_skew_thresholds(thresholds.clone())
        .as_proto();

    assert!(proto.default_skew_threshold.is_none());
    assert_eq!(proto.skew_thresholds.len(), thresholds.len());
    for (feature, value) in &thresholds {
        assert_eq!(proto.skew_thresholds[feature].threshold_value(), Some(*value));
    }
}

#[test]
fn test_skew_scalar_becomes_default() {
    for value in [0.0, 0.3, 0.75, 1.0] {
        let proto = SkewDetectionConfig::new("bq://project.dataset.table")
            .with_skew_thresholds(value)
            .as_proto();

        assert!(proto.skew_thresholds.is_empty());
        assert_eq!(
            proto
                .default_skew_threshold
                .and_then(|threshold| threshold.threshold_value()),
            Some(value)
        );
    }
}

#[test]
fn test_drift_entries_match_inputs() {
    let drift = features();
    let attribution = BTreeMap::from([("age".to_string(), 0.05)]);
    let proto = DriftDetectionConfig::new(drift.clone(), attribution.clone()).as_proto();

    assert_eq!(proto.drift_thresholds.len(), drift.len());
    assert_eq!(
        proto.attribution_score_drift_thresholds.len(),
        attribution.len()
    );
    assert_eq!(proto.drift_thresholds["income"].threshold_value(), Some(0.25));
    assert_eq!(
        proto.attribution_score_drift_thresholds["age"].threshold_value(),
        Some(0.05)
    );
}

#[test]
fn test_gcs_unsupported_format_rejected() {
    let objective = ObjectiveConfig::new().with_skew_detection(
        SkewDetectionConfig::new("gs://bucket/train.xml").with_data_format("xml"),
    );

    let err = objective.as_proto().unwrap_err();
    assert!(matches!(err, MonitoringError::UnsupportedDataFormat(ref v) if v == "xml"));

    let message = err.to_string();
    for format in ["tf-record", "csv", "jsonl"] {
        assert!(message.contains(format), "missing {} in {}", format, message);
    }
}

#[test]
fn test_gcs_csv_source() {
    let dataset = SkewDetectionConfig::new("gs://bucket/train.csv")
        .with_data_format("csv")
        .with_target_field("churned")
        .training_dataset()
        .unwrap();

    assert_eq!(dataset.data_format, "csv");
    assert_eq!(dataset.target_field, "churned");
    match dataset.data_source {
        Some(DataSource::GcsSource(source)) => {
            assert_eq!(source.uris, vec!["gs://bucket/train.csv".to_string()]);
        }
        other => panic!("expected gcs source, got {:?}", other),
    }
}

#[test]
fn test_bigquery_source() {
    let dataset = SkewDetectionConfig::new("bq://project.dataset.table")
        .with_target_field("label")
        .training_dataset()
        .unwrap();

    assert_eq!(dataset.target_field, "label");
    match dataset.data_source {
        Some(DataSource::BigquerySource(source)) => {
            assert_eq!(source.input_uri, "bq://project.dataset.table");
        }
        other => panic!("expected bigquery source, got {:?}", other),
    }
}

#[test]
fn test_dataset_reference_verbatim() {
    let dataset = SkewDetectionConfig::new("my_training_table")
        .with_data_format("xml")
        .training_dataset()
        .unwrap();

    assert_eq!(dataset.data_format, "");
    assert_eq!(
        dataset.data_source,
        Some(DataSource::Dataset("my_training_table".to_string()))
    );
}

#[test]
fn test_explanation_flag() {
    assert!(ExplanationConfig::new().as_proto().enable_feature_attributes);
    assert!(!ExplanationConfig::default().as_proto().enable_feature_attributes);
}

#[test]
fn test_build_is_deterministic() {
    let objective = ObjectiveConfig::new()
        .with_skew_detection(
            SkewDetectionConfig::new("gs://bucket/train.jsonl")
                .with_data_format("jsonl")
                .with_skew_thresholds(features())
                .with_attribute_skew_thresholds(features()),
        )
        .with_drift_detection(DriftDetectionConfig::new(features(), features()))
        .with_explanation(ExplanationConfig::new());

    let first = objective.build().unwrap().encode_to_vec();
    let second = objective.build().unwrap().encode_to_vec();
    assert!(!first.is_empty());
    assert_eq!(first, second);

    let legacy = objective.clone().for_batch_prediction();
    assert_eq!(
        legacy.build().unwrap().encode_to_vec(),
        legacy.build().unwrap().encode_to_vec()
    );
}

#[test]
fn test_full_objective_sections() {
    let proto = ObjectiveConfig::new()
        .with_skew_detection(SkewDetectionConfig::new("bq://p.d.t").with_skew_thresholds(0.3))
        .with_drift_detection(DriftDetectionConfig::new([("age", 0.1)], [("age", 0.2)]))
        .with_explanation(ExplanationConfig::new())
        .as_proto()
        .unwrap();

    assert!(proto.training_dataset.is_some());
    assert!(proto.training_prediction_skew_detection_config.is_some());
    assert!(proto.prediction_drift_detection_config.is_some());
    assert!(proto.explanation_config.unwrap().enable_feature_attributes);
}

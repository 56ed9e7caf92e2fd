//! Schema versions and the message produced for each

use model_monitoring_core::encode;
use model_monitoring_core::proto::{v1, v1beta1};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Wire schema version of the objective message
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Schema {
    /// Current schema
    #[default]
    V1,
    /// Legacy schema used by batch prediction monitoring
    V1beta1,
}

/// An objective message in whichever schema the config targets
#[derive(Debug, Clone, PartialEq)]
pub enum ObjectiveConfigMessage {
    Current(v1::ModelMonitoringObjectiveConfig),
    Legacy(v1beta1::ModelMonitoringObjectiveConfig),
}

impl ObjectiveConfigMessage {
    pub fn schema(&self) -> Schema {
        match self {
            ObjectiveConfigMessage::Current(_) => Schema::V1,
            ObjectiveConfigMessage::Legacy(_) => Schema::V1beta1,
        }
    }

    /// Serialize to protobuf wire bytes
    pub fn encode_to_vec(&self) -> Vec<u8> {
        match self {
            ObjectiveConfigMessage::Current(message) => encode(message),
            ObjectiveConfigMessage::Legacy(message) => encode(message),
        }
    }
}

/// Per-deployed-model objective messages in whichever schema the config targets
#[derive(Debug, Clone, PartialEq)]
pub enum DeploymentObjectiveMessages {
    Current(Vec<v1::ModelDeploymentMonitoringObjectiveConfig>),
    Legacy(Vec<v1beta1::ModelDeploymentMonitoringObjectiveConfig>),
}

impl DeploymentObjectiveMessages {
    pub fn schema(&self) -> Schema {
        match self {
            DeploymentObjectiveMessages::Current(_) => Schema::V1,
            DeploymentObjectiveMessages::Legacy(_) => Schema::V1beta1,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            DeploymentObjectiveMessages::Current(messages) => messages.len(),
            DeploymentObjectiveMessages::Legacy(messages) => messages.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Serialize each message, length-delimited, into one buffer
    pub fn encode_length_delimited(&self) -> Vec<u8> {
        use prost::Message;

        let mut buf = Vec::new();
        match self {
            DeploymentObjectiveMessages::Current(messages) => {
                for message in messages {
                    buf.extend(message.encode_length_delimited_to_vec());
                }
            }
            DeploymentObjectiveMessages::Legacy(messages) => {
                for message in messages {
                    buf.extend(message.encode_length_delimited_to_vec());
                }
            }
        }
        buf
    }
}

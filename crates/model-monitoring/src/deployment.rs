//! Objective configs for the deployed models of an endpoint
//!
//! An endpoint monitoring job carries one
//! `ModelDeploymentMonitoringObjectiveConfig` per deployed model.

use crate::error::{MonitoringError, Result};
use crate::objective::ObjectiveConfig;
use crate::schema::{DeploymentObjectiveMessages, Schema};
use model_monitoring_core::proto::v1::ModelDeploymentMonitoringObjectiveConfig;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DeployedModelObjectives {
    objectives: Vec<(String, ObjectiveConfig)>,
    schema: Schema,
}

impl DeployedModelObjectives {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply the same objective to every deployed model
    pub fn uniform<I, S>(deployed_model_ids: I, objective: &ObjectiveConfig) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        deployed_model_ids
            .into_iter()
            .fold(Self::new(), |objectives, id| {
                objectives.with_objective(id, objective.clone())
            })
    }

    /// Add an objective for one deployed model.
    ///
    /// Any objective targeting the legacy schema switches the whole set.
    pub fn with_objective(
        mut self,
        deployed_model_id: impl Into<String>,
        objective: ObjectiveConfig,
    ) -> Self {
        if objective.schema() == Schema::V1beta1 {
            self.schema = Schema::V1beta1;
        }
        self.objectives.push((deployed_model_id.into(), objective));
        self
    }

    pub fn schema(&self) -> Schema {
        self.schema
    }

    pub fn len(&self) -> usize {
        self.objectives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objectives.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ObjectiveConfig)> {
        self.objectives
            .iter()
            .map(|(id, objective)| (id.as_str(), objective))
    }

    /// Build one current schema message per deployed model, in insertion order
    pub fn as_proto(&self) -> Result<Vec<ModelDeploymentMonitoringObjectiveConfig>> {
        self.objectives
            .iter()
            .map(|(id, objective)| {
                if id.is_empty() {
                    return Err(MonitoringError::InvalidConfig(
                        "deployed model id must not be empty".to_string(),
                    ));
                }
                Ok(ModelDeploymentMonitoringObjectiveConfig {
                    deployed_model_id: id.clone(),
                    objective_config: Some(objective.as_proto()?),
                })
            })
            .collect()
    }

    /// Build the messages in the schema this set targets
    pub fn build(&self) -> Result<DeploymentObjectiveMessages> {
        let messages = self.as_proto()?;
        Ok(match self.schema {
            Schema::V1 => DeploymentObjectiveMessages::Current(messages),
            Schema::V1beta1 => DeploymentObjectiveMessages::Legacy(
                messages.into_iter().map(Into::into).collect(),
            ),
        })
    }
}

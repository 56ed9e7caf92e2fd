//! Model monitoring CLI library

pub mod commands;
pub mod error;
pub mod logging;

use model_monitoring::Schema;

/// Schema selection for CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SchemaArg {
    /// Current schema
    #[value(name = "v1")]
    V1,
    /// Legacy schema for batch prediction monitoring
    #[value(name = "v1beta1")]
    V1beta1,
}

impl From<SchemaArg> for Schema {
    fn from(value: SchemaArg) -> Self {
        match value {
            SchemaArg::V1 => Schema::V1,
            SchemaArg::V1beta1 => Schema::V1beta1,
        }
    }
}

impl std::fmt::Display for SchemaArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Schema::from(*self))
    }
}

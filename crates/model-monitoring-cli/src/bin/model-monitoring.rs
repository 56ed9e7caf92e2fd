//! CLI for building model monitoring objective configs

use clap::Parser;
use model_monitoring::MonitoringConfig;
use model_monitoring_cli::{SchemaArg, commands, logging};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "model-monitoring")]
#[command(about = "Build model monitoring objective configs", long_about = None)]
struct Cli {
    /// Log level (error, warn, info, debug, trace). Defaults to the config file's level.
    #[arg(short, long, global = true, env = "MODEL_MONITORING_LOG_LEVEL")]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Write a sample configuration file
    Init {
        /// Where to write the config
        #[arg(long, short, default_value = "monitoring.toml")]
        path: PathBuf,
    },
    /// Build the objective message from a configuration file
    Build {
        /// Config file path (.toml or .json)
        #[arg(long, short, env = "MODEL_MONITORING_CONFIG", default_value = "monitoring.toml")]
        config: PathBuf,
        /// Override the schema set in the config file
        #[arg(long, value_enum)]
        schema: Option<SchemaArg>,
        /// Write the encoded message to this file
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Check that the v1 and v1beta1 messages agree for a config
    Check {
        /// Config file path (.toml or .json)
        #[arg(long, short, env = "MODEL_MONITORING_CONFIG", default_value = "monitoring.toml")]
        config: PathBuf,
    },
}

fn config_log_level(path: &Path) -> Option<String> {
    MonitoringConfig::load_from_file(path)
        .ok()
        .map(|config| config.log_level)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config_path = match &cli.command {
        Some(Commands::Build { config, .. }) | Some(Commands::Check { config }) => {
            Some(config.as_path())
        }
        _ => None,
    };
    let log_level = cli
        .log_level
        .clone()
        .or_else(|| config_path.and_then(config_log_level))
        .unwrap_or_else(|| "info".to_string());
    logging::init_tracing(&log_level);

    match &cli.command {
        Some(Commands::Init { path }) => {
            commands::run_init(path).await?;
        }
        Some(Commands::Build {
            config,
            schema,
            output,
        }) => {
            commands::run_build(config, *schema, output.as_deref()).await?;
        }
        Some(Commands::Check { config }) => {
            commands::run_check(config).await?;
        }
        None => {
            println!("Model monitoring objective config builder");
            println!("Use --help for more information");
        }
    }

    Ok(())
}

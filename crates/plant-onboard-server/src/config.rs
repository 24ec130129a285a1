//! Server configuration from command line and environment

use std::path::PathBuf;

use clap::Parser;

/// Default tracing filter when neither `--log` nor `RUST_LOG` is given
pub const DEFAULT_LOG_FILTER: &str = "info,plant_onboard=debug";

#[derive(Parser, Debug, Clone)]
#[command(name = "plant-onboard")]
#[command(author, version, about = "HTTP API for the plant onboarding wizard")]
pub struct ServerConfig {
    /// Address to listen on
    #[arg(long, env = "ONBOARD_BIND", default_value = "0.0.0.0:8000")]
    pub bind: String,

    /// Parameter registry JSON file (default: built-in registry)
    #[arg(long, env = "ONBOARD_REGISTRY")]
    pub registry: Option<PathBuf>,

    /// Directory holding saved templates
    #[arg(long, env = "ONBOARD_TEMPLATES_DIR", default_value = "data/templates")]
    pub templates_dir: PathBuf,

    /// Write the bundled sample templates into the template directory
    /// (existing templates are kept)
    #[arg(long, env = "ONBOARD_SEED_SAMPLES")]
    pub seed_samples: bool,

    /// Tracing filter directives
    #[arg(long, env = "RUST_LOG", default_value = DEFAULT_LOG_FILTER)]
    pub log: String,
}

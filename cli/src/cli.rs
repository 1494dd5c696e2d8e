use crate::commands::Commands;

use clap::Parser;
use todo_core::config::{ClientConfig, BASE_URL_ENV, DEFAULT_BASE_URL};

#[derive(Debug, Parser)]
#[command(name = "todo")]
#[command(about = "Manage todos on a Todo Management API server")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// API base URL, including the `/api` prefix
    #[arg(long, global = true, env = BASE_URL_ENV, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,
}

impl Cli {
    /// Same normalisation as `ClientConfig::from_env`.
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::from_base_url(&self.base_url)
    }
}

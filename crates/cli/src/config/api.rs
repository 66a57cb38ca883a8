//! Hotels Service Config

use std::{path::PathBuf, time::Duration};

use clap::Args;
use hotelier_app::context::Backend;

/// Where hotels come from.
#[derive(Debug, Args)]
pub struct ApiConfig {
    /// Hotels service root URL
    #[arg(
        long,
        env = "HOTELIER_API_URL",
        default_value = "http://localhost:5000",
        global = true
    )]
    pub api_url: String,

    /// Use the in-process store instead of the hotels service
    #[arg(long, env = "HOTELIER_LOCAL", global = true)]
    pub local: bool,

    /// YAML file seeding the in-process store (implies --local)
    #[arg(long, env = "HOTELIER_SEED_FILE", global = true)]
    pub seed_file: Option<PathBuf>,

    /// HTTP request timeout in seconds
    #[arg(
        long,
        env = "HOTELIER_TIMEOUT_SECONDS",
        default_value_t = 10_u64,
        global = true
    )]
    pub timeout_seconds: u64,

    /// Quiet period before a live search is sent, in milliseconds
    #[arg(
        long,
        env = "HOTELIER_SEARCH_DEBOUNCE_MS",
        default_value_t = 500_u64,
        global = true
    )]
    pub search_debounce_ms: u64,
}

impl ApiConfig {
    /// Store selected by these settings.
    pub fn backend(&self) -> Backend {
        if self.local || self.seed_file.is_some() {
            Backend::Local {
                seed_file: self.seed_file.clone(),
            }
        } else {
            Backend::Http {
                base_url: self.api_url.clone(),
                timeout: Duration::from_secs(self.timeout_seconds),
            }
        }
    }

    /// Live search debounce window.
    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }
}

use crate::config::validate_settings;
use crate::core::{ConfigProvider, Targets};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;
use std::time::Duration;

#[derive(Debug, Clone, Parser)]
#[command(name = "starship-info")]
#[command(about = "Serves a starship's crew size and whether a person is on a planet")]
pub struct CliConfig {
    #[arg(long, default_value = "https://swapi.dev/api")]
    pub catalog_url: String,

    #[arg(long, default_value = "0.0.0.0:8080")]
    pub bind_addr: String,

    #[arg(long, default_value = "Death Star")]
    pub starship: String,

    #[arg(long, default_value = "Leia Organa")]
    pub person: String,

    #[arg(long, default_value = "Alderaan")]
    pub planet: String,

    /// Per-request timeout for catalog calls; unset means no deadline
    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    /// Run the ship lookup and the presence check concurrently
    #[arg(long)]
    pub concurrent_lookups: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    /// Path to a TOML configuration file; replaces the flags above
    #[arg(short, long)]
    pub config: Option<String>,
}

impl ConfigProvider for CliConfig {
    fn catalog_url(&self) -> &str {
        &self.catalog_url
    }

    fn bind_addr(&self) -> &str {
        &self.bind_addr
    }

    fn targets(&self) -> Targets {
        Targets {
            starship: self.starship.clone(),
            person: self.person.clone(),
            planet: self.planet.clone(),
        }
    }

    fn request_timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }

    fn concurrent_lookups(&self) -> bool {
        self.concurrent_lookups
    }

    fn json_logs(&self) -> bool {
        self.json_logs
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_settings(self, self.timeout_seconds)
    }
}

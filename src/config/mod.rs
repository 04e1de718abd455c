#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use toml_config::TomlConfig;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_range, validate_socket_addr, validate_url,
};

pub const MAX_TIMEOUT_SECONDS: u64 = 300;

/// Checks shared by every configuration source.
pub(crate) fn validate_settings<C: ConfigProvider + ?Sized>(
    config: &C,
    timeout_seconds: Option<u64>,
) -> Result<()> {
    validate_url("catalog_url", config.catalog_url())?;
    validate_socket_addr("bind_addr", config.bind_addr())?;

    let targets = config.targets();
    validate_non_empty_string("targets.starship", &targets.starship)?;
    validate_non_empty_string("targets.person", &targets.person)?;
    validate_non_empty_string("targets.planet", &targets.planet)?;

    if let Some(timeout) = timeout_seconds {
        validate_range("timeout_seconds", timeout, 1, MAX_TIMEOUT_SECONDS)?;
    }

    tracing::debug!("✅ Configuration validation passed");
    Ok(())
}

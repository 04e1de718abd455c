pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::HttpCatalogClient;
pub use config::TomlConfig;
pub use crate::core::{aggregator::InformationAggregator, ConfigProvider, Targets};
pub use utils::error::{CatalogError, Result};

use crate::domain::model::Collection;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Keyword search against one catalog collection.
///
/// Implementations return the first result page as raw JSON; typed decoding
/// happens in [`crate::core::lookup::search`]. Transport failures surface as
/// errors and are never retried here.
#[async_trait]
pub trait CatalogLookup: Send + Sync {
    async fn fetch_page(&self, collection: Collection, keyword: &str) -> Result<serde_json::Value>;

    /// URL a search is issued against, used in error diagnostics.
    fn request_url(&self, collection: Collection, keyword: &str) -> String {
        format!("/{}/?search={}", collection.path(), keyword)
    }
}

/// The fixed entities one aggregation resolves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Targets {
    pub starship: String,
    pub person: String,
    pub planet: String,
}

impl Default for Targets {
    fn default() -> Self {
        Self {
            starship: "Death Star".to_string(),
            person: "Leia Organa".to_string(),
            planet: "Alderaan".to_string(),
        }
    }
}

pub trait ConfigProvider: Send + Sync {
    fn catalog_url(&self) -> &str;
    fn bind_addr(&self) -> &str;
    fn targets(&self) -> Targets;
    fn request_timeout(&self) -> Option<Duration>;
    fn concurrent_lookups(&self) -> bool;
    fn json_logs(&self) -> bool;
}

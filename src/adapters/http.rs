use crate::domain::model::Collection;
use crate::domain::ports::{CatalogLookup, ConfigProvider};
use crate::utils::error::{CatalogError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// reqwest-backed catalog client. Searches `{base}/{collection}/?search={keyword}`.
#[derive(Debug, Clone)]
pub struct HttpCatalogClient {
    client: Client,
    base_url: String,
}

impl HttpCatalogClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// 建立帶有請求逾時的客戶端；未設定時沿用傳輸層預設（無逾時）
    pub fn with_timeout(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| CatalogError::ConfigError {
            message: format!("Failed to build HTTP client: {}", e),
        })?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Result<Self> {
        Self::with_timeout(config.catalog_url(), config.request_timeout())
    }

    pub fn search_url(&self, collection: Collection) -> String {
        format!(
            "{}/{}/",
            self.base_url.trim_end_matches('/'),
            collection.path()
        )
    }
}

fn with_search_param(search_url: &str, keyword: &str) -> String {
    match Url::parse_with_params(search_url, &[("search", keyword)]) {
        Ok(url) => url.into(),
        Err(_) => format!("{}?search={}", search_url, keyword),
    }
}

#[async_trait]
impl CatalogLookup for HttpCatalogClient {
    async fn fetch_page(&self, collection: Collection, keyword: &str) -> Result<serde_json::Value> {
        let search_url = self.search_url(collection);
        let url = with_search_param(&search_url, keyword);
        tracing::debug!("Searching {} for '{}' at {}", collection, keyword, url);

        let response = self
            .client
            .get(&search_url)
            .query(&[("search", keyword)])
            .send()
            .await
            .map_err(|source| CatalogError::TransportError {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        tracing::debug!("Catalog response status for {}: {}", collection, status);

        if !status.is_success() {
            return Err(CatalogError::UpstreamStatusError {
                url,
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|source| CatalogError::TransportError {
                url: url.clone(),
                source,
            })?;

        serde_json::from_str(&body).map_err(|source| CatalogError::DecodeError { url, source })
    }

    fn request_url(&self, collection: Collection, keyword: &str) -> String {
        with_search_param(&self.search_url(collection), keyword)
    }
}

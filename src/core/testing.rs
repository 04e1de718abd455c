use crate::domain::model::Collection;
use crate::domain::ports::CatalogLookup;
use crate::utils::error::{CatalogError, Result};
use async_trait::async_trait;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Mutex;

enum StubReply {
    Page(Value),
    Status(u16),
}

/// In-memory catalog for core unit tests. Collections without a reply answer 404.
pub(crate) struct StubCatalog {
    replies: HashMap<Collection, StubReply>,
    calls: Mutex<Vec<(Collection, String)>>,
}

impl StubCatalog {
    pub(crate) fn new() -> Self {
        Self {
            replies: HashMap::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn with_results(self, collection: Collection, results: Value) -> Self {
        let count = results.as_array().map(|items| items.len()).unwrap_or(0);
        self.with_page(collection, json!({"count": count, "results": results}))
    }

    pub(crate) fn with_page(mut self, collection: Collection, page: Value) -> Self {
        self.replies.insert(collection, StubReply::Page(page));
        self
    }

    pub(crate) fn with_status(mut self, collection: Collection, status: u16) -> Self {
        self.replies.insert(collection, StubReply::Status(status));
        self
    }

    pub(crate) fn calls(&self) -> Vec<(Collection, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CatalogLookup for StubCatalog {
    async fn fetch_page(&self, collection: Collection, keyword: &str) -> Result<Value> {
        self.calls
            .lock()
            .unwrap()
            .push((collection, keyword.to_string()));

        match self.replies.get(&collection) {
            Some(StubReply::Page(page)) => Ok(page.clone()),
            Some(StubReply::Status(status)) => Err(CatalogError::UpstreamStatusError {
                url: format!("stub://{}/", collection),
                status: *status,
            }),
            None => Err(CatalogError::UpstreamStatusError {
                url: format!("stub://{}/", collection),
                status: 404,
            }),
        }
    }
}

use crate::domain::model::{Collection, SearchPage};
use crate::domain::ports::CatalogLookup;
use crate::utils::error::{CatalogError, Result};
use serde::de::DeserializeOwned;

/// Searches `collection` for `keyword` and decodes the first page into `T` records.
pub async fn search<T>(
    lookup: &dyn CatalogLookup,
    collection: Collection,
    keyword: &str,
) -> Result<SearchPage<T>>
where
    T: DeserializeOwned,
{
    let raw = lookup.fetch_page(collection, keyword).await?;
    serde_json::from_value(raw).map_err(|source| CatalogError::DecodeError {
        url: lookup.request_url(collection, keyword),
        source,
    })
}

/// Like [`search`], but keeps the match only when it is the sole result.
pub async fn search_single<T>(
    lookup: &dyn CatalogLookup,
    collection: Collection,
    keyword: &str,
) -> Result<Option<T>>
where
    T: DeserializeOwned,
{
    let page = search::<T>(lookup, collection, keyword).await?;
    let count = page.len();
    let single = page.into_single();

    if single.is_none() {
        tracing::warn!(
            "⚠️ Search of {} for '{}' returned {} matches, expected exactly one",
            collection,
            keyword,
            count
        );
    }

    Ok(single)
}

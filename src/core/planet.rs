use crate::core::lookup::search_single;
use crate::domain::model::{Collection, PlanetRecord};
use crate::domain::ports::CatalogLookup;
use crate::utils::error::Result;
use std::sync::Arc;

pub struct PlanetResolver {
    lookup: Arc<dyn CatalogLookup>,
}

impl PlanetResolver {
    pub fn new(lookup: Arc<dyn CatalogLookup>) -> Self {
        Self { lookup }
    }

    /// Canonical URL of the planet called `name`.
    ///
    /// Returns an empty string when the search is empty or ambiguous, or when
    /// the single match carries no URL. Transport and decode failures propagate.
    pub async fn resolve_planet_reference(&self, name: &str) -> Result<String> {
        let planet =
            search_single::<PlanetRecord>(self.lookup.as_ref(), Collection::Planets, name).await?;

        let reference = planet.and_then(|p| p.url).unwrap_or_default();
        if reference.is_empty() {
            tracing::debug!("Planet '{}' is unresolved", name);
        } else {
            tracing::debug!("Planet '{}' resolved to {}", name, reference);
        }

        Ok(reference)
    }
}

use crate::core::lookup::search_single;
use crate::core::planet::PlanetResolver;
use crate::domain::model::{Collection, PersonRecord};
use crate::domain::ports::CatalogLookup;
use crate::utils::error::{CatalogError, Result};
use std::sync::Arc;

/// Decides whether a person's homeworld is a given planet.
pub struct PresenceChecker {
    lookup: Arc<dyn CatalogLookup>,
    planets: PlanetResolver,
}

impl PresenceChecker {
    pub fn new(lookup: Arc<dyn CatalogLookup>) -> Self {
        Self {
            planets: PlanetResolver::new(lookup.clone()),
            lookup,
        }
    }

    /// True iff both searches have exactly one match and the person's
    /// homeworld is byte-identical to the planet's URL.
    pub async fn is_present(&self, person_name: &str, planet_name: &str) -> Result<bool> {
        let planet_reference = self.planets.resolve_planet_reference(planet_name).await?;

        let person =
            search_single::<PersonRecord>(self.lookup.as_ref(), Collection::People, person_name)
                .await?;
        let Some(person) = person else {
            return Ok(false);
        };

        // 唯一相符的人物缺少 homeworld 屬於回應格式錯誤，整個請求失敗
        let homeworld = person.homeworld.ok_or_else(|| CatalogError::DecodeError {
            url: self.lookup.request_url(Collection::People, person_name),
            source: <serde_json::Error as serde::de::Error>::missing_field("homeworld"),
        })?;

        // 未解析的星球（空字串）不可能與任何 homeworld 相符
        if planet_reference.is_empty() {
            return Ok(false);
        }

        let present = homeworld == planet_reference;
        tracing::debug!(
            "{} on {}: {} (homeworld {})",
            person_name,
            planet_name,
            present,
            homeworld
        );

        Ok(present)
    }
}

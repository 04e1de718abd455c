use crate::core::lookup::search_single;
use crate::core::presence::PresenceChecker;
use crate::domain::model::{AggregateResult, Collection, ShipDetails, ShipRecord};
use crate::domain::ports::{CatalogLookup, Targets};
use crate::utils::error::{CatalogError, Result};
use std::sync::Arc;

/// Answers "how big is the target ship's crew, and is the target person on the target planet?"
///
/// The ship lookup and the presence check share no state. By default they run
/// one after the other (ship first); with concurrent lookups enabled they run
/// under `try_join!` and the first failure aborts the other branch.
///
/// An empty or ambiguous ship search degrades to "no ship". Any transport or
/// decode failure, on either path, fails the whole aggregation. The two paths
/// therefore differ in how they treat missing data versus broken upstreams.
pub struct InformationAggregator {
    lookup: Arc<dyn CatalogLookup>,
    presence: PresenceChecker,
    targets: Targets,
    concurrent_lookups: bool,
}

impl InformationAggregator {
    pub fn new(lookup: Arc<dyn CatalogLookup>, targets: Targets) -> Self {
        Self {
            presence: PresenceChecker::new(lookup.clone()),
            lookup,
            targets,
            concurrent_lookups: false,
        }
    }

    pub fn with_concurrent_lookups(mut self, enabled: bool) -> Self {
        self.concurrent_lookups = enabled;
        self
    }

    pub async fn ship_details(&self) -> Result<ShipDetails> {
        let ship = search_single::<ShipRecord>(
            self.lookup.as_ref(),
            Collection::Starships,
            &self.targets.starship,
        )
        .await?;

        Ok(match ship {
            Some(record) => ShipDetails::from(record),
            None => ShipDetails::absent(),
        })
    }

    async fn target_presence(&self) -> Result<bool> {
        self.presence
            .is_present(&self.targets.person, &self.targets.planet)
            .await
    }

    /// Runs one aggregation. Failures come back as [`CatalogError::AggregationError`].
    pub async fn get_information(&self) -> Result<AggregateResult> {
        tracing::info!(
            "🚀 Aggregating '{}' crew and presence of '{}' on '{}'",
            self.targets.starship,
            self.targets.person,
            self.targets.planet
        );

        let outcome = if self.concurrent_lookups {
            tokio::try_join!(self.ship_details(), self.target_presence())
        } else {
            async {
                let ship = self.ship_details().await?;
                let present = self.target_presence().await?;
                Ok::<_, CatalogError>((ship, present))
            }
            .await
        };

        let (ship, present) = outcome.map_err(CatalogError::into_aggregation)?;
        let result = AggregateResult::new(ship, present);

        tracing::info!(
            "✅ Aggregation complete: ship found = {}, crew = {}, present = {}",
            result.starship.is_some(),
            result.crew,
            result.is_target_present
        );

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::testing::StubCatalog;
    use crate::domain::model::Starship;
    use serde_json::json;

    const ALDERAAN: &str = "https://swapi.dev/api/planets/2/";

    fn present_catalog() -> StubCatalog {
        StubCatalog::new()
            .with_results(Collection::Planets, json!([{"url": ALDERAAN}]))
            .with_results(Collection::People, json!([{"homeworld": ALDERAAN}]))
    }

    #[tokio::test]
    async fn test_single_ship_and_presence_merge() {
        let stub = Arc::new(present_catalog().with_results(
            Collection::Starships,
            json!([{"name": "Death Star", "starship_class": "Star Destroyer", "model": "Model", "crew": "2"}]),
        ));
        let aggregator = InformationAggregator::new(stub.clone(), Targets::default());

        let result = aggregator.get_information().await.unwrap();

        assert_eq!(
            result.starship,
            Some(Starship {
                name: Some("Death Star".to_string()),
                class: Some("Star Destroyer".to_string()),
                model: Some("Model".to_string()),
            })
        );
        assert_eq!(result.crew, "2");
        assert!(result.is_target_present);
        assert_eq!(stub.calls()[0], (Collection::Starships, "Death Star".to_string()));
    }

    #[tokio::test]
    async fn test_missing_ship_is_not_an_error() {
        let stub = Arc::new(present_catalog().with_results(Collection::Starships, json!([])));

        let result = InformationAggregator::new(stub, Targets::default())
            .get_information()
            .await
            .unwrap();

        assert_eq!(result.starship, None);
        assert_eq!(result.crew, "0");
        assert!(result.is_target_present);
    }

    #[tokio::test]
    async fn test_ambiguous_ship_is_absent() {
        let stub = Arc::new(present_catalog().with_results(
            Collection::Starships,
            json!([{"name": "Death Star", "crew": "1"}, {"name": "Death Star II", "crew": "2"}]),
        ));

        let details = InformationAggregator::new(stub, Targets::default())
            .ship_details()
            .await
            .unwrap();

        assert_eq!(details, ShipDetails::absent());
    }

    #[tokio::test]
    async fn test_ship_without_crew_defaults_to_zero() {
        let stub = Arc::new(
            present_catalog().with_results(Collection::Starships, json!([{"name": "Death Star"}])),
        );

        let result = InformationAggregator::new(stub, Targets::default())
            .get_information()
            .await
            .unwrap();

        assert!(result.starship.is_some());
        assert_eq!(result.crew, "0");
    }

    #[tokio::test]
    async fn test_ship_failure_fails_aggregation_and_skips_presence() {
        let stub = Arc::new(present_catalog().with_status(Collection::Starships, 500));
        let aggregator = InformationAggregator::new(stub.clone(), Targets::default());

        let err = aggregator.get_information().await.unwrap_err();

        assert!(matches!(err, CatalogError::AggregationError(_)));
        assert!(err.is_transport());
        assert_eq!(stub.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_presence_failure_fails_aggregation() {
        let stub = Arc::new(
            StubCatalog::new()
                .with_results(Collection::Starships, json!([{"name": "Death Star", "crew": "2"}]))
                .with_page(Collection::Planets, json!({"results": 42})),
        );

        let err = InformationAggregator::new(stub, Targets::default())
            .get_information()
            .await
            .unwrap_err();

        assert!(matches!(
            err.root(),
            CatalogError::DecodeError { .. }
        ));
    }

    #[tokio::test]
    async fn test_concurrent_lookups_produce_same_result() {
        let stub = Arc::new(present_catalog().with_results(
            Collection::Starships,
            json!([{"name": "Death Star", "crew": "342,953"}]),
        ));

        let sequential = InformationAggregator::new(stub.clone(), Targets::default())
            .get_information()
            .await
            .unwrap();
        let concurrent = InformationAggregator::new(stub, Targets::default())
            .with_concurrent_lookups(true)
            .get_information()
            .await
            .unwrap();

        assert_eq!(sequential, concurrent);
    }

    #[tokio::test]
    async fn test_custom_targets_drive_keywords() {
        let stub = Arc::new(
            StubCatalog::new()
                .with_results(Collection::Starships, json!([]))
                .with_results(Collection::Planets, json!([]))
                .with_results(Collection::People, json!([])),
        );
        let targets = Targets {
            starship: "Millennium Falcon".to_string(),
            person: "Han Solo".to_string(),
            planet: "Corellia".to_string(),
        };

        InformationAggregator::new(stub.clone(), targets)
            .get_information()
            .await
            .unwrap();

        assert_eq!(
            stub.calls(),
            vec![
                (Collection::Starships, "Millennium Falcon".to_string()),
                (Collection::Planets, "Corellia".to_string()),
                (Collection::People, "Han Solo".to_string()),
            ]
        );
    }
}

pub mod aggregator;
pub mod lookup;
pub mod planet;
pub mod presence;

#[cfg(test)]
pub(crate) mod testing;

pub use crate::domain::model::{AggregateResult, InformationResponse, ShipDetails};
pub use crate::domain::ports::{CatalogLookup, ConfigProvider, Targets};
pub use crate::utils::error::Result;
pub use aggregator::InformationAggregator;
pub use planet::PlanetResolver;
pub use presence::PresenceChecker;

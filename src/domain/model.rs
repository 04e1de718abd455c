use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

pub const DEFAULT_CREW: &str = "0";

/// Catalog collections the service searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Starships,
    People,
    Planets,
}

impl Collection {
    pub fn path(&self) -> &'static str {
        match self {
            Collection::Starships => "starships",
            Collection::People => "people",
            Collection::Planets => "planets",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// First page of a keyword search. A missing or null `results` counts as no matches.
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct SearchPage<T> {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub results: Vec<T>,
}

impl<T> SearchPage<T> {
    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// The single match, or `None` when the search was empty or ambiguous.
    pub fn into_single(self) -> Option<T> {
        exactly_one(self.results)
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// 只有恰好一筆結果才算權威結果；零筆與多筆一律視為找不到
pub fn exactly_one<T>(matches: Vec<T>) -> Option<T> {
    if matches.len() != 1 {
        return None;
    }
    matches.into_iter().next()
}

/// Starship entry as the catalog returns it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ShipRecord {
    pub name: Option<String>,
    #[serde(rename = "starship_class")]
    pub class: Option<String>,
    pub model: Option<String>,
    pub crew: Option<String>,
}

impl ShipRecord {
    pub fn crew_count(&self) -> &str {
        self.crew.as_deref().unwrap_or(DEFAULT_CREW)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PersonRecord {
    pub homeworld: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PlanetRecord {
    pub url: Option<String>,
}

/// Starship as exposed to callers of the information endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Starship {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "class", skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

impl From<ShipRecord> for Starship {
    fn from(record: ShipRecord) -> Self {
        Self {
            name: record.name,
            class: record.class,
            model: record.model,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShipDetails {
    pub starship: Option<Starship>,
    pub crew: String,
}

impl ShipDetails {
    pub fn absent() -> Self {
        Self {
            starship: None,
            crew: DEFAULT_CREW.to_string(),
        }
    }
}

impl From<ShipRecord> for ShipDetails {
    fn from(record: ShipRecord) -> Self {
        let crew = record.crew_count().to_string();
        Self {
            starship: Some(record.into()),
            crew,
        }
    }
}

/// Merged answer of one aggregation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregateResult {
    pub starship: Option<Starship>,
    pub crew: String,
    pub is_target_present: bool,
}

impl AggregateResult {
    pub fn new(ship: ShipDetails, is_target_present: bool) -> Self {
        Self {
            starship: ship.starship,
            crew: ship.crew,
            is_target_present,
        }
    }
}

impl Default for AggregateResult {
    fn default() -> Self {
        Self::new(ShipDetails::absent(), false)
    }
}

/// Wire body of `GET /information`. `Default` is the failure envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InformationResponse {
    #[serde(serialize_with = "starship_or_empty_object")]
    pub starship: Option<Starship>,
    pub crew: String,
    #[serde(rename = "isLeiaOnPlanet")]
    pub is_leia_on_planet: String,
}

impl Default for InformationResponse {
    fn default() -> Self {
        AggregateResult::default().into()
    }
}

impl From<AggregateResult> for InformationResponse {
    fn from(result: AggregateResult) -> Self {
        Self {
            starship: result.starship,
            crew: result.crew,
            is_leia_on_planet: result.is_target_present.to_string(),
        }
    }
}

// 缺少星艦時輸出 {} 而非 null
fn starship_or_empty_object<S>(
    starship: &Option<Starship>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match starship {
        Some(starship) => starship.serialize(serializer),
        None => serializer.serialize_map(Some(0))?.end(),
    }
}

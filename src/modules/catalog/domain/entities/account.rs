use async_graphql::SimpleObject;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// The signed-in TMDB account
#[derive(Debug, Clone, Default, Deserialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
#[graphql(complex)]
pub struct Account {
    pub id: u64,
    #[serde(default)]
    pub username: String,
    pub name: Option<String>,
    #[serde(default)]
    pub include_adult: bool,
    #[serde(rename = "iso_639_1")]
    pub language: Option<String>,
    #[serde(rename = "iso_3166_1")]
    pub country: Option<String>,
}

/// Per-user flags for one movie or show
#[derive(Debug, Clone, Default, PartialEq, Deserialize, SimpleObject)]
pub struct AccountStates {
    pub id: u64,
    #[serde(default)]
    pub favorite: bool,
    #[serde(default)]
    pub watchlist: bool,
    /// The user's rating, if any
    #[serde(default, deserialize_with = "rating_value")]
    pub rated: Option<f64>,
}

// Upstream sends `false` when unrated and `{ "value": 7.5 }` otherwise
fn rating_value<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Object(map) => map.get("value").and_then(Value::as_f64),
        Value::Number(n) => n.as_f64(),
        _ => None,
    })
}

use async_graphql::{InputObject, SimpleObject};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::ListSortBy;
use crate::modules::catalog::domain::entities::Media;
use crate::shared::application::Page;
use crate::shared::domain::value_objects::MediaType;

/// A user-curated list. `items` is only present when the list came from
/// a list fetch; lists from the account listing carry the count alone.
#[derive(Debug, Clone, Default, Deserialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
#[graphql(name = "List", complex)]
pub struct TmdbList {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    pub description: Option<String>,
    #[serde(default, deserialize_with = "loose_bool")]
    pub public: Option<bool>,
    #[serde(rename = "iso_639_1")]
    pub language: Option<String>,
    #[serde(rename = "iso_3166_1")]
    pub country: Option<String>,
    pub average_rating: Option<f64>,
    pub backdrop_path: Option<String>,
    pub poster_path: Option<String>,
    pub revenue: Option<u64>,
    pub runtime: Option<u64>,
    #[serde(default)]
    pub number_of_items: u32,
    #[serde(default, deserialize_with = "sort_by_value")]
    pub sort_by: Option<ListSortBy>,

    #[graphql(skip)]
    pub items: Option<Page<Media>>,
}

// The list endpoint sends booleans, the account listing sends 0/1
fn loose_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Bool(b) => Some(b),
        Value::Number(n) => n.as_i64().map(|n| n != 0),
        _ => None,
    })
}

fn sort_by_value<'de, D>(deserializer: D) -> Result<Option<ListSortBy>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(raw) => ListSortBy::parse(&raw),
        _ => None,
    })
}

/// One movie or show to add to or remove from a list
#[derive(Debug, Clone, Copy, PartialEq, Eq, InputObject)]
pub struct ListItemInput {
    pub media_id: u64,
    pub media_type: MediaType,
}

#[derive(Debug, Clone, InputObject)]
pub struct CreateListInput {
    pub name: String,
    pub description: Option<String>,
    /// ISO 639-1 language code, `en` when omitted
    pub language: Option<String>,
    pub public: Option<bool>,
}

#[derive(Debug, Clone, Default, InputObject)]
pub struct UpdateListInput {
    pub name: Option<String>,
    pub description: Option<String>,
    pub public: Option<bool>,
    pub sort_by: Option<ListSortBy>,
}

/// Whether a movie or show is on a list
#[derive(Debug, Clone, PartialEq, SimpleObject)]
pub struct ListItemStatus {
    pub list_id: u64,
    pub media_id: u64,
    pub media_type: MediaType,
    pub on_list: bool,
}

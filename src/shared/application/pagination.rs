//! Pagination support for multi-item upstream responses
//!
//! Every list-returning data source method produces a [`Page`], no matter
//! which upstream endpoint the items came from.
use async_graphql::{OutputType, SimpleObject};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::modules::catalog::domain::entities::{
    Company, Media, Movie, Person, Review, SearchResult, Show,
};
use crate::modules::lists::domain::entities::TmdbList;
use crate::shared::errors::{AppError, AppResult};

/// Paginated result wrapper
#[derive(Debug, Clone, Deserialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
#[graphql(
    concrete(name = "MoviePage", params(Movie)),
    concrete(name = "ShowPage", params(Show)),
    concrete(name = "PersonPage", params(Person)),
    concrete(name = "CompanyPage", params(Company)),
    concrete(name = "MediaPage", params(Media)),
    concrete(name = "SearchResultPage", params(SearchResult)),
    concrete(name = "ReviewPage", params(Review)),
    concrete(name = "ListPage", params(TmdbList))
)]
pub struct Page<T: OutputType> {
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
    #[serde(default = "first_page")]
    pub page: u32,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_results: u32,
}

fn first_page() -> u32 {
    1
}

impl<T: OutputType> Default for Page<T> {
    fn default() -> Self {
        Self {
            results: Vec::new(),
            page: 1,
            total_pages: 0,
            total_results: 0,
        }
    }
}

/// Pagination metadata split off an upstream response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageMeta {
    pub page: u32,
    pub total_pages: u32,
    pub total_results: u32,
}

/// A decomposed `results` + metadata response. Keys that are neither the
/// results nor pagination metadata are kept in `rest`.
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope {
    pub results: Vec<Value>,
    pub meta: PageMeta,
    pub rest: Map<String, Value>,
}

impl Envelope {
    /// Split a camelCased upstream object into results, metadata and the remaining fields
    pub fn split(value: Value) -> AppResult<Self> {
        let mut object = match value {
            Value::Object(map) => map,
            other => {
                return Err(AppError::Serialization(format!(
                    "Expected a paginated object, got {}",
                    other
                )))
            }
        };

        let results = match object.remove("results") {
            Some(Value::Array(items)) => items,
            Some(Value::Null) | None => Vec::new(),
            Some(other) => {
                return Err(AppError::Serialization(format!(
                    "Expected `results` to be an array, got {}",
                    other
                )))
            }
        };

        let take_u32 = |object: &mut Map<String, Value>, key: &str| {
            object
                .remove(key)
                .and_then(|v| v.as_u64())
                .map(|n| u32::try_from(n).unwrap_or(u32::MAX))
        };

        let page = take_u32(&mut object, "page").unwrap_or(1);
        let total_results = take_u32(&mut object, "totalResults")
            .unwrap_or_else(|| u32::try_from(results.len()).unwrap_or(u32::MAX));
        let total_pages = take_u32(&mut object, "totalPages")
            .unwrap_or(if results.is_empty() { 0 } else { 1 });

        Ok(Self {
            results,
            meta: PageMeta {
                page,
                total_pages,
                total_results,
            },
            rest: object,
        })
    }

    /// Deserialize every result into `T`, preserving order and metadata
    pub fn into_page<T>(self) -> AppResult<Page<T>>
    where
        T: OutputType + DeserializeOwned,
    {
        let results = self
            .results
            .into_iter()
            .map(serde_json::from_value)
            .collect::<Result<Vec<T>, _>>()?;

        Ok(Page {
            results,
            page: self.meta.page,
            total_pages: self.meta.total_pages,
            total_results: self.meta.total_results,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::catalog::domain::entities::Genre;
    use serde_json::json;

    #[test]
    fn split_preserves_results_and_metadata() {
        let response = json!({
            "page": 3,
            "totalPages": 12,
            "totalResults": 231,
            "results": [{"id": 1}, {"id": 2}, {"id": 3}]
        });

        let envelope = Envelope::split(response).unwrap();
        assert_eq!(envelope.results.len(), 3);
        assert_eq!(envelope.results[0]["id"], 1);
        assert_eq!(envelope.results[2]["id"], 3);
        assert_eq!(
            envelope.meta,
            PageMeta {
                page: 3,
                total_pages: 12,
                total_results: 231
            }
        );
        assert!(envelope.rest.is_empty());
    }

    #[test]
    fn split_keeps_non_pagination_fields_aside() {
        let response = json!({
            "id": 42,
            "name": "Favourites",
            "page": 1,
            "totalPages": 1,
            "totalResults": 0,
            "results": []
        });

        let envelope = Envelope::split(response).unwrap();
        assert!(envelope.results.is_empty());
        assert_eq!(envelope.rest.get("name"), Some(&json!("Favourites")));
        assert_eq!(envelope.rest.get("id"), Some(&json!(42)));
    }

    #[test]
    fn missing_metadata_falls_back_to_result_count() {
        let envelope = Envelope::split(json!({"results": [{"id": 1}, {"id": 2}]})).unwrap();
        assert_eq!(envelope.meta.page, 1);
        assert_eq!(envelope.meta.total_pages, 1);
        assert_eq!(envelope.meta.total_results, 2);
    }

    #[test]
    fn into_page_deserializes_in_order() {
        let page: Page<Genre> = Envelope::split(json!({
            "page": 1,
            "totalPages": 1,
            "totalResults": 2,
            "results": [{"id": 28, "name": "Action"}, {"id": 12, "name": "Adventure"}]
        }))
        .unwrap()
        .into_page()
        .unwrap();

        let names: Vec<_> = page.results.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["Action", "Adventure"]);
        assert_eq!(page.total_results, 2);
    }

    #[test]
    fn oversized_counts_saturate() {
        let envelope = Envelope::split(json!({
            "page": 1,
            "totalPages": 5_000_000_000u64,
            "totalResults": 5_000_000_000u64,
            "results": []
        }))
        .unwrap();
        assert_eq!(envelope.meta.total_pages, u32::MAX);
        assert_eq!(envelope.meta.total_results, u32::MAX);
    }

    #[test]
    fn non_object_response_is_rejected() {
        assert!(Envelope::split(json!([1, 2, 3])).is_err());
    }
}

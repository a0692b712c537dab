use async_graphql::{Enum, InputObject};
use serde::Serialize;
use serde_json::Value;

use crate::shared::domain::value_objects::MediaType;
use crate::shared::errors::AppResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Enum)]
pub enum DiscoverSortBy {
    PopularityAsc,
    PopularityDesc,
    ReleaseDateAsc,
    ReleaseDateDesc,
    RevenueAsc,
    RevenueDesc,
    VoteAverageAsc,
    VoteAverageDesc,
    VoteCountAsc,
    VoteCountDesc,
}

impl DiscoverSortBy {
    /// Upstream `sort_by` value. Shows sort release dates by first air date.
    pub fn upstream_value(&self, media_type: MediaType) -> &'static str {
        let release = matches!(media_type, MediaType::Movie);
        match self {
            DiscoverSortBy::PopularityAsc => "popularity.asc",
            DiscoverSortBy::PopularityDesc => "popularity.desc",
            DiscoverSortBy::ReleaseDateAsc if release => "primary_release_date.asc",
            DiscoverSortBy::ReleaseDateDesc if release => "primary_release_date.desc",
            DiscoverSortBy::ReleaseDateAsc => "first_air_date.asc",
            DiscoverSortBy::ReleaseDateDesc => "first_air_date.desc",
            DiscoverSortBy::RevenueAsc => "revenue.asc",
            DiscoverSortBy::RevenueDesc => "revenue.desc",
            DiscoverSortBy::VoteAverageAsc => "vote_average.asc",
            DiscoverSortBy::VoteAverageDesc => "vote_average.desc",
            DiscoverSortBy::VoteCountAsc => "vote_count.asc",
            DiscoverSortBy::VoteCountDesc => "vote_count.desc",
        }
    }
}

/// Filters accepted by `/discover/movie` and `/discover/tv`.
///
/// Serializes to camelCase; dotted range keys (`primaryReleaseDate.gte`) are
/// snake_cased by the client like any other key.
#[derive(Debug, Clone, Default, Serialize, InputObject)]
#[serde(rename_all = "camelCase")]
pub struct DiscoverFilters {
    #[serde(skip)]
    pub sort_by: Option<DiscoverSortBy>,
    pub page: Option<u32>,
    pub language: Option<String>,
    pub region: Option<String>,
    pub include_adult: Option<bool>,
    pub with_genres: Option<Vec<u64>>,
    pub without_genres: Option<Vec<u64>>,
    pub with_cast: Option<Vec<u64>>,
    pub with_crew: Option<Vec<u64>>,
    pub with_people: Option<Vec<u64>>,
    pub with_companies: Option<Vec<u64>>,
    pub with_keywords: Option<Vec<u64>>,
    pub with_original_language: Option<String>,
    pub year: Option<i32>,
    pub primary_release_year: Option<i32>,
    pub first_air_date_year: Option<i32>,
    #[serde(rename = "primaryReleaseDate.gte")]
    pub primary_release_date_gte: Option<String>,
    #[serde(rename = "primaryReleaseDate.lte")]
    pub primary_release_date_lte: Option<String>,
    #[serde(rename = "firstAirDate.gte")]
    pub first_air_date_gte: Option<String>,
    #[serde(rename = "firstAirDate.lte")]
    pub first_air_date_lte: Option<String>,
    #[serde(rename = "voteAverage.gte")]
    pub vote_average_gte: Option<f64>,
    #[serde(rename = "voteAverage.lte")]
    pub vote_average_lte: Option<f64>,
    #[serde(rename = "voteCount.gte")]
    pub vote_count_gte: Option<u32>,
    #[serde(rename = "withRuntime.gte")]
    pub with_runtime_gte: Option<u32>,
    #[serde(rename = "withRuntime.lte")]
    pub with_runtime_lte: Option<u32>,
}

impl DiscoverFilters {
    /// camelCase query params for `media_type`; unset filters are null
    pub fn to_params(&self, media_type: MediaType) -> AppResult<Value> {
        let mut params = serde_json::to_value(self)?;
        if let Value::Object(map) = &mut params {
            if let Some(sort_by) = self.sort_by {
                map.insert(
                    "sortBy".to_string(),
                    Value::String(sort_by.upstream_value(media_type).to_string()),
                );
            }
            if self.page.is_none() {
                map.insert("page".to_string(), Value::from(1));
            }
        }
        Ok(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::utils::naming::snake_case_keys;

    #[test]
    fn range_filters_keep_their_dots() {
        let filters = DiscoverFilters {
            primary_release_date_gte: Some("2020-01-01".to_string()),
            vote_average_gte: Some(7.5),
            with_genres: Some(vec![28, 12]),
            sort_by: Some(DiscoverSortBy::ReleaseDateDesc),
            ..Default::default()
        };

        let params = snake_case_keys(filters.to_params(MediaType::Movie).unwrap());
        assert_eq!(params["primary_release_date.gte"], "2020-01-01");
        assert_eq!(params["vote_average.gte"], 7.5);
        assert_eq!(params["with_genres"], serde_json::json!([28, 12]));
        assert_eq!(params["sort_by"], "primary_release_date.desc");
        assert_eq!(params["page"], 1);
    }

    #[test]
    fn shows_sort_by_first_air_date() {
        assert_eq!(
            DiscoverSortBy::ReleaseDateAsc.upstream_value(MediaType::Tv),
            "first_air_date.asc"
        );
        assert_eq!(
            DiscoverSortBy::PopularityDesc.upstream_value(MediaType::Tv),
            "popularity.desc"
        );
    }
}

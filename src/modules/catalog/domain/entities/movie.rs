use async_graphql::SimpleObject;
use serde::Deserialize;

use super::{Credits, Genre, Images, Review, VideoList};
use crate::shared::application::Page;

/// A movie record. Sub-resources are `Some` only when the fetch that
/// produced the record bundled them.
#[derive(Debug, Clone, Default, Deserialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
#[graphql(complex)]
pub struct Movie {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    pub original_title: Option<String>,
    pub original_language: Option<String>,
    pub overview: Option<String>,
    pub release_date: Option<String>,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub popularity: Option<f64>,
    pub vote_average: Option<f64>,
    pub vote_count: Option<u32>,
    #[serde(default)]
    pub adult: bool,

    #[graphql(skip)]
    pub genre_ids: Option<Vec<u64>>,
    #[graphql(skip)]
    pub genres: Option<Vec<Genre>>,
    #[graphql(skip)]
    pub credits: Option<Credits>,
    #[graphql(skip)]
    pub images: Option<Images>,
    #[graphql(skip)]
    pub videos: Option<VideoList>,
    #[graphql(skip)]
    pub reviews: Option<Page<Review>>,

    // Detail-only scalars
    #[graphql(skip)]
    pub runtime: Option<u32>,
    #[graphql(skip)]
    pub budget: Option<u64>,
    #[graphql(skip)]
    pub revenue: Option<u64>,
    #[graphql(skip)]
    pub tagline: Option<String>,
    #[graphql(skip)]
    pub status: Option<String>,
    #[graphql(skip)]
    pub homepage: Option<String>,
    #[graphql(skip)]
    pub imdb_id: Option<String>,

    /// Set on records built from their own detail endpoint
    #[serde(skip)]
    #[graphql(skip)]
    pub detailed: bool,
}

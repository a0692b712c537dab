use async_graphql::SimpleObject;
use serde::Deserialize;

use super::{Credits, Genre, Images, Review, Season, VideoList};
use crate::shared::application::Page;

#[derive(Debug, Clone, Default, Deserialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
#[graphql(complex)]
pub struct Show {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    pub original_name: Option<String>,
    pub original_language: Option<String>,
    pub overview: Option<String>,
    pub first_air_date: Option<String>,
    pub last_air_date: Option<String>,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub origin_country: Vec<String>,
    pub popularity: Option<f64>,
    pub vote_average: Option<f64>,
    pub vote_count: Option<u32>,

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
    #[graphql(skip)]
    pub seasons: Option<Vec<Season>>,

    #[graphql(skip)]
    pub number_of_seasons: Option<u32>,
    #[graphql(skip)]
    pub number_of_episodes: Option<u32>,
    #[graphql(skip)]
    pub in_production: Option<bool>,
    #[graphql(skip)]
    pub tagline: Option<String>,
    #[graphql(skip)]
    pub status: Option<String>,
    #[graphql(skip)]
    pub homepage: Option<String>,

    /// Set on records built from their own detail endpoint
    #[serde(skip)]
    #[graphql(skip)]
    pub detailed: bool,
}

impl Show {
    /// Seasons with the owning show id filled in
    pub fn seasons_with_parent(&self) -> Option<Vec<Season>> {
        self.seasons.as_ref().map(|seasons| {
            seasons
                .iter()
                .cloned()
                .map(|season| season.with_show_id(self.id))
                .collect()
        })
    }
}

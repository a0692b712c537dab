use async_graphql::SimpleObject;
use serde::Deserialize;

use super::{Credits, Episode, Images, VideoList};

/// One season of a show. `show_id` is not part of the upstream body and is
/// filled in by whoever produced the record.
#[derive(Debug, Clone, Default, Deserialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
#[graphql(complex)]
pub struct Season {
    pub id: u64,
    #[serde(default)]
    pub show_id: u64,
    #[serde(default)]
    pub season_number: u32,
    #[serde(default)]
    pub name: String,
    pub overview: Option<String>,
    pub air_date: Option<String>,
    pub poster_path: Option<String>,
    pub episode_count: Option<u32>,
    pub vote_average: Option<f64>,

    #[graphql(skip)]
    pub episodes: Option<Vec<Episode>>,
    #[graphql(skip)]
    pub credits: Option<Credits>,
    #[graphql(skip)]
    pub images: Option<Images>,
    #[graphql(skip)]
    pub videos: Option<VideoList>,
}

impl Season {
    pub fn with_show_id(mut self, show_id: u64) -> Self {
        self.show_id = show_id;
        if let Some(episodes) = self.episodes.as_mut() {
            for episode in episodes {
                episode.show_id = show_id;
                episode.season_number = self.season_number;
            }
        }
        self
    }
}

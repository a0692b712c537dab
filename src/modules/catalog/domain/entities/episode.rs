use async_graphql::SimpleObject;
use serde::Deserialize;

use super::{Credits, Images, VideoList};

#[derive(Debug, Clone, Default, Deserialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
#[graphql(complex)]
pub struct Episode {
    pub id: u64,
    #[serde(default)]
    pub show_id: u64,
    #[serde(default)]
    pub season_number: u32,
    #[serde(default)]
    pub episode_number: u32,
    #[serde(default)]
    pub name: String,
    pub overview: Option<String>,
    pub air_date: Option<String>,
    pub still_path: Option<String>,
    pub runtime: Option<u32>,
    pub vote_average: Option<f64>,
    pub vote_count: Option<u32>,

    #[graphql(skip)]
    pub credits: Option<Credits>,
    #[graphql(skip)]
    pub images: Option<Images>,
    #[graphql(skip)]
    pub videos: Option<VideoList>,
}

//! Sub-resources attached to media records by `append_to_response`

use async_graphql::SimpleObject;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    #[serde(default)]
    pub file_path: String,
    pub aspect_ratio: Option<f64>,
    pub height: Option<u32>,
    pub width: Option<u32>,
    pub vote_average: Option<f64>,
    pub vote_count: Option<u32>,
    #[serde(rename = "iso_639_1")]
    pub language: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Images {
    #[serde(default)]
    pub backdrops: Vec<Image>,
    #[serde(default)]
    pub posters: Vec<Image>,
    #[serde(default)]
    pub logos: Vec<Image>,
    #[serde(default)]
    pub profiles: Vec<Image>,
    #[serde(default)]
    pub stills: Vec<Image>,
}

#[derive(Debug, Clone, Default, Deserialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub id: String,
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub site: String,
    pub size: Option<u32>,
    #[serde(rename = "type", default)]
    #[graphql(name = "type")]
    pub video_type: String,
    pub official: Option<bool>,
    pub published_at: Option<String>,
    #[serde(rename = "iso_639_1")]
    pub language: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct VideoList {
    #[serde(default)]
    pub results: Vec<Video>,
}

#[derive(Debug, Clone, Default, Deserialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub content: String,
    pub url: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

use async_graphql::SimpleObject;
use serde::Deserialize;

use super::{Credits, Images, Media};

/// A person. `known_for` only arrives on search results; the detail
/// endpoint never includes it.
#[derive(Debug, Clone, Default, Deserialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
#[graphql(complex)]
pub struct Person {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    pub profile_path: Option<String>,
    pub gender: Option<u8>,
    pub popularity: Option<f64>,
    #[serde(default)]
    pub adult: bool,

    #[graphql(skip)]
    pub known_for: Option<Vec<Media>>,
    #[graphql(skip)]
    pub combined_credits: Option<Credits>,
    #[graphql(skip)]
    pub images: Option<Images>,

    // Detail-only fields
    #[graphql(skip)]
    pub known_for_department: Option<String>,
    #[graphql(skip)]
    pub biography: Option<String>,
    #[graphql(skip)]
    pub birthday: Option<String>,
    #[graphql(skip)]
    pub deathday: Option<String>,
    #[graphql(skip)]
    pub place_of_birth: Option<String>,
    #[graphql(skip)]
    pub homepage: Option<String>,
    #[graphql(skip)]
    pub imdb_id: Option<String>,
    #[graphql(skip)]
    pub also_known_as: Option<Vec<String>>,

    /// Set on records built from their own detail endpoint
    #[serde(skip)]
    #[graphql(skip)]
    pub detailed: bool,
}

use async_graphql::SimpleObject;
use serde::Deserialize;

/// Body of `/configuration`
#[derive(Debug, Clone, Default, Deserialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
    #[serde(default)]
    pub images: ImageConfiguration,
    #[serde(default)]
    pub change_keys: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
pub struct ImageConfiguration {
    /// Always the HTTPS base
    #[serde(rename = "secureBaseUrl", default)]
    pub base_url: String,
    #[serde(default)]
    pub backdrop_sizes: Vec<String>,
    #[serde(default)]
    pub logo_sizes: Vec<String>,
    #[serde(default)]
    pub poster_sizes: Vec<String>,
    #[serde(default)]
    pub profile_sizes: Vec<String>,
    #[serde(default)]
    pub still_sizes: Vec<String>,
}

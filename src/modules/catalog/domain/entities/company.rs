use async_graphql::SimpleObject;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    pub logo_path: Option<String>,
    pub origin_country: Option<String>,
    pub description: Option<String>,
    pub headquarters: Option<String>,
    pub homepage: Option<String>,
}

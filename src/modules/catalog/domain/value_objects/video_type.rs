use async_graphql::Enum;

use super::fold_label;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Enum)]
pub enum VideoType {
    Trailer,
    Teaser,
    Clip,
    Featurette,
    BehindTheScenes,
    Bloopers,
    OpeningCredits,
}

impl VideoType {
    pub fn upstream_name(&self) -> &'static str {
        match self {
            VideoType::Trailer => "Trailer",
            VideoType::Teaser => "Teaser",
            VideoType::Clip => "Clip",
            VideoType::Featurette => "Featurette",
            VideoType::BehindTheScenes => "Behind the Scenes",
            VideoType::Bloopers => "Bloopers",
            VideoType::OpeningCredits => "Opening Credits",
        }
    }

    pub fn matches(&self, raw: &str) -> bool {
        fold_label(self.upstream_name()) == fold_label(raw)
    }
}

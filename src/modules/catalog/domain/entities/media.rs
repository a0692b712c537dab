use async_graphql::Union;
use serde::Deserialize;
use serde_json::Value;
use std::fmt;

use super::{Company, Credits, Episode, Images, Movie, Person, Season, Show, VideoList};
use crate::shared::domain::value_objects::MediaType;
use crate::shared::errors::{AppError, AppResult};

fn media_type_tag(value: &Value) -> Option<String> {
    value
        .get("mediaType")
        .and_then(Value::as_str)
        .map(|tag| tag.trim().to_ascii_lowercase())
}

/// A movie or a show, discriminated by `mediaType`
#[derive(Debug, Clone, Deserialize, Union)]
#[serde(try_from = "Value")]
pub enum Media {
    Movie(Movie),
    Show(Show),
}

impl TryFrom<Value> for Media {
    type Error = AppError;

    fn try_from(value: Value) -> AppResult<Self> {
        let tag = media_type_tag(&value);
        match tag.as_deref().and_then(MediaType::parse) {
            Some(MediaType::Movie) => Ok(Media::Movie(serde_json::from_value(value)?)),
            Some(MediaType::Tv) => Ok(Media::Show(serde_json::from_value(value)?)),
            None => Err(AppError::Serialization(format!(
                "unknown media type {:?}",
                tag
            ))),
        }
    }
}

/// Any search hit, discriminated by `mediaType`
#[derive(Debug, Clone, Deserialize, Union)]
#[serde(try_from = "Value")]
pub enum SearchResult {
    Movie(Movie),
    Show(Show),
    Person(Person),
    Company(Company),
}

impl TryFrom<Value> for SearchResult {
    type Error = AppError;

    fn try_from(value: Value) -> AppResult<Self> {
        match media_type_tag(&value).as_deref() {
            Some("movie") => Ok(SearchResult::Movie(serde_json::from_value(value)?)),
            Some("tv") | Some("show") => Ok(SearchResult::Show(serde_json::from_value(value)?)),
            Some("person") => Ok(SearchResult::Person(serde_json::from_value(value)?)),
            Some("company") => Ok(SearchResult::Company(serde_json::from_value(value)?)),
            other => Err(AppError::Serialization(format!(
                "unknown search result type {:?}",
                other
            ))),
        }
    }
}

/// Identity of one detail fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKey {
    Movie(u64),
    Show(u64),
    Season {
        show_id: u64,
        season_number: u32,
    },
    Episode {
        show_id: u64,
        season_number: u32,
        episode_number: u32,
    },
}

impl ItemKey {
    pub fn path(&self) -> String {
        match self {
            ItemKey::Movie(id) => format!("/movie/{}", id),
            ItemKey::Show(id) => format!("/tv/{}", id),
            ItemKey::Season {
                show_id,
                season_number,
            } => format!("/tv/{}/season/{}", show_id, season_number),
            ItemKey::Episode {
                show_id,
                season_number,
                episode_number,
            } => format!(
                "/tv/{}/season/{}/episode/{}",
                show_id, season_number, episode_number
            ),
        }
    }

    /// Sub-resources bundled into the detail call
    pub fn append_to_response(&self) -> &'static str {
        match self {
            ItemKey::Movie(_) => "credits,images,videos,reviews",
            ItemKey::Show(_) => "credits,images,videos,reviews,seasons",
            ItemKey::Season { .. } | ItemKey::Episode { .. } => "credits,images,videos",
        }
    }
}

impl fmt::Display for ItemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Result of a detail fetch
#[derive(Debug, Clone)]
pub enum MediaItem {
    Movie(Movie),
    Show(Show),
    Season(Season),
    Episode(Episode),
}

impl MediaItem {
    pub fn into_credits(self) -> Option<Credits> {
        match self {
            MediaItem::Movie(item) => item.credits,
            MediaItem::Show(item) => item.credits,
            MediaItem::Season(item) => item.credits,
            MediaItem::Episode(item) => item.credits,
        }
    }

    pub fn into_images(self) -> Option<Images> {
        match self {
            MediaItem::Movie(item) => item.images,
            MediaItem::Show(item) => item.images,
            MediaItem::Season(item) => item.images,
            MediaItem::Episode(item) => item.images,
        }
    }

    pub fn into_videos(self) -> Option<VideoList> {
        match self {
            MediaItem::Movie(item) => item.videos,
            MediaItem::Show(item) => item.videos,
            MediaItem::Season(item) => item.videos,
            MediaItem::Episode(item) => item.videos,
        }
    }
}

/// Shared shape of movies, shows, seasons and episodes
pub trait MediaRecord: Send + Sync {
    fn item_key(&self) -> ItemKey;
    fn credits(&self) -> Option<&Credits>;
    fn images(&self) -> Option<&Images>;
    fn videos(&self) -> Option<&VideoList>;
}

macro_rules! impl_media_record {
    ($ty:ty, |$this:ident| $key:expr) => {
        impl MediaRecord for $ty {
            fn item_key(&self) -> ItemKey {
                let $this = self;
                $key
            }

            fn credits(&self) -> Option<&Credits> {
                self.credits.as_ref()
            }

            fn images(&self) -> Option<&Images> {
                self.images.as_ref()
            }

            fn videos(&self) -> Option<&VideoList> {
                self.videos.as_ref()
            }
        }
    };
}

impl_media_record!(Movie, |movie| ItemKey::Movie(movie.id));
impl_media_record!(Show, |show| ItemKey::Show(show.id));
impl_media_record!(Season, |season| ItemKey::Season {
    show_id: season.show_id,
    season_number: season.season_number,
});
impl_media_record!(Episode, |episode| ItemKey::Episode {
    show_id: episode.show_id,
    season_number: episode.season_number,
    episode_number: episode.episode_number,
});

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn multi_search_hits_resolve_by_media_type() {
        let hits: Vec<SearchResult> = serde_json::from_value(json!([
            {"id": 348, "mediaType": "movie", "title": "Alien"},
            {"id": 1399, "mediaType": "tv", "name": "Game of Thrones"},
            {"id": 10205, "mediaType": "person", "name": "Sigourney Weaver"},
            {"id": 1, "mediaType": "company", "name": "Lucasfilm"}
        ]))
        .unwrap();

        assert!(matches!(hits[0], SearchResult::Movie(_)));
        assert!(matches!(hits[1], SearchResult::Show(_)));
        assert!(matches!(hits[2], SearchResult::Person(_)));
        assert!(matches!(hits[3], SearchResult::Company(_)));
    }

    #[test]
    fn untagged_media_is_rejected() {
        assert!(Media::try_from(json!({"id": 1, "title": "Untagged"})).is_err());
        assert!(SearchResult::try_from(json!({"id": 1, "mediaType": "keyword"})).is_err());
    }

    #[test]
    fn detail_paths_and_bundles() {
        let episode = ItemKey::Episode {
            show_id: 1399,
            season_number: 1,
            episode_number: 2,
        };
        assert_eq!(episode.path(), "/tv/1399/season/1/episode/2");
        assert_eq!(episode.append_to_response(), "credits,images,videos");
        assert_eq!(
            ItemKey::Show(1399).append_to_response(),
            "credits,images,videos,reviews,seasons"
        );
        assert_eq!(
            ItemKey::Movie(348).append_to_response(),
            "credits,images,videos,reviews"
        );
    }
}

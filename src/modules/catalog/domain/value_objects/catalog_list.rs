use async_graphql::Enum;

use crate::shared::domain::value_objects::MediaType;

/// Curated `/movie/{list}` endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Enum)]
pub enum MovieListType {
    NowPlaying,
    Upcoming,
    Popular,
    TopRated,
}

impl MovieListType {
    pub fn as_path(&self) -> &'static str {
        match self {
            MovieListType::NowPlaying => "now_playing",
            MovieListType::Upcoming => "upcoming",
            MovieListType::Popular => "popular",
            MovieListType::TopRated => "top_rated",
        }
    }
}

/// Curated `/tv/{list}` endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Enum)]
pub enum ShowListType {
    OnTheAir,
    AiringToday,
    Popular,
    TopRated,
}

impl ShowListType {
    pub fn as_path(&self) -> &'static str {
        match self {
            ShowListType::OnTheAir => "on_the_air",
            ShowListType::AiringToday => "airing_today",
            ShowListType::Popular => "popular",
            ShowListType::TopRated => "top_rated",
        }
    }
}

/// `/search/{type}` endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Enum)]
pub enum SearchType {
    Movie,
    Tv,
    Person,
    Company,
    Multi,
}

impl SearchType {
    pub fn as_path(&self) -> &'static str {
        match self {
            SearchType::Movie => "movie",
            SearchType::Tv => "tv",
            SearchType::Person => "person",
            SearchType::Company => "company",
            SearchType::Multi => "multi",
        }
    }

    /// Discriminator to stamp on each result; `None` when the endpoint
    /// already returns one
    pub fn result_tag(&self) -> Option<&'static str> {
        match self {
            SearchType::Multi => None,
            other => Some(other.as_path()),
        }
    }
}

impl From<MediaType> for SearchType {
    fn from(media_type: MediaType) -> Self {
        match media_type {
            MediaType::Movie => SearchType::Movie,
            MediaType::Tv => SearchType::Tv,
        }
    }
}

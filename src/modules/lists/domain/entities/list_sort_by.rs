use async_graphql::Enum;
use regex::Regex;
use std::sync::OnceLock;

static SORT_PATTERN: OnceLock<Option<Regex>> = OnceLock::new();

/// Item order of a v4 list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Enum)]
pub enum ListSortBy {
    OriginalOrderAsc,
    OriginalOrderDesc,
    VoteAverageAsc,
    VoteAverageDesc,
    PrimaryReleaseDateAsc,
    PrimaryReleaseDateDesc,
    TitleAsc,
    TitleDesc,
}

impl ListSortBy {
    pub fn upstream_value(&self) -> &'static str {
        match self {
            ListSortBy::OriginalOrderAsc => "original_order.asc",
            ListSortBy::OriginalOrderDesc => "original_order.desc",
            ListSortBy::VoteAverageAsc => "vote_average.asc",
            ListSortBy::VoteAverageDesc => "vote_average.desc",
            ListSortBy::PrimaryReleaseDateAsc => "primary_release_date.asc",
            ListSortBy::PrimaryReleaseDateDesc => "primary_release_date.desc",
            ListSortBy::TitleAsc => "title.asc",
            ListSortBy::TitleDesc => "title.desc",
        }
    }

    /// Parse an upstream `field.direction` value
    pub fn parse(raw: &str) -> Option<Self> {
        let pattern = SORT_PATTERN
            .get_or_init(|| Regex::new(r"^(\w+)\.([a-z]+)$").ok())
            .as_ref()?;
        let captures = pattern.captures(raw.trim())?;
        let ascending = match &captures[2] {
            "asc" => true,
            "desc" => false,
            _ => return None,
        };

        let sort_by = match (&captures[1], ascending) {
            ("original_order", true) => ListSortBy::OriginalOrderAsc,
            ("original_order", false) => ListSortBy::OriginalOrderDesc,
            ("vote_average", true) => ListSortBy::VoteAverageAsc,
            ("vote_average", false) => ListSortBy::VoteAverageDesc,
            ("primary_release_date" | "release_date", true) => ListSortBy::PrimaryReleaseDateAsc,
            ("primary_release_date" | "release_date", false) => ListSortBy::PrimaryReleaseDateDesc,
            ("title", true) => ListSortBy::TitleAsc,
            ("title", false) => ListSortBy::TitleDesc,
            _ => return None,
        };
        Some(sort_by)
    }
}

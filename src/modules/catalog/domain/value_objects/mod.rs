mod catalog_list;
mod department;
mod discover_filters;
mod video_type;

pub use catalog_list::{MovieListType, SearchType, ShowListType};
pub use department::Department;
pub use discover_filters::{DiscoverFilters, DiscoverSortBy};
pub use video_type::VideoType;

/// Case and punctuation insensitive form of an upstream label
/// (`"Behind the Scenes"` and `BehindTheScenes` fold to the same string)
fn fold_label(label: &str) -> String {
    label
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

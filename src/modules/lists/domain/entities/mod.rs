mod list_sort_by;
mod tmdb_list;

pub use list_sort_by::ListSortBy;
pub use tmdb_list::{CreateListInput, ListItemInput, ListItemStatus, TmdbList, UpdateListInput};

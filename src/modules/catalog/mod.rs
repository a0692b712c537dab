pub mod domain;
pub mod infrastructure;

pub use domain::entities::{Media, Movie, Person, SearchResult, Show};
pub use infrastructure::CatalogSource;

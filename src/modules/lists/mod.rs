pub mod domain;
pub mod infrastructure;

pub use domain::entities::TmdbList;
pub use infrastructure::ListSource;

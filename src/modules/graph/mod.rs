//! GraphQL schema over the catalog and list data sources
pub mod context;
pub mod http;
pub mod mutation;
pub mod mutation_response;
pub mod query;
mod resolvers;
pub mod schema;

pub use context::{DataSources, Upstream};
pub use http::{router, serve, AppState};
pub use mutation_response::MutationResponse;
pub use schema::{build_schema, AppSchema};

use async_graphql::{EmptySubscription, Schema};

use super::mutation::MutationRoot;
use super::query::QueryRoot;

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// The schema carries no data of its own; every request supplies its
/// `DataSources`.
pub fn build_schema() -> AppSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription).finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sdl_exposes_roots_and_discriminated_types() {
        let sdl = build_schema().sdl();
        assert!(sdl.contains("union SearchResult"));
        assert!(sdl.contains("union Credit"));
        assert!(sdl.contains("interface MutationResponse"));
        assert!(sdl.contains("type List "));
        assert!(sdl.contains("addListItems"));
    }

    #[tokio::test]
    async fn missing_data_sources_is_a_field_error() {
        let response = build_schema().execute("{ movie(id: 1) { title } }").await;
        assert_eq!(response.errors.len(), 1);
    }
}

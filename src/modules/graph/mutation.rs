use async_graphql::{Context, Object, Result};

use super::context::sources;
use super::mutation_response::MutationResponse;
use crate::modules::lists::domain::entities::{CreateListInput, ListItemInput, UpdateListInput};
use crate::shared::domain::value_objects::MediaType;

/// User-scoped writes. Upstream failures come back as `success: false`;
/// only a misconfigured request context is a GraphQL error.
pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn add_to_watchlist(
        &self,
        ctx: &Context<'_>,
        media_type: MediaType,
        media_id: u64,
        #[graphql(default = true)] watchlist: bool,
    ) -> Result<MutationResponse> {
        let outcome = sources(ctx)?
            .catalog
            .add_to_watchlist(media_type, media_id, watchlist)
            .await;
        Ok(outcome.into())
    }

    async fn add_to_favorites(
        &self,
        ctx: &Context<'_>,
        media_type: MediaType,
        media_id: u64,
        #[graphql(default = true)] favorite: bool,
    ) -> Result<MutationResponse> {
        let outcome = sources(ctx)?
            .catalog
            .add_to_favorites(media_type, media_id, favorite)
            .await;
        Ok(outcome.into())
    }

    /// Rate a movie or show; omit `value` to remove the rating
    async fn update_rating(
        &self,
        ctx: &Context<'_>,
        media_type: MediaType,
        media_id: u64,
        value: Option<f64>,
    ) -> Result<MutationResponse> {
        let outcome = sources(ctx)?
            .catalog
            .update_rating(media_type, media_id, value)
            .await;
        Ok(outcome.into())
    }

    async fn create_list(
        &self,
        ctx: &Context<'_>,
        input: CreateListInput,
    ) -> Result<MutationResponse> {
        Ok(sources(ctx)?.lists.create_list(input).await.into())
    }

    async fn update_list(
        &self,
        ctx: &Context<'_>,
        id: u64,
        input: UpdateListInput,
    ) -> Result<MutationResponse> {
        Ok(sources(ctx)?.lists.update_list(id, input).await.into())
    }

    async fn delete_list(&self, ctx: &Context<'_>, id: u64) -> Result<MutationResponse> {
        Ok(sources(ctx)?.lists.delete_list(id).await.into())
    }

    async fn clear_list(&self, ctx: &Context<'_>, id: u64) -> Result<MutationResponse> {
        Ok(sources(ctx)?.lists.clear_list(id).await.into())
    }

    async fn add_list_items(
        &self,
        ctx: &Context<'_>,
        id: u64,
        items: Vec<ListItemInput>,
    ) -> Result<MutationResponse> {
        Ok(sources(ctx)?.lists.add_list_items(id, &items).await.into())
    }

    async fn remove_list_items(
        &self,
        ctx: &Context<'_>,
        id: u64,
        items: Vec<ListItemInput>,
    ) -> Result<MutationResponse> {
        Ok(sources(ctx)?.lists.remove_list_items(id, &items).await.into())
    }
}

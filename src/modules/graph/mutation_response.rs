use async_graphql::{Context, Interface, Object, Result, ResultExt};

use crate::modules::graph::context::sources;
use crate::modules::lists::domain::entities::TmdbList;
use crate::shared::application::{ListItemResult, MutationOutcome};

/// Result of a user-scoped write. Failures are reported here rather than as
/// GraphQL errors.
#[derive(Interface)]
#[graphql(
    field(name = "success", ty = "bool"),
    field(name = "message", ty = "Option<String>")
)]
pub enum MutationResponse {
    Status(StatusMutationResponse),
    List(ListMutationResponse),
    ListItems(ListItemsMutationResponse),
}

pub struct StatusMutationResponse {
    success: bool,
    message: Option<String>,
}

#[Object]
impl StatusMutationResponse {
    async fn success(&self) -> bool {
        self.success
    }

    async fn message(&self) -> Option<String> {
        self.message.clone()
    }
}

/// Write against a single list
pub struct ListMutationResponse {
    success: bool,
    message: Option<String>,
    id: u64,
}

#[Object]
impl ListMutationResponse {
    async fn success(&self) -> bool {
        self.success
    }

    async fn message(&self) -> Option<String> {
        self.message.clone()
    }

    async fn id(&self) -> u64 {
        self.id
    }

    /// The list as it is after the write
    async fn list(&self, ctx: &Context<'_>, page: Option<u32>) -> Result<TmdbList> {
        fetch_list(ctx, self.id, page).await
    }
}

/// Multi-item list write with one result per item
pub struct ListItemsMutationResponse {
    success: bool,
    message: Option<String>,
    id: u64,
    results: Vec<ListItemResult>,
}

#[Object]
impl ListItemsMutationResponse {
    async fn success(&self) -> bool {
        self.success
    }

    async fn message(&self) -> Option<String> {
        self.message.clone()
    }

    async fn id(&self) -> u64 {
        self.id
    }

    async fn results(&self) -> Vec<ListItemResult> {
        self.results.clone()
    }

    async fn list(&self, ctx: &Context<'_>, page: Option<u32>) -> Result<TmdbList> {
        fetch_list(ctx, self.id, page).await
    }
}

async fn fetch_list(ctx: &Context<'_>, id: u64, page: Option<u32>) -> Result<TmdbList> {
    sources(ctx)?.lists.get_list(id, page, None).await.extend()
}

impl From<MutationOutcome> for MutationResponse {
    fn from(outcome: MutationOutcome) -> Self {
        let MutationOutcome {
            success,
            message,
            id,
            results,
        } = outcome;

        match (id.and_then(|id| id.parse::<u64>().ok()), results) {
            (Some(id), Some(results)) => MutationResponse::ListItems(ListItemsMutationResponse {
                success,
                message,
                id,
                results,
            }),
            (Some(id), None) => MutationResponse::List(ListMutationResponse {
                success,
                message,
                id,
            }),
            (None, _) => MutationResponse::Status(StatusMutationResponse { success, message }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::domain::value_objects::MediaType;

    #[test]
    fn outcome_shape_selects_the_response_type() {
        let items = MutationOutcome::success(None)
            .with_id("8213")
            .with_results(vec![ListItemResult {
                media_id: 550,
                media_type: MediaType::Movie,
                success: true,
            }]);
        assert!(matches!(
            MutationResponse::from(items),
            MutationResponse::ListItems(ListItemsMutationResponse { id: 8213, .. })
        ));

        let list = MutationOutcome::success(None).with_id("8213");
        assert!(matches!(
            MutationResponse::from(list),
            MutationResponse::List(ListMutationResponse { id: 8213, .. })
        ));

        let status = MutationOutcome::failure("Authentication failed");
        assert!(matches!(
            MutationResponse::from(status),
            MutationResponse::Status(StatusMutationResponse { success: false, .. })
        ));
    }
}

use async_graphql::{ComplexObject, Context, Result, ResultExt};

use crate::modules::catalog::domain::entities::{Account, Media};
use crate::modules::graph::context::sources;
use crate::modules::lists::domain::entities::{ListSortBy, TmdbList};
use crate::shared::application::Page;
use crate::shared::domain::value_objects::MediaType;

#[ComplexObject]
impl Account {
    async fn watchlist(
        &self,
        ctx: &Context<'_>,
        media_type: MediaType,
        page: Option<u32>,
    ) -> Result<Page<Media>> {
        sources(ctx)?.catalog.watchlist(media_type, page).await.extend()
    }

    async fn favorites(
        &self,
        ctx: &Context<'_>,
        media_type: MediaType,
        page: Option<u32>,
    ) -> Result<Page<Media>> {
        sources(ctx)?.catalog.favorites(media_type, page).await.extend()
    }

    async fn lists(&self, ctx: &Context<'_>, page: Option<u32>) -> Result<Page<TmdbList>> {
        sources(ctx)?.lists.get_my_lists(page).await.extend()
    }
}

#[ComplexObject]
impl TmdbList {
    /// Items of the list. Lists from `myLists` carry no items and are fetched here.
    async fn items(
        &self,
        ctx: &Context<'_>,
        page: Option<u32>,
        sort_by: Option<ListSortBy>,
    ) -> Result<Page<Media>> {
        if let Some(items) = &self.items {
            if sort_by.is_none() && page.map_or(true, |page| page == items.page) {
                return Ok(items.clone());
            }
        }
        let list = sources(ctx)?
            .lists
            .get_list(self.id, page, sort_by)
            .await
            .extend()?;
        Ok(list.items.unwrap_or_default())
    }
}

use async_graphql::{Context, Object, Result, ResultExt};

use super::context::sources;
use crate::modules::catalog::domain::entities::{
    Account, Company, Configuration, Episode, Genre, Movie, Person, SearchResult, Season, Show,
};
use crate::modules::catalog::domain::value_objects::{
    DiscoverFilters, MovieListType, SearchType, ShowListType,
};
use crate::modules::lists::domain::entities::{ListItemStatus, ListSortBy, TmdbList};
use crate::shared::application::Page;
use crate::shared::domain::value_objects::MediaType;
use crate::shared::errors::AppError;

/// Every root field is nullable; a failed read nulls only that field.
pub struct QueryRoot;

/// At most one way of selecting a page of movies or shows
fn single_source(query: &Option<String>, list: bool, discover: bool) -> Result<()> {
    let selected = [query.is_some(), list, discover]
        .iter()
        .filter(|selected| **selected)
        .count();
    if selected > 1 {
        return Err(AppError::InvalidInput(
            "pass only one of `query`, `list` or `discover`".to_string(),
        ))
        .extend();
    }
    Ok(())
}

#[Object]
impl QueryRoot {
    async fn movie(&self, ctx: &Context<'_>, id: u64) -> Result<Option<Movie>> {
        sources(ctx)?.catalog.get_movie(id).await.map(Some).extend()
    }

    async fn show(&self, ctx: &Context<'_>, id: u64) -> Result<Option<Show>> {
        sources(ctx)?.catalog.get_show(id).await.map(Some).extend()
    }

    async fn season(
        &self,
        ctx: &Context<'_>,
        show_id: u64,
        season_number: u32,
    ) -> Result<Option<Season>> {
        sources(ctx)?
            .catalog
            .get_season(show_id, season_number)
            .await
            .map(Some)
            .extend()
    }

    async fn episode(
        &self,
        ctx: &Context<'_>,
        show_id: u64,
        season_number: u32,
        episode_number: u32,
    ) -> Result<Option<Episode>> {
        sources(ctx)?
            .catalog
            .get_episode(show_id, season_number, episode_number)
            .await
            .map(Some)
            .extend()
    }

    async fn person(&self, ctx: &Context<'_>, id: u64) -> Result<Option<Person>> {
        sources(ctx)?.catalog.get_person(id).await.map(Some).extend()
    }

    async fn people(
        &self,
        ctx: &Context<'_>,
        query: String,
        page: Option<u32>,
    ) -> Result<Option<Page<Person>>> {
        sources(ctx)?
            .catalog
            .search(SearchType::Person, &query, page)
            .await
            .map(Some)
            .extend()
    }

    /// Movies by text search, curated list or discover filters.
    /// Without any of them this is a default discover.
    async fn movies(
        &self,
        ctx: &Context<'_>,
        query: Option<String>,
        list: Option<MovieListType>,
        discover: Option<DiscoverFilters>,
        page: Option<u32>,
    ) -> Result<Option<Page<Movie>>> {
        single_source(&query, list.is_some(), discover.is_some())?;
        let catalog = &sources(ctx)?.catalog;
        let result = match (query, list) {
            (Some(query), _) => catalog.search(SearchType::Movie, &query, page).await,
            (None, Some(list)) => catalog.movie_list(list, page).await,
            (None, None) => {
                let filters = DiscoverFilters {
                    page: page.or(discover.as_ref().and_then(|d| d.page)),
                    ..discover.unwrap_or_default()
                };
                catalog.discover(MediaType::Movie, &filters).await
            }
        };
        result.map(Some).extend()
    }

    async fn shows(
        &self,
        ctx: &Context<'_>,
        query: Option<String>,
        list: Option<ShowListType>,
        discover: Option<DiscoverFilters>,
        page: Option<u32>,
    ) -> Result<Option<Page<Show>>> {
        single_source(&query, list.is_some(), discover.is_some())?;
        let catalog = &sources(ctx)?.catalog;
        let result = match (query, list) {
            (Some(query), _) => catalog.search(SearchType::Tv, &query, page).await,
            (None, Some(list)) => catalog.show_list(list, page).await,
            (None, None) => {
                let filters = DiscoverFilters {
                    page: page.or(discover.as_ref().and_then(|d| d.page)),
                    ..discover.unwrap_or_default()
                };
                catalog.discover(MediaType::Tv, &filters).await
            }
        };
        result.map(Some).extend()
    }

    async fn companies(
        &self,
        ctx: &Context<'_>,
        query: String,
        page: Option<u32>,
    ) -> Result<Option<Page<Company>>> {
        sources(ctx)?
            .catalog
            .search(SearchType::Company, &query, page)
            .await
            .map(Some)
            .extend()
    }

    /// Movies, shows and people matching `query`
    async fn search(
        &self,
        ctx: &Context<'_>,
        query: String,
        page: Option<u32>,
    ) -> Result<Option<Page<SearchResult>>> {
        sources(ctx)?
            .catalog
            .search(SearchType::Multi, &query, page)
            .await
            .map(Some)
            .extend()
    }

    async fn genres(&self, ctx: &Context<'_>, media_type: MediaType) -> Result<Option<Vec<Genre>>> {
        let list = sources(ctx)?
            .catalog
            .get_genre_list(media_type)
            .await
            .extend()?;
        Ok(Some(list.genres))
    }

    async fn configuration(&self, ctx: &Context<'_>) -> Result<Option<Configuration>> {
        sources(ctx)?.catalog.get_configuration().await.map(Some).extend()
    }

    async fn my_account(&self, ctx: &Context<'_>) -> Result<Option<Account>> {
        sources(ctx)?.catalog.get_account().await.map(Some).extend()
    }

    async fn my_lists(
        &self,
        ctx: &Context<'_>,
        page: Option<u32>,
    ) -> Result<Option<Page<TmdbList>>> {
        sources(ctx)?.lists.get_my_lists(page).await.map(Some).extend()
    }

    async fn list(
        &self,
        ctx: &Context<'_>,
        id: u64,
        page: Option<u32>,
        sort_by: Option<ListSortBy>,
    ) -> Result<Option<TmdbList>> {
        sources(ctx)?.lists.get_list(id, page, sort_by).await.map(Some).extend()
    }

    async fn list_item_status(
        &self,
        ctx: &Context<'_>,
        list_id: u64,
        media_id: u64,
        media_type: MediaType,
    ) -> Result<Option<ListItemStatus>> {
        sources(ctx)?
            .lists
            .check_list_item_status(list_id, media_type, media_id)
            .await
            .map(Some)
            .extend()
    }
}

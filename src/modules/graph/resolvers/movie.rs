use async_graphql::{ComplexObject, Context, Result, ResultExt};

use super::media;
use crate::modules::catalog::domain::entities::{
    AccountStates, CastCredit, CrewCredit, Genre, Image, ItemKey, MediaItem, Movie, Review, Video,
};
use crate::modules::catalog::domain::value_objects::{Department, VideoType};
use crate::modules::graph::context::sources;
use crate::shared::application::Page;
use crate::shared::domain::value_objects::MediaType;

impl Movie {
    async fn detail<T, F>(&self, ctx: &Context<'_>, field: &Option<T>, pick: F) -> Result<Option<T>>
    where
        T: Clone,
        F: FnOnce(Movie) -> Option<T>,
    {
        media::detail_scalar(ctx, ItemKey::Movie(self.id), field, self.detailed, |item| match item {
            MediaItem::Movie(movie) => pick(movie),
            _ => None,
        })
        .await
    }
}

#[ComplexObject]
impl Movie {
    async fn media_type(&self) -> MediaType {
        MediaType::Movie
    }

    /// Billed cast; `first` keeps only billing positions below it
    async fn cast(&self, ctx: &Context<'_>, first: Option<u32>) -> Result<Vec<CastCredit>> {
        media::cast(ctx, self, first).await
    }

    async fn crew(
        &self,
        ctx: &Context<'_>,
        departments: Option<Vec<Department>>,
    ) -> Result<Vec<CrewCredit>> {
        media::crew(ctx, self, departments).await
    }

    async fn videos(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "type")] video_type: Option<VideoType>,
    ) -> Result<Vec<Video>> {
        media::videos(ctx, self, video_type).await
    }

    async fn posters(&self, ctx: &Context<'_>) -> Result<Vec<Image>> {
        media::posters(ctx, self).await
    }

    async fn backdrops(&self, ctx: &Context<'_>) -> Result<Vec<Image>> {
        media::backdrops(ctx, self).await
    }

    async fn reviews(&self, ctx: &Context<'_>) -> Result<Page<Review>> {
        media::reviews(ctx, ItemKey::Movie(self.id), self.reviews.as_ref()).await
    }

    async fn genres(&self, ctx: &Context<'_>) -> Result<Vec<Genre>> {
        media::genres(
            ctx,
            ItemKey::Movie(self.id),
            MediaType::Movie,
            self.genres.as_ref(),
            self.genre_ids.as_ref(),
        )
        .await
    }

    /// Favorite/watchlist/rating state for the signed-in user; null when anonymous
    async fn account_states(&self, ctx: &Context<'_>) -> Result<Option<AccountStates>> {
        let catalog = &sources(ctx)?.catalog;
        if catalog.session().and_then(|s| s.session_id.as_ref()).is_none() {
            return Ok(None);
        }
        catalog
            .get_account_states(MediaType::Movie, self.id)
            .await
            .map(Some)
            .extend()
    }

    async fn runtime(&self, ctx: &Context<'_>) -> Result<Option<u32>> {
        self.detail(ctx, &self.runtime, |movie| movie.runtime).await
    }

    async fn budget(&self, ctx: &Context<'_>) -> Result<Option<u64>> {
        self.detail(ctx, &self.budget, |movie| movie.budget).await
    }

    async fn revenue(&self, ctx: &Context<'_>) -> Result<Option<u64>> {
        self.detail(ctx, &self.revenue, |movie| movie.revenue).await
    }

    async fn tagline(&self, ctx: &Context<'_>) -> Result<Option<String>> {
        self.detail(ctx, &self.tagline, |movie| movie.tagline).await
    }

    async fn status(&self, ctx: &Context<'_>) -> Result<Option<String>> {
        self.detail(ctx, &self.status, |movie| movie.status).await
    }

    async fn homepage(&self, ctx: &Context<'_>) -> Result<Option<String>> {
        self.detail(ctx, &self.homepage, |movie| movie.homepage).await
    }

    async fn imdb_id(&self, ctx: &Context<'_>) -> Result<Option<String>> {
        self.detail(ctx, &self.imdb_id, |movie| movie.imdb_id).await
    }
}

use async_graphql::{ComplexObject, Context, Result, ResultExt};

use super::media;
use crate::modules::catalog::domain::entities::{
    AccountStates, CastCredit, CrewCredit, Genre, Image, ItemKey, MediaItem, Review, Season, Show,
    Video,
};
use crate::modules::catalog::domain::value_objects::{Department, VideoType};
use crate::modules::graph::context::sources;
use crate::shared::application::Page;
use crate::shared::domain::value_objects::MediaType;

impl Show {
    async fn detail<T, F>(&self, ctx: &Context<'_>, field: &Option<T>, pick: F) -> Result<Option<T>>
    where
        T: Clone,
        F: FnOnce(Show) -> Option<T>,
    {
        media::detail_scalar(ctx, ItemKey::Show(self.id), field, self.detailed, |item| match item {
            MediaItem::Show(show) => pick(show),
            _ => None,
        })
        .await
    }
}

#[ComplexObject]
impl Show {
    async fn media_type(&self) -> MediaType {
        MediaType::Tv
    }

    /// Same as `name`, so movies and shows can be selected alike
    async fn title(&self) -> &str {
        &self.name
    }

    async fn original_title(&self) -> Option<&str> {
        self.original_name.as_deref()
    }

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
        media::reviews(ctx, ItemKey::Show(self.id), self.reviews.as_ref()).await
    }

    async fn genres(&self, ctx: &Context<'_>) -> Result<Vec<Genre>> {
        media::genres(
            ctx,
            ItemKey::Show(self.id),
            MediaType::Tv,
            self.genres.as_ref(),
            self.genre_ids.as_ref(),
        )
        .await
    }

    async fn seasons(&self, ctx: &Context<'_>) -> Result<Vec<Season>> {
        sources(ctx)?
            .catalog
            .detail_field(ItemKey::Show(self.id), self.seasons.as_ref(), |item| match item {
                MediaItem::Show(show) => show.seasons,
                _ => None,
            })
            .await
            .extend()
    }

    async fn season(&self, ctx: &Context<'_>, season_number: u32) -> Result<Season> {
        sources(ctx)?
            .catalog
            .get_season(self.id, season_number)
            .await
            .extend()
    }

    async fn account_states(&self, ctx: &Context<'_>) -> Result<Option<AccountStates>> {
        let catalog = &sources(ctx)?.catalog;
        if catalog.session().and_then(|s| s.session_id.as_ref()).is_none() {
            return Ok(None);
        }
        catalog
            .get_account_states(MediaType::Tv, self.id)
            .await
            .map(Some)
            .extend()
    }

    async fn number_of_seasons(&self, ctx: &Context<'_>) -> Result<Option<u32>> {
        self.detail(ctx, &self.number_of_seasons, |show| show.number_of_seasons).await
    }

    async fn number_of_episodes(&self, ctx: &Context<'_>) -> Result<Option<u32>> {
        self.detail(ctx, &self.number_of_episodes, |show| show.number_of_episodes).await
    }

    async fn in_production(&self, ctx: &Context<'_>) -> Result<Option<bool>> {
        self.detail(ctx, &self.in_production, |show| show.in_production).await
    }

    async fn tagline(&self, ctx: &Context<'_>) -> Result<Option<String>> {
        self.detail(ctx, &self.tagline, |show| show.tagline).await
    }

    async fn status(&self, ctx: &Context<'_>) -> Result<Option<String>> {
        self.detail(ctx, &self.status, |show| show.status).await
    }

    async fn homepage(&self, ctx: &Context<'_>) -> Result<Option<String>> {
        self.detail(ctx, &self.homepage, |show| show.homepage).await
    }
}

use async_graphql::{ComplexObject, Context, Result, ResultExt};

use super::media;
use crate::modules::catalog::domain::entities::{
    CastCredit, CrewCredit, Episode, Image, ItemKey, MediaItem, MediaRecord, Season, Video,
};
use crate::modules::catalog::domain::value_objects::{Department, VideoType};
use crate::modules::graph::context::sources;

#[ComplexObject]
impl Season {
    async fn title(&self) -> &str {
        &self.name
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

    /// Episodes are only embedded in season details, never in the show's season list
    async fn episodes(&self, ctx: &Context<'_>) -> Result<Vec<Episode>> {
        sources(ctx)?
            .catalog
            .detail_field(self.item_key(), self.episodes.as_ref(), |item| match item {
                MediaItem::Season(season) => season.episodes,
                _ => None,
            })
            .await
            .extend()
    }

    async fn episode(&self, ctx: &Context<'_>, episode_number: u32) -> Result<Episode> {
        sources(ctx)?
            .catalog
            .get_episode(self.show_id, self.season_number, episode_number)
            .await
            .extend()
    }
}

#[ComplexObject]
impl Episode {
    async fn title(&self) -> &str {
        &self.name
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

    async fn guest_stars(&self, ctx: &Context<'_>) -> Result<Vec<CastCredit>> {
        Ok(media::credits(ctx, self).await?.guest_stars().to_vec())
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

    async fn stills(&self, ctx: &Context<'_>) -> Result<Vec<Image>> {
        media::stills(ctx, self).await
    }

    async fn season(&self, ctx: &Context<'_>) -> Result<Season> {
        sources(ctx)?
            .catalog
            .get_season(self.show_id, self.season_number)
            .await
            .extend()
    }
}

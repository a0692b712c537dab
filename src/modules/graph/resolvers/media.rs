//! Field resolvers shared by movies, shows, seasons and episodes.
//!
//! Each resolver reads the sub-resource from the parent record when the
//! fetch that produced it bundled one, and otherwise issues a single detail
//! fetch for the owning record.
use async_graphql::{Context, Result, ResultExt};

use crate::modules::catalog::domain::entities::{
    CastCredit, Credits, CrewCredit, Genre, Image, Images, ItemKey, MediaItem, MediaRecord,
    Review, Video, VideoList,
};
use crate::modules::catalog::domain::value_objects::{Department, VideoType};
use crate::modules::graph::context::sources;
use crate::shared::application::Page;
use crate::shared::domain::value_objects::MediaType;

/// An unset scalar is only missing when the record did not come from its
/// detail endpoint; detail records report upstream nulls as-is.
pub(crate) fn known<T>(field: &Option<T>, detailed: bool) -> Option<&Option<T>> {
    (detailed || field.is_some()).then_some(field)
}

/// Detail-only scalar: present value or one detail fetch for `key`
pub(crate) async fn detail_scalar<T, F>(
    ctx: &Context<'_>,
    key: ItemKey,
    field: &Option<T>,
    detailed: bool,
    pick: F,
) -> Result<Option<T>>
where
    T: Clone,
    F: FnOnce(MediaItem) -> Option<T>,
{
    sources(ctx)?
        .catalog
        .detail_field(key, known(field, detailed), |item| Some(pick(item)))
        .await
        .extend()
}

pub(crate) async fn credits<R: MediaRecord>(ctx: &Context<'_>, record: &R) -> Result<Credits> {
    sources(ctx)?
        .catalog
        .detail_field(record.item_key(), record.credits(), MediaItem::into_credits)
        .await
        .extend()
}

async fn images<R: MediaRecord>(ctx: &Context<'_>, record: &R) -> Result<Images> {
    sources(ctx)?
        .catalog
        .detail_field(record.item_key(), record.images(), MediaItem::into_images)
        .await
        .extend()
}

/// Acting credits; with `first`, only billing positions below it are kept
pub(crate) async fn cast<R: MediaRecord>(
    ctx: &Context<'_>,
    record: &R,
    first: Option<u32>,
) -> Result<Vec<CastCredit>> {
    let credits = credits(ctx, record).await?;
    Ok(credits
        .cast()
        .filter(|credit| match first {
            Some(first) => credit.order.map(|order| order < first).unwrap_or(false),
            None => true,
        })
        .cloned()
        .collect())
}

pub(crate) async fn crew<R: MediaRecord>(
    ctx: &Context<'_>,
    record: &R,
    departments: Option<Vec<Department>>,
) -> Result<Vec<CrewCredit>> {
    let credits = credits(ctx, record).await?;
    Ok(credits
        .crew()
        .filter(|credit| match (&departments, credit.department.as_deref()) {
            (None, _) => true,
            (Some(wanted), Some(department)) => wanted.iter().any(|d| d.matches(department)),
            (Some(_), None) => false,
        })
        .cloned()
        .collect())
}

pub(crate) async fn videos<R: MediaRecord>(
    ctx: &Context<'_>,
    record: &R,
    video_type: Option<VideoType>,
) -> Result<Vec<Video>> {
    let VideoList { results } = sources(ctx)?
        .catalog
        .detail_field(record.item_key(), record.videos(), MediaItem::into_videos)
        .await
        .extend()?;
    Ok(match video_type {
        Some(video_type) => results
            .into_iter()
            .filter(|video| video_type.matches(&video.video_type))
            .collect(),
        None => results,
    })
}

pub(crate) async fn posters<R: MediaRecord>(ctx: &Context<'_>, record: &R) -> Result<Vec<Image>> {
    Ok(images(ctx, record).await?.posters)
}

pub(crate) async fn backdrops<R: MediaRecord>(ctx: &Context<'_>, record: &R) -> Result<Vec<Image>> {
    Ok(images(ctx, record).await?.backdrops)
}

pub(crate) async fn stills<R: MediaRecord>(ctx: &Context<'_>, record: &R) -> Result<Vec<Image>> {
    Ok(images(ctx, record).await?.stills)
}

pub(crate) async fn reviews(
    ctx: &Context<'_>,
    key: ItemKey,
    present: Option<&Page<Review>>,
) -> Result<Page<Review>> {
    sources(ctx)?
        .catalog
        .detail_field(key, present, |item| match item {
            MediaItem::Movie(movie) => movie.reviews,
            MediaItem::Show(show) => show.reviews,
            MediaItem::Season(_) | MediaItem::Episode(_) => None,
        })
        .await
        .extend()
}

/// Attached genre objects win, then a lookup of the list-level genre ids,
/// then a detail fetch
pub(crate) async fn genres(
    ctx: &Context<'_>,
    key: ItemKey,
    media_type: MediaType,
    genres: Option<&Vec<Genre>>,
    genre_ids: Option<&Vec<u64>>,
) -> Result<Vec<Genre>> {
    let catalog = &sources(ctx)?.catalog;
    if genres.is_none() {
        if let Some(ids) = genre_ids {
            return catalog.get_genres_by_id(media_type, ids).await.extend();
        }
    }
    catalog
        .detail_field(key, genres, |item| match item {
            MediaItem::Movie(movie) => movie.genres,
            MediaItem::Show(show) => show.genres,
            MediaItem::Season(_) | MediaItem::Episode(_) => None,
        })
        .await
        .extend()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_scalars_are_unknown_until_detailed() {
        let homepage: Option<String> = None;
        assert!(known(&homepage, false).is_none());
        assert_eq!(known(&homepage, true), Some(&None));
        assert_eq!(known(&Some(117), false), Some(&Some(117)));
    }
}

use async_graphql::OutputType;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use std::sync::Arc;

use crate::modules::catalog::domain::entities::{
    Account, AccountStates, Configuration, Episode, Genre, GenreList, ItemKey, Media, MediaItem,
    Movie, Person, Season, Show,
};
use crate::modules::catalog::domain::value_objects::{
    DiscoverFilters, MovieListType, SearchType, ShowListType,
};
use crate::modules::upstream::{CacheTtl, TmdbClient};
use crate::shared::application::{Envelope, MutationOutcome, Page, StatusBody};
use crate::shared::domain::value_objects::MediaType;
use crate::shared::domain::Session;
use crate::shared::errors::{AppError, AppResult};

/// Catalog and account operations over the v3 API, scoped to one request
#[derive(Clone)]
pub struct CatalogSource {
    client: Arc<TmdbClient>,
    session: Option<Session>,
}

impl CatalogSource {
    pub fn new(client: Arc<TmdbClient>, session: Option<Session>) -> Self {
        Self { client, session }
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    fn require_session(&self) -> AppResult<&Session> {
        self.session
            .as_ref()
            .ok_or_else(|| {
                AppError::Unauthorized("this operation requires a signed-in user".to_string())
            })
    }

    // ---- Detail fetches ----

    /// One upstream call returning the record with its sub-resources bundled
    pub async fn get_item_detail(&self, key: &ItemKey) -> AppResult<MediaItem> {
        let params = json!({ "appendToResponse": key.append_to_response() });
        let body = self
            .client
            .get(&key.path(), params, CacheTtl::Catalog, None)
            .await?;

        let item = match *key {
            ItemKey::Movie(_) => MediaItem::Movie(Movie {
                detailed: true,
                ..serde_json::from_value::<Movie>(body)?
            }),
            ItemKey::Show(_) => {
                let mut show: Show = serde_json::from_value(body)?;
                show.seasons = show.seasons_with_parent();
                show.detailed = true;
                MediaItem::Show(show)
            }
            ItemKey::Season {
                show_id,
                season_number,
            } => {
                let season: Season = serde_json::from_value(body)?;
                MediaItem::Season(
                    Season {
                        season_number,
                        ..season
                    }
                    .with_show_id(show_id),
                )
            }
            ItemKey::Episode {
                show_id,
                season_number,
                episode_number,
            } => {
                let episode: Episode = serde_json::from_value(body)?;
                MediaItem::Episode(Episode {
                    show_id,
                    season_number,
                    episode_number,
                    ..episode
                })
            }
        };
        Ok(item)
    }

    pub async fn get_movie(&self, id: u64) -> AppResult<Movie> {
        match self.get_item_detail(&ItemKey::Movie(id)).await? {
            MediaItem::Movie(movie) => Ok(movie),
            _ => Err(mismatched(ItemKey::Movie(id))),
        }
    }

    pub async fn get_show(&self, id: u64) -> AppResult<Show> {
        match self.get_item_detail(&ItemKey::Show(id)).await? {
            MediaItem::Show(show) => Ok(show),
            _ => Err(mismatched(ItemKey::Show(id))),
        }
    }

    pub async fn get_season(&self, show_id: u64, season_number: u32) -> AppResult<Season> {
        let key = ItemKey::Season {
            show_id,
            season_number,
        };
        match self.get_item_detail(&key).await? {
            MediaItem::Season(season) => Ok(season),
            _ => Err(mismatched(key)),
        }
    }

    pub async fn get_episode(
        &self,
        show_id: u64,
        season_number: u32,
        episode_number: u32,
    ) -> AppResult<Episode> {
        let key = ItemKey::Episode {
            show_id,
            season_number,
            episode_number,
        };
        match self.get_item_detail(&key).await? {
            MediaItem::Episode(episode) => Ok(episode),
            _ => Err(mismatched(key)),
        }
    }

    /// Person detail with combined credits and images bundled
    pub async fn get_person(&self, id: u64) -> AppResult<Person> {
        let params = json!({ "appendToResponse": "combined_credits,images" });
        let body = self
            .client
            .get(&format!("/person/{}", id), params, CacheTtl::Catalog, None)
            .await?;
        Ok(Person {
            detailed: true,
            ..serde_json::from_value::<Person>(body)?
        })
    }

    /// Return `present` if the parent already carries the field, otherwise
    /// fetch the owning record once and extract it.
    pub async fn detail_field<T, F>(
        &self,
        key: ItemKey,
        present: Option<&T>,
        pick: F,
    ) -> AppResult<T>
    where
        T: Clone + Default,
        F: FnOnce(MediaItem) -> Option<T>,
    {
        if let Some(value) = present {
            return Ok(value.clone());
        }
        log::debug!("Detail fetch for {} to resolve a missing field", key);
        let item = self.get_item_detail(&key).await?;
        Ok(pick(item).unwrap_or_default())
    }

    /// [`detail_field`](Self::detail_field) for people
    pub async fn person_field<T, F>(&self, id: u64, present: Option<&T>, pick: F) -> AppResult<T>
    where
        T: Clone + Default,
        F: FnOnce(Person) -> Option<T>,
    {
        if let Some(value) = present {
            return Ok(value.clone());
        }
        log::debug!("Detail fetch for /person/{} to resolve a missing field", id);
        let person = self.get_person(id).await?;
        Ok(pick(person).unwrap_or_default())
    }

    // ---- Reference data ----

    pub async fn get_genre_list(&self, media_type: MediaType) -> AppResult<GenreList> {
        let body = self
            .client
            .get(
                &format!("/genre/{}/list", media_type.as_path()),
                Value::Null,
                CacheTtl::Reference,
                None,
            )
            .await?;
        Ok(serde_json::from_value(body)?)
    }

    /// Genres for `ids` in input order; ids missing from the list are dropped
    pub async fn get_genres_by_id(
        &self,
        media_type: MediaType,
        ids: &[u64],
    ) -> AppResult<Vec<Genre>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        Ok(self.get_genre_list(media_type).await?.resolve(ids))
    }

    pub async fn get_configuration(&self) -> AppResult<Configuration> {
        let body = self
            .client
            .get("/configuration", Value::Null, CacheTtl::Reference, None)
            .await?;
        Ok(serde_json::from_value(body)?)
    }

    // ---- Discovery ----

    pub async fn discover<T>(
        &self,
        media_type: MediaType,
        filters: &DiscoverFilters,
    ) -> AppResult<Page<T>>
    where
        T: OutputType + DeserializeOwned,
    {
        let body = self
            .client
            .get(
                &format!("/discover/{}", media_type.as_path()),
                filters.to_params(media_type)?,
                CacheTtl::Discovery,
                None,
            )
            .await?;
        Envelope::split(body)?.into_page()
    }

    /// Search one endpoint. Single-type endpoints get `mediaType` stamped on
    /// each result so every hit can be discriminated the same way.
    pub async fn search<T>(
        &self,
        search_type: SearchType,
        query: &str,
        page: Option<u32>,
    ) -> AppResult<Page<T>>
    where
        T: OutputType + DeserializeOwned,
    {
        if query.trim().is_empty() {
            return Err(AppError::InvalidInput("search query must not be empty".to_string()));
        }
        let params = json!({ "query": query, "page": page.unwrap_or(1) });
        let body = self
            .client
            .get(
                &format!("/search/{}", search_type.as_path()),
                params,
                CacheTtl::Discovery,
                None,
            )
            .await?;

        let mut envelope = Envelope::split(body)?;
        if let Some(tag) = search_type.result_tag() {
            tag_media_type(&mut envelope, tag);
        }
        envelope.into_page()
    }

    pub async fn movie_list(
        &self,
        list: MovieListType,
        page: Option<u32>,
    ) -> AppResult<Page<Movie>> {
        self.curated_list(&format!("/movie/{}", list.as_path()), page).await
    }

    pub async fn show_list(&self, list: ShowListType, page: Option<u32>) -> AppResult<Page<Show>> {
        self.curated_list(&format!("/tv/{}", list.as_path()), page).await
    }

    async fn curated_list<T>(&self, path: &str, page: Option<u32>) -> AppResult<Page<T>>
    where
        T: OutputType + DeserializeOwned,
    {
        let params = json!({ "page": page.unwrap_or(1) });
        let body = self
            .client
            .get(path, params, CacheTtl::Discovery, None)
            .await?;
        Envelope::split(body)?.into_page()
    }

    /// `known_for` is only present on person search results, so look the
    /// person up by name and match on id. No match yields an empty list.
    pub async fn find_known_for(&self, person_id: u64, name: &str) -> AppResult<Vec<Media>> {
        if name.trim().is_empty() {
            return Ok(Vec::new());
        }
        let page: Page<Person> = self.search(SearchType::Person, name, None).await?;
        Ok(page
            .results
            .into_iter()
            .find(|person| person.id == person_id)
            .and_then(|person| person.known_for)
            .unwrap_or_default())
    }

    // ---- Account reads ----

    pub async fn get_account(&self) -> AppResult<Account> {
        let session = self.require_session()?;
        session.require_session_id()?;
        let body = self
            .client
            .get("/account", Value::Null, CacheTtl::UserScoped, Some(session))
            .await?;
        Ok(serde_json::from_value(body)?)
    }

    pub async fn get_account_states(
        &self,
        media_type: MediaType,
        id: u64,
    ) -> AppResult<AccountStates> {
        let session = self.require_session()?;
        session.require_session_id()?;
        let body = self
            .client
            .get(
                &format!("/{}/{}/account_states", media_type.as_path(), id),
                Value::Null,
                CacheTtl::UserScoped,
                Some(session),
            )
            .await?;
        Ok(serde_json::from_value(body)?)
    }

    pub async fn watchlist(
        &self,
        media_type: MediaType,
        page: Option<u32>,
    ) -> AppResult<Page<Media>> {
        self.account_listing("watchlist", media_type, page).await
    }

    pub async fn favorites(
        &self,
        media_type: MediaType,
        page: Option<u32>,
    ) -> AppResult<Page<Media>> {
        self.account_listing("favorite", media_type, page).await
    }

    async fn account_listing(
        &self,
        listing: &str,
        media_type: MediaType,
        page: Option<u32>,
    ) -> AppResult<Page<Media>> {
        let session = self.require_session()?;
        session.require_session_id()?;
        let account_id = session.require_account_id()?;
        let body = self
            .client
            .get(
                &format!("/account/{}/{}/{}", account_id, listing, media_type.as_plural()),
                json!({ "page": page.unwrap_or(1) }),
                CacheTtl::UserScoped,
                Some(session),
            )
            .await?;

        let mut envelope = Envelope::split(body)?;
        tag_media_type(&mut envelope, media_type.as_path());
        envelope.into_page()
    }

    // ---- Account writes (soft failures) ----

    pub async fn add_to_watchlist(
        &self,
        media_type: MediaType,
        media_id: u64,
        watchlist: bool,
    ) -> MutationOutcome {
        let body = json!({
            "mediaType": media_type.as_path(),
            "mediaId": media_id,
            "watchlist": watchlist,
        });
        self.write_account_item("watchlist", body).await
    }

    pub async fn add_to_favorites(
        &self,
        media_type: MediaType,
        media_id: u64,
        favorite: bool,
    ) -> MutationOutcome {
        let body = json!({
            "mediaType": media_type.as_path(),
            "mediaId": media_id,
            "favorite": favorite,
        });
        self.write_account_item("favorite", body).await
    }

    async fn write_account_item(&self, listing: &str, body: Value) -> MutationOutcome {
        let result = async {
            let session = self.require_session()?;
            session.require_session_id()?;
            let account_id = session.require_account_id()?;
            let response = self
                .client
                .post(&format!("/account/{}/{}", account_id, listing), body, Some(session))
                .await?;
            StatusBody::from_response(response)
        }
        .await;

        match result {
            Ok(status) => MutationOutcome::from_status(status),
            Err(err) => err.into(),
        }
    }

    /// Rate a movie or show; `None` removes the rating
    pub async fn update_rating(
        &self,
        media_type: MediaType,
        id: u64,
        value: Option<f64>,
    ) -> MutationOutcome {
        if let Some(value) = value {
            if !is_valid_rating(value) {
                return MutationOutcome::failure(format!(
                    "rating must be between 0.5 and 10.0 in steps of 0.5, got {}",
                    value
                ));
            }
        }

        let result = async {
            let session = self.require_session()?;
            session.require_session_id()?;
            let path = format!("/{}/{}/rating", media_type.as_path(), id);
            let response = match value {
                Some(value) => {
                    self.client
                        .post(&path, json!({ "value": value }), Some(session))
                        .await?
                }
                None => self.client.delete(&path, None, Some(session)).await?,
            };
            StatusBody::from_response(response)
        }
        .await;

        match result {
            Ok(status) => MutationOutcome::from_status(status),
            Err(err) => err.into(),
        }
    }
}

fn mismatched(key: ItemKey) -> AppError {
    AppError::Internal(format!("detail fetch for {} produced another record type", key))
}

/// Stamp `mediaType` on results that lack it
fn tag_media_type(envelope: &mut Envelope, tag: &str) {
    for result in envelope.results.iter_mut() {
        if let Value::Object(map) = result {
            map.entry("mediaType")
                .or_insert_with(|| Value::String(tag.to_string()));
        }
    }
}

/// 0.5 to 10.0 inclusive, multiples of 0.5
pub fn is_valid_rating(value: f64) -> bool {
    (0.5..=10.0).contains(&value) && (value * 2.0).fract() == 0.0
}

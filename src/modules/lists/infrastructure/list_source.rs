use serde_json::{json, Map, Value};
use std::sync::Arc;

use crate::modules::catalog::domain::entities::Media;
use crate::modules::lists::domain::entities::{
    CreateListInput, ListItemInput, ListItemStatus, ListSortBy, TmdbList, UpdateListInput,
};
use crate::modules::upstream::{CacheTtl, TmdbClient};
use crate::shared::application::{Envelope, MutationOutcome, Page, StatusBody};
use crate::shared::domain::value_objects::MediaType;
use crate::shared::domain::Session;
use crate::shared::errors::{AppError, AppResult};

/// User list operations over the v4 API, scoped to one request
#[derive(Clone)]
pub struct ListSource {
    client: Arc<TmdbClient>,
    session: Option<Session>,
}

impl ListSource {
    pub fn new(client: Arc<TmdbClient>, session: Option<Session>) -> Self {
        Self { client, session }
    }

    /// Session carrying a user access token, required by every write
    fn require_user(&self) -> AppResult<&Session> {
        let session = self
            .session
            .as_ref()
            .ok_or_else(|| {
                AppError::Unauthorized("this operation requires a signed-in user".to_string())
            })?;
        session.require_access_token()?;
        Ok(session)
    }

    /// Fetch one page of a list. The pagination envelope becomes `items`,
    /// and `number_of_items` mirrors its total.
    pub async fn get_list(
        &self,
        id: u64,
        page: Option<u32>,
        sort_by: Option<ListSortBy>,
    ) -> AppResult<TmdbList> {
        // Private lists are only visible to their owner, so signed-in reads are never shared
        let ttl = match self.session.as_ref().and_then(|s| s.access_token.as_ref()) {
            Some(_) => CacheTtl::UserScoped,
            None => CacheTtl::Discovery,
        };
        let params = json!({
            "page": page.unwrap_or(1),
            "sortBy": sort_by.map(|s| s.upstream_value()),
        });
        let body = self
            .client
            .get(&format!("/list/{}", id), params, ttl, self.session.as_ref())
            .await?;

        let Envelope { results, meta, rest } = Envelope::split(body)?;
        let mut list: TmdbList = serde_json::from_value(Value::Object(rest))?;
        let items: Page<Media> = Envelope {
            results,
            meta,
            rest: Map::new(),
        }
        .into_page()?;

        list.number_of_items = meta.total_results;
        list.items = Some(items);
        Ok(list)
    }

    /// Lists owned by the signed-in account
    pub async fn get_my_lists(&self, page: Option<u32>) -> AppResult<Page<TmdbList>> {
        let session = self.require_user()?;
        let account = session.require_account_object_id()?;
        let body = self
            .client
            .get(
                &format!("/account/{}/lists", account),
                json!({ "page": page.unwrap_or(1) }),
                CacheTtl::UserScoped,
                Some(session),
            )
            .await?;
        Envelope::split(body)?.into_page()
    }

    pub async fn check_list_item_status(
        &self,
        list_id: u64,
        media_type: MediaType,
        media_id: u64,
    ) -> AppResult<ListItemStatus> {
        let session = self.require_user()?;
        let params = json!({ "mediaId": media_id, "mediaType": media_type.as_path() });
        let result = self
            .client
            .get(
                &format!("/list/{}/item_status", list_id),
                params,
                CacheTtl::UserScoped,
                Some(session),
            )
            .await;

        let on_list = match result {
            Ok(body) => StatusBody::from_response(body)?
                .success
                .unwrap_or(true),
            // The upstream answers 404 for items that are not on the list
            Err(AppError::Upstream { status: 404, .. }) => false,
            Err(err) => return Err(err),
        };

        Ok(ListItemStatus {
            list_id,
            media_id,
            media_type,
            on_list,
        })
    }

    // ---- Writes (soft failures) ----

    pub async fn create_list(&self, input: CreateListInput) -> MutationOutcome {
        let body = json!({
            "name": input.name,
            "description": input.description.unwrap_or_default(),
            "iso_639_1": input.language.unwrap_or_else(|| "en".to_string()),
            "public": input.public.unwrap_or(true),
        });
        self.write(None, |client, session| async move {
            client.post("/list", body, Some(&session)).await
        })
        .await
    }

    pub async fn update_list(&self, id: u64, input: UpdateListInput) -> MutationOutcome {
        let body = json!({
            "name": input.name,
            "description": input.description,
            "public": input.public,
            "sortBy": input.sort_by.map(|s| s.upstream_value()),
        });
        let body = strip_nulls(body);
        self.write(Some(id), |client, session| async move {
            client.put(&format!("/list/{}", id), body, Some(&session)).await
        })
        .await
    }

    pub async fn delete_list(&self, id: u64) -> MutationOutcome {
        let outcome = self
            .write(Some(id), |client, session| async move {
                client.delete(&format!("/list/{}", id), None, Some(&session)).await
            })
            .await;
        // The list no longer exists, so there is nothing to re-query
        MutationOutcome { id: None, ..outcome }
    }

    pub async fn clear_list(&self, id: u64) -> MutationOutcome {
        self.write(Some(id), |client, session| async move {
            client
                .get(
                    &format!("/list/{}/clear", id),
                    Value::Null,
                    CacheTtl::UserScoped,
                    Some(&session),
                )
                .await
        })
        .await
    }

    pub async fn add_list_items(&self, id: u64, items: &[ListItemInput]) -> MutationOutcome {
        let body = items_body(items);
        self.write(Some(id), |client, session| async move {
            client
                .post(&format!("/list/{}/items", id), body, Some(&session))
                .await
        })
        .await
    }

    pub async fn remove_list_items(&self, id: u64, items: &[ListItemInput]) -> MutationOutcome {
        let body = items_body(items);
        self.write(Some(id), |client, session| async move {
            client
                .delete(&format!("/list/{}/items", id), Some(body), Some(&session))
                .await
        })
        .await
    }

    /// Run a list write, fold any error into a soft failure and drop cached
    /// reads of the list on success.
    async fn write<F, Fut>(&self, id: Option<u64>, call: F) -> MutationOutcome
    where
        F: FnOnce(Arc<TmdbClient>, Session) -> Fut,
        Fut: std::future::Future<Output = AppResult<Value>>,
    {
        let session = match self.require_user() {
            Ok(session) => session.clone(),
            Err(err) => return err.into(),
        };

        let status = match call(self.client.clone(), session).await {
            Ok(body) => StatusBody::from_response(body),
            Err(err) => Err(err),
        };

        match status {
            Ok(status) => {
                let mut outcome = MutationOutcome::from_status(status);
                if let Some(id) = id {
                    self.client.invalidate(&format!("/list/{}", id)).await;
                    outcome = outcome.with_id(id.to_string());
                }
                outcome
            }
            Err(err) => {
                let outcome = MutationOutcome::from(err);
                match id {
                    Some(id) => outcome.with_id(id.to_string()),
                    None => outcome,
                }
            }
        }
    }
}

fn items_body(items: &[ListItemInput]) -> Value {
    let items: Vec<Value> = items
        .iter()
        .map(|item| json!({ "mediaType": item.media_type.as_path(), "mediaId": item.media_id }))
        .collect();
    json!({ "items": items })
}

fn strip_nulls(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            Value::Object(map.into_iter().filter(|(_, v)| !v.is_null()).collect())
        }
        other => other,
    }
}

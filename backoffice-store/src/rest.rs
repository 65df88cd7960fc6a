//! REST-backed entity store.
//!
//! Talks to the dashboard API's conventional collection routes:
//! `POST /{collection}`, `PUT /{collection}/{id}`,
//! `DELETE /{collection}/{id}`, `GET /{collection}?lang=..&restaurant=..`.

use crate::{EntityStore, ListFilter, StoreError, StoreResult};
use async_trait::async_trait;
use backoffice_types::EntityId;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::marker::PhantomData;
use std::time::Duration;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct CreatedBody {
    id: EntityId,
}

/// One remote collection behind the dashboard REST API.
pub struct RestStore<T> {
    client: Client,
    base_url: String,
    collection: String,
    _record: PhantomData<fn() -> T>,
}

impl<T> RestStore<T> {
    /// Creates a store for `collection` under `base_url`.
    ///
    /// # Panics
    /// Panics if the TLS backend cannot be initialized, which indicates
    /// a broken build environment rather than a runtime condition.
    #[must_use]
    pub fn new(base_url: impl Into<String>, collection: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("failed to create HTTP client");
        Self::with_client(client, base_url, collection)
    }

    /// Creates a store using a caller-provided HTTP client.
    #[must_use]
    pub fn with_client(
        client: Client,
        base_url: impl Into<String>,
        collection: impl Into<String>,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client,
            base_url,
            collection: collection.into(),
            _record: PhantomData,
        }
    }

    fn collection_url(&self) -> String {
        format!("{}/{}", self.base_url, self.collection)
    }

    fn record_url(&self, id: EntityId) -> String {
        format!("{}/{}/{}", self.base_url, self.collection, id)
    }
}

fn check_status(status: reqwest::StatusCode) -> StoreResult<()> {
    if status.is_success() {
        Ok(())
    } else {
        Err(StoreError::Status {
            code: status.as_u16(),
        })
    }
}

#[async_trait]
impl<T> EntityStore<T> for RestStore<T>
where
    T: Serialize + DeserializeOwned + Send + Sync,
{
    async fn create(&self, record: &T) -> StoreResult<EntityId> {
        let response = self
            .client
            .post(self.collection_url())
            .json(record)
            .send()
            .await?;
        check_status(response.status())?;
        let body: CreatedBody = response.json().await?;
        debug!(collection = %self.collection, id = %body.id, "created record");
        Ok(body.id)
    }

    async fn update(&self, id: EntityId, patch: Value) -> StoreResult<()> {
        if !patch.is_object() {
            return Err(StoreError::InvalidPatch(patch.to_string()));
        }
        let response = self
            .client
            .put(self.record_url(id))
            .json(&patch)
            .send()
            .await?;
        check_status(response.status())?;
        debug!(collection = %self.collection, %id, "updated record");
        Ok(())
    }

    async fn delete(&self, id: EntityId) -> StoreResult<()> {
        let response = self.client.delete(self.record_url(id)).send().await?;
        check_status(response.status())?;
        debug!(collection = %self.collection, %id, "deleted record");
        Ok(())
    }

    async fn list(&self, filter: ListFilter) -> StoreResult<Vec<T>> {
        let mut request = self.client.get(self.collection_url());
        if let Some(lang) = &filter.lang {
            request = request.query(&[("lang", lang.as_str())]);
        }
        if let Some(restaurant) = filter.restaurant {
            request = request.query(&[("restaurant", restaurant.to_string().as_str())]);
        }
        let response = request.send().await?;
        check_status(response.status())?;
        let records: Vec<T> = response.json().await?;
        debug!(collection = %self.collection, count = records.len(), "listed records");
        Ok(records)
    }
}

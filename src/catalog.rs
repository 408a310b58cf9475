//! Creature and move lookups.
//!
//! The battle engine only sees the [`Catalog`] and [`MoveDetailSource`]
//! traits; [`PokeApiClient`] is the HTTP implementation backed by PokeAPI.

use crate::config::CatalogConfig;
use crate::error::CatalogError;
use crate::model::{CreatureRecord, MoveDetail, MoveRef};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

/// Resolves a move reference into its detail. Each call may fail on its own.
#[async_trait]
pub trait MoveDetailSource: Send + Sync {
    async fn fetch_move_detail(&self, move_ref: &MoveRef) -> Result<MoveDetail, CatalogError>;
}

#[async_trait]
pub trait Catalog: MoveDetailSource {
    /// Looks a creature up by its lower-case catalog name.
    async fn fetch_creature(&self, name: &str) -> Result<CreatureRecord, CatalogError>;

    async fn fetch_creature_by_id(&self, id: u32) -> Result<CreatureRecord, CatalogError>;
}

pub struct PokeApiClient {
    client: Client,
    base_url: String,
}

impl PokeApiClient {
    pub fn new(config: &CatalogConfig) -> Self {
        let mut base_url = config.base_url.clone();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        Self {
            client: Client::new(),
            base_url,
        }
    }

    fn creature_url(&self, key: &str) -> String {
        format!("{}pokemon/{}", self.base_url, key)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str, key: &str) -> Result<T, CatalogError> {
        tracing::debug!(%url, "catalog request");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| CatalogError::Http {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(CatalogError::NotFound(key.to_string()));
        }
        if !status.is_success() {
            return Err(CatalogError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.json().await.map_err(|source| CatalogError::Http {
            url: url.to_string(),
            source,
        })
    }
}

#[async_trait]
impl MoveDetailSource for PokeApiClient {
    async fn fetch_move_detail(&self, move_ref: &MoveRef) -> Result<MoveDetail, CatalogError> {
        self.get_json(&move_ref.url, &move_ref.name).await
    }
}

#[async_trait]
impl Catalog for PokeApiClient {
    async fn fetch_creature(&self, name: &str) -> Result<CreatureRecord, CatalogError> {
        let url = self.creature_url(name);
        let record: CreatureRecord = self.get_json(&url, name).await?;
        tracing::info!(name = %record.name, moves = record.moves.len(), "fetched creature");
        Ok(record)
    }

    async fn fetch_creature_by_id(&self, id: u32) -> Result<CreatureRecord, CatalogError> {
        let key = id.to_string();
        let url = self.creature_url(&key);
        let record: CreatureRecord = self.get_json(&url, &key).await?;
        tracing::info!(id, name = %record.name, moves = record.moves.len(), "fetched creature");
        Ok(record)
    }
}

//! Blocks resource

use crate::http::ApiClient;
use crate::models::{Block, CreateBlockRequest, Paginated, UpdateBlockRequest};
use crate::utils::errors::Result;
use crate::utils::helpers::list_query;

/// CRUD over `/api/blocks`.
#[derive(Debug, Clone)]
pub struct BlocksService {
    client: ApiClient,
}

impl BlocksService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, page: u32, search: Option<&str>) -> Result<Paginated<Block>> {
        self.client.get("/api/blocks", &list_query(page, search)).await
    }

    pub async fn get(&self, id: i64) -> Result<Block> {
        self.client.get(&format!("/api/blocks/{id}"), &[]).await
    }

    pub async fn create(&self, request: &CreateBlockRequest) -> Result<Block> {
        self.client.post("/api/blocks", request).await
    }

    pub async fn update(&self, id: i64, request: &UpdateBlockRequest) -> Result<Block> {
        self.client.put(&format!("/api/blocks/{id}"), request).await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.client.delete(&format!("/api/blocks/{id}")).await
    }
}

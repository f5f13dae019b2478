//! Rooms resource

use crate::http::ApiClient;
use crate::models::{CreateRoomRequest, Paginated, Room, UpdateRoomRequest};
use crate::utils::errors::Result;
use crate::utils::helpers::list_query;

/// CRUD over `/api/rooms`.
#[derive(Debug, Clone)]
pub struct RoomsService {
    client: ApiClient,
}

impl RoomsService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, page: u32, search: Option<&str>) -> Result<Paginated<Room>> {
        self.client.get("/api/rooms", &list_query(page, search)).await
    }

    /// Rooms belonging to one block, for block detail pages and room
    /// assignment pickers.
    pub async fn list_by_block(&self, block_id: i64, page: u32) -> Result<Paginated<Room>> {
        let mut query = list_query(page, None);
        query.push(("block_id".to_string(), block_id.to_string()));
        self.client.get("/api/rooms", &query).await
    }

    pub async fn get(&self, id: i64) -> Result<Room> {
        self.client.get(&format!("/api/rooms/{id}"), &[]).await
    }

    pub async fn create(&self, request: &CreateRoomRequest) -> Result<Room> {
        self.client.post("/api/rooms", request).await
    }

    pub async fn update(&self, id: i64, request: &UpdateRoomRequest) -> Result<Room> {
        self.client.put(&format!("/api/rooms/{id}"), request).await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.client.delete(&format!("/api/rooms/{id}")).await
    }
}

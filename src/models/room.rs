//! Room model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::block::Block;

/// Occupancy state tracked by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomStatus {
    Available,
    Occupied,
    Maintenance,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    pub id: i64,
    pub room_no: String,
    pub block_id: i64,
    pub capacity: u32,
    pub status: RoomStatus,
    /// Present when the endpoint eager-loads the relation.
    pub block: Option<Block>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRoomRequest {
    pub room_no: String,
    pub block_id: i64,
    pub capacity: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<RoomStatus>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateRoomRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_no: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<RoomStatus>,
}

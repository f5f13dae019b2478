//! Complaint model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::student::Student;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplainStatus {
    Pending,
    InProgress,
    Resolved,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Complain {
    pub id: i64,
    pub student_id: i64,
    pub title: String,
    pub description: String,
    pub status: ComplainStatus,
    /// Present when the endpoint eager-loads the relation.
    pub student: Option<Student>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateComplainRequest {
    pub student_id: i64,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateComplainRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ComplainStatus>,
}

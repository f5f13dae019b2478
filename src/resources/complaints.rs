//! Complaints resource

use crate::http::ApiClient;
use crate::models::{
    Complain, ComplainStatus, CreateComplainRequest, Paginated, UpdateComplainRequest,
};
use crate::utils::errors::Result;
use crate::utils::helpers::list_query;

/// CRUD over `/api/complains`.
#[derive(Debug, Clone)]
pub struct ComplaintsService {
    client: ApiClient,
}

impl ComplaintsService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, page: u32, search: Option<&str>) -> Result<Paginated<Complain>> {
        self.client.get("/api/complains", &list_query(page, search)).await
    }

    /// Complaints filed by one student, for the student portal view.
    pub async fn list_for_student(&self, student_id: i64, page: u32) -> Result<Paginated<Complain>> {
        let mut query = list_query(page, None);
        query.push(("student_id".to_string(), student_id.to_string()));
        self.client.get("/api/complains", &query).await
    }

    pub async fn get(&self, id: i64) -> Result<Complain> {
        self.client.get(&format!("/api/complains/{id}"), &[]).await
    }

    pub async fn create(&self, request: &CreateComplainRequest) -> Result<Complain> {
        self.client.post("/api/complains", request).await
    }

    pub async fn update(&self, id: i64, request: &UpdateComplainRequest) -> Result<Complain> {
        self.client.put(&format!("/api/complains/{id}"), request).await
    }

    /// Move a complaint through its lifecycle (pending → in_progress →
    /// resolved).
    pub async fn update_status(&self, id: i64, status: ComplainStatus) -> Result<Complain> {
        let request = UpdateComplainRequest {
            status: Some(status),
            ..Default::default()
        };
        self.update(id, &request).await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.client.delete(&format!("/api/complains/{id}")).await
    }
}

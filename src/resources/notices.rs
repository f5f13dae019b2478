//! Notices resource
//!
//! Notices target an audience (`all`, `student`, `staff`, a specific record
//! or a block) and may carry an attachment, in which case the create call
//! is multipart.

use reqwest::multipart::Form;
use tracing::debug;

use crate::http::ApiClient;
use crate::models::{CreateNoticeRequest, Notice, Paginated, UpdateNoticeRequest, UploadFile};
use crate::utils::errors::{ApiError, Result};
use crate::utils::helpers::list_query;

/// CRUD over `/api/notices`.
#[derive(Debug, Clone)]
pub struct NoticesService {
    client: ApiClient,
}

impl NoticesService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, page: u32, search: Option<&str>) -> Result<Paginated<Notice>> {
        self.client.get("/api/notices", &list_query(page, search)).await
    }

    pub async fn get(&self, id: i64) -> Result<Notice> {
        self.client.get(&format!("/api/notices/{id}"), &[]).await
    }

    pub async fn create(&self, request: &CreateNoticeRequest) -> Result<Notice> {
        Self::check_target(request)?;
        self.client.post("/api/notices", request).await
    }

    /// Create a notice with a file attachment; sent as multipart.
    pub async fn create_with_attachment(
        &self,
        request: &CreateNoticeRequest,
        attachment: UploadFile,
    ) -> Result<Notice> {
        Self::check_target(request)?;
        debug!(
            target_type = ?request.target_type,
            file = %attachment.file_name,
            "Creating notice with attachment"
        );
        let mut form = Form::new();
        for (name, value) in request.text_fields() {
            form = form.text(name, value);
        }
        form = form.part("attachment", attachment.into_part()?);
        self.client.post_form("/api/notices", form).await
    }

    pub async fn update(&self, id: i64, request: &UpdateNoticeRequest) -> Result<Notice> {
        self.client.put(&format!("/api/notices/{id}"), request).await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.client.delete(&format!("/api/notices/{id}")).await
    }

    // The server validates this too; rejecting locally saves a round-trip
    // and gives the caller a clear message.
    fn check_target(request: &CreateNoticeRequest) -> Result<()> {
        if request.target_type.needs_target_id() && request.target_id.is_none() {
            return Err(ApiError::InvalidInput(format!(
                "target_type {:?} requires a target_id",
                request.target_type
            )));
        }
        Ok(())
    }
}

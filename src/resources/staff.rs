//! Staff resource

use reqwest::multipart::Form;

use crate::http::ApiClient;
use crate::models::{CreateStaffRequest, Paginated, Staff, UpdateStaffRequest, UploadFile};
use crate::utils::errors::Result;
use crate::utils::helpers::list_query;

/// CRUD over `/api/staff`.
#[derive(Debug, Clone)]
pub struct StaffService {
    client: ApiClient,
}

impl StaffService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, page: u32, search: Option<&str>) -> Result<Paginated<Staff>> {
        self.client.get("/api/staff", &list_query(page, search)).await
    }

    pub async fn get(&self, id: i64) -> Result<Staff> {
        self.client.get(&format!("/api/staff/{id}"), &[]).await
    }

    pub async fn create(&self, request: &CreateStaffRequest) -> Result<Staff> {
        self.client.post("/api/staff", request).await
    }

    pub async fn create_with_photo(
        &self,
        request: &CreateStaffRequest,
        photo: Option<UploadFile>,
    ) -> Result<Staff> {
        let mut form = Form::new();
        for (name, value) in request.text_fields() {
            form = form.text(name, value);
        }
        if let Some(photo) = photo {
            form = form.part("photo", photo.into_part()?);
        }
        self.client.post_form("/api/staff", form).await
    }

    pub async fn update(&self, id: i64, request: &UpdateStaffRequest) -> Result<Staff> {
        self.client.put(&format!("/api/staff/{id}"), request).await
    }

    pub async fn update_with_photo(
        &self,
        id: i64,
        request: &UpdateStaffRequest,
        photo: Option<UploadFile>,
    ) -> Result<Staff> {
        let mut form = Form::new();
        for (name, value) in request.text_fields() {
            form = form.text(name, value);
        }
        if let Some(photo) = photo {
            form = form.part("photo", photo.into_part()?);
        }
        self.client.put_form(&format!("/api/staff/{id}"), form).await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.client.delete(&format!("/api/staff/{id}")).await
    }
}

//! Students resource
//!
//! Plain CRUD plus multipart variants for the endpoints that accept a
//! profile photo. Multipart updates go through the `_method=PUT` override
//! handled by `ApiClient::put_form`.

use reqwest::multipart::Form;

use crate::http::ApiClient;
use crate::models::{
    CreateStudentRequest, Paginated, Student, UpdateStudentRequest, UploadFile,
};
use crate::utils::errors::Result;
use crate::utils::helpers::list_query;

/// CRUD over `/api/students`.
#[derive(Debug, Clone)]
pub struct StudentsService {
    client: ApiClient,
}

impl StudentsService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, page: u32, search: Option<&str>) -> Result<Paginated<Student>> {
        self.client.get("/api/students", &list_query(page, search)).await
    }

    pub async fn get(&self, id: i64) -> Result<Student> {
        self.client.get(&format!("/api/students/{id}"), &[]).await
    }

    pub async fn create(&self, request: &CreateStudentRequest) -> Result<Student> {
        self.client.post("/api/students", request).await
    }

    /// Create with an optional profile photo; always sent as multipart.
    pub async fn create_with_photo(
        &self,
        request: &CreateStudentRequest,
        photo: Option<UploadFile>,
    ) -> Result<Student> {
        let mut form = Form::new();
        for (name, value) in request.text_fields() {
            form = form.text(name, value);
        }
        if let Some(photo) = photo {
            form = form.part("photo", photo.into_part()?);
        }
        self.client.post_form("/api/students", form).await
    }

    pub async fn update(&self, id: i64, request: &UpdateStudentRequest) -> Result<Student> {
        self.client.put(&format!("/api/students/{id}"), request).await
    }

    /// Update with an optional replacement photo; sent as multipart with
    /// the `_method=PUT` override field.
    pub async fn update_with_photo(
        &self,
        id: i64,
        request: &UpdateStudentRequest,
        photo: Option<UploadFile>,
    ) -> Result<Student> {
        let mut form = Form::new();
        for (name, value) in request.text_fields() {
            form = form.text(name, value);
        }
        if let Some(photo) = photo {
            form = form.part("photo", photo.into_part()?);
        }
        self.client.put_form(&format!("/api/students/{id}"), form).await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.client.delete(&format!("/api/students/{id}")).await
    }
}

//! Finances resource: incomes and suppliers

use crate::http::ApiClient;
use crate::models::{
    CreateIncomeRequest, CreateSupplierRequest, Income, Paginated, Supplier,
    UpdateIncomeRequest, UpdateSupplierRequest,
};
use crate::utils::errors::Result;
use crate::utils::helpers::list_query;

/// CRUD over `/api/incomes` and `/api/suppliers`.
#[derive(Debug, Clone)]
pub struct FinancesService {
    client: ApiClient,
}

impl FinancesService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn incomes(&self, page: u32, search: Option<&str>) -> Result<Paginated<Income>> {
        self.client.get("/api/incomes", &list_query(page, search)).await
    }

    pub async fn income(&self, id: i64) -> Result<Income> {
        self.client.get(&format!("/api/incomes/{id}"), &[]).await
    }

    pub async fn create_income(&self, request: &CreateIncomeRequest) -> Result<Income> {
        self.client.post("/api/incomes", request).await
    }

    pub async fn update_income(&self, id: i64, request: &UpdateIncomeRequest) -> Result<Income> {
        self.client.put(&format!("/api/incomes/{id}"), request).await
    }

    pub async fn delete_income(&self, id: i64) -> Result<()> {
        self.client.delete(&format!("/api/incomes/{id}")).await
    }

    pub async fn suppliers(&self, page: u32, search: Option<&str>) -> Result<Paginated<Supplier>> {
        self.client.get("/api/suppliers", &list_query(page, search)).await
    }

    pub async fn supplier(&self, id: i64) -> Result<Supplier> {
        self.client.get(&format!("/api/suppliers/{id}"), &[]).await
    }

    pub async fn create_supplier(&self, request: &CreateSupplierRequest) -> Result<Supplier> {
        self.client.post("/api/suppliers", request).await
    }

    pub async fn update_supplier(
        &self,
        id: i64,
        request: &UpdateSupplierRequest,
    ) -> Result<Supplier> {
        self.client.put(&format!("/api/suppliers/{id}"), request).await
    }

    pub async fn delete_supplier(&self, id: i64) -> Result<()> {
        self.client.delete(&format!("/api/suppliers/{id}")).await
    }
}

//! Check-in/check-out resource
//!
//! Movement records under `/api/check-in-outs` and the admin-configured
//! checkout rules under `/api/checkout-rules`. Rule evaluation (whether a
//! given check-out is inside the permitted window) happens server-side; a
//! rejected check-out surfaces as a 422 with field messages.

use crate::http::ApiClient;
use crate::models::{
    CheckInCheckOut, CheckOutRequest, CheckoutRule, CreateCheckoutRuleRequest, Paginated,
    UpdateCheckoutRuleRequest,
};
use crate::utils::errors::Result;
use crate::utils::helpers::list_query;

/// Check-in/check-out records and checkout rules.
#[derive(Debug, Clone)]
pub struct CheckInOutService {
    client: ApiClient,
}

impl CheckInOutService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, page: u32, search: Option<&str>) -> Result<Paginated<CheckInCheckOut>> {
        self.client
            .get("/api/check-in-outs", &list_query(page, search))
            .await
    }

    pub async fn get(&self, id: i64) -> Result<CheckInCheckOut> {
        self.client.get(&format!("/api/check-in-outs/{id}"), &[]).await
    }

    /// Record a student leaving the hostel.
    pub async fn check_out(&self, request: &CheckOutRequest) -> Result<CheckInCheckOut> {
        self.client.post("/api/check-in-outs", request).await
    }

    /// Record the return for an open check-out.
    pub async fn check_in(&self, id: i64) -> Result<CheckInCheckOut> {
        self.client
            .post(&format!("/api/check-in-outs/{id}/check-in"), &serde_json::json!({}))
            .await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.client.delete(&format!("/api/check-in-outs/{id}")).await
    }

    pub async fn rules(&self, page: u32) -> Result<Paginated<CheckoutRule>> {
        self.client
            .get("/api/checkout-rules", &list_query(page, None))
            .await
    }

    pub async fn create_rule(&self, request: &CreateCheckoutRuleRequest) -> Result<CheckoutRule> {
        self.client.post("/api/checkout-rules", request).await
    }

    pub async fn update_rule(
        &self,
        id: i64,
        request: &UpdateCheckoutRuleRequest,
    ) -> Result<CheckoutRule> {
        self.client.put(&format!("/api/checkout-rules/{id}"), request).await
    }

    pub async fn delete_rule(&self, id: i64) -> Result<()> {
        self.client.delete(&format!("/api/checkout-rules/{id}")).await
    }
}

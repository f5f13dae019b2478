//! Staff model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Staff {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub designation: Option<String>,
    pub photo: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateStaffRequest {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub designation: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateStaffRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub designation: Option<String>,
}

impl CreateStaffRequest {
    pub fn text_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("name", self.name.clone()),
            ("email", self.email.clone()),
        ];
        if let Some(phone) = &self.phone {
            fields.push(("phone", phone.clone()));
        }
        if let Some(designation) = &self.designation {
            fields.push(("designation", designation.clone()));
        }
        fields
    }
}

impl UpdateStaffRequest {
    pub fn text_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = Vec::new();
        if let Some(name) = &self.name {
            fields.push(("name", name.clone()));
        }
        if let Some(email) = &self.email {
            fields.push(("email", email.clone()));
        }
        if let Some(phone) = &self.phone {
            fields.push(("phone", phone.clone()));
        }
        if let Some(designation) = &self.designation {
            fields.push(("designation", designation.clone()));
        }
        fields
    }
}

//! Student model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::room::Room;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    /// Path relative to the server's public storage, resolved for display
    /// with `ApiClient::file_url`.
    pub photo: Option<String>,
    pub room_id: Option<i64>,
    /// Present when the endpoint eager-loads the relation
    /// (`student.room.block`).
    pub room: Option<Room>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateStudentRequest {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_id: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateStudentRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_id: Option<i64>,
}

impl CreateStudentRequest {
    /// Text fields for the multipart variant of the create endpoint.
    pub fn text_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("name", self.name.clone()),
            ("email", self.email.clone()),
        ];
        if let Some(phone) = &self.phone {
            fields.push(("phone", phone.clone()));
        }
        if let Some(address) = &self.address {
            fields.push(("address", address.clone()));
        }
        if let Some(room_id) = self.room_id {
            fields.push(("room_id", room_id.to_string()));
        }
        fields
    }
}

impl UpdateStudentRequest {
    /// Text fields for the multipart variant of the update endpoint.
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
        if let Some(address) = &self.address {
            fields.push(("address", address.clone()));
        }
        if let Some(room_id) = self.room_id {
            fields.push(("room_id", room_id.to_string()));
        }
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_serializes_only_set_fields() {
        let req = UpdateStudentRequest {
            name: Some("Alice".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["name"], "Alice");
        assert!(json.get("email").is_none());
    }

    #[test]
    fn test_create_text_fields() {
        let req = CreateStudentRequest {
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            phone: None,
            address: None,
            room_id: Some(7),
        };
        let fields = req.text_fields();
        assert!(fields.contains(&("room_id", "7".to_string())));
        assert!(!fields.iter().any(|(k, _)| *k == "phone"));
    }
}

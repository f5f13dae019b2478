//! Notice model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Audience selector for a notice.
///
/// `SpecificStudent`, `SpecificStaff` and `Block` require a `target_id`
/// naming the record; the other variants broadcast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetType {
    All,
    Student,
    Staff,
    SpecificStudent,
    SpecificStaff,
    Block,
}

impl TargetType {
    /// Whether this target requires an accompanying `target_id`.
    pub fn needs_target_id(&self) -> bool {
        matches!(
            self,
            TargetType::SpecificStudent | TargetType::SpecificStaff | TargetType::Block
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notice {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub target_type: TargetType,
    pub target_id: Option<i64>,
    /// Attachment path relative to the server's public storage.
    pub attachment: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateNoticeRequest {
    pub title: String,
    pub description: String,
    pub target_type: TargetType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_id: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateNoticeRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_type: Option<TargetType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_id: Option<i64>,
}

impl CreateNoticeRequest {
    /// Wire name of the target type, for multipart fields.
    fn target_type_field(&self) -> String {
        match self.target_type {
            TargetType::All => "all",
            TargetType::Student => "student",
            TargetType::Staff => "staff",
            TargetType::SpecificStudent => "specific_student",
            TargetType::SpecificStaff => "specific_staff",
            TargetType::Block => "block",
        }
        .to_string()
    }

    pub fn text_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("title", self.title.clone()),
            ("description", self.description.clone()),
            ("target_type", self.target_type_field()),
        ];
        if let Some(target_id) = self.target_id {
            fields.push(("target_id", target_id.to_string()));
        }
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_type_wire_names() {
        assert_eq!(
            serde_json::to_string(&TargetType::SpecificStudent).unwrap(),
            r#""specific_student""#
        );
        let parsed: TargetType = serde_json::from_str(r#""block""#).unwrap();
        assert_eq!(parsed, TargetType::Block);
    }

    #[test]
    fn test_needs_target_id() {
        assert!(TargetType::SpecificStaff.needs_target_id());
        assert!(TargetType::Block.needs_target_id());
        assert!(!TargetType::All.needs_target_id());
        assert!(!TargetType::Student.needs_target_id());
    }
}

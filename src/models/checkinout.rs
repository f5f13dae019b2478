//! Check-in/check-out records and checkout rules

use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use super::student::Student;

/// State of a check-out record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckStatus {
    /// Student is currently out of the hostel.
    CheckedOut,
    /// Student has returned.
    CheckedIn,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckInCheckOut {
    pub id: i64,
    pub student_id: i64,
    pub reason: Option<String>,
    pub status: CheckStatus,
    pub checked_out_at: DateTime<Utc>,
    pub checked_in_at: Option<DateTime<Utc>>,
    /// Present when the endpoint eager-loads the relation.
    pub student: Option<Student>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckOutRequest {
    pub student_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Who a checkout rule applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleTarget {
    All,
    Student,
    Staff,
}

/// Admin-configured policy governing permitted check-out/check-in windows.
///
/// The server evaluates the rule; the client only manages the records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutRule {
    pub id: i64,
    pub title: String,
    pub applies_to: RuleTarget,
    /// Earliest time of day a check-out is permitted.
    pub window_start: NaiveTime,
    /// Latest time of day a check-in is permitted.
    pub window_end: NaiveTime,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCheckoutRuleRequest {
    pub title: String,
    pub applies_to: RuleTarget,
    pub window_start: NaiveTime,
    pub window_end: NaiveTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateCheckoutRuleRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applies_to: Option<RuleTarget>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window_start: Option<NaiveTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window_end: Option<NaiveTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_time_window_wire_format() {
        let rule: CheckoutRule = serde_json::from_str(
            r#"{
                "id": 1,
                "title": "Weeknights",
                "applies_to": "student",
                "window_start": "06:00:00",
                "window_end": "21:30:00",
                "is_active": true,
                "created_at": "2024-01-01T00:00:00Z",
                "updated_at": "2024-01-01T00:00:00Z"
            }"#,
        )
        .unwrap();
        assert_eq!(rule.applies_to, RuleTarget::Student);
        assert_eq!(rule.window_end.to_string(), "21:30:00");
    }

    #[test]
    fn test_check_status_wire_names() {
        assert_eq!(
            serde_json::to_string(&CheckStatus::CheckedOut).unwrap(),
            r#""checked_out""#
        );
    }
}

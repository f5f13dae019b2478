//! Shared test helpers
//!
//! Wiremock-backed mock API server plus JSON fixtures for the resources
//! exercised by the integration tests.

pub mod api_mock;

pub use api_mock::HostelMock;

use serde_json::{json, Value};

/// Fixed timestamps used across fixtures.
pub fn timestamps() -> (Value, Value) {
    (
        json!("2024-01-01T00:00:00Z"),
        json!("2024-01-02T00:00:00Z"),
    )
}

/// Wrap items in the Laravel pagination envelope.
pub fn paginated(data: Vec<Value>, current_page: u32, last_page: u32, total: u64) -> Value {
    json!({
        "data": data,
        "current_page": current_page,
        "last_page": last_page,
        "per_page": 10,
        "total": total,
    })
}

pub fn block_json(id: i64, name: &str) -> Value {
    let (created, updated) = timestamps();
    json!({
        "id": id,
        "name": name,
        "description": null,
        "created_at": created,
        "updated_at": updated,
    })
}

pub fn student_json(id: i64, name: &str) -> Value {
    let (created, updated) = timestamps();
    json!({
        "id": id,
        "name": name,
        "email": format!("{}@example.com", name.to_lowercase()),
        "phone": null,
        "address": null,
        "photo": null,
        "room_id": null,
        "room": null,
        "created_at": created,
        "updated_at": updated,
    })
}

pub fn notice_json(id: i64, title: &str, target_type: &str) -> Value {
    let (created, updated) = timestamps();
    json!({
        "id": id,
        "title": title,
        "description": "details",
        "target_type": target_type,
        "target_id": null,
        "attachment": null,
        "created_at": created,
        "updated_at": updated,
    })
}

pub fn complain_json(id: i64, status: &str) -> Value {
    let (created, updated) = timestamps();
    json!({
        "id": id,
        "student_id": 1,
        "title": "Broken fan",
        "description": "Room 12 ceiling fan is dead",
        "status": status,
        "student": null,
        "created_at": created,
        "updated_at": updated,
    })
}

pub fn check_record_json(id: i64, status: &str) -> Value {
    let (created, updated) = timestamps();
    json!({
        "id": id,
        "student_id": 1,
        "reason": "weekend leave",
        "status": status,
        "checked_out_at": created,
        "checked_in_at": if status == "checked_in" { updated.clone() } else { Value::Null },
        "student": null,
        "created_at": created,
        "updated_at": updated,
    })
}

pub fn account_user_json(id: i64, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "email": format!("{}@example.com", name.to_lowercase()),
        "role": "admin",
    })
}

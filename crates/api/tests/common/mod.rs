//! Common test utilities for integration tests.
//!
//! Every test drives [`OgsClient`] through a [`MockTransport`] and inspects
//! the recorded requests, so no backend has to be running.

// Not every helper is used by every test binary.
#![allow(dead_code)]

use std::sync::Arc;

use ogs_api::{MockTransport, OgsClient};
use serde_json::{json, Value};

/// Creates a client together with the mock it talks to.
pub fn mock_client() -> (OgsClient, Arc<MockTransport>) {
    let mock = Arc::new(MockTransport::new());
    let client = OgsClient::new(mock.clone());
    (client, mock)
}

/// `{ status: "success", data }` envelope used by most endpoints.
pub fn success(data: Value) -> Value {
    json!({ "status": "success", "data": data })
}

/// `{ success: true, message, data }` envelope used by write endpoints.
pub fn wrapped(message: &str, data: Value) -> Value {
    json!({ "success": true, "message": message, "data": data })
}

pub fn paginated(data: Value, current_page: u32, total_pages: u32, total_records: u64) -> Value {
    json!({
        "status": "success",
        "data": data,
        "pagination": {
            "current_page": current_page,
            "page_size": 50,
            "total_pages": total_pages,
            "total_records": total_records
        }
    })
}

/// Backend group "Klasse 3a" with a room, a representative and two teachers.
pub fn backend_group_3a() -> Value {
    json!({
        "id": 7,
        "name": "Klasse 3a",
        "room_id": 12,
        "room": { "id": 12, "name": "Raum 101" },
        "representative_id": 5,
        "representative": {
            "id": 5,
            "staff_id": 50,
            "first_name": "Maria",
            "last_name": "Schmidt",
            "full_name": "Maria Schmidt"
        },
        "teachers": [
            { "id": 5, "first_name": "Maria", "last_name": "Schmidt" },
            { "id": 6, "first_name": "Jonas", "last_name": "Weber" }
        ],
        "student_count": 18,
        "created_at": "2025-01-10T08:00:00Z",
        "updated_at": "2025-01-12T08:00:00Z"
    })
}

pub fn backend_student(id: i64, first_name: &str, second_name: &str) -> Value {
    json!({
        "id": id,
        "first_name": first_name,
        "second_name": second_name,
        "school_class": "3a",
        "current_location": "in_house",
        "group_id": 7,
        "group_name": "Klasse 3a"
    })
}

pub fn backend_room(id: i64, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "building": "Hauptgebäude",
        "floor": 1,
        "capacity": 25,
        "is_occupied": false
    })
}

pub fn backend_suggestion(id: i64, user_vote: Option<&str>) -> Value {
    json!({
        "id": id,
        "title": "Mehr Brettspiele",
        "description": "Für die Regentage",
        "author_id": 3,
        "author_name": "Eva Klein",
        "status": "open",
        "score": 4,
        "upvotes": 5,
        "downvotes": 1,
        "comment_count": 0,
        "user_vote": user_vote
    })
}

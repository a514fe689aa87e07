//! Integration tests for the group and combined group fetch wrappers.

mod common;

use common::{backend_group_3a, mock_client, success, wrapped};
use domain::models::{AccessPolicy, Group, PartialCombinedGroup, PartialGroup};
use ogs_api::{ApiError, CombinedGroupFilters, GroupFilters};
use serde_json::json;

// ============================================================================
// Group Listing Tests
// ============================================================================

#[tokio::test]
async fn test_list_groups_maps_klasse_3a() {
    let (client, mock) = mock_client();
    mock.respond_with(success(json!([backend_group_3a()])));

    let groups = client
        .list_groups(&GroupFilters {
            search: Some("Klasse".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(groups.len(), 1);
    let group = &groups[0];
    assert_eq!(group.id, "7");
    assert_eq!(group.room_id.as_deref(), Some("12"));
    assert_eq!(group.room_name.as_deref(), Some("Raum 101"));
    assert_eq!(group.representative_name.as_deref(), Some("Maria Schmidt"));
    assert_eq!(
        group.teacher_ids,
        Some(vec!["5".to_string(), "6".to_string()])
    );

    let request = mock.last_request().unwrap();
    assert_eq!(request.method, "GET");
    assert_eq!(request.path, "/api/groups");
    assert_eq!(request.query, "search=Klasse");
}

#[tokio::test]
async fn test_list_groups_bare_array_and_wrapped_are_equal() {
    let (client, mock) = mock_client();
    mock.respond_with(json!([backend_group_3a()]))
        .respond_with(success(json!([backend_group_3a()])));

    let bare = client.list_groups(&GroupFilters::default()).await.unwrap();
    let wrapped = client.list_groups(&GroupFilters::default()).await.unwrap();
    assert_eq!(bare, wrapped);
    assert_eq!(mock.requests()[0].query, "");
}

#[tokio::test]
async fn test_list_groups_invalid_payload_yields_empty_list() {
    let (client, mock) = mock_client();
    mock.respond_with(success(json!("invalid")));

    let groups = client.list_groups(&GroupFilters::default()).await.unwrap();
    assert!(groups.is_empty());
}

#[tokio::test]
async fn test_list_groups_failure_envelope_is_an_error() {
    let (client, mock) = mock_client();
    mock.respond_with(json!({"success": false, "message": "Keine Berechtigung"}));

    let result = client.list_groups(&GroupFilters::default()).await;
    assert!(matches!(result, Err(ApiError::Mapping(_))));
}

// ============================================================================
// Single Group Tests
// ============================================================================

#[tokio::test]
async fn test_get_group() {
    let (client, mock) = mock_client();
    mock.respond_with(wrapped("Group retrieved", backend_group_3a()));

    let group = client.get_group("7").await.unwrap();
    assert_eq!(group.name, "Klasse 3a");
    assert_eq!(mock.last_request().unwrap().path, "/api/groups/7");
}

#[tokio::test]
async fn test_get_group_invalid_id_sends_nothing() {
    let (client, mock) = mock_client();

    let result = client.get_group("7a").await;
    assert!(matches!(result, Err(ApiError::Validation(_))));
    assert!(mock.requests().is_empty());
}

#[tokio::test]
async fn test_get_group_not_found() {
    let (client, mock) = mock_client();
    mock.fail_with(ApiError::NotFound("Group not found".to_string()));

    let result = client.get_group("99").await;
    assert!(matches!(result, Err(ApiError::NotFound(_))));
}

#[tokio::test]
async fn test_get_group_students() {
    let (client, mock) = mock_client();
    mock.respond_with(success(json!([
        {"id": 1, "name": "Lena Fischer", "school_class": "3a", "current_location": "home"},
        {"id": 2, "name": "", "current_location": null}
    ])));

    let students = client.get_group_students("7").await.unwrap();
    assert_eq!(students.len(), 2);
    assert_eq!(students[0].current_location, "Zuhause");
    assert_eq!(students[1].name, "Unnamed Student");
    assert_eq!(students[1].current_location, "Unbekannt");
    assert_eq!(mock.last_request().unwrap().path, "/api/groups/7/students");
}

// ============================================================================
// Group Write Tests
// ============================================================================

#[tokio::test]
async fn test_create_group_sends_only_present_fields() {
    let (client, mock) = mock_client();
    mock.respond_with(wrapped("Group created", json!({"id": 8, "name": "Klasse 4b"})));

    let created = client
        .create_group(&PartialGroup {
            name: Some("Klasse 4b".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(created, Group::new("8", "Klasse 4b"));
    let request = mock.last_request().unwrap();
    assert_eq!(request.method, "POST");
    assert_eq!(request.body, Some(json!({"name": "Klasse 4b"})));
}

#[tokio::test]
async fn test_update_group_converts_ids() {
    let (client, mock) = mock_client();
    mock.respond_with(success(backend_group_3a()));

    client
        .update_group(
            "7",
            &PartialGroup {
                room_id: Some("12".to_string()),
                teacher_ids: Some(vec!["5".to_string(), "6".to_string()]),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let request = mock.last_request().unwrap();
    assert_eq!(request.method, "PUT");
    assert_eq!(request.path, "/api/groups/7");
    assert_eq!(
        request.body,
        Some(json!({"room_id": 12, "teacher_ids": [5, 6]}))
    );
}

#[tokio::test]
async fn test_update_group_rejects_invalid_room_id() {
    let (client, mock) = mock_client();

    let result = client
        .update_group(
            "7",
            &PartialGroup {
                room_id: Some("Raum 101".to_string()),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(ApiError::Validation(_))));
    assert!(mock.requests().is_empty());
}

#[tokio::test]
async fn test_delete_group() {
    let (client, mock) = mock_client();

    client.delete_group("7").await.unwrap();

    let request = mock.last_request().unwrap();
    assert_eq!(request.method, "DELETE");
    assert_eq!(request.path, "/api/groups/7");
}

// ============================================================================
// Combined Group Tests
// ============================================================================

#[tokio::test]
async fn test_list_combined_groups() {
    let (client, mock) = mock_client();
    mock.respond_with(success(json!([{
        "id": 3,
        "name": "Nachmittag",
        "is_active": true,
        "access_policy": "first",
        "groups": [backend_group_3a()]
    }])));

    let combined = client
        .list_combined_groups(&CombinedGroupFilters {
            is_active: Some(true),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(combined.len(), 1);
    assert_eq!(combined[0].access_policy, AccessPolicy::First);
    assert_eq!(combined[0].groups.as_ref().map(Vec::len), Some(1));

    let request = mock.last_request().unwrap();
    assert_eq!(request.path, "/api/combined-groups");
    assert_eq!(request.query, "is_active=true");
}

#[tokio::test]
async fn test_create_combined_group_expands_nested_groups() {
    let (client, mock) = mock_client();
    mock.respond_with(success(json!({
        "id": 4,
        "name": "Ferien",
        "is_active": true,
        "access_policy": "manual"
    })));

    let mut group = Group::new("7", "Klasse 3a");
    group.room_id = Some("12".to_string());

    let created = client
        .create_combined_group(&PartialCombinedGroup {
            name: Some("Ferien".to_string()),
            access_policy: Some(AccessPolicy::Manual),
            groups: Some(vec![group]),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(created.id, "4");

    let body = mock.last_request().unwrap().body.unwrap();
    assert_eq!(body["access_policy"], "manual");
    assert_eq!(body["groups"][0]["id"], 7);
    assert_eq!(body["groups"][0]["room_id"], 12);
    assert!(body["groups"][0]["created_at"].is_string());
}

#[tokio::test]
async fn test_delete_combined_group_invalid_id() {
    let (client, mock) = mock_client();

    let result = client.delete_combined_group("").await;
    assert!(matches!(result, Err(ApiError::Validation(_))));
    assert!(mock.requests().is_empty());
}

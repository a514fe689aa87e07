//! Response envelope detection and unwrapping.
//!
//! Endpoints answer with a bare record, a bare array, `{ data }`,
//! `{ success, message, data }` or the paginated
//! `{ status, data, pagination, message }` shape.
//!
//! An object counts as an envelope only when it has a `data` key and every
//! other key is one of the envelope keys below. A record that carries its
//! own `data` field next to ordinary fields such as `id` is therefore never
//! unwrapped. A record whose only keys are envelope keys cannot be told apart
//! from an envelope and will be unwrapped; no backend record has that shape
//! today, and `tests::test_records_with_data_field_are_not_unwrapped` lists
//! the ones that must stay intact.
//!
//! The converse also holds: a wrapper carrying any key outside that set
//! (`timestamp`, `meta`, ...) is treated as a payload. A list endpoint
//! answering that way maps to an empty list plus one shape-mismatch report.
//! New envelope keys must be added to `ENVELOPE_KEYS`.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use shared::{Page, Pagination};

use crate::collection::map_collection;
use crate::diagnostics::DiagnosticSink;
use crate::error::MappingError;

const ENVELOPE_KEYS: [&str; 5] = ["data", "success", "status", "message", "pagination"];

/// `{ data: { success, message, data } }` is the deepest nesting in use.
const MAX_ENVELOPE_DEPTH: usize = 2;

fn has_only_envelope_keys(map: &Map<String, Value>) -> bool {
    map.keys().all(|key| ENVELOPE_KEYS.contains(&key.as_str()))
}

fn is_envelope_map(map: &Map<String, Value>) -> bool {
    map.contains_key("data") && has_only_envelope_keys(map)
}

/// Returns true if `value` is a response envelope rather than a payload.
pub fn is_envelope(value: &Value) -> bool {
    matches!(value, Value::Object(map) if is_envelope_map(map))
}

/// Returns the backend's message if `value` is a failure envelope.
fn rejection(value: &Value) -> Option<String> {
    let Value::Object(map) = value else {
        return None;
    };
    if !has_only_envelope_keys(map) {
        return None;
    }

    let failed = map.get("success") == Some(&Value::Bool(false))
        || map.get("status").and_then(Value::as_str) == Some("error");
    if !failed {
        return None;
    }

    Some(
        map.get("message")
            .and_then(Value::as_str)
            .unwrap_or("Request failed")
            .to_string(),
    )
}

/// Unwraps one envelope layer, returning the payload and the pagination block.
fn unwrap_layer(value: Value) -> Result<(Value, Option<Value>), Value> {
    match value {
        Value::Object(mut map) if is_envelope_map(&map) => {
            let pagination = map.remove("pagination").filter(|p| !p.is_null());
            Ok((map.remove("data").unwrap_or(Value::Null), pagination))
        }
        other => Err(other),
    }
}

/// Extracts the payload from a possibly wrapped response.
///
/// Values that are not envelopes are returned as they are.
pub fn extract_api_data(value: Value) -> Value {
    let mut current = value;
    for _ in 0..MAX_ENVELOPE_DEPTH {
        match unwrap_layer(current) {
            Ok((inner, _)) => current = inner,
            Err(payload) => return payload,
        }
    }
    current
}

/// Like [`extract_api_data`], but reports failure envelopes.
///
/// A `{ success: false, message }` or `{ status: "error", message }` envelope
/// at any layer is returned as [`MappingError::Rejected`].
pub fn try_extract_api_data(value: Value) -> Result<Value, MappingError> {
    let mut current = value;
    for _ in 0..MAX_ENVELOPE_DEPTH {
        if let Some(message) = rejection(&current) {
            return Err(MappingError::Rejected(message));
        }
        match unwrap_layer(current) {
            Ok((inner, _)) => current = inner,
            Err(payload) => return Ok(payload),
        }
    }
    Ok(current)
}

/// Extracts and decodes the payload of a single-record response.
pub fn decode_api_data<T: DeserializeOwned>(
    value: Value,
    entity: &'static str,
) -> Result<T, MappingError> {
    serde_json::from_value(try_extract_api_data(value)?).map_err(MappingError::decode(entity))
}

/// Extracts the items and pagination of a list response in one step.
///
/// A bare array yields a page without pagination. A payload that is not an
/// array is reported to `sink` and yields an empty page; a pagination block
/// that cannot be decoded is dropped with a warning.
pub fn extract_paginated<T: DeserializeOwned>(
    value: Value,
    context: &str,
    sink: &dyn DiagnosticSink,
) -> Result<Page<T>, MappingError> {
    let mut current = value;
    let mut raw_pagination = None;
    for _ in 0..MAX_ENVELOPE_DEPTH {
        if let Some(message) = rejection(&current) {
            return Err(MappingError::Rejected(message));
        }
        match unwrap_layer(current) {
            Ok((inner, pagination)) => {
                current = inner;
                raw_pagination = pagination.or(raw_pagination);
            }
            Err(payload) => {
                current = payload;
                break;
            }
        }
    }

    let pagination = raw_pagination.and_then(|raw| {
        serde_json::from_value::<Pagination>(raw)
            .map_err(|e| {
                tracing::warn!(context = %context, error = %e, "Ignoring malformed pagination block");
            })
            .ok()
    });

    Ok(Page {
        items: map_collection(&current, context, sink, |item: T| item),
        pagination,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::RecordingSink;
    use serde_json::json;

    #[test]
    fn test_bare_values_are_returned_unchanged() {
        for value in [
            json!({"id": 1, "name": "Klasse 3a"}),
            json!([1, 2, 3]),
            json!("text"),
            json!(null),
        ] {
            assert_eq!(extract_api_data(value.clone()), value);
        }
    }

    #[test]
    fn test_data_wrapper_is_unwrapped() {
        let record = json!({"id": 1, "name": "Klasse 3a"});
        assert_eq!(extract_api_data(json!({"data": record.clone()})), record);
    }

    #[test]
    fn test_success_envelope_is_unwrapped() {
        let record = json!({"id": 1});
        let response = json!({"success": true, "message": "ok", "data": record.clone()});
        assert_eq!(extract_api_data(response), record);
    }

    #[test]
    fn test_nested_success_envelope_is_unwrapped() {
        let record = json!({"id": 1});
        let response = json!({"data": {"success": true, "message": "ok", "data": record.clone()}});
        assert_eq!(extract_api_data(response), record);
    }

    #[test]
    fn test_unwrapping_stops_at_max_depth() {
        let response = json!({"data": {"data": {"data": {"id": 1}}}});
        assert_eq!(extract_api_data(response), json!({"data": {"id": 1}}));
    }

    #[test]
    fn test_records_with_data_field_are_not_unwrapped() {
        let records = [
            json!({"id": 1, "name": "Klasse 3a", "data": {"note": "x"}}),
            json!({"id": 7, "title": "Mehr Spiele", "data": null}),
            json!({"id": 3, "student_id": 42, "policy_version": "1.0", "data": []}),
            json!({"name": "Raum 101", "data": "blob"}),
        ];
        for record in records {
            assert!(!is_envelope(&record));
            assert_eq!(extract_api_data(record.clone()), record);
        }
    }

    #[test]
    fn test_envelope_key_only_record_is_indistinguishable() {
        // Residual ambiguity: a payload made only of envelope keys is unwrapped.
        let value = json!({"status": "draft", "data": {"x": 1}});
        assert!(is_envelope(&value));
        assert_eq!(extract_api_data(value), json!({"x": 1}));
    }

    #[test]
    fn test_wrapper_with_unknown_key_is_not_unwrapped() {
        let response = json!({
            "status": "success",
            "data": [{"id": 1}],
            "timestamp": "2025-01-15T08:00:00Z"
        });
        assert!(!is_envelope(&response));
        assert_eq!(extract_api_data(response.clone()), response);

        let sink = RecordingSink::new();
        let page = extract_paginated::<Value>(response.clone(), "rows", &sink).unwrap();
        assert!(page.is_empty());
        assert_eq!(
            sink.entries(),
            vec![("Expected array for rows, got:".to_string(), response)]
        );
    }

    #[test]
    fn test_decode_api_data_rejection() {
        let err = decode_api_data::<Value>(
            json!({"success": false, "message": "Group not found"}),
            "group",
        )
        .unwrap_err();
        assert!(matches!(err, MappingError::Rejected(ref m) if m == "Group not found"));

        let err = decode_api_data::<Value>(json!({"status": "error"}), "group").unwrap_err();
        assert!(matches!(err, MappingError::Rejected(ref m) if m == "Request failed"));
    }

    #[test]
    fn test_try_extract_api_data() {
        assert_eq!(
            try_extract_api_data(json!({"status": "success", "data": [1, 2]})).unwrap(),
            json!([1, 2])
        );
        let err = try_extract_api_data(json!({"data": {"success": false, "message": "Nope"}}))
            .unwrap_err();
        assert!(matches!(err, MappingError::Rejected(ref m) if m == "Nope"));
    }

    #[test]
    fn test_decode_api_data_decode_error() {
        let err = decode_api_data::<i64>(json!({"data": "x"}), "count").unwrap_err();
        assert!(matches!(err, MappingError::Decode { entity: "count", .. }));
    }

    #[test]
    fn test_extract_paginated_envelope() {
        let sink = RecordingSink::new();
        let response = json!({
            "status": "success",
            "data": [{"id": 1}, {"id": 2}],
            "pagination": {
                "current_page": 1,
                "page_size": 2,
                "total_pages": 5,
                "total_records": 10
            },
            "message": "Students retrieved"
        });

        let page: Page<Value> = extract_paginated(response, "students", &sink).unwrap();
        assert_eq!(page.items, vec![json!({"id": 1}), json!({"id": 2})]);
        let pagination = page.pagination.unwrap();
        assert_eq!(pagination.total_pages, 5);
        assert_eq!(pagination.total_records, 10);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_extract_paginated_bare_array() {
        let sink = RecordingSink::new();
        let page: Page<Value> = extract_paginated(json!([{"id": 1}]), "students", &sink).unwrap();
        assert_eq!(page.len(), 1);
        assert!(page.pagination.is_none());
    }

    #[test]
    fn test_extract_paginated_non_array_payload() {
        let sink = RecordingSink::new();
        let response = json!({"status": "success", "data": {"id": 1}});
        let page: Page<Value> = extract_paginated(response, "students", &sink).unwrap();
        assert!(page.is_empty());
        assert_eq!(
            sink.entries(),
            vec![("Expected array for students, got:".to_string(), json!({"id": 1}))]
        );
    }

    #[test]
    fn test_extract_paginated_malformed_pagination_is_dropped() {
        let sink = RecordingSink::new();
        let response = json!({"data": [], "pagination": {"current_page": "one"}});
        let page: Page<Value> = extract_paginated(response, "students", &sink).unwrap();
        assert!(page.pagination.is_none());
    }

    #[test]
    fn test_extract_paginated_rejection() {
        let sink = RecordingSink::new();
        let result = extract_paginated::<Value>(
            json!({"status": "error", "message": "Forbidden"}),
            "students",
            &sink,
        );
        assert!(matches!(result, Err(MappingError::Rejected(_))));
    }
}

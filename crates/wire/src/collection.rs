//! Collection mapping over untyped list responses.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::diagnostics::DiagnosticSink;

/// Maps a JSON array of backend records element-wise.
///
/// Never fails. A non-array value is reported to `sink` as
/// `"Expected array for <context>, got:"` together with the value and yields
/// an empty list. Elements that cannot be decoded as `B` are skipped with a
/// warning; all others keep their order. The result can therefore be shorter
/// than the input array; typed mappers such as `map_groups` keep the length.
pub fn map_collection<B, D, F>(
    value: &Value,
    context: &str,
    sink: &dyn DiagnosticSink,
    map: F,
) -> Vec<D>
where
    B: DeserializeOwned,
    F: Fn(B) -> D,
{
    let Some(items) = value.as_array() else {
        sink.shape_mismatch(&format!("Expected array for {}, got:", context), value);
        return Vec::new();
    };

    items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| match B::deserialize(item) {
            Ok(record) => Some(map(record)),
            Err(e) => {
                tracing::warn!(
                    context = %context,
                    index = index,
                    error = %e,
                    "Skipping backend record that could not be decoded"
                );
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::RecordingSink;
    use serde_json::json;

    #[derive(Debug, serde::Deserialize)]
    struct Row {
        id: i64,
    }

    fn map_rows(value: &Value, sink: &RecordingSink) -> Vec<String> {
        map_collection(value, "rows", sink, |row: Row| row.id.to_string())
    }

    #[test]
    fn test_map_collection_preserves_order() {
        let sink = RecordingSink::new();
        let ids = map_rows(&json!([{"id": 3}, {"id": 1}, {"id": 2}]), &sink);
        assert_eq!(ids, vec!["3", "1", "2"]);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_map_collection_non_array_values() {
        for value in [
            json!(null),
            json!("invalid"),
            json!(42),
            json!(true),
            json!({"id": 1}),
        ] {
            let sink = RecordingSink::new();
            assert!(map_rows(&value, &sink).is_empty());
            assert_eq!(
                sink.entries(),
                vec![("Expected array for rows, got:".to_string(), value.clone())]
            );
        }
    }

    #[test]
    fn test_map_collection_skips_undecodable_elements() {
        let sink = RecordingSink::new();
        let ids = map_rows(&json!([{"id": 1}, {"id": "x"}, 7, {"id": 2}]), &sink);
        assert_eq!(ids, vec!["1", "2"]);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_map_collection_empty_array() {
        let sink = RecordingSink::new();
        assert!(map_rows(&json!([]), &sink).is_empty());
        assert!(sink.is_empty());
    }
}

//! Query-string building for typed list filters.

use url::form_urlencoded;

/// Ordered collection of query parameters.
///
/// Parameters keep insertion order. Absent and blank values are never
/// recorded, so filters can push every field unconditionally.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryBuilder {
    pairs: Vec<(&'static str, String)>,
}

impl QueryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `key=value` when the value is present and not blank.
    pub fn push<V: ToString>(mut self, key: &'static str, value: Option<V>) -> Self {
        if let Some(value) = value {
            let value = value.to_string();
            if !value.trim().is_empty() {
                self.pairs.push((key, value));
            }
        }
        self
    }

    pub fn pairs(&self) -> &[(&'static str, String)] {
        &self.pairs
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Encodes the parameters as `application/x-www-form-urlencoded`.
    ///
    /// Returns an empty string when no parameter was recorded.
    pub fn build(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in &self.pairs {
            serializer.append_pair(key, value);
        }
        serializer.finish()
    }
}

/// Implemented by every list filter.
pub trait QueryFilter {
    /// Pushes every declared field, in declaration order.
    fn query_builder(&self) -> QueryBuilder;

    fn to_query_string(&self) -> String {
        self.query_builder().build()
    }
}

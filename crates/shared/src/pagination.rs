//! Page-based pagination metadata as returned by list endpoints.

use serde::{Deserialize, Serialize};

/// Pagination block of a paginated backend response.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Pagination {
    pub current_page: u32,
    pub page_size: u32,
    pub total_pages: u32,
    pub total_records: u64,
}

impl Pagination {
    /// Returns true if a page after the current one exists.
    pub fn has_next_page(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Returns true if a page before the current one exists.
    pub fn has_previous_page(&self) -> bool {
        self.current_page > 1
    }
}

/// Items of one list response together with its pagination, if any.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
}

impl<T> Page<T> {
    /// Creates a page without pagination metadata.
    pub fn unpaginated(items: Vec<T>) -> Self {
        Self {
            items,
            pagination: None,
        }
    }

    /// Maps every item, keeping order and pagination.
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            items: self.items.into_iter().map(f).collect(),
            pagination: self.pagination,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self::unpaginated(Vec::new())
    }
}

//! Typed list filters.
//!
//! Every field is optional. `to_query_string` emits the set fields in the
//! order they are declared here.

use domain::models::{AccessPolicy, SuggestionStatus};
use serde::Deserialize;
use shared::{QueryBuilder, QueryFilter};

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct GroupFilters {
    pub search: Option<String>,
    pub room_id: Option<String>,
    pub representative_id: Option<String>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

impl QueryFilter for GroupFilters {
    fn query_builder(&self) -> QueryBuilder {
        QueryBuilder::new()
            .push("search", self.search.as_deref())
            .push("room_id", self.room_id.as_deref())
            .push("representative_id", self.representative_id.as_deref())
            .push("page", self.page)
            .push("page_size", self.page_size)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct StudentFilters {
    pub search: Option<String>,
    pub school_class: Option<String>,
    pub group_id: Option<String>,
    pub location: Option<String>,
    pub bus: Option<bool>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

impl QueryFilter for StudentFilters {
    fn query_builder(&self) -> QueryBuilder {
        QueryBuilder::new()
            .push("search", self.search.as_deref())
            .push("school_class", self.school_class.as_deref())
            .push("group_id", self.group_id.as_deref())
            .push("location", self.location.as_deref())
            .push("bus", self.bus)
            .push("page", self.page)
            .push("page_size", self.page_size)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RoomFilters {
    pub search: Option<String>,
    pub building: Option<String>,
    pub floor: Option<i32>,
    pub category: Option<String>,
    pub occupied: Option<bool>,
}

impl QueryFilter for RoomFilters {
    fn query_builder(&self) -> QueryBuilder {
        QueryBuilder::new()
            .push("search", self.search.as_deref())
            .push("building", self.building.as_deref())
            .push("floor", self.floor)
            .push("category", self.category.as_deref())
            .push("occupied", self.occupied)
    }
}

/// Sort order of the suggestion list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionSort {
    Score,
    Newest,
    Oldest,
}

impl SuggestionSort {
    pub fn as_str(&self) -> &'static str {
        match self {
            SuggestionSort::Score => "score",
            SuggestionSort::Newest => "newest",
            SuggestionSort::Oldest => "oldest",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SuggestionFilters {
    pub search: Option<String>,
    pub status: Option<SuggestionStatus>,
    pub author_id: Option<String>,
    pub sort: Option<SuggestionSort>,
}

impl QueryFilter for SuggestionFilters {
    fn query_builder(&self) -> QueryBuilder {
        QueryBuilder::new()
            .push("search", self.search.as_deref())
            .push("status", self.status.as_ref().map(SuggestionStatus::as_str))
            .push("author_id", self.author_id.as_deref())
            .push("sort", self.sort.map(|s| s.as_str()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CombinedGroupFilters {
    pub search: Option<String>,
    pub is_active: Option<bool>,
    pub access_policy: Option<AccessPolicy>,
}

impl QueryFilter for CombinedGroupFilters {
    fn query_builder(&self) -> QueryBuilder {
        QueryBuilder::new()
            .push("search", self.search.as_deref())
            .push("is_active", self.is_active)
            .push(
                "access_policy",
                self.access_policy.as_ref().map(AccessPolicy::as_str),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_filters_produce_empty_query() {
        assert_eq!(GroupFilters::default().to_query_string(), "");
        assert_eq!(StudentFilters::default().to_query_string(), "");
        assert_eq!(RoomFilters::default().to_query_string(), "");
        assert_eq!(SuggestionFilters::default().to_query_string(), "");
        assert_eq!(CombinedGroupFilters::default().to_query_string(), "");
    }

    #[test]
    fn test_group_filters_every_field_emitted_in_order() {
        let filters = GroupFilters {
            search: Some("Klasse 3".to_string()),
            room_id: Some("12".to_string()),
            representative_id: Some("5".to_string()),
            page: Some(2),
            page_size: Some(25),
        };
        assert_eq!(
            filters.to_query_string(),
            "search=Klasse+3&room_id=12&representative_id=5&page=2&page_size=25"
        );
    }

    #[test]
    fn test_student_filters_every_field_emitted() {
        let filters = StudentFilters {
            search: Some("Lena".to_string()),
            school_class: Some("2b".to_string()),
            group_id: Some("4".to_string()),
            location: Some("Anwesend".to_string()),
            bus: Some(false),
            page: Some(1),
            page_size: Some(50),
        };
        let pairs = filters.query_builder();
        let keys: Vec<_> = pairs.pairs().iter().map(|(k, _)| *k).collect();
        assert_eq!(
            keys,
            vec!["search", "school_class", "group_id", "location", "bus", "page", "page_size"]
        );
        assert!(filters.to_query_string().contains("bus=false"));
    }

    #[test]
    fn test_blank_values_are_skipped() {
        let filters = StudentFilters {
            search: Some("  ".to_string()),
            school_class: Some("3a".to_string()),
            ..Default::default()
        };
        assert_eq!(filters.to_query_string(), "school_class=3a");
    }

    #[test]
    fn test_room_filters() {
        let filters = RoomFilters {
            building: Some("Hauptgebäude".to_string()),
            floor: Some(0),
            occupied: Some(true),
            ..Default::default()
        };
        assert_eq!(
            filters.to_query_string(),
            "building=Hauptgeb%C3%A4ude&floor=0&occupied=true"
        );
    }

    #[test]
    fn test_suggestion_filters() {
        let filters = SuggestionFilters {
            status: Some(SuggestionStatus::Planned),
            sort: Some(SuggestionSort::Score),
            ..Default::default()
        };
        assert_eq!(filters.to_query_string(), "status=planned&sort=score");
    }

    #[test]
    fn test_combined_group_filters() {
        let filters = CombinedGroupFilters {
            search: Some("Nachmittag & Ferien".to_string()),
            is_active: Some(true),
            access_policy: Some(AccessPolicy::Specific),
        };
        assert_eq!(
            filters.to_query_string(),
            "search=Nachmittag+%26+Ferien&is_active=true&access_policy=specific"
        );
    }

    #[test]
    fn test_filters_deserialize_from_partial_json() {
        let filters: StudentFilters =
            serde_json::from_str(r#"{"school_class": "1a", "bus": true}"#).unwrap();
        assert_eq!(filters.to_query_string(), "school_class=1a&bus=true");
    }
}

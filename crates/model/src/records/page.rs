use crate::records::record::Record;
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// One page of records fetched from the source at a fixed offset.
/// Immutable once constructed.
#[derive(Debug, Clone)]
pub struct Page {
    pub offset: usize,
    pub items: Vec<Record>,
    /// Number of records the source declared for this page.
    pub declared_count: usize,
    /// Total record count the source declared at fetch time.
    pub declared_total: usize,
    pub fetched_at: DateTime<Utc>,
}

/// Wire shape of one page response:
/// `{"items": [...], "count": n, "totalCount": n}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse {
    pub items: Vec<Record>,
    pub count: usize,
    pub total_count: usize,
}

impl Page {
    pub fn from_response(offset: usize, response: PageResponse) -> Self {
        Page {
            offset,
            items: response.items,
            declared_count: response.count,
            declared_total: response.total_count,
            fetched_at: Utc::now(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_wire_page() {
        let body = r#"{
            "items": [
                {"id": 1, "name": "first", "tags": ["a", "b"]},
                {"id": 2, "name": null}
            ],
            "count": 2,
            "totalCount": 37
        }"#;

        let response: PageResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.count, 2);
        assert_eq!(response.total_count, 37);

        let page = Page::from_response(100, response);
        assert_eq!(page.offset, 100);
        assert_eq!(page.len(), 2);
        assert_eq!(page.declared_total, 37);
        assert_eq!(page.items[0].get("name").unwrap(), "first");
    }

    #[test]
    fn rejects_body_without_total() {
        let body = r#"{"items": [], "count": 0}"#;
        assert!(serde_json::from_str::<PageResponse>(body).is_err());
    }

    #[test]
    fn record_field_order_is_preserved() {
        let body = r#"{"items": [{"z": 1, "a": 2, "m": 3}], "count": 1, "totalCount": 1}"#;
        let response: PageResponse = serde_json::from_str(body).unwrap();
        let names = crate::records::record::field_names(&response.items[0]);
        assert_eq!(names, vec!["z", "a", "m"]);
    }
}

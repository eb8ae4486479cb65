use serde_json::{Map, Value};

/// A single dataset record: an insertion-ordered mapping from field name to
/// JSON value. No schema is enforced; the field set is whatever the source
/// returned, and the first record's field order defines the tabular header.
pub type Record = Map<String, Value>;

/// Field names of a record in insertion order.
pub fn field_names(record: &Record) -> Vec<&str> {
    record.keys().map(String::as_str).collect()
}

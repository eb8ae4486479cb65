use crate::error::SyncError;
use model::records::{dataset::Dataset, record};
use serde_json::Value;

/// Serializes the dataset as pretty-printed JSON with a trailing newline.
/// Field order within each record is preserved as received from the source.
pub fn to_json(dataset: &Dataset) -> Result<String, SyncError> {
    let mut out = serde_json::to_string_pretty(&dataset.records).map_err(SyncError::JsonEncode)?;
    out.push('\n');
    Ok(out)
}

/// Serializes the dataset as CSV.
///
/// The header row is the first record's field names in insertion order.
/// Missing and null fields become empty cells, strings are written verbatim,
/// and nested values are flattened to their compact JSON text; the writer
/// quotes any cell containing a separator, quote, or newline, doubling
/// embedded quotes. An empty dataset has no first record to name columns,
/// so it encodes to an empty string.
pub fn to_csv(dataset: &Dataset) -> Result<String, SyncError> {
    let Some(first) = dataset.records.first() else {
        return Ok(String::new());
    };
    let headers = record::field_names(first);

    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(&headers)?;

    for rec in &dataset.records {
        let row: Vec<String> = headers
            .iter()
            .map(|field| match rec.get(*field) {
                None | Some(Value::Null) => String::new(),
                Some(Value::String(s)) => s.clone(),
                Some(other) => other.to_string(),
            })
            .collect();
        writer.write_record(&row)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| SyncError::Unexpected(format!("CSV writer flush failed: {e}")))?;
    String::from_utf8(bytes).map_err(|e| SyncError::Unexpected(e.to_string()))
}

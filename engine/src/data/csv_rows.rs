// Adapts already-read CSV rows of an extraction export into `Record`s.
use crate::error::EngineError;
use csv::StringRecord;
use shared::models::Record;

/// Builds a `Record` keyed by header name. Empty and missing trailing cells
/// become null; when a header repeats, the first column wins.
pub fn record_from_csv(headers: &StringRecord, row: &StringRecord) -> Result<Record, EngineError> {
    if row.len() > headers.len() {
        return Err(EngineError::CsvDataFormatError(format!(
            "row has {} cells but only {} headers",
            row.len(),
            headers.len()
        )));
    }

    let mut record = Record::new();
    for (idx, header) in headers.iter().enumerate() {
        if record.contains_key(header) {
            continue;
        }
        match row.get(idx) {
            Some(cell) if !cell.is_empty() => record.insert(header, cell),
            _ => record.insert_null(header),
        };
    }
    Ok(record)
}

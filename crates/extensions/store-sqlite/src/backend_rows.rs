//! Row decoding for raw queries.

use rusqlite::Connection;
use rusqlite::types::ValueRef;
use serde_json::{Number, Value};

use autoapply_protocols::error::StoreError;
use autoapply_protocols::store::Row;

/// Run a read-only statement and decode every row into a JSON record.
pub(super) fn read_rows(conn: &Connection, sql: &str) -> Result<Vec<Row>, tokio_rusqlite::Error> {
    let mut stmt = conn.prepare(sql)?;
    if !stmt.readonly() {
        return Err(tokio_rusqlite::Error::Other(Box::new(StoreError::Query(
            "only read-only statements are allowed".to_string(),
        ))));
    }

    let columns: Vec<String> = stmt.column_names().into_iter().map(String::from).collect();
    let rows = stmt.query_map([], |row| {
        let mut record = Row::new();
        for (idx, name) in columns.iter().enumerate() {
            record.insert(name.clone(), column_value(row.get_ref(idx)?));
        }
        Ok(record)
    })?;

    let records = rows.collect::<Result<Vec<_>, _>>()?;
    Ok(records)
}

/// TEXT holding a JSON array or object is decoded; other text stays a string.
fn column_value(value: ValueRef<'_>) -> Value {
    match value {
        ValueRef::Null => Value::Null,
        ValueRef::Integer(i) => Value::from(i),
        ValueRef::Real(f) => Number::from_f64(f).map(Value::Number).unwrap_or(Value::Null),
        ValueRef::Text(bytes) => {
            let text = String::from_utf8_lossy(bytes);
            let trimmed = text.trim_start();
            if trimmed.starts_with('[') || trimmed.starts_with('{') {
                if let Ok(parsed) = serde_json::from_str(&text) {
                    return parsed;
                }
            }
            Value::String(text.into_owned())
        }
        ValueRef::Blob(bytes) => Value::Array(bytes.iter().map(|b| Value::from(*b)).collect()),
    }
}

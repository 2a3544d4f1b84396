//! Encoding of ordered lists stored in a single text column.
//!
//! Member characteristics and photo tags are persisted as JSON arrays so their
//! order round-trips exactly.

use sea_orm::DbErr;
use serde::{de::DeserializeOwned, Serialize};

/// Serializes a list into the JSON text stored in the database.
pub fn encode<T: Serialize>(items: &[T]) -> Result<String, DbErr> {
    serde_json::to_string(items).map_err(|e| DbErr::Custom(format!("Failed to encode list: {}", e)))
}

/// Parses the JSON text of a list column.
pub fn decode<T: DeserializeOwned>(column: &str, value: &str) -> Result<Vec<T>, DbErr> {
    serde_json::from_str(value)
        .map_err(|e| DbErr::Custom(format!("Failed to parse {} '{}': {}", column, value, e)))
}

//! Frontend Models
//!
//! Data structures matching the server's todo records.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Todo record as returned by `GET /todos`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub id: u32,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub images: Option<Value>,
}

/// Body of `POST /todos`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewTodo {
    pub title: String,
    pub description: String,
    pub time: String,
    pub images: Value,
}

/// JSON shape a browser produces when it serializes a `FileList`.
///
/// Each selected file becomes an empty object under its index key. No file
/// content survives; the server receives only how many files were picked.
pub fn file_list_json(count: usize) -> Value {
    let entries: Map<String, Value> = (0..count)
        .map(|i| (i.to_string(), Value::Object(Map::new())))
        .collect();
    Value::Object(entries)
}

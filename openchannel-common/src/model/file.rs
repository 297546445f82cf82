// openchannel-common/src/model/file.rs
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{impl_record, Field};

/// A stored asset as described by the files endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct File {
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub file_id: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub file_url: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub name: Field<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Aggregated statistics totals, keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Stats {
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.extra.get(field)
    }

    /// Integer total for `field`, when the server reported one.
    pub fn total(&self, field: &str) -> Option<i64> {
        self.get(field).and_then(Value::as_i64)
    }
}

impl_record!(File, Stats);

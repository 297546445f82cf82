// openchannel-common/src/model/app.rs
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{custom_data_or_empty, impl_custom_data, impl_record, CustomData, Field};

/// Review/visibility state of an app, e.g. `{"value": "approved"}`. Kept as
/// an open map; `value` and `reason` are read on demand.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Status {
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Status {
    pub fn value(&self) -> Option<&str> {
        self.extra.get("value").and_then(Value::as_str)
    }

    pub fn reason(&self) -> Option<&Value> {
        self.extra.get("reason")
    }

    pub fn is(&self, value: &str) -> bool {
        self.value() == Some(value)
    }
}

/// Usage counters reported alongside an app (`views`, `downloads`, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Statistics {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }
}

/// A pricing model an app can be acquired under: `modelId`, `type`, `price`
/// and whatever else the marketplace attaches.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Model {
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Model {
    pub fn with_id(model_id: impl Into<String>) -> Self {
        let mut extra = Map::new();
        extra.insert("modelId".into(), Value::String(model_id.into()));
        Self { extra }
    }

    pub fn model_id(&self) -> Option<&str> {
        self.extra.get("modelId").and_then(Value::as_str)
    }

    pub fn model_type(&self) -> Option<&str> {
        self.extra.get("type").and_then(Value::as_str)
    }

    pub fn price(&self) -> Option<&Value> {
        self.extra.get("price")
    }
}

/// An app listed in the marketplace.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct App {
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub app_id: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub name: Field<String>,
    // Usually an integer, but kept as sent.
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub version: Field<Value>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub status: Field<Status>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub statistics: Field<Statistics>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub model: Field<Vec<Model>>,
    #[serde(default, deserialize_with = "custom_data_or_empty")]
    pub custom_data: CustomData,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl App {
    pub fn with_id(app_id: impl Into<String>) -> Self {
        Self {
            app_id: Field::Set(app_id.into()),
            ..Default::default()
        }
    }

    pub fn models(&self) -> &[Model] {
        self.model.get().map(Vec::as_slice).unwrap_or_default()
    }

    /// The version as an integer, whether it was sent as a number or a numeric string.
    pub fn version_number(&self) -> Option<u64> {
        match self.version.get()? {
            Value::Number(n) => n.as_u64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    pub fn status_value(&self) -> Option<&str> {
        self.status.get().and_then(Status::value)
    }
}

impl_record!(App, Status, Statistics, Model);
impl_custom_data!(App);

// openchannel-common/src/model/ownership.rs
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{custom_data_or_empty, impl_custom_data, impl_record, CustomData, Field, Id};

/// Links a user, an app and the pricing model the app was acquired under.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ownership {
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub ownership_id: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub user_id: Field<Id>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub app_id: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub model_id: Field<String>,
    #[serde(default, deserialize_with = "custom_data_or_empty")]
    pub custom_data: CustomData,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl_record!(Ownership);
impl_custom_data!(Ownership);

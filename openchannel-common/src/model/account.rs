// openchannel-common/src/model/account.rs
// Developers, users and the groups they belong to. All four share one shape:
// an id, optional display fields and custom data.
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{custom_data_or_empty, impl_custom_data, impl_record, CustomData, Field, Id};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Developer {
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub developer_id: Field<Id>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub name: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub email: Field<String>,
    #[serde(default, deserialize_with = "custom_data_or_empty")]
    pub custom_data: CustomData,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Developer {
    pub fn with_id(developer_id: impl Into<Id>) -> Self {
        Self {
            developer_id: Field::Set(developer_id.into()),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub user_id: Field<Id>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub name: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub email: Field<String>,
    #[serde(default, deserialize_with = "custom_data_or_empty")]
    pub custom_data: CustomData,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl User {
    pub fn with_id(user_id: impl Into<Id>) -> Self {
        Self {
            user_id: Field::Set(user_id.into()),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeveloperGroup {
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub group_id: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub name: Field<String>,
    #[serde(default, deserialize_with = "custom_data_or_empty")]
    pub custom_data: CustomData,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl DeveloperGroup {
    pub fn with_id(group_id: impl Into<String>) -> Self {
        Self {
            group_id: Field::Set(group_id.into()),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserGroup {
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub group_id: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub name: Field<String>,
    #[serde(default, deserialize_with = "custom_data_or_empty")]
    pub custom_data: CustomData,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UserGroup {
    pub fn with_id(group_id: impl Into<String>) -> Self {
        Self {
            group_id: Field::Set(group_id.into()),
            ..Default::default()
        }
    }
}

impl_record!(Developer, User, DeveloperGroup, UserGroup);
impl_custom_data!(Developer, User, DeveloperGroup, UserGroup);

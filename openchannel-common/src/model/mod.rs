// openchannel-common/src/model/mod.rs
// Marketplace entities. Every record keeps the fields it knows about as typed
// members and carries everything else in a flattened `extra` map, so payloads
// from newer API versions survive a parse/encode cycle untouched.
use std::fmt;
use std::ops::Deref;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::error::Result;

pub mod account;
pub mod app;
pub mod file;
pub mod ownership;

pub use account::{Developer, DeveloperGroup, User, UserGroup};
pub use app::{App, Model, Statistics, Status};
pub use file::{File, Stats};
pub use ownership::Ownership;

/// Marketplace-defined extra fields attached to apps, users, developers and groups.
pub type CustomData = Map<String, Value>;

/// A known key as it was seen on the wire. An explicit `null` is kept apart
/// from a missing key so that it is written back on encode.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Field<T> {
    Absent,
    Null,
    Set(T),
}

impl<T> Field<T> {
    pub fn get(&self) -> Option<&T> {
        match self {
            Field::Set(value) => Some(value),
            Field::Absent | Field::Null => None,
        }
    }

    pub fn get_mut(&mut self) -> Option<&mut T> {
        match self {
            Field::Set(value) => Some(value),
            Field::Absent | Field::Null => None,
        }
    }

    pub fn as_deref(&self) -> Option<&T::Target>
    where
        T: Deref,
    {
        self.get().map(Deref::deref)
    }

    pub fn is_set(&self) -> bool {
        matches!(self, Field::Set(_))
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Field::Absent)
    }

    pub fn set(&mut self, value: impl Into<T>) {
        *self = Field::Set(value.into());
    }
}

impl<T> Default for Field<T> {
    fn default() -> Self {
        Field::Absent
    }
}

impl<T> From<T> for Field<T> {
    fn from(value: T) -> Self {
        Field::Set(value)
    }
}

impl<T: Serialize> Serialize for Field<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Field::Set(value) => value.serialize(serializer),
            Field::Absent | Field::Null => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Field<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Ok(Option::<T>::deserialize(deserializer)?.map_or(Field::Null, Field::Set))
    }
}

/// `customData: null` reads as an empty map.
pub(crate) fn custom_data_or_empty<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<CustomData, D::Error> {
    Ok(Option::<CustomData>::deserialize(deserializer)?.unwrap_or_default())
}

/// A user or developer identifier. The API hands out both numeric and string
/// ids; each form is written back exactly as it was read.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Id {
    Num(i64),
    Str(String),
}

impl Id {
    /// Numeric when `s` is an integer, a string id otherwise.
    pub fn parse_lossy(s: &str) -> Self {
        s.parse::<i64>()
            .map(Id::Num)
            .unwrap_or_else(|_| Id::Str(s.to_string()))
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Id::Num(n) => write!(f, "{n}"),
            Id::Str(s) => f.write_str(s),
        }
    }
}

impl From<i32> for Id {
    fn from(n: i32) -> Self {
        Id::Num(n.into())
    }
}

impl From<u32> for Id {
    fn from(n: u32) -> Self {
        Id::Num(n.into())
    }
}

impl From<i64> for Id {
    fn from(n: i64) -> Self {
        Id::Num(n)
    }
}

impl From<&str> for Id {
    fn from(s: &str) -> Self {
        Id::Str(s.to_string())
    }
}

impl From<String> for Id {
    fn from(s: String) -> Self {
        Id::Str(s)
    }
}

/// JSON parse/encode shared by every entity.
pub trait Record: Serialize + DeserializeOwned {
    /// Fields the record does not model, kept verbatim.
    fn extra_fields(&self) -> &Map<String, Value>;

    fn parse(value: Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }

    fn parse_str(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    fn encode(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    fn to_value(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }

    fn extra(&self, key: &str) -> Option<&Value> {
        self.extra_fields().get(key)
    }
}

/// Access to the `customData` map of an entity.
pub trait HasCustomData {
    fn custom_data(&self) -> &CustomData;
    fn custom_data_mut(&mut self) -> &mut CustomData;

    fn custom_field(&self, key: &str) -> Option<&Value> {
        self.custom_data().get(key)
    }

    fn set_custom_field(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.custom_data_mut().insert(key.into(), value.into());
    }
}

macro_rules! impl_record {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::model::Record for $ty {
                fn extra_fields(&self) -> &serde_json::Map<String, serde_json::Value> {
                    &self.extra
                }
            }
        )+
    };
}

macro_rules! impl_custom_data {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::model::HasCustomData for $ty {
                fn custom_data(&self) -> &$crate::model::CustomData {
                    &self.custom_data
                }

                fn custom_data_mut(&mut self) -> &mut $crate::model::CustomData {
                    &mut self.custom_data
                }
            }
        )+
    };
}

pub(crate) use impl_custom_data;
pub(crate) use impl_record;

//! JSON Schema (Draft 2020-12) per event.
//!
//! 256-bit integers are strings constrained to decimal digits so no JSON
//! consumer silently rounds them through an f64. Schemas are closed.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use topicfoundry_core::{is_array_type, is_big_integer, EventModel};

pub const DRAFT_2020_12: &str = "https://json-schema.org/draft/2020-12/schema";

/// Signed decimal integer.
pub const DECIMAL_PATTERN: &str = r"^-?\d+$";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonType {
    Object,
    Array,
    String,
    Integer,
    Boolean,
}

/// Schema for a single property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertySchema {
    #[serde(rename = "type")]
    pub ty: JsonType,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub pattern: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub items: Option<Box<PropertySchema>>,
}

impl PropertySchema {
    pub fn of(ty: JsonType) -> Self {
        Self {
            ty,
            format: None,
            pattern: None,
            items: None,
        }
    }

    fn with_format(mut self, format: &str) -> Self {
        self.format = Some(format.to_string());
        self
    }

    fn with_pattern(mut self, pattern: &str) -> Self {
        self.pattern = Some(pattern.to_string());
        self
    }

    fn array_of(items: PropertySchema) -> Self {
        Self {
            items: Some(Box::new(items)),
            ..Self::of(JsonType::Array)
        }
    }

    /// Property schema for a normalized Solidity type.
    pub fn for_solidity(ty: &str) -> Self {
        if is_array_type(ty) {
            Self::array_of(Self::of(JsonType::String))
        } else if is_big_integer(ty) {
            Self::of(JsonType::String).with_pattern(DECIMAL_PATTERN)
        } else if ty == "bool" {
            Self::of(JsonType::Boolean)
        } else {
            // address, bytes, bytes32, string and everything unmapped
            Self::of(JsonType::String)
        }
    }
}

/// A closed object schema describing one event table row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventJsonSchema {
    #[serde(rename = "$schema")]
    pub schema: String,
    pub title: String,
    #[serde(rename = "type")]
    pub ty: JsonType,
    pub properties: IndexMap<String, PropertySchema>,
    #[serde(rename = "additionalProperties")]
    pub additional_properties: bool,
}

/// Build the row schema for one event.
pub fn json_schema_for_event(ev: &EventModel) -> EventJsonSchema {
    let mut properties = IndexMap::new();
    properties.insert("block_number".into(), PropertySchema::of(JsonType::Integer));
    properties.insert(
        "block_time".into(),
        PropertySchema::of(JsonType::String).with_format("date-time"),
    );
    properties.insert("tx_hash".into(), PropertySchema::of(JsonType::String));
    properties.insert("log_index".into(), PropertySchema::of(JsonType::Integer));
    properties.insert("address".into(), PropertySchema::of(JsonType::String));
    properties.insert("topic0".into(), PropertySchema::of(JsonType::String));

    for p in &ev.inputs {
        properties.insert(p.column_name(), PropertySchema::for_solidity(&p.ty));
    }

    EventJsonSchema {
        schema: DRAFT_2020_12.to_string(),
        title: format!("{}.{}", ev.contract, ev.name),
        ty: JsonType::Object,
        properties,
        additional_properties: false,
    }
}

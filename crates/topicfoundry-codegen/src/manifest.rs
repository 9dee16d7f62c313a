//! The `topicfoundry.v1` schema manifest: provenance, signature, topic0 and
//! row schema for every event of a run.

use crate::error::CodegenError;
use crate::json_schema::{json_schema_for_event, EventJsonSchema};
use serde::{Deserialize, Serialize};
use topicfoundry_core::EventModel;

pub const FORMAT_VERSION: &str = "topicfoundry.v1";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaEntry {
    pub file: String,
    pub contract: String,
    pub event: String,
    pub signature: String,
    pub topic0: String,
    pub schema: EventJsonSchema,
}

impl From<&EventModel> for SchemaEntry {
    fn from(ev: &EventModel) -> Self {
        Self {
            file: ev.file.clone(),
            contract: ev.contract.clone(),
            event: ev.name.clone(),
            signature: ev.signature.clone(),
            topic0: ev.topic0.as_hex().to_string(),
            schema: json_schema_for_event(ev),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaManifest {
    pub version: String,
    pub events: Vec<SchemaEntry>,
}

impl SchemaManifest {
    pub fn from_events(events: &[EventModel]) -> Self {
        Self {
            version: FORMAT_VERSION.to_string(),
            events: events.iter().map(SchemaEntry::from).collect(),
        }
    }

    /// Two-space indented JSON.
    pub fn to_json_pretty(&self) -> Result<String, CodegenError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(s: &str) -> Result<Self, CodegenError> {
        Ok(serde_json::from_str(s)?)
    }

    /// `(contract, event, signature, topic0)` for every entry.
    pub fn identities(&self) -> Vec<(&str, &str, &str, &str)> {
        self.events
            .iter()
            .map(|e| {
                (
                    e.contract.as_str(),
                    e.event.as_str(),
                    e.signature.as_str(),
                    e.topic0.as_str(),
                )
            })
            .collect()
    }
}

//! Event model construction.
//!
//! The builder is total over partially-malformed ABIs: a parameter without a
//! `type` gets an empty type string, a missing name becomes `arg{i}`, and
//! missing flags default to `false`. Only the loader can fail.

use crate::abi::{event_entries, load_abi_file};
use crate::error::FoundryError;
use crate::event::{EventModel, Param};
use crate::fingerprint::{event_signature_for, keccak256_signature};
use crate::types::normalize_type;
use serde_json::Value;
use std::path::Path;
use tracing::{debug, warn};

/// Build the canonical model for one `"type": "event"` ABI entry.
pub fn build_event(entry: &Value, path: &Path) -> EventModel {
    let file = path
        .file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_default();
    let contract = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let name = entry
        .get("name")
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_string();
    let raw_inputs: &[Value] = entry
        .get("inputs")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[]);

    let inputs: Vec<Param> = raw_inputs
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let ty = match p.get("type").and_then(Value::as_str) {
                Some(t) => normalize_type(t),
                None => {
                    warn!(
                        contract = %contract,
                        event = %name,
                        position = i,
                        "parameter has no type"
                    );
                    String::new()
                }
            };
            let name = match p.get("name").and_then(Value::as_str) {
                Some(n) if !n.is_empty() => n.to_string(),
                _ => format!("arg{i}"),
            };
            Param {
                name,
                ty,
                indexed: p.get("indexed").and_then(Value::as_bool).unwrap_or(false),
                position: i,
            }
        })
        .collect();

    let signature = event_signature_for(&name, &inputs);
    let topic0 = keccak256_signature(&signature);

    EventModel {
        file,
        contract,
        name,
        anonymous: entry
            .get("anonymous")
            .and_then(Value::as_bool)
            .unwrap_or(false),
        signature,
        topic0,
        inputs,
    }
}

/// Load an ABI file and build a model for every event in it, in ABI order.
pub fn extract_events(path: &Path) -> Result<Vec<EventModel>, FoundryError> {
    let entries = load_abi_file(path)?;
    let events: Vec<EventModel> = event_entries(entries)
        .map(|entry| build_event(&entry, path))
        .collect();
    debug!(path = %path.display(), events = events.len(), "extracted events");
    Ok(events)
}

//! ABI file loading.
//!
//! Three container shapes are accepted:
//! - a bare JSON array of ABI entries (solc / Foundry `--abi` output)
//! - an object with an `abi` array (Hardhat / Truffle artifacts)
//! - an object whose `result` is a JSON-encoded string holding the array
//!   (Etherscan `getabi` responses)

use crate::error::FoundryError;
use serde_json::Value;
use std::path::Path;
use tracing::debug;

/// Read and parse an ABI file.
pub fn load_abi_file(path: &Path) -> Result<Vec<Value>, FoundryError> {
    let content = std::fs::read_to_string(path).map_err(|e| FoundryError::io(path, e))?;
    let entries = parse_abi(&content, path)?;
    debug!(path = %path.display(), entries = entries.len(), "loaded ABI");
    Ok(entries)
}

/// Parse ABI JSON text. `path` is only used for error reporting.
pub fn parse_abi(content: &str, path: &Path) -> Result<Vec<Value>, FoundryError> {
    let data: Value = serde_json::from_str(content)
        .map_err(|e| FoundryError::format(path, format!("invalid JSON: {e}")))?;

    match data {
        Value::Array(entries) => Ok(entries),
        Value::Object(mut obj) => {
            if let Some(Value::Array(entries)) = obj.remove("abi") {
                return Ok(entries);
            }
            match obj.get("result") {
                Some(Value::String(encoded)) => match serde_json::from_str::<Value>(encoded) {
                    Ok(Value::Array(entries)) => Ok(entries),
                    Ok(_) => Err(FoundryError::format(path, "`result` is not an ABI array")),
                    Err(e) => Err(FoundryError::format(
                        path,
                        format!("`result` is not valid JSON: {e}"),
                    )),
                },
                Some(_) => Err(FoundryError::format(path, "`result` is not a JSON string")),
                None => Err(FoundryError::format(path, "no `abi` or `result` key")),
            }
        }
        _ => Err(FoundryError::format(path, "expected an array or an object")),
    }
}

/// Keep only `"type": "event"` entries.
pub fn event_entries(entries: Vec<Value>) -> impl Iterator<Item = Value> {
    entries
        .into_iter()
        .filter(|e| e.get("type").and_then(Value::as_str) == Some("event"))
}

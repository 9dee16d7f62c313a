//! The canonical event model.

use serde::{Deserialize, Serialize};

/// The keccak256 hash of an event's canonical signature, `0x`-prefixed
/// lowercase hex. For non-anonymous events this is `topics[0]` on chain.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventFingerprint(pub String);

impl EventFingerprint {
    pub fn new(hex: impl Into<String>) -> Self {
        Self(hex.into())
    }

    pub fn as_hex(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EventFingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One event parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Param {
    /// Declared name, or `arg{position}` when the ABI omits it
    pub name: String,
    /// Normalized Solidity type; empty when the ABI entry had none
    #[serde(rename = "type")]
    pub ty: String,
    /// Stored as a topic rather than in the data payload
    pub indexed: bool,
    /// Zero-based declaration order
    pub position: usize,
}

impl Param {
    /// Column / property name used by every tabular projection:
    /// `idx_{name}` for topics, `data_{name}` for payload fields, lowercased.
    pub fn column_name(&self) -> String {
        let prefix = if self.indexed { "idx_" } else { "data_" };
        format!("{prefix}{}", self.name).to_lowercase()
    }
}

/// One ABI event, fully derived. Built once per (file, event) pair and
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventModel {
    /// Source file base name, e.g. `"ERC20.json"`
    pub file: String,
    /// Source file stem, e.g. `"ERC20"`
    pub contract: String,
    /// Event name as declared
    pub name: String,
    pub anonymous: bool,
    /// `Name(type1,type2,...)`
    pub signature: String,
    pub topic0: EventFingerprint,
    pub inputs: Vec<Param>,
}

impl EventModel {
    /// `{contract}_{name}`, lowercased.
    pub fn table_name(&self) -> String {
        format!("{}_{}", self.contract, self.name).to_lowercase()
    }

    pub fn indexed_count(&self) -> usize {
        self.inputs.iter().filter(|p| p.indexed).count()
    }

    pub fn indexed(&self) -> impl Iterator<Item = &Param> {
        self.inputs.iter().filter(|p| p.indexed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn param(name: &str, ty: &str, indexed: bool, position: usize) -> Param {
        Param {
            name: name.into(),
            ty: ty.into(),
            indexed,
            position,
        }
    }

    fn sample() -> EventModel {
        EventModel {
            file: "MyToken.json".into(),
            contract: "MyToken".into(),
            name: "Transfer".into(),
            anonymous: false,
            signature: "Transfer(address,address,uint256)".into(),
            topic0: EventFingerprint::new(
                "0xddf252ad1be2c89b69c2b068fc378daa952ba7f163c4a11628f55a4df523b3ef",
            ),
            inputs: vec![
                param("from", "address", true, 0),
                param("to", "address", true, 1),
                param("Value", "uint256", false, 2),
            ],
        }
    }

    #[test]
    fn column_names_carry_prefix_and_are_lowercased() {
        let ev = sample();
        let cols: Vec<_> = ev.inputs.iter().map(Param::column_name).collect();
        assert_eq!(cols, vec!["idx_from", "idx_to", "data_value"]);
    }

    #[test]
    fn table_name_is_lowercased() {
        assert_eq!(sample().table_name(), "mytoken_transfer");
    }

    #[test]
    fn indexed_split_keeps_positions() {
        let ev = sample();
        assert_eq!(ev.indexed_count(), 2);
        let idx: Vec<_> = ev.indexed().map(|p| p.position).collect();
        assert_eq!(idx, vec![0, 1]);
    }

    #[test]
    fn serializes_type_field_and_plain_topic0() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["inputs"][0]["type"], "address");
        assert_eq!(
            json["topic0"],
            "0xddf252ad1be2c89b69c2b068fc378daa952ba7f163c4a11628f55a4df523b3ef"
        );
    }
}

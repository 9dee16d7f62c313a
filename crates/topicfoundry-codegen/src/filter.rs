//! `eth_getLogs` filter stubs.
//!
//! Only indexed parameters occupy topic slots; payload fields are opaque
//! data and never appear here. Anonymous events do not emit their hash, so
//! their stubs start directly with the indexed-parameter slots.

use crate::error::CodegenError;
use serde::{Deserialize, Serialize};
use topicfoundry_core::EventModel;

/// Placeholder strings written into the stubs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterPlaceholders {
    #[serde(rename = "address_placeholder", default = "default_address")]
    pub address: String,
    #[serde(rename = "topic_placeholder", default = "default_topic")]
    pub topic: String,
}

fn default_address() -> String {
    "<contract_address_if_known>".into()
}

fn default_topic() -> String {
    "<topic for indexed arg>".into()
}

impl Default for FilterPlaceholders {
    fn default() -> Self {
        Self {
            address: default_address(),
            topic: default_topic(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogFilterStub {
    pub address: String,
    pub topics: Vec<String>,
}

/// One JSON line of `filters` output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventFilter {
    pub event: String,
    #[serde(skip_serializing_if = "std::ops::Not::not", default)]
    pub anonymous: bool,
    pub filter: LogFilterStub,
}

impl EventFilter {
    pub fn to_json_line(&self) -> Result<String, CodegenError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Console form: `  Transfer  topics: [0xddf2..., <topic for indexed arg>]`
    pub fn pretty_line(&self) -> String {
        format!(
            "  {}  topics: [{}]{}",
            self.event,
            self.filter.topics.join(", "),
            if self.anonymous { "  (anonymous)" } else { "" }
        )
    }
}

pub fn filter_for_event(ev: &EventModel, placeholders: &FilterPlaceholders) -> EventFilter {
    let mut topics = Vec::with_capacity(ev.indexed_count() + 1);
    if !ev.anonymous {
        topics.push(ev.topic0.as_hex().to_string());
    }
    topics.extend(ev.indexed().map(|_| placeholders.topic.clone()));

    EventFilter {
        event: ev.name.clone(),
        anonymous: ev.anonymous,
        filter: LogFilterStub {
            address: placeholders.address.clone(),
            topics,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use topicfoundry_core::{keccak256_signature, Param};

    fn transfer(anonymous: bool) -> EventModel {
        let sig = "Transfer(address,address,uint256)".to_string();
        EventModel {
            file: "ERC20.json".into(),
            contract: "ERC20".into(),
            name: "Transfer".into(),
            anonymous,
            topic0: keccak256_signature(&sig),
            signature: sig,
            inputs: vec![
                Param {
                    name: "from".into(),
                    ty: "address".into(),
                    indexed: true,
                    position: 0,
                },
                Param {
                    name: "to".into(),
                    ty: "address".into(),
                    indexed: true,
                    position: 1,
                },
                Param {
                    name: "value".into(),
                    ty: "uint256".into(),
                    indexed: false,
                    position: 2,
                },
            ],
        }
    }

    #[test]
    fn topic0_then_one_slot_per_indexed_param() {
        let f = filter_for_event(&transfer(false), &FilterPlaceholders::default());
        assert_eq!(f.filter.topics.len(), 3);
        assert_eq!(
            f.filter.topics[0],
            "0xddf252ad1be2c89b69c2b068fc378daa952ba7f163c4a11628f55a4df523b3ef"
        );
        assert_eq!(f.filter.topics[1], "<topic for indexed arg>");
        assert_eq!(f.filter.address, "<contract_address_if_known>");
    }

    #[test]
    fn anonymous_events_have_no_topic0_slot() {
        let f = filter_for_event(&transfer(true), &FilterPlaceholders::default());
        assert_eq!(f.filter.topics, vec!["<topic for indexed arg>"; 2]);
        assert!(f.to_json_line().unwrap().contains("\"anonymous\":true"));
    }

    #[test]
    fn json_line_shape() {
        let f = filter_for_event(&transfer(false), &FilterPlaceholders::default());
        let line = f.to_json_line().unwrap();
        assert!(!line.contains('\n'));
        assert!(!line.contains("anonymous"));
        let v: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(v["event"], "Transfer");
        assert_eq!(v["filter"]["topics"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn custom_placeholders() {
        let ph = FilterPlaceholders {
            address: "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48".into(),
            topic: "null".into(),
        };
        let f = filter_for_event(&transfer(false), &ph);
        assert_eq!(f.filter.address, ph.address);
        assert_eq!(f.filter.topics[2], "null");
    }

    #[test]
    fn placeholder_keys_are_suffixed() {
        let ph: FilterPlaceholders =
            serde_json::from_str(r#"{"address_placeholder": "0xabc", "topic_placeholder": "*"}"#)
                .unwrap();
        assert_eq!(ph.address, "0xabc");
        assert_eq!(ph.topic, "*");

        let partial: FilterPlaceholders = serde_json::from_str("{}").unwrap();
        assert_eq!(partial, FilterPlaceholders::default());
    }

    #[test]
    fn pretty_line_lists_topics() {
        let f = filter_for_event(&transfer(false), &FilterPlaceholders::default());
        let line = f.pretty_line();
        assert!(line.starts_with("  Transfer  topics: [0xddf252ad"));
        assert!(line.ends_with("<topic for indexed arg>]"));
    }
}

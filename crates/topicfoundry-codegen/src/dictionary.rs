//! CSV data dictionary: one row per (event, parameter).

use crate::error::CodegenError;
use serde::{Deserialize, Serialize};
use std::io::Write;
use topicfoundry_core::EventModel;

pub const HEADER: [&str; 8] = [
    "contract",
    "event",
    "signature",
    "topic0",
    "position",
    "param",
    "type",
    "indexed",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryRow {
    pub contract: String,
    pub event: String,
    pub signature: String,
    pub topic0: String,
    pub position: usize,
    pub param: String,
    #[serde(rename = "type")]
    pub ty: String,
    /// `1` for topics, `0` for payload fields
    pub indexed: u8,
}

/// Rows for one event, in declaration order. Events without parameters
/// contribute nothing.
pub fn dictionary_rows(ev: &EventModel) -> Vec<DictionaryRow> {
    ev.inputs
        .iter()
        .map(|p| DictionaryRow {
            contract: ev.contract.clone(),
            event: ev.name.clone(),
            signature: ev.signature.clone(),
            topic0: ev.topic0.as_hex().to_string(),
            position: p.position,
            param: p.name.clone(),
            ty: p.ty.clone(),
            indexed: u8::from(p.indexed),
        })
        .collect()
}

/// Write the header and every row for `events` as CSV.
/// The header is written even when there are no rows.
pub fn write_dictionary<W: Write>(events: &[EventModel], out: W) -> Result<(), CodegenError> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(out);
    wtr.write_record(HEADER)?;
    for ev in events {
        for row in dictionary_rows(ev) {
            wtr.serialize(row)?;
        }
    }
    wtr.flush()?;
    Ok(())
}

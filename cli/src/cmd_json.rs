//! `topicfoundry json` — the versioned schema manifest.

use crate::output::emit;
use anyhow::Result;
use std::io::Write;
use std::path::Path;
use topicfoundry_codegen::SchemaManifest;
use topicfoundry_core::EventModel;

pub fn run<W: Write>(events: &[EventModel], path: Option<&Path>, stdout: &mut W) -> Result<()> {
    let doc = SchemaManifest::from_events(events).to_json_pretty()?;
    emit(path, doc.as_bytes(), "JSON schemas", stdout)
}

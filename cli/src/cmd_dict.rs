//! `topicfoundry dict` — CSV data dictionary.

use crate::output::emit;
use anyhow::Result;
use std::io::Write;
use std::path::Path;
use topicfoundry_codegen::write_dictionary;
use topicfoundry_core::EventModel;

pub fn run<W: Write>(events: &[EventModel], path: Option<&Path>, stdout: &mut W) -> Result<()> {
    let mut buf = Vec::new();
    write_dictionary(events, &mut buf)?;
    emit(path, &buf, "dictionary", stdout)
}

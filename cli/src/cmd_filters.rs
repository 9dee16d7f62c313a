//! `topicfoundry filters` — `eth_getLogs` topic stubs, streamed per file.
//!
//! Files are processed in the order given; a file that fails to load stops
//! the run, after the stubs of every earlier file have been written.

use anyhow::{Context, Result};
use std::io::Write;
use std::path::PathBuf;
use topicfoundry_codegen::{filter_for_event, FilterPlaceholders};
use topicfoundry_core::extract_events;

pub fn run<W: Write>(
    files: &[PathBuf],
    placeholders: &FilterPlaceholders,
    pretty: bool,
    out: &mut W,
) -> Result<()> {
    for path in files {
        let events = extract_events(path)?;
        if pretty {
            let name = path
                .file_name()
                .map(|f| f.to_string_lossy().into_owned())
                .unwrap_or_default();
            writeln!(out, "== {name} ==").context("write to stdout")?;
        }
        for ev in &events {
            let filter = filter_for_event(ev, placeholders);
            if pretty {
                writeln!(out, "{}", filter.pretty_line()).context("write to stdout")?;
            } else {
                let line = filter
                    .to_json_line()
                    .with_context(|| format!("serialize filter for {}", ev.name))?;
                writeln!(out, "{line}").context("write to stdout")?;
            }
        }
        if pretty {
            writeln!(out).context("write to stdout")?;
        }
        out.flush().context("write to stdout")?;
    }
    Ok(())
}

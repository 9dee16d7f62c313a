//! `topicfoundry build` — summarize every event.

use anyhow::{Context, Result};
use std::io::Write;
use topicfoundry_core::EventModel;

pub fn run<W: Write>(events: &[EventModel], pretty: bool, out: &mut W) -> Result<()> {
    if pretty {
        out.write_all(render_summary(events).as_bytes()).context("write to stdout")?;
    } else {
        let json = serde_json::to_string_pretty(events)?;
        writeln!(out, "{json}").context("write to stdout")?;
    }
    out.flush().context("write to stdout")?;
    Ok(())
}

/// Human-oriented view: one header line per event, one line per parameter.
pub fn render_summary(events: &[EventModel]) -> String {
    let mut out = String::new();
    for ev in events {
        out.push_str(&format!("{}: {}  topic0={}\n", ev.file, ev.name, ev.topic0));
        for p in &ev.inputs {
            let tag = if p.indexed { "idx" } else { "dat" };
            out.push_str(&format!("   - [{tag}] {}:{}\n", p.name, p.ty));
        }
    }
    out.push_str(&format!("\nTotal events: {}\n", events.len()));
    out
}

//! `topicfoundry ddl` — CREATE TABLE statements for every event.

use anyhow::{Context, Result};
use std::io::Write;
use topicfoundry_codegen::{ddl_for_events, SqlDialect};
use topicfoundry_core::EventModel;
use tracing::debug;

pub fn run<W: Write>(
    events: &[EventModel],
    dialect: SqlDialect,
    schema: &str,
    out: &mut W,
) -> Result<()> {
    debug!(%dialect, schema, tables = events.len(), "generating DDL");
    writeln!(out, "{}", ddl_for_events(events, dialect, schema)).context("write to stdout")?;
    out.flush().context("write to stdout")?;
    Ok(())
}

//! # topicfoundry-codegen
//!
//! Projections of the canonical [`topicfoundry_core::EventModel`]. Every
//! generator is a pure function of one model (plus dialect / placeholder
//! options) and never fails; only the output sinks return errors.
//!
//! - [`sql`]: `CREATE TABLE` per event for PostgreSQL, BigQuery, ClickHouse
//! - [`json_schema`]: closed Draft 2020-12 schema per event
//! - [`manifest`]: the versioned `topicfoundry.v1` schema document
//! - [`dictionary`]: CSV data dictionary, one row per parameter
//! - [`filter`]: `eth_getLogs` topic filter stubs

pub mod dictionary;
pub mod error;
pub mod filter;
pub mod json_schema;
pub mod manifest;
pub mod sql;

pub use dictionary::{dictionary_rows, write_dictionary, DictionaryRow};
pub use error::CodegenError;
pub use filter::{filter_for_event, EventFilter, FilterPlaceholders, LogFilterStub};
pub use json_schema::{json_schema_for_event, EventJsonSchema, JsonType, PropertySchema};
pub use manifest::{SchemaEntry, SchemaManifest, FORMAT_VERSION};
pub use sql::{ddl_for_event, ddl_for_events, sql_type, SqlDialect};

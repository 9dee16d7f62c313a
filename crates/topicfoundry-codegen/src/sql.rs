//! SQL DDL generation.
//!
//! One `CREATE TABLE IF NOT EXISTS` per event. Every table starts with the
//! same six log-envelope columns, followed by one column per parameter
//! (`idx_*` for topics, `data_*` for payload). Dynamic arrays are stored as
//! JSON in every dialect rather than as native array columns.

use crate::error::CodegenError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use topicfoundry_core::{is_array_type, normalize_type, EventModel};
use tracing::trace;

/// Supported SQL targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SqlDialect {
    Postgres,
    BigQuery,
    ClickHouse,
}

// Solidity type → column type. Unlisted types use the dialect fallback.

/// PostgreSQL: raw bytes as `bytea`, 256-bit integers as `numeric(78)`.
const PG_TYPES: &[(&str, &str)] = &[
    ("address", "bytea"),
    ("bool", "boolean"),
    ("bytes32", "bytea"),
    ("bytes", "bytea"),
    ("string", "text"),
    ("uint256", "numeric(78)"),
    ("int256", "numeric(78)"),
];

/// BigQuery: `NUMERIC` only holds 38 digits, so 256-bit integers need `BIGNUMERIC`.
const BQ_TYPES: &[(&str, &str)] = &[
    ("address", "BYTES"),
    ("bool", "BOOL"),
    ("bytes32", "BYTES"),
    ("bytes", "BYTES"),
    ("string", "STRING"),
    ("uint256", "BIGNUMERIC"),
    ("int256", "BIGNUMERIC"),
];

/// ClickHouse: fixed-width strings for addresses and hashes, `Decimal(76,0)` for 256-bit integers.
const CH_TYPES: &[(&str, &str)] = &[
    ("address", "FixedString(20)"),
    ("bool", "UInt8"),
    ("bytes32", "FixedString(32)"),
    ("bytes", "String"),
    ("string", "String"),
    ("uint256", "Decimal(76,0)"),
    ("int256", "Decimal(76,0)"),
];

impl SqlDialect {
    pub const ALL: [SqlDialect; 3] = [
        SqlDialect::Postgres,
        SqlDialect::BigQuery,
        SqlDialect::ClickHouse,
    ];

    fn type_table(self) -> &'static [(&'static str, &'static str)] {
        match self {
            SqlDialect::Postgres => PG_TYPES,
            SqlDialect::BigQuery => BQ_TYPES,
            SqlDialect::ClickHouse => CH_TYPES,
        }
    }

    /// Column type for any Solidity type missing from the table.
    pub fn fallback_type(self) -> &'static str {
        match self {
            SqlDialect::Postgres => "text",
            SqlDialect::BigQuery => "STRING",
            SqlDialect::ClickHouse => "String",
        }
    }

    /// Column type for dynamic arrays.
    pub fn array_type(self) -> &'static str {
        match self {
            SqlDialect::Postgres => "jsonb",
            SqlDialect::BigQuery | SqlDialect::ClickHouse => "JSON",
        }
    }

    /// The log-envelope columns every event table starts with.
    pub fn envelope_columns(self) -> [(&'static str, String); 6] {
        let (block_number, block_time, hash, log_index) = match self {
            SqlDialect::Postgres => ("BIGINT", "TIMESTAMP", "BYTEA", "INT"),
            SqlDialect::BigQuery => ("BIGINT", "TIMESTAMP", "BYTES", "INT"),
            SqlDialect::ClickHouse => ("UInt64", "DateTime", "FixedString(32)", "UInt32"),
        };
        [
            ("block_number", block_number.to_string()),
            ("block_time", block_time.to_string()),
            ("tx_hash", hash.to_string()),
            ("log_index", log_index.to_string()),
            ("address", sql_type("address", self).to_string()),
            ("topic0", hash.to_string()),
        ]
    }

    fn quote_ident(self, ident: &str) -> String {
        match self {
            SqlDialect::Postgres => ident.to_string(),
            SqlDialect::BigQuery | SqlDialect::ClickHouse => format!("`{ident}`"),
        }
    }
}

impl fmt::Display for SqlDialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SqlDialect::Postgres => "postgres",
            SqlDialect::BigQuery => "bigquery",
            SqlDialect::ClickHouse => "clickhouse",
        };
        write!(f, "{s}")
    }
}

impl FromStr for SqlDialect {
    type Err = CodegenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" | "pg" => Ok(SqlDialect::Postgres),
            "bigquery" | "bq" => Ok(SqlDialect::BigQuery),
            "clickhouse" | "ch" => Ok(SqlDialect::ClickHouse),
            other => Err(CodegenError::UnknownDialect(other.to_string())),
        }
    }
}

/// Map a Solidity type to a column type for `dialect`.
pub fn sql_type(sol: &str, dialect: SqlDialect) -> &'static str {
    let ty = normalize_type(sol);
    if is_array_type(&ty) {
        return dialect.array_type();
    }
    dialect
        .type_table()
        .iter()
        .find(|(k, _)| *k == ty)
        .map(|(_, v)| *v)
        .unwrap_or_else(|| {
            trace!(ty = %ty, %dialect, "unmapped type, using fallback");
            dialect.fallback_type()
        })
}

/// Storage clause appended to every ClickHouse table.
const CLICKHOUSE_ENGINE: &str = "ENGINE = MergeTree()\nORDER BY (block_number, log_index);";

/// Render the `CREATE TABLE` statement for one event.
///
/// `schema` qualifies the table name for PostgreSQL only; the other
/// dialects use the bare table name.
pub fn ddl_for_event(ev: &EventModel, dialect: SqlDialect, schema: &str) -> String {
    let table = ev.table_name();

    let mut columns: Vec<(String, String)> = dialect
        .envelope_columns()
        .into_iter()
        .map(|(name, ty)| (name.to_string(), ty))
        .collect();
    for p in &ev.inputs {
        columns.push((p.column_name(), sql_type(&p.ty, dialect).to_string()));
    }

    let body = columns
        .iter()
        .map(|(name, ty)| format!("{} {ty}", dialect.quote_ident(name)))
        .collect::<Vec<_>>()
        .join(",\n  ");

    let comment = if ev.anonymous {
        format!("-- {} (anonymous: no topic0 on chain)", ev.signature)
    } else {
        format!("-- {}", ev.signature)
    };

    match dialect {
        SqlDialect::Postgres => format!(
            "{comment}\nCREATE TABLE IF NOT EXISTS {schema}.{table} (\n  {body}\n);"
        ),
        SqlDialect::BigQuery => format!(
            "{comment}\nCREATE TABLE IF NOT EXISTS `{table}` (\n  {body}\n);"
        ),
        SqlDialect::ClickHouse => format!(
            "{comment}\nCREATE TABLE IF NOT EXISTS {table} (\n  {body}\n)\n{CLICKHOUSE_ENGINE}"
        ),
    }
}

/// All statements, separated by a blank line.
pub fn ddl_for_events(events: &[EventModel], dialect: SqlDialect, schema: &str) -> String {
    events
        .iter()
        .map(|ev| ddl_for_event(ev, dialect, schema))
        .collect::<Vec<_>>()
        .join("\n\n")
}

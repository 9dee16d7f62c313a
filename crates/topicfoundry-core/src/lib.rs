//! # topicfoundry-core
//!
//! The canonical event model every TopicFoundry output is projected from.
//!
//! ## Pipeline
//! - [`abi`] accepts the common ABI container shapes and yields raw entries
//! - [`types`] canonicalizes Solidity type shorthands (`uint` → `uint256`)
//! - [`fingerprint`] builds `Name(type,...)` and its keccak256 `topic0`
//! - [`builder`] turns one raw event entry into an immutable [`EventModel`]

pub mod abi;
pub mod builder;
pub mod error;
pub mod event;
pub mod fingerprint;
pub mod types;

pub use abi::{event_entries, load_abi_file, parse_abi};
pub use builder::{build_event, extract_events};
pub use error::FoundryError;
pub use event::{EventFingerprint, EventModel, Param};
pub use fingerprint::{event_signature_for, keccak256_signature};
pub use types::{is_array_type, is_big_integer, normalize_type};

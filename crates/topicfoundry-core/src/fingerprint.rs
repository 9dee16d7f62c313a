//! Event signature and fingerprint derivation.
//!
//! The fingerprint of an EVM event is the keccak256 hash of its canonical
//! signature string, e.g.:
//!   keccak256("Transfer(address,address,uint256)")
//!   → 0xddf252ad1be2c89b69c2b068fc378daa952ba7f163c4a11628f55a4df523b3ef
//!
//! Indexed and non-indexed parameters both contribute, in declaration order.
//! Parameter names never do.

use crate::event::{EventFingerprint, Param};
use tiny_keccak::{Hasher, Keccak};

/// Build `Name(type1,type2,...)` from already-normalized parameters.
/// A parameter with an empty type contributes an empty slot.
pub fn event_signature_for(name: &str, params: &[Param]) -> String {
    let types: Vec<&str> = params.iter().map(|p| p.ty.as_str()).collect();
    format!("{name}({})", types.join(","))
}

/// Compute the keccak256 fingerprint of an event signature string.
pub fn keccak256_signature(signature: &str) -> EventFingerprint {
    let mut hasher = Keccak::v256();
    let mut output = [0u8; 32];
    hasher.update(signature.as_bytes());
    hasher.finalize(&mut output);
    EventFingerprint::new(format!("0x{}", hex::encode(output)))
}

//! Solidity type canonicalization.
//!
//! ABIs in the wild still carry the `uint` / `int` shorthands. The canonical
//! signature (and therefore `topic0`) is only correct once those are widened
//! to their 256-bit spelling. Every other type string is opaque here:
//! arrays, `bytesN`, `uintN`, tuples and user types pass through untouched.

/// Canonicalize a Solidity type shorthand.
pub fn normalize_type(ty: &str) -> String {
    match ty {
        "uint" => "uint256".to_string(),
        "int" => "int256".to_string(),
        other => other.to_string(),
    }
}

/// Dynamic array (`T[]`). Fixed-size arrays such as `uint256[3]` are not
/// matched and fall through to the generators' fallback types.
pub fn is_array_type(ty: &str) -> bool {
    ty.ends_with("[]")
}

/// 256-bit integers, the only integer widths that overflow common SQL and
/// JSON number types.
pub fn is_big_integer(ty: &str) -> bool {
    matches!(ty, "uint256" | "int256")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widens_shorthands() {
        assert_eq!(normalize_type("uint"), "uint256");
        assert_eq!(normalize_type("int"), "int256");
    }

    #[test]
    fn passes_everything_else_through() {
        for ty in [
            "uint8",
            "int24",
            "address",
            "bool",
            "string",
            "bytes",
            "bytes32",
            "uint[]",
            "tuple",
            "",
        ] {
            assert_eq!(normalize_type(ty), ty);
        }
    }

    #[test]
    fn array_detection() {
        assert!(is_array_type("address[]"));
        assert!(is_array_type("uint256[][]"));
        assert!(!is_array_type("uint256[3]"));
        assert!(!is_array_type("bytes"));
    }

    #[test]
    fn big_integer_detection() {
        assert!(is_big_integer("uint256"));
        assert!(is_big_integer("int256"));
        assert!(!is_big_integer("uint128"));
        assert!(!is_big_integer("uint"));
    }
}

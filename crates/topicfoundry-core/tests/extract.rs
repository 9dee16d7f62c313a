//! Fixture-driven extraction tests.
//!
//! Each fixture under `fixtures/abi/` uses a different ABI container shape;
//! all of them must produce the same canonical models.

use std::path::{Path, PathBuf};
use topicfoundry_core::{extract_events, FoundryError};

// ─── Helpers ──────────────────────────────────────────────────────────────────

/// The fixtures live two levels above the crate root.
fn fixture_path(rel: &str) -> PathBuf {
    let mut p = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    p.push("../../fixtures");
    p.push(rel);
    p
}

// ─── Container shapes ─────────────────────────────────────────────────────────

#[test]
fn bare_array_skips_functions_and_errors() {
    let events = extract_events(&fixture_path("abi/ERC20.json")).unwrap();
    let names: Vec<_> = events.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["Transfer", "Approval"]);
    assert!(events.iter().all(|e| e.contract == "ERC20"));
    assert!(events.iter().all(|e| e.file == "ERC20.json"));
}

#[test]
fn hardhat_artifact() {
    let events = extract_events(&fixture_path("abi/UniswapV3Pool.json")).unwrap();
    assert_eq!(events.len(), 1);
    let swap = &events[0];
    assert_eq!(
        swap.signature,
        "Swap(address,address,int256,int256,uint160,uint128,int24)"
    );
    assert_eq!(
        swap.topic0.as_hex(),
        "0xc42079f94a6350d7e6235f29174924f928cc2ac818eb64fed8004e115fbcca67"
    );
    assert_eq!(swap.indexed_count(), 2);
}

#[test]
fn explorer_export_with_shorthand_types() {
    let events = extract_events(&fixture_path("abi/WETH9.json")).unwrap();
    assert_eq!(events.len(), 3);

    let deposit = &events[0];
    assert_eq!(deposit.signature, "Deposit(address,uint256)");
    assert_eq!(deposit.inputs[1].ty, "uint256");
    assert_eq!(
        deposit.topic0.as_hex(),
        "0xe1fffcc4923d04b559f4d29a8bfc6cda04eb5b0d3c460751c2402c5c5cc9109c"
    );

    let batch = &events[1];
    assert_eq!(batch.inputs[0].name, "arg0");

    let logged = &events[2];
    assert!(logged.anonymous);
}

// ─── Invariants ───────────────────────────────────────────────────────────────

#[test]
fn positions_are_contiguous_for_every_fixture() {
    for name in ["abi/ERC20.json", "abi/UniswapV3Pool.json", "abi/WETH9.json"] {
        for ev in extract_events(&fixture_path(name)).unwrap() {
            let positions: Vec<_> = ev.inputs.iter().map(|p| p.position).collect();
            let expected: Vec<_> = (0..ev.inputs.len()).collect();
            assert_eq!(positions, expected, "{}::{}", ev.contract, ev.name);
        }
    }
}

#[test]
fn same_signature_same_topic0_across_files() {
    let erc20 = extract_events(&fixture_path("abi/ERC20.json")).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let copy = dir.path().join("OtherToken.json");
    let renamed = r#"[{"type":"event","name":"Transfer","inputs":[
        {"name":"src","type":"address","indexed":true},
        {"name":"dst","type":"address","indexed":true},
        {"name":"wad","type":"uint","indexed":false}]}]"#;
    std::fs::write(&copy, renamed).unwrap();

    let other = extract_events(&copy).unwrap();
    assert_eq!(other[0].contract, "OtherToken");
    assert_eq!(other[0].signature, erc20[0].signature);
    assert_eq!(other[0].topic0, erc20[0].topic0);
}

// ─── Failure modes ────────────────────────────────────────────────────────────

#[test]
fn malformed_file_fails_without_affecting_others() {
    let broken = fixture_path("invalid/Broken.json");
    let err = extract_events(&broken).unwrap_err();
    assert!(matches!(err, FoundryError::Format { .. }));
    assert!(err.to_string().contains("Broken.json"));

    // Files are independent: a valid file still extracts afterwards.
    assert_eq!(
        extract_events(&fixture_path("abi/ERC20.json")).unwrap().len(),
        2
    );
}

#[test]
fn unreadable_path_is_io_error() {
    let err = extract_events(Path::new("/nonexistent/Nothing.json")).unwrap_err();
    assert!(matches!(err, FoundryError::Io { .. }));
}

//! Input path resolution.
//!
//! Each argument is expanded as a glob. A pattern that matches nothing is
//! still accepted when it names an existing file (e.g. a path containing
//! literal `[` characters). The result is sorted and de-duplicated.

use std::collections::BTreeSet;
use std::path::PathBuf;
use topicfoundry_core::FoundryError;
use tracing::debug;

pub fn resolve_inputs(patterns: &[String]) -> Result<Vec<PathBuf>, FoundryError> {
    let mut found = BTreeSet::new();

    for pattern in patterns {
        let mut matched = false;
        if let Ok(paths) = glob::glob(pattern) {
            for path in paths.flatten().filter(|p| p.is_file()) {
                matched = true;
                found.insert(path);
            }
        }
        if !matched {
            let literal = PathBuf::from(pattern);
            if literal.is_file() {
                found.insert(literal);
            } else {
                debug!(pattern = %pattern, "pattern matched no files");
            }
        }
    }

    if found.is_empty() {
        return Err(FoundryError::Resolution {
            patterns: patterns.to_vec(),
        });
    }
    Ok(found.into_iter().collect())
}

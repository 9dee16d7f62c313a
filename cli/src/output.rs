//! Output sinks: stdout, or a file announced on stdout.
//!
//! Everything goes through a `Write` handle so that a closed pipe surfaces
//! as an error and a non-zero exit rather than a panic.

use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Write `content` to `path` (announcing it on `stdout` with
/// `"Wrote {label}: {path}"`), or straight to `stdout` when no path is given.
pub fn emit<W: Write>(
    path: Option<&Path>,
    content: &[u8],
    label: &str,
    stdout: &mut W,
) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("write output file '{}'", path.display()))?;
            info!(path = %path.display(), bytes = content.len(), "wrote {label}");
            writeln!(stdout, "Wrote {label}: {}", path.display()).context("write to stdout")?;
        }
        None => {
            stdout.write_all(content).context("write to stdout")?;
            if !content.ends_with(b"\n") {
                stdout.write_all(b"\n").context("write to stdout")?;
            }
        }
    }
    stdout.flush().context("write to stdout")?;
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::testing::ClosedPipe;
    use super::*;

    #[test]
    fn writes_file_and_announces_it() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let mut stdout = Vec::new();
        emit(Some(&path), b"a,b\n", "dictionary", &mut stdout).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "a,b\n");
        assert_eq!(
            String::from_utf8(stdout).unwrap(),
            format!("Wrote dictionary: {}\n", path.display())
        );
    }

    #[test]
    fn stdout_gets_trailing_newline() {
        let mut stdout = Vec::new();
        emit(None, b"{}", "JSON schemas", &mut stdout).unwrap();
        assert_eq!(stdout, b"{}\n");
    }

    #[test]
    fn unwritable_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing-dir").join("out.json");
        let err = emit(Some(&path), b"{}", "JSON schemas", &mut Vec::new()).unwrap_err();
        assert!(format!("{err:#}").contains("out.json"));
    }

    #[test]
    fn closed_stdout_is_an_error() {
        let err = emit(None, b"a,b\n", "dictionary", &mut ClosedPipe).unwrap_err();
        assert!(format!("{err:#}").contains("write to stdout"));
    }
}

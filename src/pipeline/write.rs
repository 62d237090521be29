//! Output: write the cleaned text to disk.
//!
//! The destination is truncated and written in one call. Missing parent
//! directories are an error, not something this stage creates.

use crate::error::TextCleanError;
use std::path::Path;
use tracing::info;

/// Write `text` as UTF-8 to `path`, replacing any existing file.
pub fn write_output(path: &Path, text: &str) -> Result<(), TextCleanError> {
    std::fs::write(path, text).map_err(|e| TextCleanError::OutputWriteFailed {
        path: path.to_path_buf(),
        source: e,
    })?;
    info!("Wrote {} bytes to {}", text.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_and_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");

        write_output(&path, "a much longer first version of the text").unwrap();
        write_output(&path, "short ünïcode").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "short ünïcode");
    }

    #[test]
    fn missing_parent_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.txt");

        let err = write_output(&path, "text").unwrap_err();
        match err {
            TextCleanError::OutputWriteFailed { path: p, .. } => assert_eq!(p, path),
            other => panic!("unexpected error: {other}"),
        }
        assert!(!dir.path().join("missing").exists());
    }
}

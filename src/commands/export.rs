/// Export of the shade result as a source snippet on disk.
use std::fs;
use std::io;
use std::path::Path;

use tracing::info;

use crate::color::{ShadeError, ShadeResult, render_export};

/// Destination for rendered export snippets.
pub trait ExportWriter {
    /// Write `contents` to `path`, replacing whatever is there.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O failure.
    fn write(&self, path: &Path, contents: &str) -> io::Result<()>;
}

/// Writes straight to the filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsWriter;

impl ExportWriter for FsWriter {
    fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        fs::write(path, contents)
    }
}

/// Render `result` and hand it to `writer`. Returns once the write has finished.
///
/// # Errors
///
/// Returns `ShadeError::Serialize` if rendering fails, or `ShadeError::Write`
/// carrying the path if the write fails.
pub fn export<X: ExportWriter + ?Sized>(
    result: &ShadeResult,
    path: &Path,
    writer: &X,
) -> Result<(), ShadeError> {
    let snippet = render_export(result)?;
    writer
        .write(path, &snippet)
        .map_err(|source| ShadeError::Write {
            path: path.to_path_buf(),
            source,
        })?;
    info!(path = %path.display(), bytes = snippet.len(), "wrote export");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fs_writer_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("theme.js");
        fs::write(&path, "stale contents that are longer than the new ones").unwrap();

        let result = ShadeResult::Array(vec!["#123456".to_owned()]);
        export(&result, &path, &FsWriter).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, render_export(&result).unwrap());
    }

    #[test]
    fn test_missing_directory_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("theme.js");

        let err = export(&ShadeResult::Array(Vec::new()), &path, &FsWriter).unwrap_err();
        match err {
            ShadeError::Write { path: p, .. } => assert_eq!(p, path),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}

//! Base64 encoding of rendered bytes and output-file writing.

use std::fs;
use std::path::{Path, PathBuf};

use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::error::{Error, Result};

/// Resolved absolute paths of the written output files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifacts {
    /// Path of the written Word document
    pub document_path: PathBuf,

    /// Path of the written base64 text file
    pub encoded_path: PathBuf,
}

/// Encode bytes as standard padded base64.
pub fn to_base64(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Write the rendered document bytes and their base64 encoding to disk.
///
/// The document bytes go to `document_path` verbatim; the base64 text goes
/// to `encoded_path` as UTF-8. Existing files are overwritten. There is no
/// partial-write recovery: the first failed write aborts the run, and the
/// error names the failing path.
pub fn write_artifacts(
    bytes: &[u8],
    document_path: &Path,
    encoded_path: &Path,
) -> Result<Artifacts> {
    fs::write(document_path, bytes).map_err(|source| Error::WriteFile {
        path: document_path.to_path_buf(),
        source,
    })?;

    let encoded = to_base64(bytes);
    log::debug!(
        "encoded {} document bytes into {} base64 chars",
        bytes.len(),
        encoded.len()
    );
    fs::write(encoded_path, &encoded).map_err(|source| Error::WriteFile {
        path: encoded_path.to_path_buf(),
        source,
    })?;

    Ok(Artifacts {
        document_path: resolve(document_path)?,
        encoded_path: resolve(encoded_path)?,
    })
}

fn resolve(path: &Path) -> Result<PathBuf> {
    fs::canonicalize(path).map_err(|source| Error::WriteFile {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_base64_known_vector() {
        assert_eq!(to_base64(b"hello"), "aGVsbG8=");
    }

    #[test]
    fn test_to_base64_empty() {
        assert_eq!(to_base64(b""), "");
    }

    #[test]
    fn test_to_base64_is_padded_standard_alphabet() {
        // 0xfb 0xff exercises '+' and '/' in the standard alphabet
        let encoded = to_base64(&[0xfb, 0xff, 0xbf]);
        assert_eq!(encoded, "+/+/");
        let encoded = to_base64(&[0xff]);
        assert!(encoded.ends_with("=="));
    }

    #[test]
    fn test_write_artifacts_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let docx = dir.path().join("out.docx");
        let b64 = dir.path().join("out.docx.b64");

        let bytes = b"PK\x03\x04 not a real docx";
        let artifacts = write_artifacts(bytes, &docx, &b64).unwrap();

        assert!(artifacts.document_path.is_absolute());
        assert!(artifacts.encoded_path.is_absolute());
        assert_eq!(fs::read(&artifacts.document_path).unwrap(), bytes);

        let encoded = fs::read_to_string(&artifacts.encoded_path).unwrap();
        assert_eq!(STANDARD.decode(encoded).unwrap(), bytes);
    }

    #[test]
    fn test_write_artifacts_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let docx = dir.path().join("out.docx");
        let b64 = dir.path().join("out.docx.b64");

        write_artifacts(b"first", &docx, &b64).unwrap();
        write_artifacts(b"second", &docx, &b64).unwrap();

        assert_eq!(fs::read(&docx).unwrap(), b"second");
        assert_eq!(fs::read_to_string(&b64).unwrap(), to_base64(b"second"));
    }

    #[test]
    fn test_write_artifacts_reports_failing_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("no-such-dir").join("out.docx");
        let b64 = dir.path().join("out.docx.b64");

        let err = write_artifacts(b"bytes", &missing, &b64).unwrap_err();
        match err {
            Error::WriteFile { path, .. } => assert_eq!(path, missing),
            other => panic!("expected WriteFile, got {other:?}"),
        }
        // First write failed, so nothing was written at all
        assert!(!b64.exists());
    }
}

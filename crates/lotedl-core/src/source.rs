//! URL list reader: UTF-8 with Latin-1 fallback, trimmed non-blank lines.

use crate::error::SetupError;
use std::fs;
use std::io;
use std::path::Path;

/// Read the URL list from `path`. Order is preserved and duplicates are kept;
/// blank lines are dropped and surrounding whitespace is trimmed.
pub fn read_urls(path: &Path) -> Result<Vec<String>, SetupError> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(SetupError::UrlFileMissing(path.to_path_buf()));
        }
        Err(e) => {
            return Err(SetupError::UrlFileUnreadable {
                path: path.to_path_buf(),
                source: e,
            });
        }
    };

    let text = decode(bytes);
    Ok(text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect())
}

/// UTF-8 first; invalid UTF-8 falls back to Latin-1, where every byte maps to
/// the Unicode code point of the same value.
fn decode(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => e.into_bytes().iter().map(|&b| b as char).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_list(dir: &tempfile::TempDir, bytes: &[u8]) -> std::path::PathBuf {
        let path = dir.path().join("descargas.txt");
        let mut f = fs::File::create(&path).unwrap();
        f.write_all(bytes).unwrap();
        path
    }

    #[test]
    fn preserves_order_trims_and_drops_blanks() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_list(&dir, b"  https://a \n\n\t\nhttps://b\nhttps://a\n");
        let urls = read_urls(&path).unwrap();
        assert_eq!(urls, vec!["https://a", "https://b", "https://a"]);
    }

    #[test]
    fn latin1_fallback_decodes_non_utf8_bytes() {
        let dir = tempfile::tempdir().unwrap();
        // 0xE9 is 'é' in Latin-1 and invalid as a standalone UTF-8 byte.
        let path = write_list(&dir, b"https://example.com/caf\xe9\n");
        let urls = read_urls(&path).unwrap();
        assert_eq!(urls, vec!["https://example.com/café"]);
    }

    #[test]
    fn valid_utf8_is_not_mangled() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_list(&dir, "https://example.com/niño\n".as_bytes());
        let urls = read_urls(&path).unwrap();
        assert_eq!(urls, vec!["https://example.com/niño"]);
    }

    #[test]
    fn missing_file_is_a_setup_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_urls(&dir.path().join("nope.txt")).unwrap_err();
        assert!(matches!(err, SetupError::UrlFileMissing(_)));
    }

    #[test]
    fn empty_file_yields_empty_list() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_list(&dir, b"\n  \n");
        assert!(read_urls(&path).unwrap().is_empty());
    }
}

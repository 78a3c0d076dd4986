// src/input.rs
// =============================================================================
// Reads the list of URLs to check from a file.
//
// File format: one URL per line. Surrounding whitespace is trimmed and blank
// lines are skipped, so a trailing newline or an indented list is fine.
// =============================================================================

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("input file not found, {} 🤦", .0.display())]
    NotFound(PathBuf),

    #[error("empty input file, {} 🤷", .0.display())]
    Empty(PathBuf),

    #[error("failed to read {}: {source} ❗", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Reads URLs from `path`, one per line.
pub fn read_urls_from_file(path: &Path) -> Result<Vec<String>, InputError> {
    if !path.is_file() {
        return Err(InputError::NotFound(path.to_path_buf()));
    }

    let content = fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let urls = parse_url_list(&content);
    if urls.is_empty() {
        return Err(InputError::Empty(path.to_path_buf()));
    }

    Ok(urls)
}

fn parse_url_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_reads_and_trims_lines() {
        let file = write_temp("  https://python.org \nhttps://rust-lang.org\r\n\n\t\nhttps://example.com");
        let urls = read_urls_from_file(file.path()).unwrap();
        assert_eq!(
            urls,
            vec!["https://python.org", "https://rust-lang.org", "https://example.com"]
        );
    }

    #[test]
    fn test_empty_file_is_an_error() {
        let file = write_temp("\n   \n");
        let err = read_urls_from_file(file.path()).unwrap_err();
        assert!(matches!(err, InputError::Empty(_)));
        assert_eq!(err.to_string(), format!("empty input file, {} 🤷", file.path().display()));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("urls.txt");
        let err = read_urls_from_file(&missing).unwrap_err();
        assert!(matches!(err, InputError::NotFound(_)));
        assert_eq!(err.to_string(), format!("input file not found, {} 🤦", missing.display()));
    }

    #[test]
    fn test_directory_is_not_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_urls_from_file(dir.path()).unwrap_err();
        assert!(matches!(err, InputError::NotFound(_)));
    }
}

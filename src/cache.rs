// src/cache.rs
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::error::{CantoError, Result};

pub const CACHE_FILE_NAME: &str = "words.json";

/// Word -> occurrence count, ordered by word so the cache file is stable.
pub type WordCounts = BTreeMap<String, usize>;

pub fn cache_path(dir: &Path) -> PathBuf {
    dir.join(CACHE_FILE_NAME)
}

/// Replaces the cache file with `counts`. Prior content is truncated, never merged.
pub fn write_word_counts(dir: &Path, counts: &WordCounts) -> Result<PathBuf> {
    let path = cache_path(dir);
    let file = File::create(&path).map_err(|e| CantoError::io(&path, e))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, counts)?;
    writer.flush().map_err(|e| CantoError::io(&path, e))?;
    info!("Wrote {} word count(s) to {}", counts.len(), path.display());
    Ok(path)
}

pub fn read_word_counts(dir: &Path) -> Result<WordCounts> {
    let path = cache_path(dir);
    debug!("Reading word counts from {}", path.display());
    let content = fs::read_to_string(&path).map_err(|e| CantoError::io(&path, e))?;
    Ok(serde_json::from_str(&content)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn write_overwrites_previous_snapshot() {
        let dir = tempdir().unwrap();

        let first: WordCounts = [("nel".to_string(), 3), ("mezzo".to_string(), 1)].into();
        write_word_counts(dir.path(), &first).unwrap();

        let second: WordCounts = [("vita".to_string(), 2)].into();
        let path = write_word_counts(dir.path(), &second).unwrap();

        assert_eq!(path, dir.path().join("words.json"));
        assert_eq!(read_word_counts(dir.path()).unwrap(), second);
        assert_eq!(fs::read_to_string(path).unwrap(), r#"{"vita":2}"#);
    }

    #[test]
    fn missing_cache_is_an_io_error() {
        let dir = tempdir().unwrap();
        match read_word_counts(dir.path()) {
            Err(CantoError::Io { path, .. }) => assert_eq!(path, dir.path().join("words.json")),
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn malformed_cache_is_a_serialization_error() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("words.json"), "[1, 2").unwrap();
        assert!(matches!(
            read_word_counts(dir.path()),
            Err(CantoError::Serialization(_))
        ));
    }
}

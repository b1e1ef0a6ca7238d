// src/repository.rs
use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::cache::{self, WordCounts};
use crate::canto::{CantoNumber, canto_number_from_filename};
use crate::error::{CantoError, Result};

/// How verses are returned by [`CantoRepository::read_canto_lines`].
///
/// `max_lines` truncates first, then `strip` trims every remaining verse.
/// `Some(0)` is an explicit request for zero verses; `None` means no limit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReadOptions {
    pub strip: bool,
    pub max_lines: Option<usize>,
}

impl ReadOptions {
    pub fn stripped() -> Self {
        Self {
            strip: true,
            max_lines: None,
        }
    }

    pub fn first(max_lines: usize) -> Self {
        Self {
            strip: false,
            max_lines: Some(max_lines),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LongestCanto {
    pub canto_number: CantoNumber,
    pub verse_count: usize,
}

/// Read-only view over a directory of `Canto_<n>.txt` files.
///
/// Nothing is cached between calls; every operation reads the files afresh.
#[derive(Debug, Clone)]
pub struct CantoRepository {
    dir: PathBuf,
}

impl CantoRepository {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn canto_path(&self, canto: CantoNumber) -> PathBuf {
        self.dir.join(canto.file_name())
    }

    pub fn read_canto_lines(&self, canto_number: u32, options: ReadOptions) -> Result<Vec<String>> {
        self.load(CantoNumber::new(canto_number)?, options)
    }

    pub fn read_canto_lines_raw(&self, canto_number: u32) -> Result<Vec<String>> {
        self.read_canto_lines(canto_number, ReadOptions::default())
    }

    pub fn verse_count(&self, canto_number: u32) -> Result<usize> {
        Ok(self.read_canto_lines_raw(canto_number)?.len())
    }

    /// Complete groups of three verses.
    pub fn tercet_count(&self, canto_number: u32) -> Result<usize> {
        Ok(self.verse_count(canto_number)? / 3)
    }

    /// Non-overlapping substring matches of `word`, summed over every verse.
    pub fn count_word_occurrences(&self, canto_number: u32, word: &str) -> Result<usize> {
        check_word(word)?;
        let verses = self.read_canto_lines_raw(canto_number)?;
        Ok(occurrences(&verses, word))
    }

    pub fn first_verse_containing(&self, canto_number: u32, word: &str) -> Result<Option<String>> {
        check_word(word)?;
        let verses = self.read_canto_lines_raw(canto_number)?;
        Ok(verses.into_iter().find(|verse| verse.contains(word)))
    }

    pub fn all_verses_containing(&self, canto_number: u32, word: &str) -> Result<Vec<String>> {
        check_word(word)?;
        let verses = self.read_canto_lines_raw(canto_number)?;
        Ok(verses
            .into_iter()
            .filter(|verse| verse.contains(word))
            .collect())
    }

    /// Longest stripped verse, measured in characters. Ties keep the earliest verse.
    pub fn longest_verse(&self, canto_number: u32) -> Result<Option<String>> {
        let verses = self.read_canto_lines(canto_number, ReadOptions::stripped())?;

        let mut longest: Option<(usize, String)> = None;
        for verse in verses {
            let len = verse.chars().count();
            if longest.as_ref().is_none_or(|(max, _)| len > *max) {
                longest = Some((len, verse));
            }
        }
        Ok(longest.map(|(_, verse)| verse))
    }

    /// Canto with the most verses among the files present. Cantos are scanned in
    /// ascending order and ties keep the lower canto number.
    pub fn longest_canto(&self) -> Result<Option<LongestCanto>> {
        let mut longest: Option<LongestCanto> = None;
        for canto in self.canto_numbers()? {
            let verse_count = self.load(canto, ReadOptions::default())?.len();
            if longest.is_none_or(|current| verse_count > current.verse_count) {
                longest = Some(LongestCanto {
                    canto_number: canto,
                    verse_count,
                });
            }
        }
        Ok(longest)
    }

    /// Counts each of `words` in the canto and replaces `words.json` with the result.
    pub fn count_words<S: AsRef<str>>(&self, canto_number: u32, words: &[S]) -> Result<WordCounts> {
        for word in words {
            check_word(word.as_ref())?;
        }
        let verses = self.read_canto_lines_raw(canto_number)?;

        let counts: WordCounts = words
            .iter()
            .map(|word| {
                let word = word.as_ref();
                (word.to_string(), occurrences(&verses, word))
            })
            .collect();

        cache::write_word_counts(&self.dir, &counts)?;
        Ok(counts)
    }

    /// Reads back the snapshot written by the last [`count_words`](Self::count_words).
    pub fn read_word_counts(&self) -> Result<WordCounts> {
        cache::read_word_counts(&self.dir)
    }

    /// Stripped verses of every canto file, in ascending canto order.
    pub fn all_verses_across_cantos(&self) -> Result<Vec<String>> {
        self.stripped_verses_of(&self.canto_numbers()?)
    }

    pub fn total_verse_count_across_cantos(&self) -> Result<usize> {
        Ok(self.all_verses_across_cantos()?.len())
    }

    pub fn mean_verses_per_file(&self) -> Result<f64> {
        let cantos = self.canto_numbers()?;
        if cantos.is_empty() {
            return Err(CantoError::DivisionUndefined);
        }
        let total = self.stripped_verses_of(&cantos)?.len();
        Ok(total as f64 / cantos.len() as f64)
    }

    /// Canto files present in the directory, sorted by number.
    ///
    /// Entries that are not `Canto_<n>.txt` files are skipped. A well-formed
    /// name outside `1..=34` is an error.
    pub fn canto_numbers(&self) -> Result<Vec<CantoNumber>> {
        let entries = fs::read_dir(&self.dir).map_err(|e| CantoError::io(&self.dir, e))?;

        let mut cantos = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| CantoError::io(&self.dir, e))?;
            let path = entry.path();
            let Some(name) = entry.file_name().to_str().map(str::to_owned) else {
                debug!("Skipping non UTF-8 entry {}", path.display());
                continue;
            };
            if !path.is_file() {
                debug!("Skipping {}: not a file", path.display());
                continue;
            }
            match canto_number_from_filename(&name) {
                Ok(n) => cantos.push(CantoNumber::new(n)?),
                Err(_) => debug!("Skipping {}: not a canto file", path.display()),
            }
        }
        cantos.sort_unstable();
        Ok(cantos)
    }

    fn stripped_verses_of(&self, cantos: &[CantoNumber]) -> Result<Vec<String>> {
        let mut verses = Vec::new();
        for &canto in cantos {
            verses.extend(self.load(canto, ReadOptions::stripped())?);
        }
        Ok(verses)
    }

    fn load(&self, canto: CantoNumber, options: ReadOptions) -> Result<Vec<String>> {
        let path = self.canto_path(canto);
        debug!("Reading canto {} from {}", canto, path.display());
        let content = fs::read_to_string(&path).map_err(|e| CantoError::io(&path, e))?;

        let limit = options.max_lines.unwrap_or(usize::MAX);
        let verses = content.split_inclusive('\n').take(limit);
        Ok(if options.strip {
            verses.map(|verse| verse.trim().to_string()).collect()
        } else {
            verses.map(str::to_string).collect()
        })
    }
}

fn check_word(word: &str) -> Result<()> {
    if word.is_empty() {
        return Err(CantoError::InvalidArgument(
            "search word must not be empty".to_string(),
        ));
    }
    Ok(())
}

fn occurrences(verses: &[String], word: &str) -> usize {
    verses.iter().map(|verse| verse.matches(word).count()).sum()
}

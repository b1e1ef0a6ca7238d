// src/canto.rs
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CantoError, Result};

pub const FIRST_CANTO: u32 = 1;
pub const LAST_CANTO: u32 = 34;

const FILE_PREFIX: &str = "Canto_";
const FILE_SUFFIX: &str = ".txt";

/// A canto identifier, guaranteed to lie in `1..=34`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct CantoNumber(u32);

impl CantoNumber {
    pub fn new(n: u32) -> Result<Self> {
        if (FIRST_CANTO..=LAST_CANTO).contains(&n) {
            Ok(Self(n))
        } else {
            Err(CantoError::CantoNotFound(i64::from(n)))
        }
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// Canonical file backing this canto, e.g. `Canto_7.txt`.
    pub fn file_name(self) -> String {
        format!("{FILE_PREFIX}{}{FILE_SUFFIX}", self.0)
    }
}

impl fmt::Display for CantoNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u32> for CantoNumber {
    type Error = CantoError;

    fn try_from(n: u32) -> Result<Self> {
        Self::new(n)
    }
}

impl From<CantoNumber> for u32 {
    fn from(n: CantoNumber) -> u32 {
        n.0
    }
}

impl FromStr for CantoNumber {
    type Err = CantoError;

    fn from_str(s: &str) -> Result<Self> {
        let n: i64 = s.trim().parse().map_err(|_| {
            CantoError::InvalidArgument(format!("canto_number must be an integer, got '{s}'"))
        })?;
        match u32::try_from(n) {
            Ok(n) => Self::new(n),
            Err(_) => Err(CantoError::CantoNotFound(n)),
        }
    }
}

/// Extracts the number from a `Canto_<digits>.txt` file name.
///
/// Only the shape of the name is checked here; range validation is left to
/// [`CantoNumber::new`]. Leading zeros are rejected so that every number maps
/// to exactly one file name.
pub fn canto_number_from_filename(file_name: &str) -> Result<u32> {
    let malformed =
        || CantoError::InvalidArgument(format!("'{file_name}' is not a Canto_<n>.txt file name"));

    let digits = file_name
        .strip_prefix(FILE_PREFIX)
        .and_then(|rest| rest.strip_suffix(FILE_SUFFIX))
        .ok_or_else(malformed)?;

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed());
    }
    if digits.len() > 1 && digits.starts_with('0') {
        return Err(malformed());
    }
    digits.parse().map_err(|_| malformed())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_single_and_double_digit_names() {
        assert_eq!(canto_number_from_filename("Canto_5.txt").unwrap(), 5);
        assert_eq!(canto_number_from_filename("Canto_33.txt").unwrap(), 33);
    }

    #[test]
    fn rejects_malformed_names() {
        for name in [
            "words.json",
            "Canto_.txt",
            "Canto_3a.txt",
            "Canto_+3.txt",
            "canto_3.txt",
            "Canto_3.md",
            "Canto_99999999999.txt",
            "Canto_05.txt",
            "Canto_007.txt",
            "Canto_00.txt",
        ] {
            match canto_number_from_filename(name) {
                Err(CantoError::InvalidArgument(msg)) => assert!(msg.contains(name)),
                other => panic!("expected InvalidArgument for {name}, got {other:?}"),
            }
        }
    }

    #[test]
    fn range_is_enforced() {
        assert!(CantoNumber::new(1).is_ok());
        assert!(CantoNumber::new(34).is_ok());
        assert!(matches!(CantoNumber::new(0), Err(CantoError::CantoNotFound(0))));
        assert!(matches!(CantoNumber::new(35), Err(CantoError::CantoNotFound(35))));
    }

    #[test]
    fn from_str_distinguishes_bad_input_from_out_of_range() {
        assert_eq!("12".parse::<CantoNumber>().unwrap().get(), 12);
        assert!(matches!(
            "twelve".parse::<CantoNumber>(),
            Err(CantoError::InvalidArgument(_))
        ));
        assert!(matches!(
            "-4".parse::<CantoNumber>(),
            Err(CantoError::CantoNotFound(-4))
        ));
        assert!(matches!(
            "35".parse::<CantoNumber>(),
            Err(CantoError::CantoNotFound(35))
        ));
    }

    #[test]
    fn serde_goes_through_range_check() {
        let n = CantoNumber::new(9).unwrap();
        assert_eq!(serde_json::to_string(&n).unwrap(), "9");
        assert_eq!(serde_json::from_str::<CantoNumber>("9").unwrap(), n);
        assert!(serde_json::from_str::<CantoNumber>("0").is_err());
        assert!(serde_json::from_str::<CantoNumber>("35").is_err());
    }

    #[test]
    fn file_name_round_trips_through_parser() {
        let n = CantoNumber::new(21).unwrap();
        assert_eq!(n.file_name(), "Canto_21.txt");
        assert_eq!(canto_number_from_filename(&n.file_name()).unwrap(), 21);
    }
}

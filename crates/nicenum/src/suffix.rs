//! Suffix families and the magnitude-suffix registry.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::NiceNumError;

/// Suffixes for plain numbers, one per power of 1000.
pub const NUMBER_SUFFIXES: &[&str] = &["K", "M", "B", "T", "Q"];

/// Suffixes for file sizes, one per power of 1000.
pub const FILESIZE_SUFFIXES: &[&str] = &["KB", "MB", "GB", "TB", "PB"];

/// A named set of magnitude suffixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Family {
    /// Plain numbers: K, M, B, T, Q.
    Number,
    /// File sizes: KB, MB, GB, TB, PB.
    Filesize,
}

impl Family {
    /// Valid family names, for error messages.
    pub const VALID: &'static [&'static str] = &["number", "filesize"];

    /// The ordered suffix table for this family.
    pub fn suffixes(&self) -> &'static [&'static str] {
        match self {
            Family::Number => NUMBER_SUFFIXES,
            Family::Filesize => FILESIZE_SUFFIXES,
        }
    }

    /// String form of the family name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Family::Number => "number",
            Family::Filesize => "filesize",
        }
    }
}

impl Default for Family {
    fn default() -> Self {
        Family::Number
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Family {
    type Err = NiceNumError;

    /// Family names are always validated here, before any custom suffix
    /// list is considered.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "number" => Ok(Family::Number),
            "filesize" => Ok(Family::Filesize),
            _ => Err(NiceNumError::InvalidFamily {
                family: s.to_string(),
                valid: Family::VALID,
            }),
        }
    }
}

/// Build the full suffix list for a conversion.
///
/// The empty string is always prepended so index 0 means "no suffix, raw
/// magnitude". A non-empty `custom` list overrides the family's table; an
/// empty one falls back to it.
pub fn suffix_list(family: Family, custom: Option<&[String]>, lower: bool) -> Vec<String> {
    let mut list = Vec::new();
    list.push(String::new());
    match custom {
        Some(c) if !c.is_empty() => list.extend(c.iter().cloned()),
        _ => list.extend(family.suffixes().iter().map(|s| s.to_string())),
    }
    if lower {
        for s in &mut list {
            *s = s.to_lowercase();
        }
    }
    list
}

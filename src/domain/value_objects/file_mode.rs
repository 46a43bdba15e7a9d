//! File permission value object
//!
//! Declarations spell permissions as octal strings (`"0755"`, `"755"`). Bare
//! YAML integers are read by their digits, so `permissions: 755` is also
//! `0o755`. Absent permissions fall back to [`FileMode::DEFAULT`].

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Unix permission bits for a generated file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FileMode(u32);

impl FileMode {
    /// Mode used when a declaration does not set `permissions`
    pub const DEFAULT: FileMode = FileMode(0o644);

    pub const fn new(bits: u32) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }
}

impl Default for FileMode {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for FileMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04o}", self.0)
    }
}

/// Error returned for a permission string that is not octal
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid file mode {0:?}: must be an octal string (e.g. \"0755\")")]
pub struct ParseFileModeError(String);

impl FromStr for FileMode {
    type Err = ParseFileModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix("0o")
            .or_else(|| trimmed.strip_prefix("0O"))
            .unwrap_or(trimmed);
        u32::from_str_radix(digits, 8)
            .ok()
            .filter(|bits| *bits <= 0o7777)
            .map(FileMode)
            .ok_or_else(|| ParseFileModeError(s.to_string()))
    }
}

impl Serialize for FileMode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for FileMode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct FileModeVisitor;

        impl Visitor<'_> for FileModeVisitor {
            type Value = FileMode;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an octal string (e.g. \"0755\") or an integer")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<FileMode, E> {
                v.parse().map_err(E::custom)
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<FileMode, E> {
                v.to_string().parse().map_err(E::custom)
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<FileMode, E> {
                v.to_string().parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_any(FileModeVisitor)
    }
}

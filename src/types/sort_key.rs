//! The single dimension tiles are ordered by before matching.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{MosaicError, Result};

/// One of the six numeric feature fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    R,
    G,
    B,
    H,
    S,
    L,
}

impl SortKey {
    /// All keys, in RGB-then-HSL order.
    pub const ALL: [SortKey; 6] = [
        SortKey::R,
        SortKey::G,
        SortKey::B,
        SortKey::H,
        SortKey::S,
        SortKey::L,
    ];

    /// The one-letter field name used in dictionaries and file names.
    pub fn name(self) -> &'static str {
        match self {
            SortKey::R => "r",
            SortKey::G => "g",
            SortKey::B => "b",
            SortKey::H => "h",
            SortKey::S => "s",
            SortKey::L => "l",
        }
    }
}

impl FromStr for SortKey {
    type Err = MosaicError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "r" | "R" => Ok(SortKey::R),
            "g" | "G" => Ok(SortKey::G),
            "b" | "B" => Ok(SortKey::B),
            "h" | "H" => Ok(SortKey::H),
            "s" | "S" => Ok(SortKey::S),
            "l" | "L" => Ok(SortKey::L),
            other => Err(MosaicError::InvalidArgument {
                message: format!("Unknown sort key '{}'", other),
                help: Some("Use one of r, g, b, h, s or l".to_string()),
            }),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

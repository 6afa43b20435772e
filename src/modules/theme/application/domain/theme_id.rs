use std::fmt;

use serde::Serialize;
use utoipa::ToSchema;

/// Identifier of one of the registered themes, `1..=ThemeId::MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, ToSchema)]
#[serde(transparent)]
pub struct ThemeId(u8);

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Theme id must be between 1 and {max}, got {value}", max = ThemeId::MAX)]
pub struct InvalidThemeId {
    pub value: u32,
}

impl ThemeId {
    pub const MAX: u8 = 15;

    pub fn new(value: u32) -> Result<Self, InvalidThemeId> {
        if (1..=u32::from(Self::MAX)).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(InvalidThemeId { value })
        }
    }

    pub fn all() -> impl Iterator<Item = ThemeId> {
        (1..=Self::MAX).map(ThemeId)
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Route segment, e.g. `v3`.
    pub fn segment(self) -> String {
        format!("v{}", self.0)
    }

    /// Route prefix, e.g. `/v3`.
    pub fn prefix(self) -> String {
        format!("/v{}", self.0)
    }

    /// Parses a `v{n}` route segment. Leading zeros are rejected so each
    /// theme owns exactly one prefix.
    pub fn from_segment(segment: &str) -> Option<Self> {
        let digits = segment.strip_prefix('v')?;
        if digits.is_empty()
            || digits.starts_with('0')
            || !digits.bytes().all(|b| b.is_ascii_digit())
        {
            return None;
        }
        digits.parse::<u32>().ok().and_then(|n| Self::new(n).ok())
    }
}

impl fmt::Display for ThemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

//! The anchor pattern that precedes a leaked value.
//!
//! A [`Marker`] is a plain byte pattern. The default marker is a Swedish
//! phrase whose UTF-8 encoding is longer than its character count:
//!
//! ```
//! use leak_marker::Marker;
//!
//! let marker = Marker::default();
//! assert_eq!(marker.len(), 14);
//! assert_eq!(marker.char_len(), 12);
//! ```
//!
//! All offsets in this crate are byte offsets. Use [`Marker::len`] when
//! computing where the value starts, never [`Marker::char_len`].

use std::fmt;

use bstr::{BString, ByteSlice};

use crate::{LeakError, Result};

/// Phrase that precedes the leaked value in a simulated response.
pub const DEFAULT_MARKER: &str = "Här får du: ";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Marker {
    pattern: BString,
}

impl Marker {
    /// Create a marker from a non-empty byte pattern.
    ///
    /// # Errors
    ///
    /// Returns [`LeakError::EmptyMarker`] if `pattern` has no bytes.
    pub fn new(pattern: impl Into<BString>) -> Result<Self> {
        let pattern = pattern.into();
        if pattern.is_empty() {
            return Err(LeakError::EmptyMarker);
        }
        Ok(Self { pattern })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.pattern
    }

    /// Length of the pattern in bytes.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.pattern.len()
    }

    /// Number of characters, decoding the pattern as UTF-8 (invalid
    /// sequences count as one replacement character each).
    pub fn char_len(&self) -> usize {
        self.pattern.chars().count()
    }

    /// Byte index of the first occurrence in `haystack`.
    pub fn find_in(&self, haystack: &[u8]) -> Option<usize> {
        haystack.find(self.pattern.as_slice())
    }

    /// Byte index of the only occurrence in `haystack`.
    ///
    /// # Errors
    ///
    /// - [`LeakError::MarkerNotFound`] if the pattern does not occur
    /// - [`LeakError::DuplicateMarker`] if it occurs again at any later
    ///   start position (overlapping occurrences included)
    pub fn locate(&self, haystack: &[u8]) -> Result<usize> {
        let Some(first) = self.find_in(haystack) else {
            log::warn!("marker {:?} not found in {} byte leak", self.pattern, haystack.len());
            return Err(LeakError::MarkerNotFound);
        };
        if let Some(rel) = self.find_in(&haystack[first + 1..]) {
            let second = first + 1 + rel;
            log::warn!("marker found at {first} and again at {second}");
            return Err(LeakError::DuplicateMarker { first, second });
        }
        Ok(first)
    }
}

impl Default for Marker {
    fn default() -> Self {
        Self {
            pattern: BString::from(DEFAULT_MARKER),
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.pattern)
    }
}

//! Source locations.
//!
//! The resolver reports declaration sites by line and column; the renderer
//! prints them inside verbose annotations as `line:column`.

use std::fmt;

/// Source location of a node, 1-based.
///
/// Layout: 8 bytes total
/// - line: u32
/// - column: u32
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Location {
    pub line: u32,
    pub column: u32,
}

impl Location {
    /// Location for synthesized nodes that have no source position.
    pub const DUMMY: Location = Location { line: 0, column: 0 };

    /// Create a new location.
    #[inline]
    pub const fn new(line: u32, column: u32) -> Self {
        Location { line, column }
    }

    /// Check if this location points into real source text.
    #[inline]
    pub const fn is_dummy(self) -> bool {
        self.line == 0 && self.column == 0
    }
}

impl fmt::Debug for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

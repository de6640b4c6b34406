//! Page geometry primitives.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The usable area of a physical page, measured in braille character cells
/// horizontally and rows vertically.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct PageDimensions {
    pub width: u32,
    pub height: u32,
}

impl PageDimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for PageDimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

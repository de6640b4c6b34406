//! Page-level output types shared across the pagination pipeline.

use crate::row::Row;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The side of a physical sheet a page is embossed on.
///
/// Simplex output only ever uses [`SheetSide::Front`].
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum SheetSide {
    Front,
    Back,
}

impl SheetSide {
    /// The opposite side of the sheet.
    pub fn flipped(self) -> Self {
        match self {
            SheetSide::Front => SheetSide::Back,
            SheetSide::Back => SheetSide::Front,
        }
    }
}

/// Identifies the page counter a sequence contributes to.
///
/// Sequences without an explicit counter name share the default group;
/// sequences naming the same counter are numbered together even when other
/// sequences are interleaved between them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum CounterGroup {
    #[default]
    Default,
    Named(String),
}

impl CounterGroup {
    pub fn named(name: impl Into<String>) -> Self {
        CounterGroup::Named(name.into())
    }
}

impl fmt::Display for CounterGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CounterGroup::Default => write!(f, "(default)"),
            CounterGroup::Named(name) => write!(f, "{}", name),
        }
    }
}

/// One resolved physical page: its number within a counter group, the sheet
/// side it lands on, and the rows that fill it.
///
/// Blank pages carry no rows and are only produced to preserve sheet
/// alignment before an explicit sheet or volume break.
#[derive(Debug, Clone)]
pub struct PageAssignment {
    pub counter_group: CounterGroup,
    pub page_number: u32,
    pub sheet_side: SheetSide,
    pub is_blank: bool,
    pub rows: Vec<Row>,
}

//! Shared page-counter bookkeeping.

use crate::PaginationError;
use log::debug;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError, RwLock};
use tactile_types::{CounterGroup, PageDimensions, SheetSide};

/// The running state of one counter group.
///
/// Besides the page number itself, the entry tracks the device context of
/// the group's most recent page, which the break resolver consults at
/// sequence boundaries.
#[derive(Debug, Clone)]
pub(crate) struct CounterState {
    pub(crate) current: u32,
    pub(crate) advanced: bool,
    /// Side of the group's last emitted page. `Back` doubles as "no open
    /// sheet": the next page lands on a fresh front side.
    pub(crate) sheet_side: SheetSide,
    pub(crate) last_dimensions: Option<PageDimensions>,
    pub(crate) last_duplex: bool,
}

impl Default for CounterState {
    fn default() -> Self {
        Self {
            current: 0,
            advanced: false,
            sheet_side: SheetSide::Back,
            last_dimensions: None,
            last_duplex: false,
        }
    }
}

/// Owns the running page numbers of every counter group in a document.
///
/// Groups are created lazily on first reference and persist for the
/// duration of the document; only a volume break on a sequence without a
/// shared counter name rewinds a group.
///
/// Each group sits behind its own mutex, so distinct groups can be advanced
/// concurrently while `advance`, `anchor` and `number_of` stay atomic with
/// respect to each other on the same group. Within one group, calls must
/// arrive in document order.
#[derive(Debug, Default)]
pub struct PageCounterRegistry {
    groups: RwLock<HashMap<CounterGroup, Arc<Mutex<CounterState>>>>,
}

impl PageCounterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self, group: &CounterGroup) -> Arc<Mutex<CounterState>> {
        if let Some(slot) = self
            .groups
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(group)
        {
            return slot.clone();
        }
        let mut groups = self.groups.write().unwrap_or_else(PoisonError::into_inner);
        groups.entry(group.clone()).or_default().clone()
    }

    /// Runs a closure against the group's state under its lock.
    pub(crate) fn with_state<R>(
        &self,
        group: &CounterGroup,
        f: impl FnOnce(&mut CounterState) -> R,
    ) -> R {
        let slot = self.slot(group);
        let mut state = slot.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut state)
    }

    /// The current page number of the group, creating the group at page 0
    /// if it has not been seen before.
    pub fn number_of(&self, group: &CounterGroup) -> u32 {
        self.with_state(group, |state| state.current)
    }

    /// Advances the group by one page and returns the new page number.
    ///
    /// Must be called exactly once per physical page assigned to the group,
    /// in document order.
    pub fn advance(&self, group: &CounterGroup) -> u32 {
        self.advance_by(group, 1)
    }

    /// Advances the group by `by` pages and returns the new page number.
    pub fn advance_by(&self, group: &CounterGroup, by: u32) -> u32 {
        self.with_state(group, |state| {
            state.current += by;
            state.advanced = true;
            state.current
        })
    }

    /// Forcibly sets the counter so that the group's next page receives
    /// `page_number`.
    ///
    /// Valid only while the group has not been advanced; renumbering
    /// mid-stream would break the monotonicity downstream writers rely on,
    /// so it is rejected rather than silently applied.
    pub fn anchor(&self, group: &CounterGroup, page_number: u32) -> Result<(), PaginationError> {
        if page_number == 0 {
            return Err(PaginationError::InvalidConfiguration(format!(
                "page numbers start at 1; cannot anchor counter '{}' to 0",
                group
            )));
        }
        self.with_state(group, |state| {
            if state.advanced {
                return Err(PaginationError::PolicyViolation {
                    group: group.clone(),
                    attempted: page_number,
                    current: state.current,
                });
            }
            state.current = page_number - 1;
            Ok(())
        })
    }

    /// Rewinds the group to its unseen state.
    ///
    /// Called by the break resolver when a volume break occurs for a
    /// sequence that does not declare a shared counter name. Explicitly
    /// shared groups are never auto-reset; the shared name signals
    /// intentional continuity across volumes.
    pub fn reset_on_volume_break(&self, group: &CounterGroup) {
        self.with_state(group, |state| *state = CounterState::default());
        debug!("page counter '{}' reset at volume break", group);
    }
}

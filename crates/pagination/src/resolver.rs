//! Break resolution across sequence boundaries.
//!
//! The resolver consumes sequences in document order and decides, at every
//! boundary, whether a page, sheet or volume break falls there, assigning
//! page numbers through the shared [`PageCounterRegistry`] as it goes.
//! Resolution is a pure, synchronous computation; feeding can simply stop
//! at any boundary.

use crate::sequence::{SequenceBreak, SequenceProperties};
use crate::{PageCounterRegistry, PaginationError};
use log::{debug, trace};
use serde::{Deserialize, Serialize};
use tactile_traits::{MasterCapabilities, MasterSource};
use tactile_types::{CounterGroup, PageAssignment, Row, SheetSide};

/// The concrete break action taken at a sequence boundary.
///
/// Every sequence boundary resolves to at least a page break; content only
/// continues on the same page between blocks within a sequence, which is
/// outside this component.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "camelCase")]
pub enum BreakDecision {
    Page,
    Sheet,
    Volume,
}

/// What changed in the device context between two adjacent sequences.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransitionDelta {
    pub duplex_changed: bool,
    pub dimensions_changed: bool,
}

impl TransitionDelta {
    pub fn between(outgoing: &MasterCapabilities, incoming: &MasterCapabilities) -> Self {
        Self {
            duplex_changed: outgoing.duplex != incoming.duplex,
            dimensions_changed: outgoing.dimensions != incoming.dimensions,
        }
    }

    /// Whether the transition cannot be expressed as a plain page break.
    pub fn forces_sheet(&self) -> bool {
        self.duplex_changed || self.dimensions_changed
    }
}

/// Resolves one sequence boundary: the stronger of the two break hints
/// wins, then the device transition forces upgrades.
///
/// A duplex-mode or dimension mismatch cannot be expressed as a page
/// break, so such transitions resolve to at least a sheet break.
pub fn resolve_break(
    after: SequenceBreak,
    before: SequenceBreak,
    delta: TransitionDelta,
) -> BreakDecision {
    let mut resolved = match after.max(before) {
        SequenceBreak::Volume => BreakDecision::Volume,
        SequenceBreak::Sheet => BreakDecision::Sheet,
        SequenceBreak::Auto | SequenceBreak::Page => BreakDecision::Page,
    };
    if delta.forces_sheet() && resolved < BreakDecision::Sheet {
        resolved = BreakDecision::Sheet;
    }
    resolved
}

/// One sequence as delivered by the layout engine: its pagination
/// properties plus the rows of each laid-out page, in order.
#[derive(Debug, Clone)]
pub struct SequenceRun {
    pub properties: SequenceProperties,
    pub pages: Vec<Vec<Row>>,
}

impl SequenceRun {
    pub fn new(properties: SequenceProperties, pages: Vec<Vec<Row>>) -> Self {
        Self { properties, pages }
    }
}

/// The resolver's output for one sequence: the break decision at the
/// boundary before it, and its pages with assigned numbers and sheet
/// sides. A blank filler page closing the sequence's last sheet is part of
/// this sequence's output.
#[derive(Debug, Clone)]
pub struct ResolvedSequence {
    pub break_before: BreakDecision,
    pub pages: Vec<PageAssignment>,
}

struct PendingSequence {
    group: CounterGroup,
    master: MasterCapabilities,
    break_after: SequenceBreak,
    resolved: ResolvedSequence,
}

/// The stateful break-resolution machine.
///
/// Sequences are pushed in document order; each push settles the boundary
/// between the previous sequence and the new one, so the previous
/// sequence's output becomes final (and is returned) only then. [`Self::finish`]
/// flushes the last sequence once the document ends.
pub struct BreakResolver<'a, M: MasterSource> {
    masters: &'a M,
    counters: &'a PageCounterRegistry,
    pending: Option<PendingSequence>,
}

impl<'a, M: MasterSource> BreakResolver<'a, M> {
    pub fn new(masters: &'a M, counters: &'a PageCounterRegistry) -> Self {
        Self {
            masters,
            counters,
            pending: None,
        }
    }

    /// Feeds the next sequence in document order.
    ///
    /// Returns the now-final output of the *previous* sequence, or `None`
    /// for the first sequence of the document. A returned error is
    /// permanent; the document run cannot continue past it.
    pub fn push_sequence(
        &mut self,
        run: SequenceRun,
    ) -> Result<Option<ResolvedSequence>, PaginationError> {
        let props = run.properties;
        let master = self
            .masters
            .capabilities(props.master_name())
            .ok_or_else(|| PaginationError::UnknownMaster(props.master_name().to_string()))?;
        let group = props.counter_group();

        let mut completed = self.pending.take();
        let (hint, decision) = match &completed {
            Some(prev) => {
                let delta = TransitionDelta::between(&prev.master, &master);
                (
                    prev.break_after.max(props.break_before()),
                    resolve_break(prev.break_after, props.break_before(), delta),
                )
            }
            // The first boundary of a document has no outgoing context.
            None => (
                props.break_before(),
                resolve_break(SequenceBreak::Auto, props.break_before(), TransitionDelta::default()),
            ),
        };
        debug!(
            "boundary before master '{}' (counter {}): {:?}",
            props.master_name(),
            group,
            decision
        );

        if decision >= BreakDecision::Sheet {
            if let Some(prev) = completed.as_mut() {
                self.close_sheet(prev, hint);
            }
        }
        if decision == BreakDecision::Volume && props.page_counter_name().is_none() {
            self.counters.reset_on_volume_break(&group);
        }
        if let Some(initial) = props.initial_page_number() {
            self.counters.anchor(&group, initial.get())?;
        }

        let mut pages = Vec::with_capacity(run.pages.len());
        let mut first = true;
        for rows in run.pages {
            let side = if master.duplex {
                if first && decision >= BreakDecision::Sheet {
                    SheetSide::Front
                } else {
                    self.counters
                        .with_state(&group, |state| state.sheet_side)
                        .flipped()
                }
            } else {
                SheetSide::Front
            };
            let number = self.counters.advance(&group);
            self.counters.with_state(&group, |state| {
                state.sheet_side = side;
                state.last_dimensions = Some(master.dimensions);
                state.last_duplex = master.duplex;
            });
            trace!("page {} of counter {} on {:?}", number, group, side);
            pages.push(PageAssignment {
                counter_group: group.clone(),
                page_number: number,
                sheet_side: side,
                is_blank: false,
                rows,
            });
            first = false;
        }

        self.pending = Some(PendingSequence {
            group,
            master,
            break_after: props.break_after(),
            resolved: ResolvedSequence {
                break_before: decision,
                pages,
            },
        });
        Ok(completed.map(|prev| prev.resolved))
    }

    /// Ends the document, flushing the final sequence.
    ///
    /// An explicit sheet or volume `break_after` on the last sequence still
    /// closes its sheet, so a trailing blank filler page can appear here.
    pub fn finish(&mut self) -> Option<ResolvedSequence> {
        let mut prev = self.pending.take()?;
        let hint = prev.break_after;
        if resolve_break(hint, SequenceBreak::Auto, TransitionDelta::default())
            >= BreakDecision::Sheet
        {
            self.close_sheet(&mut prev, hint);
        }
        Some(prev.resolved)
    }

    /// Resolves a whole document in one call.
    pub fn resolve_all<I>(&mut self, runs: I) -> Result<Vec<ResolvedSequence>, PaginationError>
    where
        I: IntoIterator<Item = SequenceRun>,
    {
        let mut resolved = Vec::new();
        for run in runs {
            if let Some(done) = self.push_sequence(run)? {
                resolved.push(done);
            }
        }
        resolved.extend(self.finish());
        Ok(resolved)
    }

    /// Completes the ending sequence's sheet when a sheet-or-stronger break
    /// lands while a duplex front side is still open.
    ///
    /// An explicit sheet or volume hint paginates the unused back side as a
    /// blank page; a break that was merely upgraded out of AUTO or PAGE
    /// leaves the side completely blank, without emitting or numbering a
    /// page.
    fn close_sheet(&self, prev: &mut PendingSequence, hint: SequenceBreak) {
        let open_front = prev.master.duplex
            && self
                .counters
                .with_state(&prev.group, |state| state.sheet_side)
                == SheetSide::Front;
        if !open_front {
            return;
        }
        if hint >= SequenceBreak::Sheet {
            let number = self.counters.advance(&prev.group);
            self.counters
                .with_state(&prev.group, |state| state.sheet_side = SheetSide::Back);
            trace!(
                "blank filler page {} closes a sheet of counter {}",
                number, prev.group
            );
            prev.resolved.pages.push(PageAssignment {
                counter_group: prev.group.clone(),
                page_number: number,
                sheet_side: SheetSide::Back,
                is_blank: true,
                rows: Vec::new(),
            });
        } else {
            self.counters
                .with_state(&prev.group, |state| state.sheet_side = SheetSide::Back);
        }
    }
}

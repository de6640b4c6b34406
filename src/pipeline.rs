//! Thin integration layer: drives break resolution over a sequence stream
//! and hands the resolved pages to a sink.

use crate::FormatterError;
use log::info;
use serde::Serialize;
use tactile_pagination::{BreakDecision, BreakResolver, PageCounterRegistry, ResolvedSequence, SequenceRun};
use tactile_traits::{MasterSource, PageSink};

/// Totals of one formatting run.
#[derive(Serialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RunSummary {
    pub sequences: usize,
    pub pages: usize,
    pub blank_pages: usize,
    pub volumes: usize,
}

/// Connects the external collaborators: a master source on one side, a
/// page sink on the other, with the break resolver and the shared counter
/// registry in between.
///
/// The counter registry lives as long as the pipeline, so one document is
/// one `run` call; a second call would continue the previous document's
/// numbering.
pub struct FormattingPipeline<M: MasterSource> {
    masters: M,
    counters: PageCounterRegistry,
}

impl<M: MasterSource> FormattingPipeline<M> {
    pub fn new(masters: M) -> Self {
        Self {
            masters,
            counters: PageCounterRegistry::new(),
        }
    }

    /// The shared page-counter registry of this pipeline.
    pub fn counters(&self) -> &PageCounterRegistry {
        &self.counters
    }

    /// Resolves the given sequences in document order, writing every page
    /// to `sink` as soon as its sequence is final.
    pub fn run<I, S>(&mut self, sequences: I, sink: &mut S) -> Result<RunSummary, FormatterError>
    where
        I: IntoIterator<Item = SequenceRun>,
        S: PageSink,
    {
        let mut resolver = BreakResolver::new(&self.masters, &self.counters);
        let mut summary = RunSummary::default();

        for run in sequences {
            if let Some(done) = resolver.push_sequence(run)? {
                Self::emit(&mut summary, &done, sink)?;
            }
        }
        if let Some(done) = resolver.finish() {
            Self::emit(&mut summary, &done, sink)?;
        }

        info!(
            "formatted {} sequences into {} pages ({} blank) across {} volumes via {}",
            summary.sequences,
            summary.pages,
            summary.blank_pages,
            summary.volumes,
            sink.name()
        );
        Ok(summary)
    }

    fn emit<S: PageSink>(
        summary: &mut RunSummary,
        done: &ResolvedSequence,
        sink: &mut S,
    ) -> Result<(), FormatterError> {
        summary.sequences += 1;
        if summary.sequences == 1 {
            summary.volumes = 1;
        } else if done.break_before == BreakDecision::Volume {
            summary.volumes += 1;
        }
        for page in &done.pages {
            summary.pages += 1;
            if page.is_blank {
                summary.blank_pages += 1;
            }
            sink.write_page(page)?;
        }
        Ok(())
    }
}

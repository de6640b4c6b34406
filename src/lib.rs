//! Pagination and device-abstraction core of a braille document formatting
//! pipeline.
//!
//! An external layout engine produces sequences of laid-out pages; this
//! core decides where page, sheet and volume boundaries fall, keeps page
//! numbering consistent across sequences that share a counter, and defines
//! the metadata contract under which embossers and other pluggable
//! components are described. Translation, line breaking and concrete
//! output formats live elsewhere.

pub mod pipeline;

pub use pipeline::{FormattingPipeline, RunSummary};

pub use tactile_device::{
    EmbosserFactoryProperties, EmbosserMetadata, FactoryMetadata, FactoryProperties,
};
pub use tactile_pagination::{
    BreakDecision, BreakResolver, PageCounterRegistry, PaginationError, ResolvedSequence,
    SequenceBreak, SequenceProperties, SequencePropertiesBuilder, SequenceRun, TransitionDelta,
    resolve_break,
};
pub use tactile_traits::{
    InMemoryMasterRegistry, MasterCapabilities, MasterSource, PageSink, SinkError, VecSink,
};
pub use tactile_types::{
    CounterGroup, ExternalRef, PageAssignment, PageDimensions, Row, RowBuilder, SheetSide,
};

use thiserror::Error;

/// A comprehensive error type for the whole formatting core.
#[derive(Error, Debug)]
pub enum FormatterError {
    #[error("Pagination failed: {0}")]
    Pagination(#[from] PaginationError),

    #[error("Writing pages failed: {0}")]
    Sink(#[from] SinkError),
}

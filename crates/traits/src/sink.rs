//! PageSink trait: the contract between the pagination core and output
//! writers.

use tactile_types::PageAssignment;
use thiserror::Error;

/// Error type for writer-side failures.
#[derive(Error, Debug, Clone)]
pub enum SinkError {
    #[error("Sink rejected page: {0}")]
    Rejected(String),

    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for SinkError {
    fn from(err: std::io::Error) -> Self {
        SinkError::Io(err.to_string())
    }
}

/// A consumer of resolved pages.
///
/// Implementations serialize pages to a wire or file format (PEF, embosser
/// streams, ...), which is outside this core. Pages arrive in document
/// order, blank filler pages included.
///
/// Implementations must treat each row's `external_reference` as opaque
/// passthrough data: it may be copied into the output for downstream
/// correlation, but it must never influence how a page is written.
pub trait PageSink {
    /// Writes a single resolved page.
    fn write_page(&mut self, page: &PageAssignment) -> Result<(), SinkError>;

    /// Returns a human-readable name for this sink (for logging/debugging).
    fn name(&self) -> &'static str;
}

/// A sink that collects pages in memory.
///
/// Useful in tests and for callers that post-process the resolved document
/// as a whole instead of streaming it out.
#[derive(Debug, Default)]
pub struct VecSink {
    pages: Vec<PageAssignment>,
}

impl VecSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// The pages collected so far, in document order.
    pub fn pages(&self) -> &[PageAssignment] {
        &self.pages
    }

    /// Consumes the sink, returning the collected pages.
    pub fn into_pages(self) -> Vec<PageAssignment> {
        self.pages
    }
}

impl PageSink for VecSink {
    fn write_page(&mut self, page: &PageAssignment) -> Result<(), SinkError> {
        self.pages.push(page.clone());
        Ok(())
    }

    fn name(&self) -> &'static str {
        "VecSink"
    }
}

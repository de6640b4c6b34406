//! The immutable unit of output: one braille text line.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Opaque caller-supplied payload carried alongside a row.
///
/// The core never inspects this value; it only moves it through the
/// pipeline so that a downstream consumer can correlate output rows with
/// their source (e.g. a source-document reference tag for non-print
/// consumers). Using it for layout or pagination decisions is a contract
/// violation.
pub type ExternalRef = Arc<dyn Any + Send + Sync>;

/// A single braille text line together with its spacing and an opaque
/// passthrough reference.
///
/// Rows are created by the layout stage and read-only thereafter. `Clone`
/// shares the external reference rather than duplicating it.
#[derive(Clone)]
pub struct Row {
    chars: String,
    row_spacing: Option<f32>,
    external_reference: Option<ExternalRef>,
}

impl Row {
    /// Creates a row with the given characters, default spacing and no
    /// external reference.
    pub fn new(chars: impl Into<String>) -> Self {
        Self {
            chars: chars.into(),
            row_spacing: None,
            external_reference: None,
        }
    }

    /// Starts a builder for a row with the given characters.
    pub fn builder(chars: impl Into<String>) -> RowBuilder {
        RowBuilder {
            chars: chars.into(),
            row_spacing: None,
            external_reference: None,
        }
    }

    /// The characters of this row.
    pub fn chars(&self) -> &str {
        &self.chars
    }

    /// The row spacing, in rows, or `None` if the master's default applies.
    pub fn row_spacing(&self) -> Option<f32> {
        self.row_spacing
    }

    /// The opaque external reference, if one was attached.
    pub fn external_reference(&self) -> Option<&ExternalRef> {
        self.external_reference.as_ref()
    }
}

impl fmt::Debug for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Row")
            .field("chars", &self.chars)
            .field("row_spacing", &self.row_spacing)
            .field(
                "external_reference",
                &self.external_reference.as_ref().map(|_| "..."),
            )
            .finish()
    }
}

/// Chainable builder for [`Row`].
#[derive(Clone)]
pub struct RowBuilder {
    chars: String,
    row_spacing: Option<f32>,
    external_reference: Option<ExternalRef>,
}

impl RowBuilder {
    /// Sets the row spacing, in rows. The value is expected to be positive;
    /// like master names, it is stored as supplied and interpreted by the
    /// consumer.
    pub fn row_spacing(mut self, value: f32) -> Self {
        self.row_spacing = Some(value);
        self
    }

    /// Attaches an opaque external reference.
    pub fn external_reference(mut self, value: ExternalRef) -> Self {
        self.external_reference = Some(value);
        self
    }

    /// Builds the row. The builder can be cloned beforehand if further
    /// variants are needed.
    pub fn build(self) -> Row {
        Row {
            chars: self.chars,
            row_spacing: self.row_spacing,
            external_reference: self.external_reference,
        }
    }
}

//! Identity and capability metadata for pluggable components.
//!
//! These are pure value contracts: an external registry maps identifiers to
//! instances and enforces uniqueness; nothing here carries registry logic.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Metadata every pluggable component exposes so it can be looked up by
/// identifier and described to a user.
///
/// Identifiers are expected to be globally unique within the registry that
/// owns them; the registry, not this contract, enforces that.
pub trait FactoryProperties {
    /// The identifier the component is registered under.
    fn identifier(&self) -> &str;

    /// A short name suitable for menus and listings.
    fn display_name(&self) -> &str;

    /// A longer description of the component.
    fn description(&self) -> &str;
}

/// Extends [`FactoryProperties`] with embosser-specific information.
///
/// Make and model are descriptive, non-unique metadata for display and
/// filtering.
pub trait EmbosserFactoryProperties: FactoryProperties {
    /// The make of this embosser.
    fn make(&self) -> &str;

    /// The model of this embosser.
    fn model(&self) -> &str;
}

/// Plain description of a pluggable component.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct FactoryMetadata {
    identifier: String,
    display_name: String,
    description: String,
}

impl FactoryMetadata {
    pub fn new(
        identifier: impl Into<String>,
        display_name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            display_name: display_name.into(),
            description: description.into(),
        }
    }
}

impl FactoryProperties for FactoryMetadata {
    fn identifier(&self) -> &str {
        &self.identifier
    }

    fn display_name(&self) -> &str {
        &self.display_name
    }

    fn description(&self) -> &str {
        &self.description
    }
}

impl fmt::Display for FactoryMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.display_name, self.identifier)
    }
}

/// Description of an embosser variant, identified by make and model.
///
/// The display name defaults to `"{make} {model}"`; both it and the
/// description can be refined with the `with_*` methods.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct EmbosserMetadata {
    identifier: String,
    display_name: String,
    description: String,
    make: String,
    model: String,
}

impl EmbosserMetadata {
    pub fn new(
        identifier: impl Into<String>,
        make: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        let make = make.into();
        let model = model.into();
        Self {
            identifier: identifier.into(),
            display_name: format!("{} {}", make, model),
            description: String::new(),
            make,
            model,
        }
    }

    /// Replaces the default display name.
    pub fn with_display_name(mut self, value: impl Into<String>) -> Self {
        self.display_name = value.into();
        self
    }

    /// Sets the description.
    pub fn with_description(mut self, value: impl Into<String>) -> Self {
        self.description = value.into();
        self
    }
}

impl FactoryProperties for EmbosserMetadata {
    fn identifier(&self) -> &str {
        &self.identifier
    }

    fn display_name(&self) -> &str {
        &self.display_name
    }

    fn description(&self) -> &str {
        &self.description
    }
}

impl EmbosserFactoryProperties for EmbosserMetadata {
    fn make(&self) -> &str {
        &self.make
    }

    fn model(&self) -> &str {
        &self.model
    }
}

impl fmt::Display for EmbosserMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.display_name, self.identifier)
    }
}

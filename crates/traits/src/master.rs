//! MasterSource trait for resolving layout-master capabilities.
//!
//! Layout masters themselves (headers, margins, templates) are defined and
//! owned elsewhere; the pagination core only needs the physical capabilities
//! a master name resolves to.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::{PoisonError, RwLock};
use tactile_types::PageDimensions;

/// The physical capabilities of a layout master: whether the device may
/// emboss both sides of a sheet, and the page dimensions it produces.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct MasterCapabilities {
    pub duplex: bool,
    pub dimensions: PageDimensions,
}

impl MasterCapabilities {
    pub fn new(duplex: bool, dimensions: PageDimensions) -> Self {
        Self { duplex, dimensions }
    }
}

/// A source of resolved master capabilities.
///
/// This abstraction lets the break resolver work against:
/// - An in-memory table (tests, programmatic callers)
/// - A stylesheet or OBFL document parsed elsewhere
/// - A device driver reporting its actual paper tray
///
/// Lookups are by master name; resolution failures are reported by the
/// caller, not here.
pub trait MasterSource: Send + Sync + Debug {
    /// Resolves a master name to its capabilities, or `None` if the name
    /// is unknown to this source.
    fn capabilities(&self, name: &str) -> Option<MasterCapabilities>;

    /// Check whether a master name can be resolved.
    fn contains(&self, name: &str) -> bool {
        self.capabilities(name).is_some()
    }

    /// Returns a human-readable name for this source (for logging/debugging).
    fn name(&self) -> &'static str;
}

/// An in-memory master registry.
///
/// Masters are registered up front and must be present before resolution
/// starts. This is the simplest source and works in any environment.
#[derive(Debug, Default)]
pub struct InMemoryMasterRegistry {
    masters: RwLock<HashMap<String, MasterCapabilities>>,
}

impl InMemoryMasterRegistry {
    pub fn new() -> Self {
        Self {
            masters: RwLock::new(HashMap::new()),
        }
    }

    /// Registers a master under the given name, replacing any previous
    /// registration.
    pub fn add(&self, name: impl Into<String>, capabilities: MasterCapabilities) {
        self.masters
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(name.into(), capabilities);
    }

    /// Removes a master, returning its capabilities if it was registered.
    pub fn remove(&self, name: &str) -> Option<MasterCapabilities> {
        self.masters
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(name)
    }

    /// The number of registered masters.
    pub fn len(&self) -> usize {
        self.masters
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Check whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl MasterSource for InMemoryMasterRegistry {
    fn capabilities(&self, name: &str) -> Option<MasterCapabilities> {
        self.masters
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .copied()
    }

    fn name(&self) -> &'static str {
        "InMemoryMasterRegistry"
    }
}

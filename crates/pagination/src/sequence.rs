//! Per-sequence pagination intent.

use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;
use tactile_types::CounterGroup;

/// "Break before" and "break after" rules for sequences, ordered by
/// strength: a stronger break subsumes a weaker one when both apply at the
/// same boundary.
#[derive(
    Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
#[serde(rename_all = "camelCase")]
pub enum SequenceBreak {
    /// The default. Like [`SequenceBreak::Sheet`] when a sheet break is
    /// forced, but leaves pages without content completely blank instead of
    /// paginating them.
    #[default]
    Auto,
    /// Inserts a page break. Upgraded to a sheet break when the duplex mode
    /// or the page dimensions change across the boundary. Can be used to
    /// produce media without blank pages.
    Page,
    /// Inserts a sheet break. If this results in a page without content, it
    /// is paginated.
    Sheet,
    /// Inserts a volume break. Applies to text body sequences only.
    Volume,
}

/// Pagination properties of one content sequence: the layout master it is
/// rendered with, where its numbering starts, how it breaks against its
/// neighbours, and the page counter it contributes to.
///
/// Instances are created through [`SequenceProperties::builder`] and are
/// immutable afterwards; they can be shared freely across threads.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct SequenceProperties {
    master_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    initial_page_number: Option<NonZeroU32>,
    #[serde(default)]
    break_before: SequenceBreak,
    #[serde(default)]
    break_after: SequenceBreak,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    page_counter_name: Option<String>,
}

impl SequenceProperties {
    /// Starts a builder. The master name is required; it is stored as
    /// supplied and resolved against a master source later.
    pub fn builder(master_name: impl Into<String>) -> SequencePropertiesBuilder {
        SequencePropertiesBuilder {
            master_name: master_name.into(),
            initial_page_number: None,
            break_before: SequenceBreak::default(),
            break_after: SequenceBreak::default(),
            page_counter_name: None,
        }
    }

    /// The name of the layout master for this sequence.
    pub fn master_name(&self) -> &str {
        &self.master_name
    }

    /// The number the first page of this sequence should get, if one was
    /// requested. Only meaningful on the first sequence touching a counter
    /// group; the registry rejects later re-anchoring.
    pub fn initial_page_number(&self) -> Option<NonZeroU32> {
        self.initial_page_number
    }

    /// The break rule applied before this sequence starts.
    pub fn break_before(&self) -> SequenceBreak {
        self.break_before
    }

    /// The break rule applied after this sequence ends.
    pub fn break_after(&self) -> SequenceBreak {
        self.break_after
    }

    /// The page counter name, if pages of this sequence are counted
    /// together with other sequences naming the same counter.
    pub fn page_counter_name(&self) -> Option<&str> {
        self.page_counter_name.as_deref()
    }

    /// The counter group this sequence contributes to.
    pub fn counter_group(&self) -> CounterGroup {
        match &self.page_counter_name {
            Some(name) => CounterGroup::Named(name.clone()),
            None => CounterGroup::Default,
        }
    }
}

/// Two-phase builder for [`SequenceProperties`]: the master name is given
/// at construction, optional fields are set in any order, last write wins.
///
/// `build` does not consume the builder, so one builder can produce any
/// number of independent snapshots.
#[derive(Debug, Clone)]
pub struct SequencePropertiesBuilder {
    master_name: String,
    initial_page_number: Option<NonZeroU32>,
    break_before: SequenceBreak,
    break_after: SequenceBreak,
    page_counter_name: Option<String>,
}

impl SequencePropertiesBuilder {
    /// Sets the number the first page of the sequence should get.
    pub fn initial_page_number(mut self, value: NonZeroU32) -> Self {
        self.initial_page_number = Some(value);
        self
    }

    /// Sets the break rule applied before the sequence.
    pub fn break_before(mut self, value: SequenceBreak) -> Self {
        self.break_before = value;
        self
    }

    /// Sets the break rule applied after the sequence.
    pub fn break_after(mut self, value: SequenceBreak) -> Self {
        self.break_after = value;
        self
    }

    /// Counts the sequence's pages together with other sequences naming the
    /// same counter, instead of with the default page counter.
    pub fn page_counter_name(mut self, value: impl Into<String>) -> Self {
        self.page_counter_name = Some(value.into());
        self
    }

    /// Snapshots the current state of the builder.
    pub fn build(&self) -> SequenceProperties {
        SequenceProperties {
            master_name: self.master_name.clone(),
            initial_page_number: self.initial_page_number,
            break_before: self.break_before,
            break_after: self.break_after,
            page_counter_name: self.page_counter_name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let props = SequenceProperties::builder("body").build();
        assert_eq!(props.master_name(), "body");
        assert!(props.initial_page_number().is_none());
        assert_eq!(props.break_before(), SequenceBreak::Auto);
        assert_eq!(props.break_after(), SequenceBreak::Auto);
        assert!(props.page_counter_name().is_none());
        assert_eq!(props.counter_group(), CounterGroup::Default);
    }

    #[test]
    fn test_builder_is_reusable() {
        let builder = SequenceProperties::builder("body").break_before(SequenceBreak::Volume);
        let first = builder.build();
        let second = builder.build();

        assert_eq!(first, second);
        // Snapshots are independent values.
        drop(first);
        assert_eq!(second.break_before(), SequenceBreak::Volume);
    }

    #[test]
    fn test_last_write_wins() {
        let props = SequenceProperties::builder("body")
            .break_after(SequenceBreak::Sheet)
            .break_after(SequenceBreak::Page)
            .build();
        assert_eq!(props.break_after(), SequenceBreak::Page);
    }

    #[test]
    fn test_named_counter_group() {
        let props = SequenceProperties::builder("front")
            .page_counter_name("preamble")
            .build();
        assert_eq!(props.page_counter_name(), Some("preamble"));
        assert_eq!(props.counter_group(), CounterGroup::named("preamble"));
    }

    #[test]
    fn test_break_strength_ordering() {
        assert!(SequenceBreak::Volume > SequenceBreak::Sheet);
        assert!(SequenceBreak::Sheet > SequenceBreak::Page);
        assert!(SequenceBreak::Page > SequenceBreak::Auto);
        assert_eq!(
            SequenceBreak::Page.max(SequenceBreak::Sheet),
            SequenceBreak::Sheet
        );
    }

    #[test]
    fn test_serde_round_trip() {
        let props = SequenceProperties::builder("body")
            .initial_page_number(NonZeroU32::new(3).unwrap())
            .break_before(SequenceBreak::Volume)
            .page_counter_name("notes")
            .build();

        let json = serde_json::to_string(&props).unwrap();
        let back: SequenceProperties = serde_json::from_str(&json).unwrap();
        assert_eq!(back, props);
    }

    #[test]
    fn test_serde_defaults_apply() {
        let props: SequenceProperties =
            serde_json::from_str(r#"{"masterName":"body"}"#).unwrap();
        assert_eq!(props, SequenceProperties::builder("body").build());
    }
}

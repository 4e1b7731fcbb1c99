//! Descriptor tables shared by the parameter and header snippets.

use serde_json::{Map, Value};

use super::Attributes;
use super::verifier::ExpectedNames;

/// A caller-supplied declaration that a named item is expected and documented.
pub trait DocumentedItem {
    fn name(&self) -> &str;

    /// Optional items are never reported missing.
    fn is_optional(&self) -> bool;

    /// Ignored items count as documented but are left out of the table.
    fn is_ignored(&self) -> bool {
        false
    }

    /// The template model row for this item.
    fn to_row(&self) -> Map<String, Value>;
}

/// Descriptors in declaration order, plus snippet-level attributes.
///
/// Descriptors are keyed by name: adding a descriptor whose name is already
/// present replaces the earlier one in place.
#[derive(Debug, Clone, PartialEq)]
pub struct DescriptorTable<D> {
    descriptors: Vec<D>,
    attributes: Attributes,
}

impl<D: DocumentedItem + Clone> DescriptorTable<D> {
    pub fn new(descriptors: impl IntoIterator<Item = D>, attributes: Attributes) -> Self {
        let mut table = Self {
            descriptors: Vec::new(),
            attributes,
        };
        table.insert_all(descriptors);
        table
    }

    fn insert_all(&mut self, descriptors: impl IntoIterator<Item = D>) {
        for descriptor in descriptors {
            match self
                .descriptors
                .iter_mut()
                .find(|existing| existing.name() == descriptor.name())
            {
                Some(existing) => *existing = descriptor,
                None => self.descriptors.push(descriptor),
            }
        }
    }

    /// A copy of this table with `additional` descriptors added.
    #[must_use]
    pub fn extended(&self, additional: impl IntoIterator<Item = D>) -> Self {
        let mut table = self.clone();
        table.insert_all(additional);
        table
    }

    pub fn descriptors(&self) -> &[D] {
        &self.descriptors
    }

    pub const fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn expected_names(&self) -> ExpectedNames {
        ExpectedNames::from_items(&self.descriptors)
    }

    /// Template model: the snippet attributes plus one row per non-ignored
    /// descriptor under `rows_key`.
    pub fn model(&self, rows_key: &str) -> Map<String, Value> {
        let mut model: Map<String, Value> = self
            .attributes
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        let rows = self
            .descriptors
            .iter()
            .filter(|descriptor| !descriptor.is_ignored())
            .map(|descriptor| Value::Object(descriptor.to_row()))
            .collect();
        model.insert(rows_key.to_string(), Value::Array(rows));
        model
    }
}

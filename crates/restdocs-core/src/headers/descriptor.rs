use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::snippet::{Attributes, DocumentedItem};

/// Describes a request or response header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeaderDescriptor {
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub optional: bool,

    #[serde(default, skip_serializing_if = "Attributes::is_empty")]
    pub attributes: Attributes,
}

impl HeaderDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            optional: false,
            attributes: Attributes::new(),
        }
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub const fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    #[must_use]
    pub fn attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }
}

impl DocumentedItem for HeaderDescriptor {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_optional(&self) -> bool {
        self.optional
    }

    fn to_row(&self) -> Map<String, Value> {
        let mut row: Map<String, Value> = self
            .attributes
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        row.insert("name".to_string(), Value::String(self.name.clone()));
        row.insert(
            "description".to_string(),
            Value::String(self.description.clone()),
        );
        row.insert("optional".to_string(), Value::Bool(self.optional));
        row
    }
}

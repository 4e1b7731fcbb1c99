use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::snippet::{Attributes, DocumentedItem};

/// Describes a request or path parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterDescriptor {
    pub name: String,

    #[serde(default)]
    pub description: String,

    /// Not reported missing when absent from the request.
    #[serde(default)]
    pub optional: bool,

    /// Documented, but left out of the rendered table.
    #[serde(default)]
    pub ignored: bool,

    /// Extra values merged into this parameter's table row.
    #[serde(default, skip_serializing_if = "Attributes::is_empty")]
    pub attributes: Attributes,
}

impl ParameterDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            optional: false,
            ignored: false,
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
    pub const fn ignored(mut self) -> Self {
        self.ignored = true;
        self
    }

    #[must_use]
    pub fn attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }
}

impl DocumentedItem for ParameterDescriptor {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_optional(&self) -> bool {
        self.optional
    }

    fn is_ignored(&self) -> bool {
        self.ignored
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

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_row_contains_attributes() {
        let descriptor = ParameterDescriptor::new("page")
            .description("The page to retrieve")
            .optional()
            .attribute("default", 0);
        assert_eq!(
            Value::Object(descriptor.to_row()),
            json!({
                "name": "page",
                "description": "The page to retrieve",
                "optional": true,
                "default": 0
            })
        );
    }

    #[test]
    fn test_attributes_cannot_override_core_keys() {
        let descriptor = ParameterDescriptor::new("page").attribute("name", "other");
        assert_eq!(descriptor.to_row()["name"], json!("page"));
    }

    #[test]
    fn test_deserialize_minimal() {
        let descriptor: ParameterDescriptor = serde_json::from_str(r#"{"name":"q"}"#).unwrap();
        assert_eq!(descriptor, ParameterDescriptor::new("q"));
    }
}

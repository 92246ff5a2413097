use super::Component;
use crate::shared::error::SbomError;
use crate::shared::Result;
use serde_json::{Map, Value};

const COMPONENTS_KEY: &str = "components";

/// A merged CycloneDX document split into its component list and the
/// untouched envelope around it.
///
/// Serializing writes the envelope back in its original key order with only
/// the `components` entry replaced.
#[derive(Debug, Clone, PartialEq)]
pub struct BomDocument {
    envelope: Map<String, Value>,
    components: Vec<Component>,
}

impl BomDocument {
    /// Parses a document from JSON text
    pub fn from_json_str(content: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(content).map_err(|e| SbomError::MalformedInput {
            details: format!("invalid JSON: {}", e),
        })?;
        Self::from_value(value)
    }

    /// Validates the raw document shape, then splits off the components.
    ///
    /// Validation runs before any typed parsing so a missing `name` is
    /// reported with the index of the offending record.
    pub fn from_value(value: Value) -> Result<Self> {
        validate_document(&value)?;

        let Value::Object(mut envelope) = value else {
            return Err(SbomError::MalformedInput {
                details: "document root is not a JSON object".to_string(),
            }
            .into());
        };
        let raw_components = envelope
            .insert(COMPONENTS_KEY.to_string(), Value::Array(Vec::new()))
            .unwrap_or_default();

        let components: Vec<Component> =
            serde_json::from_value(raw_components).map_err(|e| SbomError::MalformedInput {
                details: format!("invalid component record: {}", e),
            })?;

        Ok(Self {
            envelope,
            components,
        })
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// Consumes the document, returning its components and an envelope-only
    /// copy ready to receive the refined list.
    pub fn into_parts(self) -> (Vec<Component>, BomDocument) {
        let shell = BomDocument {
            envelope: self.envelope,
            components: Vec::new(),
        };
        (self.components, shell)
    }

    /// Replaces the component list
    pub fn with_components(mut self, components: Vec<Component>) -> Self {
        self.components = components;
        self
    }

    /// Reassembles the full JSON value
    pub fn to_value(&self) -> Result<Value> {
        let mut envelope = self.envelope.clone();
        envelope.insert(
            COMPONENTS_KEY.to_string(),
            serde_json::to_value(&self.components)?,
        );
        Ok(Value::Object(envelope))
    }

    /// Pretty-printed JSON with a trailing newline
    pub fn to_json_string(&self) -> Result<String> {
        let mut output = serde_json::to_string_pretty(&self.to_value()?)?;
        output.push('\n');
        Ok(output)
    }
}

/// Rejects documents the pipeline cannot run on: a non-object root, a
/// missing `components` array, or a component without a non-empty string
/// `name` (nested sub-components included).
pub fn validate_document(value: &Value) -> Result<()> {
    let root = value.as_object().ok_or_else(|| SbomError::MalformedInput {
        details: "document root is not a JSON object".to_string(),
    })?;

    let components = root
        .get(COMPONENTS_KEY)
        .and_then(Value::as_array)
        .ok_or_else(|| SbomError::MalformedInput {
            details: "document has no 'components' array".to_string(),
        })?;

    validate_components(components, "")
}

fn validate_components(components: &[Value], path_prefix: &str) -> Result<()> {
    for (index, component) in components.iter().enumerate() {
        let location = format!("{}{}", path_prefix, index);
        let record = component
            .as_object()
            .ok_or_else(|| SbomError::malformed_component(&location, "record is not a JSON object"))?;

        match record.get("name").and_then(Value::as_str) {
            Some(name) if !name.is_empty() => {}
            _ => {
                return Err(
                    SbomError::malformed_component(&location, "missing required 'name'").into(),
                )
            }
        }

        if let Some(children) = record.get(COMPONENTS_KEY).and_then(Value::as_array) {
            validate_components(children, &format!("{}].components[", location))?;
        }
    }
    Ok(())
}

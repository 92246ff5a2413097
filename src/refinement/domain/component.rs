use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// CycloneDX component type tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComponentType {
    Application,
    Framework,
    #[default]
    Library,
    Container,
    Platform,
    OperatingSystem,
    Device,
    DeviceDriver,
    Firmware,
    File,
    MachineLearningModel,
    Data,
    CryptographicAsset,
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            ComponentType::Application => "application",
            ComponentType::Framework => "framework",
            ComponentType::Library => "library",
            ComponentType::Container => "container",
            ComponentType::Platform => "platform",
            ComponentType::OperatingSystem => "operating-system",
            ComponentType::Device => "device",
            ComponentType::DeviceDriver => "device-driver",
            ComponentType::Firmware => "firmware",
            ComponentType::File => "file",
            ComponentType::MachineLearningModel => "machine-learning-model",
            ComponentType::Data => "data",
            ComponentType::CryptographicAsset => "cryptographic-asset",
        };
        f.write_str(tag)
    }
}

/// A contact entry (component `contact`, or an organizational entity's `contact`)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Contact {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

/// Supplier / manufacturer of a component
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OrganizationalEntity {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<Vec<Contact>>,
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

/// External reference (website, VCS, distribution, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExternalReference {
    pub url: String,
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

impl ExternalReference {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            other: Map::new(),
        }
    }
}

/// One component record of a CycloneDX document.
///
/// Only the fields the refinement stages read or write are typed. Everything
/// else (licenses, hashes, properties, ...) rides along in `other` and is
/// serialized back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    #[serde(rename = "type", default)]
    pub component_type: ComponentType,
    #[serde(rename = "bom-ref", skip_serializing_if = "Option::is_none")]
    pub bom_ref: Option<String>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purl: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpe: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplier: Option<OrganizationalEntity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<OrganizationalEntity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<Vec<Contact>>,
    #[serde(
        rename = "externalReferences",
        skip_serializing_if = "Option::is_none"
    )]
    pub external_references: Option<Vec<ExternalReference>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub components: Option<Vec<Component>>,
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

impl Component {
    /// Creates a bare library component, mostly useful for tests and fixtures
    pub fn new(name: impl Into<String>, version: Option<&str>) -> Self {
        Self {
            component_type: ComponentType::Library,
            bom_ref: None,
            name: name.into(),
            version: version.map(str::to_string),
            purl: None,
            cpe: None,
            supplier: None,
            manufacturer: None,
            contact: None,
            external_references: None,
            components: None,
            other: Map::new(),
        }
    }

    pub fn with_type(mut self, component_type: ComponentType) -> Self {
        self.component_type = component_type;
        self
    }

    /// Version if present and non-empty
    pub fn version_str(&self) -> Option<&str> {
        self.version.as_deref().filter(|v| !v.is_empty())
    }

    pub fn purl_str(&self) -> Option<&str> {
        self.purl.as_deref().filter(|p| !p.is_empty())
    }

    pub fn cpe_str(&self) -> Option<&str> {
        self.cpe.as_deref().filter(|c| !c.is_empty())
    }

    /// True when a non-empty PURL or CPE is already present
    pub fn has_identifier(&self) -> bool {
        self.purl_str().is_some() || self.cpe_str().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_component_deserialize_minimal() {
        let component: Component =
            serde_json::from_value(json!({"name": "busybox", "version": "1.36.1"})).unwrap();
        assert_eq!(component.name, "busybox");
        assert_eq!(component.version_str(), Some("1.36.1"));
        assert_eq!(component.component_type, ComponentType::Library);
        assert!(!component.has_identifier());
    }

    #[test]
    fn test_component_missing_name_fails() {
        let result: std::result::Result<Component, _> =
            serde_json::from_value(json!({"version": "1.0"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_component_type_kebab_case() {
        let component: Component = serde_json::from_value(
            json!({"name": "poky", "type": "operating-system"}),
        )
        .unwrap();
        assert_eq!(component.component_type, ComponentType::OperatingSystem);
        assert_eq!(component.component_type.to_string(), "operating-system");
    }

    #[test]
    fn test_unknown_fields_round_trip() {
        let input = json!({
            "type": "library",
            "name": "zlib",
            "version": "1.3",
            "licenses": [{"license": {"id": "Zlib"}}],
            "hashes": [{"alg": "SHA-256", "content": "abc"}]
        });
        let component: Component = serde_json::from_value(input.clone()).unwrap();
        assert!(component.other.contains_key("licenses"));
        let output = serde_json::to_value(&component).unwrap();
        assert_eq!(output, input);
    }

    #[test]
    fn test_empty_version_is_not_a_version() {
        let component = Component::new("linux-firmware", Some(""));
        assert_eq!(component.version_str(), None);
    }

    #[test]
    fn test_has_identifier_ignores_empty_strings() {
        let mut component = Component::new("foo", Some("1.0"));
        component.purl = Some(String::new());
        assert!(!component.has_identifier());
        component.cpe = Some("cpe:2.3:a:*:foo:1.0:*:*:*:*:*:*:*".to_string());
        assert!(component.has_identifier());
    }

    #[test]
    fn test_nested_components_deserialize() {
        let component: Component = serde_json::from_value(json!({
            "name": "image",
            "components": [{"name": "child", "version": "0.1"}]
        }))
        .unwrap();
        let children = component.components.unwrap();
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].name, "child");
    }
}

use crate::refinement::domain::{
    Component, Contact, ExternalReference, OrganizationalEntity, Stage, StageReport,
};

/// SPDX placeholder for "no value asserted"
const NOASSERTION: &str = "NOASSERTION";

/// Characters that make a URL an invalid IRI-reference
const IRI_UNSAFE: [char; 3] = [' ', '[', ']'];

/// StructuralSanitizer - repairs contact and reference sub-records that
/// violate CycloneDX schema constraints.
///
/// SPDX conversions routinely carry `NOASSERTION` download locations,
/// free-text "URLs" such as `UnZip 6.0`, and contacts with empty emails.
/// Each component (and its nested sub-components) is cleaned independently.
pub struct StructuralSanitizer;

impl StructuralSanitizer {
    /// Sanitizes every component, returning the cleaned list and the number
    /// of top-level components that changed (nested changes count toward
    /// their top-level parent).
    pub fn apply(components: Vec<Component>) -> (Vec<Component>, StageReport) {
        let mut changed = 0;
        let sanitized = components
            .into_iter()
            .map(|component| {
                let (component, was_changed) = Self::sanitize_component(component);
                if was_changed {
                    changed += 1;
                }
                component
            })
            .collect();

        (sanitized, StageReport::changed(Stage::Sanitize, changed))
    }

    /// Sanitizes one component and its sub-component tree
    pub fn sanitize_component(mut component: Component) -> (Component, bool) {
        let before = component.clone();

        component.contact = component.contact.take().and_then(clean_contacts);
        component.external_references = component
            .external_references
            .take()
            .and_then(clean_references);
        component.supplier = component.supplier.take().map(clean_entity);
        component.manufacturer = component.manufacturer.take().map(clean_entity);
        component.components = component.components.take().map(|children| {
            children
                .into_iter()
                .map(|child| Self::sanitize_component(child).0)
                .collect()
        });

        let changed = component != before;
        (component, changed)
    }
}

/// Repairs a reference URL.
///
/// Returns `None` when the reference should be removed (placeholder or
/// empty). Space and square brackets are percent-encoded; every other
/// character passes through unchanged.
pub fn fix_url(url: &str) -> Option<String> {
    let trimmed = url.trim();
    if trimmed.is_empty() || trimmed == NOASSERTION {
        return None;
    }
    if !url.contains(&IRI_UNSAFE[..]) {
        return Some(url.to_string());
    }

    let mut fixed = String::with_capacity(url.len() + 8);
    let mut buf = [0u8; 4];
    for c in url.chars() {
        if IRI_UNSAFE.contains(&c) {
            fixed.push_str(&urlencoding::encode(c.encode_utf8(&mut buf)));
        } else {
            fixed.push(c);
        }
    }
    Some(fixed)
}

/// Drops empty `email` fields; the contacts themselves stay.
/// An empty array collapses to `None`.
fn clean_contacts(contacts: Vec<Contact>) -> Option<Vec<Contact>> {
    let cleaned: Vec<Contact> = contacts
        .into_iter()
        .map(|mut contact| {
            if contact
                .email
                .as_deref()
                .is_some_and(|email| email.trim().is_empty())
            {
                contact.email = None;
            }
            contact
        })
        .collect();

    (!cleaned.is_empty()).then_some(cleaned)
}

fn clean_references(references: Vec<ExternalReference>) -> Option<Vec<ExternalReference>> {
    let cleaned: Vec<ExternalReference> = references
        .into_iter()
        .filter_map(|mut reference| {
            reference.url = fix_url(&reference.url)?;
            Some(reference)
        })
        .collect();

    (!cleaned.is_empty()).then_some(cleaned)
}

fn clean_entity(mut entity: OrganizationalEntity) -> OrganizationalEntity {
    entity.contact = entity.contact.take().and_then(clean_contacts);
    entity
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn component_from(value: serde_json::Value) -> Component {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_fix_url_encodes_space() {
        assert_eq!(fix_url("UnZip 6.0"), Some("UnZip%206.0".to_string()));
    }

    #[test]
    fn test_fix_url_encodes_brackets() {
        assert_eq!(
            fix_url("http://[::1]/a b"),
            Some("http://%5B::1%5D/a%20b".to_string())
        );
    }

    #[test]
    fn test_fix_url_noassertion_removed() {
        assert_eq!(fix_url("NOASSERTION"), None);
    }

    #[test]
    fn test_fix_url_empty_removed() {
        assert_eq!(fix_url(""), None);
        assert_eq!(fix_url("   "), None);
    }

    #[test]
    fn test_fix_url_valid_passthrough() {
        let url = "https://downloads.yoctoproject.org/releases/busybox-1.36.1.tar.bz2";
        assert_eq!(fix_url(url), Some(url.to_string()));
    }

    #[test]
    fn test_fix_url_is_idempotent() {
        let once = fix_url("git://example.com/repo [branch]").unwrap();
        assert_eq!(fix_url(&once), Some(once.clone()));
    }

    #[test]
    fn test_noassertion_reference_removed_and_array_dropped() {
        let component = component_from(json!({
            "name": "unzip",
            "version": "6.0",
            "externalReferences": [{"type": "distribution", "url": "NOASSERTION"}]
        }));
        let (sanitized, changed) = StructuralSanitizer::sanitize_component(component);
        assert!(changed);
        assert!(sanitized.external_references.is_none());
    }

    #[test]
    fn test_reference_other_fields_survive() {
        let component = component_from(json!({
            "name": "unzip",
            "externalReferences": [
                {"type": "website", "url": "UnZip 6.0", "comment": "homepage"},
                {"type": "distribution", "url": "NOASSERTION"}
            ]
        }));
        let (sanitized, _) = StructuralSanitizer::sanitize_component(component);
        let refs = sanitized.external_references.unwrap();
        assert_eq!(refs.len(), 1);
        assert_eq!(refs[0].url, "UnZip%206.0");
        assert_eq!(refs[0].other["type"], json!("website"));
        assert_eq!(refs[0].other["comment"], json!("homepage"));
    }

    #[test]
    fn test_empty_contact_email_dropped_contact_kept() {
        let component = component_from(json!({
            "name": "foo",
            "contact": [{"name": "Maintainer", "email": ""}, {"email": "a@b.org"}]
        }));
        let (sanitized, changed) = StructuralSanitizer::sanitize_component(component);
        assert!(changed);
        let contacts = sanitized.contact.unwrap();
        assert_eq!(contacts.len(), 2);
        assert!(contacts[0].email.is_none());
        assert_eq!(contacts[0].other["name"], json!("Maintainer"));
        assert_eq!(contacts[1].email.as_deref(), Some("a@b.org"));
    }

    #[test]
    fn test_contact_with_only_empty_email_becomes_empty_object() {
        let component = component_from(json!({"name": "foo", "contact": [{"email": ""}]}));
        let (sanitized, _) = StructuralSanitizer::sanitize_component(component);
        let value = serde_json::to_value(&sanitized).unwrap();
        assert_eq!(value["contact"], json!([{}]));
    }

    #[test]
    fn test_empty_arrays_removed() {
        let component = component_from(json!({
            "name": "foo",
            "contact": [],
            "externalReferences": []
        }));
        let (sanitized, changed) = StructuralSanitizer::sanitize_component(component);
        assert!(changed);
        let value = serde_json::to_value(&sanitized).unwrap();
        assert!(value.get("contact").is_none());
        assert!(value.get("externalReferences").is_none());
    }

    #[test]
    fn test_supplier_contacts_cleaned() {
        let component = component_from(json!({
            "name": "foo",
            "supplier": {"name": "ACME", "contact": [{"email": ""}]}
        }));
        let (sanitized, changed) = StructuralSanitizer::sanitize_component(component);
        assert!(changed);
        let supplier = sanitized.supplier.unwrap();
        assert!(supplier.contact.unwrap()[0].email.is_none());
        assert_eq!(supplier.other["name"], json!("ACME"));
    }

    #[test]
    fn test_nested_components_sanitized() {
        let component = component_from(json!({
            "name": "image",
            "components": [{
                "name": "child",
                "externalReferences": [{"type": "vcs", "url": "NOASSERTION"}]
            }]
        }));
        let (sanitized, changed) = StructuralSanitizer::sanitize_component(component);
        assert!(changed);
        let children = sanitized.components.unwrap();
        assert!(children[0].external_references.is_none());
    }

    #[test]
    fn test_clean_component_unchanged() {
        let component = component_from(json!({
            "name": "zlib",
            "version": "1.3",
            "externalReferences": [{"type": "website", "url": "https://zlib.net"}]
        }));
        let (sanitized, changed) = StructuralSanitizer::sanitize_component(component.clone());
        assert!(!changed);
        assert_eq!(sanitized, component);
    }

    #[test]
    fn test_apply_counts_changed_components() {
        let components = vec![
            component_from(json!({"name": "a", "externalReferences": [{"url": "NOASSERTION"}]})),
            component_from(json!({"name": "b"})),
            component_from(json!({"name": "c", "contact": [{"email": ""}]})),
        ];
        let (sanitized, report) = StructuralSanitizer::apply(components);
        assert_eq!(sanitized.len(), 3);
        assert_eq!(report.stage, Stage::Sanitize);
        assert_eq!(report.changed, 2);
        assert_eq!(report.removed, 0);
    }
}

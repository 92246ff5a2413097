use crate::refinement::domain::{Component, Identifier, Stage, StageReport};
use crate::refinement::policies::IdentifierRules;
use rayon::prelude::*;

/// What happened to one component during identifier generation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Assignment {
    /// A PURL or CPE was generated
    Assigned,
    /// A PURL or CPE was already present and left alone
    AlreadyIdentified,
    /// Name or version missing; nothing could be generated
    Skipped,
}

/// IdentifierGenerator - gives every versioned component a PURL or CPE.
///
/// Assignment is a pure function of one component, so the list is mapped
/// in parallel; output order equals input order.
pub struct IdentifierGenerator;

impl IdentifierGenerator {
    pub fn apply(components: Vec<Component>) -> (Vec<Component>, StageReport) {
        Self::apply_with_rules(components, IdentifierRules::standard())
    }

    pub fn apply_with_rules(
        components: Vec<Component>,
        rules: &IdentifierRules,
    ) -> (Vec<Component>, StageReport) {
        let results: Vec<(Component, Assignment)> = components
            .into_par_iter()
            .map(|component| Self::assign(component, rules))
            .collect();

        let assigned = results
            .iter()
            .filter(|(_, outcome)| *outcome == Assignment::Assigned)
            .count();
        let skipped = results
            .iter()
            .filter(|(_, outcome)| *outcome == Assignment::Skipped)
            .count();
        let components = results.into_iter().map(|(component, _)| component).collect();

        (
            components,
            StageReport::changed(Stage::IdentifierGeneration, assigned).with_skipped(skipped),
        )
    }

    /// Assigns an identifier to one component. Existing identifiers are
    /// never replaced.
    pub fn assign(mut component: Component, rules: &IdentifierRules) -> (Component, Assignment) {
        if component.has_identifier() {
            return (component, Assignment::AlreadyIdentified);
        }
        let Some(version) = component.version_str() else {
            return (component, Assignment::Skipped);
        };

        match rules.resolve(&component.name, version) {
            Some((_, Identifier::Purl(purl))) => component.purl = Some(purl),
            Some((_, Identifier::Cpe(cpe))) => component.cpe = Some(cpe),
            None => return (component, Assignment::Skipped),
        }
        (component, Assignment::Assigned)
    }
}

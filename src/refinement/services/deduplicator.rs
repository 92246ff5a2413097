use crate::refinement::domain::{Component, Stage, StageReport};
use std::collections::{HashMap, HashSet};

/// Stand-in for an absent or empty version in the name+version key
const NO_VERSION_SENTINEL: &str = "\u{0}unversioned";

/// Explicit "seen" state threaded through the name+version fold
#[derive(Debug, Default)]
struct NameVersionAccumulator {
    seen: HashSet<(String, String)>,
    kept: Vec<Component>,
    dropped: usize,
}

impl NameVersionAccumulator {
    fn admit(mut self, component: Component) -> Self {
        let key = (
            component.name.clone(),
            component
                .version_str()
                .unwrap_or(NO_VERSION_SENTINEL)
                .to_string(),
        );
        if self.seen.insert(key) {
            self.kept.push(component);
        } else {
            self.dropped += 1;
        }
        self
    }
}

/// Components that resolved to the same CPE, in first-occurrence order
#[derive(Debug)]
struct CpeGroup {
    first: Component,
    rest: Vec<Component>,
}

impl CpeGroup {
    /// Collapses the group to one record.
    ///
    /// The shortest name survives (earliest wins a tie) and is relabelled
    /// `"<survivor> (<other>, <other>, ...)"`, the others listed by ascending
    /// name length, ties in first-occurrence order.
    fn collapse(self) -> Component {
        if self.rest.is_empty() {
            return self.first;
        }

        let mut members = Vec::with_capacity(self.rest.len() + 1);
        members.push(self.first);
        members.extend(self.rest);

        // sort_by_key is stable, so equal lengths keep input order
        members.sort_by_key(|component| component.name.chars().count());
        let mut survivor = members.remove(0);
        let suppressed: Vec<String> = members
            .into_iter()
            .map(|component| component.name)
            .collect();
        survivor.name = format!("{} ({})", survivor.name, suppressed.join(", "));
        survivor
    }

    fn singleton(component: Component) -> Self {
        Self {
            first: component,
            rest: Vec::new(),
        }
    }
}

/// IdentityDeduplicator - collapses records that describe the same entity.
///
/// Runs twice in the pipeline: by `(name, version)` before identifiers are
/// generated, and by CPE afterwards.
pub struct IdentityDeduplicator;

impl IdentityDeduplicator {
    /// First occurrence of each `(name, version)` wins; later duplicates are
    /// dropped and survivor order is preserved.
    pub fn dedupe_by_name_version(components: Vec<Component>) -> (Vec<Component>, StageReport) {
        let result = components
            .into_iter()
            .fold(NameVersionAccumulator::default(), NameVersionAccumulator::admit);
        (
            result.kept,
            StageReport::removed(Stage::NameVersionDedup, result.dropped),
        )
    }

    /// Merges components sharing a non-empty CPE into one record.
    ///
    /// Components without a CPE are never grouped. The merged record takes
    /// the position of its group's first member.
    pub fn dedupe_by_cpe(components: Vec<Component>) -> (Vec<Component>, StageReport) {
        let before = components.len();

        // slot order = first occurrence of each group
        let mut slots: Vec<CpeGroup> = Vec::with_capacity(before);
        let mut slot_by_cpe: HashMap<String, usize> = HashMap::new();

        for component in components {
            match component.cpe_str().map(str::to_string) {
                Some(cpe) => match slot_by_cpe.get(&cpe) {
                    Some(&slot) => slots[slot].rest.push(component),
                    None => {
                        slot_by_cpe.insert(cpe, slots.len());
                        slots.push(CpeGroup::singleton(component));
                    }
                },
                None => slots.push(CpeGroup::singleton(component)),
            }
        }

        let merged_groups = slots.iter().filter(|group| !group.rest.is_empty()).count();
        let merged: Vec<Component> = slots.into_iter().map(CpeGroup::collapse).collect();
        let removed = before - merged.len();

        let mut report = StageReport::removed(Stage::CpeDedup, removed);
        report.changed = merged_groups;
        (merged, report)
    }
}

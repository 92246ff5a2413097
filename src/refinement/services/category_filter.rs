use crate::refinement::domain::{Component, ComponentType, RefineOptions, Stage, StageReport};

/// Exclusion categories applied by [`CategoryFilter`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// Build-host tools (`*-native`, `*-native-*`)
    Native,
    /// Individual filesystem entries (`type: file`)
    File,
    /// Records without a version (source archives)
    Source,
}

impl Category {
    /// Evaluation order; each category gets its own report
    pub const ALL: [Category; 3] = [Category::Native, Category::File, Category::Source];

    fn stage(&self) -> Stage {
        match self {
            Category::Native => Stage::NativeFilter,
            Category::File => Stage::FileFilter,
            Category::Source => Stage::SourceFilter,
        }
    }

    fn is_included(&self, options: &RefineOptions) -> bool {
        match self {
            Category::Native => options.include_native,
            Category::File => options.include_files,
            Category::Source => options.include_source,
        }
    }

    /// Whether the component belongs to this category
    pub fn matches(&self, component: &Component) -> bool {
        match self {
            Category::Native => {
                is_native_identity(&component.name)
                    || component.bom_ref.as_deref().is_some_and(is_native_identity)
            }
            Category::File => component.component_type == ComponentType::File,
            Category::Source => component.version_str().is_none(),
        }
    }
}

/// CategoryFilter - removes components that cannot contribute to a
/// runtime vulnerability scan, unless their category is re-included.
pub struct CategoryFilter;

impl CategoryFilter {
    /// Applies the native, file, and source filters in that order.
    ///
    /// Returns the surviving components (unaltered, in input order) and one
    /// report per category. A re-included category reports as disabled.
    pub fn apply(
        components: Vec<Component>,
        options: &RefineOptions,
    ) -> (Vec<Component>, Vec<StageReport>) {
        Category::ALL
            .iter()
            .fold((components, Vec::new()), |(remaining, mut reports), category| {
                if category.is_included(options) {
                    reports.push(StageReport::disabled(category.stage()));
                    return (remaining, reports);
                }
                let before = remaining.len();
                let kept: Vec<Component> = remaining
                    .into_iter()
                    .filter(|component| !category.matches(component))
                    .collect();
                reports.push(StageReport::removed(category.stage(), before - kept.len()));
                (kept, reports)
            })
    }
}

/// `-native-` anywhere, or a trailing `-native`
fn is_native_identity(identity: &str) -> bool {
    identity.contains("-native-") || identity.ends_with("-native")
}

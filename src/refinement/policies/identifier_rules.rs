use super::curated_products::CURATED_PRODUCTS;
use crate::refinement::domain::{CpePart, Ecosystem, Identifier};
use regex::Regex;
use std::sync::LazyLock;

static KERNEL_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^kernel-[0-9]|^linux-yocto").expect("static regex"));

static FULL_DOTTED_VERSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+\.\d+\.\d+").expect("static regex"));

static LEADING_DOTTED_VERSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\d+(\.\d+)?").expect("static regex"));

static STANDARD_RULES: LazyLock<IdentifierRules> = LazyLock::new(IdentifierRules::build_standard);

/// How a rule decides whether it applies to a component name
#[derive(Debug)]
enum NameMatcher {
    /// Any of the literal prefixes followed by at least one character
    Prefixes(&'static [&'static str]),
    Pattern(Regex),
    Any,
}

impl NameMatcher {
    /// Returns the name with the consumed prefix removed, or `None` on no match
    fn apply<'a>(&self, name: &'a str) -> Option<&'a str> {
        match self {
            NameMatcher::Prefixes(prefixes) => prefixes
                .iter()
                .find_map(|prefix| name.strip_prefix(prefix).filter(|rest| !rest.is_empty())),
            NameMatcher::Pattern(regex) => regex.is_match(name).then_some(name),
            NameMatcher::Any => Some(name),
        }
    }
}

/// What a matching rule produces
#[derive(Debug)]
enum IdentifierBuilder {
    Purl(Ecosystem),
    KernelCpe,
    Cpe {
        vendor: &'static str,
        product: &'static str,
    },
    WildcardCpe,
}

impl IdentifierBuilder {
    fn build(&self, original_name: &str, transformed_name: &str, version: &str) -> Identifier {
        match self {
            IdentifierBuilder::Purl(ecosystem) => {
                Identifier::purl(*ecosystem, transformed_name, version)
            }
            IdentifierBuilder::KernelCpe => Identifier::cpe(
                CpePart::OperatingSystem,
                "linux",
                "linux_kernel",
                &kernel_version(original_name, version),
            ),
            IdentifierBuilder::Cpe { vendor, product } => {
                Identifier::cpe(CpePart::Application, vendor, product, version)
            }
            IdentifierBuilder::WildcardCpe => {
                Identifier::cpe(CpePart::Application, "*", original_name, version)
            }
        }
    }
}

/// One entry of the ordered identifier rule list
#[derive(Debug)]
pub struct IdentifierRule {
    label: &'static str,
    matcher: NameMatcher,
    builder: IdentifierBuilder,
}

impl IdentifierRule {
    pub fn label(&self) -> &'static str {
        self.label
    }

    fn resolve(&self, name: &str, version: &str) -> Option<Identifier> {
        let transformed = self.matcher.apply(name)?;
        Some(self.builder.build(name, transformed, version))
    }
}

/// Ordered, first-match-wins identifier rules.
///
/// Precedence: language ecosystems (PURL), the Linux kernel, the curated
/// product table, and finally a vendor-wildcard CPE that matches anything.
#[derive(Debug)]
pub struct IdentifierRules {
    rules: Vec<IdentifierRule>,
}

impl IdentifierRules {
    /// The shared standard rule set
    pub fn standard() -> &'static IdentifierRules {
        &STANDARD_RULES
    }

    fn build_standard() -> Self {
        let ecosystem_rules: [(&'static str, &'static [&'static str], Ecosystem); 8] = [
            ("pypi", &["python3-", "python-", "py-"], Ecosystem::Pypi),
            ("npm", &["node-", "npm-"], Ecosystem::Npm),
            ("cpan", &["perl-"], Ecosystem::Cpan),
            ("gem", &["ruby-", "gem-"], Ecosystem::Gem),
            ("golang", &["go-", "golang-"], Ecosystem::Golang),
            ("cargo", &["rust-", "cargo-"], Ecosystem::Cargo),
            ("composer", &["php-"], Ecosystem::Composer),
            ("maven", &["maven-", "java-"], Ecosystem::Maven),
        ];

        let mut rules: Vec<IdentifierRule> = ecosystem_rules
            .into_iter()
            .map(|(label, prefixes, ecosystem)| IdentifierRule {
                label,
                matcher: NameMatcher::Prefixes(prefixes),
                builder: IdentifierBuilder::Purl(ecosystem),
            })
            .collect();

        rules.push(IdentifierRule {
            label: "linux_kernel",
            matcher: NameMatcher::Pattern(KERNEL_NAME.clone()),
            builder: IdentifierBuilder::KernelCpe,
        });

        rules.extend(
            CURATED_PRODUCTS
                .iter()
                .map(|&(pattern, vendor, product)| IdentifierRule {
                    label: product,
                    matcher: NameMatcher::Pattern(
                        Regex::new(pattern).expect("curated product pattern"),
                    ),
                    builder: IdentifierBuilder::Cpe { vendor, product },
                }),
        );

        rules.push(IdentifierRule {
            label: "wildcard",
            matcher: NameMatcher::Any,
            builder: IdentifierBuilder::WildcardCpe,
        });

        Self { rules }
    }

    pub fn rules(&self) -> &[IdentifierRule] {
        &self.rules
    }

    /// Returns the first matching rule together with the identifier it builds.
    ///
    /// `None` only when the name or version is empty.
    pub fn resolve(&self, name: &str, version: &str) -> Option<(&IdentifierRule, Identifier)> {
        if name.is_empty() || version.is_empty() {
            return None;
        }
        self.rules
            .iter()
            .find_map(|rule| rule.resolve(name, version).map(|id| (rule, id)))
    }
}

/// Kernel CPE version: the full `MAJOR.MINOR.PATCH` embedded in the name
/// wins over the (often truncated) version field. Without one, falls back
/// to the leading dotted part of the version field, then the field itself.
fn kernel_version(name: &str, version: &str) -> String {
    if let Some(m) = FULL_DOTTED_VERSION.find(name) {
        return m.as_str().to_string();
    }
    LEADING_DOTTED_VERSION
        .find(version)
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| version.to_string())
}

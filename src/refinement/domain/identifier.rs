use std::fmt;

/// Package ecosystems that receive a Package URL instead of a CPE
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ecosystem {
    Pypi,
    Npm,
    Cpan,
    Gem,
    Golang,
    Cargo,
    Composer,
    Maven,
}

impl Ecosystem {
    /// PURL `type` segment
    pub fn purl_type(&self) -> &'static str {
        match self {
            Ecosystem::Pypi => "pypi",
            Ecosystem::Npm => "npm",
            Ecosystem::Cpan => "cpan",
            Ecosystem::Gem => "gem",
            Ecosystem::Golang => "golang",
            Ecosystem::Cargo => "cargo",
            Ecosystem::Composer => "composer",
            Ecosystem::Maven => "maven",
        }
    }
}

/// CPE 2.3 `part` attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CpePart {
    Application,
    OperatingSystem,
}

impl CpePart {
    fn as_char(&self) -> char {
        match self {
            CpePart::Application => 'a',
            CpePart::OperatingSystem => 'o',
        }
    }
}

/// A generated vulnerability-matchable identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identifier {
    Purl(String),
    Cpe(String),
}

impl Identifier {
    /// `pkg:<ecosystem>/<name>@<version>`
    pub fn purl(ecosystem: Ecosystem, name: &str, version: &str) -> Self {
        Identifier::Purl(format!("pkg:{}/{}@{}", ecosystem.purl_type(), name, version))
    }

    /// `cpe:2.3:<part>:<vendor>:<product>:<version>:*:*:*:*:*:*:*`
    ///
    /// Vendor, product, and version are bound with CPE 2.3 formatted-string
    /// quoting; a bare `*` stays the ANY wildcard.
    pub fn cpe(part: CpePart, vendor: &str, product: &str, version: &str) -> Self {
        Identifier::Cpe(format!(
            "cpe:2.3:{}:{}:{}:{}:*:*:*:*:*:*:*",
            part.as_char(),
            quote_cpe_value(vendor),
            quote_cpe_value(product),
            quote_cpe_value(version)
        ))
    }

    pub fn as_str(&self) -> &str {
        match self {
            Identifier::Purl(value) | Identifier::Cpe(value) => value,
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Escapes every character outside `[A-Za-z0-9._-]` with a backslash.
fn quote_cpe_value(value: &str) -> String {
    if value == "*" {
        return value.to_string();
    }
    let mut quoted = String::with_capacity(value.len());
    for c in value.chars() {
        if !(c.is_ascii_alphanumeric() || c == '.' || c == '_' || c == '-') {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted
}

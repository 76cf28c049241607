//! Assembly names and their display-name syntax.
//!
//! An assembly name identifies an assembly by simple name, version, culture, strong-name
//! key and processor architecture. Every component except the simple name is optional; an
//! absent component is a wildcard when names are matched, which lets a partial reference
//! such as `mscorlib` match a fully specified one.
//!
//! # Display Name Format
//!
//! ```text
//! Name[, Version=Major[.Minor[.Build[.Revision]]]][, Culture=culture]
//!     [, PublicKeyToken=hex|null][, PublicKey=hex][, ProcessorArchitecture=arch]
//! ```
//!
//! Keys are case-insensitive. Unknown keys are ignored and when a key is repeated the last
//! value wins. `Culture=neutral` denotes the invariant culture and `PublicKeyToken=null` an
//! assembly without strong name; both are distinct from an absent component.
//!
//! # Strong Names
//!
//! An assembly name may carry a full public key, a public key token, or both. When only the
//! key is present the token is derived from it (see [`Blob::public_key_token`]), so a name
//! carrying the key matches a name carrying the corresponding token.
//!
//! # Examples
//!
//! ```rust
//! use dotnames::AssemblyName;
//!
//! let full = AssemblyName::parse(
//!     "mscorlib, Version=4.0.0.0, Culture=neutral, PublicKeyToken=b77a5c561934e089",
//! )?;
//! let partial = AssemblyName::parse("MSCORLIB, Version=4.0")?;
//!
//! assert!(partial.matches(&full));
//! assert_eq!(full.version().unwrap().to_string(), "4.0.0.0");
//! # Ok::<(), dotnames::Error>(())
//! ```

use std::{fmt, fmt::Write as _, hash, str::FromStr};

use crate::{names::blob::Blob, syntax, Error, Result};

/// Four-part version numbering for .NET assemblies.
///
/// The major component is always present. The remaining components may be unspecified,
/// written as `*` or omitted from the end; an unspecified component matches any value.
///
/// # Examples
///
/// ```rust
/// use dotnames::AssemblyVersion;
///
/// let version = AssemblyVersion::parse("2.0")?;
/// assert_eq!(version.minor, Some(0));
/// assert_eq!(version.build, None);
/// assert!(version.matches(&AssemblyVersion::new(2, 0, 50727, 42)));
/// # Ok::<(), dotnames::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AssemblyVersion {
    /// Major version component.
    pub major: u16,
    /// Minor version component, `None` if unspecified.
    pub minor: Option<u16>,
    /// Build version component, `None` if unspecified.
    pub build: Option<u16>,
    /// Revision version component, `None` if unspecified.
    pub revision: Option<u16>,
}

impl AssemblyVersion {
    /// Creates a fully specified version.
    #[must_use]
    pub fn new(major: u16, minor: u16, build: u16, revision: u16) -> Self {
        AssemblyVersion {
            major,
            minor: Some(minor),
            build: Some(build),
            revision: Some(revision),
        }
    }

    /// Parses a version from one to four dot-separated components.
    ///
    /// # Errors
    /// Returns [`crate::Error::Malformed`] if the version has an invalid format or a
    /// component is outside the 16-bit range.
    pub fn parse(version_str: &str) -> Result<Self> {
        let parts: Vec<&str> = version_str.trim().split('.').map(str::trim).collect();

        if parts.len() > 4 {
            return Err(malformed_error!("Invalid version format: {}", version_str));
        }

        let mut components = [None; 4];
        for (i, part) in parts.iter().enumerate() {
            if *part == "*" && i > 0 {
                continue;
            }
            components[i] = Some(
                part.parse::<u16>()
                    .map_err(|_| malformed_error!("Invalid version component: '{}'", part))?,
            );
        }

        let Some(major) = components[0] else {
            return Err(malformed_error!("Invalid version format: {}", version_str));
        };

        Ok(AssemblyVersion {
            major,
            minor: components[1],
            build: components[2],
            revision: components[3],
        })
    }

    /// Parses a version, returning `None` on failure.
    #[must_use]
    pub fn try_parse(version_str: &str) -> Option<Self> {
        syntax::log_failure(version_str, "version", Self::parse(version_str))
    }

    /// Returns `true` if every component specified on both sides is equal.
    #[must_use]
    pub fn matches(&self, other: &AssemblyVersion) -> bool {
        fn component(lhs: Option<u16>, rhs: Option<u16>) -> bool {
            match (lhs, rhs) {
                (Some(lhs), Some(rhs)) => lhs == rhs,
                _ => true,
            }
        }

        self.major == other.major
            && component(self.minor, other.minor)
            && component(self.build, other.build)
            && component(self.revision, other.revision)
    }
}

impl fmt::Display for AssemblyVersion {
    /// Formats the version in dotted notation, omitting trailing unspecified components.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rest = [self.minor, self.build, self.revision];
        let specified = rest.iter().rposition(Option::is_some).map_or(0, |i| i + 1);

        write!(f, "{}", self.major)?;
        for component in &rest[..specified] {
            match component {
                Some(value) => write!(f, ".{}", value)?,
                None => f.write_str(".*")?,
            }
        }
        Ok(())
    }
}

impl FromStr for AssemblyVersion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Processor architecture specification for .NET assemblies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProcessorArchitecture {
    /// Architecture neutral managed code.
    MSIL,
    /// 32-bit Intel x86 architecture.
    X86,
    /// Intel Itanium 64-bit architecture.
    IA64,
    /// 64-bit x86-64 architecture. `x64` is accepted as an alias when parsing.
    AMD64,
    /// ARM processor architecture.
    ARM,
    /// 64-bit ARM architecture.
    ARM64,
}

impl ProcessorArchitecture {
    /// Parse processor architecture from string representation, ignoring case.
    ///
    /// # Errors
    /// Returns [`crate::Error::Malformed`] if the architecture string is not recognized.
    pub fn parse(arch_str: &str) -> Result<Self> {
        match arch_str.trim().to_lowercase().as_str() {
            "msil" => Ok(Self::MSIL),
            "x86" => Ok(Self::X86),
            "ia64" => Ok(Self::IA64),
            "amd64" | "x64" => Ok(Self::AMD64),
            "arm" => Ok(Self::ARM),
            "arm64" => Ok(Self::ARM64),
            _ => Err(malformed_error!(
                "Unknown processor architecture: '{}'",
                arch_str.trim()
            )),
        }
    }
}

impl fmt::Display for ProcessorArchitecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let arch_str = match self {
            Self::MSIL => "MSIL",
            Self::X86 => "x86",
            Self::IA64 => "IA64",
            Self::AMD64 => "AMD64",
            Self::ARM => "ARM",
            Self::ARM64 => "ARM64",
        };
        f.write_str(arch_str)
    }
}

impl FromStr for ProcessorArchitecture {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// The name of an assembly.
///
/// Instances are immutable; use [`AssemblyNameBuilder`] or [`AssemblyName::to_builder`]
/// to construct modified copies. Two assembly names are equal when their
/// [`full_name`](Self::full_name) strings are equal.
#[derive(Clone, Debug)]
pub struct AssemblyName {
    name: String,
    version: Option<AssemblyVersion>,
    culture: Option<String>,
    public_key: Option<Blob>,
    public_key_token: Option<Blob>,
    architecture: Option<ProcessorArchitecture>,
    full_name: String,
}

impl AssemblyName {
    /// Creates an assembly name that only carries a simple name.
    ///
    /// # Errors
    /// Returns [`crate::Error::Empty`] if `name` is empty and [`crate::Error::Malformed`] if
    /// it contains a display-name separator.
    pub fn new(name: &str) -> Result<Self> {
        AssemblyNameBuilder::new(name).build()
    }

    /// Parses an assembly display name.
    ///
    /// # Arguments
    ///
    /// * `display_name` - Assembly display name string to parse
    ///
    /// # Errors
    /// Returns [`crate::Error::Empty`] for empty text and [`crate::Error::Malformed`] if a
    /// component is not a `Key=Value` pair or a known key carries an invalid value.
    pub fn parse(display_name: &str) -> Result<Self> {
        let mut parts = display_name.split(',').map(str::trim);

        let name = parts.next().unwrap_or_default();
        if name.is_empty() {
            return Err(Error::Empty);
        }

        let mut builder = AssemblyNameBuilder::new(name);
        for part in parts {
            let Some((key, value)) = part.split_once('=') else {
                return Err(malformed_error!(
                    "Expected 'Key=Value' in assembly name, found '{}'",
                    part
                ));
            };
            let value = value.trim();

            match key.trim().to_ascii_lowercase().as_str() {
                "version" => builder = builder.version(AssemblyVersion::parse(value)?),
                "culture" => builder = builder.culture(value),
                "publickeytoken" => {
                    let token = if value.eq_ignore_ascii_case("null") {
                        Blob::default()
                    } else {
                        Blob::parse(value)?
                    };
                    builder = builder.public_key_token(token);
                }
                "publickey" => {
                    let key = if value.eq_ignore_ascii_case("null") {
                        Blob::default()
                    } else {
                        Blob::parse(value)?
                    };
                    builder = builder.public_key(key);
                }
                "processorarchitecture" | "architecture" => {
                    builder = builder.architecture(ProcessorArchitecture::parse(value)?);
                }
                other => log::trace!("ignoring unknown assembly name key '{}'", other),
            }
        }

        builder.build()
    }

    /// Parses an assembly display name, returning `None` on failure.
    #[must_use]
    pub fn try_parse(display_name: &str) -> Option<Self> {
        syntax::log_failure(display_name, "assembly", Self::parse(display_name))
    }

    /// The simple name of the assembly.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The display name including every specified component.
    #[must_use]
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// The version, if specified.
    #[must_use]
    pub fn version(&self) -> Option<&AssemblyVersion> {
        self.version.as_ref()
    }

    /// The culture, if specified. The invariant culture is the empty string.
    #[must_use]
    pub fn culture(&self) -> Option<&str> {
        self.culture.as_deref()
    }

    /// The full public key, if specified.
    #[must_use]
    pub fn public_key(&self) -> Option<&Blob> {
        self.public_key.as_ref()
    }

    /// The public key token.
    ///
    /// Returns the explicitly given token if there is one, otherwise the token derived
    /// from the public key, otherwise `None`.
    #[must_use]
    pub fn public_key_token(&self) -> Option<Blob> {
        self.public_key_token
            .clone()
            .or_else(|| self.public_key.as_ref().map(Blob::public_key_token))
    }

    /// The explicitly given public key token, without deriving one from the key.
    #[must_use]
    pub fn explicit_public_key_token(&self) -> Option<&Blob> {
        self.public_key_token.as_ref()
    }

    /// The processor architecture, if specified.
    #[must_use]
    pub fn architecture(&self) -> Option<ProcessorArchitecture> {
        self.architecture
    }

    /// Returns `true` if the assembly carries a non-empty key or token.
    #[must_use]
    pub fn is_strong_named(&self) -> bool {
        self.public_key_token().is_some_and(|token| !token.is_empty())
    }

    /// Returns a builder initialized with this name's components.
    #[must_use]
    pub fn to_builder(&self) -> AssemblyNameBuilder {
        AssemblyNameBuilder {
            name: self.name.clone(),
            version: self.version,
            culture: self.culture.clone(),
            public_key: self.public_key.clone(),
            public_key_token: self.public_key_token.clone(),
            architecture: self.architecture,
        }
    }

    /// Structural comparison where components absent on either side act as wildcards.
    ///
    /// Simple names and cultures compare case-insensitively. Public keys are compared by
    /// token, deriving the token from the key where necessary.
    #[must_use]
    pub fn matches(&self, other: &AssemblyName) -> bool {
        if !self.name.eq_ignore_ascii_case(&other.name) {
            return false;
        }

        if let (Some(lhs), Some(rhs)) = (&self.version, &other.version) {
            if !lhs.matches(rhs) {
                return false;
            }
        }

        if let (Some(lhs), Some(rhs)) = (&self.culture, &other.culture) {
            if !lhs.eq_ignore_ascii_case(rhs) {
                return false;
            }
        }

        if let (Some(lhs), Some(rhs)) = (self.public_key_token(), other.public_key_token()) {
            if lhs != rhs {
                return false;
            }
        }

        match (self.architecture, other.architecture) {
            (Some(lhs), Some(rhs)) => lhs == rhs,
            _ => true,
        }
    }

    fn display_name(&self) -> String {
        let mut result = String::with_capacity(self.name.len() + 80);
        result.push_str(&self.name);

        if let Some(version) = &self.version {
            let _ = write!(result, ", Version={}", version);
        }

        if let Some(culture) = &self.culture {
            let culture = if culture.is_empty() { "neutral" } else { culture };
            let _ = write!(result, ", Culture={}", culture);
        }

        match (&self.public_key_token, &self.public_key) {
            (Some(token), _) => {
                let _ = write!(result, ", PublicKeyToken={}", blob_text(token));
            }
            (None, Some(key)) => {
                let _ = write!(result, ", PublicKey={}", blob_text(key));
            }
            (None, None) => {}
        }

        if let Some(architecture) = &self.architecture {
            let _ = write!(result, ", ProcessorArchitecture={}", architecture);
        }

        result
    }
}

fn blob_text(blob: &Blob) -> String {
    if blob.is_empty() {
        "null".to_string()
    } else {
        blob.to_string()
    }
}

impl PartialEq for AssemblyName {
    fn eq(&self, other: &Self) -> bool {
        self.full_name == other.full_name
    }
}

impl Eq for AssemblyName {}

impl hash::Hash for AssemblyName {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.full_name.hash(state);
    }
}

impl fmt::Display for AssemblyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_name)
    }
}

impl FromStr for AssemblyName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Builder for [`AssemblyName`].
///
/// # Examples
///
/// ```rust
/// use dotnames::{AssemblyNameBuilder, AssemblyVersion, Blob};
///
/// let name = AssemblyNameBuilder::new("System.Runtime")
///     .version(AssemblyVersion::new(8, 0, 0, 0))
///     .culture("neutral")
///     .public_key_token(Blob::parse("b03f5f7f11d50a3a")?)
///     .build()?;
///
/// assert_eq!(
///     name.full_name(),
///     "System.Runtime, Version=8.0.0.0, Culture=neutral, PublicKeyToken=b03f5f7f11d50a3a"
/// );
/// # Ok::<(), dotnames::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct AssemblyNameBuilder {
    name: String,
    version: Option<AssemblyVersion>,
    culture: Option<String>,
    public_key: Option<Blob>,
    public_key_token: Option<Blob>,
    architecture: Option<ProcessorArchitecture>,
}

impl AssemblyNameBuilder {
    /// Starts a builder for the given simple name.
    #[must_use]
    pub fn new(name: &str) -> Self {
        AssemblyNameBuilder {
            name: name.trim().to_string(),
            ..Default::default()
        }
    }

    /// Sets the simple name.
    #[must_use]
    pub fn name(mut self, name: &str) -> Self {
        self.name = name.trim().to_string();
        self
    }

    /// Sets the version.
    #[must_use]
    pub fn version(mut self, version: AssemblyVersion) -> Self {
        self.version = Some(version);
        self
    }

    /// Sets the culture. `neutral` is stored as the invariant culture.
    #[must_use]
    pub fn culture(mut self, culture: &str) -> Self {
        let culture = culture.trim();
        self.culture = Some(if culture.eq_ignore_ascii_case("neutral") {
            String::new()
        } else {
            culture.to_string()
        });
        self
    }

    /// Sets the full public key.
    #[must_use]
    pub fn public_key(mut self, key: Blob) -> Self {
        self.public_key = Some(key);
        self
    }

    /// Sets the public key token. An empty token denotes an assembly without strong name.
    #[must_use]
    pub fn public_key_token(mut self, token: Blob) -> Self {
        self.public_key_token = Some(token);
        self
    }

    /// Sets the processor architecture.
    #[must_use]
    pub fn architecture(mut self, architecture: ProcessorArchitecture) -> Self {
        self.architecture = Some(architecture);
        self
    }

    /// Clears the version, culture, key, token and architecture.
    #[must_use]
    pub fn clear_qualifiers(self) -> Self {
        AssemblyNameBuilder::new(&self.name)
    }

    /// Builds the assembly name.
    ///
    /// # Errors
    /// Returns [`crate::Error::Empty`] if no simple name was given,
    /// [`crate::Error::Malformed`] if it contains a display-name separator, and
    /// [`crate::Error::InvalidArgument`] if the token does not have 8 bytes.
    pub fn build(self) -> Result<AssemblyName> {
        if self.name.is_empty() {
            return Err(Error::Empty);
        }
        if let Some(c) = self
            .name
            .chars()
            .find(|c| matches!(c, ',' | '=' | '[' | ']' | '"' | '\''))
        {
            return Err(malformed_error!(
                "Invalid character '{}' in assembly name '{}'",
                c,
                self.name
            ));
        }
        if let Some(token) = &self.public_key_token {
            if !token.is_empty() && token.len() != crate::names::blob::PUBLIC_KEY_TOKEN_LENGTH {
                return Err(invalid_argument!(
                    "public_key_token",
                    "PublicKeyToken must be exactly 8 bytes, got {}",
                    token.len()
                ));
            }
        }

        let mut name = AssemblyName {
            name: self.name,
            version: self.version,
            culture: self.culture,
            public_key: self.public_key,
            public_key_token: self.public_key_token,
            architecture: self.architecture,
            full_name: String::new(),
        };
        name.full_name = name.display_name();
        Ok(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MSCORLIB: &str =
        "mscorlib, Version=4.0.0.0, Culture=neutral, PublicKeyToken=b77a5c561934e089";

    #[test]
    fn test_assembly_version_parse_full() {
        let version = AssemblyVersion::parse("4.0.0.0").unwrap();
        assert_eq!(version, AssemblyVersion::new(4, 0, 0, 0));
    }

    #[test]
    fn test_assembly_version_parse_partial() {
        let v2 = AssemblyVersion::parse("1.2").unwrap();
        assert_eq!(v2.major, 1);
        assert_eq!(v2.minor, Some(2));
        assert_eq!(v2.build, None);
        assert_eq!(v2.to_string(), "1.2");

        let starred = AssemblyVersion::parse("1.*.3").unwrap();
        assert_eq!(starred.minor, None);
        assert_eq!(starred.build, Some(3));
        assert_eq!(starred.to_string(), "1.*.3");
    }

    #[test]
    fn test_assembly_version_parse_invalid() {
        assert!(AssemblyVersion::parse("").is_err());
        assert!(AssemblyVersion::parse("*").is_err());
        assert!(AssemblyVersion::parse("1.2.3.4.5").is_err());
        assert!(AssemblyVersion::parse("1.2.abc.4").is_err());
        assert!(AssemblyVersion::parse("1.2.99999.4").is_err());
        assert!(AssemblyVersion::try_parse("1.2.abc.4").is_none());
        assert_eq!(
            AssemblyVersion::try_parse("1.2.3.4"),
            Some(AssemblyVersion::new(1, 2, 3, 4))
        );
    }

    #[test]
    fn test_assembly_version_matches() {
        let partial = AssemblyVersion::parse("4.0").unwrap();
        assert!(partial.matches(&AssemblyVersion::new(4, 0, 30319, 1)));
        assert!(!partial.matches(&AssemblyVersion::new(4, 5, 0, 0)));
        assert!(!partial.matches(&AssemblyVersion::new(2, 0, 0, 0)));
    }

    #[test]
    fn test_processor_architecture_parse() {
        assert_eq!(
            ProcessorArchitecture::parse("msil").unwrap(),
            ProcessorArchitecture::MSIL
        );
        assert_eq!(
            ProcessorArchitecture::parse("x64").unwrap(),
            ProcessorArchitecture::AMD64
        );
        assert_eq!(ProcessorArchitecture::AMD64.to_string(), "AMD64");
        assert!(ProcessorArchitecture::parse("sparc").is_err());
    }

    #[test]
    fn test_parse_full_display_name() {
        let name = AssemblyName::parse(MSCORLIB).unwrap();
        assert_eq!(name.name(), "mscorlib");
        assert_eq!(name.version(), Some(&AssemblyVersion::new(4, 0, 0, 0)));
        assert_eq!(name.culture(), Some(""));
        assert_eq!(
            name.public_key_token().unwrap().to_string(),
            "b77a5c561934e089"
        );
        assert_eq!(name.full_name(), MSCORLIB);
        assert!(name.is_strong_named());
    }

    #[test]
    fn test_parse_simple_and_spacing() {
        let name = AssemblyName::parse("  System.Core  ").unwrap();
        assert_eq!(name.full_name(), "System.Core");
        assert!(name.version().is_none());

        let spaced = AssemblyName::parse("a ,version = 1.0 ,CULTURE=en-US").unwrap();
        assert_eq!(spaced.full_name(), "a, Version=1.0, Culture=en-US");
    }

    #[test]
    fn test_parse_null_token_and_unknown_keys() {
        let name = AssemblyName::parse("a, PublicKeyToken=null, Retargetable=Yes").unwrap();
        assert_eq!(name.public_key_token(), Some(Blob::default()));
        assert!(!name.is_strong_named());
        assert_eq!(name.full_name(), "a, PublicKeyToken=null");
    }

    #[test]
    fn test_parse_duplicate_key_last_wins() {
        let name = AssemblyName::parse("a, Version=1.0, Version=2.0").unwrap();
        assert_eq!(name.version().unwrap().to_string(), "2.0");
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(AssemblyName::parse(""), Err(Error::Empty));
        assert_eq!(AssemblyName::parse(", Version=1.0"), Err(Error::Empty));
        assert!(AssemblyName::parse("a, Version").is_err());
        assert!(AssemblyName::parse("a, PublicKeyToken=abcd").is_err());
        assert!(AssemblyName::parse("a, Version=x").is_err());
        assert!(AssemblyName::try_parse("a=b").is_none());
    }

    #[test]
    fn test_matches_wildcards() {
        let full = AssemblyName::parse(MSCORLIB).unwrap();
        assert!(AssemblyName::parse("MsCorLib").unwrap().matches(&full));
        assert!(full.matches(&AssemblyName::parse("mscorlib").unwrap()));
        assert!(!AssemblyName::parse("mscorlib, Version=2.0")
            .unwrap()
            .matches(&full));
        assert!(!AssemblyName::parse("mscorlib, Culture=de-DE")
            .unwrap()
            .matches(&full));
        assert!(!AssemblyName::parse("System").unwrap().matches(&full));
    }

    #[test]
    fn test_matches_key_against_token() {
        let ecma_key = Blob::new(&[0, 0, 0, 0, 0, 0, 0, 0, 4, 0, 0, 0, 0, 0, 0, 0]);
        let with_key = AssemblyNameBuilder::new("mscorlib")
            .public_key(ecma_key)
            .build()
            .unwrap();
        let with_token = AssemblyName::parse(MSCORLIB).unwrap();
        let other_token =
            AssemblyName::parse("mscorlib, PublicKeyToken=0000000000000000").unwrap();

        assert!(with_key.matches(&with_token));
        assert!(with_token.matches(&with_key));
        assert!(!with_key.matches(&other_token));
        assert!(with_key.full_name().starts_with("mscorlib, PublicKey=0000"));
    }

    #[test]
    fn test_key_and_token_both_kept() {
        let name = AssemblyName::parse("a, PublicKey=0011, PublicKeyToken=0102030405060708")
            .unwrap();
        assert_eq!(name.public_key().unwrap().data(), &[0x00, 0x11]);
        assert_eq!(
            name.public_key_token().unwrap().data(),
            &[1, 2, 3, 4, 5, 6, 7, 8]
        );
    }

    #[test]
    fn test_builder_validation() {
        assert_eq!(AssemblyNameBuilder::new(" ").build(), Err(Error::Empty));
        assert!(AssemblyNameBuilder::new("a,b").build().is_err());
        assert!(matches!(
            AssemblyNameBuilder::new("a")
                .public_key_token(Blob::new(&[1, 2]))
                .build(),
            Err(Error::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_to_builder_roundtrip() {
        let name = AssemblyName::parse(MSCORLIB).unwrap();
        let copy = name.to_builder().build().unwrap();
        assert_eq!(name, copy);

        let stripped = name.to_builder().clear_qualifiers().build().unwrap();
        assert_eq!(stripped.full_name(), "mscorlib");
    }
}

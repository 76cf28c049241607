//! Namespace and module names.

use std::{fmt, str::FromStr};

use crate::{
    syntax::{self, identifier::is_dotted_identifier},
    Error, Result,
};

pub(crate) static GLOBAL_NAMESPACE: NamespaceName = NamespaceName {
    full_name: String::new(),
};

/// A dotted namespace such as `System.Collections.Generic`.
///
/// The empty namespace is the global namespace. Matching treats the receiver as a suffix:
/// `Generic` matches `System.Collections.Generic`, and the global namespace matches every
/// namespace.
///
/// # Examples
///
/// ```rust
/// use dotnames::NamespaceName;
///
/// let io = NamespaceName::parse("IO")?;
/// assert!(io.matches(&NamespaceName::parse("System.IO")?));
/// assert!(!NamespaceName::parse("System.IO")?.matches(&io));
/// # Ok::<(), dotnames::Error>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct NamespaceName {
    full_name: String,
}

impl NamespaceName {
    /// The global namespace.
    #[must_use]
    pub fn global() -> Self {
        NamespaceName::default()
    }

    /// Parses a namespace, validating each dot separated segment as an identifier.
    ///
    /// # Errors
    /// Returns [`crate::Error::Malformed`] if a segment is not an identifier.
    pub fn parse(text: &str) -> Result<Self> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(NamespaceName::global());
        }
        if !is_dotted_identifier(text) {
            return Err(malformed_error!("Invalid namespace '{}'", text));
        }
        Ok(NamespaceName::new_unchecked(text))
    }

    /// Parses a namespace, returning `None` on failure.
    #[must_use]
    pub fn try_parse(text: &str) -> Option<Self> {
        syntax::log_failure(text, "namespace", Self::parse(text))
    }

    /// Builds a namespace from text the parser already tokenized.
    pub(crate) fn new_unchecked(text: &str) -> Self {
        NamespaceName {
            full_name: text.to_string(),
        }
    }

    /// The dotted name of this namespace.
    #[must_use]
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// The last segment of the namespace.
    #[must_use]
    pub fn name(&self) -> &str {
        self.full_name
            .rsplit_once('.')
            .map_or(self.full_name.as_str(), |(_, last)| last)
    }

    /// The enclosing namespace, or `None` for a single segment or the global namespace.
    #[must_use]
    pub fn parent(&self) -> Option<NamespaceName> {
        self.full_name
            .rsplit_once('.')
            .map(|(parent, _)| NamespaceName::new_unchecked(parent))
    }

    /// Returns `true` for the global namespace.
    #[must_use]
    pub fn is_global(&self) -> bool {
        self.full_name.is_empty()
    }

    /// Returns a namespace nested inside this one.
    ///
    /// # Errors
    /// Returns [`crate::Error::Malformed`] if `name` is not a dotted identifier.
    pub fn child(&self, name: &str) -> Result<NamespaceName> {
        if !is_dotted_identifier(name) {
            return Err(malformed_error!("Invalid namespace segment '{}'", name));
        }
        if self.is_global() {
            return Ok(NamespaceName::new_unchecked(name));
        }
        Ok(NamespaceName::new_unchecked(&format!(
            "{}.{}",
            self.full_name, name
        )))
    }

    /// Returns `true` if `other` equals this namespace or ends with it as a dotted suffix.
    #[must_use]
    pub fn matches(&self, other: &NamespaceName) -> bool {
        if self.is_global() || self.full_name == other.full_name {
            return true;
        }

        other
            .full_name
            .strip_suffix(self.full_name.as_str())
            .is_some_and(|head| head.ends_with('.'))
    }
}

impl fmt::Display for NamespaceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_name)
    }
}

impl FromStr for NamespaceName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// The name of a module, such as `mscorlib.dll`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModuleName {
    name: String,
}

impl ModuleName {
    /// Parses a module name.
    ///
    /// # Errors
    /// Returns [`crate::Error::Empty`] for empty text and [`crate::Error::Malformed`] if the
    /// name contains a path or signature separator.
    pub fn parse(text: &str) -> Result<Self> {
        let text = text.trim();
        if text.is_empty() {
            return Err(Error::Empty);
        }
        if let Some(c) = text
            .chars()
            .find(|c| matches!(c, '/' | '\\' | ',' | '[' | ']' | '(' | ')' | '<' | '>'))
        {
            return Err(malformed_error!(
                "Invalid character '{}' in module name '{}'",
                c,
                text
            ));
        }
        Ok(ModuleName {
            name: text.to_string(),
        })
    }

    /// Parses a module name, returning `None` on failure.
    #[must_use]
    pub fn try_parse(text: &str) -> Option<Self> {
        syntax::log_failure(text, "module", Self::parse(text))
    }

    /// The module name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Module names compare case-insensitively.
    #[must_use]
    pub fn matches(&self, other: &ModuleName) -> bool {
        self.name.eq_ignore_ascii_case(&other.name)
    }
}

impl fmt::Display for ModuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl FromStr for ModuleName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_namespace_parse() {
        let ns = NamespaceName::parse("System.Collections.Generic").unwrap();
        assert_eq!(ns.name(), "Generic");
        assert_eq!(ns.parent().unwrap().full_name(), "System.Collections");
        assert!(NamespaceName::parse("").unwrap().is_global());
        assert!(NamespaceName::parse("System..IO").is_err());
        assert!(NamespaceName::parse("System.IO+X").is_err());
        assert!(NamespaceName::try_parse("System..IO").is_none());
        assert_eq!(
            NamespaceName::try_parse("System.IO").unwrap().full_name(),
            "System.IO"
        );
    }

    #[test]
    fn test_namespace_matches_suffix() {
        let generic = NamespaceName::parse("Generic").unwrap();
        let full = NamespaceName::parse("System.Collections.Generic").unwrap();
        let tail = NamespaceName::parse("ric").unwrap();

        assert!(generic.matches(&full));
        assert!(!full.matches(&generic));
        assert!(!tail.matches(&full));
        assert!(NamespaceName::global().matches(&full));
        assert!(full.matches(&full));
    }

    #[test]
    fn test_namespace_child() {
        let system = NamespaceName::parse("System").unwrap();
        assert_eq!(system.child("IO").unwrap().full_name(), "System.IO");
        assert_eq!(NamespaceName::global().child("X").unwrap().full_name(), "X");
        assert!(system.child("").is_err());
    }

    #[test]
    fn test_module_name() {
        let module = ModuleName::parse(" mscorlib.dll ").unwrap();
        assert_eq!(module.name(), "mscorlib.dll");
        assert!(module.matches(&ModuleName::parse("MSCORLIB.DLL").unwrap()));
        assert_eq!(ModuleName::parse(""), Err(Error::Empty));
        assert!(ModuleName::parse("a/b.dll").is_err());
        assert!(ModuleName::try_parse("a/b.dll").is_none());
        assert_eq!(ModuleName::try_parse("b.dll").unwrap().name(), "b.dll");
    }
}

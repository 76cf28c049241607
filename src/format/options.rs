//! Format configuration.

use std::sync::OnceLock;

use crate::{names::symbol::SymbolTypes, Error, Result};

/// The basic rendering selected by a format specifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BasicFormat {
    /// `C`: names qualified by their declaring types but not by namespaces
    Compact,
    /// `N` or empty: the name alone
    #[default]
    Name,
    /// `M`: the name with the parameter list that tells overloads apart
    NameOverloads,
    /// `F` or `G`: fully qualified
    Full,
    /// `U`: fully qualified with assemblies, parseable back into an equal name
    Roundtrip,
}

impl BasicFormat {
    /// The canonical specifier character.
    #[must_use]
    pub fn specifier(self) -> char {
        match self {
            BasicFormat::Compact => 'C',
            BasicFormat::Name => 'N',
            BasicFormat::NameOverloads => 'M',
            BasicFormat::Full => 'F',
            BasicFormat::Roundtrip => 'U',
        }
    }
}

/// Formatting options.
///
/// A format is either mutable or sealed. The canned formats returned by
/// [`MetadataNameFormat::from_specifier`] and [`MetadataNameFormat::default_format`] are
/// sealed; cloning any format yields a mutable copy.
///
/// # Examples
///
/// ```rust
/// use dotnames::{BasicFormat, Error, MetadataNameFormat, TypeName};
///
/// let mut format = MetadataNameFormat::from_specifier("F")?.clone();
/// format.set_use_positional_generic_parameters(false)?;
///
/// let list = TypeName::parse_with(
///     "System.Collections.Generic.List<T>",
///     dotnames::ParseOptions::PREFER_GENERIC_PARAMETERS,
/// )?;
/// assert_eq!(
///     list.to_string_with_format(&format),
///     "System.Collections.Generic.List<T>"
/// );
///
/// format.seal();
/// assert_eq!(format.set_basic_format(BasicFormat::Name), Err(Error::Sealed));
/// # Ok::<(), dotnames::Error>(())
/// ```
#[derive(Debug, PartialEq, Eq)]
pub struct MetadataNameFormat {
    basic_format: BasicFormat,
    include_type_parameters: bool,
    include_type_constraints: bool,
    include_variance: bool,
    use_positional_generic_parameters: bool,
    include_parameter_names: bool,
    return_types: SymbolTypes,
    modifiers: SymbolTypes,
    sealed: bool,
}

static CANNED_FORMATS: OnceLock<[MetadataNameFormat; 5]> = OnceLock::new();

fn canned_formats() -> &'static [MetadataNameFormat; 5] {
    CANNED_FORMATS.get_or_init(|| {
        [
            MetadataNameFormat {
                basic_format: BasicFormat::Compact,
                include_type_parameters: true,
                ..MetadataNameFormat::unsealed_default()
            },
            MetadataNameFormat::unsealed_default(),
            MetadataNameFormat {
                basic_format: BasicFormat::NameOverloads,
                ..MetadataNameFormat::unsealed_default()
            },
            MetadataNameFormat {
                basic_format: BasicFormat::Full,
                include_type_parameters: true,
                use_positional_generic_parameters: true,
                ..MetadataNameFormat::unsealed_default()
            },
            MetadataNameFormat {
                basic_format: BasicFormat::Roundtrip,
                include_type_parameters: true,
                include_variance: true,
                use_positional_generic_parameters: true,
                include_parameter_names: true,
                return_types: SymbolTypes::MEMBERS,
                modifiers: SymbolTypes::PARAMETER | SymbolTypes::RETURN_PARAMETER,
                ..MetadataNameFormat::unsealed_default()
            },
        ]
        .map(MetadataNameFormat::sealed)
    })
}

impl MetadataNameFormat {
    const fn unsealed_default() -> Self {
        MetadataNameFormat {
            basic_format: BasicFormat::Name,
            include_type_parameters: false,
            include_type_constraints: false,
            include_variance: false,
            use_positional_generic_parameters: false,
            include_parameter_names: false,
            return_types: SymbolTypes::empty(),
            modifiers: SymbolTypes::empty(),
            sealed: false,
        }
    }

    fn sealed(mut self) -> Self {
        self.sealed = true;
        self
    }

    /// The sealed process-wide default format, equal to the `N` format.
    #[must_use]
    pub fn default_format() -> &'static MetadataNameFormat {
        &canned_formats()[1]
    }

    /// Looks up the sealed format for a specifier.
    ///
    /// | Specifier | Format |
    /// |-----------|--------|
    /// | `C` | [`BasicFormat::Compact`] with named generic parameters |
    /// | `N`, empty | [`BasicFormat::Name`] |
    /// | `M` | [`BasicFormat::NameOverloads`] |
    /// | `F`, `G` | [`BasicFormat::Full`] with positional generic parameters |
    /// | `U` | [`BasicFormat::Roundtrip`] with everything a parser needs |
    ///
    /// # Errors
    /// Returns [`crate::Error::UnknownFormat`] for any other specifier.
    pub fn from_specifier(specifier: &str) -> Result<&'static MetadataNameFormat> {
        let index = match specifier {
            "C" | "c" => 0,
            "" | "N" | "n" => 1,
            "M" | "m" => 2,
            "F" | "f" | "G" | "g" => 3,
            "U" | "u" => 4,
            _ => return Err(Error::UnknownFormat(specifier.to_string())),
        };
        Ok(&canned_formats()[index])
    }

    /// Freezes this format; every later setter call fails.
    pub fn seal(&mut self) {
        self.sealed = true;
    }

    /// Returns `true` once [`MetadataNameFormat::seal`] was called.
    #[must_use]
    pub fn is_sealed(&self) -> bool {
        self.sealed
    }

    fn ensure_unsealed(&self) -> Result<()> {
        if self.sealed {
            Err(Error::Sealed)
        } else {
            Ok(())
        }
    }

    /// The basic rendering.
    #[must_use]
    pub fn basic_format(&self) -> BasicFormat {
        self.basic_format
    }

    /// Whether generic definitions list their parameters.
    #[must_use]
    pub fn include_type_parameters(&self) -> bool {
        self.include_type_parameters
    }

    /// Whether listed generic parameters show their constraints.
    #[must_use]
    pub fn include_type_constraints(&self) -> bool {
        self.include_type_constraints
    }

    /// Whether listed generic parameters show their variance.
    #[must_use]
    pub fn include_variance(&self) -> bool {
        self.include_variance
    }

    /// Whether generic parameters are rendered as `` `N `` instead of their names.
    #[must_use]
    pub fn use_positional_generic_parameters(&self) -> bool {
        self.use_positional_generic_parameters
    }

    /// Whether parameter lists show parameter names.
    #[must_use]
    pub fn include_parameter_names(&self) -> bool {
        self.include_parameter_names
    }

    /// The member kinds rendered with their return, property, field or handler type.
    #[must_use]
    pub fn return_types(&self) -> SymbolTypes {
        self.return_types
    }

    /// The parameter kinds rendered with their `modopt`/`modreq` modifiers.
    #[must_use]
    pub fn modifiers(&self) -> SymbolTypes {
        self.modifiers
    }

    /// Sets the basic rendering.
    ///
    /// # Errors
    /// Returns [`crate::Error::Sealed`] if this format is sealed.
    pub fn set_basic_format(&mut self, basic_format: BasicFormat) -> Result<()> {
        self.ensure_unsealed()?;
        self.basic_format = basic_format;
        Ok(())
    }

    /// Sets whether generic definitions list their parameters.
    ///
    /// # Errors
    /// Returns [`crate::Error::Sealed`] if this format is sealed.
    pub fn set_include_type_parameters(&mut self, value: bool) -> Result<()> {
        self.ensure_unsealed()?;
        self.include_type_parameters = value;
        Ok(())
    }

    /// Sets whether listed generic parameters show their constraints.
    ///
    /// # Errors
    /// Returns [`crate::Error::Sealed`] if this format is sealed.
    pub fn set_include_type_constraints(&mut self, value: bool) -> Result<()> {
        self.ensure_unsealed()?;
        self.include_type_constraints = value;
        Ok(())
    }

    /// Sets whether listed generic parameters show their variance.
    ///
    /// # Errors
    /// Returns [`crate::Error::Sealed`] if this format is sealed.
    pub fn set_include_variance(&mut self, value: bool) -> Result<()> {
        self.ensure_unsealed()?;
        self.include_variance = value;
        Ok(())
    }

    /// Sets whether generic parameters are rendered positionally.
    ///
    /// # Errors
    /// Returns [`crate::Error::Sealed`] if this format is sealed.
    pub fn set_use_positional_generic_parameters(&mut self, value: bool) -> Result<()> {
        self.ensure_unsealed()?;
        self.use_positional_generic_parameters = value;
        Ok(())
    }

    /// Sets whether parameter lists show parameter names.
    ///
    /// # Errors
    /// Returns [`crate::Error::Sealed`] if this format is sealed.
    pub fn set_include_parameter_names(&mut self, value: bool) -> Result<()> {
        self.ensure_unsealed()?;
        self.include_parameter_names = value;
        Ok(())
    }

    /// Sets the member kinds rendered with their type.
    ///
    /// # Errors
    /// Returns [`crate::Error::Sealed`] if this format is sealed.
    pub fn set_return_types(&mut self, kinds: SymbolTypes) -> Result<()> {
        self.ensure_unsealed()?;
        self.return_types = kinds;
        Ok(())
    }

    /// Sets the parameter kinds rendered with their modifiers.
    ///
    /// # Errors
    /// Returns [`crate::Error::Sealed`] if this format is sealed.
    pub fn set_modifiers(&mut self, kinds: SymbolTypes) -> Result<()> {
        self.ensure_unsealed()?;
        self.modifiers = kinds;
        Ok(())
    }
}

impl Default for MetadataNameFormat {
    /// An unsealed copy of [`MetadataNameFormat::default_format`].
    fn default() -> Self {
        Self::unsealed_default()
    }
}

impl Clone for MetadataNameFormat {
    /// Clones into an unsealed copy.
    fn clone(&self) -> Self {
        MetadataNameFormat {
            sealed: false,
            ..*self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_specifiers() {
        for (specifier, basic) in [
            ("C", BasicFormat::Compact),
            ("", BasicFormat::Name),
            ("N", BasicFormat::Name),
            ("M", BasicFormat::NameOverloads),
            ("F", BasicFormat::Full),
            ("G", BasicFormat::Full),
            ("U", BasicFormat::Roundtrip),
        ] {
            let format = MetadataNameFormat::from_specifier(specifier).unwrap();
            assert_eq!(format.basic_format(), basic);
            assert!(format.is_sealed());
        }
        assert_eq!(
            MetadataNameFormat::from_specifier("X"),
            Err(Error::UnknownFormat("X".to_string()))
        );
    }

    #[test]
    fn test_sealing() {
        let shared = MetadataNameFormat::default_format();
        assert!(shared.is_sealed());
        assert!(std::ptr::eq(
            shared,
            MetadataNameFormat::from_specifier("N").unwrap()
        ));

        let mut copy = shared.clone();
        assert!(!copy.is_sealed());
        copy.set_include_parameter_names(true).unwrap();
        assert!(copy.include_parameter_names());

        copy.seal();
        assert_eq!(copy.set_include_variance(true), Err(Error::Sealed));
        assert_eq!(MetadataNameFormat::default(), shared.clone());
    }
}

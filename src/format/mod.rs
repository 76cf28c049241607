//! Rendering of names as text.
//!
//! Every name renders its full name through `Display`. Other renderings are selected by a
//! single character format specifier or by an explicit [`MetadataNameFormat`]:
//!
//! | Specifier | Rendering | `System.Collections.Generic.List<System.Int32>.Add(System.Int32)` |
//! |-----------|-----------|------|
//! | `C` | compact | `List<Int32>.Add(Int32)` |
//! | `N`, empty | name only | `Add` |
//! | `M` | name and overload | `Add(System.Int32)` |
//! | `F`, `G` | full | `System.Collections.Generic.List<System.Int32>.Add(System.Int32)` |
//! | `U` | roundtrip | as `F`, plus assembly qualifiers, parameter names and return types |
//!
//! The `U` rendering parses back into an equal name with the `parse` entry point of the
//! same kind.
//!
//! # Examples
//!
//! ```rust
//! use dotnames::MethodName;
//!
//! let add = MethodName::parse(
//!     "System.Collections.Generic.List<System.Int32>.Add(System.Int32 item), System.Private.CoreLib",
//! )?;
//! assert_eq!(add.to_string_with("C")?, "List<Int32>.Add(Int32)");
//! assert_eq!(add.to_string_with("M")?, "Add(System.Int32)");
//!
//! let roundtrip = add.to_string_with("U")?;
//! assert_eq!(MethodName::parse(&roundtrip)?, add);
//! # Ok::<(), dotnames::Error>(())
//! ```

mod options;
mod writer;

pub use options::{BasicFormat, MetadataNameFormat};

use crate::{MetadataName, Result};
use writer::NameWriter;

/// Renders `name` with the sealed format named by `specifier`.
///
/// # Errors
/// Returns [`crate::Error::UnknownFormat`] if `specifier` is not one of `C`, `N`, `M`,
/// `F`, `G`, `U` or empty.
pub fn format(name: &MetadataName, specifier: &str) -> Result<String> {
    let format = MetadataNameFormat::from_specifier(specifier)?;
    Ok(format_with(name, format))
}

/// Renders `name` with an explicit format.
#[must_use]
pub fn format_with(name: &MetadataName, format: &MetadataNameFormat) -> String {
    let mut writer = NameWriter::new(format);
    writer.write_name(name);
    writer.finish()
}

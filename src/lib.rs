// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # dotnames
//!
//! An immutable, strongly typed model of .NET metadata names, with a parser for the
//! signature syntax used by ECMA-335 tooling and a formatter with several renderings.
//!
//! ## Features
//!
//! - **📛 Complete name model** - Types, generic parameters, methods, properties, fields,
//!   events, parameters, assemblies, modules and namespaces
//! - **🧩 Type specifications** - Arrays, pointers, by-refs, generic instances and function
//!   pointers composed from element types
//! - **🔗 Generic binding** - Positional `` `N `` and ``` ``N ``` placeholders resolve
//!   against their declaring type and method
//! - **🔍 Wildcard matching** - Structural comparison where unnamed generic parameters and
//!   unspecified versions match anything
//! - **🔁 Lossless roundtrip** - The `U` rendering parses back into an equal name
//!
//! ## Quick Start
//!
//! Add `dotnames` to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! dotnames = "0.1"
//! ```
//!
//! ### Using the Prelude
//!
//! ```rust
//! use dotnames::prelude::*;
//!
//! let list = TypeName::parse("System.Collections.Generic.List<System.Int32>")?;
//! assert!(list.is_generic_instance());
//! assert_eq!(list.to_string_with("C")?, "List<Int32>");
//! # Ok::<(), dotnames::Error>(())
//! ```
//!
//! ### Building Names
//!
//! ```rust
//! use dotnames::{members::MethodNameBuilder, TypeName};
//!
//! let console = TypeName::create("System", "Console")?;
//! let write_line = MethodNameBuilder::new("WriteLine")
//!     .declaring_type(console)
//!     .parameter_types(vec![TypeName::create("System", "String")?])
//!     .build()?;
//! assert_eq!(write_line.full_name(), "System.Console.WriteLine(System.String)");
//! # Ok::<(), dotnames::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - **Names**: the immutable model; every name is cheap to clone and shares its components
//! - **Syntax**: scanner and recursive descent parser behind every `parse` entry point
//! - **Format**: the renderings selected by a format specifier or a [`MetadataNameFormat`]
//!
//! ## Error Handling
//!
//! All fallible operations return [`Result<T, Error>`](Result). Each `parse` has a
//! `try_parse` sibling that logs the failure at debug level and returns `None`.
//!
//! ## Thread Safety
//!
//! Names are immutable and `Send + Sync`. The canned formats are sealed and shared
//! process-wide.

#[macro_use]
pub(crate) mod error;

pub(crate) mod names;
pub(crate) mod syntax;

/// Convenient re-exports of the most commonly used types.
///
/// # Example
///
/// ```rust
/// use dotnames::prelude::*;
///
/// let field = FieldName::parse("System.String.Empty:System.String")?;
/// assert_eq!(field.name(), "Empty");
/// # Ok::<(), dotnames::Error>(())
/// ```
pub mod prelude;

/// Rendering of names as text
///
/// # Key Types
///
/// - [`format::MetadataNameFormat`] - Formatting options, sealed or mutable
/// - [`format::BasicFormat`] - The rendering a format specifier selects
///
/// # Main Functions
///
/// - [`format::format`] - Render with a format specifier
/// - [`format::format_with`] - Render with explicit options
pub mod format;

/// Member names and their building blocks
///
/// Members are declared by a type and identified by their name plus, for methods and
/// indexed properties, their parameter list.
///
/// # Examples
///
/// ```rust
/// use dotnames::members::{MemberName, MethodNameBuilder, CONSTRUCTOR_NAME};
/// use dotnames::TypeName;
///
/// let constructor = MethodNameBuilder::new(CONSTRUCTOR_NAME)
///     .declaring_type(TypeName::create("System", "Object")?)
///     .build()?;
/// assert!(constructor.is_constructor());
///
/// let member = MemberName::parse("System.String.Length:System.Int32")?;
/// assert_eq!(member.name(), "Length");
/// # Ok::<(), dotnames::Error>(())
/// ```
pub mod members {
    pub use crate::names::{
        event::EventName,
        field::FieldName,
        method::{MethodNameBuilder, CONSTRUCTOR_NAME, TYPE_INITIALIZER_NAME},
        parameter::{ParameterModifier, ParameterName, RETURN_PARAMETER_POSITION},
        property::PropertyName,
        MemberName,
    };
}

/// `dotnames` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
///
/// # Examples
///
/// ```rust
/// use dotnames::{Result, TypeName};
///
/// fn element_of(text: &str) -> Result<Option<TypeName>> {
///     Ok(TypeName::parse(text)?.element_type().cloned())
/// }
/// # assert!(element_of("System.Int32[]").unwrap().is_some());
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// `dotnames` Error type
///
/// # Examples
///
/// ```rust
/// use dotnames::{Error, MethodName};
///
/// match MethodName::parse("") {
///     Err(Error::Empty) => {}
///     other => panic!("unexpected {:?}", other),
/// }
/// ```
pub use error::Error;

/// Type names, from named definitions to composed type specifications.
///
/// See [`TypeName`] for construction, composition and binding.
pub use names::types::{
    ArrayTypeName, DefaultTypeName, FunctionPointerTypeName, GenericInstanceTypeName, TypeName,
    TypeNameKind, MAX_ARRAY_RANK,
};

/// Method names and their generic instantiations.
pub use names::method::{DefaultMethodName, GenericInstanceMethodName, MethodName, MethodNameKind};

/// Generic parameters and their declarations.
pub use names::generic::{
    BoundGenericParameterName, GenericParameterDeclaration, GenericParameterKind,
    GenericParameterName, RedirectedGenericParameterName, UnboundGenericParameterName, Variance,
};

/// Assembly identities.
pub use names::assembly::{
    AssemblyName, AssemblyNameBuilder, AssemblyVersion, ProcessorArchitecture,
};

/// Immutable byte sequences for public keys and tokens.
pub use names::blob::{Blob, PUBLIC_KEY_TOKEN_LENGTH};

pub use names::{
    array::ArrayDimension,
    list::NameList,
    namespace::{ModuleName, NamespaceName},
    symbol::{SymbolType, SymbolTypes},
    MetadataName,
};

/// Parser options, see [`ParseOptions`].
pub use syntax::ParseOptions;

pub use format::{BasicFormat, MetadataNameFormat};

//! # dotnames Prelude
//!
//! This module provides a convenient prelude for the most commonly used types from the
//! dotnames library. Import this module to get quick access to the name model, the parser
//! options and the formatter.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all dotnames operations
pub use crate::Error;

/// The result type used throughout dotnames
pub use crate::Result;

// ================================================================================================
// Type Names
// ================================================================================================

/// Type names and their specifications
pub use crate::{
    ArrayDimension, ArrayTypeName, DefaultTypeName, FunctionPointerTypeName,
    GenericInstanceTypeName, TypeName, TypeNameKind,
};

/// Generic parameters
pub use crate::{
    GenericParameterDeclaration, GenericParameterKind, GenericParameterName, Variance,
};

// ================================================================================================
// Member Names
// ================================================================================================

/// Methods and their builder
pub use crate::{members::MethodNameBuilder, MethodName, MethodNameKind};

/// Properties, fields, events and parameters
pub use crate::members::{EventName, FieldName, MemberName, ParameterName, PropertyName};

// ================================================================================================
// Scopes
// ================================================================================================

/// Assemblies, modules and namespaces
pub use crate::{AssemblyName, AssemblyNameBuilder, AssemblyVersion, ModuleName, NamespaceName};

// ================================================================================================
// Parsing and Formatting
// ================================================================================================

/// Any name, as accepted by the formatter
pub use crate::MetadataName;

/// Name kinds and kind sets
pub use crate::{SymbolType, SymbolTypes};

/// Parser options
pub use crate::ParseOptions;

/// Formatting options
pub use crate::{BasicFormat, MetadataNameFormat};

//! Signature syntax.
//!
//! This module turns signature text into names. It is split into three layers:
//!
//! - [`identifier`]: Unicode identifier classes, arity mangles and dotted-name validation
//! - [`scanner`]: the pull tokenizer of the signature grammar
//! - [`parser`]: the recursive descent parser building type and member names
//!
//! The entry points below are what the `parse` constructors of the name types call. They
//! trim the input, reject empty text with [`crate::Error::Empty`] and report every grammar
//! or model violation found while parsing as [`crate::Error::Malformed`], so a caller sees
//! one kind of parse failure regardless of which layer detected it. Only
//! [`crate::Error::RecursionLimit`] is kept distinct.
//!
//! # Grammar
//!
//! ```text
//! TypeName       := ("[" AssemblyName "]")? QualifiedName TypeSpecifiers* ("," AssemblyName)?
//! QualifiedName  := Identifier (("."|"/"|"+") Identifier | GenericMangle)*
//! TypeSpecifiers := GenericArgsOrParams? (ArraySuffix | "*" | "&")*
//! MethodName     := DeclaringTypeOpt ("." | "::") Name Mangle? Generics? Parameters? (":" Type)? AssemblyOpt
//! PropertyName   := DeclaringTypeOpt ("." | "::") Name ("[" Parameters "]")? (":" Type)? AssemblyOpt
//! FieldName      := DeclaringTypeOpt ("." | "::") Name (":" Type)? AssemblyOpt
//! ```

use bitflags::bitflags;

use crate::{
    names::{event::EventName, field::FieldName, property::PropertyName, MemberName},
    Error, MethodName, Result, TypeName,
};

pub(crate) mod identifier;
pub(crate) mod parser;
pub(crate) mod scanner;

use parser::SignatureParser;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    /// Options controlling how signatures are parsed
    pub struct ParseOptions: u8 {
        /// Read an ambiguous `<A,B>` list of bare identifiers as generic parameter
        /// declarations instead of generic arguments
        const PREFER_GENERIC_PARAMETERS = 0x01;
        /// Reject `[assembly]` and `, assembly` qualifiers
        const NO_ASSEMBLY_QUALIFIERS = 0x02;
    }
}

fn prepare(text: &str) -> Result<&str> {
    let text = text.trim();
    if text.is_empty() {
        return Err(Error::Empty);
    }
    Ok(text)
}

fn surface<T>(result: Result<T>) -> Result<T> {
    result.map_err(|error| match error {
        Error::InvalidArgument { .. } | Error::NotSupported(_) | Error::CannotBind { .. } => {
            malformed_error!("{}", error)
        }
        error => error,
    })
}

/// Parses a type signature.
pub(crate) fn parse_type(text: &str, options: ParseOptions) -> Result<TypeName> {
    surface(SignatureParser::new(prepare(text)?, options).type_signature())
}

/// Parses a method signature.
pub(crate) fn parse_method(text: &str, options: ParseOptions) -> Result<MethodName> {
    surface(SignatureParser::new(prepare(text)?, options).method_signature())
}

/// Parses a property signature.
pub(crate) fn parse_property(text: &str, options: ParseOptions) -> Result<PropertyName> {
    surface(SignatureParser::new(prepare(text)?, options).property_signature())
}

/// Parses a field signature.
pub(crate) fn parse_field(text: &str, options: ParseOptions) -> Result<FieldName> {
    surface(SignatureParser::new(prepare(text)?, options).field_signature())
}

/// Parses an event signature.
pub(crate) fn parse_event(text: &str, options: ParseOptions) -> Result<EventName> {
    surface(SignatureParser::new(prepare(text)?, options).event_signature())
}

/// Parses a member signature, picking the member kind from its shape.
pub(crate) fn parse_member(text: &str, options: ParseOptions) -> Result<MemberName> {
    surface(SignatureParser::new(prepare(text)?, options).member_signature())
}

/// Converts a parse result into an option, logging the failure.
pub(crate) fn log_failure<T>(text: &str, kind: &str, result: Result<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(error) => {
            log::debug!("Failed to parse {} '{}': {}", kind, text, error);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(parse_type("", ParseOptions::empty()), Err(Error::Empty));
        assert_eq!(parse_method("  \t", ParseOptions::empty()), Err(Error::Empty));
    }

    #[test]
    fn test_single_failure_kind() {
        for text in [
            "System.Int32&&",
            "List`1<System.Int32,System.String>",
            "TryParse(Byte&&)",
            "System.Int32[5...1]",
        ] {
            let error = parse_type(text, ParseOptions::empty())
                .err()
                .or_else(|| parse_method(text, ParseOptions::empty()).err());
            assert!(
                matches!(error, Some(Error::Malformed { .. })),
                "{} gave {:?}",
                text,
                error
            );
        }

        let unbindable = parse_method("Enumerable.Select``2(`0)", ParseOptions::empty());
        assert!(matches!(unbindable, Err(Error::Malformed { .. })));
    }

    #[test]
    fn test_log_failure() {
        assert!(log_failure("x", "type", parse_type("x", ParseOptions::empty())).is_some());
        assert!(log_failure("x&&", "type", parse_type("x&&", ParseOptions::empty())).is_none());
    }
}

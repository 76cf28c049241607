use thiserror::Error;

macro_rules! malformed_error {
    // Single string version
    ($msg:expr) => {
        crate::Error::Malformed {
            message: $msg.to_string(),
            file: file!(),
            line: line!(),
        }
    };

    // Format string with arguments version
    ($fmt:expr, $($arg:tt)*) => {
        crate::Error::Malformed {
            message: format!($fmt, $($arg)*),
            file: file!(),
            line: line!(),
        }
    };
}

macro_rules! invalid_argument {
    ($name:expr, $fmt:expr) => {
        crate::Error::InvalidArgument {
            name: $name,
            message: $fmt.to_string(),
        }
    };

    ($name:expr, $fmt:expr, $($arg:tt)*) => {
        crate::Error::InvalidArgument {
            name: $name,
            message: format!($fmt, $($arg)*),
        }
    };
}

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Every failure is local and synchronous: it is raised by the call that detected it and
/// nothing is retried or partially recovered. Parse entry points come in pairs, `parse`
/// returning this error and `try_parse` converting it into `None`.
///
/// # Error Categories
///
/// ## Input Errors
/// - [`Error::Malformed`] - Text that does not conform to the signature grammar
/// - [`Error::Empty`] - Empty or whitespace-only input
/// - [`Error::RecursionLimit`] - Nesting too deep to be a sensible signature
///
/// ## Model Errors
/// - [`Error::InvalidArgument`] - Out-of-range values, arity mismatches, illegal compositions
/// - [`Error::NotSupported`] - Operations a type or method specification cannot perform
/// - [`Error::CannotBind`] - Generic parameter position outside of the binding context
///
/// ## Formatting Errors
/// - [`Error::Sealed`] - Mutation of a frozen [`crate::MetadataNameFormat`]
/// - [`Error::UnknownFormat`] - Unrecognized format specifier
///
/// # Examples
///
/// ```rust
/// use dotnames::{Error, TypeName};
///
/// match TypeName::parse("System.Int32&&") {
///     Ok(name) => println!("parsed {}", name),
///     Err(Error::Malformed { message, .. }) => eprintln!("malformed: {}", message),
///     Err(e) => eprintln!("rejected: {}", e),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The text could not be parsed.
    ///
    /// The error includes the source location where the malformation was detected
    /// for debugging purposes.
    ///
    /// # Fields
    ///
    /// * `message` - Detailed description of what was malformed
    /// * `file` - Source file where the error was detected
    /// * `line` - Source line where the error was detected
    #[error("Malformed - {file}:{line}: {message}")]
    Malformed {
        /// The message to be printed for the Malformed error
        message: String,
        /// The source file in which this error occured
        file: &'static str,
        /// The source line in which this error occured
        line: u32,
    },

    /// Provided input was empty.
    #[error("Provided input was empty")]
    Empty,

    /// An argument was outside of its valid range.
    ///
    /// Raised for negative or inverted array bounds, generic argument counts that do not
    /// agree with the declared parameter count, and illegal type compositions such as a
    /// by-reference of a by-reference.
    #[error("Invalid argument '{name}': {message}")]
    InvalidArgument {
        /// Name of the offending argument
        name: &'static str,
        /// What was wrong with it
        message: String,
    },

    /// The operation is not supported for this kind of name.
    ///
    /// Type and method specifications (arrays, pointers, generic instances, ...) derive
    /// their name and declaring type from their element, so renaming them directly fails.
    #[error("Operation not supported: {0}")]
    NotSupported(String),

    /// A generic parameter placeholder refers to a position the binding context does not declare.
    #[error("Cannot bind generic parameter at position {position}, context declares {count}")]
    CannotBind {
        /// Position of the placeholder
        position: usize,
        /// Number of generic parameters in the binding context
        count: usize,
    },

    /// Nesting exceeded the maximum depth while parsing.
    ///
    /// The associated value is the limit that was hit.
    #[error("Reached the maximum recursion level allowed - {0}")]
    RecursionLimit(usize),

    /// Attempted to change a sealed format.
    #[error("The format is sealed and cannot be modified")]
    Sealed,

    /// The format specifier is not one of `C`, `N`, `M`, `F`, `G`, `U` or empty.
    #[error("Unknown format specifier '{0}'")]
    UnknownFormat(String),
}

//! Scanner for simple dotted identifiers.
//!
//! This is the lightweight companion of [`crate::syntax::scanner::Scanner`]. It recognizes
//! Unicode identifiers (XID start/continue classes, plus `_`), a small punctuation set and
//! the backtick arity mangles that flat type and method names carry. It is used wherever a
//! plain name is validated or split: namespaces, type and method names given to the model
//! constructors, and the simple name of an assembly.

use crate::Result;

/// Tokens produced by [`IdentifierScanner`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum IdentifierToken<'a> {
    /// A run of identifier characters
    Identifier(&'a str),
    /// `` `N `` arity marker
    Mangle(usize),
    /// ``` ``N ``` arity marker
    MethodMangle(usize),
    /// `` ` `` without a following number
    Backtick,
    At,
    Ampersand,
    Comma,
    OpenParen,
    CloseParen,
    OpenBracket,
    CloseBracket,
    LessThan,
    GreaterThan,
    OpenBrace,
    CloseBrace,
    Star,
    Dot,
    Plus,
    Slash,
}

/// Returns `true` if `c` may start an identifier.
pub(crate) fn is_identifier_start(c: char) -> bool {
    c == '_' || unicode_ident::is_xid_start(c)
}

/// Returns `true` if `c` may continue an identifier.
pub(crate) fn is_identifier_part(c: char) -> bool {
    unicode_ident::is_xid_continue(c)
}

/// Pull scanner over a simple name.
pub(crate) struct IdentifierScanner<'a> {
    text: &'a str,
    position: usize,
    failed: bool,
}

impl<'a> IdentifierScanner<'a> {
    pub(crate) fn new(text: &'a str) -> Self {
        IdentifierScanner {
            text,
            position: 0,
            failed: false,
        }
    }

    fn rest(&self) -> &'a str {
        &self.text[self.position..]
    }

    fn scan_number(&mut self) -> Option<Result<usize>> {
        let digits = self
            .rest()
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(self.rest().len());
        if digits == 0 {
            return None;
        }

        let number = &self.rest()[..digits];
        self.position += digits;
        Some(
            number
                .parse::<usize>()
                .map_err(|_| malformed_error!("Arity '{}' is out of range", number)),
        )
    }

    fn scan(&mut self) -> Option<Result<IdentifierToken<'a>>> {
        let c = self.rest().chars().next()?;

        if is_identifier_start(c) {
            let length = self
                .rest()
                .char_indices()
                .skip(1)
                .find(|(_, c)| !is_identifier_part(*c))
                .map_or(self.rest().len(), |(index, _)| index);
            let identifier = &self.rest()[..length];
            self.position += length;
            return Some(Ok(IdentifierToken::Identifier(identifier)));
        }

        self.position += c.len_utf8();
        let token = match c {
            '`' => {
                let method = self.rest().starts_with('`');
                if method {
                    self.position += 1;
                }
                return match self.scan_number() {
                    Some(Ok(arity)) if method => Some(Ok(IdentifierToken::MethodMangle(arity))),
                    Some(Ok(arity)) => Some(Ok(IdentifierToken::Mangle(arity))),
                    Some(Err(error)) => Some(Err(error)),
                    None if method => Some(Err(malformed_error!(
                        "Expected arity after '``' at offset {}",
                        self.position
                    ))),
                    None => Some(Ok(IdentifierToken::Backtick)),
                };
            }
            '@' => IdentifierToken::At,
            '&' => IdentifierToken::Ampersand,
            ',' => IdentifierToken::Comma,
            '(' => IdentifierToken::OpenParen,
            ')' => IdentifierToken::CloseParen,
            '[' => IdentifierToken::OpenBracket,
            ']' => IdentifierToken::CloseBracket,
            '<' => IdentifierToken::LessThan,
            '>' => IdentifierToken::GreaterThan,
            '{' => IdentifierToken::OpenBrace,
            '}' => IdentifierToken::CloseBrace,
            '*' => IdentifierToken::Star,
            '.' => IdentifierToken::Dot,
            '+' => IdentifierToken::Plus,
            '/' => IdentifierToken::Slash,
            other => {
                return Some(Err(malformed_error!(
                    "Unexpected character '{}' at offset {}",
                    other,
                    self.position - other.len_utf8()
                )))
            }
        };

        Some(Ok(token))
    }
}

impl<'a> Iterator for IdentifierScanner<'a> {
    type Item = Result<IdentifierToken<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        let token = self.scan();
        if matches!(token, Some(Err(_))) {
            self.failed = true;
        }
        token
    }
}

/// Returns `true` if `text` is exactly one identifier.
pub(crate) fn is_identifier(text: &str) -> bool {
    let mut scanner = IdentifierScanner::new(text);
    matches!(scanner.next(), Some(Ok(IdentifierToken::Identifier(_)))) && scanner.next().is_none()
}

/// Returns `true` if `text` is a dot separated sequence of identifiers.
pub(crate) fn is_dotted_identifier(text: &str) -> bool {
    let mut expect_identifier = true;
    for token in IdentifierScanner::new(text) {
        match (expect_identifier, token) {
            (true, Ok(IdentifierToken::Identifier(_))) | (false, Ok(IdentifierToken::Dot)) => {
                expect_identifier = !expect_identifier;
            }
            _ => return false,
        }
    }
    !expect_identifier
}

/// Splits a flat name into its base name and its arity mangle.
///
/// `List`1` yields `("List", Some(1))`, `Select``2` yields `("Select", Some(2))`. Names
/// that are not plain identifiers, such as `.ctor` or compiler generated names, are
/// returned unchanged without an arity.
pub(crate) fn split_mangle(name: &str) -> (&str, Option<usize>) {
    let Some(index) = name.rfind('`') else {
        return (name, None);
    };

    let base = name[..index].trim_end_matches('`');
    let mut scanner = IdentifierScanner::new(&name[base.len()..]);
    match (scanner.next(), scanner.next()) {
        (Some(Ok(IdentifierToken::Mangle(arity) | IdentifierToken::MethodMangle(arity))), None)
            if !base.is_empty() =>
        {
            (base, Some(arity))
        }
        _ => (name, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(text: &str) -> Vec<IdentifierToken<'_>> {
        IdentifierScanner::new(text)
            .collect::<Result<Vec<_>>>()
            .unwrap()
    }

    #[test]
    fn test_scan_dotted_name() {
        assert_eq!(
            tokens("System.Collections"),
            vec![
                IdentifierToken::Identifier("System"),
                IdentifierToken::Dot,
                IdentifierToken::Identifier("Collections"),
            ]
        );
    }

    #[test]
    fn test_scan_mangles() {
        assert_eq!(
            tokens("List`1"),
            vec![IdentifierToken::Identifier("List"), IdentifierToken::Mangle(1)]
        );
        assert_eq!(
            tokens("Select``2"),
            vec![
                IdentifierToken::Identifier("Select"),
                IdentifierToken::MethodMangle(2)
            ]
        );
        assert_eq!(tokens("`"), vec![IdentifierToken::Backtick]);
    }

    #[test]
    fn test_scan_unicode() {
        assert_eq!(tokens("Größe"), vec![IdentifierToken::Identifier("Größe")]);
        assert_eq!(tokens("_x1"), vec![IdentifierToken::Identifier("_x1")]);
    }

    #[test]
    fn test_scan_errors() {
        let mut scanner = IdentifierScanner::new("a``");
        assert!(matches!(scanner.next(), Some(Ok(_))));
        assert!(matches!(scanner.next(), Some(Err(_))));
        assert!(scanner.next().is_none());

        assert!(IdentifierScanner::new("a#b").any(|t| t.is_err()));
    }

    #[test]
    fn test_identifier_predicates() {
        assert!(is_identifier("Int32"));
        assert!(!is_identifier("1abc"));
        assert!(!is_identifier("System.IO"));
        assert!(is_dotted_identifier("System.IO"));
        assert!(!is_dotted_identifier("System..IO"));
        assert!(!is_dotted_identifier("System."));
        assert!(!is_dotted_identifier(""));
    }

    #[test]
    fn test_split_mangle() {
        assert_eq!(split_mangle("List`1"), ("List", Some(1)));
        assert_eq!(split_mangle("Select``2"), ("Select", Some(2)));
        assert_eq!(split_mangle("Int32"), ("Int32", None));
        assert_eq!(split_mangle(".ctor"), (".ctor", None));
        assert_eq!(split_mangle("`1"), ("`1", None));
        assert_eq!(split_mangle("A`x"), ("A`x", None));
    }
}

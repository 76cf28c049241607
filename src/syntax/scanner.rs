//! Scanner for type and member signatures.
//!
//! The scanner is a pull tokenizer with a single push-back slot. Runs of whitespace
//! collapse into one [`Token::Space`], which the parser uses where whitespace is
//! significant (`Type name` parameters, variance keywords). The end of the text is
//! reported exactly once as [`Token::EndOfInput`]; reading past it is an error.
//!
//! Besides tokens the parser can read raw text ([`Scanner::take_until`],
//! [`Scanner::take_rest`]), which is how embedded assembly display names are extracted
//! without tokenizing their `Key=Value` syntax.

use std::fmt;

use crate::{syntax::identifier::is_identifier_part, Result};

/// Tokens of the signature grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Token<'a> {
    Comma,
    Dot,
    OpenParen,
    CloseParen,
    OpenBracket,
    CloseBracket,
    LessThan,
    GreaterThan,
    Colon,
    DoubleColon,
    Ampersand,
    Star,
    Plus,
    Minus,
    Equals,
    Bang,
    DoubleBang,
    Slash,
    /// One or more whitespace characters
    Space,
    /// A run of identifier characters, or the literal `.ctor` / `.cctor`
    Identifier(&'a str),
    /// `` `N ``
    TypeGenericPosition(usize),
    /// ``` ``N ```
    MethodGenericPosition(usize),
    ModOpt,
    ModReq,
    EndOfInput,
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Comma => f.write_str(","),
            Token::Dot => f.write_str("."),
            Token::OpenParen => f.write_str("("),
            Token::CloseParen => f.write_str(")"),
            Token::OpenBracket => f.write_str("["),
            Token::CloseBracket => f.write_str("]"),
            Token::LessThan => f.write_str("<"),
            Token::GreaterThan => f.write_str(">"),
            Token::Colon => f.write_str(":"),
            Token::DoubleColon => f.write_str("::"),
            Token::Ampersand => f.write_str("&"),
            Token::Star => f.write_str("*"),
            Token::Plus => f.write_str("+"),
            Token::Minus => f.write_str("-"),
            Token::Equals => f.write_str("="),
            Token::Bang => f.write_str("!"),
            Token::DoubleBang => f.write_str("!!"),
            Token::Slash => f.write_str("/"),
            Token::Space => f.write_str("whitespace"),
            Token::Identifier(identifier) => write!(f, "'{}'", identifier),
            Token::TypeGenericPosition(position) => write!(f, "`{}", position),
            Token::MethodGenericPosition(position) => write!(f, "``{}", position),
            Token::ModOpt => f.write_str("modopt"),
            Token::ModReq => f.write_str("modreq"),
            Token::EndOfInput => f.write_str("end of input"),
        }
    }
}

const CONSTRUCTOR_LITERALS: [&str; 2] = [".ctor", ".cctor"];

fn is_identifier_char(c: char) -> bool {
    is_identifier_part(c) || c == '_'
}

/// Returns the constructor literal starting at byte `offset`, if any.
///
/// `.ctor` and `.cctor` only count as names where an identifier cannot continue: at the
/// start of the text or after punctuation, as in `Object..ctor` or `Object::.ctor`.
pub(crate) fn constructor_literal_at(text: &str, offset: usize) -> Option<&'static str> {
    if text[..offset].chars().next_back().is_some_and(is_identifier_char) {
        return None;
    }

    let rest = &text[offset..];
    CONSTRUCTOR_LITERALS.into_iter().find(|literal| {
        rest.strip_prefix(literal)
            .is_some_and(|after| !after.starts_with(is_identifier_char))
    })
}

/// Pull tokenizer over a signature.
pub(crate) struct Scanner<'a> {
    text: &'a str,
    position: usize,
    pushed_back: Option<(Token<'a>, usize)>,
    finished: bool,
}

impl<'a> Scanner<'a> {
    pub(crate) fn new(text: &'a str) -> Self {
        Self::with_offset(text, 0)
    }

    /// Starts scanning at byte `offset` of `text`; the text before it still counts as
    /// context for `.ctor` recognition.
    pub(crate) fn with_offset(text: &'a str, offset: usize) -> Self {
        Scanner {
            text,
            position: offset,
            pushed_back: None,
            finished: false,
        }
    }

    /// Byte offset of the next unread character.
    pub(crate) fn offset(&self) -> usize {
        match self.pushed_back {
            Some((_, start)) => start,
            None => self.position,
        }
    }

    /// The text that has not been consumed yet.
    pub(crate) fn rest(&self) -> &'a str {
        &self.text[self.offset()..]
    }

    /// Returns `token` to the scanner; the next call to [`Scanner::next`] yields it again.
    ///
    /// # Panics
    /// Panics if a token is already pushed back.
    pub(crate) fn push_back(&mut self, token: Token<'a>, start: usize) {
        assert!(
            self.pushed_back.is_none(),
            "scanner push-back slot is occupied"
        );
        self.pushed_back = Some((token, start));
    }

    /// Reads the next token together with its start offset.
    pub(crate) fn next_with_offset(&mut self) -> Result<(Token<'a>, usize)> {
        if let Some(pushed) = self.pushed_back.take() {
            return Ok(pushed);
        }

        let start = self.position;
        let token = self.scan()?;
        Ok((token, start))
    }

    /// Reads raw text up to the next `stop` character, consuming the stop character.
    pub(crate) fn take_until(&mut self, stop: char) -> Result<&'a str> {
        self.rewind();
        let rest = &self.text[self.position..];
        match rest.find(stop) {
            Some(index) => {
                self.position += index + stop.len_utf8();
                Ok(&rest[..index])
            }
            None => Err(malformed_error!(
                "Expected '{}' after offset {} in '{}'",
                stop,
                self.position,
                self.text
            )),
        }
    }

    /// Reads all remaining raw text.
    pub(crate) fn take_rest(&mut self) -> &'a str {
        self.rewind();
        let rest = &self.text[self.position..];
        self.position = self.text.len();
        rest
    }

    fn rewind(&mut self) {
        if let Some((token, start)) = self.pushed_back.take() {
            self.position = start;
            if token == Token::EndOfInput {
                self.finished = false;
            }
        }
    }

    fn scan(&mut self) -> Result<Token<'a>> {
        let rest = &self.text[self.position..];
        let Some(c) = rest.chars().next() else {
            if self.finished {
                return Err(malformed_error!("Read past the end of '{}'", self.text));
            }
            self.finished = true;
            return Ok(Token::EndOfInput);
        };

        if c.is_whitespace() {
            let length = rest
                .find(|c: char| !c.is_whitespace())
                .unwrap_or(rest.len());
            self.position += length;
            return Ok(Token::Space);
        }

        if is_identifier_char(c) {
            let length = rest
                .find(|c: char| !is_identifier_char(c))
                .unwrap_or(rest.len());
            let identifier = &rest[..length];
            self.position += length;
            return Ok(match identifier {
                "modopt" => Token::ModOpt,
                "modreq" => Token::ModReq,
                _ => Token::Identifier(identifier),
            });
        }

        if c == '.' {
            if let Some(literal) = constructor_literal_at(self.text, self.position) {
                self.position += literal.len();
                return Ok(Token::Identifier(&rest[..literal.len()]));
            }
        }

        if c == '`' {
            return self.scan_generic_position(rest);
        }

        let (token, length) = match c {
            ',' => (Token::Comma, 1),
            '.' => (Token::Dot, 1),
            '(' => (Token::OpenParen, 1),
            ')' => (Token::CloseParen, 1),
            '[' => (Token::OpenBracket, 1),
            ']' => (Token::CloseBracket, 1),
            '<' => (Token::LessThan, 1),
            '>' => (Token::GreaterThan, 1),
            ':' if rest.starts_with("::") => (Token::DoubleColon, 2),
            ':' => (Token::Colon, 1),
            '&' => (Token::Ampersand, 1),
            '*' => (Token::Star, 1),
            '+' => (Token::Plus, 1),
            '-' => (Token::Minus, 1),
            '=' => (Token::Equals, 1),
            '!' if rest.starts_with("!!") => (Token::DoubleBang, 2),
            '!' => (Token::Bang, 1),
            '/' => (Token::Slash, 1),
            other => {
                return Err(malformed_error!(
                    "Unexpected character '{}' at offset {} in '{}'",
                    other,
                    self.position,
                    self.text
                ))
            }
        };

        self.position += length;
        Ok(token)
    }

    fn scan_generic_position(&mut self, rest: &'a str) -> Result<Token<'a>> {
        let method = rest.starts_with("``");
        let ticks = if method { 2 } else { 1 };
        let digits = rest[ticks..]
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len() - ticks);
        if digits == 0 {
            return Err(malformed_error!(
                "Expected a generic position after '{}' at offset {} in '{}'",
                &rest[..ticks],
                self.position,
                self.text
            ));
        }

        let number = &rest[ticks..ticks + digits];
        let position = number.parse::<usize>().map_err(|_| {
            malformed_error!("Generic position '{}' is out of range", number)
        })?;
        self.position += ticks + digits;

        Ok(if method {
            Token::MethodGenericPosition(position)
        } else {
            Token::TypeGenericPosition(position)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(text: &str) -> Vec<Token<'_>> {
        let mut scanner = Scanner::new(text);
        let mut tokens = Vec::new();
        loop {
            let (token, _) = scanner.next_with_offset().unwrap();
            tokens.push(token);
            if token == Token::EndOfInput {
                return tokens;
            }
        }
    }

    #[test]
    fn test_type_tokens() {
        assert_eq!(
            tokens("System.List`1<  T>&"),
            vec![
                Token::Identifier("System"),
                Token::Dot,
                Token::Identifier("List"),
                Token::TypeGenericPosition(1),
                Token::LessThan,
                Token::Space,
                Token::Identifier("T"),
                Token::GreaterThan,
                Token::Ampersand,
                Token::EndOfInput,
            ]
        );
    }

    #[test]
    fn test_punctuation() {
        assert_eq!(
            tokens("::!!0!1-=/:"),
            vec![
                Token::DoubleColon,
                Token::DoubleBang,
                Token::Identifier("0"),
                Token::Bang,
                Token::Identifier("1"),
                Token::Minus,
                Token::Equals,
                Token::Slash,
                Token::Colon,
                Token::EndOfInput,
            ]
        );
    }

    #[test]
    fn test_constructor_literals() {
        assert_eq!(
            tokens("Object..ctor"),
            vec![
                Token::Identifier("Object"),
                Token::Dot,
                Token::Identifier(".ctor"),
                Token::EndOfInput,
            ]
        );
        assert_eq!(
            tokens("T::.cctor()"),
            vec![
                Token::Identifier("T"),
                Token::DoubleColon,
                Token::Identifier(".cctor"),
                Token::OpenParen,
                Token::CloseParen,
                Token::EndOfInput,
            ]
        );
        assert_eq!(
            tokens("A.ctor"),
            vec![
                Token::Identifier("A"),
                Token::Dot,
                Token::Identifier("ctor"),
                Token::EndOfInput,
            ]
        );
    }

    #[test]
    fn test_generic_positions() {
        assert_eq!(
            tokens("``12 `3"),
            vec![
                Token::MethodGenericPosition(12),
                Token::Space,
                Token::TypeGenericPosition(3),
                Token::EndOfInput,
            ]
        );
        assert!(Scanner::new("`x").next_with_offset().is_err());
        assert!(Scanner::new("``").next_with_offset().is_err());
    }

    #[test]
    fn test_modifiers_and_spaces() {
        assert_eq!(
            tokens("a \t\r\n modreq modopt"),
            vec![
                Token::Identifier("a"),
                Token::Space,
                Token::ModReq,
                Token::Space,
                Token::ModOpt,
                Token::EndOfInput,
            ]
        );
    }

    #[test]
    fn test_end_of_input_once() {
        let mut scanner = Scanner::new("");
        assert_eq!(scanner.next_with_offset().unwrap().0, Token::EndOfInput);
        assert!(scanner.next_with_offset().is_err());
    }

    #[test]
    fn test_push_back_and_raw_text() {
        let mut scanner = Scanner::new("[mscorlib, Version=4.0.0.0]Rest");
        let (token, start) = scanner.next_with_offset().unwrap();
        assert_eq!(token, Token::OpenBracket);
        assert_eq!(scanner.take_until(']').unwrap(), "mscorlib, Version=4.0.0.0");

        let (token, start2) = scanner.next_with_offset().unwrap();
        assert_eq!(token, Token::Identifier("Rest"));
        scanner.push_back(token, start2);
        assert_eq!(scanner.offset(), start2);
        assert_eq!(scanner.take_rest(), "Rest");
        assert_eq!(scanner.next_with_offset().unwrap().0, Token::EndOfInput);
        assert_eq!(start, 0);
    }

    #[test]
    #[should_panic]
    fn test_double_push_back_panics() {
        let mut scanner = Scanner::new("a b");
        let (token, start) = scanner.next_with_offset().unwrap();
        scanner.push_back(token, start);
        scanner.push_back(token, start);
    }

    #[test]
    fn test_unexpected_character() {
        assert!(Scanner::new("#").next_with_offset().is_err());
    }
}

//! Recursive descent parser for type and member signatures.
//!
//! One [`SignatureParser`] parses one signature. Type signatures are parsed directly from
//! the token stream; member signatures are first split into their declaring type text and
//! the member part ([`split_member`]), because the boundary between the two can only be
//! found by looking at the whole head of the signature.
//!
//! # Generic lists
//!
//! A `<...>` list after a name either declares generic parameters (`Converter<TIn,TOut>`
//! naming the definition) or supplies generic arguments (`List<System.Int32>`). The list
//! is parsed into raw entries first and classified afterwards:
//!
//! - it *must* declare parameters when every entry is empty or variance-marked,
//! - it *could* declare parameters when every entry is empty or a bare identifier.
//!
//! It declares parameters when it must, or when it could and either the name carries an
//! arity mangle or the caller set [`ParseOptions::PREFER_GENERIC_PARAMETERS`]. Otherwise
//! it is an argument list and instantiates an anonymous definition of the same arity.

use crate::{
    names::{
        array::ArrayDimension,
        event::EventName,
        field::FieldName,
        generic::{GenericParameterDeclaration, GenericParameterKind, Variance},
        method::{MethodName, MethodParts},
        namespace::NamespaceName,
        parameter::{ParameterModifier, ParameterName},
        property::PropertyName,
        types::TypeName,
        MemberName,
    },
    syntax::{
        scanner::{constructor_literal_at, Scanner, Token},
        ParseOptions,
    },
    AssemblyName, Error, Result,
};

/// Maximum nesting of type signatures inside one another.
pub(crate) const MAX_RECURSION_DEPTH: usize = 64;

/// Maximum number of array, pointer and by-reference suffixes in one signature.
pub(crate) const MAX_TYPE_SPECIFIERS: usize = 256;

/// One raw entry of a `<...>` list.
struct GenericListEntry {
    variance: Option<Variance>,
    entry_type: Option<TypeName>,
}

impl GenericListEntry {
    fn is_bare(&self) -> bool {
        match &self.entry_type {
            None => true,
            Some(entry_type) => entry_type
                .as_named()
                .is_some_and(|named| named.is_simple_reference()),
        }
    }
}

struct GenericList {
    entries: Vec<GenericListEntry>,
}

impl GenericList {
    fn must_be_parameters(&self) -> bool {
        self.entries
            .iter()
            .all(|entry| entry.entry_type.is_none() || entry.variance.is_some())
    }

    fn could_be_parameters(&self) -> bool {
        self.entries.iter().all(GenericListEntry::is_bare)
    }

    fn declares_parameters(&self, mangle: Option<usize>, options: ParseOptions) -> bool {
        self.must_be_parameters()
            || (self.could_be_parameters()
                && (mangle.is_some_and(|arity| arity > 0)
                    || options.contains(ParseOptions::PREFER_GENERIC_PARAMETERS)))
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn into_declarations(self) -> Result<Vec<GenericParameterDeclaration>> {
        self.entries
            .into_iter()
            .map(|entry| {
                let declaration = match &entry.entry_type {
                    None => GenericParameterDeclaration::anonymous(),
                    Some(entry_type) => match entry_type.as_named() {
                        Some(named) if named.is_simple_reference() => {
                            GenericParameterDeclaration::named(named.simple_name())
                        }
                        _ => {
                            return Err(malformed_error!(
                                "'{}' cannot name a generic parameter",
                                entry_type
                            ))
                        }
                    },
                };
                Ok(match entry.variance {
                    Some(variance) => declaration.with_variance(variance),
                    None => declaration,
                })
            })
            .collect()
    }

    fn into_arguments(self) -> Result<Vec<TypeName>> {
        self.entries
            .into_iter()
            .map(|entry| match (entry.variance, entry.entry_type) {
                (None, Some(argument)) => Ok(argument),
                (Some(_), Some(argument)) => Err(malformed_error!(
                    "Variance is not allowed on generic argument '{}'",
                    argument
                )),
                (_, None) => Err(malformed_error!("Missing generic argument")),
            })
            .collect()
    }
}

/// A name segment of a qualified type name.
struct Segment<'a> {
    name: &'a str,
    mangle: Option<usize>,
    list: Option<GenericList>,
    separator: Option<Separator>,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Separator {
    Dot,
    Nested,
}

/// Generic parameter declarations of a name, plus arguments when its list instantiated it.
type ResolvedGenericList = (Vec<GenericParameterDeclaration>, Option<Vec<TypeName>>);

/// Head of a member signature, split into declaring type text and member name.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct MemberSplit<'a> {
    /// Text of the declaring type, if any
    pub(crate) declaring_type: Option<&'a str>,
    /// Byte offset of the member name
    pub(crate) name_offset: usize,
    /// The character that ended the head: `(`, `[`, `,` or `:`
    pub(crate) terminator: Option<char>,
}

/// Returns the byte index of the `]` closing the `[` at `open`.
fn closing_bracket(bytes: &[u8], open: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (index, byte) in bytes.iter().enumerate().skip(open) {
        match byte {
            b'[' => depth += 1,
            b']' => {
                depth -= 1;
                if depth == 0 {
                    return Some(index);
                }
            }
            _ => {}
        }
    }
    None
}

/// Splits the head of a member signature at its last top-level `.` or at `::`.
///
/// The head ends at the first top-level `(`, `[`, `,` or single `:`. A bracket group that
/// is followed by more of the type (`System.Int32[].Get`) belongs to the declaring type.
/// Dots after `::` are part of the member name, as in
/// `N.C::System.IDisposable.Dispose`.
/// `.ctor` and `.cctor` are names, so `System.Object..ctor` splits before the second dot.
///
/// # Errors
/// Returns [`crate::Error::Malformed`] for an unterminated leading assembly qualifier, an
/// empty declaring type, or an assembly qualifier without declaring type.
pub(crate) fn split_member(text: &str) -> Result<MemberSplit<'_>> {
    let bytes = text.as_bytes();
    let mut start = 0;
    if text.starts_with('[') {
        match text.find(']') {
            Some(close) => start = close + 1,
            None => return Err(malformed_error!("Unterminated assembly in '{}'", text)),
        }
    }

    let mut depth = 0usize;
    let mut separator: Option<(usize, usize)> = None;
    let mut qualified = false;
    let mut terminator = None;
    let mut index = start;
    while index < bytes.len() {
        match bytes[index] {
            b'<' => depth += 1,
            b'>' => depth = depth.saturating_sub(1),
            b'[' if depth == 0 => {
                let continues_type = closing_bracket(bytes, index).and_then(|close| {
                    let after = &text[close + 1..];
                    (after.starts_with(['.', '[', '*', '&']) || after.starts_with("::"))
                        .then_some(close)
                });
                match continues_type {
                    Some(close) => {
                        index = close + 1;
                        continue;
                    }
                    None => {
                        terminator = Some('[');
                        break;
                    }
                }
            }
            b'(' | b',' if depth == 0 => {
                terminator = Some(char::from(bytes[index]));
                break;
            }
            b':' if depth == 0 => {
                if bytes.get(index + 1) == Some(&b':') {
                    separator = Some((index, index + 2));
                    qualified = true;
                    index += 2;
                    continue;
                }
                terminator = Some(':');
                break;
            }
            b'.' if depth == 0 => {
                if let Some(literal) = constructor_literal_at(text, index) {
                    index += literal.len();
                    continue;
                }
                if !qualified {
                    separator = Some((index, index + 1));
                }
            }
            _ => {}
        }
        index += 1;
    }

    match separator {
        Some((split, name_offset)) => {
            let declaring_type = &text[..split];
            if declaring_type[start..].trim().is_empty() {
                return Err(malformed_error!("Empty declaring type in '{}'", text));
            }
            Ok(MemberSplit {
                declaring_type: Some(declaring_type),
                name_offset,
                terminator,
            })
        }
        None if start > 0 => Err(malformed_error!(
            "Assembly qualifier without declaring type in '{}'",
            text
        )),
        None => Ok(MemberSplit {
            declaring_type: None,
            name_offset: 0,
            terminator,
        }),
    }
}

/// Parser over a single signature.
pub(crate) struct SignatureParser<'a> {
    text: &'a str,
    scanner: Scanner<'a>,
    options: ParseOptions,
    depth: usize,
    specifiers: usize,
    last_start: usize,
}

impl<'a> SignatureParser<'a> {
    pub(crate) fn new(text: &'a str, options: ParseOptions) -> Self {
        SignatureParser {
            text,
            scanner: Scanner::new(text),
            options,
            depth: 0,
            specifiers: 0,
            last_start: 0,
        }
    }

    fn next(&mut self) -> Result<Token<'a>> {
        let (token, start) = self.scanner.next_with_offset()?;
        self.last_start = start;
        Ok(token)
    }

    fn push_back(&mut self, token: Token<'a>) {
        self.scanner.push_back(token, self.last_start);
    }

    fn peek(&mut self) -> Result<Token<'a>> {
        let token = self.next()?;
        self.push_back(token);
        Ok(token)
    }

    fn skip_space(&mut self) -> Result<()> {
        let token = self.next()?;
        if token != Token::Space {
            self.push_back(token);
        }
        Ok(())
    }

    fn unexpected(&self, found: Token<'_>, expected: &str) -> Error {
        malformed_error!(
            "Expected {} but found {} at offset {} in '{}'",
            expected,
            found,
            self.last_start,
            self.text
        )
    }

    fn expect(&mut self, expected: Token<'_>) -> Result<()> {
        let token = self.next()?;
        if token == expected {
            Ok(())
        } else {
            Err(self.unexpected(token, &expected.to_string()))
        }
    }

    fn expect_end(&mut self) -> Result<()> {
        self.skip_space()?;
        self.expect(Token::EndOfInput)
    }

    fn nested<T>(&mut self, parse: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        if self.depth >= MAX_RECURSION_DEPTH {
            return Err(Error::RecursionLimit(MAX_RECURSION_DEPTH));
        }
        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }

    /// Parses the whole text as a type signature.
    pub(crate) fn type_signature(mut self) -> Result<TypeName> {
        self.skip_space()?;
        let leading = self.leading_assembly()?;
        let has_leading = leading.is_some();
        let result = self.type_body(leading)?;

        self.skip_space()?;
        match self.next()? {
            Token::EndOfInput => Ok(result),
            Token::Comma => {
                let assembly = self.trailing_assembly(has_leading)?;
                let result = result.with_assembly(Some(assembly))?;
                self.expect_end()?;
                Ok(result)
            }
            other => Err(self.unexpected(other, "end of input")),
        }
    }

    /// Parses the whole text as a method signature.
    pub(crate) fn method_signature(mut self) -> Result<MethodName> {
        let split = split_member(self.text)?;
        let declaring_type = self.declaring_type(&split)?;
        self.scanner = Scanner::with_offset(self.text, split.name_offset);
        self.method_body(declaring_type)
    }

    /// Parses the whole text as a property signature.
    pub(crate) fn property_signature(mut self) -> Result<PropertyName> {
        let split = split_member(self.text)?;
        let declaring_type = self.declaring_type(&split)?;
        self.scanner = Scanner::with_offset(self.text, split.name_offset);
        self.property_body(declaring_type)
    }

    /// Parses the whole text as a field signature.
    pub(crate) fn field_signature(mut self) -> Result<FieldName> {
        let split = split_member(self.text)?;
        let declaring_type = self.declaring_type(&split)?;
        self.scanner = Scanner::with_offset(self.text, split.name_offset);

        let name = self.member_name()?;
        let field_type = self.member_type()?;
        let declaring_type = self.member_assembly(declaring_type)?;
        FieldName::new(declaring_type, name, field_type)
    }

    /// Parses the whole text as an event signature.
    pub(crate) fn event_signature(mut self) -> Result<EventName> {
        let split = split_member(self.text)?;
        let declaring_type = self.declaring_type(&split)?;
        self.scanner = Scanner::with_offset(self.text, split.name_offset);

        let name = self.member_name()?;
        let event_type = self.member_type()?;
        let declaring_type = self.member_assembly(declaring_type)?;
        EventName::new(declaring_type, name, event_type)
    }

    /// Parses a member signature, choosing the member kind from the head terminator: an
    /// index list makes a property, anything else a method.
    pub(crate) fn member_signature(mut self) -> Result<MemberName> {
        let split = split_member(self.text)?;
        let declaring_type = self.declaring_type(&split)?;
        self.scanner = Scanner::with_offset(self.text, split.name_offset);

        match split.terminator {
            Some('[') => Ok(MemberName::Property(self.property_body(declaring_type)?)),
            _ => Ok(MemberName::Method(self.method_body(declaring_type)?)),
        }
    }

    fn declaring_type(&self, split: &MemberSplit<'a>) -> Result<Option<TypeName>> {
        let Some(text) = split.declaring_type else {
            return Ok(None);
        };
        let declaring_type = SignatureParser::new(text, self.options).type_signature()?;
        if declaring_type.is_pointer()
            || declaring_type.is_by_reference()
            || declaring_type.is_generic_parameter()
            || declaring_type.is_function_pointer()
        {
            return Err(malformed_error!(
                "'{}' cannot declare members",
                declaring_type
            ));
        }
        Ok(Some(declaring_type))
    }

    fn leading_assembly(&mut self) -> Result<Option<AssemblyName>> {
        let token = self.next()?;
        if token != Token::OpenBracket {
            self.push_back(token);
            return Ok(None);
        }
        if self.options.contains(ParseOptions::NO_ASSEMBLY_QUALIFIERS) {
            return Err(malformed_error!(
                "Assembly qualifiers are not allowed in '{}'",
                self.text
            ));
        }
        let display_name = self.scanner.take_until(']')?;
        AssemblyName::parse(display_name.trim())
            .map(Some)
            .map_err(|error| match error {
                Error::Empty => malformed_error!("Missing assembly name in '{}'", self.text),
                error => error,
            })
    }

    fn trailing_assembly(&mut self, has_leading: bool) -> Result<AssemblyName> {
        if self.options.contains(ParseOptions::NO_ASSEMBLY_QUALIFIERS) {
            return Err(malformed_error!(
                "Assembly qualifiers are not allowed in '{}'",
                self.text
            ));
        }
        if has_leading {
            return Err(malformed_error!(
                "Both a leading and a trailing assembly qualifier in '{}'",
                self.text
            ));
        }
        AssemblyName::parse(self.scanner.take_rest().trim()).map_err(|error| match error {
            Error::Empty => malformed_error!("Missing assembly name in '{}'", self.text),
            error => error,
        })
    }

    fn member_assembly(&mut self, declaring_type: Option<TypeName>) -> Result<Option<TypeName>> {
        self.skip_space()?;
        match self.next()? {
            Token::EndOfInput => Ok(declaring_type),
            Token::Comma => {
                let has_leading = declaring_type
                    .as_ref()
                    .is_some_and(|declaring_type| declaring_type.assembly().is_some());
                let assembly = self.trailing_assembly(has_leading)?;
                let Some(declaring_type) = declaring_type else {
                    return Err(malformed_error!(
                        "Assembly qualifier without declaring type in '{}'",
                        self.text
                    ));
                };
                self.expect_end()?;
                Ok(Some(declaring_type.with_assembly(Some(assembly))?))
            }
            other => Err(self.unexpected(other, "end of input")),
        }
    }

    fn parse_type(&mut self) -> Result<TypeName> {
        self.nested(|parser| {
            parser.skip_space()?;
            let leading = parser.leading_assembly()?;
            parser.type_body(leading)
        })
    }

    fn type_body(&mut self, leading: Option<AssemblyName>) -> Result<TypeName> {
        let token = self.next()?;
        let base = match token {
            Token::TypeGenericPosition(position) => {
                TypeName::unbound_generic_parameter(GenericParameterKind::Type, position)
            }
            Token::MethodGenericPosition(position) => {
                TypeName::unbound_generic_parameter(GenericParameterKind::Method, position)
            }
            Token::Bang => {
                let position = self.ilasm_position()?;
                TypeName::unbound_generic_parameter(GenericParameterKind::Type, position)
            }
            Token::DoubleBang => {
                let position = self.ilasm_position()?;
                TypeName::unbound_generic_parameter(GenericParameterKind::Method, position)
            }
            Token::Identifier("method") if self.scanner.rest().starts_with(char::is_whitespace) => {
                self.function_pointer()?
            }
            Token::Identifier(_) => {
                self.push_back(token);
                let named = self.qualified_name(leading)?;
                return self.type_specifiers(named);
            }
            other => return Err(self.unexpected(other, "a type")),
        };

        if let Some(assembly) = leading {
            return Err(malformed_error!(
                "'{}' cannot be qualified by assembly '{}'",
                base,
                assembly
            ));
        }
        self.type_specifiers(base)
    }

    fn ilasm_position(&mut self) -> Result<usize> {
        match self.next()? {
            Token::Identifier(digits) if digits.bytes().all(|byte| byte.is_ascii_digit()) => digits
                .parse()
                .map_err(|_| malformed_error!("Invalid generic position '{}'", digits)),
            other => Err(self.unexpected(other, "a generic parameter position")),
        }
    }

    fn function_pointer(&mut self) -> Result<TypeName> {
        let return_type = self.parse_type()?;
        self.skip_space()?;
        self.expect(Token::Star)?;
        self.skip_space()?;
        self.expect(Token::OpenParen)?;
        let parameter_types = self.type_list(Token::CloseParen)?;
        Ok(TypeName::function_pointer(return_type, parameter_types))
    }

    fn type_list(&mut self, close: Token<'_>) -> Result<Vec<TypeName>> {
        let mut types = Vec::new();
        self.skip_space()?;
        let token = self.next()?;
        if token == close {
            return Ok(types);
        }
        self.push_back(token);

        loop {
            types.push(self.parse_type()?);
            self.skip_space()?;
            match self.next()? {
                Token::Comma => {}
                token if token == close => return Ok(types),
                other => return Err(self.unexpected(other, "',' or the end of the list")),
            }
        }
    }

    fn type_specifiers(&mut self, base: TypeName) -> Result<TypeName> {
        let mut result = base;
        loop {
            let token = self.next()?;
            result = match token {
                Token::OpenBracket => {
                    let dimensions = self.dimensions()?;
                    result.make_array_type_with(dimensions)?
                }
                Token::Star => result.make_pointer_type()?,
                Token::Ampersand => result.make_by_reference_type()?,
                _ => {
                    self.push_back(token);
                    return Ok(result);
                }
            };

            self.specifiers += 1;
            if self.specifiers > MAX_TYPE_SPECIFIERS {
                return Err(Error::RecursionLimit(MAX_TYPE_SPECIFIERS));
            }
        }
    }

    fn dimensions(&mut self) -> Result<Vec<ArrayDimension>> {
        let mut dimensions = Vec::new();
        loop {
            self.skip_space()?;
            dimensions.push(self.dimension()?);
            self.skip_space()?;
            match self.next()? {
                Token::Comma => {}
                Token::CloseBracket => return Ok(dimensions),
                other => return Err(self.unexpected(other, "',' or ']'")),
            }
        }
    }

    fn dimension(&mut self) -> Result<ArrayDimension> {
        let token = self.next()?;
        match token {
            Token::Comma | Token::CloseBracket => {
                self.push_back(token);
                Ok(ArrayDimension::UNSIZED)
            }
            Token::Star => Ok(ArrayDimension::UNSIZED),
            Token::Identifier(text) => {
                let lower = self.bound(text)?;
                if !self.ellipsis()? {
                    return ArrayDimension::with_size(lower);
                }
                match self.next()? {
                    Token::Identifier(text) => {
                        let upper = self.bound(text)?;
                        ArrayDimension::new(Some(lower), Some(upper))
                    }
                    token => {
                        self.push_back(token);
                        ArrayDimension::new(Some(lower), None)
                    }
                }
            }
            Token::Dot => {
                self.push_back(token);
                self.ellipsis()?;
                match self.next()? {
                    Token::Identifier(text) => {
                        let upper = self.bound(text)?;
                        ArrayDimension::new(None, Some(upper))
                    }
                    other => Err(self.unexpected(other, "an upper bound")),
                }
            }
            other => Err(self.unexpected(other, "an array dimension")),
        }
    }

    fn bound(&self, text: &str) -> Result<i32> {
        text.parse()
            .map_err(|_| malformed_error!("Invalid array bound '{}' in '{}'", text, self.text))
    }

    fn ellipsis(&mut self) -> Result<bool> {
        let token = self.next()?;
        if token != Token::Dot {
            self.push_back(token);
            return Ok(false);
        }
        self.expect(Token::Dot)?;
        self.expect(Token::Dot)?;
        Ok(true)
    }

    fn qualified_name(&mut self, leading: Option<AssemblyName>) -> Result<TypeName> {
        let mut segments = Vec::new();
        loop {
            let token = self.next()?;
            let Token::Identifier(name) = token else {
                return Err(self.unexpected(token, "an identifier"));
            };

            let mut segment = Segment {
                name,
                mangle: None,
                list: None,
                separator: None,
            };
            let mut token = self.next()?;
            if let Token::TypeGenericPosition(arity) = token {
                segment.mangle = Some(arity);
                token = self.next()?;
            }
            if token == Token::LessThan {
                segment.list = Some(self.generic_list()?);
                token = self.next()?;
            }
            segment.separator = match token {
                Token::Dot => Some(Separator::Dot),
                Token::Plus | Token::Slash => Some(Separator::Nested),
                _ => {
                    self.push_back(token);
                    None
                }
            };

            let last = segment.separator.is_none();
            segments.push(segment);
            if last {
                return self.resolve_segments(segments, leading);
            }
        }
    }

    /// Builds a type from name segments.
    ///
    /// Segments before the first one carrying a mangle, a generic list or a nested-type
    /// separator form the namespace. Everything after is a chain of nested types, so
    /// `Dictionary`2.ValueCollection` nests `ValueCollection` in `Dictionary`2`.
    fn resolve_segments(
        &mut self,
        segments: Vec<Segment<'a>>,
        mut leading: Option<AssemblyName>,
    ) -> Result<TypeName> {
        let first_type = segments
            .iter()
            .position(|segment| {
                segment.mangle.is_some()
                    || segment.list.is_some()
                    || segment.separator != Some(Separator::Dot)
            })
            .unwrap_or(segments.len() - 1);

        let namespace = segments[..first_type]
            .iter()
            .map(|segment| segment.name)
            .collect::<Vec<_>>()
            .join(".");
        let namespace = NamespaceName::parse(&namespace)?;

        let mut current: Option<TypeName> = None;
        let mut arguments = Vec::new();
        let mut instantiated = false;
        for segment in segments.into_iter().skip(first_type) {
            let (declarations, segment_arguments) =
                self.resolve_generic_list(segment.name, segment.mangle, segment.list)?;
            current = Some(match current {
                None => TypeName::new_top_level(
                    segment.name,
                    namespace.clone(),
                    leading.take(),
                    declarations,
                )?,
                Some(declaring_type) => {
                    declaring_type.nested_generic_type(segment.name, declarations)?
                }
            });
            if let Some(segment_arguments) = segment_arguments {
                instantiated = true;
                arguments.extend(segment_arguments);
            }
        }

        let Some(definition) = current else {
            return Err(malformed_error!("Missing type name in '{}'", self.text));
        };
        if !instantiated {
            return Ok(definition);
        }
        if arguments.len() != definition.generic_parameter_count() {
            return Err(invalid_argument!(
                "arguments",
                "'{}' declares {} generic parameters but {} arguments were given",
                definition,
                definition.generic_parameter_count(),
                arguments.len()
            ));
        }
        definition.make_generic_type(arguments)
    }

    /// Classifies the generic list following `name`.
    fn resolve_generic_list(
        &self,
        name: &str,
        mangle: Option<usize>,
        list: Option<GenericList>,
    ) -> Result<ResolvedGenericList> {
        let Some(list) = list else {
            let declarations = vec![GenericParameterDeclaration::anonymous(); mangle.unwrap_or(0)];
            return Ok((declarations, None));
        };

        if list.declares_parameters(mangle, self.options) {
            log::trace!("Generic list of '{}' declares {} parameters", name, list.len());
            if let Some(arity) = mangle.filter(|arity| *arity != list.len()) {
                log::trace!(
                    "Arity {} of '{}' replaced by its {} declared parameters",
                    arity,
                    name,
                    list.len()
                );
            }
            return Ok((list.into_declarations()?, None));
        }

        log::trace!("Generic list of '{}' supplies {} arguments", name, list.len());
        if let Some(arity) = mangle.filter(|arity| *arity != list.len()) {
            return Err(invalid_argument!(
                "arguments",
                "'{}`{}' given {} generic arguments",
                name,
                arity,
                list.len()
            ));
        }
        let arguments = list.into_arguments()?;
        let declarations = vec![GenericParameterDeclaration::anonymous(); arguments.len()];
        Ok((declarations, Some(arguments)))
    }

    fn generic_list(&mut self) -> Result<GenericList> {
        let mut entries = Vec::new();
        loop {
            self.skip_space()?;
            let variance = self.variance()?;
            self.skip_space()?;
            let entry_type = match self.peek()? {
                Token::Comma | Token::GreaterThan => None,
                _ => Some(self.parse_type()?),
            };
            entries.push(GenericListEntry {
                variance,
                entry_type,
            });

            self.skip_space()?;
            match self.next()? {
                Token::Comma => {}
                Token::GreaterThan => return Ok(GenericList { entries }),
                other => return Err(self.unexpected(other, "',' or '>'")),
            }
        }
    }

    fn variance(&mut self) -> Result<Option<Variance>> {
        let token = self.next()?;
        let keyword_follows = self.scanner.rest().starts_with(char::is_whitespace);
        Ok(match token {
            Token::Plus => Some(Variance::Covariant),
            Token::Minus => Some(Variance::Contravariant),
            Token::Identifier("out") if keyword_follows => Some(Variance::Covariant),
            Token::Identifier("in") if keyword_follows => Some(Variance::Contravariant),
            _ => {
                self.push_back(token);
                None
            }
        })
    }

    /// Reads a member name, which may be dotted when it follows `::`.
    fn member_name(&mut self) -> Result<&'a str> {
        let start = match self.next()? {
            Token::Identifier(_) => self.last_start,
            other => return Err(self.unexpected(other, "a member name")),
        };
        while self.scanner.rest().starts_with('.') {
            self.next()?;
            match self.next()? {
                Token::Identifier(_) => {}
                other => return Err(self.unexpected(other, "a member name")),
            }
        }
        let text = self.text;
        Ok(&text[start..self.scanner.offset()])
    }

    fn method_body(&mut self, declaring_type: Option<TypeName>) -> Result<MethodName> {
        let name = self.member_name()?;

        let mut token = self.next()?;
        let mut mangle = None;
        if let Token::TypeGenericPosition(arity) | Token::MethodGenericPosition(arity) = token {
            mangle = Some(arity);
            token = self.next()?;
        }
        let mut list = None;
        if token == Token::LessThan {
            list = Some(self.generic_list()?);
            token = self.next()?;
        }
        self.push_back(token);

        self.skip_space()?;
        let token = self.next()?;
        let parameters = if token == Token::OpenParen {
            Some(self.parameter_list(Token::CloseParen)?)
        } else {
            self.push_back(token);
            None
        };
        let return_parameter = self.return_parameter()?;
        let declaring_type = self.member_assembly(declaring_type)?;

        let (generic_parameters, arguments) = self.resolve_generic_list(name, mangle, list)?;
        let definition = MethodName::new_default(MethodParts {
            name: name.to_string(),
            declaring_type,
            generic_parameters,
            parameters,
            return_parameter,
        })?;
        match arguments {
            Some(arguments) => definition.make_generic_method(arguments),
            None => Ok(definition),
        }
    }

    fn property_body(&mut self, declaring_type: Option<TypeName>) -> Result<PropertyName> {
        let name = self.member_name()?;
        self.skip_space()?;
        let token = self.next()?;
        let parameters = if token == Token::OpenBracket {
            Some(self.parameter_list(Token::CloseBracket)?)
        } else {
            self.push_back(token);
            None
        };
        let property_type = self.member_type()?;
        let declaring_type = self.member_assembly(declaring_type)?;
        PropertyName::new(declaring_type, name, property_type, parameters)
    }

    fn member_type(&mut self) -> Result<Option<TypeName>> {
        Ok(self
            .return_parameter()?
            .and_then(|parameter| parameter.parameter_type().cloned()))
    }

    fn return_parameter(&mut self) -> Result<Option<ParameterName>> {
        self.skip_space()?;
        let token = self.next()?;
        if token != Token::Colon {
            self.push_back(token);
            return Ok(None);
        }
        let return_type = self.parse_type()?;
        let modifiers = self.modifiers()?;
        Ok(Some(
            ParameterName::from_type(return_type).with_modifiers(modifiers),
        ))
    }

    fn parameter_list(&mut self, close: Token<'_>) -> Result<Vec<ParameterName>> {
        let mut parameters = Vec::new();
        self.skip_space()?;
        let token = self.next()?;
        if token == close {
            return Ok(parameters);
        }
        self.push_back(token);

        loop {
            parameters.push(self.parameter(close)?);
            self.skip_space()?;
            match self.next()? {
                Token::Comma => {}
                token if token == close => return Ok(parameters),
                other => return Err(self.unexpected(other, "',' or the end of the parameters")),
            }
        }
    }

    /// Parses `name:Type`, `Type name`, `Type` or nothing.
    fn parameter(&mut self, close: Token<'_>) -> Result<ParameterName> {
        self.skip_space()?;
        let token = self.next()?;
        if token == Token::Comma || token == close {
            self.push_back(token);
            return Ok(ParameterName::unspecified());
        }

        if let Token::Identifier(name) = token {
            let rest = self.scanner.rest().trim_start();
            if rest.starts_with(':') && !rest.starts_with("::") {
                self.skip_space()?;
                self.expect(Token::Colon)?;
                self.skip_space()?;
                let next = self.peek()?;
                if next == Token::Comma || next == close {
                    return ParameterName::new(name, None);
                }
                let parameter_type = self.parse_type()?;
                let modifiers = self.modifiers()?;
                return Ok(ParameterName::new(name, Some(parameter_type))?.with_modifiers(modifiers));
            }
        }

        self.push_back(token);
        let parameter_type = self.parse_type()?;
        let modifiers = self.modifiers()?;
        self.skip_space()?;
        let name = match self.next()? {
            Token::Identifier(name) => name,
            token => {
                self.push_back(token);
                ""
            }
        };
        Ok(ParameterName::new(name, Some(parameter_type))?.with_modifiers(modifiers))
    }

    fn modifiers(&mut self) -> Result<Vec<ParameterModifier>> {
        let mut modifiers = Vec::new();
        loop {
            self.skip_space()?;
            let token = self.next()?;
            let required = match token {
                Token::ModReq => true,
                Token::ModOpt => false,
                _ => {
                    self.push_back(token);
                    return Ok(modifiers);
                }
            };

            self.skip_space()?;
            self.expect(Token::OpenParen)?;
            let modifier_type = self.parse_type()?;
            self.skip_space()?;
            self.expect(Token::CloseParen)?;
            modifiers.push(if required {
                ParameterModifier::required(modifier_type)
            } else {
                ParameterModifier::optional(modifier_type)
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TypeNameKind;

    fn parse_type(text: &str) -> Result<TypeName> {
        SignatureParser::new(text, ParseOptions::empty()).type_signature()
    }

    fn parse_method(text: &str) -> Result<MethodName> {
        SignatureParser::new(text, ParseOptions::empty()).method_signature()
    }

    #[test]
    fn test_split_member() {
        let split = split_member("System.String.Concat(System.String)").unwrap();
        assert_eq!(split.declaring_type, Some("System.String"));
        assert_eq!(split.name_offset, 14);
        assert_eq!(split.terminator, Some('('));

        let split = split_member("System.Object..ctor()").unwrap();
        assert_eq!(split.declaring_type, Some("System.Object"));
        assert_eq!(split.name_offset, 14);

        let split = split_member("[mscorlib]System.Object::ToString():System.String").unwrap();
        assert_eq!(split.declaring_type, Some("[mscorlib]System.Object"));
        assert_eq!(split.terminator, Some('('));

        let split = split_member("N.C::System.IDisposable.Dispose()").unwrap();
        assert_eq!(split.declaring_type, Some("N.C"));
        assert_eq!(split.name_offset, 5);

        let split = split_member("List<System.Collections.Generic.KeyValuePair`2>.Add").unwrap();
        assert_eq!(
            split.declaring_type,
            Some("List<System.Collections.Generic.KeyValuePair`2>")
        );
        assert_eq!(split.terminator, None);

        let split = split_member("System.Int32[].Get(System.Int32)").unwrap();
        assert_eq!(split.declaring_type, Some("System.Int32[]"));

        let split = split_member("Item[System.Int32]").unwrap();
        assert_eq!(split.declaring_type, None);
        assert_eq!(split.terminator, Some('['));

        assert!(split_member(".Name").is_err());
        assert!(split_member("[mscorlib]Name").is_err());
        assert!(split_member("[mscorlib").is_err());
    }

    #[test]
    fn test_namespace_and_nesting() {
        let name = parse_type("System.Collections.Generic.Dictionary`2.ValueCollection").unwrap();
        assert_eq!(
            name.full_name(),
            "System.Collections.Generic.Dictionary`2+ValueCollection"
        );
        assert!(name.is_nested());
        assert_eq!(name.declaring_type().unwrap().name(), "Dictionary`2");
        assert_eq!(
            name.declaring_type().unwrap().namespace().full_name(),
            "System.Collections.Generic"
        );

        let legacy = parse_type("Outer/Inner").unwrap();
        assert_eq!(legacy.full_name(), "Outer+Inner");
    }

    #[test]
    fn test_generic_list_classification() {
        let instance = parse_type("Converter<TInput,TOutput>").unwrap();
        assert!(instance.is_generic_instance());
        assert_eq!(instance.generic_arguments()[0].name(), "TInput");

        let preferred = SignatureParser::new(
            "Converter<TInput,TOutput>",
            ParseOptions::PREFER_GENERIC_PARAMETERS,
        )
        .type_signature()
        .unwrap();
        assert!(preferred.is_generic_type_definition());
        assert_eq!(preferred.generic_parameters()[0].name(), "TInput");

        let mangled = parse_type("Converter`2<TInput,TOutput>").unwrap();
        assert!(mangled.is_generic_type_definition());
        assert_eq!(mangled.generic_parameters()[1].name(), "TOutput");

        let open = parse_type("Converter<,>").unwrap();
        assert!(open.is_generic_type_definition());
        assert_eq!(open.full_name(), "Converter`2");

        let variant = parse_type("Func<in T,out TResult>").unwrap();
        assert!(variant.is_generic_type_definition());
        let parameter = variant.generic_parameters()[1].as_generic_parameter().unwrap();
        assert_eq!(parameter.variance(), Variance::Covariant);

        assert!(parse_type("List`1<System.Int32,System.String>").is_err());
        assert!(parse_type("Func<+System.Int32>").is_err());
    }

    #[test]
    fn test_nested_generic_arguments() {
        let name = parse_type("Outer<System.Int32>+Inner<System.String>").unwrap();
        assert_eq!(name.full_name(), "Outer<System.Int32>+Inner<System.String>");
        assert_eq!(name.generic_arguments().len(), 2);
    }

    #[test]
    fn test_type_specifiers() {
        let name = parse_type("S+T[][]").unwrap();
        assert_eq!(name.full_name(), "S+T[][]");
        let TypeNameKind::Array(outer) = name.kind() else {
            panic!("expected an array");
        };
        assert!(outer.element_type().is_array());

        let bounded = parse_type("System.Int32[0...5,,*]").unwrap();
        assert_eq!(bounded.array_rank(), 3);
        assert_eq!(bounded.array_dimensions()[0].size(), Some(6));

        let sized = parse_type("System.Int32[4]").unwrap();
        assert_eq!(sized.array_dimensions()[0].upper_bound(), Some(3));

        assert!(parse_type("System.Int32**&").unwrap().is_by_reference());
        assert!(parse_type("System.Int32&&").is_err());
        assert!(parse_type("System.Int32[").is_err());
        assert!(parse_type("System.Int32[5...1]").is_err());
    }

    #[test]
    fn test_placeholders_and_function_pointers() {
        assert!(parse_type("!0").unwrap().is_generic_parameter());
        assert_eq!(parse_type("!!1").unwrap().full_name(), "``1");

        let pointer = parse_type("method System.Void *(System.Int32,`0)").unwrap();
        assert!(pointer.is_function_pointer());
        assert_eq!(pointer.full_name(), "method System.Void *(System.Int32,`0)");
    }

    #[test]
    fn test_assembly_qualifiers() {
        let trailing = parse_type("System.Int32, mscorlib, Version=4.0.0.0").unwrap();
        assert_eq!(trailing.assembly().unwrap().name(), "mscorlib");

        let leading = parse_type("[mscorlib]System.Int32[]").unwrap();
        assert_eq!(leading.root_element_type().assembly().unwrap().name(), "mscorlib");

        assert!(parse_type("[mscorlib]System.Int32, mscorlib").is_err());
        assert!(parse_type("System.Int32,").is_err());
        assert!(SignatureParser::new("System.Int32, mscorlib", ParseOptions::NO_ASSEMBLY_QUALIFIERS)
            .type_signature()
            .is_err());
    }

    #[test]
    fn test_method_signatures() {
        let concat = parse_method("System.String.Concat(System.String a, b:System.String)").unwrap();
        assert_eq!(concat.full_name(), "System.String.Concat(System.String,System.String)");
        assert_eq!(concat.parameters().unwrap()[1].name(), "b");

        let constructor = parse_method("System.Object..ctor()").unwrap();
        assert!(constructor.is_constructor());

        let ilasm = parse_method("[mscorlib]System.Object::ToString():System.String").unwrap();
        assert_eq!(ilasm.return_type().unwrap().full_name(), "System.String");
        assert_eq!(ilasm.declaring_type().unwrap().assembly().unwrap().name(), "mscorlib");

        let explicit = parse_method("N.C::System.IDisposable.Dispose():System.Void").unwrap();
        assert_eq!(explicit.name(), "System.IDisposable.Dispose");
        assert_eq!(explicit.declaring_type().unwrap().full_name(), "N.C");

        assert!(matches!(parse_type("[]A"), Err(Error::Malformed { .. })));
        assert!(matches!(parse_method("[ ]A.M()"), Err(Error::Malformed { .. })));

        let placeholders = parse_method("CompareTo(,,)").unwrap();
        assert_eq!(placeholders.parameter_count(), Some(3));
        assert!(placeholders.parameters().unwrap()[0].parameter_type().is_none());

        let modified =
            parse_method("M(System.Int32 modopt(System.Runtime.CompilerServices.IsLong) x)").unwrap();
        assert_eq!(modified.parameters().unwrap()[0].modifiers().len(), 1);
        assert_eq!(modified.parameters().unwrap()[0].name(), "x");
    }

    #[test]
    fn test_generic_methods() {
        let unbindable = parse_method("Enumerable.Select``2(`0)").unwrap_err();
        assert!(matches!(unbindable, Error::CannotBind { .. }));

        let instance = parse_method("Enumerable.Select<System.Int32,System.String>()").unwrap();
        assert!(instance.is_generic_instance());
        assert_eq!(instance.generic_arguments().len(), 2);

        let declared = parse_method("Enumerable.Select``1<TSource>(``0)").unwrap();
        assert!(declared.is_generic_method_definition());
        assert_eq!(declared.generic_parameters()[0].name(), "TSource");
    }

    #[test]
    fn test_recursion_limit() {
        let deep = format!("{}System.Int32{}", "A<".repeat(100), ">".repeat(100));
        assert_eq!(parse_type(&deep), Err(Error::RecursionLimit(MAX_RECURSION_DEPTH)));

        let long = format!("System.Int32{}", "*".repeat(MAX_TYPE_SPECIFIERS + 1));
        assert_eq!(parse_type(&long), Err(Error::RecursionLimit(MAX_TYPE_SPECIFIERS)));
    }
}

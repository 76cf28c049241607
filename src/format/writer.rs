//! Rendering of names according to a [`MetadataNameFormat`].

use crate::{
    format::options::{BasicFormat, MetadataNameFormat},
    names::{
        event::EventName,
        field::FieldName,
        generic::Variance,
        parameter::ParameterName,
        property::PropertyName,
        symbol::SymbolTypes,
        types::{DefaultTypeName, TypeNameKind},
    },
    MetadataName, MethodName, TypeName,
};

/// How much of a type name is written.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Qualification {
    /// The innermost segment only
    Name,
    /// All nesting segments, no namespace
    Compact,
    /// Namespace and all nesting segments
    Full,
    /// Like `Full`, plus assembly qualifiers and positional generic parameters
    Roundtrip,
}

/// Where the assembly of a type goes in roundtrip output.
#[derive(Clone, Copy, PartialEq, Eq)]
enum AssemblyPlacement {
    /// `[assembly]Type`, inside argument and parameter lists
    Leading,
    /// `Type, assembly`, at the end of a top-level type
    Trailing,
    /// Written by the caller
    Omitted,
}

pub(crate) struct NameWriter<'f> {
    format: &'f MetadataNameFormat,
    output: String,
}

impl<'f> NameWriter<'f> {
    pub(crate) fn new(format: &'f MetadataNameFormat) -> Self {
        NameWriter {
            format,
            output: String::new(),
        }
    }

    pub(crate) fn finish(self) -> String {
        self.output
    }

    fn type_qualification(&self) -> Qualification {
        match self.format.basic_format() {
            BasicFormat::Name | BasicFormat::NameOverloads => Qualification::Name,
            BasicFormat::Compact => Qualification::Compact,
            BasicFormat::Full => Qualification::Full,
            BasicFormat::Roundtrip => Qualification::Roundtrip,
        }
    }

    /// Qualification of the types inside a member: parameters and return types.
    fn member_type_qualification(&self) -> Qualification {
        match self.format.basic_format() {
            BasicFormat::Name | BasicFormat::Compact => Qualification::Compact,
            BasicFormat::NameOverloads | BasicFormat::Full => Qualification::Full,
            BasicFormat::Roundtrip => Qualification::Roundtrip,
        }
    }

    fn is_roundtrip(&self) -> bool {
        self.format.basic_format() == BasicFormat::Roundtrip
    }

    pub(crate) fn write_name(&mut self, name: &MetadataName) {
        let qualified = matches!(
            self.format.basic_format(),
            BasicFormat::Full | BasicFormat::Roundtrip
        );
        match name {
            MetadataName::Assembly(assembly) if qualified => {
                self.output.push_str(assembly.full_name());
            }
            MetadataName::Assembly(assembly) => self.output.push_str(assembly.name()),
            MetadataName::Module(module) => self.output.push_str(module.name()),
            MetadataName::Namespace(namespace) if qualified => {
                self.output.push_str(namespace.full_name());
            }
            MetadataName::Namespace(namespace) => self.output.push_str(namespace.name()),
            MetadataName::Type(type_name) => {
                let qualification = self.type_qualification();
                self.write_type(type_name, qualification, AssemblyPlacement::Trailing);
            }
            MetadataName::Method(method) => self.write_method(method),
            MetadataName::Field(field) => self.write_field(field),
            MetadataName::Property(property) => self.write_property(property),
            MetadataName::Event(event) => self.write_event(event),
            MetadataName::Parameter(parameter) => {
                let qualification = self.member_type_qualification();
                self.write_parameter(parameter, qualification);
            }
        }
    }

    fn write_type(
        &mut self,
        type_name: &TypeName,
        qualification: Qualification,
        placement: AssemblyPlacement,
    ) {
        let assembly = match qualification {
            Qualification::Roundtrip => type_name.assembly(),
            _ => None,
        };
        if let (Some(assembly), AssemblyPlacement::Leading) = (assembly, placement) {
            self.output.push('[');
            self.output.push_str(assembly.full_name());
            self.output.push(']');
        }

        self.write_type_body(type_name, qualification);

        if let (Some(assembly), AssemblyPlacement::Trailing) = (assembly, placement) {
            self.output.push_str(", ");
            self.output.push_str(assembly.full_name());
        }
    }

    fn write_type_body(&mut self, type_name: &TypeName, qualification: Qualification) {
        match type_name.kind() {
            TypeNameKind::Named(_) => self.write_named(type_name, qualification, &[]),
            TypeNameKind::GenericInstance(instance) => {
                self.write_named(instance.element_type(), qualification, instance.arguments());
            }
            TypeNameKind::Array(array) => {
                self.write_type_body(array.element_type(), qualification);
                self.output.push('[');
                for (index, dimension) in array.dimensions().iter().enumerate() {
                    if index > 0 {
                        self.output.push(',');
                    }
                    self.output.push_str(&dimension.to_string());
                }
                self.output.push(']');
            }
            TypeNameKind::Pointer(element) => {
                self.write_type_body(element, qualification);
                self.output.push('*');
            }
            TypeNameKind::ByReference(element) => {
                self.write_type_body(element, qualification);
                self.output.push('&');
            }
            TypeNameKind::FunctionPointer(pointer) => {
                let qualification = match qualification {
                    Qualification::Name => Qualification::Compact,
                    other => other,
                };
                self.output.push_str("method ");
                self.write_type(
                    pointer.return_type(),
                    qualification,
                    AssemblyPlacement::Leading,
                );
                self.output.push_str(" *(");
                self.write_type_list(pointer.parameter_types(), qualification);
                self.output.push(')');
            }
            TypeNameKind::GenericParameter(parameter) => {
                if qualification == Qualification::Roundtrip
                    || self.format.use_positional_generic_parameters()
                {
                    self.output.push_str(&parameter.positional_name());
                } else {
                    self.output.push_str(type_name.name());
                }
            }
        }
    }

    fn write_type_list(&mut self, types: &[TypeName], qualification: Qualification) {
        for (index, type_name) in types.iter().enumerate() {
            if index > 0 {
                self.output.push(',');
            }
            self.write_type(type_name, qualification, AssemblyPlacement::Leading);
        }
    }

    /// Writes a named type, instantiated with `arguments` when they are not empty.
    ///
    /// Arguments are distributed over the nesting segments by their own parameter counts.
    fn write_named(
        &mut self,
        definition: &TypeName,
        qualification: Qualification,
        arguments: &[TypeName],
    ) {
        let chain = definition.definition_chain();
        let shown = match qualification {
            Qualification::Name => chain.len() - 1,
            _ => 0,
        };
        let argument_qualification = match qualification {
            Qualification::Name => Qualification::Compact,
            other => other,
        };

        if matches!(
            qualification,
            Qualification::Full | Qualification::Roundtrip
        ) {
            let namespace = chain[0].namespace();
            if !namespace.is_global() {
                self.output.push_str(namespace.full_name());
                self.output.push('.');
            }
        }

        let mut offset = 0;
        for (index, segment) in chain.iter().enumerate() {
            let Some(named) = segment.as_named() else {
                continue;
            };
            let own = named.own_generic_parameter_count();
            if index < shown {
                offset += own;
                continue;
            }
            if index > shown {
                self.output.push('+');
            }

            if arguments.is_empty() {
                self.write_definition_segment(segment, named, qualification);
                continue;
            }

            self.output.push_str(named.simple_name());
            if own > 0 {
                let end = (offset + own).min(arguments.len());
                self.output.push('<');
                self.write_type_list(&arguments[offset.min(end)..end], argument_qualification);
                self.output.push('>');
            }
            offset += own;
        }
    }

    fn write_definition_segment(
        &mut self,
        segment: &TypeName,
        named: &DefaultTypeName,
        qualification: Qualification,
    ) {
        let parameters = named.own_generic_parameters();
        if parameters.is_empty() {
            self.output.push_str(named.simple_name());
        } else if qualification == Qualification::Roundtrip {
            self.output.push_str(segment.name());
            self.write_roundtrip_declarations(parameters);
        } else if self.format.include_type_parameters()
            && !self.format.use_positional_generic_parameters()
        {
            self.output.push_str(named.simple_name());
            self.write_declarations(parameters, qualification);
        } else {
            self.output.push_str(segment.name());
        }
    }

    /// Writes `<T,U>` with the variance and constraints the format asks for.
    fn write_declarations(&mut self, parameters: &[TypeName], qualification: Qualification) {
        let constraint_qualification = match qualification {
            Qualification::Name => Qualification::Compact,
            other => other,
        };

        self.output.push('<');
        for (index, parameter) in parameters.iter().enumerate() {
            if index > 0 {
                self.output.push(',');
            }
            let Some(generic) = parameter.as_generic_parameter() else {
                self.output.push_str(parameter.name());
                continue;
            };

            if self.format.include_variance() {
                match generic.variance() {
                    Variance::Covariant => self.output.push_str("out "),
                    Variance::Contravariant => self.output.push_str("in "),
                    Variance::Invariant => {}
                }
            }
            if self.format.include_type_constraints() {
                let constraints = generic
                    .declaration()
                    .map(|declaration| declaration.constraints())
                    .unwrap_or_default();
                if !constraints.is_empty() {
                    self.output.push('(');
                    self.write_type_list(constraints, constraint_qualification);
                    self.output.push_str(") ");
                }
            }
            self.output.push_str(parameter.name());
        }
        self.output.push('>');
    }

    /// Writes the `<+T,>` list following an arity mangle, if any parameter carries a name
    /// or variance. Anonymous parameters leave their entry empty.
    fn write_roundtrip_declarations(&mut self, parameters: &[TypeName]) {
        let generics: Vec<_> = parameters
            .iter()
            .filter_map(TypeName::as_generic_parameter)
            .collect();
        let annotated = generics.iter().any(|generic| {
            generic.declared_name().is_some() || generic.variance() != Variance::Invariant
        });
        if !annotated {
            return;
        }

        self.output.push('<');
        for (index, generic) in generics.iter().enumerate() {
            if index > 0 {
                self.output.push(',');
            }
            match generic.variance() {
                Variance::Covariant => self.output.push('+'),
                Variance::Contravariant => self.output.push('-'),
                Variance::Invariant => {}
            }
            self.output.push_str(generic.declared_name().unwrap_or_default());
        }
        self.output.push('>');
    }

    /// Writes `Declaring.` for members, qualified as the basic format asks.
    fn write_member_prefix(&mut self, declaring_type: Option<&TypeName>) {
        self.write_member_prefix_with(declaring_type, ".");
    }

    fn write_member_prefix_with(&mut self, declaring_type: Option<&TypeName>, separator: &str) {
        let Some(declaring_type) = declaring_type else {
            return;
        };
        let qualification = match self.format.basic_format() {
            BasicFormat::Name | BasicFormat::NameOverloads => return,
            BasicFormat::Compact => Qualification::Compact,
            BasicFormat::Full => Qualification::Full,
            BasicFormat::Roundtrip => Qualification::Roundtrip,
        };
        self.write_type(declaring_type, qualification, AssemblyPlacement::Omitted);
        self.output.push_str(separator);
    }

    fn write_member_assembly(&mut self, declaring_type: Option<&TypeName>) {
        if !self.is_roundtrip() {
            return;
        }
        if let Some(assembly) = declaring_type.and_then(TypeName::assembly) {
            self.output.push_str(", ");
            self.output.push_str(assembly.full_name());
        }
    }

    fn write_member_type(&mut self, kind: SymbolTypes, member_type: Option<&TypeName>) {
        let Some(member_type) = member_type else {
            return;
        };
        if self.is_roundtrip() || self.format.return_types().contains(kind) {
            let qualification = self.member_type_qualification();
            self.output.push(':');
            self.write_type(member_type, qualification, AssemblyPlacement::Leading);
        }
    }

    fn shows_parameters(&self) -> bool {
        self.format.basic_format() != BasicFormat::Name
    }

    fn write_method(&mut self, method: &MethodName) {
        // A dotted name after a single dot would be read as part of the declaring type.
        let separator = if method.name().contains('.') && !method.is_constructor() {
            "::"
        } else {
            "."
        };
        self.write_member_prefix_with(method.declaring_type(), separator);
        self.output.push_str(method.name());

        let qualification = self.member_type_qualification();
        if self.format.basic_format() != BasicFormat::Name {
            self.write_method_generics(method, qualification);
        }

        if let (Some(parameters), true) = (method.parameters(), self.shows_parameters()) {
            self.output.push('(');
            self.write_parameter_list(parameters, qualification);
            self.output.push(')');
        }

        if let Some(return_parameter) = method.return_parameter() {
            if let Some(return_type) = return_parameter.parameter_type() {
                if self.is_roundtrip() || self.format.return_types().contains(SymbolTypes::METHOD)
                {
                    self.output.push(':');
                    self.write_type(return_type, qualification, AssemblyPlacement::Leading);
                    self.write_modifiers(return_parameter, SymbolTypes::RETURN_PARAMETER);
                }
            }
        }

        self.write_member_assembly(method.declaring_type());
    }

    fn write_method_generics(&mut self, method: &MethodName, qualification: Qualification) {
        if method.is_generic_instance() {
            self.output.push('<');
            self.write_type_list(method.generic_arguments(), qualification);
            self.output.push('>');
            return;
        }

        let parameters = method.generic_parameters();
        if parameters.is_empty() {
            return;
        }
        if self.is_roundtrip() {
            self.output.push_str(&format!("``{}", parameters.len()));
            self.write_roundtrip_declarations(parameters);
        } else if self.format.include_type_parameters()
            && !self.format.use_positional_generic_parameters()
        {
            self.write_declarations(parameters, qualification);
        } else {
            self.output.push_str(&format!("``{}", parameters.len()));
        }
    }

    fn write_property(&mut self, property: &PropertyName) {
        self.write_member_prefix(property.declaring_type());
        self.output.push_str(property.name());
        if let (Some(parameters), true) = (property.parameters(), self.shows_parameters()) {
            let qualification = self.member_type_qualification();
            self.output.push('[');
            self.write_parameter_list(parameters, qualification);
            self.output.push(']');
        }
        self.write_member_type(SymbolTypes::PROPERTY, property.property_type());
        self.write_member_assembly(property.declaring_type());
    }

    fn write_field(&mut self, field: &FieldName) {
        self.write_member_prefix(field.declaring_type());
        self.output.push_str(field.name());
        self.write_member_type(SymbolTypes::FIELD, field.field_type());
        self.write_member_assembly(field.declaring_type());
    }

    fn write_event(&mut self, event: &EventName) {
        self.write_member_prefix(event.declaring_type());
        self.output.push_str(event.name());
        self.write_member_type(SymbolTypes::EVENT, event.event_type());
        self.write_member_assembly(event.declaring_type());
    }

    fn write_parameter_list(&mut self, parameters: &[ParameterName], qualification: Qualification) {
        for (index, parameter) in parameters.iter().enumerate() {
            if index > 0 {
                self.output.push(',');
            }
            self.write_parameter(parameter, qualification);
        }
    }

    fn write_parameter(&mut self, parameter: &ParameterName, qualification: Qualification) {
        let kind = if parameter.is_return_parameter() {
            SymbolTypes::RETURN_PARAMETER
        } else {
            SymbolTypes::PARAMETER
        };
        let named = !parameter.name().is_empty()
            && (self.is_roundtrip() || self.format.include_parameter_names());

        match parameter.parameter_type() {
            Some(parameter_type) => {
                self.write_type(parameter_type, qualification, AssemblyPlacement::Leading);
                self.write_modifiers(parameter, kind);
                if named {
                    self.output.push(' ');
                    self.output.push_str(parameter.name());
                }
            }
            None if named => {
                self.output.push_str(parameter.name());
                if self.is_roundtrip() {
                    self.output.push(':');
                }
            }
            None => {}
        }
    }

    fn write_modifiers(&mut self, parameter: &ParameterName, kind: SymbolTypes) {
        if !self.is_roundtrip() && !self.format.modifiers().contains(kind) {
            return;
        }
        let qualification = self.member_type_qualification();
        for modifier in parameter.modifiers() {
            self.output.push(' ');
            self.output.push_str(modifier.keyword());
            self.output.push('(');
            self.write_type(
                modifier.modifier_type(),
                qualification,
                AssemblyPlacement::Leading,
            );
            self.output.push(')');
        }
    }
}

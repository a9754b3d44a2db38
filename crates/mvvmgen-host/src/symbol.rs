use crate::{
    attribute::AttributeData,
    types::{TypeId, TypeRef},
};

///
/// FieldSymbol
///

#[derive(Clone, Debug, PartialEq)]
pub struct FieldSymbol {
    pub name: String,
    pub ty: TypeRef,
    pub is_readonly: bool,
    pub attributes: Vec<AttributeData>,
    pub doc_comment: Option<Vec<String>>,
}

impl FieldSymbol {
    #[must_use]
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            is_readonly: false,
            attributes: Vec::new(),
            doc_comment: None,
        }
    }

    #[must_use]
    pub const fn readonly(mut self) -> Self {
        self.is_readonly = true;
        self
    }

    #[must_use]
    pub fn with_attribute(mut self, attribute: AttributeData) -> Self {
        self.attributes.push(attribute);
        self
    }

    #[must_use]
    pub fn with_doc(mut self, lines: &[&str]) -> Self {
        self.doc_comment = Some(lines.iter().map(ToString::to_string).collect());
        self
    }
}

///
/// ParameterSymbol
///

#[derive(Clone, Debug, PartialEq)]
pub struct ParameterSymbol {
    pub name: String,
    pub ty: TypeRef,
}

impl ParameterSymbol {
    #[must_use]
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

///
/// MethodSymbol
///

#[derive(Clone, Debug, PartialEq)]
pub struct MethodSymbol {
    pub name: String,
    pub return_type: TypeRef,
    pub parameters: Vec<ParameterSymbol>,
    pub attributes: Vec<AttributeData>,
    pub doc_comment: Option<Vec<String>>,
}

impl MethodSymbol {
    #[must_use]
    pub fn new(name: impl Into<String>, return_type: TypeRef) -> Self {
        Self {
            name: name.into(),
            return_type,
            parameters: Vec::new(),
            attributes: Vec::new(),
            doc_comment: None,
        }
    }

    #[must_use]
    pub fn with_param(mut self, name: &str, ty: TypeRef) -> Self {
        self.parameters.push(ParameterSymbol::new(name, ty));
        self
    }

    #[must_use]
    pub fn with_attribute(mut self, attribute: AttributeData) -> Self {
        self.attributes.push(attribute);
        self
    }

    #[must_use]
    pub fn with_doc(mut self, lines: &[&str]) -> Self {
        self.doc_comment = Some(lines.iter().map(ToString::to_string).collect());
        self
    }

    #[must_use]
    pub fn returns_void(&self) -> bool {
        self.return_type.is_void()
    }
}

///
/// MemberSymbol
///

#[derive(Clone, Debug, PartialEq)]
pub enum MemberSymbol {
    Field(FieldSymbol),
    Method(MethodSymbol),
    Property { name: String, ty: TypeRef },
}

impl MemberSymbol {
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Field(field) => &field.name,
            Self::Method(method) => &method.name,
            Self::Property { name, .. } => name,
        }
    }

    #[must_use]
    pub const fn as_method(&self) -> Option<&MethodSymbol> {
        match self {
            Self::Method(method) => Some(method),
            _ => None,
        }
    }
}

///
/// TypeDecl
///
/// One level of a (possibly nested) type declaration: `class Outer<T>`.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TypeDecl {
    pub keyword: String,
    pub name: String,
    pub type_parameters: Vec<String>,
}

impl TypeDecl {
    #[must_use]
    pub fn class(name: impl Into<String>) -> Self {
        Self {
            keyword: "class".to_string(),
            name: name.into(),
            type_parameters: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_type_parameter(mut self, name: &str) -> Self {
        self.type_parameters.push(name.to_string());
        self
    }

    #[must_use]
    pub const fn arity(&self) -> usize {
        self.type_parameters.len()
    }

    /// Declaration text without modifiers: `class Outer<T>`.
    #[must_use]
    pub fn declaration(&self) -> String {
        if self.type_parameters.is_empty() {
            format!("{} {}", self.keyword, self.name)
        } else {
            format!(
                "{} {}<{}>",
                self.keyword,
                self.name,
                self.type_parameters.join(", ")
            )
        }
    }
}

///
/// TypeSymbol
///

#[derive(Clone, Debug, PartialEq)]
pub struct TypeSymbol {
    pub namespace: Option<String>,

    /// Outermost first; the last entry is this type.
    pub declarations: Vec<TypeDecl>,

    pub base_type: Option<TypeId>,
    pub interfaces: Vec<TypeId>,
    pub members: Vec<MemberSymbol>,
    pub attributes: Vec<AttributeData>,
}

impl TypeSymbol {
    #[must_use]
    pub fn class(namespace: Option<&str>, name: &str) -> Self {
        Self {
            namespace: namespace.map(ToString::to_string),
            declarations: vec![TypeDecl::class(name)],
            base_type: None,
            interfaces: Vec::new(),
            members: Vec::new(),
            attributes: Vec::new(),
        }
    }

    /// Nest this type inside `outer`, keeping the outer namespace.
    #[must_use]
    pub fn nested_in(mut self, outer: &Self) -> Self {
        let mut declarations = outer.declarations.clone();
        declarations.append(&mut self.declarations);
        self.declarations = declarations;
        self.namespace.clone_from(&outer.namespace);
        self
    }

    #[must_use]
    pub fn with_declaration(mut self, declaration: TypeDecl) -> Self {
        if let Some(last) = self.declarations.last_mut() {
            *last = declaration;
        }
        self
    }

    #[must_use]
    pub fn with_base(mut self, base: &str) -> Self {
        self.base_type = Some(TypeId::new(base));
        self
    }

    #[must_use]
    pub fn with_interface(mut self, interface: &str) -> Self {
        self.interfaces.push(TypeId::new(interface));
        self
    }

    #[must_use]
    pub fn with_field(mut self, field: FieldSymbol) -> Self {
        self.members.push(MemberSymbol::Field(field));
        self
    }

    #[must_use]
    pub fn with_method(mut self, method: MethodSymbol) -> Self {
        self.members.push(MemberSymbol::Method(method));
        self
    }

    #[must_use]
    pub fn with_attribute(mut self, attribute: AttributeData) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// The innermost declaration, i.e. this type.
    #[must_use]
    pub fn declaration(&self) -> Option<&TypeDecl> {
        self.declarations.last()
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.declaration().map_or("", |decl| decl.name.as_str())
    }

    /// Metadata identity: `Namespace.Outer+Inner` flattened with dots.
    #[must_use]
    pub fn id(&self) -> TypeId {
        let path = self
            .declarations
            .iter()
            .map(|decl| decl.name.as_str())
            .collect::<Vec<_>>()
            .join(".");

        match &self.namespace {
            Some(ns) if !ns.is_empty() => TypeId::new(format!("{ns}.{path}")),
            _ => TypeId::new(path),
        }
    }

    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldSymbol> {
        self.members.iter().find_map(|member| match member {
            MemberSymbol::Field(field) if field.name == name => Some(field),
            _ => None,
        })
    }

    #[must_use]
    pub fn method(&self, name: &str) -> Option<&MethodSymbol> {
        self.members
            .iter()
            .filter_map(MemberSymbol::as_method)
            .find(|method| method.name == name)
    }
}

///
/// MemberLookup
///
/// By-name member query on an enclosing type; used for callback overload sets.
///

pub trait MemberLookup {
    fn members_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a MemberSymbol> + 'a;
}

impl MemberLookup for TypeSymbol {
    fn members_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a MemberSymbol> + 'a {
        self.members
            .iter()
            .filter(move |member| member.name() == name)
    }
}

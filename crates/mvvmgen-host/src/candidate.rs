use crate::{
    attribute::AttributeData,
    symbol::{FieldSymbol, MethodSymbol},
    syntax::SyntaxNode,
    types::TypeId,
};

///
/// CandidateMember
///

#[derive(Clone, Debug, PartialEq)]
pub enum CandidateMember {
    Field(FieldSymbol),
    Method(MethodSymbol),

    /// A type-level marker; the containing type is the target itself.
    Type(Vec<AttributeData>),
}

///
/// Candidate
///
/// One attribute target the host surfaced for a marker. Candidates live for a
/// single pass and are consumed in the order the host presents them.
///

#[derive(Clone, Debug, PartialEq)]
pub struct Candidate {
    /// Metadata name of the marker attribute that surfaced this candidate.
    pub marker: TypeId,
    pub syntax: SyntaxNode,
    pub containing_type: TypeId,
    pub member: CandidateMember,
}

impl Candidate {
    #[must_use]
    pub fn new(
        marker: &str,
        syntax: SyntaxNode,
        containing_type: &str,
        member: CandidateMember,
    ) -> Self {
        Self {
            marker: TypeId::new(marker),
            syntax,
            containing_type: TypeId::new(containing_type),
            member,
        }
    }

    /// A field member inside a class, with the attribute set it carries.
    #[must_use]
    pub fn field(marker: &str, containing_type: &str, field: FieldSymbol) -> Self {
        Self::new(
            marker,
            SyntaxNode::field(),
            containing_type,
            CandidateMember::Field(field),
        )
    }

    /// A method member; the syntax shape is derived from its signature.
    #[must_use]
    pub fn method(marker: &str, containing_type: &str, method: MethodSymbol) -> Self {
        let return_type = if method.return_type.is_task() {
            "Task".to_string()
        } else {
            method.return_type.name.clone()
        };
        let parameters = method
            .parameters
            .iter()
            .map(|p| p.ty.simple_name().to_string())
            .collect::<Vec<_>>();
        let parameters = parameters.iter().map(String::as_str).collect::<Vec<_>>();

        Self::new(
            marker,
            SyntaxNode::method(&return_type, &parameters),
            containing_type,
            CandidateMember::Method(method),
        )
    }

    /// A class carrying a type-level marker.
    #[must_use]
    pub fn class(marker: &str, containing_type: &str, attributes: Vec<AttributeData>) -> Self {
        Self::new(
            marker,
            SyntaxNode::ClassDeclaration,
            containing_type,
            CandidateMember::Type(attributes),
        )
    }

    #[must_use]
    pub fn attributes(&self) -> &[AttributeData] {
        match &self.member {
            CandidateMember::Field(field) => &field.attributes,
            CandidateMember::Method(method) => &method.attributes,
            CandidateMember::Type(attributes) => attributes,
        }
    }

    /// Simple name of the member, or of the marked type.
    #[must_use]
    pub fn member_name(&self) -> &str {
        match &self.member {
            CandidateMember::Field(field) => &field.name,
            CandidateMember::Method(method) => &method.name,
            CandidateMember::Type(_) => self
                .containing_type
                .as_str()
                .rsplit('.')
                .next()
                .unwrap_or_default(),
        }
    }
}

//! Two-phase eligibility: a syntactic pre-filter on the declaration shape,
//! then a semantic check against the host. Failing either phase excludes
//! the candidate without a diagnostic.


use crate::attribute::{
    self, LOCALIZE_ATTRIBUTE, NOTIFY_ATTRIBUTE, NOTIFY_DATA_ERROR_INFO_ATTRIBUTE,
};
use derive_more::Display;
use mvvmgen_host::prelude::*;

pub const NOTIFY_DATA_ERROR_INFO_INTERFACE: &str = "System.ComponentModel.INotifyDataErrorInfo";

const CANCELLATION_TOKEN: &str = "CancellationToken";
const TASK_RETURN_SPELLINGS: [&str; 3] = [
    "Task",
    "System.Threading.Tasks.Task",
    "global::System.Threading.Tasks.Task",
];

///
/// MarkerKind
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum MarkerKind {
    Notify,
    Localize,
    NotifyDataErrorInfo,
}

impl MarkerKind {
    #[must_use]
    pub fn from_marker(marker: &TypeId) -> Option<Self> {
        match marker.as_str() {
            NOTIFY_ATTRIBUTE => Some(Self::Notify),
            LOCALIZE_ATTRIBUTE => Some(Self::Localize),
            NOTIFY_DATA_ERROR_INFO_ATTRIBUTE => Some(Self::NotifyDataErrorInfo),
            _ => None,
        }
    }

    #[must_use]
    pub const fn metadata_name(self) -> &'static str {
        match self {
            Self::Notify => NOTIFY_ATTRIBUTE,
            Self::Localize => LOCALIZE_ATTRIBUTE,
            Self::NotifyDataErrorInfo => NOTIFY_DATA_ERROR_INFO_ATTRIBUTE,
        }
    }

    /// Type-level markers apply to the class itself rather than a member.
    #[must_use]
    pub const fn is_type_level(self) -> bool {
        matches!(self, Self::Localize | Self::NotifyDataErrorInfo)
    }
}

///
/// Syntactic pre-filter
///

#[must_use]
pub fn is_valid_syntax(kind: MarkerKind, node: &SyntaxNode) -> bool {
    match kind {
        MarkerKind::Notify => match node {
            SyntaxNode::VariableDeclarator {
                attribute_lists,
                parent,
            } => *attribute_lists > 0 && *parent == ParentKind::Class,
            SyntaxNode::MethodDeclaration {
                parent,
                return_type,
                parameters,
            } => {
                *parent == ParentKind::Class
                    && is_valid_parameter_syntax(parameters)
                    && is_valid_return_syntax(return_type)
            }
            _ => false,
        },
        MarkerKind::Localize | MarkerKind::NotifyDataErrorInfo => {
            matches!(node, SyntaxNode::ClassDeclaration)
        }
    }
}

// is_valid_parameter_syntax
fn is_valid_parameter_syntax(parameters: &[String]) -> bool {
    match parameters {
        [] | [_] => true,
        [_, last] => last.rsplit(['.', ':']).next() == Some(CANCELLATION_TOKEN),
        _ => false,
    }
}

// is_valid_return_syntax
fn is_valid_return_syntax(return_type: &ReturnTypeSyntax) -> bool {
    match return_type {
        ReturnTypeSyntax::Predefined(keyword) => keyword == "void",
        ReturnTypeSyntax::Identifier(name) | ReturnTypeSyntax::Qualified(name) => {
            TASK_RETURN_SPELLINGS.contains(&name.as_str())
        }
        ReturnTypeSyntax::Other(_) => false,
    }
}

///
/// Semantic filter
///
/// Pure functions of the candidate and the host; the answer never depends on
/// other candidates.
///

#[must_use]
pub fn is_valid_field<H>(host: &H, owner: &TypeId, field: &FieldSymbol, base: &TypeId) -> bool
where
    H: Host + ?Sized,
{
    !field.is_readonly && host.inherits_from(owner, base)
}

#[must_use]
pub fn is_valid_method<H>(host: &H, owner: &TypeId, method: &MethodSymbol, base: &TypeId) -> bool
where
    H: Host + ?Sized,
{
    host.inherits_from(owner, base)
        && (method.returns_void() || method.return_type.is_task())
        && crate::command::CommandShape::infer(method).is_some()
}

#[must_use]
pub fn is_valid_localize<H>(host: &H, attributes: &[AttributeData]) -> bool
where
    H: Host + ?Sized,
{
    attribute::localize_resource(attributes)
        .is_some_and(|resource| host.additional_text(&resource).is_some())
}

#[must_use]
pub fn is_valid_validation<H>(host: &H, owner: &TypeId) -> bool
where
    H: Host + ?Sized,
{
    host.implements(owner, &TypeId::new(NOTIFY_DATA_ERROR_INFO_INTERFACE))
}

/// Both phases for one candidate of the given kind.
#[must_use]
pub fn is_eligible<H>(host: &H, kind: MarkerKind, candidate: &Candidate, base: &TypeId) -> bool
where
    H: Host + ?Sized,
{
    if !is_valid_syntax(kind, &candidate.syntax) {
        return false;
    }

    let owner = &candidate.containing_type;

    match (kind, &candidate.member) {
        (MarkerKind::Notify, CandidateMember::Field(field)) => {
            is_valid_field(host, owner, field, base)
        }
        (MarkerKind::Notify, CandidateMember::Method(method)) => {
            is_valid_method(host, owner, method, base)
        }
        (MarkerKind::Localize, CandidateMember::Type(attributes)) => {
            is_valid_localize(host, attributes)
        }
        (MarkerKind::NotifyDataErrorInfo, CandidateMember::Type(_)) => {
            is_valid_validation(host, owner)
        }
        _ => false,
    }
}

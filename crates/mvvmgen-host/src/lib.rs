//! Host collaborator contract for mvvmgen.
//!
//! The generator never parses C# itself. A host bridge (compiler plugin,
//! test harness) describes the compilation through the types in this crate:
//! symbols with their attribute data, the syntactic shape of each candidate
//! declaration, auxiliary texts, and a small oracle answering inheritance and
//! assignability questions.

pub mod attribute;
pub mod candidate;
pub mod host;
pub mod symbol;
pub mod syntax;
pub mod table;
pub mod types;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        attribute::{AttributeData, TypedConstant},
        candidate::{Candidate, CandidateMember},
        host::{AdditionalText, Cancellation, Host, NeverCancelled},
        symbol::{
            FieldSymbol, MemberLookup, MemberSymbol, MethodSymbol, ParameterSymbol, TypeDecl,
            TypeSymbol,
        },
        syntax::{ParentKind, ReturnTypeSyntax, SyntaxNode},
        table::SymbolTable,
        types::{NullableContext, TypeId, TypeRef},
    };
}

///
/// ParentKind
///
/// Kind of the declaration syntactically enclosing a member.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParentKind {
    Class,
    Struct,
    Record,
    Interface,
    Other,
}

///
/// ReturnTypeSyntax
///
/// The return type exactly as written, before semantic binding.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ReturnTypeSyntax {
    /// Keyword types such as `void` or `int`.
    Predefined(String),

    /// Single identifier such as `Task`.
    Identifier(String),

    /// Dotted name such as `System.Threading.Tasks.Task`, alias included.
    Qualified(String),

    /// Generic names, arrays, tuples and everything else.
    Other(String),
}

impl ReturnTypeSyntax {
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let text = text.trim();

        if text.contains(['<', '[', '(', '?']) {
            Self::Other(text.to_string())
        } else if text.contains(['.', ':']) {
            Self::Qualified(text.to_string())
        } else if is_keyword_type(text) {
            Self::Predefined(text.to_string())
        } else {
            Self::Identifier(text.to_string())
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Predefined(s) | Self::Identifier(s) | Self::Qualified(s) | Self::Other(s) => s,
        }
    }
}

fn is_keyword_type(text: &str) -> bool {
    matches!(
        text,
        "void"
            | "bool"
            | "byte"
            | "sbyte"
            | "char"
            | "decimal"
            | "double"
            | "float"
            | "int"
            | "uint"
            | "long"
            | "ulong"
            | "object"
            | "short"
            | "ushort"
            | "string"
    )
}

///
/// SyntaxNode
///
/// The syntactic shape of an attribute target, as much as the cheap
/// pre-filter needs to see.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SyntaxNode {
    VariableDeclarator {
        attribute_lists: usize,
        parent: ParentKind,
    },

    MethodDeclaration {
        parent: ParentKind,
        return_type: ReturnTypeSyntax,

        /// Written parameter type names, in order.
        parameters: Vec<String>,
    },

    ClassDeclaration,
    Other,
}

impl SyntaxNode {
    /// A field declarator with one attribute list inside a class.
    #[must_use]
    pub const fn field() -> Self {
        Self::VariableDeclarator {
            attribute_lists: 1,
            parent: ParentKind::Class,
        }
    }

    /// A method declared inside a class.
    #[must_use]
    pub fn method(return_type: &str, parameters: &[&str]) -> Self {
        Self::MethodDeclaration {
            parent: ParentKind::Class,
            return_type: ReturnTypeSyntax::parse(return_type),
            parameters: parameters.iter().map(ToString::to_string).collect(),
        }
    }
}

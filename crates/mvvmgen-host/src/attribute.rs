use crate::types::{TypeId, TypeRef};

///
/// TypedConstant
///
/// One attribute argument value as the host compiler evaluated it.
/// Enum-typed arguments arrive as their underlying integer.
///

#[derive(Clone, Debug, PartialEq)]
pub enum TypedConstant {
    Null,
    Bool(bool),
    Int(i64),
    Str(String),
    Type(TypeRef),
    Array(Vec<Self>),
}

impl TypedConstant {
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_array(&self) -> Option<&[Self]> {
        match self {
            Self::Array(values) => Some(values),
            _ => None,
        }
    }
}

impl From<&str> for TypedConstant {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<bool> for TypedConstant {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for TypedConstant {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

///
/// AttributeData
///
/// An applied attribute: its class plus positional and named arguments in
/// source order.
///

#[derive(Clone, Debug, PartialEq)]
pub struct AttributeData {
    pub class: TypeId,
    pub constructor_arguments: Vec<TypedConstant>,
    pub named_arguments: Vec<(String, TypedConstant)>,
}

impl AttributeData {
    #[must_use]
    pub fn new(class: impl Into<TypeId>) -> Self {
        Self {
            class: class.into(),
            constructor_arguments: Vec::new(),
            named_arguments: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_arg(mut self, value: impl Into<TypedConstant>) -> Self {
        self.constructor_arguments.push(value.into());
        self
    }

    #[must_use]
    pub fn with_named(mut self, name: &str, value: impl Into<TypedConstant>) -> Self {
        self.named_arguments.push((name.to_string(), value.into()));
        self
    }

    /// Simple class name, e.g. `NotifyAttribute`.
    #[must_use]
    pub fn name(&self) -> &str {
        self.class
            .as_str()
            .rsplit('.')
            .next()
            .unwrap_or_else(|| self.class.as_str())
    }

    #[must_use]
    pub fn is(&self, class: &str) -> bool {
        self.class.as_str() == TypeId::new(class).as_str()
    }
}

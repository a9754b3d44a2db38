
use derive_more::Display;

///
/// AccessModifier
///
/// Mirrors the generated `AccessModifier` enum; discriminants are the values
/// the host reports for enum-typed attribute arguments. A higher value is a
/// looser visibility. `Default` means unset.
///

#[derive(Clone, Copy, Debug, Default, Display, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(u8)]
pub enum AccessModifier {
    #[default]
    #[display("")]
    Default = 0,

    #[display("private")]
    Private = 1,

    #[display("private protected")]
    PrivateProtected = 2,

    #[display("protected")]
    Protected = 3,

    #[display("internal")]
    Internal = 4,

    #[display("protected internal")]
    ProtectedInternal = 5,

    #[display("public")]
    Public = 6,
}

impl AccessModifier {
    pub const ALL: [Self; 7] = [
        Self::Default,
        Self::Private,
        Self::PrivateProtected,
        Self::Protected,
        Self::Internal,
        Self::ProtectedInternal,
        Self::Public,
    ];

    #[must_use]
    pub const fn from_value(value: i64) -> Option<Self> {
        match value {
            0 => Some(Self::Default),
            1 => Some(Self::Private),
            2 => Some(Self::PrivateProtected),
            3 => Some(Self::Protected),
            4 => Some(Self::Internal),
            5 => Some(Self::ProtectedInternal),
            6 => Some(Self::Public),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_set(self) -> bool {
        !matches!(self, Self::Default)
    }

    /// Looseness rank: public is 6, private is 1, unset is 0.
    #[must_use]
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// C# keyword(s), or `None` when unset.
    #[must_use]
    pub const fn keyword(self) -> Option<&'static str> {
        match self {
            Self::Default => None,
            Self::Private => Some("private"),
            Self::PrivateProtected => Some("private protected"),
            Self::Protected => Some("protected"),
            Self::Internal => Some("internal"),
            Self::ProtectedInternal => Some("protected internal"),
            Self::Public => Some("public"),
        }
    }
}

///
/// AccessorSplit
///
/// A property-level accessibility plus at most one accessor-level override.
/// The constructors are the only way to build one, so both overrides can
/// never be set together.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AccessorSplit {
    property: AccessModifier,
    getter: Option<AccessModifier>,
    setter: Option<AccessModifier>,
}

impl AccessorSplit {
    #[must_use]
    pub const fn property_only(property: AccessModifier) -> Self {
        Self {
            property,
            getter: None,
            setter: None,
        }
    }

    #[must_use]
    pub const fn with_getter(property: AccessModifier, getter: AccessModifier) -> Self {
        Self {
            property,
            getter: Some(getter),
            setter: None,
        }
    }

    #[must_use]
    pub const fn with_setter(property: AccessModifier, setter: AccessModifier) -> Self {
        Self {
            property,
            getter: None,
            setter: Some(setter),
        }
    }

    /// Reduce independent getter and setter requests; `None` and
    /// `Some(Default)` both mean unset. First matching rule wins:
    ///
    /// 1. internal/protected in either order: `protected internal` property,
    ///    the setter request stays as the override;
    /// 2. getter unset or at least as loose as the setter: property takes the
    ///    getter (public when unset), a setter equal to it is dropped;
    /// 3. otherwise the property takes the setter and the getter narrows.
    #[must_use]
    pub fn resolve(getter: Option<AccessModifier>, setter: Option<AccessModifier>) -> Self {
        use AccessModifier::{Internal, Protected, ProtectedInternal, Public};

        let getter = getter.unwrap_or_default();
        let setter = setter.unwrap_or_default();

        match (getter, setter) {
            (Internal, Protected) | (Protected, Internal) => {
                Self::with_setter(ProtectedInternal, setter)
            }

            (g, s) if !g.is_set() || g.rank() >= s.rank() => {
                let property = if g.is_set() { g } else { Public };

                if !s.is_set() || s == property {
                    Self::property_only(property)
                } else {
                    Self::with_setter(property, s)
                }
            }

            (g, s) => Self::with_getter(s, g),
        }
    }

    #[must_use]
    pub const fn property(&self) -> AccessModifier {
        self.property
    }

    #[must_use]
    pub const fn getter(&self) -> Option<AccessModifier> {
        self.getter
    }

    #[must_use]
    pub const fn setter(&self) -> Option<AccessModifier> {
        self.setter
    }
}

impl Default for AccessorSplit {
    fn default() -> Self {
        Self::property_only(AccessModifier::Public)
    }
}

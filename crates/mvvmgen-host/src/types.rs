use derive_more::{Deref, Display};

const GLOBAL_ALIAS: &str = "global::";

///
/// NullableContext
///
/// The compilation-wide nullable reference type mode.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum NullableContext {
    #[default]
    Disabled,
    Annotations,
    Enabled,
}

impl NullableContext {
    /// Whether `?` annotations are meaningful in emitted signatures.
    #[must_use]
    pub const fn has_annotations(self) -> bool {
        matches!(self, Self::Annotations | Self::Enabled)
    }

    /// The `?` suffix threaded through generated reference-type signatures.
    #[must_use]
    pub const fn marker(self) -> &'static str {
        if self.has_annotations() { "?" } else { "" }
    }

    /// The `#nullable` directive written at the top of each unit, if any.
    #[must_use]
    pub const fn directive(self) -> Option<&'static str> {
        match self {
            Self::Disabled => None,
            Self::Annotations => Some("#nullable enable annotations"),
            Self::Enabled => Some("#nullable enable"),
        }
    }
}

///
/// TypeId
///
/// Metadata-style type identity, e.g. `Minimal.Mvvm.BindableBase`.
/// Never carries the `global::` alias or a nullable annotation.
///

#[derive(Clone, Debug, Deref, Display, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct TypeId(String);

impl TypeId {
    #[must_use]
    pub fn new(name: impl AsRef<str>) -> Self {
        let name = name.as_ref();

        Self(name.strip_prefix(GLOBAL_ALIAS).unwrap_or(name).to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Fully qualified display form with the `global::` alias.
    #[must_use]
    pub fn qualified(&self) -> String {
        format!("{GLOBAL_ALIAS}{}", self.0)
    }
}

impl From<&str> for TypeId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

///
/// TypeRef
///
/// A type as it appears in a symbol signature: the fully qualified display
/// name (keyword for special types, `global::` prefix otherwise) plus the
/// nullable annotation carried at the use site.
///

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct TypeRef {
    pub name: String,
    pub nullable: bool,
}

impl TypeRef {
    pub const VOID: &'static str = "void";
    pub const TASK: &'static str = "global::System.Threading.Tasks.Task";
    pub const CANCELLATION_TOKEN: &'static str = "global::System.Threading.CancellationToken";

    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            nullable: false,
        }
    }

    #[must_use]
    pub fn nullable(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            nullable: true,
        }
    }

    #[must_use]
    pub fn void() -> Self {
        Self::new(Self::VOID)
    }

    #[must_use]
    pub fn task() -> Self {
        Self::new(Self::TASK)
    }

    #[must_use]
    pub fn cancellation_token() -> Self {
        Self::new(Self::CANCELLATION_TOKEN)
    }

    /// Display text including the nullable annotation.
    #[must_use]
    pub fn display(&self) -> String {
        if self.nullable {
            format!("{}?", self.name)
        } else {
            self.name.clone()
        }
    }

    #[must_use]
    pub fn id(&self) -> TypeId {
        TypeId::new(&self.name)
    }

    #[must_use]
    pub fn is_void(&self) -> bool {
        self.name == Self::VOID
    }

    #[must_use]
    pub fn is_task(&self) -> bool {
        self.id() == TypeId::new(Self::TASK)
    }

    #[must_use]
    pub fn is_cancellation_token(&self) -> bool {
        self.id() == TypeId::new(Self::CANCELLATION_TOKEN)
    }

    /// Last dotted segment of the name, generic arguments excluded.
    #[must_use]
    pub fn simple_name(&self) -> &str {
        let head = self.name.split('<').next().unwrap_or(&self.name);

        head.rsplit(['.', ':']).next().unwrap_or(head)
    }
}

use crate::emit::writer::CodeWriter;
use mvvmgen_host::prelude::*;

pub const HINT_SUFFIX: &str = ".g.cs";

///
/// SourceUnit
///
/// One named source text handed back to the host.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SourceUnit {
    pub hint_name: String,
    pub text: String,
}

impl SourceUnit {
    #[must_use]
    pub fn new(hint_name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            hint_name: hint_name.into(),
            text: text.into(),
        }
    }
}

///
/// UnitHeader
///
/// The auto-generated banner and nullable directive opening every emitted
/// unit except the fixed marker declarations.
///

#[derive(Clone, Copy, Debug)]
pub struct UnitHeader<'a> {
    pub tool_name: &'a str,
    pub tool_version: &'a str,
    pub nullable: NullableContext,
}

impl UnitHeader<'_> {
    pub fn write(&self, w: &mut CodeWriter) {
        w.write_line("// <auto-generated>");
        w.write_line(&format!(
            "//     Auto-generated by {} {}",
            self.tool_name, self.tool_version
        ));
        w.write_line("// </auto-generated>");
        w.blank_line();

        if let Some(directive) = self.nullable.directive() {
            w.write_line(directive);
            w.blank_line();
        }
    }
}

/// `Namespace.Outer.Type`, then `` `arity `` for generic types, then `.g.cs`.
#[must_use]
pub fn hint_name(ty: &TypeSymbol) -> String {
    let mut hint = ty.id().as_str().to_string();

    if let Some(arity) = ty.declaration().map(TypeDecl::arity).filter(|a| *a > 0) {
        hint.push('`');
        hint.push_str(&arity.to_string());
    }
    hint.push_str(HINT_SUFFIX);

    hint
}

///
/// TypeUnit
///
/// The unit for one enclosing type: header, namespace and `partial`
/// wrappers mirroring the nesting, then members separated by blank lines.
///

#[derive(Debug)]
pub struct TypeUnit {
    hint_name: String,
    writer: CodeWriter,
    open_scopes: usize,
    members: usize,
}

impl TypeUnit {
    #[must_use]
    pub fn begin(header: &UnitHeader<'_>, ty: &TypeSymbol) -> Self {
        let mut writer = CodeWriter::new();
        header.write(&mut writer);

        let mut open_scopes = 0;

        if let Some(ns) = ty.namespace.as_deref().filter(|ns| !ns.is_empty()) {
            writer.write_line(&format!("namespace {ns}"));
            writer.open_block();
            open_scopes += 1;
        }

        for decl in &ty.declarations {
            writer.write_line(&format!("partial {}", decl.declaration()));
            writer.open_block();
            open_scopes += 1;
        }

        Self {
            hint_name: hint_name(ty),
            writer,
            open_scopes,
            members: 0,
        }
    }

    /// Start the next member, separating it from the previous one.
    pub fn begin_member(&mut self) -> &mut CodeWriter {
        if self.members > 0 {
            self.writer.blank_line();
        }
        self.members += 1;

        &mut self.writer
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.members == 0
    }

    #[must_use]
    pub fn hint_name(&self) -> &str {
        &self.hint_name
    }

    /// Close every scope; `None` when no member was written.
    #[must_use]
    pub fn finish(mut self) -> Option<SourceUnit> {
        if self.is_empty() {
            return None;
        }

        for _ in 0..self.open_scopes {
            self.writer.close_block();
        }

        Some(SourceUnit::new(self.hint_name, self.writer.into_string()))
    }
}

/// A shared unit holding `body` inside `namespace`.
#[must_use]
pub fn namespaced_unit(
    header: &UnitHeader<'_>,
    hint_name: &str,
    namespace: &str,
    body: impl FnOnce(&mut CodeWriter),
) -> SourceUnit {
    let mut writer = CodeWriter::new();
    header.write(&mut writer);
    writer.block(&format!("namespace {namespace}"), body);

    SourceUnit::new(hint_name, writer.into_string())
}

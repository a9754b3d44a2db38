use crate::{
    symbol::TypeSymbol,
    types::{NullableContext, TypeId, TypeRef},
};
use std::sync::atomic::{AtomicBool, Ordering};

///
/// AdditionalText
///
/// A host-materialized auxiliary file; the core never touches the filesystem.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AdditionalText {
    pub path: String,
    pub text: String,
}

impl AdditionalText {
    #[must_use]
    pub fn new(path: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            text: text.into(),
        }
    }

    /// File name with any directory part removed.
    #[must_use]
    pub fn file_name(&self) -> &str {
        file_name(&self.path)
    }
}

/// Directory-independent file name; accepts both separator styles.
#[must_use]
pub fn file_name(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

///
/// Host
///
/// The compilation oracle. Every query is pure for the duration of a pass.
///

pub trait Host {
    fn nullable_context(&self) -> NullableContext;

    fn additional_texts(&self) -> &[AdditionalText];

    fn type_symbol(&self, id: &TypeId) -> Option<&TypeSymbol>;

    /// Whether `ty` has `base` somewhere on its base-class chain (not itself).
    fn inherits_from(&self, ty: &TypeId, base: &TypeId) -> bool;

    /// Whether `ty` implements `interface`, directly or through a base.
    fn implements(&self, ty: &TypeId, interface: &TypeId) -> bool;

    /// Whether a value of type `from` can be passed where `to` is expected.
    fn is_assignable(&self, from: &TypeRef, to: &TypeRef) -> bool;

    /// Look up an auxiliary text by its file name.
    fn additional_text(&self, name: &str) -> Option<&AdditionalText> {
        let name = file_name(name);

        self.additional_texts()
            .iter()
            .find(|text| text.file_name() == name)
    }
}

///
/// Cancellation
///
/// The host's cancellation flag, polled once per candidate.
///

pub trait Cancellation {
    fn is_cancelled(&self) -> bool;
}

///
/// NeverCancelled
///

#[derive(Clone, Copy, Debug, Default)]
pub struct NeverCancelled;

impl Cancellation for NeverCancelled {
    fn is_cancelled(&self) -> bool {
        false
    }
}

impl Cancellation for AtomicBool {
    fn is_cancelled(&self) -> bool {
        self.load(Ordering::Relaxed)
    }
}

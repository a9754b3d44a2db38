
use crate::{
    host::{AdditionalText, Host},
    symbol::TypeSymbol,
    types::{NullableContext, TypeId, TypeRef},
};
use std::collections::{HashMap, HashSet};

const OBJECT_KEYWORD: &str = "object";
const OBJECT_TYPE: &str = "System.Object";

///
/// SymbolTable
///
/// In-memory `Host` over a fixed set of type symbols. Types referenced as a
/// base or interface need not be registered; their own supertypes are then
/// simply unknown.
///

#[derive(Clone, Debug, Default)]
pub struct SymbolTable {
    nullable: NullableContext,
    types: HashMap<TypeId, TypeSymbol>,
    texts: Vec<AdditionalText>,
}

impl SymbolTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn with_nullable(mut self, nullable: NullableContext) -> Self {
        self.nullable = nullable;
        self
    }

    #[must_use]
    pub fn with_type(mut self, ty: TypeSymbol) -> Self {
        self.insert_type(ty);
        self
    }

    #[must_use]
    pub fn with_text(mut self, path: &str, text: &str) -> Self {
        self.texts.push(AdditionalText::new(path, text));
        self
    }

    /// Register a type, replacing any earlier symbol with the same identity.
    pub fn insert_type(&mut self, ty: TypeSymbol) {
        self.types.insert(ty.id(), ty);
    }

    // supertypes
    // every base class and interface reachable from `ty`, excluding itself
    fn supertypes(&self, ty: &TypeId) -> HashSet<TypeId> {
        let mut seen = HashSet::new();
        let mut pending = vec![ty.clone()];

        while let Some(current) = pending.pop() {
            let Some(symbol) = self.types.get(&current) else {
                continue;
            };

            for next in symbol.base_type.iter().chain(&symbol.interfaces) {
                if next != ty && seen.insert(next.clone()) {
                    pending.push(next.clone());
                }
            }
        }

        seen
    }
}

impl Host for SymbolTable {
    fn nullable_context(&self) -> NullableContext {
        self.nullable
    }

    fn additional_texts(&self) -> &[AdditionalText] {
        &self.texts
    }

    fn type_symbol(&self, id: &TypeId) -> Option<&TypeSymbol> {
        self.types.get(id)
    }

    fn inherits_from(&self, ty: &TypeId, base: &TypeId) -> bool {
        let mut seen = HashSet::new();
        let mut current = self.types.get(ty).and_then(|s| s.base_type.as_ref());

        while let Some(id) = current {
            if id == base {
                return true;
            }
            if !seen.insert(id) {
                return false;
            }
            current = self.types.get(id).and_then(|s| s.base_type.as_ref());
        }

        false
    }

    fn implements(&self, ty: &TypeId, interface: &TypeId) -> bool {
        self.supertypes(ty).contains(interface)
    }

    fn is_assignable(&self, from: &TypeRef, to: &TypeRef) -> bool {
        let (from, to) = (from.id(), to.id());

        if matches!(to.as_str(), OBJECT_KEYWORD | OBJECT_TYPE) || from == to {
            return true;
        }

        self.supertypes(&from).contains(&to)
    }
}

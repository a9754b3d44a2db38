use crate::{
    emit::{
        literal::string_literal,
        unit::{SourceUnit, UnitHeader, namespaced_unit},
    },
    names::{notification_name, sanitize_identifier},
};
use indexmap::{IndexMap, IndexSet};

pub const CACHE_NAMESPACE: &str = "Minimal.Mvvm";
pub const CACHE_CLASS: &str = "EventArgsCache";
pub const CACHE_HINT_NAME: &str = "EventArgsCache.g.cs";

const EVENT_ARGS_TYPE: &str = "global::System.ComponentModel.PropertyChangedEventArgs";

///
/// EventArgsCachePlan
///
/// Pass-scoped accumulator of property names that need a shared
/// `PropertyChangedEventArgs`. Tokens are keyed by property name, in
/// first-registration order; registering a name again is a no-op. Names
/// that sanitize to the same identifier get a numeric suffix.
///

#[derive(Clone, Debug, Default)]
pub struct EventArgsCachePlan {
    active: bool,
    tokens: IndexMap<String, String>,
    idents: IndexSet<String>,
}

impl EventArgsCachePlan {
    #[must_use]
    pub fn new(active: bool) -> Self {
        Self {
            active,
            tokens: IndexMap::new(),
            idents: IndexSet::new(),
        }
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Registered property names in first-registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tokens.keys().map(String::as_str)
    }

    /// Register `name` and return the qualified reference to its token.
    pub fn register(&mut self, name: &str) -> String {
        let name = notification_name(name);

        let ident = match self.tokens.get(name) {
            Some(ident) => ident.clone(),
            None => {
                let ident = self.unique_ident(name);
                self.idents.insert(ident.clone());
                self.tokens.insert(name.to_string(), ident.clone());
                ident
            }
        };

        format!("global::{CACHE_NAMESPACE}.{CACHE_CLASS}.{ident}PropertyChanged")
    }

    /// The notification argument for `name`: a cached token when the plan is
    /// active, otherwise a string literal.
    pub fn argument(&mut self, name: &str) -> String {
        if self.active {
            self.register(name)
        } else {
            string_literal(notification_name(name))
        }
    }

    /// The shared holder unit, or `None` if nothing was registered.
    #[must_use]
    pub fn emit(&self, header: &UnitHeader<'_>) -> Option<SourceUnit> {
        if self.tokens.is_empty() {
            return None;
        }

        let unit = namespaced_unit(header, CACHE_HINT_NAME, CACHE_NAMESPACE, |w| {
            w.block(&format!("internal static partial class {CACHE_CLASS}"), |w| {
                for (name, ident) in &self.tokens {
                    w.write_line(&format!(
                        "internal static readonly {EVENT_ARGS_TYPE} {ident}PropertyChanged = new {EVENT_ARGS_TYPE}({});",
                        string_literal(name)
                    ));
                }
            });
        });

        Some(unit)
    }

    // unique_ident
    // first free identifier among `base`, `base2`, `base3`, ...
    fn unique_ident(&self, name: &str) -> String {
        let base = sanitize_identifier(name);
        let mut ident = base.clone();
        let mut n = 1_usize;

        while self.idents.contains(&ident) {
            n += 1;
            ident = format!("{base}{n}");
        }

        ident
    }
}

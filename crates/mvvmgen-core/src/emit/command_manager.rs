use crate::emit::{
    template,
    unit::{SourceUnit, UnitHeader, namespaced_unit},
};

pub const MANAGER_NAMESPACE: &str = "Minimal.Mvvm";
pub const MANAGER_HINT_NAME: &str = "RequerySuggestedEventManager.g.cs";
pub const MANAGER_TYPE: &str = "global::Minimal.Mvvm.RequerySuggestedEventManager";

const MANAGER_TEMPLATE: &str = include_str!("templates/requery_suggested_event_manager.cs");

///
/// CommandManagerPlan
///
/// Records whether any property of the pass re-subscribes commands to the
/// requery event; if so the helper type is emitted once at the end.
///

#[derive(Clone, Copy, Debug, Default)]
pub struct CommandManagerPlan {
    used: bool,
}

impl CommandManagerPlan {
    pub const fn mark_used(&mut self) {
        self.used = true;
    }

    #[must_use]
    pub const fn is_used(&self) -> bool {
        self.used
    }

    #[must_use]
    pub fn emit(&self, header: &UnitHeader<'_>) -> Option<SourceUnit> {
        if !self.used {
            return None;
        }

        let source = template::substitute(MANAGER_TEMPLATE, header.nullable.marker());
        let unit = namespaced_unit(header, MANAGER_HINT_NAME, MANAGER_NAMESPACE, |w| {
            template::write_relative(w, &source);
        });

        Some(unit)
    }
}

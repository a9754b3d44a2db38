//! C# text emission.
//!
//! Emitters write into a `CodeWriter` owned by the current unit. The
//! pass-wide planners are threaded through `EmitContext` by mutable
//! reference; nothing here is global.

pub mod command_manager;
pub mod event_args;
pub mod literal;
pub mod localize;
pub mod markers;
pub mod member;
pub mod template;
pub mod unit;
pub mod validation;
pub mod writer;


use crate::emit::{command_manager::CommandManagerPlan, event_args::EventArgsCachePlan};
use mvvmgen_host::prelude::*;

///
/// EmitContext
///

#[derive(Debug)]
pub struct EmitContext<'a> {
    pub nullable: NullableContext,
    pub event_args: &'a mut EventArgsCachePlan,
    pub command_manager: &'a mut CommandManagerPlan,
}

impl EmitContext<'_> {
    /// The `?` suffix for generated reference-type signatures.
    #[must_use]
    pub const fn marker(&self) -> &'static str {
        self.nullable.marker()
    }
}

//! Generation pipeline and decision engine for Minimal.Mvvm observable
//! properties.
//!
//! A pass takes the candidates a host surfaced, filters them, normalizes
//! their attribute data into decision records and writes one C# source unit
//! per enclosing type, plus the shared units derived from the whole pass.

pub mod access;
pub mod attribute;
pub mod callback;
pub mod command;
pub mod decision;
pub mod emit;
pub mod error;
pub mod names;
pub mod pass;
pub mod predicate;

pub use error::Error;

use thiserror::Error as ThisError;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        access::{AccessModifier, AccessorSplit},
        callback::Callback,
        command::{CommandKind, CommandShape},
        decision::{Backing, DecisionError, NotifyDecision},
        emit::{
            event_args::EventArgsCachePlan, localize::LocalizeDecision, unit::SourceUnit,
        },
        error::Error,
        pass::{GenerationPass, Generator, GeneratorOutput, Options},
        predicate::MarkerKind,
    };
    pub use mvvmgen_host::prelude::*;
}

use crate::{ThisError, decision::DecisionError, emit::localize::LocalizationError};

///
/// Error
///
/// Per-candidate and per-type failures are logged and isolated inside the
/// pass; only cancellation escapes `Generator::run`. The wrapping variants
/// serve hosts that build `NotifyDecision` or `LocalizeDecision` directly
/// and propagate with `?`.
///

#[remain::sorted]
#[derive(Debug, ThisError)]
pub enum Error {
    #[error("generation pass cancelled by the host")]
    Cancelled,

    #[error(transparent)]
    DecisionError(#[from] DecisionError),

    #[error(transparent)]
    LocalizationError(#[from] LocalizationError),
}

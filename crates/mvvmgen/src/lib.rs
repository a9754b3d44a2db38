//! ## Crate layout
//! - `host`: the contract a compiler host implements (symbols, candidates,
//!   additional texts, cancellation).
//! - `core`: eligibility, decision records and C# emission for one pass.
//! - `config`: TOML configuration mapped onto pass options.
//!
//! The `prelude` module is what a host integration usually needs.


pub use mvvmgen_config as config;
pub use mvvmgen_core as core;
pub use mvvmgen_host as host;

use crate::{
    config::{ConfigError, GeneratorConfig},
    core::pass::{Generator, GeneratorOutput},
    host::prelude::{Candidate, Cancellation, Host},
};
use thiserror::Error as ThisError;
use tracing::info;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Error
///

#[remain::sorted]
#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Generate(#[from] crate::core::Error),
}

/// Parse `config_source` and run one pass with the resulting options.
pub fn generate<H, C>(
    config_source: &str,
    host: &H,
    candidates: &[Candidate],
    cancellation: &C,
) -> Result<GeneratorOutput, Error>
where
    H: Host + ?Sized,
    C: Cancellation + ?Sized,
{
    let config = GeneratorConfig::from_toml_str(config_source)?;

    generate_with(&config, host, candidates, cancellation)
}

/// Run one pass with an already loaded configuration.
pub fn generate_with<H, C>(
    config: &GeneratorConfig,
    host: &H,
    candidates: &[Candidate],
    cancellation: &C,
) -> Result<GeneratorOutput, Error>
where
    H: Host + ?Sized,
    C: Cancellation + ?Sized,
{
    let output = Generator::new(config.to_options()).run(host, candidates, cancellation)?;

    info!(
        candidates = candidates.len(),
        units = output.units().len(),
        "mvvmgen pass complete"
    );

    Ok(output)
}

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        Error, VERSION,
        config::{ConfigError, GeneratorConfig},
        generate, generate_with,
    };
    pub use mvvmgen_core::prelude::*;
}

pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod ffi;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{open_oracle, LinkedOracle, NativeOracle};
pub use config::toml_config::TomlConfig;
pub use crate::core::{
    check::PrimeCheck,
    primality::{is_prime, TrialDivisionOracle},
    report::Reporter,
    Candidate, CheckSettings, OracleSource, PrimalityOracle, Verdict,
};
pub use utils::error::{PrimeError, Result};

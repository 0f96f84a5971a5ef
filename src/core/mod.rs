pub mod check;
pub mod primality;
pub mod report;

pub use crate::domain::model::{Candidate, CheckSettings, OracleSource, Verdict};
pub use crate::domain::ports::PrimalityOracle;
pub use crate::utils::error::Result;

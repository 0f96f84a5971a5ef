use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// The number under test. `u32` matches C `unsigned int` across the ABI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Candidate(pub u32);

impl Candidate {
    pub const DEFAULT: Candidate = Candidate(1_234_567);

    pub fn value(self) -> u32 {
        self.0
    }
}

impl Default for Candidate {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<u32> for Candidate {
    fn from(value: u32) -> Self {
        Candidate(value)
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A candidate paired with the oracle's answer. `Display` is the report line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    pub candidate: Candidate,
    pub is_prime: bool,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_prime {
            write!(f, "{} is prime", self.candidate)
        } else {
            write!(f, "{} is not prime", self.candidate)
        }
    }
}

pub const DEFAULT_SYMBOL: &str = "is_prime";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OracleSource {
    /// The crate's own exported `is_prime`.
    #[default]
    Builtin,
    /// A shared library loaded at run time.
    Library { path: PathBuf, symbol: String },
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CheckSettings {
    pub candidate: Candidate,
    pub oracle: OracleSource,
}

use crate::domain::model::Candidate;
use crate::domain::ports::PrimalityOracle;

/// Trial division over 6k ± 1.
///
/// Runs in `u64` so `i * i` cannot overflow for candidates near `u32::MAX`.
pub fn is_prime(n: u32) -> bool {
    let n = u64::from(n);
    if n < 2 {
        return false;
    }
    if n < 4 {
        return true;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }

    let mut i = 5u64;
    while i * i <= n {
        if n % i == 0 || n % (i + 2) == 0 {
            return false;
        }
        i += 6;
    }
    true
}

/// Pure Rust oracle, no ABI crossing.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrialDivisionOracle;

impl PrimalityOracle for TrialDivisionOracle {
    fn is_prime(&self, candidate: Candidate) -> bool {
        is_prime(candidate.value())
    }

    fn name(&self) -> &str {
        "trial-division"
    }
}

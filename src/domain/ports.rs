use crate::domain::model::Candidate;

/// Decides primality for a single candidate. Total over `u32`.
pub trait PrimalityOracle {
    fn is_prime(&self, candidate: Candidate) -> bool;

    /// Short label used in logs.
    fn name(&self) -> &str;
}

impl<O: PrimalityOracle + ?Sized> PrimalityOracle for Box<O> {
    fn is_prime(&self, candidate: Candidate) -> bool {
        (**self).is_prime(candidate)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

use crate::core::report::Reporter;
use crate::core::PrimalityOracle;
use crate::domain::model::{Candidate, Verdict};
use crate::utils::error::Result;
use std::io::Write;

pub struct PrimeCheck<O: PrimalityOracle> {
    oracle: O,
}

impl<O: PrimalityOracle> PrimeCheck<O> {
    pub fn new(oracle: O) -> Self {
        Self { oracle }
    }

    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    /// Asks the oracle once and reports the answer.
    pub fn run<W: Write>(&self, candidate: Candidate, reporter: &mut Reporter<W>) -> Result<Verdict> {
        tracing::debug!(oracle = self.oracle.name(), %candidate, "Checking primality");

        let verdict = Verdict {
            candidate,
            is_prime: self.oracle.is_prime(candidate),
        };
        tracing::debug!(is_prime = verdict.is_prime, "Oracle answered");

        reporter.report(&verdict)?;
        Ok(verdict)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct CountingOracle {
        answer: bool,
        calls: Cell<usize>,
    }

    impl PrimalityOracle for CountingOracle {
        fn is_prime(&self, _candidate: Candidate) -> bool {
            self.calls.set(self.calls.get() + 1);
            self.answer
        }

        fn name(&self) -> &str {
            "counting"
        }
    }

    #[test]
    fn test_run_asks_oracle_once() {
        let check = PrimeCheck::new(CountingOracle {
            answer: true,
            calls: Cell::new(0),
        });
        let mut reporter = Reporter::new(Vec::new());

        let verdict = check.run(Candidate(42), &mut reporter).unwrap();

        assert_eq!(check.oracle().calls.get(), 1);
        assert!(verdict.is_prime);
        // output mirrors the oracle, even when it is wrong
        let out = String::from_utf8(reporter.into_inner()).unwrap();
        assert_eq!(out, "42 is prime\n");
    }
}

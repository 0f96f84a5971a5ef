use prime_oracle::{
    open_oracle, Candidate, LinkedOracle, OracleSource, PrimalityOracle, PrimeCheck, PrimeError,
    Reporter, TrialDivisionOracle,
};

fn report_with<O: PrimalityOracle>(oracle: O, n: u32) -> String {
    let check = PrimeCheck::new(oracle);
    let mut reporter = Reporter::new(Vec::new());
    check.run(Candidate(n), &mut reporter).unwrap();
    String::from_utf8(reporter.into_inner()).unwrap()
}

#[test]
fn test_primes_report_is_prime() {
    for p in [2u32, 3, 5, 127, 9721, 104_729, 2_147_483_647] {
        assert_eq!(report_with(LinkedOracle::new(), p), format!("{} is prime\n", p));
    }
}

#[test]
fn test_composites_report_is_not_prime() {
    for c in [4u32, 6, 9, 1_234_567, 2_147_483_649, u32::MAX] {
        assert_eq!(
            report_with(LinkedOracle::new(), c),
            format!("{} is not prime\n", c)
        );
    }
}

#[test]
fn test_zero_and_one_are_not_prime() {
    assert_eq!(report_with(TrialDivisionOracle, 0), "0 is not prime\n");
    assert_eq!(report_with(TrialDivisionOracle, 1), "1 is not prime\n");
}

#[test]
fn test_linked_and_pure_oracles_agree() {
    let linked = LinkedOracle::new();
    let pure = TrialDivisionOracle;

    for n in (0..50_000u32).chain(u32::MAX - 1_000..=u32::MAX) {
        assert_eq!(
            linked.is_prime(Candidate(n)),
            pure.is_prime(Candidate(n)),
            "oracles disagree on {}",
            n
        );
    }
}

#[test]
fn test_stub_oracle_is_substitutable() {
    struct AlwaysPrime;

    impl PrimalityOracle for AlwaysPrime {
        fn is_prime(&self, _candidate: Candidate) -> bool {
            true
        }

        fn name(&self) -> &str {
            "always-prime"
        }
    }

    assert_eq!(report_with(AlwaysPrime, 1_234_567), "1234567 is prime\n");
}

#[test]
fn test_boxed_oracle_from_source() {
    let oracle = open_oracle(&OracleSource::Builtin).unwrap();
    assert_eq!(report_with(oracle, 1_234_567), "1234567 is not prime\n");

    let missing = open_oracle(&OracleSource::Library {
        path: "/nonexistent/libprime.so".into(),
        symbol: "is_prime".to_string(),
    });
    assert!(matches!(missing, Err(PrimeError::LibraryLoad { .. })));
}

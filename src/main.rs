use clap::Parser;
use prime_oracle::utils::logger;
use prime_oracle::{open_oracle, CliConfig, PrimeCheck, PrimeError, Reporter};

fn main() {
    let config = CliConfig::parse();

    let log = logger::init_cli_logger(config.verbose);
    tracing::info!("Starting primecheck");

    let file = config.load_file().unwrap_or_else(|e| fail(e));
    // 設定檔也可以打開 verbose
    if !config.verbose && config.verbose_with(file.as_ref()) {
        log.set_verbose(true);
    }
    tracing::debug!("CLI config: {:?}", config);

    let settings = config
        .resolve_with(file.as_ref())
        .unwrap_or_else(|e| fail(e));
    let oracle = open_oracle(&settings.oracle).unwrap_or_else(|e| fail(e));

    let check = PrimeCheck::new(oracle);
    let mut reporter = Reporter::stdout();
    let verdict = check
        .run(settings.candidate, &mut reporter)
        .unwrap_or_else(|e| fail(e));

    tracing::info!("✅ {}", verdict);
}

fn fail(e: PrimeError) -> ! {
    tracing::error!("❌ primecheck failed: {}", e);
    eprintln!("❌ {}", e.user_friendly_message());
    std::process::exit(e.exit_code());
}

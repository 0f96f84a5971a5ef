use tracing_subscriber::{
    layer::SubscriberExt, reload, util::SubscriberInitExt, EnvFilter, Registry,
};

/// Both the library and the `primecheck` binary log under their own targets.
pub fn default_directives(verbose: bool) -> &'static str {
    if verbose {
        "prime_oracle=debug,primecheck=debug,info"
    } else {
        "prime_oracle=warn,primecheck=warn"
    }
}

fn cli_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)))
}

/// Lets the filter be raised after a config file has been read.
pub struct LogHandle(reload::Handle<EnvFilter, Registry>);

impl LogHandle {
    pub fn set_verbose(&self, verbose: bool) {
        if let Err(e) = self.0.reload(cli_filter(verbose)) {
            tracing::warn!("Could not change log filter: {}", e);
        }
    }
}

/// Logs go to stderr; stdout only carries the verdict line.
pub fn init_cli_logger(verbose: bool) -> LogHandle {
    let (filter, handle) = reload::Layer::new(cli_filter(verbose));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();

    LogHandle(handle)
}

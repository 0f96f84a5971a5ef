pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

#[cfg(feature = "cli")]
mod cli {
    use super::toml_config::TomlConfig;
    use crate::core::{Candidate, CheckSettings, OracleSource};
    use crate::domain::model::DEFAULT_SYMBOL;
    use crate::utils::error::{PrimeError, Result};
    use crate::utils::validation::{validate_path, validate_symbol_name, Validate};
    use clap::Parser;
    use serde::{Deserialize, Serialize};
    use std::path::PathBuf;

    #[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
    #[command(name = "primecheck")]
    #[command(about = "Check whether a number is prime through a native is_prime")]
    pub struct CliConfig {
        #[arg(long, help = "Number to test [default: 1234567]")]
        pub candidate: Option<u32>,

        #[arg(long, help = "Shared library exporting is_prime(unsigned int) -> bool")]
        pub library: Option<PathBuf>,

        #[arg(long, help = "Symbol to resolve in --library [default: is_prime]")]
        pub symbol: Option<String>,

        #[arg(long, help = "TOML configuration file")]
        pub config: Option<PathBuf>,

        #[arg(long, help = "Enable verbose output")]
        pub verbose: bool,
    }

    impl CliConfig {
        pub fn load_file(&self) -> Result<Option<TomlConfig>> {
            let Some(path) = &self.config else {
                return Ok(None);
            };

            let file = TomlConfig::from_file(path)?;
            file.validate()?;
            Ok(Some(file))
        }

        /// Flags win over the file, the file wins over defaults.
        pub fn resolve_with(&self, file: Option<&TomlConfig>) -> Result<CheckSettings> {
            self.validate()?;

            let candidate = self
                .candidate
                .map(Candidate)
                .or_else(|| file.and_then(|f| f.candidate()))
                .unwrap_or_default();

            let library = self
                .library
                .clone()
                .or_else(|| file.and_then(|f| f.library()).map(PathBuf::from));

            let symbol = self
                .symbol
                .clone()
                .or_else(|| file.and_then(|f| f.symbol()).map(str::to_string));

            let oracle = match (library, symbol) {
                (Some(path), symbol) => OracleSource::Library {
                    path,
                    symbol: symbol.unwrap_or_else(|| DEFAULT_SYMBOL.to_string()),
                },
                (None, Some(symbol)) => {
                    return Err(PrimeError::InvalidConfigValueError {
                        field: "symbol".to_string(),
                        value: symbol,
                        reason: "--symbol requires --library".to_string(),
                    })
                }
                (None, None) => OracleSource::Builtin,
            };

            Ok(CheckSettings { candidate, oracle })
        }

        pub fn resolve(&self) -> Result<CheckSettings> {
            let file = self.load_file()?;
            self.resolve_with(file.as_ref())
        }

        pub fn verbose_with(&self, file: Option<&TomlConfig>) -> bool {
            self.verbose || file.map(TomlConfig::verbose).unwrap_or(false)
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            if let Some(library) = &self.library {
                validate_path("library", &library.to_string_lossy())?;
            }
            if let Some(symbol) = &self.symbol {
                validate_symbol_name("symbol", symbol)?;
            }
            if let Some(config) = &self.config {
                validate_path("config", &config.to_string_lossy())?;
            }
            Ok(())
        }
    }

}

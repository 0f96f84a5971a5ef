use crate::core::Candidate;
use crate::utils::error::{PrimeError, Result};
use crate::utils::validation::{validate_path, validate_symbol_name, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub check: Option<CheckConfig>,
    pub oracle: Option<OracleConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckConfig {
    pub candidate: Option<Candidate>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OracleConfig {
    pub library: Option<String>,
    pub symbol: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub verbose: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|source| PrimeError::ConfigReadError {
                path: path.display().to_string(),
                source,
            })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| PrimeError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${PRIME_LIB_DIR})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| PrimeError::ConfigError {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn candidate(&self) -> Option<Candidate> {
        self.check.as_ref().and_then(|c| c.candidate)
    }

    pub fn library(&self) -> Option<&str> {
        self.oracle.as_ref().and_then(|o| o.library.as_deref())
    }

    pub fn symbol(&self) -> Option<&str> {
        self.oracle.as_ref().and_then(|o| o.symbol.as_deref())
    }

    pub fn verbose(&self) -> bool {
        self.logging
            .as_ref()
            .and_then(|l| l.verbose)
            .unwrap_or(false)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(library) = self.library() {
            validate_path("oracle.library", library)?;
        }

        if let Some(symbol) = self.symbol() {
            validate_symbol_name("oracle.symbol", symbol)?;
            if self.library().is_none() {
                return Err(PrimeError::InvalidConfigValueError {
                    field: "oracle.symbol".to_string(),
                    value: symbol.to_string(),
                    reason: "A symbol needs oracle.library to resolve it from".to_string(),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[check]
candidate = 9721

[oracle]
library = "./libprime.so"
symbol = "is_prime"

[logging]
verbose = true
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.candidate(), Some(Candidate(9721)));
        assert_eq!(config.library(), Some("./libprime.so"));
        assert!(config.verbose());
        assert_eq!(config.symbol(), Some("is_prime"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_sets_nothing() {
        let config = TomlConfig::from_toml_str("").unwrap();

        assert_eq!(config.candidate(), None);
        assert_eq!(config.library(), None);
        assert!(!config.verbose());
    }

    #[test]
    fn test_negative_candidate_rejected() {
        let result = TomlConfig::from_toml_str("[check]\ncandidate = -7\n");
        assert!(matches!(result, Err(PrimeError::ConfigError { .. })));
    }

    #[test]
    fn test_non_integer_candidate_rejected() {
        let result = TomlConfig::from_toml_str("[check]\ncandidate = \"foo\"\n");
        assert!(matches!(result, Err(PrimeError::ConfigError { .. })));
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("PRIME_ORACLE_TEST_LIB_DIR", "/opt/prime");

        let toml_content = r#"
[oracle]
library = "${PRIME_ORACLE_TEST_LIB_DIR}/libprime.so"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.library(), Some("/opt/prime/libprime.so"));

        std::env::remove_var("PRIME_ORACLE_TEST_LIB_DIR");
    }

    #[test]
    fn test_symbol_without_library_is_invalid() {
        let config = TomlConfig::from_toml_str("[oracle]\nsymbol = \"check\"\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[check]\ncandidate = 127\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.candidate(), Some(Candidate(127)));
    }

    #[test]
    fn test_missing_file_names_path() {
        let result = TomlConfig::from_file("/nonexistent/primecheck.toml");
        match result {
            Err(PrimeError::ConfigReadError { path, .. }) => {
                assert_eq!(path, "/nonexistent/primecheck.toml");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }
}

use crate::utils::error::{PrimeError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(PrimeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(PrimeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// Symbols must be plain C identifiers so `dlsym` can resolve them.
pub fn validate_symbol_name(field_name: &str, symbol: &str) -> Result<()> {
    let mut chars = symbol.chars();
    let valid_head = chars
        .next()
        .map(|c| c.is_ascii_alphabetic() || c == '_')
        .unwrap_or(false);

    if !valid_head || !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(PrimeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: symbol.to_string(),
            reason: "Symbol must be a C identifier ([A-Za-z_][A-Za-z0-9_]*)".to_string(),
        });
    }

    Ok(())
}

use std::fs;
use std::path::Path;
use anyhow::Result;
use regex::{Captures, Regex};

/// Read a configuration file and substitute `${VAR_NAME}` placeholders
/// from the environment. Unset variables are left untouched.
pub fn read_config_text(config_path: &Path) -> Result<String> {
    if !config_path.exists() {
        anyhow::bail!("Configuration file not found: {}", config_path.display());
    }

    let bytes = fs::read(config_path)?;
    let content = decode_config_bytes(&bytes);
    if content.trim().is_empty() {
        anyhow::bail!("Configuration file is empty: {}", config_path.display());
    }

    substitute_env_vars(&content, |name| std::env::var(name).ok())
}

/// Decode raw file bytes as UTF-8, dropping a leading BOM.
/// Invalid sequences are replaced rather than rejected.
pub fn decode_config_bytes(bytes: &[u8]) -> String {
    let (cow, _, _) = encoding_rs::UTF_8.decode(bytes);
    cow.into_owned()
}

pub fn substitute_env_vars<F>(content: &str, lookup: F) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    let pattern = Regex::new(r"\$\{(\w+)\}")?;
    Ok(pattern
        .replace_all(content, |caps: &Captures| {
            lookup(&caps[1]).unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned())
}

/// True when a value still holds an unresolved `${VAR}` placeholder
pub fn is_unresolved_placeholder(value: &str) -> bool {
    let value = value.trim();
    value.starts_with("${") && value.ends_with('}')
}

mod types;

pub use types::*;

use anyhow::{Context, Result};
use std::path::Path;

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config = parse_config(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    Ok(config)
}

/// Parse and validate configuration from TOML text
pub fn parse_config(content: &str) -> Result<Config> {
    let config: Config = toml::from_str(content)?;
    validate_config(&config)?;
    Ok(config)
}

/// Load config from default locations or return default config
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = custom_path {
        return load_config(path);
    }

    // Try default locations
    let default_paths = ["./mediafile.toml", "~/.config/mediafile/config.toml"];

    for path_str in default_paths {
        let path = shellexpand::tilde(path_str);
        let path = Path::new(path.as_ref());
        if path.exists() {
            return load_config(path);
        }
    }

    Ok(Config::default())
}

/// Validate configuration
fn validate_config(config: &Config) -> Result<()> {
    if config.logging.filter.trim().is_empty() {
        anyhow::bail!("Logging filter cannot be empty");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.output.pretty);
        assert_eq!(config.logging.filter, "mediafile=info");
    }

    #[test]
    fn test_parse_empty() {
        let config = parse_config("").unwrap();
        assert!(config.output.pretty);
        assert_eq!(config.logging.filter, "mediafile=info");
    }

    #[test]
    fn test_parse_full() {
        let config = parse_config(
            r#"
[output]
pretty = false

[logging]
filter = "mediafile=trace"
"#,
        )
        .unwrap();
        assert!(!config.output.pretty);
        assert_eq!(config.logging.filter, "mediafile=trace");
    }

    #[test]
    fn test_unknown_section_rejected() {
        assert!(parse_config("[server]\nport = 8080\n").is_err());
        assert!(parse_config("[output]\ncolor = true\n").is_err());
    }

    #[test]
    fn test_empty_filter_rejected() {
        let err = parse_config("[logging]\nfilter = \"  \"\n").unwrap_err();
        assert!(err.to_string().contains("Logging filter"));
    }

    #[test]
    fn test_load_config_missing_file() {
        let err = load_config(Path::new("/nonexistent/mediafile.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}

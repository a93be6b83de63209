use std::path::Path;

use anyhow::{Context as _, Result};
use serde::Deserialize;
use tracing::error;

const DEFAULT_PORT: u16 = 8000;

fn default_bind_address() -> String {
    "127.0.0.1".to_string()
}

/// Optional overrides read from a TOML config file — all fields optional.
#[derive(Debug, Clone, Default, Deserialize)]
struct ConfigFile {
    port: Option<u16>,
    bind_address: Option<String>,
    log: Option<String>,
    log_format: Option<String>,
    api_key: Option<String>,
}

/// Resolved daemon configuration.
///
/// Built once at startup from CLI/env flags layered over an optional TOML
/// file layered over built-in defaults; immutable afterwards.
#[derive(Debug, Clone)]
pub struct DaemonConfig {
    /// TCP port the REST server listens on.
    pub port: u16,
    /// Bind address (default `127.0.0.1`; use `0.0.0.0` for LAN access).
    pub bind_address: String,
    /// Log filter directive (e.g. `info`, `taskd=debug`).
    pub log: String,
    /// Log output format: `pretty` or `json`.
    pub log_format: String,
    /// Shared secret for the gated API generation. `None` means no key is
    /// configured and every gated request is rejected.
    pub api_key: Option<String>,
}

impl DaemonConfig {
    /// Build config from CLI/env args + optional TOML file.
    ///
    /// Priority (highest to lowest):
    ///   1. CLI / env — passed as `Some(value)` from clap
    ///   2. TOML file at `config_path` (when given)
    ///   3. Built-in defaults
    pub fn new(
        port: Option<u16>,
        bind_address: Option<String>,
        api_key: Option<String>,
        log: Option<String>,
        config_path: Option<&Path>,
    ) -> Result<Self> {
        let file = match config_path {
            Some(path) => load_config_file(path)?,
            None => ConfigFile::default(),
        };

        Ok(Self {
            port: port.or(file.port).unwrap_or(DEFAULT_PORT),
            bind_address: bind_address
                .filter(|s| !s.is_empty())
                .or(file.bind_address)
                .unwrap_or_else(default_bind_address),
            log: log.or(file.log).unwrap_or_else(|| "info".to_string()),
            log_format: file.log_format.unwrap_or_else(|| "pretty".to_string()),
            api_key: api_key.filter(|k| !k.is_empty()).or(file.api_key),
        })
    }
}

impl Default for DaemonConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            bind_address: default_bind_address(),
            log: "info".to_string(),
            log_format: "pretty".to_string(),
            api_key: None,
        }
    }
}

/// Read and parse a TOML config file.
///
/// A missing file is a hard error (the path was asked for explicitly). A
/// file that exists but fails to parse is reported and treated as empty so a
/// typo in one key cannot keep the daemon from starting.
fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file '{}'", path.display()))?;
    match toml::from_str(&raw) {
        Ok(file) => Ok(file),
        Err(e) => {
            error!(path = %path.display(), err = %e, "failed to parse config file — using defaults");
            Ok(ConfigFile::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn defaults_when_nothing_is_given() {
        let config = DaemonConfig::new(None, None, None, None, None).unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.bind_address, "127.0.0.1");
        assert_eq!(config.log, "info");
        assert_eq!(config.api_key, None);
    }

    #[test]
    fn toml_file_overrides_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "port = 9100\nbind_address = \"0.0.0.0\"\napi_key = \"s3cret\""
        )
        .unwrap();

        let config = DaemonConfig::new(None, None, None, None, Some(file.path())).unwrap();
        assert_eq!(config.port, 9100);
        assert_eq!(config.bind_address, "0.0.0.0");
        assert_eq!(config.api_key.as_deref(), Some("s3cret"));
    }

    #[test]
    fn cli_beats_toml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "port = 9100\napi_key = \"from-file\"").unwrap();

        let config = DaemonConfig::new(
            Some(9200),
            None,
            Some("from-cli".to_string()),
            None,
            Some(file.path()),
        )
        .unwrap();
        assert_eq!(config.port, 9200);
        assert_eq!(config.api_key.as_deref(), Some("from-cli"));
    }

    #[test]
    fn missing_explicit_config_file_is_an_error() {
        let result = DaemonConfig::new(None, None, None, None, Some(Path::new("/no/such/file")));
        assert!(result.is_err());
    }

    #[test]
    fn unparsable_config_file_falls_back_to_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "port = \"not a number").unwrap();

        let config = DaemonConfig::new(None, None, None, None, Some(file.path())).unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
    }

    #[test]
    fn empty_api_key_counts_as_unset() {
        let config = DaemonConfig::new(None, None, Some(String::new()), None, None).unwrap();
        assert_eq!(config.api_key, None);
    }
}

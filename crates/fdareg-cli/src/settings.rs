//! # Connection settings
//!
//! Builds the [`OpenFdaConfig`] used by `lookup`. Sources, lowest to
//! highest precedence:
//!
//! 1. built-in defaults,
//! 2. `FDAREG_*` environment variables,
//! 3. the YAML file given with `--config`,
//! 4. `--base-url`, `--timeout-secs` and `--max-retries`.
//!
//! ```yaml
//! base_url: https://api.fda.gov
//! timeout_secs: 30
//! max_retries: 3
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;
use serde::Deserialize;

use fdareg_client::config::parse_url;
use fdareg_client::OpenFdaConfig;

/// Connection flags shared by commands that talk to openFDA.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectionArgs {
    /// openFDA base URL.
    #[arg(long)]
    pub base_url: Option<String>,

    /// Request timeout in seconds.
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Retries after a transport failure (0 disables retrying).
    #[arg(long)]
    pub max_retries: Option<u32>,
}

/// Contents of a `--config` file. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileSettings {
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub max_retries: Option<u32>,
}

impl FileSettings {
    /// Read and parse a YAML settings file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        // An empty file parses as YAML null.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(&content)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }
}

/// Layer file settings and flags over `base`.
pub fn apply(
    mut base: OpenFdaConfig,
    file: &FileSettings,
    flags: &ConnectionArgs,
) -> Result<OpenFdaConfig> {
    if let Some(raw) = &file.base_url {
        base.base_url = parse_url("config file base_url", raw)?;
    }
    if let Some(secs) = file.timeout_secs {
        base.timeout_secs = secs;
    }
    if let Some(retries) = file.max_retries {
        base.max_retries = retries;
    }

    if let Some(raw) = &flags.base_url {
        base.base_url = parse_url("--base-url", raw)?;
    }
    if let Some(secs) = flags.timeout_secs {
        base.timeout_secs = secs;
    }
    if let Some(retries) = flags.max_retries {
        base.max_retries = retries;
    }
    Ok(base)
}

/// Resolve the effective configuration from every source.
pub fn resolve(config_path: Option<&Path>, flags: &ConnectionArgs) -> Result<OpenFdaConfig> {
    let base = OpenFdaConfig::from_env().context("invalid FDAREG_* environment variable")?;
    let file = match config_path {
        Some(path) => FileSettings::load(path)?,
        None => FileSettings::default(),
    };
    let config = apply(base, &file, flags)?;
    tracing::debug!(
        base_url = %config.base_url,
        timeout_secs = config.timeout_secs,
        max_retries = config.max_retries,
        "resolved connection settings"
    );
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn base() -> OpenFdaConfig {
        OpenFdaConfig::local_mock("http://127.0.0.1:9000").unwrap()
    }

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn load_full_file() {
        let file = write_config("base_url: https://example.org\ntimeout_secs: 12\nmax_retries: 1\n");
        let settings = FileSettings::load(file.path()).unwrap();
        assert_eq!(settings.base_url.as_deref(), Some("https://example.org"));
        assert_eq!(settings.timeout_secs, Some(12));
        assert_eq!(settings.max_retries, Some(1));
    }

    #[test]
    fn load_partial_and_empty_files() {
        let partial = write_config("timeout_secs: 60\n");
        let settings = FileSettings::load(partial.path()).unwrap();
        assert_eq!(settings.timeout_secs, Some(60));
        assert!(settings.base_url.is_none());

        let empty = write_config("");
        assert_eq!(FileSettings::load(empty.path()).unwrap(), FileSettings::default());
    }

    #[test]
    fn load_rejects_unknown_keys() {
        let file = write_config("base_uri: https://example.org\n");
        assert!(FileSettings::load(file.path()).is_err());
    }

    #[test]
    fn load_missing_file_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.yaml");
        let err = FileSettings::load(&path).unwrap_err();
        assert!(format!("{err:#}").contains("absent.yaml"));
    }

    #[test]
    fn no_overrides_keeps_base() {
        let cfg = apply(base(), &FileSettings::default(), &ConnectionArgs::default()).unwrap();
        assert_eq!(cfg, base());
    }

    #[test]
    fn file_overrides_base() {
        let file = FileSettings {
            base_url: Some("https://example.org".into()),
            timeout_secs: Some(12),
            max_retries: None,
        };
        let cfg = apply(base(), &file, &ConnectionArgs::default()).unwrap();
        assert_eq!(cfg.base_url.as_str(), "https://example.org/");
        assert_eq!(cfg.timeout_secs, 12);
        assert_eq!(cfg.max_retries, 0);
    }

    #[test]
    fn flags_override_file() {
        let file = FileSettings {
            base_url: Some("https://example.org".into()),
            timeout_secs: Some(12),
            max_retries: Some(5),
        };
        let flags = ConnectionArgs {
            base_url: Some("http://localhost:8080".into()),
            timeout_secs: None,
            max_retries: Some(1),
        };
        let cfg = apply(base(), &file, &flags).unwrap();
        assert_eq!(cfg.base_url.as_str(), "http://localhost:8080/");
        assert_eq!(cfg.timeout_secs, 12);
        assert_eq!(cfg.max_retries, 1);
    }

    #[test]
    fn invalid_flag_url_is_rejected() {
        let flags = ConnectionArgs {
            base_url: Some("ftp://example.org".into()),
            ..ConnectionArgs::default()
        };
        let err = apply(base(), &FileSettings::default(), &flags).unwrap_err();
        assert!(err.to_string().contains("--base-url"));
    }

    #[test]
    fn resolve_reads_config_file() {
        let file = write_config("max_retries: 7\n");
        let cfg = resolve(Some(file.path()), &ConnectionArgs::default()).unwrap();
        assert_eq!(cfg.max_retries, 7);
    }
}

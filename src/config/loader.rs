use std::{fs, fs::File, io::Write, path::Path};

use anyhow::{Context, Result};
use config::{Config, Environment};
use log::info;
use serde::Deserialize;
use url::Url;

use crate::http::{ClientOptions, Header};

#[derive(Debug, Deserialize)]
struct RawClientConfig {
    base_url: String,
    #[serde(default)]
    headers: Vec<RawHeader>,
}

#[derive(Debug, Deserialize)]
struct RawHeader {
    key: String,
    value: String,
}

pub fn get_default_config() -> &'static str {
    include_str!("../../config/client.toml")
}

/// Loads [`ClientOptions`] from a toml file, creating it from the embedded
/// default template when missing. Values can be overridden through
/// `APIKIT_`-prefixed environment variables.
pub fn load_client_options(path: &Path) -> Result<ClientOptions> {
    if !path.exists() {
        write_config_to(path, get_default_config()).context("Could not create default config")?;
        info!(path:% = path.display(); "Created new configuration file");
    }

    let filename = path.to_str().context("Invalid config file path")?;

    let cfg = Config::builder()
        .add_source(config::File::with_name(filename))
        .add_source(Environment::with_prefix("APIKIT").prefix_separator("_").separator("__"))
        .build()
        .context("Could not build config")?;

    let raw: RawClientConfig = cfg.try_deserialize().context("Invalid client configuration")?;

    let base_url = Url::parse(&raw.base_url).context("Invalid base_url")?;
    let base_headers = raw
        .headers
        .into_iter()
        .map(|h| Header::new(h.key, h.value))
        .collect();

    Ok(ClientOptions { base_url, base_headers })
}

pub fn write_config_to(path: &Path, source: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("Failed to create parent directories")?;
    };

    let mut file = File::create(path).context("Failed to create config file")?;
    file.write_all(source.as_bytes())
        .context("Failed to write config content")?;
    file.write_all(b"\n").context("Failed to write newline")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_default_config_when_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("client.toml");

        let options = load_client_options(&path).unwrap();

        assert!(path.exists());
        assert_eq!(options.base_url.as_str(), "http://localhost:8080/");
        assert!(options.base_headers.is_empty());
    }

    #[test]
    fn loads_hand_written_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("client.toml");
        let source = r#"
base_url = "https://api.example.com/v1/"

[[headers]]
key = "X-Api-Key"
value = "secret"

[[headers]]
key = "X-Tenant"
value = "acme"
"#;
        write_config_to(&path, source).unwrap();

        let options = load_client_options(&path).unwrap();

        assert_eq!(options.base_url.as_str(), "https://api.example.com/v1/");
        assert_eq!(
            options.base_headers,
            vec![Header::new("X-Api-Key", "secret"), Header::new("X-Tenant", "acme")]
        );
    }

    #[test]
    fn rejects_invalid_base_url() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("client.toml");
        write_config_to(&path, r#"base_url = "not a url""#).unwrap();

        assert!(load_client_options(&path).is_err());
    }
}

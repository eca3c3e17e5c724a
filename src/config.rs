use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

use crate::error::{ReleasePruneError, Result};

/// Environment variable consulted when no token is given explicitly.
pub const TOKEN_ENV_VAR: &str = "GITHUB_TOKEN";

/// Represents the complete configuration for release-prune.
///
/// Everything here can be overridden from the command line; the file only
/// supplies defaults for repeated runs against the same repository.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    /// Repository slug in `owner/name` form.
    #[serde(default)]
    pub repository: Option<String>,

    /// Strategy token applied when the CLI does not name one.
    #[serde(default = "default_strategy")]
    pub strategy: String,

    #[serde(default)]
    pub github: GithubConfig,
}

/// Configuration for the hosting-service endpoint.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct GithubConfig {
    /// API base URL; point this at `https://<host>/api/v3` for GitHub
    /// Enterprise.
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// API token. The CLI flag and the environment take precedence.
    #[serde(default)]
    pub token: Option<String>,
}

fn default_strategy() -> String {
    "all".to_string()
}

fn default_api_url() -> String {
    "https://api.github.com".to_string()
}

impl Default for GithubConfig {
    fn default() -> Self {
        GithubConfig {
            api_url: default_api_url(),
            token: None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            repository: None,
            strategy: default_strategy(),
            github: GithubConfig::default(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `releaseprune.toml` in current directory
/// 3. `~/.config/.releaseprune.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> std::result::Result<Config, Box<dyn std::error::Error>> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./releaseprune.toml").exists() {
        fs::read_to_string("./releaseprune.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".releaseprune.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config: Config = toml::from_str(&config_str)?;
    Ok(config)
}

/// Splits an `owner/name` slug into its two parts.
///
/// # Arguments
/// * `slug` - Repository slug (e.g., "acme/widgets")
///
/// # Returns
/// * `Ok((owner, name))` - The two non-empty parts
/// * `Err` - If the slug is not exactly `<owner>/<name>`
pub fn parse_repository(slug: &str) -> Result<(String, String)> {
    match slug.split_once('/') {
        Some((owner, name)) if !owner.is_empty() && !name.is_empty() && !name.contains('/') => {
            Ok((owner.to_string(), name.to_string()))
        }
        _ => Err(ReleasePruneError::config(format!(
            "Repository must be in <owner>/<name> form, got '{}'",
            slug
        ))),
    }
}

/// Resolves the API token: CLI flag, then config file, then `GITHUB_TOKEN`.
///
/// Returns `None` when no source provides one; callers decide whether to
/// proceed unauthenticated.
pub fn resolve_token(cli_token: Option<String>, config: &Config) -> Option<String> {
    cli_token
        .or_else(|| config.github.token.clone())
        .or_else(|| env::var(TOKEN_ENV_VAR).ok().filter(|token| !token.is_empty()))
}

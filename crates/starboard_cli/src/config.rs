//! Configuration file support for starboard.
//!
//! Configuration is loaded with the following precedence (highest to lowest):
//! 1. CLI flags
//! 2. Environment variables (prefixed with `STARBOARD_`, e.g., `STARBOARD_GITHUB_LOGIN`)
//! 3. Config file (~/.config/starboard/config.toml or ./starboard.toml)
//! 4. Built-in defaults
//!
//! Example config file:
//! ```toml
//! [github]
//! login = "octocat"                   # account whose stars are listed
//! endpoint = "https://api.github.com" # optional, this is the default
//! timeout = 30                        # seconds per request
//! ```

use std::path::PathBuf;
use std::time::Duration;

use config::{Config as ConfigBuilder, Environment, File, FileFormat};
use directories::ProjectDirs;
use serde::Deserialize;
use starboard::github::DEFAULT_ENDPOINT;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// GitHub configuration.
    pub github: GitHubConfig,
}

/// GitHub configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct GitHubConfig {
    /// Login whose starred repositories are queried.
    /// Can also be set via STARBOARD_GITHUB_LOGIN environment variable.
    pub login: Option<String>,
    /// REST API root, for GitHub Enterprise or a local stand-in.
    pub endpoint: Option<String>,
    /// Per-request timeout in seconds.
    pub timeout: u64,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            login: None,
            endpoint: None,
            timeout: 30,
        }
    }
}

impl Config {
    /// Load configuration, later sources overriding earlier ones:
    /// defaults, the XDG config file, `./starboard.toml`, then
    /// `STARBOARD_*` environment variables.
    ///
    /// A broken source is logged and the defaults are used instead.
    pub fn load() -> Self {
        let files = Self::default_config_path()
            .into_iter()
            .chain([PathBuf::from("starboard.toml")])
            .filter(|path| path.exists());

        let mut builder = ConfigBuilder::builder();
        for path in files {
            tracing::debug!(path = %path.display(), "Loading config file");
            let source = File::from(path).format(FileFormat::Toml).required(false);
            builder = builder.add_source(source);
        }

        // STARBOARD_GITHUB_LOGIN -> github.login
        builder = builder.add_source(
            Environment::with_prefix("STARBOARD")
                .separator("_")
                .try_parsing(true),
        );

        builder
            .build()
            .and_then(|settings| settings.try_deserialize::<Config>())
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Failed to load config, using defaults");
                Config::default()
            })
    }

    /// Login to query, empty when unset.
    pub fn github_login(&self) -> String {
        self.github.login.clone().unwrap_or_default()
    }

    pub fn github_endpoint(&self) -> String {
        self.github
            .endpoint
            .clone()
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.github.timeout)
    }

    /// Get the default config file path.
    pub fn default_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "starboard").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}

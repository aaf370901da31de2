//! Configuration parsing and management.
//!
//! The configuration is layered: built-in defaults, then a TOML file, then the
//! environment. Every field can be set from the environment as
//! `WEBSHOP_<SECTION>__<FIELD>`:
//!
//! | Variable | Sets |
//! |---|---|
//! | `WEBSHOP_CONFIG` | path of the TOML file (default `webshop.toml`, optional) |
//! | `WEBSHOP_SERVER__BIND` | `server.bind` |
//! | `WEBSHOP_SERVER__BASE_URI` | `server.base_uri` |
//! | `WEBSHOP_ACTORS__BUFFER_SIZE` | `actors.buffer_size` |
//! | `WEBSHOP_AUTH__JWT_SECRET` | `auth.jwt_secret` |
//! | `WEBSHOP_AUTH__TOKEN_TTL_SECS` | `auth.token_ttl_secs` |
//! | `WEBSHOP_SEED__EMAIL` | `seed.email` |
//!
//! `RUST_LOG`, when set, takes precedence over `logging.filter`.
//!
//! ```toml
//! [server]
//! bind = "0.0.0.0:8080"
//! base_uri = "https://shop.example.com"
//!
//! [auth]
//! jwt_secret = "..."
//! token_ttl_secs = 3600
//!
//! [seed]
//! email = "admin@example.com"
//! passwort = "..."
//! ```

use ::config::{Config as ConfigLib, Environment, File, FileFormat, Source};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

const DEFAULT_CONFIG_FILE: &str = "webshop.toml";
const CONFIG_PATH_ENV: &str = "WEBSHOP_CONFIG";
const ENV_PREFIX: &str = "WEBSHOP";
const DEV_SECRET: &str = "dev-secret-change-me";

/// Longest accepted token lifetime: one year.
pub const MAX_TOKEN_TTL_SECS: u64 = 365 * 24 * 60 * 60;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] ::config::ConfigError),

    #[error("invalid configuration: {0}")]
    Validation(String),
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub actors: ActorConfig,

    #[serde(default)]
    pub auth: AuthConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    /// Admin account created at startup, if configured.
    #[serde(default)]
    pub seed: Option<SeedConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,

    /// Prefix for the links in responses, without trailing slash.
    #[serde(default = "default_base_uri")]
    pub base_uri: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            base_uri: default_base_uri(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActorConfig {
    /// Channel capacity of every actor.
    #[serde(default = "default_buffer_size")]
    pub buffer_size: usize,
}

impl Default for ActorConfig {
    fn default() -> Self {
        Self {
            buffer_size: default_buffer_size(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,

    #[serde(default = "default_token_ttl")]
    pub token_ttl_secs: u64,

    /// bcrypt work factor (4..=31).
    #[serde(default = "default_bcrypt_cost")]
    pub bcrypt_cost: u32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: default_jwt_secret(),
            token_ttl_secs: default_token_ttl(),
            bcrypt_cost: default_bcrypt_cost(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is not set.
    #[serde(default = "default_filter")]
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    pub email: String,
    pub passwort: String,
    #[serde(default = "default_admin_name")]
    pub nachname: String,
}

fn default_bind() -> String {
    "127.0.0.1:8080".to_string()
}

fn default_base_uri() -> String {
    "http://localhost:8080".to_string()
}

fn default_buffer_size() -> usize {
    32
}

fn default_jwt_secret() -> String {
    DEV_SECRET.to_string()
}

fn default_token_ttl() -> u64 {
    3600
}

fn default_bcrypt_cost() -> u32 {
    bcrypt::DEFAULT_COST
}

fn default_filter() -> String {
    "info,tower_http=debug".to_string()
}

fn default_admin_name() -> String {
    "Admin".to_string()
}

impl AppConfig {
    /// Loads the configuration the way the binary does: file, then environment.
    ///
    /// A missing default file is not an error; a missing file named by
    /// `WEBSHOP_CONFIG` is.
    ///
    /// # Errors
    ///
    /// Returns an error if the file can't be read or parsed, or the result is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let file = match std::env::var(CONFIG_PATH_ENV) {
            Ok(path) => File::new(&path, FileFormat::Toml).required(true),
            Err(_) => File::new(DEFAULT_CONFIG_FILE, FileFormat::Toml).required(false),
        };
        let config = Self::layered(file, Some(environment()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        Self::layered(File::from(path).format(FileFormat::Toml).required(true), None)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Self::layered(File::from_str(content, FileFormat::Toml), None)
    }

    /// Deserializes `file` overlaid with `env`; absent fields keep their defaults.
    fn layered<S>(file: S, env: Option<Environment>) -> Result<Self, ConfigError>
    where
        S: Source + Send + Sync + 'static,
    {
        let mut builder = ConfigLib::builder().add_source(file);
        if let Some(env) = env {
            builder = builder.add_source(env);
        }
        Ok(builder.build()?.try_deserialize()?)
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] for an unusable setting.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.auth.jwt_secret.is_empty() {
            return Err(ConfigError::Validation("auth.jwt_secret must not be empty".into()));
        }
        if !(4..=31).contains(&self.auth.bcrypt_cost) {
            return Err(ConfigError::Validation(format!(
                "auth.bcrypt_cost must be between 4 and 31, got {}",
                self.auth.bcrypt_cost
            )));
        }
        if self.auth.token_ttl_secs == 0 || self.auth.token_ttl_secs > MAX_TOKEN_TTL_SECS {
            return Err(ConfigError::Validation(format!(
                "auth.token_ttl_secs must be between 1 and {MAX_TOKEN_TTL_SECS}, got {}",
                self.auth.token_ttl_secs
            )));
        }
        if self.actors.buffer_size == 0 {
            return Err(ConfigError::Validation("actors.buffer_size must be positive".into()));
        }
        if self.server.base_uri.ends_with('/') {
            return Err(ConfigError::Validation(
                "server.base_uri must not end with '/'".into(),
            ));
        }
        Ok(())
    }

    /// `true` while the built-in development secret is in use.
    pub fn uses_dev_secret(&self) -> bool {
        self.auth.jwt_secret == DEV_SECRET
    }
}

/// `WEBSHOP_AUTH__JWT_SECRET` -> `auth.jwt_secret`.
///
/// Values stay strings until deserialization, so a secret such as `007` is kept verbatim.
fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
}

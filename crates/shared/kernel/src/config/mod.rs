use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

/// Base name of the configuration file looked up when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "pawcalc";

/// Prefix of environment variables overriding file settings.
pub const ENV_PREFIX: &str = "PAW";

#[paw_derive::paw_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads configuration by layering a file with environment overrides.
///
/// 1. **File**: `path` if given (must exist), otherwise `pawcalc.{toml,json,yaml,...}` in the
///    working directory when present. The format follows the file extension.
/// 2. **Environment**: variables prefixed with `PAW__`; nested keys use double underscores
///    (`PAW__ROUTER__BASE=/calc/` maps to `router.base`).
///
/// # Errors
/// Returns an error if an explicit file is missing, a source is malformed, or the merged
/// values do not match `T`.
///
/// # Example
/// ```rust
/// use paw_kernel::config::load_config;
/// use paw_kernel::domain::config::ClientConfig;
///
/// let cfg: ClientConfig = load_config(Some("config/local.toml")).unwrap_or_default();
/// assert_eq!(cfg.router.base, "/");
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    load_layered(path, environment())
}

/// Same as [`load_config`] with an explicit environment source.
///
/// # Errors
/// See [`load_config`].
pub fn load_layered<T>(path: Option<impl AsRef<Path>>, env: Environment) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let required = path.is_some();
    let effective_path =
        path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE), |p| p.as_ref().to_path_buf());

    info!(path = %effective_path.display(), required, "Loading config");

    let config = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(required))
        .add_source(env)
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}

/// The `PAW__`-prefixed process environment source.
#[must_use]
pub fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX).separator("__").convert_case(config::Case::Snake)
}

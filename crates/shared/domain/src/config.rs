use crate::constants::{DEFAULT_IMAGE_SIZE, DOG_API_BASE_URL, ROOT_PATH};
use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level client configuration.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ClientConfigInner {
    pub router: RouterConfig,
    pub api: DogApiConfig,
    pub log: LogConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
///
/// Deserialized through [`ClientConfigInner`] so string sources (environment overrides) still
/// reach the typed fields.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(from = "ClientConfigInner")]
pub struct ClientConfig {
    inner: Arc<ClientConfigInner>,
}

impl From<ClientConfigInner> for ClientConfig {
    fn from(inner: ClientConfigInner) -> Self {
        Self { inner: Arc::new(inner) }
    }
}

impl Deref for ClientConfig {
    type Target = ClientConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for ClientConfig {
    fn deref_mut(&mut self) -> &mut ClientConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Client-side navigation settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RouterConfig {
    /// Deployment base path the history-mode URLs are relative to.
    pub base: String,
    /// Compare static path segments case-sensitively.
    pub sensitive: bool,
    /// Treat `/calc` and `/calc/` as different paths.
    pub strict: bool,
}

/// Image search endpoint settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DogApiConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    pub size: String,
    pub has_breeds: bool,
    pub limit: Option<u8>,
}

/// Logging settings applied by the application shell.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Default level (`error`, `warn`, `info`, `debug`, `trace`).
    pub level: String,
    /// Extra filter directives, e.g. `paw_kernel=debug`.
    pub filter: Option<String>,
    /// Directory for rolling log files; console only when unset.
    pub directory: Option<PathBuf>,
    pub json: bool,
}

// --- Default ---

impl Default for RouterConfig {
    fn default() -> Self {
        Self { base: ROOT_PATH.to_owned(), sensitive: false, strict: false }
    }
}

impl Default for DogApiConfig {
    fn default() -> Self {
        Self {
            base_url: DOG_API_BASE_URL.to_owned(),
            api_key: None,
            size: DEFAULT_IMAGE_SIZE.to_owned(),
            has_breeds: true,
            limit: None,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self { level: "info".to_owned(), filter: None, directory: None, json: false }
    }
}

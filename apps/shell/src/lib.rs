//! Application shell: wires configuration, logging and the route table together.
//!
//! The shell owns no UI. It decides which [`View`] a browser location shows and leaves
//! rendering to whatever front end embeds it.

use anyhow::Context;
use paw::domain::config::{ClientConfig, LogConfig};
use paw::domain::views::View;
use paw::kernel::routing::{Router, RoutingError};
use paw::routes::app_router;
use paw_logger::{Logger, parse_level};
use tracing::{info, warn};

/// Installs the process-wide logger described by `config`.
///
/// # Errors
/// Fails on an unknown level name or when the subscriber cannot be installed.
pub fn init_logging(name: &str, config: &LogConfig) -> anyhow::Result<Logger> {
    let builder = Logger::builder().name(name).console(true).level(parse_level(&config.level)?);
    let builder = match &config.filter {
        Some(filter) => builder.env_filter(filter),
        None => builder,
    };

    let logger = match &config.directory {
        Some(directory) => builder.path(directory).json(config.json).init(),
        None => builder.init(),
    }
    .context("Failed to initialize logging")?;

    Ok(logger)
}

/// Running application state.
#[derive(Debug)]
pub struct Shell {
    config: ClientConfig,
    router: Router,
}

impl Shell {
    #[must_use]
    pub fn builder() -> ShellBuilder {
        ShellBuilder::default()
    }

    /// Resolves a browser location to the view it shows; `None` is the not-found case.
    pub fn navigate(&self, location: &str) -> Option<View> {
        match self.router.resolve(location) {
            Some(matched) => {
                info!(location, view = %matched.view(), "Navigated");
                Some(matched.view())
            }
            None => {
                warn!(location, "No view for location");
                None
            }
        }
    }

    /// Browser URL of the landing view.
    ///
    /// # Errors
    /// Fails only if the route table lost its root entry.
    pub fn home(&self) -> Result<String, RoutingError> {
        self.router.href(View::Calculator.route_name(), &[])
    }

    #[must_use]
    pub const fn router(&self) -> &Router {
        &self.router
    }

    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }
}

#[must_use = "builders do nothing unless you call .build()"]
#[derive(Debug, Default)]
pub struct ShellBuilder {
    config: Option<ClientConfig>,
}

impl ShellBuilder {
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Builds the route table from the router settings; default config when none was given.
    ///
    /// # Errors
    /// Propagates [`RoutingError`] from the route table.
    pub fn build(self) -> Result<Shell, RoutingError> {
        let config = self.config.unwrap_or_default();
        let router = app_router(&config.router)?;
        Ok(Shell { config, router })
    }
}

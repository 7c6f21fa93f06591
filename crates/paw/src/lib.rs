//! Facade crate for `PawCalc`.
//! Re-exports domain/kernel primitives and owns the application route table.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Add `paw` to an application crate.
//! - Call [`routes::app_router`] with the loaded [`RouterConfig`](domain::config::RouterConfig).

pub use paw_domain as domain;
pub use paw_kernel as kernel;

/// The application route table.
pub mod routes {
    use paw_domain::config::RouterConfig;
    use paw_domain::constants::ROOT_PATH;
    use paw_domain::views::View;
    use paw_kernel::routing::{History, RouteEntry, Router, RoutingError};
    use tracing::debug;

    /// Every route the application knows, in match order.
    ///
    /// The site root shows the calculator under the name `CalculatorView`.
    #[must_use]
    pub fn app_routes() -> Vec<RouteEntry> {
        vec![RouteEntry::for_view(ROOT_PATH, View::Calculator)]
    }

    /// Builds the history-mode router for the configured deployment base.
    ///
    /// # Errors
    /// Propagates [`RoutingError`] from building the table.
    pub fn app_router(config: &RouterConfig) -> Result<Router, RoutingError> {
        debug!(base = %config.base, sensitive = config.sensitive, strict = config.strict, "Building app router");

        Router::builder()
            .history(History::web(&config.base))
            .sensitive(config.sensitive)
            .strict(config.strict)
            .routes(app_routes())
            .build()
    }
}

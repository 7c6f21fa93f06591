use super::{History, MatchOptions, RoutePattern, RoutingError};
use fxhash::FxHashSet;
use paw_domain::views::View;
use std::borrow::Cow;
use tracing::{debug, info};

/// One navigable path bound to a view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: Cow<'static, str>,
    pub name: Cow<'static, str>,
    pub component: View,
}

impl RouteEntry {
    pub fn new(
        path: impl Into<Cow<'static, str>>,
        name: impl Into<Cow<'static, str>>,
        component: View,
    ) -> Self {
        Self { path: path.into(), name: name.into(), component }
    }

    /// An entry named after its view.
    pub fn for_view(path: impl Into<Cow<'static, str>>, view: View) -> Self {
        Self::new(path, view.route_name(), view)
    }
}

/// Result of a successful [`Router::resolve`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch<'a> {
    entry: &'a RouteEntry,
    path: String,
    params: Vec<(String, String)>,
}

impl<'a> RouteMatch<'a> {
    #[must_use]
    pub const fn entry(&self) -> &'a RouteEntry {
        self.entry
    }

    #[must_use]
    pub fn name(&self) -> &'a str {
        let entry = self.entry;
        &entry.name
    }

    #[must_use]
    pub const fn view(&self) -> View {
        self.entry.component
    }

    /// The route path after base stripping, e.g. `/` for `/calc/?x=1` under base `/calc`.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[must_use]
    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }

    #[must_use]
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.iter().find(|(key, _)| key == name).map(|(_, value)| value.as_str())
    }
}

#[derive(Debug)]
struct CompiledRoute {
    entry: RouteEntry,
    pattern: RoutePattern,
}

/// Immutable route table plus the navigation mode it is addressed through.
#[derive(Debug)]
pub struct Router {
    history: History,
    options: MatchOptions,
    routes: Vec<CompiledRoute>,
}

impl Router {
    #[must_use]
    pub fn builder() -> RouterBuilder {
        RouterBuilder::default()
    }

    /// Resolves a browser location to the first matching entry.
    ///
    /// `None` is the not-found outcome: the location is outside the base path or no pattern
    /// matches it.
    #[must_use]
    pub fn resolve(&self, location: &str) -> Option<RouteMatch<'_>> {
        let Some(path) = self.history.location(location) else {
            debug!(location, base = self.history.base(), "Location outside of router base");
            return None;
        };

        let found = self.routes.iter().find_map(|route| {
            route.pattern.matches(&path, self.options).map(|params| (route, params))
        });

        match found {
            Some((route, params)) => {
                debug!(location, route = %route.entry.name, "Route resolved");
                Some(RouteMatch { entry: &route.entry, path, params })
            }
            None => {
                debug!(location, path, "No route matched");
                None
            }
        }
    }

    /// Builds the browser URL of a named route.
    ///
    /// # Errors
    /// [`RoutingError::UnknownRoute`] for an unregistered name, [`RoutingError::MissingParam`]
    /// when `params` lacks a value the pattern needs.
    pub fn href(&self, name: &str, params: &[(&str, &str)]) -> Result<String, RoutingError> {
        let route = self.routes.iter().find(|route| route.entry.name == name).ok_or_else(|| {
            RoutingError::UnknownRoute { message: format!("no route named '{name}'").into(), context: None }
        })?;

        Ok(self.history.href(&route.pattern.render(params)?))
    }

    pub fn entries(&self) -> impl Iterator<Item = &RouteEntry> {
        self.routes.iter().map(|route| &route.entry)
    }

    #[must_use]
    pub const fn history(&self) -> &History {
        &self.history
    }

    #[must_use]
    pub const fn options(&self) -> MatchOptions {
        self.options
    }
}

#[must_use = "builders do nothing unless you call .build()"]
#[derive(Debug, Default)]
pub struct RouterBuilder {
    history: Option<History>,
    options: MatchOptions,
    entries: Vec<RouteEntry>,
}

impl RouterBuilder {
    /// Navigation mode; web history on `/` when not set.
    pub fn history(mut self, history: History) -> Self {
        self.history = Some(history);
        self
    }

    pub const fn sensitive(mut self, sensitive: bool) -> Self {
        self.options.sensitive = sensitive;
        self
    }

    pub const fn strict(mut self, strict: bool) -> Self {
        self.options.strict = strict;
        self
    }

    pub fn route(mut self, entry: RouteEntry) -> Self {
        self.entries.push(entry);
        self
    }

    /// Registers multiple entries at once, keeping their order.
    pub fn routes<I>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = RouteEntry>,
    {
        self.entries.extend(entries);
        self
    }

    /// Compiles the table.
    ///
    /// # Errors
    /// [`RoutingError::InvalidPattern`] for a malformed path or a blank name,
    /// [`RoutingError::Duplicate`] when two entries share a name or an equivalent pattern.
    pub fn build(self) -> Result<Router, RoutingError> {
        let history = self.history.unwrap_or_default();
        let mut names = FxHashSet::default();
        let mut shapes = FxHashSet::default();
        let mut routes = Vec::with_capacity(self.entries.len());

        for entry in self.entries {
            if entry.name.trim().is_empty() {
                return Err(RoutingError::InvalidPattern {
                    message: "route name cannot be blank".into(),
                    context: Some(entry.path.clone()),
                });
            }
            if !names.insert(entry.name.clone()) {
                return Err(RoutingError::Duplicate {
                    message: format!("name '{}' is already registered", entry.name).into(),
                    context: Some(entry.path.clone()),
                });
            }

            let pattern = RoutePattern::parse(&entry.path)?;
            if !shapes.insert(pattern.shape(self.options)) {
                return Err(RoutingError::Duplicate {
                    message: format!("pattern '{pattern}' shadows an earlier route").into(),
                    context: Some(entry.name.clone()),
                });
            }

            routes.push(CompiledRoute { entry, pattern });
        }

        info!(routes = routes.len(), base = history.base(), "Route table built");

        Ok(Router { history, options: self.options, routes })
    }
}

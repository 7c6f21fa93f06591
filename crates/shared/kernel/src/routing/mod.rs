//! Client-side route table.
//!
//! A [`Router`] maps browser locations to [`View`](paw_domain::views::View)s. It is built once at
//! startup and never mutated; resolution is a pure function of the location.
//!
//! * [`History`] turns a browser location into a route path and back (history or hash mode,
//!   relative to a deployment base path).
//! * [`RoutePattern`] matches paths made of static and `:param` segments.
//! * [`Router::resolve`] returns the first matching entry, or `None` for the not-found case.

mod history;
mod pattern;
mod router;

pub use history::History;
pub use pattern::{MatchOptions, RoutePattern};
pub use router::{RouteEntry, RouteMatch, Router, RouterBuilder};

use std::borrow::Cow;

#[paw_derive::paw_error]
pub enum RoutingError {
    #[error("Invalid route pattern{}: {message}", format_context(.context))]
    InvalidPattern { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Two entries share a name or an equivalent pattern.
    #[error("Duplicate route{}: {message}", format_context(.context))]
    Duplicate { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Unknown route{}: {message}", format_context(.context))]
    UnknownRoute { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Missing route parameter{}: {message}", format_context(.context))]
    MissingParam { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

//! Kernel utilities shared by the client applications.
//! Keep this crate free of UI and network concerns; it owns the policies around the domain types.
//!
//! ## Parsing API payloads
//! ```rust
//! use paw_kernel::contract::parse_image;
//!
//! let raw = r#"{"breeds": [], "id": "abc123", "url": "https://example.com/a.jpg", "width": 640, "height": 480}"#;
//! let record = parse_image(raw).unwrap();
//! assert!(record.breeds.is_empty());
//! ```
//!
//! ## Routing
//! ```rust
//! use paw_kernel::domain::views::View;
//! use paw_kernel::routing::{History, RouteEntry, Router};
//!
//! let router = Router::builder()
//!     .history(History::web("/calc/"))
//!     .route(RouteEntry::for_view("/", View::Calculator))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(router.resolve("/calc/").map(|m| m.view()), Some(View::Calculator));
//! assert!(router.resolve("/elsewhere").is_none());
//! ```
//!
//! ## Config loading (non-wasm)
//! ```rust,ignore
//! use paw_kernel::config::load_config;
//! let cfg: paw_kernel::domain::config::ClientConfig = load_config(Some("pawcalc.toml")).unwrap();
//! ```
#[cfg(not(target_arch = "wasm32"))]
pub mod config;
pub mod contract;
pub mod prelude;
pub mod routing;

pub use paw_domain as domain;

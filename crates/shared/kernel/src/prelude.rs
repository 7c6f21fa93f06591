//! Common imports for crates built on the kernel.

#[cfg(not(target_arch = "wasm32"))]
pub use crate::config::{ConfigError, load_config};
pub use crate::contract::{ContractError, ImageSearch, parse_image, parse_images, validate};
pub use crate::routing::{History, MatchOptions, RouteEntry, RouteMatch, Router, RoutingError};
pub use paw_domain::animal::{BreedInfo, ImageRecord, Measure};
pub use paw_domain::config::{ClientConfig, RouterConfig};
pub use paw_domain::views::View;

//! # Domain Models
//!
//! Pure domain types with minimal dependencies (`serde` plus the workspace derive macros).
//! Keep it lean: no I/O or parsing policy, just data shapes and small helpers.
//!
//! * [`animal`] - response contract of the animal-image search API.
//! * [`views`] - the views the client can navigate to.
//! * [`config`] - client configuration shape.

pub mod animal;
pub mod config;
pub mod constants;
pub mod views;

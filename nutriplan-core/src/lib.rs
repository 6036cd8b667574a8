//! NutriPlan Core
//!
//! Domain types and the fixture catalog for the NutriPlan backend, a SaaS
//! product for dietitians (client management, appointments, diet plans,
//! food/recipe reference data, progress reports).
//!
//! The backend is read-only over these collections: the catalog returns the
//! same literal data on every call, with no persistence behind it.

pub mod fixtures;
pub mod types;

pub use types::*;

/// Core crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//! Facade crate re-exporting the commandeer public API.

pub use commandeer_core::*;

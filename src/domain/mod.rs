//! Domain layer: entities, write hooks and the store contract.
//!
//! - [`entities`] - core data structures
//! - [`hooks`] - callbacks run before every write
//! - [`repositories`] - data access trait definitions
//!
//! Nothing in here depends on the infrastructure or presentation layers.

pub mod entities;
pub mod hooks;
pub mod repositories;

//! Core domain entities.
//!
//! - [`Link`] - a stored deep-link mapping
//! - [`LinkFields`] - the writable field set handed to hooks
//! - [`NewLink`], [`LinkPatch`] - create and partial-update inputs

pub mod link;

pub use link::{Link, LinkFields, LinkPatch, NewLink};

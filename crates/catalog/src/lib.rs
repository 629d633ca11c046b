//! Catalog domain module.
//!
//! This crate contains the immutable product catalog: fixture data, ordered
//! enumeration, and id lookup, implemented purely as deterministic domain
//! logic (no IO, no storage).

pub mod product;

pub use product::{Catalog, Product};

//! # sda-core: Foundational Types
//!
//! Defines the schema property model that content-type catalogs are written
//! in, and the error hierarchy raised when a catalog is malformed. Every other
//! crate in the workspace depends on `sda-core`; it depends on nothing
//! internal.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `sda-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod property;

pub use error::CatalogError;
pub use property::{PropertyKind, SchemaProperty, ValidationPattern};

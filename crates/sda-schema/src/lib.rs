//! # sda-schema: Schema-to-Widget Field Mapping
//!
//! Holds the compiled-in `WebSite` catalog and the mapper that turns a
//! catalog into the editor field list.
//!
//! ## Mapping (`mapper`)
//!
//! [`generate_fields`] is a pure, deterministic function: the same catalog
//! always yields the same descriptors, anchors first, catalog order kept at
//! every nesting level. A malformed catalog yields a [`CatalogError`] naming
//! the offending property and no output at all.
//!
//! ## Catalog (`catalog`)
//!
//! [`website_catalog`] is declarative data. Extending the editable surface
//! means adding a row there; the mapper does not change.
//!
//! ## Crate Policy
//!
//! - No I/O. Writing the configuration is `sda-cms`'s job.
//! - Descriptors are never mutated after the mapper returns them.

pub mod catalog;
pub mod descriptor;
pub mod mapper;

pub use catalog::{url_pattern, website_catalog};
pub use descriptor::{FieldDescriptor, Widget};
pub use mapper::{generate_fields, FieldMapper, UnknownKindPolicy};
pub use sda_core::CatalogError;

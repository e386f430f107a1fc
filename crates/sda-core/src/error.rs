//! # Error Types
//!
//! Catalog errors identify the offending property by its dotted path from
//! the catalog root (`author.url`, `keywords[]` for a list item), so a
//! malformed declaration can be located without a debugger.

use thiserror::Error;

/// A catalog declaration the field mapper refuses to map.
///
/// Any of these aborts generation before a single descriptor is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// A property with an empty name.
    #[error("property at '{path}' has an empty name")]
    EmptyName {
        /// Path of the parent scope plus the position of the property.
        path: String,
    },

    /// Two siblings share a name, or a top-level property collides with an
    /// anchor field.
    #[error("duplicate property name '{path}'")]
    DuplicateName {
        /// Dotted path of the second occurrence.
        path: String,
    },

    /// An object or object-list property without `children`.
    #[error("{kind} property '{path}' declares no children")]
    MissingChildren {
        /// Dotted property path.
        path: String,
        /// Kind name of the property.
        kind: String,
    },

    /// A repeated-scalar property without an item property.
    #[error("repeated-scalar property '{path}' has no item label")]
    MissingItem {
        /// Dotted property path.
        path: String,
    },

    /// A list item whose kind is not scalar.
    #[error("item of repeated-scalar property '{path}' must be scalar, found {kind}")]
    NonScalarItem {
        /// Dotted property path of the list.
        path: String,
        /// Kind name of the offending item.
        kind: String,
    },

    /// An enumerated property with an empty option set.
    #[error("enumerated property '{path}' declares no options")]
    MissingOptions {
        /// Dotted property path.
        path: String,
    },

    /// A hidden-constant property without its fixed value.
    #[error("hidden-constant property '{path}' has no default value")]
    MissingDefault {
        /// Dotted property path.
        path: String,
    },

    /// An attribute present on a kind that does not accept it.
    #[error("{kind} property '{path}' does not accept '{attribute}'")]
    UnexpectedAttribute {
        /// Dotted property path.
        path: String,
        /// Kind name of the property.
        kind: String,
        /// Name of the attribute (`children`, `item`, `options`, `default`, `pattern`).
        attribute: &'static str,
    },

    /// A kind the mapper does not know, under the strict policy.
    #[error("property '{path}' has unrecognized kind '{kind}'")]
    UnrecognizedKind {
        /// Dotted property path.
        path: String,
        /// The raw kind name.
        kind: String,
    },
}

impl CatalogError {
    /// The dotted path of the offending property.
    pub fn path(&self) -> &str {
        match self {
            Self::EmptyName { path }
            | Self::DuplicateName { path }
            | Self::MissingChildren { path, .. }
            | Self::MissingItem { path }
            | Self::NonScalarItem { path, .. }
            | Self::MissingOptions { path }
            | Self::MissingDefault { path }
            | Self::UnexpectedAttribute { path, .. }
            | Self::UnrecognizedKind { path, .. } => path,
        }
    }
}

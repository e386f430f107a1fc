//! # Configuration Envelope
//!
//! The full structure the CMS reads at startup: backend, media library and a
//! single collection holding a single file entry whose `fields` are the
//! mapped descriptors.
//!
//! The singleton invariants are part of the types: `collections` and `files`
//! are one-element arrays, which serialize as one-element sequences and
//! refuse to deserialize from anything else.

use serde::{Deserialize, Serialize};

use sda_schema::FieldDescriptor;

/// Backend name the editor uses when proxying through the local server.
pub const BACKEND_NAME: &str = "git-gateway";
/// Media library provider name.
pub const MEDIA_LIBRARY_NAME: &str = "local";
/// Collection and file entry identifier.
pub const COLLECTION_NAME: &str = "website";
pub const COLLECTION_LABEL: &str = "Website";
pub const FILE_LABEL: &str = "Website Configuration";

/// Where the edited content lives and where media is served from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteMeta {
    /// Project-relative path of the JSON data file the editor writes.
    pub storage_target: String,
    /// Endpoint of the local media library server.
    pub media_endpoint: String,
    /// Project-relative folder uploaded media is stored in.
    pub media_folder: String,
}

impl Default for SiteMeta {
    fn default() -> Self {
        Self {
            storage_target: "src/data/website/website.json".to_string(),
            media_endpoint: "http://localhost:8080".to_string(),
            media_folder: "public/images".to_string(),
        }
    }
}

/// Root of the rendered configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CmsConfig {
    pub local_backend: bool,
    pub backend: Backend,
    pub media_folder: String,
    pub media_library: MediaLibrary,
    pub collections: [Collection; 1],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Backend {
    pub name: String,
    pub local_backend: bool,
    pub auth: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaLibrary {
    pub name: String,
    pub config: MediaLibraryConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaLibraryConfig {
    pub endpoint: String,
}

/// A collection of content files. `create` and `delete` stay false: the
/// content type is a singleton that can only be edited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    pub name: String,
    pub label: String,
    pub create: bool,
    pub delete: bool,
    pub files: [FileEntry; 1],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    pub file: String,
    pub name: String,
    pub label: String,
    pub fields: Vec<FieldDescriptor>,
}

impl CmsConfig {
    /// The editor fields of the single file entry.
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.collections[0].files[0].fields
    }
}

/// Wrap `fields` in the local-only, auth-disabled envelope.
pub fn build_envelope(fields: Vec<FieldDescriptor>, site: &SiteMeta) -> CmsConfig {
    CmsConfig {
        local_backend: true,
        backend: Backend {
            name: BACKEND_NAME.to_string(),
            local_backend: true,
            auth: false,
        },
        media_folder: site.media_folder.clone(),
        media_library: MediaLibrary {
            name: MEDIA_LIBRARY_NAME.to_string(),
            config: MediaLibraryConfig {
                endpoint: site.media_endpoint.clone(),
            },
        },
        collections: [Collection {
            name: COLLECTION_NAME.to_string(),
            label: COLLECTION_LABEL.to_string(),
            create: false,
            delete: false,
            files: [FileEntry {
                file: site.storage_target.clone(),
                name: COLLECTION_NAME.to_string(),
                label: FILE_LABEL.to_string(),
                fields,
            }],
        }],
    }
}

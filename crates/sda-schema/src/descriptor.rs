//! # Field Descriptors
//!
//! The editor-facing description of one field. Descriptors serialize with
//! the editor's own key names (`widget`, `fields`, `field`), in struct
//! declaration order, so the rendered configuration is stable across runs.

use serde::{Deserialize, Serialize};

use sda_core::ValidationPattern;

/// How the editor presents and edits a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Widget {
    String,
    Text,
    Number,
    Boolean,
    Datetime,
    Select,
    Object,
    List,
    Hidden,
}

impl Widget {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Text => "text",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Datetime => "datetime",
            Self::Select => "select",
            Self::Object => "object",
            Self::List => "list",
            Self::Hidden => "hidden",
        }
    }
}

impl std::fmt::Display for Widget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One editor field.
///
/// `children` renders as `fields` (objects and object lists); `item` renders
/// as `field` (the single entry field of a scalar list).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub widget: Widget,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<ValidationPattern>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    #[serde(rename = "fields", default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<FieldDescriptor>>,
    #[serde(rename = "field", default, skip_serializing_if = "Option::is_none")]
    pub item: Option<Box<FieldDescriptor>>,
}

impl FieldDescriptor {
    /// A hidden field pinned to `value`. Used for the anchor fields.
    pub fn hidden(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: None,
            widget: Widget::Hidden,
            required: None,
            default: Some(value.into()),
            options: Vec::new(),
            pattern: None,
            hint: None,
            children: None,
            item: None,
        }
    }

    /// Look up a direct child by name.
    pub fn child(&self, name: &str) -> Option<&FieldDescriptor> {
        self.children
            .as_deref()
            .and_then(|children| children.iter().find(|c| c.name == name))
    }
}

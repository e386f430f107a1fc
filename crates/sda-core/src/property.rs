//! # Schema Property Model
//!
//! A [`SchemaProperty`] is one named, typed entry of a structured content
//! type. Catalogs are ordered slices of properties; order is significant and
//! is carried through to the editor unchanged.
//!
//! The model is deliberately flat: kind-specific attributes (`children`,
//! `item`, `options`, `default`) are optional fields rather than enum payloads
//! so that a malformed declaration (a list without an item, an object without
//! children) is representable and can be rejected with a precise error by the
//! mapper instead of being unrepresentable at the type level.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The kind of value a schema property holds.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PropertyKind {
    /// Single-line text.
    Text,
    /// Multi-line text.
    MultilineText,
    /// Integer or decimal number.
    Number,
    /// True/false flag.
    Boolean,
    /// Date or date-time.
    DateTime,
    /// One value out of a fixed option set.
    Enumerated,
    /// Nested object with its own ordered child properties.
    Object,
    /// List of scalar values described by a single item property.
    RepeatedScalar,
    /// List of objects sharing one ordered child property set.
    RepeatedObject,
    /// Fixed value that is never user-editable.
    HiddenConstant,
    /// A kind this generator does not know. Carries the raw kind name.
    Unrecognized(String),
}

impl PropertyKind {
    /// Scalar kinds are the only kinds allowed as list items.
    pub fn is_scalar(&self) -> bool {
        matches!(
            self,
            Self::Text | Self::MultilineText | Self::Number | Self::Boolean | Self::DateTime
        )
    }

    /// Text kinds are the only kinds that may carry a validation pattern.
    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text | Self::MultilineText)
    }

    /// Kinds whose declaration requires `children`.
    pub fn has_children(&self) -> bool {
        matches!(self, Self::Object | Self::RepeatedObject)
    }

    /// The kind name used in diagnostics.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Text => "scalar-text",
            Self::MultilineText => "scalar-text (multi-line)",
            Self::Number => "scalar-number",
            Self::Boolean => "scalar-boolean",
            Self::DateTime => "scalar-datetime",
            Self::Enumerated => "enumerated",
            Self::Object => "nested-object",
            Self::RepeatedScalar => "repeated-scalar",
            Self::RepeatedObject => "repeated-object",
            Self::HiddenConstant => "hidden-constant",
            Self::Unrecognized(raw) => raw,
        }
    }
}

impl fmt::Display for PropertyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A `(regex, message)` pair enforced by the editor at data-entry time.
///
/// Serializes as a two-element sequence, which is the shape the editor
/// expects for its `pattern` field option.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ValidationPattern(String, String);

impl ValidationPattern {
    /// Construct a pattern from a regex source and a human-readable message.
    pub fn new(regex: impl Into<String>, message: impl Into<String>) -> Self {
        Self(regex.into(), message.into())
    }

    /// The regex source, unmodified.
    pub fn regex(&self) -> &str {
        &self.0
    }

    /// The message shown when the regex does not match.
    pub fn message(&self) -> &str {
        &self.1
    }
}

/// One named, typed entry in a content-type catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaProperty {
    /// Identifier, unique among siblings. Used as the data key downstream.
    pub name: String,
    /// Human-readable label. The editor shows `name` when absent.
    pub label: Option<String>,
    /// Value kind; determines the editor widget.
    pub kind: PropertyKind,
    /// Whether the editor must insist on a value.
    pub required: bool,
    /// Optional regex constraint (text kinds only).
    pub pattern: Option<ValidationPattern>,
    /// Editor help text.
    pub hint: Option<String>,
    /// Ordered child properties (object kinds only).
    pub children: Option<Vec<SchemaProperty>>,
    /// The per-entry property of a repeated-scalar list. Its `name` is the
    /// item label.
    pub item: Option<Box<SchemaProperty>>,
    /// Allowed values (enumerated only).
    pub options: Vec<String>,
    /// Fixed value (hidden-constant only).
    pub default: Option<String>,
}

impl SchemaProperty {
    /// A bare property of the given kind with no optional attributes set.
    pub fn new(name: impl Into<String>, kind: PropertyKind) -> Self {
        Self {
            name: name.into(),
            label: None,
            kind,
            required: false,
            pattern: None,
            hint: None,
            children: None,
            item: None,
            options: Vec::new(),
            default: None,
        }
    }

    pub fn text(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, PropertyKind::Text).with_label(label)
    }

    pub fn multiline(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, PropertyKind::MultilineText).with_label(label)
    }

    pub fn number(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, PropertyKind::Number).with_label(label)
    }

    pub fn boolean(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, PropertyKind::Boolean).with_label(label)
    }

    pub fn datetime(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, PropertyKind::DateTime).with_label(label)
    }

    /// An enumerated property offering `options` in the given order.
    pub fn select<I, S>(name: impl Into<String>, label: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut prop = Self::new(name, PropertyKind::Enumerated).with_label(label);
        prop.options = options.into_iter().map(Into::into).collect();
        prop
    }

    /// A nested object with ordered children.
    pub fn object(
        name: impl Into<String>,
        label: impl Into<String>,
        children: Vec<SchemaProperty>,
    ) -> Self {
        Self::new(name, PropertyKind::Object)
            .with_label(label)
            .with_children(children)
    }

    /// A list of scalar entries, each described by `item`.
    pub fn list(name: impl Into<String>, label: impl Into<String>, item: SchemaProperty) -> Self {
        let mut prop = Self::new(name, PropertyKind::RepeatedScalar).with_label(label);
        prop.item = Some(Box::new(item));
        prop
    }

    /// A list of objects sharing the ordered `children`.
    pub fn object_list(
        name: impl Into<String>,
        label: impl Into<String>,
        children: Vec<SchemaProperty>,
    ) -> Self {
        Self::new(name, PropertyKind::RepeatedObject)
            .with_label(label)
            .with_children(children)
    }

    /// A non-editable property pinned to `value`.
    pub fn hidden(name: impl Into<String>, value: impl Into<String>) -> Self {
        let mut prop = Self::new(name, PropertyKind::HiddenConstant);
        prop.default = Some(value.into());
        prop
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_pattern(mut self, pattern: ValidationPattern) -> Self {
        self.pattern = Some(pattern);
        self
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    pub fn with_children(mut self, children: Vec<SchemaProperty>) -> Self {
        self.children = Some(children);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builders_set_kind_and_label() {
        let prop = SchemaProperty::text("name", "Name").required();
        assert_eq!(prop.kind, PropertyKind::Text);
        assert_eq!(prop.label.as_deref(), Some("Name"));
        assert!(prop.required);
        assert!(prop.children.is_none());
    }

    #[test]
    fn new_defaults_to_optional() {
        let prop = SchemaProperty::new("x", PropertyKind::Number);
        assert!(!prop.required);
        assert!(prop.label.is_none());
        assert!(prop.options.is_empty());
    }

    #[test]
    fn list_builder_boxes_item() {
        let prop = SchemaProperty::list(
            "keywords",
            "Keywords",
            SchemaProperty::text("keyword", "Keyword"),
        );
        assert_eq!(prop.kind, PropertyKind::RepeatedScalar);
        assert_eq!(prop.item.as_ref().map(|i| i.name.as_str()), Some("keyword"));
    }

    #[test]
    fn select_keeps_option_order() {
        let prop = SchemaProperty::select("size", "Size", ["s", "m", "l"]);
        assert_eq!(prop.options, vec!["s", "m", "l"]);
    }

    #[test]
    fn hidden_carries_default() {
        let prop = SchemaProperty::hidden("@type", "WebSite");
        assert_eq!(prop.kind, PropertyKind::HiddenConstant);
        assert_eq!(prop.default.as_deref(), Some("WebSite"));
    }

    #[test]
    fn kind_classification() {
        assert!(PropertyKind::Text.is_scalar());
        assert!(PropertyKind::DateTime.is_scalar());
        assert!(!PropertyKind::Enumerated.is_scalar());
        assert!(!PropertyKind::Object.is_scalar());
        assert!(PropertyKind::MultilineText.is_text());
        assert!(!PropertyKind::Number.is_text());
        assert!(PropertyKind::RepeatedObject.has_children());
        assert!(!PropertyKind::RepeatedScalar.has_children());
    }

    #[test]
    fn unrecognized_kind_displays_raw_name() {
        let kind = PropertyKind::Unrecognized("GeoShape".to_string());
        assert_eq!(kind.to_string(), "GeoShape");
        assert_eq!(PropertyKind::RepeatedScalar.to_string(), "repeated-scalar");
    }

    #[test]
    fn pattern_serializes_as_pair() {
        let pattern = ValidationPattern::new("^https?://.+", "Must be a URL");
        let value = serde_json::to_value(&pattern).unwrap();
        assert_eq!(value, serde_json::json!(["^https?://.+", "Must be a URL"]));
        let back: ValidationPattern = serde_json::from_value(value).unwrap();
        assert_eq!(back.regex(), "^https?://.+");
        assert_eq!(back.message(), "Must be a URL");
    }
}

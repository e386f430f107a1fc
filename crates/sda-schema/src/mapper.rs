//! # Field Mapper
//!
//! Turns an ordered catalog of [`SchemaProperty`] into the ordered list of
//! [`FieldDescriptor`] the editor consumes.
//!
//! ## Mapping
//!
//! | Kind | Widget |
//! |---|---|
//! | text / multi-line text | `string` / `text` |
//! | number, boolean, datetime | `number`, `boolean`, `datetime` |
//! | enumerated | `select` with `options` |
//! | nested object | `object` with `fields` |
//! | repeated scalar | `list` with a single `field` |
//! | repeated object | `list` with `fields` |
//! | hidden constant | `hidden` with `default` |
//! | unrecognized | `object`, or an error under [`UnknownKindPolicy::Reject`] |
//!
//! Two hidden anchor fields (`@context`, then `@type`) always head the
//! top-level list. Catalog order is preserved at every depth.
//!
//! ## Failure
//!
//! Validation and mapping happen in the same recursive pass. The first
//! malformed property aborts the run and the partially built list is
//! dropped; callers never observe a partial result.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use sda_core::{CatalogError, PropertyKind, SchemaProperty};

use crate::descriptor::{FieldDescriptor, Widget};

/// Name of the anchor field carrying the vocabulary context.
pub const CONTEXT_FIELD: &str = "@context";
/// Name of the anchor field carrying the content type name.
pub const TYPE_FIELD: &str = "@type";
/// Default vocabulary context.
pub const SCHEMA_ORG_CONTEXT: &str = "https://schema.org";
/// Default content type.
pub const WEBSITE_TYPE: &str = "WebSite";

/// What to do with a property whose kind the mapper does not know.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnknownKindPolicy {
    /// Map it to an `object` widget and log a warning.
    #[default]
    Fallback,
    /// Reject the catalog.
    Reject,
}

/// Stateless schema-to-widget mapper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMapper {
    context: String,
    type_name: String,
    unknown_kinds: UnknownKindPolicy,
}

impl Default for FieldMapper {
    fn default() -> Self {
        Self::new(SCHEMA_ORG_CONTEXT, WEBSITE_TYPE)
    }
}

impl FieldMapper {
    /// A mapper whose anchors identify `context` and `type_name`.
    pub fn new(context: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            context: context.into(),
            type_name: type_name.into(),
            unknown_kinds: UnknownKindPolicy::default(),
        }
    }

    pub fn with_unknown_kinds(mut self, policy: UnknownKindPolicy) -> Self {
        self.unknown_kinds = policy;
        self
    }

    pub fn unknown_kinds(&self) -> UnknownKindPolicy {
        self.unknown_kinds
    }

    /// The two synthesized anchor fields, in emission order.
    pub fn anchors(&self) -> [FieldDescriptor; 2] {
        [
            FieldDescriptor::hidden(CONTEXT_FIELD, self.context.as_str()),
            FieldDescriptor::hidden(TYPE_FIELD, self.type_name.as_str()),
        ]
    }

    /// Map a catalog to editor fields, anchors first.
    ///
    /// # Errors
    ///
    /// Returns the first [`CatalogError`] found, in catalog order, depth first.
    pub fn generate(
        &self,
        catalog: &[SchemaProperty],
    ) -> Result<Vec<FieldDescriptor>, CatalogError> {
        let mut fields = Vec::with_capacity(catalog.len() + 2);
        fields.extend(self.anchors());
        fields.extend(self.map_scope(catalog, "", &[CONTEXT_FIELD, TYPE_FIELD])?);
        tracing::debug!(
            type_name = %self.type_name,
            properties = catalog.len(),
            fields = fields.len(),
            "mapped catalog"
        );
        Ok(fields)
    }

    /// Map one sibling scope. `reserved` names count as already taken.
    fn map_scope(
        &self,
        props: &[SchemaProperty],
        parent: &str,
        reserved: &[&str],
    ) -> Result<Vec<FieldDescriptor>, CatalogError> {
        let mut seen: HashSet<&str> = reserved.iter().copied().collect();
        let mut fields = Vec::with_capacity(props.len());

        for (index, prop) in props.iter().enumerate() {
            if prop.name.is_empty() {
                return Err(CatalogError::EmptyName {
                    path: format!("{parent}[{index}]"),
                });
            }
            let path = join_path(parent, &prop.name);
            if !seen.insert(prop.name.as_str()) {
                return Err(CatalogError::DuplicateName { path });
            }
            fields.push(self.map_property(prop, &path)?);
        }

        Ok(fields)
    }

    fn map_property(
        &self,
        prop: &SchemaProperty,
        path: &str,
    ) -> Result<FieldDescriptor, CatalogError> {
        let widget = self.widget_for(&prop.kind, path)?;
        check_attributes(prop, path)?;

        let children = match &prop.children {
            Some(children) => Some(self.map_scope(children, path, &[])?),
            None => None,
        };

        let item = match &prop.item {
            Some(item) => {
                let item_path = format!("{path}[]");
                if item.name.is_empty() {
                    return Err(CatalogError::EmptyName { path: item_path });
                }
                Some(Box::new(self.map_property(item, &item_path)?))
            }
            None => None,
        };

        Ok(FieldDescriptor {
            name: prop.name.clone(),
            label: Some(prop.label.clone().unwrap_or_else(|| prop.name.clone())),
            widget,
            required: Some(prop.required),
            default: prop.default.clone(),
            options: prop.options.clone(),
            pattern: prop.pattern.clone(),
            hint: prop.hint.clone(),
            children,
            item,
        })
    }

    fn widget_for(&self, kind: &PropertyKind, path: &str) -> Result<Widget, CatalogError> {
        let widget = match kind {
            PropertyKind::Text => Widget::String,
            PropertyKind::MultilineText => Widget::Text,
            PropertyKind::Number => Widget::Number,
            PropertyKind::Boolean => Widget::Boolean,
            PropertyKind::DateTime => Widget::Datetime,
            PropertyKind::Enumerated => Widget::Select,
            PropertyKind::Object => Widget::Object,
            PropertyKind::RepeatedScalar | PropertyKind::RepeatedObject => Widget::List,
            PropertyKind::HiddenConstant => Widget::Hidden,
            PropertyKind::Unrecognized(raw) => match self.unknown_kinds {
                UnknownKindPolicy::Fallback => {
                    tracing::warn!(
                        property = path,
                        kind = %raw,
                        "unrecognized kind, using object widget"
                    );
                    Widget::Object
                }
                UnknownKindPolicy::Reject => {
                    return Err(CatalogError::UnrecognizedKind {
                        path: path.to_string(),
                        kind: raw.clone(),
                    });
                }
            },
        };
        Ok(widget)
    }
}

/// Map `catalog` with the default WebSite anchors and the permissive
/// unknown-kind policy.
pub fn generate_fields(catalog: &[SchemaProperty]) -> Result<Vec<FieldDescriptor>, CatalogError> {
    FieldMapper::default().generate(catalog)
}

fn join_path(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{parent}.{name}")
    }
}

/// Reject kind-specific attributes that are missing where required or
/// present where meaningless.
fn check_attributes(prop: &SchemaProperty, path: &str) -> Result<(), CatalogError> {
    let kind = &prop.kind;
    let unexpected = |attribute: &'static str| CatalogError::UnexpectedAttribute {
        path: path.to_string(),
        kind: kind.to_string(),
        attribute,
    };

    // Unrecognized kinds may carry children so the object fallback keeps them.
    match (&prop.children, kind.has_children()) {
        (None, true) => {
            return Err(CatalogError::MissingChildren {
                path: path.to_string(),
                kind: kind.to_string(),
            })
        }
        (Some(_), false) if !matches!(kind, PropertyKind::Unrecognized(_)) => {
            return Err(unexpected("children"))
        }
        _ => {}
    }

    match (&prop.item, kind) {
        (None, PropertyKind::RepeatedScalar) => {
            return Err(CatalogError::MissingItem {
                path: path.to_string(),
            })
        }
        (Some(item), PropertyKind::RepeatedScalar) if !item.kind.is_scalar() => {
            return Err(CatalogError::NonScalarItem {
                path: path.to_string(),
                kind: item.kind.to_string(),
            })
        }
        (Some(_), k) if *k != PropertyKind::RepeatedScalar => return Err(unexpected("item")),
        _ => {}
    }

    match (prop.options.is_empty(), kind) {
        (true, PropertyKind::Enumerated) => {
            return Err(CatalogError::MissingOptions {
                path: path.to_string(),
            })
        }
        (false, k) if *k != PropertyKind::Enumerated => return Err(unexpected("options")),
        _ => {}
    }

    match (&prop.default, kind) {
        (None, PropertyKind::HiddenConstant) => {
            return Err(CatalogError::MissingDefault {
                path: path.to_string(),
            })
        }
        (Some(_), k) if *k != PropertyKind::HiddenConstant => return Err(unexpected("default")),
        _ => {}
    }

    if prop.pattern.is_some() && !kind.is_text() {
        return Err(unexpected("pattern"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sda_core::ValidationPattern;

    fn url_pattern() -> ValidationPattern {
        ValidationPattern::new(
            "^https?://.+",
            "Must be a valid URL starting with http:// or https://",
        )
    }

    #[test]
    fn empty_catalog_yields_only_anchors() {
        let fields = generate_fields(&[]).unwrap();
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0], FieldDescriptor::hidden("@context", "https://schema.org"));
        assert_eq!(fields[1], FieldDescriptor::hidden("@type", "WebSite"));
    }

    #[test]
    fn required_name_then_keyword_list() {
        let catalog = vec![
            SchemaProperty::text("name", "Name").required(),
            SchemaProperty::list(
                "keywords",
                "Keywords",
                SchemaProperty::text("keyword", "Keyword"),
            ),
        ];
        let fields = generate_fields(&catalog).unwrap();
        assert_eq!(fields.len(), 4);

        let name = &fields[2];
        assert_eq!(name.name, "name");
        assert_eq!(name.widget, Widget::String);
        assert_eq!(name.required, Some(true));

        let keywords = &fields[3];
        assert_eq!(keywords.name, "keywords");
        assert_eq!(keywords.widget, Widget::List);
        assert!(keywords.children.is_none());
        let item = keywords.item.as_deref().unwrap();
        assert_eq!(item.name, "keyword");
        assert_eq!(item.widget, Widget::String);
    }

    #[test]
    fn author_object_carries_url_pattern_on_second_child() {
        let catalog = vec![SchemaProperty::object(
            "author",
            "Author",
            vec![
                SchemaProperty::text("name", "Name"),
                SchemaProperty::text("url", "URL").with_pattern(url_pattern()),
            ],
        )];
        let fields = generate_fields(&catalog).unwrap();
        let author = &fields[2];
        assert_eq!(author.widget, Widget::Object);
        let children = author.children.as_deref().unwrap();
        assert_eq!(children.len(), 2);
        assert_eq!(children[0].name, "name");
        assert!(children[0].pattern.is_none());
        assert_eq!(children[1].name, "url");
        assert_eq!(children[1].pattern, Some(url_pattern()));
    }

    #[test]
    fn widget_table() {
        let catalog = vec![
            SchemaProperty::text("a", "A"),
            SchemaProperty::multiline("b", "B"),
            SchemaProperty::number("c", "C"),
            SchemaProperty::boolean("d", "D"),
            SchemaProperty::datetime("e", "E"),
            SchemaProperty::select("f", "F", ["x", "y"]),
            SchemaProperty::object("g", "G", vec![]),
            SchemaProperty::list("h", "H", SchemaProperty::number("n", "N")),
            SchemaProperty::object_list("i", "I", vec![SchemaProperty::text("t", "T")]),
            SchemaProperty::hidden("j", "fixed"),
            SchemaProperty::new("k", PropertyKind::Unrecognized("GeoShape".into())),
        ];
        let widgets: Vec<Widget> = generate_fields(&catalog)
            .unwrap()
            .iter()
            .skip(2)
            .map(|f| f.widget)
            .collect();
        assert_eq!(
            widgets,
            vec![
                Widget::String,
                Widget::Text,
                Widget::Number,
                Widget::Boolean,
                Widget::Datetime,
                Widget::Select,
                Widget::Object,
                Widget::List,
                Widget::List,
                Widget::Hidden,
                Widget::Object,
            ]
        );
    }

    #[test]
    fn anchor_names_are_reserved_at_top_level() {
        let catalog = vec![SchemaProperty::text("@type", "Type")];
        let err = generate_fields(&catalog).unwrap_err();
        assert_eq!(err, CatalogError::DuplicateName { path: "@type".into() });
    }

    #[test]
    fn select_carries_options_in_order() {
        let nested = vec![SchemaProperty::object_list(
            "potentialAction",
            "Potential Actions",
            vec![SchemaProperty::select(
                "@type",
                "Action Type",
                ["SearchAction", "ReadAction"],
            )],
        )];
        let fields = generate_fields(&nested).unwrap();
        let action = &fields[2].children.as_deref().unwrap()[0];
        assert_eq!(action.widget, Widget::Select);
        assert_eq!(action.options, vec!["SearchAction", "ReadAction"]);
    }

    #[test]
    fn hidden_catalog_property_keeps_default() {
        let fields = generate_fields(&[SchemaProperty::hidden("kind", "site")]).unwrap();
        assert_eq!(fields[2].widget, Widget::Hidden);
        assert_eq!(fields[2].default.as_deref(), Some("site"));
    }

    #[test]
    fn optional_fields_are_explicitly_not_required() {
        let fields = generate_fields(&[SchemaProperty::text("headline", "Headline")]).unwrap();
        assert_eq!(fields[2].required, Some(false));
        assert_eq!(fields[0].required, None);
    }

    #[test]
    fn label_defaults_to_name() {
        let prop = SchemaProperty::new("license", PropertyKind::Text);
        let fields = generate_fields(&[prop]).unwrap();
        assert_eq!(fields[2].label.as_deref(), Some("license"));
    }

    #[test]
    fn hint_passes_through() {
        let item = SchemaProperty::text("url", "URL");
        let prop = SchemaProperty::list("sameAs", "Social Media Links", item)
            .with_hint("Add links to your social media profiles");
        let fields = generate_fields(&[prop]).unwrap();
        assert_eq!(fields[2].hint.as_deref(), Some("Add links to your social media profiles"));
    }

    #[test]
    fn list_item_keeps_pattern_and_multiline_kind() {
        let catalog = vec![
            SchemaProperty::list(
                "sameAs",
                "Social Media Links",
                SchemaProperty::text("url", "URL").with_pattern(url_pattern()),
            ),
            SchemaProperty::list(
                "comment",
                "Comments",
                SchemaProperty::multiline("comment", "Comment"),
            ),
        ];
        let fields = generate_fields(&catalog).unwrap();
        assert_eq!(fields[2].item.as_ref().unwrap().pattern, Some(url_pattern()));
        assert_eq!(fields[3].item.as_ref().unwrap().widget, Widget::Text);
    }

    #[test]
    fn deep_nesting_is_unbounded() {
        let mut prop = SchemaProperty::text("leaf", "Leaf");
        for depth in 0..12 {
            prop = SchemaProperty::object(format!("level{depth}"), "Level", vec![prop]);
        }
        let fields = generate_fields(&[prop]).unwrap();
        let mut current = &fields[2];
        let mut depth = 0;
        while let Some(children) = current.children.as_deref() {
            current = &children[0];
            depth += 1;
        }
        assert_eq!(depth, 12);
        assert_eq!(current.name, "leaf");
    }

    #[test]
    fn missing_item_fails_with_property_name() {
        let mut keywords = SchemaProperty::new("keywords", PropertyKind::RepeatedScalar);
        keywords.label = Some("Keywords".into());
        let catalog = vec![SchemaProperty::text("name", "Name"), keywords];
        let err = generate_fields(&catalog).unwrap_err();
        assert_eq!(err, CatalogError::MissingItem { path: "keywords".into() });
        assert!(err.to_string().contains("keywords"));
    }

    #[test]
    fn nested_errors_report_dotted_path() {
        let catalog = vec![SchemaProperty::object(
            "author",
            "Author",
            vec![SchemaProperty::text("url", "URL"), SchemaProperty::text("url", "Other URL")],
        )];
        let err = generate_fields(&catalog).unwrap_err();
        assert_eq!(err, CatalogError::DuplicateName { path: "author.url".into() });
    }

    #[test]
    fn duplicate_top_level_name_rejected() {
        let catalog = vec![
            SchemaProperty::text("name", "Name"),
            SchemaProperty::number("name", "Name"),
        ];
        assert!(matches!(
            generate_fields(&catalog),
            Err(CatalogError::DuplicateName { .. })
        ));
    }

    #[test]
    fn same_name_in_different_scopes_is_fine() {
        let catalog = vec![
            SchemaProperty::text("name", "Name"),
            SchemaProperty::object("author", "Author", vec![SchemaProperty::text("name", "Name")]),
        ];
        assert!(generate_fields(&catalog).is_ok());
    }

    #[test]
    fn empty_name_rejected_with_position() {
        let unnamed = SchemaProperty::new("", PropertyKind::Text);
        let catalog = vec![SchemaProperty::object("author", "Author", vec![unnamed])];
        let err = generate_fields(&catalog).unwrap_err();
        assert_eq!(err, CatalogError::EmptyName { path: "author[0]".into() });
    }

    #[test]
    fn object_without_children_rejected() {
        let catalog = vec![SchemaProperty::new("author", PropertyKind::Object)];
        assert!(matches!(
            generate_fields(&catalog),
            Err(CatalogError::MissingChildren { .. })
        ));
        let catalog = vec![SchemaProperty::new("actions", PropertyKind::RepeatedObject)];
        assert!(matches!(
            generate_fields(&catalog),
            Err(CatalogError::MissingChildren { .. })
        ));
    }

    #[test]
    fn non_scalar_item_rejected() {
        let item = SchemaProperty::object("entry", "Entry", vec![]);
        let catalog = vec![SchemaProperty::list("entries", "Entries", item)];
        let err = generate_fields(&catalog).unwrap_err();
        assert_eq!(
            err,
            CatalogError::NonScalarItem {
                path: "entries".into(),
                kind: "nested-object".into()
            }
        );
    }

    #[test]
    fn enumerated_without_options_rejected() {
        let catalog = vec![SchemaProperty::select("size", "Size", Vec::<String>::new())];
        assert_eq!(
            generate_fields(&catalog).unwrap_err(),
            CatalogError::MissingOptions { path: "size".into() }
        );
    }

    #[test]
    fn hidden_without_default_rejected() {
        let catalog = vec![SchemaProperty::new("kind", PropertyKind::HiddenConstant)];
        assert_eq!(
            generate_fields(&catalog).unwrap_err(),
            CatalogError::MissingDefault { path: "kind".into() }
        );
    }

    #[test]
    fn pattern_on_number_rejected() {
        let catalog =
            vec![SchemaProperty::number("position", "Position").with_pattern(url_pattern())];
        let err = generate_fields(&catalog).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::UnexpectedAttribute { attribute: "pattern", .. }
        ));
    }

    #[test]
    fn children_on_scalar_rejected() {
        let catalog = vec![SchemaProperty::text("name", "Name").with_children(vec![])];
        assert!(matches!(
            generate_fields(&catalog),
            Err(CatalogError::UnexpectedAttribute { attribute: "children", .. })
        ));
    }

    #[test]
    fn unrecognized_kind_falls_back_to_object_with_children() {
        let prop = SchemaProperty::new("area", PropertyKind::Unrecognized("Place".into()))
            .with_children(vec![SchemaProperty::text("name", "Name")]);
        let fields = generate_fields(&[prop]).unwrap();
        assert_eq!(fields[2].widget, Widget::Object);
        assert_eq!(fields[2].children.as_ref().map(Vec::len), Some(1));
    }

    #[test]
    fn unrecognized_kind_rejected_under_strict_policy() {
        let mapper = FieldMapper::default().with_unknown_kinds(UnknownKindPolicy::Reject);
        let catalog = vec![SchemaProperty::object(
            "author",
            "Author",
            vec![SchemaProperty::new("shape", PropertyKind::Unrecognized("GeoShape".into()))],
        )];
        assert_eq!(
            mapper.generate(&catalog).unwrap_err(),
            CatalogError::UnrecognizedKind {
                path: "author.shape".into(),
                kind: "GeoShape".into()
            }
        );
    }

    #[test]
    fn custom_anchors() {
        let mapper = FieldMapper::new("https://example.org/vocab", "Article");
        let fields = mapper.generate(&[]).unwrap();
        assert_eq!(fields[0].default.as_deref(), Some("https://example.org/vocab"));
        assert_eq!(fields[1].default.as_deref(), Some("Article"));
    }

    #[test]
    fn policy_deserializes_kebab_case() {
        let policy: UnknownKindPolicy = serde_json::from_str("\"reject\"").unwrap();
        assert_eq!(policy, UnknownKindPolicy::Reject);
        assert_eq!(UnknownKindPolicy::default(), UnknownKindPolicy::Fallback);
    }
}

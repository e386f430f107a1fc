//! # WebSite Catalog
//!
//! The compiled-in description of the schema.org `WebSite` type as it is
//! edited through the CMS. One builder call per property, in the order the
//! editor presents them. The `@context` and `@type` anchors are not listed
//! here; the mapper synthesizes them.

use sda_core::{SchemaProperty, ValidationPattern};

/// Regex every URL-shaped text field is constrained by.
pub const URL_REGEX: &str = "^https?://.+";
/// Message shown when [`URL_REGEX`] does not match.
pub const URL_MESSAGE: &str = "Must be a valid URL starting with http:// or https://";

pub fn url_pattern() -> ValidationPattern {
    ValidationPattern::new(URL_REGEX, URL_MESSAGE)
}

fn url(name: &str, label: &str) -> SchemaProperty {
    SchemaProperty::text(name, label).with_pattern(url_pattern())
}

/// A person or organization reference: a name and a profile URL.
fn party(name: &str, label: &str) -> SchemaProperty {
    SchemaProperty::object(
        name,
        label,
        vec![SchemaProperty::text("name", "Name"), url("url", "URL")],
    )
}

fn strings(name: &str, label: &str, item: &str, item_label: &str) -> SchemaProperty {
    SchemaProperty::list(name, label, SchemaProperty::text(item, item_label))
}

/// The editable properties of a `WebSite`, in presentation order.
pub fn website_catalog() -> Vec<SchemaProperty> {
    vec![
        SchemaProperty::text("name", "Name").required(),
        url("url", "URL").required(),
        SchemaProperty::multiline("description", "Description"),
        SchemaProperty::object_list(
            "potentialAction",
            "Potential Actions",
            vec![
                SchemaProperty::select("@type", "Action Type", ["SearchAction"]),
                url("target", "Target URL"),
            ],
        ),
        SchemaProperty::text("inLanguage", "Language"),
        SchemaProperty::text("version", "Version"),
        party("author", "Author"),
        party("publisher", "Publisher"),
        SchemaProperty::datetime("datePublished", "Date Published"),
        SchemaProperty::datetime("dateModified", "Date Modified"),
        strings("keywords", "Keywords", "keyword", "Keyword"),
        SchemaProperty::text("license", "License"),
        SchemaProperty::boolean("isAccessibleForFree", "Is Accessible For Free"),
        strings("accessibilityFeature", "Accessibility Features", "feature", "Feature"),
        strings("accessibilityHazard", "Accessibility Hazards", "hazard", "Hazard"),
        SchemaProperty::text("accessibilityAPI", "Accessibility API"),
        strings("accessibilityControl", "Accessibility Controls", "control", "Control"),
        SchemaProperty::multiline("accessibilitySummary", "Accessibility Summary"),
        SchemaProperty::object(
            "aggregateRating",
            "Aggregate Rating",
            vec![
                SchemaProperty::number("ratingValue", "Rating Value"),
                SchemaProperty::number("bestRating", "Best Rating"),
                SchemaProperty::number("worstRating", "Worst Rating"),
                SchemaProperty::number("ratingCount", "Rating Count"),
                SchemaProperty::number("reviewCount", "Review Count"),
            ],
        ),
        SchemaProperty::list("sameAs", "Social Media Links", url("url", "URL"))
            .with_hint("Add links to your social media profiles (e.g., Twitter, LinkedIn, GitHub)"),
        SchemaProperty::object(
            "audience",
            "Audience",
            vec![SchemaProperty::text("audienceType", "Audience Type")],
        ),
        strings("award", "Awards", "award", "Award"),
        strings("character", "Characters", "character", "Character"),
        SchemaProperty::list(
            "comment",
            "Comments",
            SchemaProperty::multiline("comment", "Comment"),
        ),
        SchemaProperty::text("contentLocation", "Content Location"),
        SchemaProperty::text("contentRating", "Content Rating"),
        strings("contributor", "Contributors", "contributor", "Contributor"),
        party("copyrightHolder", "Copyright Holder"),
        SchemaProperty::number("copyrightYear", "Copyright Year"),
        party("creator", "Creator"),
        party("editor", "Editor"),
        party("funder", "Funder"),
        strings("genre", "Genres", "genre", "Genre"),
        strings("hasPart", "Has Part", "part", "Part"),
        SchemaProperty::text("headline", "Headline"),
        strings("interactionStatistic", "Interaction Statistics", "statistic", "Statistic"),
        SchemaProperty::text("isPartOf", "Is Part Of"),
        SchemaProperty::text("learningResourceType", "Learning Resource Type"),
        SchemaProperty::text("locationCreated", "Location Created"),
        SchemaProperty::object(
            "mainEntity",
            "Main Entity",
            vec![
                SchemaProperty::text("@type", "Type"),
                SchemaProperty::text("name", "Name"),
            ],
        ),
        strings("material", "Materials", "material", "Material"),
        strings("mentions", "Mentions", "mention", "Mention"),
        strings("offers", "Offers", "offer", "Offer"),
        SchemaProperty::number("position", "Position"),
        party("producer", "Producer"),
        party("provider", "Provider"),
        SchemaProperty::object(
            "publication",
            "Publication",
            vec![
                SchemaProperty::text("name", "Name"),
                SchemaProperty::datetime("datePublished", "Date Published"),
            ],
        ),
        SchemaProperty::text("publishingPrinciples", "Publishing Principles"),
        SchemaProperty::text("recordedAt", "Recorded At"),
        SchemaProperty::text("releasedEvent", "Released Event"),
        SchemaProperty::list(
            "review",
            "Reviews",
            SchemaProperty::multiline("review", "Review"),
        ),
        SchemaProperty::text("schemaVersion", "Schema Version"),
        party("sourceOrganization", "Source Organization"),
        SchemaProperty::text("spatialCoverage", "Spatial Coverage"),
        party("sponsor", "Sponsor"),
        SchemaProperty::text("temporalCoverage", "Temporal Coverage"),
        SchemaProperty::multiline("text", "Text"),
        url("thumbnailUrl", "Thumbnail URL"),
        SchemaProperty::text("timeRequired", "Time Required"),
        party("translator", "Translator"),
        SchemaProperty::text("typicalAgeRange", "Typical Age Range"),
        strings("video", "Videos", "video", "Video"),
        strings("workExample", "Work Examples", "workExample", "Work Example"),
    ]
}

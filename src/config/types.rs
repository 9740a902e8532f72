use serde::{Deserialize, Serialize};

use crate::config::defaults;

/// List container used for every level of the outline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ListStyle {
    /// `<ol>`
    #[default]
    Ordered,
    /// `<ul>`
    Unordered,
}

impl ListStyle {
    /// Element name for this list style
    pub fn tag(self) -> &'static str {
        match self {
            ListStyle::Ordered => "ol",
            ListStyle::Unordered => "ul",
        }
    }
}

/// Table of contents configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TocConfig {
    /// Heading tags to include (e.g. `h2`, `h3`)
    #[serde(default = "defaults::default_tags")]
    pub tags: Vec<String>,

    /// Selectors whose matches are left out of a heading's text
    #[serde(default)]
    pub ignored_elements: Vec<String>,

    /// Headings carrying this attribute are skipped
    #[serde(default = "defaults::default_exclude_attribute")]
    pub exclude_attribute: String,

    /// Outer container element
    #[serde(default = "defaults::default_wrapper")]
    pub wrapper: String,

    /// CSS class on the outer container
    #[serde(default = "defaults::default_wrapper_class")]
    pub wrapper_class: String,

    /// Ordered or unordered lists
    #[serde(default = "defaults::default_list_style")]
    pub list_style: ListStyle,

    /// Caption rendered before the outline, omitted when empty
    #[serde(default)]
    pub heading_text: String,

    /// Element used for the caption
    #[serde(default = "defaults::default_heading_tag")]
    pub heading_tag: String,

    /// Wrap the whole block in a `<details>` element
    #[serde(default)]
    pub as_details_summary: bool,

    /// Visible `<summary>` label of the disclosure block, ignored unless
    /// `as_details_summary` is set
    #[serde(default)]
    pub summary_text: Option<String>,
}

impl Default for TocConfig {
    fn default() -> Self {
        Self {
            tags: defaults::default_tags(),
            ignored_elements: Vec::new(),
            exclude_attribute: defaults::default_exclude_attribute(),
            wrapper: defaults::default_wrapper(),
            wrapper_class: defaults::default_wrapper_class(),
            list_style: defaults::default_list_style(),
            heading_text: String::new(),
            heading_tag: defaults::default_heading_tag(),
            as_details_summary: false,
            summary_text: None,
        }
    }
}

impl TocConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the heading tags to include
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Set the selectors stripped from heading text
    pub fn with_ignored_elements<I, S>(mut self, selectors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignored_elements = selectors.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_wrapper(mut self, wrapper: &str, class: &str) -> Self {
        self.wrapper = wrapper.to_string();
        self.wrapper_class = class.to_string();
        self
    }

    pub fn with_list_style(mut self, style: ListStyle) -> Self {
        self.list_style = style;
        self
    }

    /// Add a caption element before the outline
    pub fn with_heading(mut self, text: &str, tag: &str) -> Self {
        self.heading_text = text.to_string();
        self.heading_tag = tag.to_string();
        self
    }

    /// Render inside a `<details>` block with an optional summary
    pub fn with_details(mut self, summary: Option<&str>) -> Self {
        self.as_details_summary = true;
        self.summary_text = summary.map(str::to_string);
        self
    }

    /// Heading level for a configured tag name such as `h3`
    pub fn tag_level(tag: &str) -> Option<usize> {
        let tag = tag.trim();
        let digits = tag.strip_prefix('h').or_else(|| tag.strip_prefix('H'))?;
        match digits.parse::<usize>() {
            Ok(level @ 1..=6) if digits.len() == 1 => Some(level),
            _ => None,
        }
    }
}

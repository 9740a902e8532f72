use std::collections::HashSet;

use log::debug;
use scraper::{ElementRef, Html, Node, Selector};

use crate::config::TocConfig;
use crate::toc::types::HeadingDescriptor;
use crate::utils::error::TocError;

/// Compiled selectors for pulling headings out of a document
#[derive(Debug, Clone)]
pub struct HeadingExtractor {
    headings: Selector,
    ignored: Option<Selector>,
    exclude_attribute: String,
}

impl HeadingExtractor {
    /// Compile the selectors named by the configuration
    pub fn new(config: &TocConfig) -> Result<Self, TocError> {
        let selector = config.tags.join(",");
        let headings = Selector::parse(&selector)
            .map_err(|e| TocError::Selector(format!("tags '{}': {:?}", selector, e)))?;

        let ignored = if config.ignored_elements.is_empty() {
            None
        } else {
            let selector = config.ignored_elements.join(",");
            Some(
                Selector::parse(&selector)
                    .map_err(|e| TocError::Selector(format!("ignored_elements '{}': {:?}", selector, e)))?,
            )
        };

        Ok(Self {
            headings,
            ignored,
            exclude_attribute: config.exclude_attribute.clone(),
        })
    }

    /// Extract the included headings of an HTML document in document order.
    ///
    /// Headings without an `id` or carrying the exclusion attribute are
    /// skipped.
    pub fn extract(&self, html: &str) -> Vec<HeadingDescriptor> {
        let document = Html::parse_document(html);
        let mut headings = Vec::new();

        for element in document.select(&self.headings) {
            let value = element.value();
            let Some(id) = value.attr("id") else {
                continue;
            };
            if value.attr(&self.exclude_attribute).is_some() {
                debug!("Skipping excluded heading #{}", id);
                continue;
            }
            let Some(level) = TocConfig::tag_level(value.name()) else {
                continue;
            };

            headings.push(HeadingDescriptor {
                slug: Some(id.to_string()),
                text: self.heading_text(element),
                level,
            });
        }

        debug!("Extracted {} headings", headings.len());
        headings
    }

    /// Trimmed text of a heading, leaving out ignored descendants
    fn heading_text(&self, heading: ElementRef<'_>) -> String {
        let skipped: HashSet<_> = match &self.ignored {
            Some(selector) => heading.select(selector).map(|e| e.id()).collect(),
            None => HashSet::new(),
        };

        let mut text = String::new();
        for node in heading.descendants() {
            let Node::Text(fragment) = node.value() else {
                continue;
            };
            let inside_ignored = node
                .ancestors()
                .take_while(|ancestor| ancestor.id() != heading.id())
                .any(|ancestor| skipped.contains(&ancestor.id()));
            if !inside_ignored {
                text.push_str(fragment);
            }
        }

        text.trim().to_string()
    }
}

/// Extract headings from HTML content using the given configuration
pub fn extract_headings(html: &str, config: &TocConfig) -> Result<Vec<HeadingDescriptor>, TocError> {
    Ok(HeadingExtractor::new(config)?.extract(html))
}

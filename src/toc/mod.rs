mod builder;
mod generator;
mod parser;
mod types;

pub use builder::build;
pub use generator::{generate_toc, render_list};
pub use parser::{extract_headings, HeadingExtractor};
pub use types::{HeadingDescriptor, Hierarchy, NodeId, NodeRef, TocEntry};

use log::debug;

use crate::config::{validate_config, TocConfig};
use crate::utils::error::TocError;

/// Table of contents for one document.
///
/// The outline is built once at construction and never changes; a different
/// heading set needs a new `Toc`.
#[derive(Debug, Clone)]
pub struct Toc {
    config: TocConfig,
    hierarchy: Hierarchy,
}

impl Toc {
    /// Build the outline of an HTML document.
    ///
    /// Fails only when the configuration cannot be rendered.
    pub fn new(html: &str, config: TocConfig) -> Result<Self, TocError> {
        validate_config(&config)?;
        let headings = HeadingExtractor::new(&config)?.extract(html);
        Ok(Self::assemble(headings, config))
    }

    /// Build the outline from headings that were already extracted
    pub fn from_headings<I>(headings: I, config: TocConfig) -> Result<Self, TocError>
    where
        I: IntoIterator<Item = HeadingDescriptor>,
    {
        validate_config(&config)?;
        Ok(Self::assemble(headings, config))
    }

    fn assemble<I>(headings: I, config: TocConfig) -> Self
    where
        I: IntoIterator<Item = HeadingDescriptor>,
    {
        let hierarchy = build(headings);
        debug!("Outline ready: {} nodes", hierarchy.len());
        Self { config, hierarchy }
    }

    /// Root of the outline
    pub fn get(&self) -> NodeRef<'_> {
        self.hierarchy.root()
    }

    /// Rendered table of contents, or an empty string when there are no headings
    pub fn to_markup(&self) -> String {
        generate_toc(self.get(), &self.config)
    }

    pub fn hierarchy(&self) -> &Hierarchy {
        &self.hierarchy
    }

    pub fn config(&self) -> &TocConfig {
        &self.config
    }

    /// Nested copy of the outline, suitable for serialization
    pub fn entries(&self) -> Vec<TocEntry> {
        let mut root = self.get().to_entry();
        std::mem::take(&mut root.children)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ListStyle;

    fn heading(slug: &str, text: &str, level: usize) -> HeadingDescriptor {
        HeadingDescriptor::new(Some(slug), text, level)
    }

    #[test]
    fn test_sibling_after_child() {
        let toc = Toc::from_headings(
            vec![heading("a", "A", 2), heading("b", "B", 3), heading("c", "C", 2)],
            TocConfig::default(),
        )
        .unwrap();

        let root = toc.get();
        let top: Vec<_> = root.children().map(|c| c.text()).collect();
        assert_eq!(top, vec!["A", "C"]);

        let a = root.children().next().unwrap();
        let nested: Vec<_> = a.children().map(|c| c.text()).collect();
        assert_eq!(nested, vec!["B"]);
        assert_eq!(a.children().next().unwrap().parent().unwrap().id(), a.id());
    }

    #[test]
    fn test_level_jump_siblings() {
        let toc = Toc::from_headings(
            vec![heading("a", "A", 2), heading("d", "D", 4), heading("e", "E", 3)],
            TocConfig::default(),
        )
        .unwrap();

        let a = toc.get().children().next().unwrap();
        let nested: Vec<_> = a.children().map(|c| c.slug().unwrap()).collect();
        assert_eq!(nested, vec!["d", "e"]);
        assert!(a.children().all(|c| !c.has_children()));
    }

    #[test]
    fn test_empty_document() {
        let toc = Toc::from_headings(Vec::new(), TocConfig::default()).unwrap();
        assert_eq!(toc.to_markup(), "");

        let toc = Toc::new("<p>No headings here</p>", TocConfig::default()).unwrap();
        assert_eq!(toc.to_markup(), "");
        assert!(toc.entries().is_empty());
    }

    #[test]
    fn test_empty_text_heading_keeps_children() {
        let toc = Toc::from_headings(
            vec![heading("blank", "", 2), heading("b", "B", 3), heading("c", "C", 4)],
            TocConfig::default(),
        )
        .unwrap();

        let blank = toc.get().children().next().unwrap();
        assert_eq!(blank.slug(), Some("blank"));
        assert_eq!(blank.children().len(), 1);

        let html = toc.to_markup();
        assert!(!html.contains("#blank"));
        assert!(html.contains(
            "<ol><ol><li><a href=\"#b\">B</a><ol><li><a href=\"#c\">C</a></li></ol></li></ol></ol>"
        ));
    }

    #[test]
    fn test_markup_is_repeatable() {
        let html = r#"<h2 id="a">A</h2><h3 id="b">B</h3><h4 id="c">C</h4><h2 id="d">D</h2>"#;
        let toc = Toc::new(html, TocConfig::default()).unwrap();
        assert_eq!(toc.to_markup(), toc.to_markup());

        let again = Toc::new(html, TocConfig::default()).unwrap();
        assert_eq!(toc.to_markup(), again.to_markup());
    }

    #[test]
    fn test_document_to_markup() {
        let html = r#"
            <h1 id="title">Guide</h1>
            <h2 id="install">Install</h2>
            <h3 id="linux">Linux</h3>
            <h3 id="macos" data-toc-exclude>macOS</h3>
            <h2 id="usage">Usage <span class="badge">new</span></h2>
        "#;
        let config = TocConfig::default()
            .with_ignored_elements([".badge"])
            .with_list_style(ListStyle::Unordered)
            .with_heading("Contents", "h2");
        let toc = Toc::new(html, config).unwrap();

        assert_eq!(
            toc.to_markup(),
            "<h2>Contents</h2>\n<nav aria-label=\"Table of contents\" class=\"toc\"><ul>\
             <li><a href=\"#install\">Install</a><ul><li><a href=\"#linux\">Linux</a></li></ul></li>\
             <li><a href=\"#usage\">Usage</a></li></ul></nav>"
        );
    }

    #[test]
    fn test_entries_follow_outline() {
        let toc = Toc::from_headings(
            vec![heading("a", "A", 2), heading("b", "B", 3), heading("c", "C", 4), heading("d", "D", 2)],
            TocConfig::default(),
        )
        .unwrap();

        let entries = toc.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].children[0].children[0].slug.as_deref(), Some("c"));
        assert_eq!(entries[1].text, "D");

        let json = serde_json::to_string(&entries[1]).unwrap();
        assert_eq!(json, r#"{"slug":"d","text":"D","level":2}"#);
    }

    #[test]
    fn test_deep_chain_entries() {
        let headings = (1..=20_000).map(|level| heading("n", "T", level));
        let toc = Toc::from_headings(headings, TocConfig::default()).unwrap();

        let entries = toc.entries();
        assert_eq!(entries.len(), 1);

        let mut depth = 0;
        let mut current = &entries[0];
        loop {
            depth += 1;
            assert_eq!(current.level, depth);
            match current.children.first() {
                Some(next) => {
                    assert_eq!(current.children.len(), 1);
                    current = next;
                }
                None => break,
            }
        }
        assert_eq!(depth, 20_000);

        drop(entries);
    }

    #[test]
    fn test_invalid_config_fails_at_construction() {
        let config = TocConfig::default().with_wrapper("", "toc");
        assert!(Toc::new("<h2 id=\"a\">A</h2>", config).is_err());

        let config = TocConfig::default().with_tags(["section"]);
        assert!(matches!(Toc::from_headings(Vec::new(), config), Err(TocError::Config(_))));
    }
}

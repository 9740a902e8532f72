//! Table of contents generation for HTML documents.
//!
//! Headings are pulled out of a document, arranged into an outline by
//! nesting level, and rendered back as nested list markup:
//!
//! ```
//! use htmltoc::{Toc, TocConfig};
//!
//! let html = r#"<h2 id="intro">Intro</h2><h3 id="setup">Setup</h3>"#;
//! let toc = Toc::new(html, TocConfig::default()).unwrap();
//! assert!(toc.to_markup().contains(r##"<a href="#setup">Setup</a>"##));
//! ```

pub mod cli;
pub mod config;
pub mod toc;
pub mod utils;

pub use config::{ListStyle, TocConfig};
pub use toc::{HeadingDescriptor, Hierarchy, NodeRef, Toc, TocEntry};
pub use utils::error::TocError;

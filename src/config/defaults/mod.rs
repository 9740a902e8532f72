pub mod values;

// Export the default values
pub use values::*;

/// Attribute which, when present on a heading, keeps it out of the outline
pub const EXCLUDE_ATTRIBUTE: &str = "data-toc-exclude";

/// Accessible label carried by a `nav` wrapper
pub const NAV_ARIA_LABEL: &str = "Table of contents";

use crate::config::defaults::EXCLUDE_ATTRIBUTE;
use crate::config::types::ListStyle;

/// Default heading tags forwarded to the outline
pub fn default_tags() -> Vec<String> {
    vec!["h2".to_string(), "h3".to_string(), "h4".to_string()]
}

/// Default exclusion attribute
pub fn default_exclude_attribute() -> String {
    EXCLUDE_ATTRIBUTE.to_string()
}

/// Default wrapper element
pub fn default_wrapper() -> String {
    "nav".to_string()
}

/// Default wrapper class
pub fn default_wrapper_class() -> String {
    "toc".to_string()
}

/// Default caption tag
pub fn default_heading_tag() -> String {
    "h2".to_string()
}

/// Default list style
pub fn default_list_style() -> ListStyle {
    ListStyle::Ordered
}

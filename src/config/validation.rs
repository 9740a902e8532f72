use lazy_static::lazy_static;
use log::{debug, warn};
use regex::Regex;
use scraper::Selector;

use crate::config::TocConfig;
use crate::utils::error::TocError;

lazy_static! {
    static ref ELEMENT_NAME_REGEX: Regex = Regex::new(r"^[A-Za-z][A-Za-z0-9-]*$").unwrap();
    static ref ATTRIBUTE_NAME_REGEX: Regex = Regex::new(r"^[A-Za-z_:][A-Za-z0-9_.:-]*$").unwrap();
}

/// Validate the configuration
pub fn validate_config(config: &TocConfig) -> Result<(), TocError> {
    validate_tags(config)?;
    validate_element_name("wrapper", &config.wrapper)?;
    validate_element_name("heading_tag", &config.heading_tag)?;
    validate_exclude_attribute(config)?;
    validate_disclosure(config)?;
    validate_ignored_elements(config)?;

    debug!("Configuration validated: {:?}", config);
    Ok(())
}

/// Validate the heading tags
fn validate_tags(config: &TocConfig) -> Result<(), TocError> {
    if config.tags.is_empty() {
        return Err(TocError::Config("tags must name at least one heading element".to_string()));
    }

    for tag in &config.tags {
        if TocConfig::tag_level(tag).is_none() {
            return Err(TocError::Config(format!(
                "tags entry '{}' is not a heading element (expected h1 to h6)", tag
            )));
        }
    }

    Ok(())
}

fn validate_element_name(field: &str, name: &str) -> Result<(), TocError> {
    if !ELEMENT_NAME_REGEX.is_match(name) {
        return Err(TocError::Config(format!(
            "{} '{}' is not a valid element name", field, name
        )));
    }
    Ok(())
}

fn validate_exclude_attribute(config: &TocConfig) -> Result<(), TocError> {
    if !ATTRIBUTE_NAME_REGEX.is_match(&config.exclude_attribute) {
        return Err(TocError::Config(format!(
            "exclude_attribute '{}' is not a valid attribute name", config.exclude_attribute
        )));
    }
    Ok(())
}

/// A summary only exists inside a disclosure block; without one it is ignored
fn validate_disclosure(config: &TocConfig) -> Result<(), TocError> {
    if config.summary_text.is_some() && !config.as_details_summary {
        warn!("summary_text is set but as_details_summary is false; the summary will not be rendered");
    }
    Ok(())
}

fn validate_ignored_elements(config: &TocConfig) -> Result<(), TocError> {
    for selector in &config.ignored_elements {
        Selector::parse(selector).map_err(|e| {
            TocError::Selector(format!("ignored_elements entry '{}': {:?}", selector, e))
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&TocConfig::default()).is_ok());
    }

    #[test]
    fn test_empty_tags_rejected() {
        let config = TocConfig::default().with_tags(Vec::<String>::new());
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("at least one heading"));
    }

    #[test]
    fn test_non_heading_tag_rejected() {
        let config = TocConfig::default().with_tags(["h2", "p"]);
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("'p'"));
    }

    #[test]
    fn test_bad_wrapper_rejected() {
        let config = TocConfig::default().with_wrapper("nav class=\"x\"", "toc");
        assert!(matches!(validate_config(&config), Err(TocError::Config(_))));

        let config = TocConfig::default().with_wrapper("", "toc");
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_summary_without_details_is_accepted() {
        let mut config = TocConfig::default();
        config.summary_text = Some("Contents".to_string());
        assert!(validate_config(&config).is_ok());

        let config = TocConfig::default().with_details(Some("Contents"));
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_bad_selector_rejected() {
        let config = TocConfig::default().with_ignored_elements(["span.anchor", "[[["]);
        assert!(matches!(validate_config(&config), Err(TocError::Selector(_))));
    }

    #[test]
    fn test_bad_exclude_attribute_rejected() {
        let mut config = TocConfig::default();
        config.exclude_attribute = "no spaces".to_string();
        assert!(validate_config(&config).is_err());
    }
}

use std::path::PathBuf;

use crate::cli::types::{Commands, TreeFormat};
use crate::config;
use crate::toc::{Toc, TocEntry};
use crate::utils::error::{BoxResult, TocError};
use crate::utils::fs;

/// Handle the tree command
pub fn handle_tree_command(command: &Commands, config_file: Option<&PathBuf>) -> BoxResult<()> {
    let Commands::Tree { input, format } = command else {
        return Err("tree handler called with another command".into());
    };

    let config = config::load_config(PathBuf::from("."), config_file.cloned())?;
    let html = fs::read_input(input.as_deref())?;
    let toc = Toc::new(&html, config)?;

    println!("{}", serialize_entries(&toc.entries(), *format)?);
    Ok(())
}

fn serialize_entries(entries: &[TocEntry], format: TreeFormat) -> Result<String, TocError> {
    match format {
        TreeFormat::Json => serde_json::to_string_pretty(entries)
            .map_err(|e| TocError::Serialize(e.to_string())),
        TreeFormat::Yaml => serde_yaml::to_string(entries)
            .map_err(|e| TocError::Serialize(e.to_string())),
    }
}

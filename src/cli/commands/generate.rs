use log::info;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::cli::types::Commands;
use crate::config::{self, ListStyle, TocConfig};
use crate::toc::Toc;
use crate::utils::error::BoxResult;
use crate::utils::fs;

/// Handle the generate command
pub fn handle_generate_command(command: &Commands, config_file: Option<&PathBuf>) -> BoxResult<()> {
    let Commands::Generate {
        input,
        output,
        tags,
        ignore,
        unordered,
        wrapper,
        wrapper_class,
        heading,
        details,
        summary,
    } = command
    else {
        return Err("generate handler called with another command".into());
    };

    let mut config = config::load_config(PathBuf::from("."), config_file.cloned())?;

    // Command line options take precedence over the configuration file
    if let Some(tags) = tags {
        config.tags = tags.clone();
    }
    if let Some(ignore) = ignore {
        config.ignored_elements = ignore.clone();
    }
    if *unordered {
        config.list_style = ListStyle::Unordered;
    }
    if let Some(wrapper) = wrapper {
        config.wrapper = wrapper.clone();
    }
    if let Some(class) = wrapper_class {
        config.wrapper_class = class.clone();
    }
    if let Some(text) = heading {
        config.heading_text = text.clone();
    }
    apply_disclosure(&mut config, *details, summary.as_deref());

    let html = fs::read_input(input.as_deref())?;
    let toc = Toc::new(&html, config)?;
    let markup = toc.to_markup();

    match output {
        Some(path) => {
            fs::write_file(path, &markup)?;
            info!("Table of contents written to {}", path.display());
        }
        None => write_markup(&mut io::stdout().lock(), &markup)?,
    }

    Ok(())
}

/// Print the markup followed by a newline; nothing at all when it is empty
fn write_markup<W: Write>(out: &mut W, markup: &str) -> io::Result<()> {
    if markup.is_empty() {
        return Ok(());
    }
    writeln!(out, "{}", markup)
}

/// A summary on the command line implies the disclosure block
fn apply_disclosure(config: &mut TocConfig, details: bool, summary: Option<&str>) {
    if details || summary.is_some() {
        config.as_details_summary = true;
    }
    if let Some(summary) = summary {
        config.summary_text = Some(summary.to_string());
    }
}

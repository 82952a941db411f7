use log::{debug, info};

use mdpage::config::{self, ConvertOptions};
use mdpage::document::convert;
use mdpage::utils::error::BoxResult;
use mdpage::utils::fs;

use crate::cli::types::Cli;

/// Build conversion options from the options file and command line flags.
///
/// Flags override the file, which overrides the built-in defaults.
pub fn resolve_options(cli: &Cli) -> BoxResult<ConvertOptions> {
    let mut options = match &cli.config {
        Some(path) => config::load_options(path)?,
        None => ConvertOptions::default(),
    };

    if cli.no_toc {
        options.generate_toc = false;
    }
    if let Some(depth) = cli.toc_depth {
        options.toc_depth = depth;
    }
    if let Some(position) = cli.toc_position {
        options.toc_position = position;
    }
    if let Some(theme) = &cli.theme {
        options.highlight_style = theme.clone();
    }
    if let Some(base) = &cli.image_base_url {
        options.image_base_url = base.clone();
    }

    config::validate_options(&options)?;
    Ok(options)
}

/// Handle a conversion request
pub fn handle_convert_command(cli: &Cli) -> BoxResult<()> {
    let options = resolve_options(cli)?;
    debug!("Conversion options: {:?}", options);

    let markdown = fs::read_input(cli.input.as_ref())?;
    let css = match &cli.css {
        Some(path) => Some(fs::read_file(path)?),
        None => None,
    };

    let html = convert(&markdown, css.as_deref(), cli.title.as_deref(), &options)?;
    fs::write_output(cli.output.as_ref(), &html)?;

    match &cli.output {
        Some(path) => info!("Wrote {}", path.display()),
        None => debug!("Wrote {} bytes to stdout", html.len()),
    }

    Ok(())
}

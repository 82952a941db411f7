use clap::Parser;
use std::path::PathBuf;

use mdpage::config::TocPosition;

/// Main CLI parser structure
#[derive(Parser, Debug)]
#[command(name = "mdpage")]
#[command(about = "Convert Markdown into a standalone HTML page with a table of contents", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Markdown file to convert (reads stdin when absent or `-`)
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Output file (writes stdout when absent or `-`)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Document title
    #[arg(long, value_name = "TITLE")]
    pub title: Option<String>,

    /// Extra stylesheet embedded after the built-in styles
    #[arg(long, value_name = "CSS_FILE")]
    pub css: Option<PathBuf>,

    /// Options file (YAML, TOML or JSON)
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Do not generate a table of contents or heading anchors
    #[arg(long, default_value_t = false)]
    pub no_toc: bool,

    /// Deepest heading level in the table of contents
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u8).range(0..=6))]
    pub toc_depth: Option<u8>,

    /// Table of contents placement: top, bottom or none
    #[arg(long, value_name = "POSITION")]
    pub toc_position: Option<TocPosition>,

    /// Highlighting theme
    #[arg(long, value_name = "NAME")]
    pub theme: Option<String>,

    /// Base URL prepended to relative image sources
    #[arg(long, value_name = "URL")]
    pub image_base_url: Option<String>,

    /// List the available highlighting themes and exit
    #[arg(long, default_value_t = false)]
    pub list_themes: bool,

    /// Silence everything but errors
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,

    /// Show the full backtrace when an error occurs
    #[arg(short, long, default_value_t = false)]
    pub trace: bool,

    /// Enable verbose debugging
    #[arg(short = 'g', long, default_value_t = false)]
    pub debug: bool,
}

//! Command-line interface and pipeline orchestration.
//!
//! One conversion per invocation: load the package, aggregate sources,
//! parse, filter, resolve the render context, render, write.

use std::path::PathBuf;

use clap::Parser;

use crate::error::Result;
use crate::output::{self, display_path, plural, Printer};
use crate::render::{Format, RenderContext, Renderer};
use crate::{filter, package, parser, source};

/// bks - Render bks markup documents to HTML and other formats
#[derive(Parser, Debug)]
#[command(name = "bks")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Source document (.bks) or package descriptor (.kfg, .json)
    pub source: PathBuf,

    /// Output file (stdout when omitted)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Output format: html, json, kfg, or inspect
    #[arg(long, short, default_value = "html")]
    pub format: String,

    /// Post-filter to apply after package-declared ones (repeatable)
    #[arg(long = "post-filter", short = 'p')]
    pub post_filter: Vec<String>,

    /// Render without the standalone document wrapper
    #[arg(long, short = 'F')]
    pub fragment: bool,
}

pub fn run(cli: Cli) -> Result<()> {
    // Reject unknown formats before touching the filesystem.
    let format = Format::parse(&cli.format)?;

    let loaded = package::load(&cli.source)?;
    let raw = source::aggregate(&loaded.package.sources, &loaded.base_dir)?;
    let mut document = parser::parse_document(&raw)?;

    // Package-declared filters run before CLI-declared ones.
    let mut filter_names = loaded.package.post_filters.clone();
    filter_names.extend(cli.post_filter.iter().cloned());
    let filters = filter::resolve(&filter_names)?;
    filter::apply(&mut document, &filters);

    let context = RenderContext::resolve(document, &loaded, cli.fragment)?;
    let rendered = format.renderer().render(&context)?;

    match &cli.output {
        Some(path) => {
            output::write_file(&rendered, path)?;
            let sources = plural(loaded.package.sources.len(), "source", "sources");
            Printer::new().status(
                "Rendered",
                &format!(
                    "{} ({}) -> {}",
                    display_path(&cli.source),
                    sources,
                    display_path(path)
                ),
            );
        }
        None => output::write_stdout(&rendered)?,
    }

    Ok(())
}

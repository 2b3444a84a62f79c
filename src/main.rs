use std::{
    io::{self, Write},
    path::PathBuf,
};

use anyhow::Context;
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use readmd::{HeadingStyle, Options, Width, process_path, process_reader};

#[derive(Parser)]
#[command(version)]
#[command(
    about = "Pretty-print Markdown so it reads well as plain text",
    long_about = "Pretty-print Markdown files to standard output. The output renders to the same \
                  HTML as the original but is much easier to read in a terminal.\n\nIf no files \
                  are given, README.md is used."
)]
struct Cli {
    /// Columns to wrap at (-1 never wraps) [default: terminal width]
    #[arg(short, long, value_name = "SIZE", allow_hyphen_values = true)]
    width: Option<Width>,
    /// Keep underlined (Setext) headers instead of converting them to `#` headers
    #[arg(long)]
    setext: bool,
    #[command(flatten)]
    verbosity: Verbosity,
    /// Markdown files to reformat ("-" reads standard input)
    #[arg(default_value = "README.md")]
    files: Vec<PathBuf>,
}

impl Cli {
    fn options(&self) -> Options {
        let width = self
            .width
            .unwrap_or_else(|| Width::Columns(textwrap::termwidth()));
        let heading_style = if self.setext {
            HeadingStyle::Setext
        } else {
            HeadingStyle::Atx
        };
        Options {
            width,
            heading_style,
            ..Options::default()
        }
    }
}

/// Entry point for the command-line tool that reflows Markdown for reading.
///
/// Each file is streamed to standard output in turn. The first file that
/// cannot be read aborts the run with a non-zero exit status.
///
/// # Examples
///
/// ```sh
/// # Reformat README.md to fit the terminal
/// readmd
///
/// # Reformat two files at 72 columns
/// readmd -w 72 CHANGELOG.md docs/guide.md
///
/// # Never wrap paragraphs
/// cat notes.md | readmd --width -1 -
/// ```
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(cli.verbosity.log_level_filter())
        .init();

    let options = cli.options();
    let mut out = io::stdout().lock();
    for path in &cli.files {
        if path.as_os_str() == "-" {
            process_reader(io::stdin().lock(), options, &mut out)
                .context("failed to reformat standard input")?;
        } else {
            process_path(path, options, &mut out)
                .with_context(|| format!("failed to reformat {}", path.display()))?;
        }
    }
    out.flush()?;
    Ok(())
}

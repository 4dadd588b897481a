//! `gallery-manifest` — turns a LaTeX emoji macro file into the gallery's
//! `data.json`, and optionally a standalone HTML preview.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use manifest::{ManifestError, load_macros, with_base_path, write_catalog, write_static_gallery};
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(name = "gallery-manifest", author, version, about)]
struct Cli {
    /// LaTeX file declaring `\newcommand{\emjNAME}{...\includegraphics[...]{FILE.png}}` macros.
    macros: PathBuf,

    /// Where to write the catalog.
    #[arg(short, long, default_value = "data.json")]
    output: PathBuf,

    /// Also render a standalone HTML page to this path.
    #[arg(long)]
    html: Option<PathBuf>,

    /// Directory prefix for image sources in the HTML page.
    #[arg(long, default_value = "", env = "GALLERY_IMAGE_BASE")]
    base_path: String,

    /// Page heading for the HTML page.
    #[arg(long, default_value = "Gallery")]
    title: String,
}

fn run(cli: &Cli) -> Result<(), ManifestError> {
    let descriptors = load_macros(&cli.macros)?;
    info!(count = descriptors.len(), macros = %cli.macros.display(), "extracted image descriptors");

    write_catalog(&cli.output, &descriptors)?;
    info!(path = %cli.output.display(), "wrote catalog");

    if let Some(html) = &cli.html {
        let descriptors = with_base_path(descriptors, &cli.base_path);
        write_static_gallery(html, &descriptors, &cli.title)?;
        info!(path = %html.display(), "wrote static gallery");
    }
    Ok(())
}

fn main() -> ExitCode {
    let tracing_level = if cfg!(debug_assertions) {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_file(true)
        .with_line_number(true)
        .with_max_level(tracing_level)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "gallery-manifest failed");
            ExitCode::FAILURE
        }
    }
}

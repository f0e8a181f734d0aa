use anyhow::Result;
use clap::Parser;
use pdfextract::extract;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pdfextract")]
#[command(about = "Extract selected pages from a PDF into a new file")]
#[command(version)]
#[command(after_help = "EXAMPLE:
    pdfextract input.pdf output.pdf \"1,3-5,10\"")]
struct Cli {
    /// PDF file to extract pages from
    input: PathBuf,

    /// Output PDF file
    output: PathBuf,

    /// Pages to extract, in order (e.g., "1,3-5,10")
    pages: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    extract::run(&cli.input, &cli.output, &cli.pages)?;

    Ok(())
}

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "mirror-page")]
#[command(about = "Clones a web page into a clean, self-contained document")]
#[command(version)]
pub struct Args {
    /// URL of the page to clone (omit when --snapshot is given)
    pub url: Option<String>,

    /// Read a previously captured snapshot (JSON) instead of rendering
    #[arg(short, long)]
    pub snapshot: Option<PathBuf>,

    /// Write the reconstructed document to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Pipeline configuration file (JSON)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print the design-system prompt summary to stderr as well
    #[arg(long)]
    pub emit_prompt: bool,
}

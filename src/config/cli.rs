use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "seed-lottery")]
#[command(about = "Reproducible lottery draws from a list of names and an 8-hex-digit seed")]
pub struct Cli {
    /// Path to TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Shuffle the entrants with a seed and pick the winner
    Draw(DrawArgs),

    /// Recompute a saved draw by id
    Show(ShowArgs),

    /// Print a random 8-hex-digit seed
    Seed,
}

#[derive(Debug, Clone, Args)]
pub struct DrawArgs {
    /// File with one name per line ("-" reads stdin)
    #[arg(short, long, conflicts_with = "names")]
    pub file: Option<PathBuf>,

    /// Comma separated names
    #[arg(short, long, value_delimiter = ',')]
    pub names: Vec<String>,

    /// 8 hexadecimal characters, e.g. 1A2B3C4D
    #[arg(
        short,
        long,
        conflicts_with = "random_seed",
        required_unless_present = "random_seed"
    )]
    pub seed: Option<String>,

    /// Generate a fresh seed instead of passing one
    #[arg(long)]
    pub random_seed: bool,

    /// Persist the draw and print its id
    #[arg(long)]
    pub save: bool,

    /// Write reports (formats from config); without a value uses output.directory
    #[arg(long, value_name = "DIR")]
    pub export: Option<Option<PathBuf>>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, Args)]
pub struct ShowArgs {
    /// Draw id printed by `draw --save`
    pub id: String,

    /// Write reports (formats from config); without a value uses output.directory
    #[arg(long, value_name = "DIR")]
    pub export: Option<Option<PathBuf>>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

impl DrawArgs {
    /// Entrant text in the newline-separated form the core parses.
    /// A leading byte-order mark from an editor-saved file is dropped.
    pub fn entrant_text(&self) -> std::io::Result<String> {
        let text = match &self.file {
            Some(path) if path.as_os_str() == "-" => std::io::read_to_string(std::io::stdin())?,
            Some(path) => std::fs::read_to_string(path)?,
            None => self.names.join("\n"),
        };
        Ok(match text.strip_prefix('\u{FEFF}') {
            Some(rest) => rest.to_string(),
            None => text,
        })
    }
}

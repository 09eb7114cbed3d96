use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "jdoc",
    about = "A single JSON document on disk, edited by property path",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Directory holding the document file
    #[arg(short, long, global = true, default_value = ".")]
    pub dir: PathBuf,

    /// Document file name
    #[arg(short, long, global = true, default_value = "store.json")]
    pub file: String,

    /// TOML file with store options (model, validate_data, dialect)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Document written when the file does not exist yet
    #[arg(long, global = true, default_value = "{}")]
    pub default: String,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the whole document
    Read,
    /// Print the value at a property path
    Get(GetArgs),
    /// Replace the whole document
    Write(WriteArgs),
    /// Set the value at a property path
    Update(UpdateArgs),
    /// Remove the value at a property path
    Delete(DeleteArgs),
    /// Delete the document file
    Rm,
    /// Validate a document against the configured model without writing it
    Check(CheckArgs),
}

#[derive(Args)]
pub struct GetArgs {
    pub path: String,
}

#[derive(Args)]
pub struct WriteArgs {
    /// JSON text, or @FILE to read it from a file
    pub document: String,
}

#[derive(Args)]
pub struct UpdateArgs {
    pub path: String,
    /// JSON value; text that is not valid JSON is stored as a string
    pub value: String,
}

#[derive(Args)]
pub struct DeleteArgs {
    pub path: String,
}

#[derive(Args)]
pub struct CheckArgs {
    /// JSON text, or @FILE to read it from a file
    pub document: String,
}

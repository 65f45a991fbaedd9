use crate::prelude::*;

pub mod parse;
pub mod to_json;

// Re-export domain types from core
pub use devtools_core::csv::{parse_csv, records_to_json, ParsedCsv};

#[derive(Debug, clap::Parser)]
#[command(name = "csv")]
#[command(about = "Parse and convert delimited text (CSV/TSV)")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Parse delimited text and display it as a table with diagnostics
    #[clap(name = "parse")]
    Parse(parse::ParseOptions),

    /// Parse delimited text and emit a JSON array of records
    #[clap(name = "to-json")]
    ToJson(to_json::ToJsonOptions),
}

pub fn run(app: App, global: crate::Global) -> Result<()> {
    match app.command {
        Commands::Parse(options) => parse::run(options, global),
        Commands::ToJson(options) => to_json::run(options, global),
    }
}

/// Input flags shared by both csv subcommands.
#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct InputOptions {
    /// Delimited text. Reads --file or stdin when omitted.
    #[arg(value_name = "TEXT")]
    pub input: Option<String>,

    /// Read input from a file
    #[arg(short = 'F', long)]
    pub file: Option<std::path::PathBuf>,

    /// Field delimiter ("," ";" "|" or "tab")
    #[arg(short, long, default_value = ",")]
    pub delimiter: String,

    /// Treat the first row as a header row
    #[arg(long)]
    pub header: bool,
}

/// Resolve the delimiter flag to a single character, accepting the
/// spellings "tab" and "\t" for tabs.
pub fn resolve_delimiter(raw: &str) -> Result<char> {
    match raw {
        "tab" | "\\t" | "\t" => Ok('\t'),
        other => {
            let mut chars = other.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Ok(c),
                _ => Err(eyre!("Delimiter must be a single character: '{}'", other)),
            }
        }
    }
}

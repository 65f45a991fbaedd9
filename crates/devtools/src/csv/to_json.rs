use crate::prelude::{eprintln, println, *};
use colored::Colorize;
use devtools_core::csv::{parse_csv, records_to_json};

use super::{resolve_delimiter, InputOptions};

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct ToJsonOptions {
    #[clap(flatten)]
    pub input: InputOptions,

    /// Emit compact JSON instead of pretty-printed
    #[arg(long)]
    pub compact: bool,
}

pub fn run(options: ToJsonOptions, global: crate::Global) -> Result<()> {
    let delimiter = resolve_delimiter(&options.input.delimiter)?;
    let text = read_input(options.input.input.clone(), options.input.file.as_deref())?;

    let table = parse_csv(&text, delimiter, options.input.header);

    // Records go to stdout; diagnostics stay on stderr so the JSON is
    // pipeable.
    for error in &table.errors {
        eprintln!("{} {}", "warning:".yellow().bold(), error);
    }

    if global.verbose {
        eprintln!(
            "{} rows, {} columns",
            table.total_rows, table.total_columns
        );
    }

    let records = records_to_json(&table);
    let rendered = render_records(&records, options.compact)?;
    println!("{}", rendered);

    Ok(())
}

fn render_records(records: &serde_json::Value, compact: bool) -> Result<String> {
    if compact {
        serde_json::to_string(records).map_err(|e| eyre!("JSON serialization failed: {}", e))
    } else {
        serde_json::to_string_pretty(records)
            .map_err(|e| eyre!("JSON serialization failed: {}", e))
    }
}

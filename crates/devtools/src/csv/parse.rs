use crate::prelude::{println, *};
use colored::Colorize;
use devtools_core::csv::{parse_csv, ParsedCsv};

use super::{resolve_delimiter, InputOptions};

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct ParseOptions {
    #[clap(flatten)]
    pub input: InputOptions,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(options: ParseOptions, global: crate::Global) -> Result<()> {
    let delimiter = resolve_delimiter(&options.input.delimiter)?;

    if global.verbose {
        println!("Parsing with delimiter {:?}", delimiter);
    }

    let text = read_input(options.input.input.clone(), options.input.file.as_deref())?;
    let table = parse_csv(&text, delimiter, options.input.header);

    if options.json {
        println!("{}", serde_json::to_string_pretty(&table)?);
    } else {
        print!("{}", format_parse_text(&table));
    }

    Ok(())
}

/// Render the parsed table as a grid plus diagnostics and a summary line.
fn format_parse_text(table: &ParsedCsv) -> String {
    let mut result = String::new();

    if table.total_rows > 0 || !table.headers.is_empty() {
        let mut grid = new_table();

        if !table.headers.is_empty() {
            grid.set_titles(table.headers.iter().collect());
        }
        for row in &table.rows {
            grid.add_row(row.iter().collect());
        }

        result.push_str(&grid.to_string());
    }

    result.push_str(&format!(
        "{}\n",
        format!(
            "{} rows x {} columns",
            table.total_rows, table.total_columns
        )
        .bright_white()
    ));

    if !table.errors.is_empty() {
        result.push_str(&format!("\n{}\n", "WARNINGS".yellow().bold()));
        for error in &table.errors {
            result.push_str(&format!("  {} {}\n", "-".yellow(), error.yellow()));
        }
    }

    result
}

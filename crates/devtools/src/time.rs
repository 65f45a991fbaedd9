use crate::prelude::{println, *};
use chrono::Utc;
use colored::Colorize;
use devtools_core::timeconv::{parse_timestamp, TimestampOutput};

#[derive(Debug, clap::Parser)]
#[command(name = "time")]
#[command(about = "Convert timestamps between formats")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Convert a timestamp (unix seconds/millis, RFC 3339, or date string)
    #[clap(name = "convert")]
    Convert(ConvertOptions),

    /// Show the current moment in every notation
    #[clap(name = "now")]
    Now(NowOptions),
}

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct ConvertOptions {
    /// Timestamp to convert. Reads stdin when omitted.
    #[arg(value_name = "TIMESTAMP")]
    pub input: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct NowOptions {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(app: App, _global: crate::Global) -> Result<()> {
    let now = Utc::now().timestamp();

    match app.command {
        Commands::Convert(options) => {
            let input = read_input(options.input.clone(), None)?;
            let output = parse_timestamp(&input, now).map_err(|e| eyre!(e))?;
            emit(&output, options.json)
        }
        Commands::Now(options) => {
            let output = parse_timestamp(&now.to_string(), now).map_err(|e| eyre!(e))?;
            emit(&output, options.json)
        }
    }
}

fn emit(output: &TimestampOutput, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(output)?);
    } else {
        print!("{}", format_timestamp_text(output));
    }

    Ok(())
}

fn format_timestamp_text(output: &TimestampOutput) -> String {
    let mut result = String::new();

    result.push_str(&format!(
        "{}: {}\n",
        "Unix seconds".green(),
        output.unix_seconds
    ));
    result.push_str(&format!(
        "{}: {}\n",
        "Unix millis".green(),
        output.unix_millis
    ));
    result.push_str(&format!("{}: {}\n", "UTC".green(), output.utc));
    result.push_str(&format!("{}: {}\n", "ISO 8601".green(), output.iso8601));
    result.push_str(&format!(
        "{}: {} ({})\n",
        "Weekday".green(),
        output.weekday,
        output.relative.bright_black()
    ));

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_timestamp_text() {
        let output = parse_timestamp("1700000000", 1_700_000_000).unwrap();

        let formatted = format_timestamp_text(&output);

        assert!(formatted.contains("1700000000"));
        assert!(formatted.contains("2023-11-14 22:13:20 UTC"));
        assert!(formatted.contains("Tue"));
        assert!(formatted.contains("now"));
    }

    #[test]
    fn test_json_output_shape() {
        let output = parse_timestamp("0", 0).unwrap();

        let json = serde_json::to_string_pretty(&output).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed["unix_seconds"], 0);
        assert_eq!(parsed["utc"], "1970-01-01 00:00:00 UTC");
    }
}

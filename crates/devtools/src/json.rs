use crate::prelude::{println, *};
use colored::Colorize;
use devtools_core::json::{format_json, minify_json, validate_json, JsonValidation};

#[derive(Debug, clap::Parser)]
#[command(name = "json")]
#[command(about = "Format, minify, and validate JSON")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Pretty-print a JSON document
    #[clap(name = "format")]
    Format(FormatOptions),

    /// Strip insignificant whitespace from a JSON document
    #[clap(name = "minify")]
    Minify(MinifyOptions),

    /// Check whether the input is valid JSON
    #[clap(name = "validate")]
    Validate(ValidateOptions),
}

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct FormatOptions {
    /// JSON text. Reads --file or stdin when omitted.
    #[arg(value_name = "TEXT")]
    pub input: Option<String>,

    /// Read input from a file
    #[arg(short = 'F', long)]
    pub file: Option<std::path::PathBuf>,

    /// Indent width in spaces
    #[arg(short, long, default_value = "2")]
    pub indent: usize,
}

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct MinifyOptions {
    /// JSON text. Reads --file or stdin when omitted.
    #[arg(value_name = "TEXT")]
    pub input: Option<String>,

    /// Read input from a file
    #[arg(short = 'F', long)]
    pub file: Option<std::path::PathBuf>,
}

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct ValidateOptions {
    /// JSON text. Reads --file or stdin when omitted.
    #[arg(value_name = "TEXT")]
    pub input: Option<String>,

    /// Read input from a file
    #[arg(short = 'F', long)]
    pub file: Option<std::path::PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(app: App, _global: crate::Global) -> Result<()> {
    match app.command {
        Commands::Format(options) => {
            let text = read_input(options.input.clone(), options.file.as_deref())?;
            let formatted = format_json(&text, options.indent).map_err(|e| eyre!(e))?;
            println!("{}", formatted);
            Ok(())
        }
        Commands::Minify(options) => {
            let text = read_input(options.input.clone(), options.file.as_deref())?;
            let minified = minify_json(&text).map_err(|e| eyre!(e))?;
            println!("{}", minified);
            Ok(())
        }
        Commands::Validate(options) => {
            let text = read_input(options.input.clone(), options.file.as_deref())?;
            let verdict = validate_json(&text);

            if options.json {
                println!("{}", serde_json::to_string_pretty(&verdict)?);
            } else {
                print!("{}", format_validation_text(&verdict));
            }

            // Invalid input is a failing exit code so the command works in
            // scripts.
            if verdict.valid {
                Ok(())
            } else {
                Err(Error::InvalidInput("JSON validation failed".to_string()).into())
            }
        }
    }
}

fn format_validation_text(verdict: &JsonValidation) -> String {
    if verdict.valid {
        let kind = verdict.value_kind.as_deref().unwrap_or("unknown");
        format!(
            "{} top-level value is {}\n",
            "Valid JSON:".green().bold(),
            kind.bright_white()
        )
    } else {
        let error = verdict.error.as_deref().unwrap_or("unknown error");
        format!("{} {}\n", "Invalid JSON:".red().bold(), error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_validation_text_valid() {
        let verdict = validate_json(r#"{"a":1}"#);

        let formatted = format_validation_text(&verdict);

        assert!(formatted.contains("Valid JSON"));
        assert!(formatted.contains("object"));
    }

    #[test]
    fn test_format_validation_text_invalid() {
        let verdict = validate_json("{broken");

        let formatted = format_validation_text(&verdict);

        assert!(formatted.contains("Invalid JSON"));
        assert!(formatted.contains("line"));
    }
}

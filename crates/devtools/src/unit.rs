use crate::prelude::{println, *};
use colored::Colorize;
use devtools_core::units::{convert, supported_units, Conversion};

#[derive(Debug, clap::Parser)]
#[command(name = "unit")]
#[command(about = "Convert units of measure")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Convert a value between two units of the same category
    #[clap(name = "convert")]
    Convert(ConvertOptions),

    /// List supported units per category
    #[clap(name = "list")]
    List(ListOptions),
}

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct ConvertOptions {
    /// Value to convert
    #[arg(value_name = "VALUE")]
    pub value: f64,

    /// Source unit (e.g. km, lb, gib, c)
    #[arg(value_name = "FROM")]
    pub from: String,

    /// Target unit
    #[arg(value_name = "TO")]
    pub to: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct ListOptions {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(app: App, _global: crate::Global) -> Result<()> {
    match app.command {
        Commands::Convert(options) => {
            let conversion =
                convert(options.value, &options.from, &options.to).map_err(Error::Conversion)?;

            if options.json {
                println!("{}", serde_json::to_string_pretty(&conversion)?);
            } else {
                println!("{}", format_conversion_text(&conversion));
            }

            Ok(())
        }
        Commands::List(options) => {
            if options.json {
                let listing: serde_json::Value = supported_units()
                    .into_iter()
                    .map(|(category, units)| (category.to_string(), serde_json::json!(units)))
                    .collect::<serde_json::Map<_, _>>()
                    .into();
                println!("{}", serde_json::to_string_pretty(&listing)?);
            } else {
                print!("{}", format_listing_text());
            }

            Ok(())
        }
    }
}

fn format_conversion_text(conversion: &Conversion) -> String {
    format!(
        "{} {} = {} {}",
        conversion.value,
        conversion.from.cyan(),
        format!("{}", conversion.result).bright_white().bold(),
        conversion.to.cyan()
    )
}

fn format_listing_text() -> String {
    let mut result = String::new();

    for (category, units) in supported_units() {
        result.push_str(&format!("{}: {}\n", category.green().bold(), units.join(", ")));
    }

    result
}

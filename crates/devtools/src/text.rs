use crate::prelude::{println, *};
use colored::Colorize;
use devtools_core::minify::{minify_css, minify_js};
use devtools_core::textcase::{convert_case, text_stats, CaseStyle, TextStats};

#[derive(Debug, clap::Parser)]
#[command(name = "text")]
#[command(about = "Case conversion, word counts, and minification")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Convert text to a target case style
    #[clap(name = "case")]
    Case(CaseOptions),

    /// Count characters, words, lines, and sentences
    #[clap(name = "count")]
    Count(CountOptions),

    /// Best-effort CSS/JS minification
    #[clap(name = "minify")]
    Minify(MinifyOptions),
}

#[derive(Debug, Clone, clap::ValueEnum, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    Snake,
    Camel,
    Pascal,
    Kebab,
    Constant,
    Title,
    Sentence,
}

impl From<Style> for CaseStyle {
    fn from(s: Style) -> Self {
        match s {
            Style::Snake => CaseStyle::Snake,
            Style::Camel => CaseStyle::Camel,
            Style::Pascal => CaseStyle::Pascal,
            Style::Kebab => CaseStyle::Kebab,
            Style::Constant => CaseStyle::Constant,
            Style::Title => CaseStyle::Title,
            Style::Sentence => CaseStyle::Sentence,
        }
    }
}

#[derive(Debug, Clone, clap::ValueEnum, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Css,
    Js,
}

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct CaseOptions {
    /// Target case style
    #[arg(value_enum)]
    pub style: Style,

    /// Text to convert. Reads --file or stdin when omitted.
    #[arg(value_name = "TEXT")]
    pub input: Option<String>,

    /// Read input from a file
    #[arg(short = 'F', long)]
    pub file: Option<std::path::PathBuf>,
}

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct CountOptions {
    /// Text to analyze. Reads --file or stdin when omitted.
    #[arg(value_name = "TEXT")]
    pub input: Option<String>,

    /// Read input from a file
    #[arg(short = 'F', long)]
    pub file: Option<std::path::PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct MinifyOptions {
    /// Input language
    #[arg(value_enum)]
    pub language: Language,

    /// Source to minify. Reads --file or stdin when omitted.
    #[arg(value_name = "SOURCE")]
    pub input: Option<String>,

    /// Read input from a file
    #[arg(short = 'F', long)]
    pub file: Option<std::path::PathBuf>,
}

pub fn run(app: App, global: crate::Global) -> Result<()> {
    match app.command {
        Commands::Case(options) => {
            let text = read_input(options.input.clone(), options.file.as_deref())?;
            println!("{}", convert_case(text.trim_end(), options.style.into()));
            Ok(())
        }
        Commands::Count(options) => {
            let text = read_input(options.input.clone(), options.file.as_deref())?;
            let stats = text_stats(&text);

            if options.json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                print!("{}", format_stats_text(&stats));
            }

            Ok(())
        }
        Commands::Minify(options) => {
            let source = read_input(options.input.clone(), options.file.as_deref())?;
            let minified = match options.language {
                Language::Css => minify_css(&source),
                Language::Js => minify_js(&source),
            };

            if global.verbose {
                println!(
                    "{}",
                    format!("{} -> {} bytes", source.len(), minified.len()).bright_black()
                );
            }

            println!("{}", minified);
            Ok(())
        }
    }
}

fn format_stats_text(stats: &TextStats) -> String {
    let mut result = String::new();

    result.push_str(&format!("{}: {}\n", "Characters".green(), stats.characters));
    result.push_str(&format!(
        "{}: {}\n",
        "Characters (no spaces)".green(),
        stats.characters_no_spaces
    ));
    result.push_str(&format!("{}: {}\n", "Words".green(), stats.words));
    result.push_str(&format!("{}: {}\n", "Lines".green(), stats.lines));
    result.push_str(&format!("{}: {}\n", "Sentences".green(), stats.sentences));

    result
}

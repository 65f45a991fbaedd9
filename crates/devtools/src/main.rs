#![allow(unused)]

use crate::prelude::*;
use clap::Parser;

mod color;
mod csv;
mod encode;
mod error;
mod generate;
mod hash;
mod json;
mod jwt;
mod prelude;
mod text;
mod time;
mod unit;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Command-line toolbox of small developer utilities"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Whether to display additional information.
    #[clap(long, env = "DEVTOOLS_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Parse and convert delimited text (CSV/TSV)
    Csv(crate::csv::App),

    /// Format, minify, and validate JSON
    Json(crate::json::App),

    /// Decode JSON Web Tokens (no signature verification)
    Jwt(crate::jwt::App),

    /// Base64 and URL encoding/decoding
    Encode(crate::encode::App),

    /// Hex digests (md5, sha256, sha512)
    Hash(crate::hash::App),

    /// Generate passwords and UUIDs
    Generate(crate::generate::App),

    /// Convert colors between hex, RGB, and HSL
    Color(crate::color::App),

    /// Convert timestamps between formats
    Time(crate::time::App),

    /// Convert units of measure
    Unit(crate::unit::App),

    /// Case conversion, word counts, and minification
    Text(crate::text::App),
}

fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::Csv(sub_app) => crate::csv::run(sub_app, app.global),
        SubCommands::Json(sub_app) => crate::json::run(sub_app, app.global),
        SubCommands::Jwt(sub_app) => crate::jwt::run(sub_app, app.global),
        SubCommands::Encode(sub_app) => crate::encode::run(sub_app, app.global),
        SubCommands::Hash(sub_app) => crate::hash::run(sub_app, app.global),
        SubCommands::Generate(sub_app) => crate::generate::run(sub_app, app.global),
        SubCommands::Color(sub_app) => crate::color::run(sub_app, app.global),
        SubCommands::Time(sub_app) => crate::time::run(sub_app, app.global),
        SubCommands::Unit(sub_app) => crate::unit::run(sub_app, app.global),
        SubCommands::Text(sub_app) => crate::text::run(sub_app, app.global),
    }
}

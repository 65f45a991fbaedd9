use crate::prelude::{println, *};
use devtools_core::encode::{base64_decode, base64_encode, url_decode, url_encode};

#[derive(Debug, clap::Parser)]
#[command(name = "encode")]
#[command(about = "Base64 and URL encoding/decoding")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Base64 encode (or decode with --decode)
    #[clap(name = "base64")]
    Base64(CodecOptions),

    /// Percent-encode for a URL component (or decode with --decode)
    #[clap(name = "url")]
    Url(CodecOptions),
}

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct CodecOptions {
    /// Text to transform. Reads --file or stdin when omitted.
    #[arg(value_name = "TEXT")]
    pub input: Option<String>,

    /// Read input from a file
    #[arg(short = 'F', long)]
    pub file: Option<std::path::PathBuf>,

    /// Decode instead of encode
    #[arg(short, long)]
    pub decode: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON shape for codec commands.
#[derive(Debug, serde::Serialize)]
pub struct CodecOutput {
    pub codec: &'static str,
    pub mode: &'static str,
    pub input: String,
    pub output: String,
}

pub fn run(app: App, _global: crate::Global) -> Result<()> {
    match app.command {
        Commands::Base64(options) => {
            let input = read_input(options.input.clone(), options.file.as_deref())?;
            let output = if options.decode {
                base64_decode(&input).map_err(Error::Decode)?
            } else {
                base64_encode(&input)
            };
            emit("base64", &options, input, output)
        }
        Commands::Url(options) => {
            let input = read_input(options.input.clone(), options.file.as_deref())?;
            let output = if options.decode {
                url_decode(&input).map_err(Error::Decode)?
            } else {
                url_encode(&input)
            };
            emit("url", &options, input, output)
        }
    }
}

fn emit(codec: &'static str, options: &CodecOptions, input: String, output: String) -> Result<()> {
    if options.json {
        let payload = CodecOutput {
            codec,
            mode: if options.decode { "decode" } else { "encode" },
            input,
            output,
        };
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        println!("{}", output);
    }

    Ok(())
}

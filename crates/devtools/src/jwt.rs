use crate::prelude::{println, *};
use chrono::Utc;
use colored::Colorize;
use devtools_core::jwt::{decode_jwt, DecodedJwt};

#[derive(Debug, clap::Parser)]
#[command(name = "jwt")]
#[command(about = "Decode JSON Web Tokens (no signature verification)")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Decode a token's header and payload
    #[clap(name = "decode")]
    Decode(DecodeOptions),
}

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct DecodeOptions {
    /// The token. Reads --file or stdin when omitted.
    #[arg(value_name = "TOKEN")]
    pub token: Option<String>,

    /// Read the token from a file
    #[arg(short = 'F', long)]
    pub file: Option<std::path::PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(app: App, global: crate::Global) -> Result<()> {
    match app.command {
        Commands::Decode(options) => decode(options, global),
    }
}

fn decode(options: DecodeOptions, global: crate::Global) -> Result<()> {
    let token = read_input(options.token.clone(), options.file.as_deref())?;

    if global.verbose {
        println!("Token length: {} characters", token.trim().len());
    }

    let decoded = decode_jwt(&token, Utc::now().timestamp())?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&decoded)?);
    } else {
        print!("{}", format_decoded_text(&decoded)?);
    }

    Ok(())
}

fn format_decoded_text(decoded: &DecodedJwt) -> Result<String> {
    let mut result = String::new();

    result.push_str(&format!("{}\n", "HEADER".bright_cyan().bold()));
    result.push_str(&serde_json::to_string_pretty(&decoded.header)?);
    result.push('\n');

    result.push_str(&format!("\n{}\n", "PAYLOAD".bright_cyan().bold()));
    result.push_str(&serde_json::to_string_pretty(&decoded.payload)?);
    result.push('\n');

    if decoded.issued_at.is_some() || decoded.expires_at.is_some() || decoded.not_before.is_some()
    {
        result.push_str(&format!("\n{}\n", "CLAIM TIMES".bright_cyan().bold()));
        if let Some(iat) = &decoded.issued_at {
            result.push_str(&format!("  {}: {}\n", "Issued".green(), iat));
        }
        if let Some(nbf) = &decoded.not_before {
            result.push_str(&format!("  {}: {}\n", "Not before".green(), nbf));
        }
        if let Some(exp) = &decoded.expires_at {
            let status = match decoded.expired {
                Some(true) => "expired".red().bold().to_string(),
                _ => "valid".green().to_string(),
            };
            result.push_str(&format!("  {}: {} ({})\n", "Expires".green(), exp, status));
        }
    }

    result.push_str(&format!(
        "\n{} {}\n",
        "Signature (not verified):".bright_black(),
        decoded.signature.bright_black()
    ));

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use base64::Engine;

    fn build_token(payload: &str) -> String {
        format!(
            "{}.{}.sig",
            URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256"}"#),
            URL_SAFE_NO_PAD.encode(payload.as_bytes())
        )
    }

    #[test]
    fn test_format_decoded_text_sections() {
        let decoded = decode_jwt(&build_token(r#"{"sub":"abc"}"#), 0).unwrap();

        let formatted = format_decoded_text(&decoded).unwrap();

        assert!(formatted.contains("HEADER"));
        assert!(formatted.contains("PAYLOAD"));
        assert!(formatted.contains("\"sub\": \"abc\""));
        assert!(formatted.contains("Signature (not verified)"));
        assert!(!formatted.contains("CLAIM TIMES"));
    }

    #[test]
    fn test_format_decoded_text_expired() {
        let decoded = decode_jwt(&build_token(r#"{"exp":1000}"#), 2000).unwrap();

        let formatted = format_decoded_text(&decoded).unwrap();

        assert!(formatted.contains("CLAIM TIMES"));
        assert!(formatted.contains("expired"));
    }

    #[test]
    fn test_format_decoded_text_live() {
        let decoded = decode_jwt(&build_token(r#"{"exp":2000}"#), 1000).unwrap();

        let formatted = format_decoded_text(&decoded).unwrap();

        assert!(formatted.contains("valid"));
    }
}

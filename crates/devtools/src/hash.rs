use crate::prelude::{println, *};
use devtools_core::hashes::{hash_hex, HashAlgorithm};

#[derive(Debug, clap::Parser)]
#[command(name = "hash")]
#[command(about = "Hex digests (md5, sha256, sha512)")]
pub struct App {
    #[clap(flatten)]
    pub options: HashOptions,
}

#[derive(Debug, Clone, clap::ValueEnum, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Md5,
    Sha256,
    Sha512,
}

impl From<Algorithm> for HashAlgorithm {
    fn from(a: Algorithm) -> Self {
        match a {
            Algorithm::Md5 => HashAlgorithm::Md5,
            Algorithm::Sha256 => HashAlgorithm::Sha256,
            Algorithm::Sha512 => HashAlgorithm::Sha512,
        }
    }
}

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct HashOptions {
    /// Digest algorithm
    #[arg(value_enum)]
    pub algorithm: Algorithm,

    /// Text to digest. Reads --file or stdin when omitted.
    #[arg(value_name = "TEXT")]
    pub input: Option<String>,

    /// Read input from a file
    #[arg(short = 'F', long)]
    pub file: Option<std::path::PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, serde::Serialize)]
pub struct HashOutput {
    pub algorithm: &'static str,
    pub digest: String,
    pub digest_length: usize,
}

pub fn run(app: App, global: crate::Global) -> Result<()> {
    let options = app.options;
    let input = read_input(options.input.clone(), options.file.as_deref())?;

    let algorithm: HashAlgorithm = options.algorithm.clone().into();
    let digest = hash_hex(&input, algorithm);

    if global.verbose {
        println!("Hashing {} bytes of input", input.len());
    }

    if options.json {
        let payload = HashOutput {
            algorithm: algorithm.name(),
            digest_length: digest.len(),
            digest,
        };
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        println!("{}", digest);
    }

    Ok(())
}

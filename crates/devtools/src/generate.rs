use crate::prelude::{println, *};
use colored::Colorize;
use devtools_core::password::{build_charset, entropy_bits, strength_label, CharsetOptions};
use rand::Rng;

#[derive(Debug, clap::Parser)]
#[command(name = "generate")]
#[command(about = "Generate passwords and UUIDs")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Generate random passwords
    #[clap(name = "password")]
    Password(PasswordOptions),

    /// Generate v4 UUIDs
    #[clap(name = "uuid")]
    Uuid(UuidOptions),
}

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct PasswordOptions {
    /// Password length
    #[arg(short, long, default_value = "16")]
    pub length: usize,

    /// How many passwords to generate
    #[arg(short, long, default_value = "1")]
    pub count: usize,

    /// Skip lowercase letters
    #[arg(long)]
    pub no_lowercase: bool,

    /// Skip uppercase letters
    #[arg(long)]
    pub no_uppercase: bool,

    /// Skip digits
    #[arg(long)]
    pub no_digits: bool,

    /// Skip symbols
    #[arg(long)]
    pub no_symbols: bool,

    /// Drop characters that read alike (I, l, 1, O, 0)
    #[arg(long)]
    pub exclude_ambiguous: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct UuidOptions {
    /// How many UUIDs to generate
    #[arg(short, long, default_value = "1")]
    pub count: usize,

    /// Render without hyphens
    #[arg(long)]
    pub simple: bool,

    /// Render in uppercase
    #[arg(long)]
    pub uppercase: bool,
}

#[derive(Debug, serde::Serialize)]
pub struct PasswordOutput {
    pub passwords: Vec<String>,
    pub charset_size: usize,
    pub entropy_bits: f64,
    pub strength: &'static str,
}

pub fn run(app: App, global: crate::Global) -> Result<()> {
    match app.command {
        Commands::Password(options) => password(options, global),
        Commands::Uuid(options) => uuid(options, global),
    }
}

/// Draw one password uniformly from the pool.
fn draw_password(pool: &[char], length: usize, rng: &mut impl Rng) -> String {
    (0..length).map(|_| pool[rng.gen_range(0..pool.len())]).collect()
}

fn password(options: PasswordOptions, global: crate::Global) -> Result<()> {
    if options.length == 0 {
        return Err(eyre!("Password length must be at least 1"));
    }

    let charset = CharsetOptions {
        lowercase: !options.no_lowercase,
        uppercase: !options.no_uppercase,
        digits: !options.no_digits,
        symbols: !options.no_symbols,
        exclude_ambiguous: options.exclude_ambiguous,
    };

    let pool = build_charset(&charset).map_err(|e| eyre!(e))?;
    let bits = entropy_bits(options.length, pool.len());

    if global.verbose {
        println!("Charset size: {} characters", pool.len());
    }

    let mut rng = rand::thread_rng();
    let passwords: Vec<String> = (0..options.count.max(1))
        .map(|_| draw_password(&pool, options.length, &mut rng))
        .collect();

    if options.json {
        let payload = PasswordOutput {
            passwords,
            charset_size: pool.len(),
            entropy_bits: bits,
            strength: strength_label(bits),
        };
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        for password in &passwords {
            println!("{}", password);
        }
        println!(
            "{}",
            format!("~{:.0} bits of entropy ({})", bits, strength_label(bits)).bright_black()
        );
    }

    Ok(())
}

fn uuid(options: UuidOptions, _global: crate::Global) -> Result<()> {
    for _ in 0..options.count.max(1) {
        let id = ::uuid::Uuid::new_v4();
        let rendered = format_uuid(&id, options.simple, options.uppercase);
        println!("{}", rendered);
    }

    Ok(())
}

fn format_uuid(id: &::uuid::Uuid, simple: bool, uppercase: bool) -> String {
    let rendered = if simple {
        id.simple().to_string()
    } else {
        id.to_string()
    };

    if uppercase {
        rendered.to_uppercase()
    } else {
        rendered
    }
}

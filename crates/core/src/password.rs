//! Charset assembly and strength estimation for password generation
//!
//! The random draw itself happens in the shell; this module owns the
//! deterministic parts so they stay testable.

use serde::Serialize;

pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%^&*()-_=+[]{};:,.<>?";

/// Characters that read alike in most fonts.
const AMBIGUOUS: &str = "Il1O0";

/// Which character classes a password draws from.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CharsetOptions {
    pub lowercase: bool,
    pub uppercase: bool,
    pub digits: bool,
    pub symbols: bool,
    /// Drop characters that read alike (I, l, 1, O, 0).
    pub exclude_ambiguous: bool,
}

/// Build the candidate pool for the requested classes.
///
/// Errors when no class is enabled, since an empty pool cannot yield a
/// password.
pub fn build_charset(options: &CharsetOptions) -> Result<Vec<char>, String> {
    let mut pool = String::new();

    if options.lowercase {
        pool.push_str(LOWERCASE);
    }
    if options.uppercase {
        pool.push_str(UPPERCASE);
    }
    if options.digits {
        pool.push_str(DIGITS);
    }
    if options.symbols {
        pool.push_str(SYMBOLS);
    }

    if pool.is_empty() {
        return Err("At least one character class must be enabled".to_string());
    }

    let pool: Vec<char> = if options.exclude_ambiguous {
        pool.chars().filter(|c| !AMBIGUOUS.contains(*c)).collect()
    } else {
        pool.chars().collect()
    };

    Ok(pool)
}

/// Estimated entropy in bits for a uniformly drawn password.
pub fn entropy_bits(length: usize, charset_size: usize) -> f64 {
    if charset_size < 2 {
        return 0.0;
    }
    length as f64 * (charset_size as f64).log2()
}

/// Human label for an entropy estimate.
pub fn strength_label(bits: f64) -> &'static str {
    match bits {
        b if b < 28.0 => "very weak",
        b if b < 36.0 => "weak",
        b if b < 60.0 => "reasonable",
        b if b < 128.0 => "strong",
        _ => "very strong",
    }
}

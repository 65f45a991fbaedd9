pub use crate::error::Error;

pub use anstream::eprintln;
pub use anstream::println;
pub use color_eyre::eyre::{eyre, Context, OptionExt, Result};
pub use std::format as f;

pub fn new_table() -> prettytable::Table {
    let mut table = prettytable::Table::new();

    let format = prettytable::format::FormatBuilder::new()
        .padding(1, 1)
        .build();

    table.set_format(format);

    table
}

/// Resolve a command's input text from, in order of precedence, an inline
/// argument, a file path, or stdin.
pub fn read_input(inline: Option<String>, file: Option<&std::path::Path>) -> Result<String> {
    if let Some(text) = inline {
        return Ok(text);
    }

    if let Some(path) = file {
        return std::fs::read_to_string(path)
            .wrap_err_with(|| f!("Failed to read {}", path.display()));
    }

    std::io::read_to_string(std::io::stdin()).wrap_err("Failed to read stdin")
}

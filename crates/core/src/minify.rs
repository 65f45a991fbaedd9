//! Best-effort regex-based CSS/JS minification
//!
//! These are text transforms, not real parsers: comment-like sequences inside
//! string literals will be mangled. That trade-off is the tool's documented
//! policy — it favors a tiny implementation over edge-case fidelity.

use regex::Regex;

/// Minify a CSS stylesheet: strip comments, collapse whitespace, and tighten
/// spacing around punctuation.
pub fn minify_css(input: &str) -> String {
    let comments = Regex::new(r"(?s)/\*.*?\*/").unwrap();
    let css = comments.replace_all(input, "");

    let whitespace = Regex::new(r"\s+").unwrap();
    let css = whitespace.replace_all(&css, " ");

    let punctuation = Regex::new(r"\s*([{}:;,>])\s*").unwrap();
    let css = punctuation.replace_all(&css, "$1");

    // A final ; before } is dead weight.
    css.replace(";}", "}").trim().to_string()
}

/// Minify JavaScript: strip comments, trim lines, and drop blank lines.
///
/// Newlines are kept so automatic-semicolon-insertion code keeps working.
pub fn minify_js(input: &str) -> String {
    let block_comments = Regex::new(r"(?s)/\*.*?\*/").unwrap();
    let js = block_comments.replace_all(input, "");

    let line_comments = Regex::new(r"(?m)(^|[^:])//[^\n]*").unwrap();
    let js = line_comments.replace_all(&js, "$1");

    js.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

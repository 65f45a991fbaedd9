//! Case conversion and text statistics functions

use regex::Regex;
use serde::Serialize;

/// Target case for conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseStyle {
    Snake,
    Camel,
    Pascal,
    Kebab,
    Constant,
    Title,
    Sentence,
}

/// Basic counters for the word-count tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextStats {
    pub characters: usize,
    pub characters_no_spaces: usize,
    pub words: usize,
    pub lines: usize,
    pub sentences: usize,
}

/// Tokenize input into lowercase words, splitting on delimiters and
/// camelCase/acronym boundaries ("parseHTTPResponse" → parse, http, response).
pub fn words(input: &str) -> Vec<String> {
    let camel = Regex::new(r"([a-z0-9])([A-Z])").unwrap();
    let spaced = camel.replace_all(input, "$1 $2");

    let acronym = Regex::new(r"([A-Z]+)([A-Z][a-z])").unwrap();
    let spaced = acronym.replace_all(&spaced, "$1 $2");

    spaced
        .split(|c: char| !c.is_alphanumeric())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_lowercase())
        .collect()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Convert input to the requested case style.
pub fn convert_case(input: &str, style: CaseStyle) -> String {
    let words = words(input);

    match style {
        CaseStyle::Snake => words.join("_"),
        CaseStyle::Kebab => words.join("-"),
        CaseStyle::Constant => words
            .iter()
            .map(|w| w.to_uppercase())
            .collect::<Vec<_>>()
            .join("_"),
        CaseStyle::Camel => words
            .iter()
            .enumerate()
            .map(|(i, w)| if i == 0 { w.clone() } else { capitalize(w) })
            .collect(),
        CaseStyle::Pascal => words.iter().map(|w| capitalize(w)).collect(),
        CaseStyle::Title => words
            .iter()
            .map(|w| capitalize(w))
            .collect::<Vec<_>>()
            .join(" "),
        CaseStyle::Sentence => {
            let mut sentence = words.join(" ");
            if let Some(first) = sentence.get(0..1) {
                let upper = first.to_uppercase();
                sentence.replace_range(0..1, &upper);
            }
            sentence
        }
    }
}

/// Count characters, words, lines, and sentences.
pub fn text_stats(input: &str) -> TextStats {
    let sentence_re = Regex::new(r"[.!?]+").unwrap();

    TextStats {
        characters: input.chars().count(),
        characters_no_spaces: input.chars().filter(|c| !c.is_whitespace()).count(),
        words: input.split_whitespace().count(),
        lines: input.lines().count(),
        sentences: sentence_re
            .split(input)
            .filter(|s| !s.trim().is_empty())
            .count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_words_splits_delimiters() {
        assert_eq!(words("hello world_foo-bar"), ["hello", "world", "foo", "bar"]);
    }

    #[test]
    fn test_words_splits_camel_boundaries() {
        assert_eq!(words("parseCsvLine"), ["parse", "csv", "line"]);
    }

    #[test]
    fn test_words_splits_acronyms() {
        assert_eq!(words("parseHTTPResponse"), ["parse", "http", "response"]);
    }

    #[test]
    fn test_words_empty_input() {
        assert!(words("").is_empty());
        assert!(words("  --  ").is_empty());
    }

    #[test]
    fn test_convert_snake() {
        assert_eq!(convert_case("Hello World", CaseStyle::Snake), "hello_world");
    }

    #[test]
    fn test_convert_camel() {
        assert_eq!(
            convert_case("hello_world_again", CaseStyle::Camel),
            "helloWorldAgain"
        );
    }

    #[test]
    fn test_convert_pascal() {
        assert_eq!(convert_case("hello-world", CaseStyle::Pascal), "HelloWorld");
    }

    #[test]
    fn test_convert_kebab() {
        assert_eq!(convert_case("HelloWorld", CaseStyle::Kebab), "hello-world");
    }

    #[test]
    fn test_convert_constant() {
        assert_eq!(
            convert_case("helloWorld", CaseStyle::Constant),
            "HELLO_WORLD"
        );
    }

    #[test]
    fn test_convert_title() {
        assert_eq!(
            convert_case("the quick brown fox", CaseStyle::Title),
            "The Quick Brown Fox"
        );
    }

    #[test]
    fn test_convert_sentence() {
        assert_eq!(
            convert_case("THE_QUICK_FOX", CaseStyle::Sentence),
            "The quick fox"
        );
    }

    #[test]
    fn test_convert_empty() {
        assert_eq!(convert_case("", CaseStyle::Camel), "");
    }

    #[test]
    fn test_text_stats_basic() {
        let stats = text_stats("Hello world. How are you?\nFine!");

        assert_eq!(stats.words, 6);
        assert_eq!(stats.lines, 2);
        assert_eq!(stats.sentences, 3);
    }

    #[test]
    fn test_text_stats_characters() {
        let stats = text_stats("a b");

        assert_eq!(stats.characters, 3);
        assert_eq!(stats.characters_no_spaces, 2);
    }

    #[test]
    fn test_text_stats_empty() {
        let stats = text_stats("");

        assert_eq!(stats.words, 0);
        assert_eq!(stats.lines, 0);
        assert_eq!(stats.sentences, 0);
    }

    #[test]
    fn test_text_stats_unicode() {
        let stats = text_stats("café ☕");

        assert_eq!(stats.characters, 6);
        assert_eq!(stats.words, 2);
    }
}

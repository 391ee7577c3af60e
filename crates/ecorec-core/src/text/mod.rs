//! Text processing utilities for tokenization

mod stop_words;

use regex::Regex;
use rust_stemmers::{Algorithm, Stemmer};
use std::collections::HashSet;
use std::sync::OnceLock;
use tracing::warn;

/// Tokens are runs of two or more word characters
static TOKEN_PATTERN: OnceLock<Option<Regex>> = OnceLock::new();

static STOP_WORDS: OnceLock<HashSet<&'static str>> = OnceLock::new();

/// Porter stemmer for English text
static STEMMER: OnceLock<Stemmer> = OnceLock::new();

fn get_token_pattern() -> Option<&'static Regex> {
    TOKEN_PATTERN
        .get_or_init(|| match Regex::new(r"\b\w\w+\b") {
            Ok(re) => Some(re),
            Err(e) => {
                warn!(error = %e, "failed to compile token pattern");
                None
            }
        })
        .as_ref()
}

fn get_stop_words() -> &'static HashSet<&'static str> {
    STOP_WORDS.get_or_init(|| stop_words::ENGLISH.iter().copied().collect())
}

fn get_stemmer() -> &'static Stemmer {
    STEMMER.get_or_init(|| Stemmer::create(Algorithm::English))
}

/// Whether a lowercase token is an English stop word
pub fn is_stop_word(token: &str) -> bool {
    get_stop_words().contains(token)
}

/// Lowercase word tokenizer with stop word removal
pub fn tokenize(text: &str) -> Vec<String> {
    let Some(pattern) = get_token_pattern() else {
        return Vec::new();
    };
    let lowered = text.to_lowercase();
    pattern
        .find_iter(&lowered)
        .map(|m| m.as_str())
        .filter(|s| !is_stop_word(s))
        .map(|s| s.to_string())
        .collect()
}

/// Tokenize text with optional Porter stemming
///
/// When `stem` is true, "bag" and "bags" collapse to the same term.
pub fn tokenize_with_stemming(text: &str, stem: bool) -> Vec<String> {
    let tokens = tokenize(text);
    if !stem {
        return tokens;
    }

    let stemmer = get_stemmer();
    tokens.iter().map(|t| stemmer.stem(t).to_string()).collect()
}

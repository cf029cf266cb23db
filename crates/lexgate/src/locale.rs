//! Best-effort lookup of the user's country from the system prompt.
//!
//! The regex extractor expects a phrase shaped like
//! `... users in Kazakhstan (KZ) ...`: a word starting with "user", later on the
//! same line the word "in", a country name, and a two-letter code in
//! parentheses. Anything else yields no hint.
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref USER_COUNTRY: Regex =
        Regex::new(r"(?i)\buser\w*\b[^\n]*\bin\s+([^()\n]+?)\s*\(([a-z]{2})\)")
            .expect("static locale pattern is valid");
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleHint {
    pub country: String,
    /// Two-letter country code, uppercased
    pub code: String,
}

pub trait LocaleExtractor: Send + Sync {
    fn extract(&self, system: &str) -> Option<LocaleHint>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct RegexLocaleExtractor;

impl LocaleExtractor for RegexLocaleExtractor {
    fn extract(&self, system: &str) -> Option<LocaleHint> {
        let captures = USER_COUNTRY.captures(system)?;
        let country = captures.get(1)?.as_str().trim();
        let code = captures.get(2)?.as_str();
        if country.is_empty() {
            return None;
        }
        Some(LocaleHint {
            country: country.to_string(),
            code: code.to_uppercase(),
        })
    }
}

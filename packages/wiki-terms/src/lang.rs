//! Supported search languages.
//!
//! Each language maps to a Wikipedia subdomain (`en.wikipedia.org`,
//! `es.wikipedia.org`, ...). The set mirrors what the submission form offers.

use std::fmt;

/// A language the search page can be fetched in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    English,
    Spanish,
    Hindi,
    Chinese,
    French,
}

impl Language {
    /// All supported languages, in form-display order.
    pub const ALL: [Language; 5] = [
        Language::English,
        Language::Spanish,
        Language::Hindi,
        Language::Chinese,
        Language::French,
    ];

    /// The Wikipedia subdomain code.
    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Spanish => "es",
            Language::Hindi => "hi",
            Language::Chinese => "zh",
            Language::French => "fr",
        }
    }

    /// The English display name, as shown on the form and used in prompts.
    pub fn name(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Spanish => "Spanish",
            Language::Hindi => "Hindi",
            Language::Chinese => "Chinese",
            Language::French => "French",
        }
    }

    /// Parse a form value. Accepts both display names and subdomain codes.
    pub fn from_form_value(value: &str) -> Option<Language> {
        Language::ALL
            .into_iter()
            .find(|l| l.name().eq_ignore_ascii_case(value) || l.code() == value)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_and_codes() {
        assert_eq!(Language::from_form_value("English"), Some(Language::English));
        assert_eq!(Language::from_form_value("english"), Some(Language::English));
        assert_eq!(Language::from_form_value("zh"), Some(Language::Chinese));
        assert_eq!(Language::from_form_value("Klingon"), None);
    }

    #[test]
    fn codes_match_subdomains() {
        assert_eq!(Language::Hindi.code(), "hi");
        assert_eq!(Language::French.code(), "fr");
    }
}

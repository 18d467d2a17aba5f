//! Anchor-text validity filter.
//!
//! A search-results page is mostly chrome: login links, policy links,
//! maintenance-category links. This filter weeds the obvious ones out so
//! the sampler only keeps plausible article terms. It is a heuristic,
//! not an exhaustive classifier.

/// Exact-match denylist of known boilerplate and navigation anchor texts.
const DENYLIST: &[&str] = &[
    "",
    " ",
    ".",
    "..",
    "^",
    "a",
    "b",
    "t",
    "All article disambiguation pages",
    "Short description matches Wikidata",
    "Pages including recorded pronunciations",
    "See also",
    "All disambiguation pages",
    "learn more",
    "All articles that may contain original research",
    "edit",
    "Related changes",
    "Contributions",
    "Archived",
    "Talk",
    "Log in",
    "Mobile view",
    "What links here",
    "Page information",
    "Privacy Policy",
    "Disambiguation",
    "Special Pages",
];

/// Decide whether an anchor text is usable as a pitch term.
///
/// Rejects denylisted boilerplate, whitespace-only strings, anything
/// mentioning Wikipedia itself (the `ikipedia` substring catches both
/// capitalizations), and strings that open with a digit or bracket
/// (citation markers, years, template leftovers).
pub fn is_valid(term: &str) -> bool {
    if DENYLIST.contains(&term) || term.trim().is_empty() {
        return false;
    }
    if term.contains("ikipedia") {
        return false;
    }
    match term.chars().next() {
        Some(c) if c.is_ascii_digit() => false,
        Some('{') | Some('[') | Some('(') => false,
        Some(_) => true,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_every_denylisted_string() {
        for term in DENYLIST {
            assert!(!is_valid(term), "denylisted {term:?} slipped through");
        }
    }

    #[test]
    fn rejects_whitespace_only() {
        assert!(!is_valid("   "));
        assert!(!is_valid("\t\n"));
    }

    #[test]
    fn rejects_wikipedia_mentions() {
        assert!(!is_valid("Wikipedia"));
        assert!(!is_valid("wikipedia commons"));
        assert!(!is_valid("About Wikipedia"));
        // Case-sensitive on the substring: WIKIPEDIA passes this rule
        assert!(is_valid("WIKIPEDIA"));
    }

    #[test]
    fn rejects_digit_and_bracket_prefixes() {
        assert!(!is_valid("1911 Encyclopaedia"));
        assert!(!is_valid("[citation needed]"));
        assert!(!is_valid("{template}"));
        assert!(!is_valid("(disambiguation)"));
        // Regardless of denylist membership
        assert!(!is_valid("42"));
    }

    #[test]
    fn accepts_ordinary_capitalized_words() {
        for term in ["Cephalopod", "Mollusc", "Ocean", "Jazz fusion", "Électricité"] {
            assert!(is_valid(term), "expected {term:?} to be valid");
        }
    }
}

//! Prompt composition for the pitch generator.

use crate::lang::Language;

/// Capitalize a term: first character uppercased, remainder lowercased.
fn capitalize(term: &str) -> String {
    let mut chars = term.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Build the generation instruction for three terms.
///
/// Deterministic: the same inputs always produce the same prompt. The
/// summary, when present, adds exactly one sentence; nothing else varies.
pub fn build_prompt(terms: &[String; 3], language: Language, summary: Option<&str>) -> String {
    let mut prompt = format!(
        "Write a killer pitch, in {language}, for a product involving three random terms. \
         DO NOT include the terms 'investor', 'VC', 'venture capital', or 'startup'. \
         It should be extremely compelling and informed, erudite and witty, with advanced \
         vocabulary terms and outrageous claims about the efficacy of the product. \
         The terms are {one}, {two}, and {three}. The pitch should be in {language}.",
        language = language.name(),
        one = capitalize(&terms[0]),
        two = capitalize(&terms[1]),
        three = capitalize(&terms[2]),
    );
    if let Some(summary) = summary {
        prompt.push_str(&format!(
            " Incorporate the feeling of this summary: {summary}"
        ));
    }
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terms() -> [String; 3] {
        ["cephalopod", "MOLLUSC", "ocean floor"].map(String::from)
    }

    #[test]
    fn capitalizes_like_the_form_expects() {
        assert_eq!(capitalize("cephalopod"), "Cephalopod");
        assert_eq!(capitalize("MOLLUSC"), "Mollusc");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn contains_all_three_terms_capitalized() {
        let prompt = build_prompt(&terms(), Language::English, None);
        assert!(prompt.contains("Cephalopod"));
        assert!(prompt.contains("Mollusc"));
        assert!(prompt.contains("Ocean floor"));
        assert!(prompt.contains("English"));
    }

    #[test]
    fn banned_words_appear_only_in_the_do_not_instruction() {
        let prompt = build_prompt(&terms(), Language::French, None);
        for banned in ["'investor'", "'VC'", "'venture capital'", "'startup'"] {
            assert_eq!(prompt.matches(banned).count(), 1, "{banned} misplaced");
        }
        // Exactly one mention each, all inside the DO NOT sentence
        let do_not = prompt
            .split(". ")
            .find(|s| s.starts_with("DO NOT"))
            .expect("do-not sentence present");
        for banned in ["investor", "VC", "venture capital", "startup"] {
            assert_eq!(prompt.matches(banned).count(), 1);
            assert!(do_not.contains(banned));
        }
    }

    #[test]
    fn summary_adds_exactly_one_clause() {
        let bare = build_prompt(&terms(), Language::Spanish, None);
        let with = build_prompt(&terms(), Language::Spanish, Some("the deep is cold"));
        assert!(with.starts_with(&bare));
        assert!(with.contains("Incorporate the feeling of this summary: the deep is cold"));
    }

    #[test]
    fn deterministic_for_equal_inputs() {
        let a = build_prompt(&terms(), Language::Hindi, Some("s"));
        let b = build_prompt(&terms(), Language::Hindi, Some("s"));
        assert_eq!(a, b);
    }
}

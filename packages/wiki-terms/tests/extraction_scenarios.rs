//! Scenario tests for term extraction through the public API.

use wiki_terms::testing::{search_page, StaticFetcher};
use wiki_terms::{is_valid, ExtractError, Language, TermExtractor};

const NAV: [&str; 10] = [
    "Log in",
    "Talk",
    "edit",
    "Special Pages",
    "Privacy Policy",
    "Mobile view",
    "Contributions",
    "Related changes",
    "What links here",
    "Page information",
];

#[tokio::test]
async fn octopus_page_yields_the_content_terms() {
    let content = [
        "Cephalopod",
        "Mollusc",
        "Ocean",
        "Cephalopod",
        "Mollusc",
        "Ocean",
        "Cephalopod",
        "Mollusc",
        "Ocean",
        "Cephalopod",
    ];
    let fetcher = StaticFetcher::default().with_page(
        "https://en.test/search=octopus",
        search_page("Octopus", &NAV, &content),
    );

    let extractor = TermExtractor::new(fetcher)
        .with_base_template("https://{lang}.test/search=")
        .with_seed(42);

    let terms = extractor
        .extract_terms("octopus", Language::English)
        .await
        .unwrap();

    // Exactly three terms, each valid, each from the content range,
    // never from the ten navigation links.
    for term in &terms {
        assert!(is_valid(term));
        assert!(["Cephalopod", "Mollusc", "Ocean"].contains(&term.as_str()));
        assert!(!NAV.contains(&term.as_str()));
    }
}

#[tokio::test]
async fn every_supported_language_builds_its_own_search_url() {
    for language in Language::ALL {
        let page = search_page("Tea", &NAV, &["Camellia", "Leaf", "Infusion"]);
        let url = format!("https://{}.test/search=tea", language.code());
        let fetcher = StaticFetcher::default().with_page(url, page);

        let extractor = TermExtractor::new(fetcher)
            .with_base_template("https://{lang}.test/search=")
            .with_seed(1);

        let terms = extractor.extract_terms("tea", language).await.unwrap();
        assert_eq!(terms.len(), 3);
    }
}

#[tokio::test]
async fn phrase_with_spaces_is_url_encoded() {
    let fetcher = StaticFetcher::default().with_page(
        "https://en.test/search=deep%20sea",
        search_page("Deep sea", &NAV, &["Abyss", "Trench", "Pressure"]),
    );

    let extractor = TermExtractor::new(fetcher)
        .with_base_template("https://{lang}.test/search=")
        .with_seed(5);

    extractor
        .extract_terms("deep sea", Language::English)
        .await
        .unwrap();
}

#[tokio::test]
async fn results_page_without_an_article_is_no_results() {
    let fetcher = StaticFetcher::default().with_page(
        "https://en.test/search=qqqq",
        search_page("Search results - Wikipedia", &NAV, &["Help"]),
    );

    let extractor = TermExtractor::new(fetcher)
        .with_base_template("https://{lang}.test/search=")
        .with_seed(9);

    let err = extractor
        .extract_terms("qqqq", Language::English)
        .await
        .unwrap_err();
    assert!(matches!(err, ExtractError::NoResults { .. }));
}

//! The five pipeline stages, in data-flow order:
//! harvester → extractor → enrichment → headcount → aggregator.
//!
//! One candidate at a time, strictly in harvest order. The browser session
//! and the extraction service are the only automation resources; serializing
//! access to them is what keeps anti-bot defenses quiet.

pub mod aggregator;
pub mod enrichment;
pub mod extractor;
pub mod harvester;
pub mod headcount;

pub use aggregator::LeadAggregator;
pub use enrichment::EnrichmentEngine;
pub use extractor::PostingExtractor;
pub use harvester::SearchHarvester;
pub use headcount::HeadcountResolver;

use url::Url;

/// Build the results URL for `query` against the search base, with the query
/// properly form-encoded. Shared by the harvester and the headcount
/// resolver so both searches encode identically.
pub fn search_results_url(base: &str, query: &str) -> String {
    let endpoint = format!("{}/search", base.trim_end_matches('/'));
    match Url::parse_with_params(&endpoint, [("q", query)]) {
        Ok(url) => url.to_string(),
        // An unparseable base will fail navigation downstream, which the
        // callers already treat as a degraded, non-fatal step.
        Err(_) => endpoint,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_spaces_and_quotes_are_encoded() {
        let url = search_results_url(
            "https://www.google.com",
            "site:myworkdayjobs.com Data Engineer (\"United States\")",
        );
        assert_eq!(
            url,
            "https://www.google.com/search?q=site%3Amyworkdayjobs.com+Data+Engineer+%28%22United+States%22%29"
        );
    }

    #[test]
    fn literal_plus_in_role_survives_encoding() {
        // A role like "C++ Developer" must not decode back to "C   Developer".
        let url = search_results_url("https://www.google.com", "C++ Developer");
        assert_eq!(url, "https://www.google.com/search?q=C%2B%2B+Developer");
    }

    #[test]
    fn non_ascii_query_is_percent_encoded() {
        let url = search_results_url("https://www.google.com", "Entwickler für Daten");
        assert_eq!(
            url,
            "https://www.google.com/search?q=Entwickler+f%C3%BCr+Daten"
        );
    }

    #[test]
    fn trailing_slash_on_base_is_tolerated() {
        let url = search_results_url("https://www.google.com/", "x");
        assert_eq!(url, "https://www.google.com/search?q=x");
    }

    #[test]
    fn headcount_style_query_encodes_quotes() {
        let url = search_results_url("https://www.google.com", "\"Acme\" number of employees");
        assert_eq!(
            url,
            "https://www.google.com/search?q=%22Acme%22+number+of+employees"
        );
    }
}

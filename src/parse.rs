//! Parsing of raw text-extraction responses.
//!
//! This is the least reliable seam in the system: the service is asked for a
//! fixed format but nothing enforces it. Everything here is total: malformed
//! input degrades to a usable value instead of erroring.

use std::sync::OnceLock;

use regex::Regex;

use crate::models::EnrichmentResult;

/// Sentinel the enrichment prompt asks the service to emit for login walls
/// and error pages.
pub const INVALID_SENTINEL: &str = "INVALID";

/// Maximum number of technologies kept from the service's tech list.
pub const MAX_TECH_STACK: usize = 5;

fn number_re() -> &'static Regex {
    static NUMBER_RE: OnceLock<Regex> = OnceLock::new();
    // Grouped thousands ("5,000") or a bare digit run.
    NUMBER_RE.get_or_init(|| Regex::new(r"\d{1,3}(?:,\d{3})+|\d+").unwrap())
}

/// Parse an enrichment response of the requested shape:
///
/// ```text
/// Tech: [Spark, Kafka, Python]
/// Focus: Building the new data platform team.
/// ```
///
/// The `INVALID` sentinel anywhere in the response marks the posting as not a
/// genuine job description. Beyond sentinel detection there is no structural
/// validation: a response without the format markers is passed through whole
/// as the focus summary.
pub fn parse_analysis(raw: &str) -> EnrichmentResult {
    if raw.contains(INVALID_SENTINEL) {
        return EnrichmentResult {
            tech_stack: Vec::new(),
            focus_summary: String::new(),
            valid: false,
        };
    }

    let mut tech_stack = Vec::new();
    let mut focus = None;
    for line in raw.lines() {
        let line = line.trim();
        if let Some(rest) = line.strip_prefix("Tech:") {
            tech_stack = split_tech_list(rest);
        } else if let Some(rest) = line.strip_prefix("Focus:") {
            focus = Some(rest.trim().to_string());
        }
    }

    let focus_summary = match focus {
        Some(f) => f,
        // No markers at all: keep the raw response rather than losing it.
        None if tech_stack.is_empty() => raw.trim().to_string(),
        None => String::new(),
    };

    EnrichmentResult {
        tech_stack,
        focus_summary,
        valid: true,
    }
}

fn split_tech_list(rest: &str) -> Vec<String> {
    rest.trim()
        .trim_start_matches('[')
        .trim_end_matches(']')
        .split(',')
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .take(MAX_TECH_STACK)
        .collect()
}

/// Scrape an employee count out of a headcount response.
///
/// The first integer-looking token wins; a `low-high` range resolves to its
/// maximum; no digits at all (including the "AI Error" placeholder) yields 0.
pub fn parse_headcount(response: &str) -> u64 {
    let mut numbers = number_re().find_iter(response);
    let Some(first) = numbers.next() else {
        return 0;
    };
    let first_val = parse_grouped(first.as_str());

    if let Some(second) = numbers.next() {
        let between = response[first.end()..second.start()].trim();
        if matches!(between, "-" | "–" | "—" | "to") {
            return first_val.max(parse_grouped(second.as_str()));
        }
    }

    first_val
}

fn parse_grouped(token: &str) -> u64 {
    token.replace(',', "").parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ----- parse_analysis -----

    #[test]
    fn well_formed_response_splits_into_tech_and_focus() {
        let result = parse_analysis("Tech: [Spark, Kafka, Python]\nFocus: Scaling the data platform.");
        assert!(result.valid);
        assert_eq!(result.tech_stack, vec!["Spark", "Kafka", "Python"]);
        assert_eq!(result.focus_summary, "Scaling the data platform.");
    }

    #[test]
    fn invalid_sentinel_marks_result_invalid() {
        let result = parse_analysis("INVALID");
        assert!(!result.valid);

        // Sentinel buried in prose still counts.
        let result = parse_analysis("This page looks INVALID to me.");
        assert!(!result.valid);
    }

    #[test]
    fn tech_list_is_capped_at_five() {
        let result = parse_analysis("Tech: a, b, c, d, e, f, g\nFocus: x");
        assert_eq!(result.tech_stack.len(), MAX_TECH_STACK);
        assert_eq!(result.tech_stack, vec!["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn tech_list_without_brackets_is_accepted() {
        let result = parse_analysis("Tech: Airflow, dbt\nFocus: ELT modernization.");
        assert_eq!(result.tech_stack, vec!["Airflow", "dbt"]);
    }

    #[test]
    fn response_without_markers_passes_through_as_focus() {
        let raw = "The posting mentions Spark and Kafka for a platform team.";
        let result = parse_analysis(raw);
        assert!(result.valid);
        assert!(result.tech_stack.is_empty());
        assert_eq!(result.focus_summary, raw);
    }

    #[test]
    fn empty_response_yields_empty_valid_result() {
        let result = parse_analysis("");
        assert!(result.valid);
        assert!(result.tech_stack.is_empty());
        assert!(result.focus_summary.is_empty());
    }

    #[test]
    fn extra_prose_around_markers_is_ignored() {
        let raw = "Sure! Here is the analysis:\nTech: [Rust]\nFocus: Systems work.\nHope this helps!";
        let result = parse_analysis(raw);
        assert_eq!(result.tech_stack, vec!["Rust"]);
        assert_eq!(result.focus_summary, "Systems work.");
    }

    #[test]
    fn empty_tech_entries_are_dropped() {
        let result = parse_analysis("Tech: [Spark, , Kafka,]\nFocus: x");
        assert_eq!(result.tech_stack, vec!["Spark", "Kafka"]);
    }

    // ----- parse_headcount -----

    #[test]
    fn plain_digits_parse_directly() {
        assert_eq!(parse_headcount("5000"), 5000);
    }

    #[test]
    fn comma_grouped_number_parses() {
        assert_eq!(parse_headcount("12,500"), 12500);
    }

    #[test]
    fn range_resolves_to_maximum() {
        assert_eq!(parse_headcount("5,000-10,000"), 10000);
        assert_eq!(parse_headcount("5000 - 10000"), 10000);
        assert_eq!(parse_headcount("500 to 1000"), 1000);
    }

    #[test]
    fn first_number_wins_when_not_a_range() {
        assert_eq!(parse_headcount("1200 employees across 14 offices"), 1200);
    }

    #[test]
    fn number_embedded_in_prose_is_found() {
        assert_eq!(parse_headcount("Around 5,000 people work there."), 5000);
    }

    #[test]
    fn no_digits_yields_zero() {
        assert_eq!(parse_headcount(""), 0);
        assert_eq!(parse_headcount("AI Error"), 0);
        assert_eq!(parse_headcount("no headcount found"), 0);
    }

    #[test]
    fn zero_response_is_zero() {
        assert_eq!(parse_headcount("0"), 0);
    }

    #[test]
    fn parsing_is_idempotent() {
        let snippet = "They employ 5,000-10,000 staff";
        assert_eq!(parse_headcount(snippet), parse_headcount(snippet));
    }
}

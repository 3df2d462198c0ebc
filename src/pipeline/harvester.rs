//! Search harvesting: paginate over the results listing and collect
//! deduplicated (organization, URL) candidates.

use std::collections::HashSet;

use tracing::{info, warn};

use crate::browser::PageDriver;
use crate::models::CandidateLink;
use crate::report::StatusReporter;
use crate::utils::delay;

/// Results container on the search page. Appears only once any bot challenge
/// has been cleared, which is why the harvester waits for it without a bound.
const RESULTS_SELECTOR: &str = "#search";

/// "Next page" control.
const NEXT_PAGE_SELECTOR: &str = "#pnnext";

/// Consent button labels tried in order, best-effort.
const CONSENT_LABELS: [&str; 4] = ["Reject all", "Reject", "Deny", "Odbij sve"];

/// Host labels that are never an organization.
const EXCLUDED_LABELS: [&str; 2] = ["Www", "Myworkdayjobs"];

pub struct SearchHarvester<'a> {
    driver: &'a PageDriver,
    reporter: &'a dyn StatusReporter,
    search_base_url: &'a str,
    platform_domain: &'a str,
}

impl<'a> SearchHarvester<'a> {
    pub fn new(
        driver: &'a PageDriver,
        reporter: &'a dyn StatusReporter,
        search_base_url: &'a str,
        platform_domain: &'a str,
    ) -> Self {
        Self {
            driver,
            reporter,
            search_base_url,
            platform_domain,
        }
    }

    /// Drive pagination over the results listing for `query`, up to
    /// `max_pages` pages. Never fails: every per-step error degrades to
    /// "fewer links".
    pub async fn harvest(&self, query: &str, max_pages: usize) -> Vec<CandidateLink> {
        let url = super::search_results_url(self.search_base_url, query);
        if let Err(e) = self.driver.navigate(&url, tokio::time::Duration::from_secs(15)).await {
            warn!("Search navigation failed: {}", e);
        }

        // Consent interstitial, if any. Failing to dismiss it is non-fatal.
        match self.driver.click_button_labeled(&CONSENT_LABELS).await {
            Ok(true) => info!("Dismissed consent dialog"),
            _ => {}
        }

        // Indefinite wait: this blocks until the results container exists,
        // which may require a human to solve a challenge in the browser.
        self.reporter.challenge_wait();
        if self.driver.wait_for_selector(RESULTS_SELECTOR, None).await.is_err() {
            warn!("Results container never appeared; continuing with whatever is on the page");
        }
        self.reporter.status("Search results found, collecting links...");

        let mut raw = Vec::new();
        for page_no in 1..=max_pages {
            self.reporter
                .status(&format!("Scraping results page {}/{}...", page_no, max_pages));

            match self.driver.collect_link_hrefs(self.platform_domain).await {
                Ok(hrefs) => {
                    for href in hrefs {
                        if let Some(organization) = organization_from_url(&href) {
                            raw.push(CandidateLink {
                                organization,
                                url: href,
                            });
                        }
                    }
                }
                Err(e) => warn!("Could not read links on page {}: {}", page_no, e),
            }

            if page_no == max_pages {
                break;
            }
            match self.driver.click_if_present(NEXT_PAGE_SELECTOR).await {
                Ok(true) => delay::humanize(2.0..4.0).await,
                _ => {
                    info!("No more result pages after page {}", page_no);
                    break;
                }
            }
        }

        dedup_by_organization(raw)
    }
}

/// Derive an organization name from a job-posting URL: the host's first DNS
/// label, capitalized. Returns None for search-engine-internal links, hosts
/// without a usable label, and known non-organization subdomains.
pub fn organization_from_url(url: &str) -> Option<String> {
    if url.contains("google.com") {
        return None;
    }
    let after_scheme = url.split("//").nth(1)?;
    let label = after_scheme.split('.').next()?;
    if label.is_empty() || label.contains('/') {
        return None;
    }

    let mut chars = label.chars();
    let first = chars.next()?;
    let name: String = first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect();

    if EXCLUDED_LABELS.contains(&name.as_str()) {
        return None;
    }
    Some(name)
}

/// Keep the first candidate seen for each organization, preserving order.
pub fn dedup_by_organization(raw: Vec<CandidateLink>) -> Vec<CandidateLink> {
    let mut seen = HashSet::new();
    raw.into_iter()
        .filter(|c| seen.insert(c.organization.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn organization_comes_from_first_host_label() {
        assert_eq!(
            organization_from_url("https://nvidia.myworkdayjobs.com/en-US/External/job/123"),
            Some("Nvidia".to_string())
        );
    }

    #[test]
    fn organization_name_is_capitalized() {
        assert_eq!(
            organization_from_url("https://acmecorp.myworkdayjobs.com/job"),
            Some("Acmecorp".to_string())
        );
        assert_eq!(
            organization_from_url("https://ACME.myworkdayjobs.com/job"),
            Some("Acme".to_string())
        );
    }

    #[test]
    fn search_engine_internal_links_are_dropped() {
        assert_eq!(organization_from_url("https://www.google.com/url?q=x"), None);
    }

    #[test]
    fn non_organization_labels_are_dropped() {
        assert_eq!(organization_from_url("https://www.myworkdayjobs.com/x"), None);
        assert_eq!(organization_from_url("https://myworkdayjobs.com/x"), None);
    }

    #[test]
    fn schemeless_garbage_is_dropped() {
        assert_eq!(organization_from_url("not a url"), None);
    }

    #[test]
    fn dedup_keeps_first_seen_url() {
        let raw = vec![
            CandidateLink {
                organization: "Acme".into(),
                url: "https://acme.myworkdayjobs.com/job/1".into(),
            },
            CandidateLink {
                organization: "Acme".into(),
                url: "https://acme.myworkdayjobs.com/job/2".into(),
            },
            CandidateLink {
                organization: "Globex".into(),
                url: "https://globex.myworkdayjobs.com/job/3".into(),
            },
        ];

        let deduped = dedup_by_organization(raw);
        assert_eq!(deduped.len(), 2);
        assert_eq!(deduped[0].organization, "Acme");
        assert_eq!(deduped[0].url, "https://acme.myworkdayjobs.com/job/1");
        assert_eq!(deduped[1].organization, "Globex");
    }
}

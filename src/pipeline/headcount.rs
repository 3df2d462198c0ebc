//! Headcount resolution: secondary search for an organization's size plus a
//! digit-scraping extraction. Best-effort enrichment only; every failure
//! path lands on zero.

use tokio::time::Duration;
use tracing::{debug, warn};

use crate::browser::PageDriver;
use crate::clients::OllamaClient;
use crate::parse;

const RESULTS_SELECTOR: &str = "#search";
const NAVIGATION_BOUND: Duration = Duration::from_secs(10);
const SNIPPET_WAIT_BOUND: Duration = Duration::from_secs(5);

/// Leading slice of the results snippet fed to the service.
const SNIPPET_CHARS: usize = 1000;

pub struct HeadcountResolver<'a> {
    driver: &'a PageDriver,
    llm: &'a OllamaClient,
    search_base_url: &'a str,
}

impl<'a> HeadcountResolver<'a> {
    pub fn new(driver: &'a PageDriver, llm: &'a OllamaClient, search_base_url: &'a str) -> Self {
        Self {
            driver,
            llm,
            search_base_url,
        }
    }

    /// Estimate an organization's employee count. Returns 0 on any
    /// navigation, timeout, or service failure.
    pub async fn resolve(&self, organization: &str) -> u64 {
        let query = format!("\"{}\" number of employees", organization);
        let url = super::search_results_url(self.search_base_url, &query);

        if let Err(e) = self.driver.navigate(&url, NAVIGATION_BOUND).await {
            warn!("Headcount search failed for {}: {}", organization, e);
            return 0;
        }
        if self
            .driver
            .wait_for_selector(RESULTS_SELECTOR, Some(SNIPPET_WAIT_BOUND))
            .await
            .is_err()
        {
            debug!("No results snippet for {}", organization);
            return 0;
        }

        let snippet = match self.driver.inner_text(RESULTS_SELECTOR).await {
            Ok(Some(text)) => text.chars().take(SNIPPET_CHARS).collect::<String>(),
            _ => return 0,
        };

        let prompt = build_headcount_prompt(&snippet);
        match self.llm.generate(&prompt).await {
            Ok(raw) => parse::parse_headcount(&raw),
            Err(e) => {
                warn!("Headcount extraction degraded to 0 for {}: {}", organization, e);
                0
            }
        }
    }
}

fn build_headcount_prompt(snippet: &str) -> String {
    format!(
        "Extract the number of employees from this search snippet: '{}'\n\
         Prefer numbers next to words like employees, staff, workforce, or people.\n\
         Ignore numbers next to reviews, salaries, job openings, office locations, or founding years.\n\
         If a range is given (e.g. 5,000-10,000), return the maximum of the range.\n\
         Return ONLY the number in digits (e.g. 5000). If no employee count is present, return 0.",
        snippet
    )
}

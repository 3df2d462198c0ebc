//! Posting extraction: load a candidate's posting page and pull out genuine
//! job-description text, with fallbacks for lazy-loaded layouts.

use tokio::time::{sleep, Duration};
use tracing::debug;

use crate::browser::PageDriver;
use crate::error::ExtractionFailed;
use crate::models::{CandidateLink, PostingContent};

/// Workday's posting body region.
const POSTING_BODY_SELECTOR: &str = r#"[data-automation-id="jobPostingDescription"]"#;

const NAVIGATION_BOUND: Duration = Duration::from_secs(10);
const BODY_WAIT_BOUND: Duration = Duration::from_secs(2);
const RENDER_PAUSE: Duration = Duration::from_secs(1);

/// Minimum plausible length for a real posting.
const MIN_POSTING_LEN: usize = 100;

/// Texts shorter than this that lead with account markers are login walls.
/// Longer pages carrying the same markers go through to enrichment, which has
/// its own invalid-page sentinel.
const LOGIN_WALL_MAX_LEN: usize = 400;

/// How far into the text account markers still count as "leading".
const LEADING_FRAGMENT_CHARS: usize = 200;

const LOGIN_MARKERS: [&str; 4] = ["Sign In", "Sign in", "Log In", "Create Account"];

/// Full-page fallback text is capped so enormous pages don't blow up the
/// enrichment prompt.
const BODY_TEXT_CAP: usize = 5000;

pub struct PostingExtractor<'a> {
    driver: &'a PageDriver,
}

impl<'a> PostingExtractor<'a> {
    pub fn new(driver: &'a PageDriver) -> Self {
        Self { driver }
    }

    /// Retrieve and validate posting text for one candidate. Any failure is
    /// non-fatal to the run: the caller skips the candidate, no retry.
    pub async fn extract(&self, candidate: &CandidateLink) -> Result<PostingContent, ExtractionFailed> {
        let url = canonical_posting_url(&candidate.url);
        self.driver.navigate(&url, NAVIGATION_BOUND).await?;

        if self
            .driver
            .wait_for_selector(POSTING_BODY_SELECTOR, Some(BODY_WAIT_BOUND))
            .await
            .is_err()
        {
            // Posting body not there yet; force lazy-loaded content to render.
            debug!("Posting body not visible for {}, scrolling", candidate.organization);
            self.driver.scroll_to_bottom().await.ok();
            sleep(RENDER_PAUSE).await;
        }

        let text = match self.driver.inner_text(POSTING_BODY_SELECTOR).await {
            Ok(Some(text)) => text,
            _ => {
                debug!("Falling back to full-page text for {}", candidate.organization);
                let body = self.driver.body_text().await?;
                body.chars().take(BODY_TEXT_CAP).collect()
            }
        };

        validate_posting_text(&text)?;

        Ok(PostingContent {
            candidate: candidate.clone(),
            text,
        })
    }
}

/// Strip a trailing application-form suffix back to the canonical posting
/// path.
pub fn canonical_posting_url(url: &str) -> String {
    let trimmed = url.trim_end_matches('/');
    match trimmed.strip_suffix("/apply") {
        Some(stripped) => stripped.to_string(),
        None => url.to_string(),
    }
}

/// Gate posting text before it reaches the extraction service.
pub fn validate_posting_text(text: &str) -> Result<(), ExtractionFailed> {
    let len = text.chars().count();
    if len < MIN_POSTING_LEN {
        return Err(ExtractionFailed::TooShort { len });
    }
    if len < LOGIN_WALL_MAX_LEN {
        let leading: String = text.chars().take(LEADING_FRAGMENT_CHARS).collect();
        if LOGIN_MARKERS.iter().any(|m| leading.contains(m)) {
            return Err(ExtractionFailed::LoginWall);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_suffix_is_stripped() {
        assert_eq!(
            canonical_posting_url("https://acme.myworkdayjobs.com/job/123/apply"),
            "https://acme.myworkdayjobs.com/job/123"
        );
        assert_eq!(
            canonical_posting_url("https://acme.myworkdayjobs.com/job/123/apply/"),
            "https://acme.myworkdayjobs.com/job/123"
        );
    }

    #[test]
    fn non_apply_urls_are_untouched() {
        let url = "https://acme.myworkdayjobs.com/job/123";
        assert_eq!(canonical_posting_url(url), url);
    }

    #[test]
    fn short_text_is_rejected_even_with_login_markers() {
        // 80 chars total, leads with account markers: rejected on length.
        let text = format!("Sign In\nCreate Account\n{}", "x".repeat(57));
        assert_eq!(text.chars().count(), 80);
        assert!(matches!(
            validate_posting_text(&text),
            Err(ExtractionFailed::TooShort { len: 80 })
        ));
    }

    #[test]
    fn very_short_apply_prompt_is_rejected() {
        assert!(matches!(
            validate_posting_text("Apply Now — Sign In to continue"),
            Err(ExtractionFailed::TooShort { .. })
        ));
    }

    #[test]
    fn mid_length_login_wall_is_rejected() {
        let text = format!("Sign In\nCreate Account\n{}", "x".repeat(300));
        assert!(matches!(
            validate_posting_text(&text),
            Err(ExtractionFailed::LoginWall)
        ));
    }

    #[test]
    fn long_text_with_login_markers_passes_to_enrichment() {
        // 600 chars: long enough that the enrichment sentinel owns the call.
        let text = format!("Sign In\nCreate Account\n{}", "x".repeat(577));
        assert_eq!(text.chars().count(), 600);
        assert!(validate_posting_text(&text).is_ok());
    }

    #[test]
    fn ordinary_posting_text_passes() {
        let text = "We are hiring a Data Engineer to build pipelines. ".repeat(10);
        assert!(validate_posting_text(&text).is_ok());
    }

    #[test]
    fn login_markers_deep_in_the_text_do_not_reject() {
        let text = format!("{}Sign In", "Real posting content here. ".repeat(10));
        assert!(validate_posting_text(&text).is_ok());
    }
}

//! Page driver.
//!
//! Holds the single shared `Page` and exposes the handful of capabilities the
//! pipeline needs: navigate, wait, read text, collect links, click, scroll.
//! All DOM work goes through `Page::evaluate` with JSON-serializable return
//! values; no stage touches CDP directly.

use std::time::Duration;

use chromiumoxide::Page;
use serde::de::DeserializeOwned;
use tokio::time::{sleep, timeout, Instant};
use tracing::debug;

use crate::error::DriverError;

/// How often selector waits re-check the DOM.
const POLL_INTERVAL: Duration = Duration::from_millis(500);

pub struct PageDriver {
    page: Page,
}

impl PageDriver {
    pub fn new(page: Page) -> Self {
        Self { page }
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    /// Navigate with a hard upper bound. A timeout abandons the navigation.
    pub async fn navigate(&self, url: &str, bound: Duration) -> Result<(), DriverError> {
        debug!("Navigating to {}", url);
        match timeout(bound, self.page.goto(url)).await {
            Ok(Ok(_)) => Ok(()),
            Ok(Err(source)) => Err(DriverError::Navigation {
                url: url.to_string(),
                source,
            }),
            Err(_) => Err(DriverError::NavigationTimeout {
                url: url.to_string(),
                timeout: bound,
            }),
        }
    }

    /// Wait for a selector to appear.
    ///
    /// `bound: None` waits indefinitely. This is the bot-challenge hook: the
    /// loop keeps polling until a human resolves the page or the process is
    /// killed. Evaluation errors during the wait are expected (the page may be
    /// mid-navigation) and do not end the wait.
    pub async fn wait_for_selector(
        &self,
        selector: &str,
        bound: Option<Duration>,
    ) -> Result<(), DriverError> {
        let js = format!("document.querySelector('{}') !== null", selector);
        let started = Instant::now();
        loop {
            match self.eval::<bool>(&js).await {
                Ok(true) => return Ok(()),
                Ok(false) => {}
                Err(e) => debug!("Selector poll failed (will retry): {}", e),
            }
            if let Some(bound) = bound {
                if started.elapsed() >= bound {
                    return Err(DriverError::WaitTimeout {
                        selector: selector.to_string(),
                    });
                }
            }
            sleep(POLL_INTERVAL).await;
        }
    }

    /// Visible text of the first element matching `selector`, if any.
    pub async fn inner_text(&self, selector: &str) -> Result<Option<String>, DriverError> {
        let js = format!(
            "(() => {{ const el = document.querySelector('{}'); return el ? el.innerText : null; }})()",
            selector
        );
        self.eval(&js).await
    }

    /// Visible text of the whole page body.
    pub async fn body_text(&self) -> Result<String, DriverError> {
        self.eval("(() => document.body ? document.body.innerText : '')()")
            .await
    }

    /// All anchor hrefs whose target contains `href_fragment`.
    pub async fn collect_link_hrefs(&self, href_fragment: &str) -> Result<Vec<String>, DriverError> {
        let js = format!(
            r#"(() => Array.from(document.querySelectorAll('a[href*="{}"]')).map(a => a.href))()"#,
            href_fragment
        );
        self.eval(&js).await
    }

    /// Click the first element matching `selector`. Returns false when no
    /// such element exists.
    pub async fn click_if_present(&self, selector: &str) -> Result<bool, DriverError> {
        let js = format!(
            "(() => {{ const el = document.querySelector('{}'); if (!el) return false; el.click(); return true; }})()",
            selector
        );
        self.eval(&js).await
    }

    /// Click the first button whose label matches one of `labels` exactly or
    /// as a prefix. Used for consent interstitials.
    pub async fn click_button_labeled(&self, labels: &[&str]) -> Result<bool, DriverError> {
        let labels_json = serde_json::to_string(labels)?;
        let js = format!(
            "(() => {{\n\
               const labels = {};\n\
               for (const b of document.querySelectorAll('button')) {{\n\
                 const t = (b.innerText || '').trim();\n\
                 if (labels.some(l => t === l || t.startsWith(l))) {{ b.click(); return true; }}\n\
               }}\n\
               return false;\n\
             }})()",
            labels_json
        );
        self.eval(&js).await
    }

    /// Scroll to the bottom of the page to force lazy-loaded content to
    /// render.
    pub async fn scroll_to_bottom(&self) -> Result<(), DriverError> {
        self.eval::<bool>(
            "(() => { window.scrollTo(0, document.body.scrollHeight); return true; })()",
        )
        .await?;
        Ok(())
    }

    async fn eval<T: DeserializeOwned>(&self, js: &str) -> Result<T, DriverError> {
        let result = self.page.evaluate(js.to_string()).await?;
        Ok(result.into_value()?)
    }
}

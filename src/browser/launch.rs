use anyhow::{Context, Result};
use chromiumoxide::{Browser, BrowserConfig, Page};
use futures::StreamExt;
use tokio::time::{sleep, Duration};
use tracing::{debug, error, info};

/// Launch a headful Chrome session for the run.
///
/// Headful on purpose: the operator must be able to see and solve a bot
/// challenge in the window. `AutomationControlled` is disabled so the search
/// engine is less likely to serve one in the first place.
pub async fn launch_browser() -> Result<(Browser, Page)> {
    info!("🚀 Launching Chrome...");

    let config = BrowserConfig::builder()
        .with_head()
        .args(vec![
            "--disable-blink-features=AutomationControlled",
            "--no-sandbox",
            "--disable-dev-shm-usage",
        ])
        .build()
        .map_err(|e| {
            error!("Browser configuration failed: {}", e);
            anyhow::anyhow!("browser configuration failed: {}", e)
        })?;

    let (browser, mut handler) = Browser::launch(config)
        .await
        .context("failed to launch Chrome")?;
    debug!("Browser launched");

    // Drain CDP events in the background for the lifetime of the session.
    tokio::spawn(async move {
        while let Some(h) = handler.next().await {
            if h.is_err() {
                break;
            }
        }
    });

    // Give the browser a moment to settle before opening the page.
    sleep(Duration::from_millis(300)).await;

    let page = browser
        .new_page("about:blank")
        .await
        .context("failed to open a page")?;

    info!("✅ Browser ready");

    Ok((browser, page))
}

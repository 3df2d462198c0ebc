//! Run orchestration.
//!
//! One run: health-check the extraction service, launch the browser, harvest
//! candidates, then process them strictly in harvest order, one at a time.
//! Per-candidate failures convert to skips; only setup failures are fatal.

use std::path::Path;

use anyhow::{Context, Result};
use chromiumoxide::Browser;
use tracing::{info, warn};

use crate::browser::{self, PageDriver};
use crate::clients::OllamaClient;
use crate::config::Config;
use crate::models::Lead;
use crate::pipeline::{
    aggregator, EnrichmentEngine, HeadcountResolver, LeadAggregator, PostingExtractor,
    SearchHarvester,
};
use crate::report::{LogReporter, StatusReporter};
use crate::utils::delay;

pub struct App {
    config: Config,
    browser: Browser,
    driver: PageDriver,
    llm: OllamaClient,
    reporter: LogReporter,
}

impl App {
    /// Set up the run's resources. Failures here are the only ones surfaced
    /// to the operator as fatal.
    pub async fn initialize(config: Config) -> Result<Self> {
        log_startup(&config);

        let llm = OllamaClient::new(&config);
        if !llm.health_check().await {
            anyhow::bail!(
                "Ollama is unreachable at {}, start it with `ollama serve`",
                config.ollama_base_url
            );
        }
        info!("🟢 Ollama ({}) connected", config.ollama_model);

        let (browser, page) = browser::launch_browser()
            .await
            .context("browser setup failed")?;

        Ok(Self {
            config,
            browser,
            driver: PageDriver::new(page),
            llm,
            reporter: LogReporter,
        })
    }

    /// Drive one full run to its terminal state. Always completes after
    /// exhausting harvested candidates, however many were skipped.
    pub async fn run(mut self) -> Result<()> {
        let query = self.config.search_query();
        self.reporter
            .status(&format!("Searching for: {}", self.config.role));

        let harvester = SearchHarvester::new(
            &self.driver,
            &self.reporter,
            &self.config.search_base_url,
            &self.config.platform_domain,
        );
        let candidates = harvester.harvest(&query, self.config.max_pages).await;

        let total = candidates.len();
        self.reporter.status(&format!(
            "Found {} unique companies, starting analysis...",
            total
        ));

        let extractor = PostingExtractor::new(&self.driver);
        let engine = EnrichmentEngine::new(&self.llm);
        let resolver = HeadcountResolver::new(&self.driver, &self.llm, &self.config.search_base_url);
        let mut leads = LeadAggregator::new(&self.reporter);

        for (idx, candidate) in candidates.iter().enumerate() {
            self.reporter.progress(idx + 1, total);
            self.reporter.status(&format!(
                "[{}/{}] Analyzing {}...",
                idx + 1,
                total,
                candidate.organization
            ));

            let content = match extractor.extract(candidate).await {
                Ok(content) => content,
                Err(e) => {
                    warn!("[{}/{}] Skipping {}: {}", idx + 1, total, candidate.organization, e);
                    continue;
                }
            };

            let enrichment = engine.analyze(&content.text).await;
            if !enrichment.valid {
                info!(
                    "[{}/{}] {} is not a genuine posting, dropped",
                    idx + 1,
                    total,
                    candidate.organization
                );
                continue;
            }

            self.reporter
                .status(&format!("Checking size of {}...", candidate.organization));
            let employee_count = resolver.resolve(&candidate.organization).await;

            leads.accept(Lead {
                organization: candidate.organization.clone(),
                url: candidate.url.clone(),
                tech_stack: enrichment.tech_stack,
                focus_summary: enrichment.focus_summary,
                employee_count,
            });

            // Pause between candidate visits, same reason as between pages.
            delay::humanize(1.0..2.5).await;
        }

        let accepted = leads.finalize();
        let path = aggregator::export_csv(&accepted, Path::new(&self.config.export_dir))
            .context("CSV export failed")?;
        self.reporter
            .summary(accepted.len(), &path.display().to_string());

        self.browser.close().await.ok();

        Ok(())
    }
}

fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 Lead harvester starting");
    info!("📋 Role: {} | Region: {} | Pages: {}", config.role, config.region, config.max_pages);
    info!("{}", "=".repeat(60));
}

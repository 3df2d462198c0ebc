//! Interactive display boundary.
//!
//! The pipeline publishes status lines, progress fractions, incremental table
//! snapshots and a final summary through this trait. Publishing is
//! fire-and-forget: no reporter outcome feeds back into the pipeline.

use tracing::{info, warn};

use crate::models::Lead;

pub trait StatusReporter {
    /// Free-text status line.
    fn status(&self, line: &str);

    /// Distinct pending state for the indefinite bot-challenge wait, so the
    /// operator knows intervention may be required.
    fn challenge_wait(&self) {
        self.status("Waiting for search results...");
    }

    /// Progress through the candidate list.
    fn progress(&self, done: usize, total: usize);

    /// Incremental view of accepted leads, sorted descending by headcount.
    fn table_snapshot(&self, leads: &[Lead]);

    /// Terminal state: total accepted leads and where the export landed.
    fn summary(&self, total: usize, export_path: &str);
}

/// Default reporter backed by tracing.
pub struct LogReporter;

impl StatusReporter for LogReporter {
    fn status(&self, line: &str) {
        info!("{}", line);
    }

    fn challenge_wait(&self) {
        warn!("⚠️ Waiting for search results. If a captcha appeared, solve it in the browser window");
    }

    fn progress(&self, done: usize, total: usize) {
        info!("📊 Progress: {}/{}", done, total);
    }

    fn table_snapshot(&self, leads: &[Lead]) {
        info!("📋 {} lead(s) so far:", leads.len());
        for lead in leads.iter().take(10) {
            info!(
                "  {:<24} {:>8} employees  {}",
                lead.organization,
                lead.employee_count,
                lead.tech_stack.join(", ")
            );
        }
    }

    fn summary(&self, total: usize, export_path: &str) {
        info!("✅ Run complete: {} leads, exported to {}", total, export_path);
    }
}

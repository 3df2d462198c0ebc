//! Lead aggregation and CSV export.
//!
//! Owns the run's result set. Each acceptance publishes a fresh sorted
//! snapshot to the display collaborator; export writes the same view to a
//! timestamped CSV.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::models::{Lead, PipelineRun};
use crate::report::StatusReporter;

pub struct LeadAggregator<'a> {
    run: PipelineRun,
    reporter: &'a dyn StatusReporter,
}

impl<'a> LeadAggregator<'a> {
    pub fn new(reporter: &'a dyn StatusReporter) -> Self {
        Self {
            run: PipelineRun::new(),
            reporter,
        }
    }

    /// Accept a lead and publish the updated sorted view. Publishing is
    /// fire-and-forget; the reporter cannot fail the pipeline.
    pub fn accept(&mut self, lead: Lead) {
        self.run.push(lead);
        self.reporter.table_snapshot(&self.run.sorted_view());
    }

    pub fn len(&self) -> usize {
        self.run.len()
    }

    pub fn is_empty(&self) -> bool {
        self.run.is_empty()
    }

    /// Current sorted view, descending by employee count.
    pub fn snapshot(&self) -> Vec<Lead> {
        self.run.sorted_view()
    }

    /// Final sorted result set; input to export.
    pub fn finalize(self) -> Vec<Lead> {
        self.run.sorted_view()
    }
}

/// Write leads to `leads_<timestamp>.csv` under `dir` and return the path.
pub fn export_csv(leads: &[Lead], dir: &Path) -> Result<PathBuf> {
    let timestamp = chrono::Local::now().format("%Y-%m-%d_%H-%M");
    let path = dir.join(format!("leads_{}.csv", timestamp));

    let mut writer = csv::Writer::from_path(&path)
        .with_context(|| format!("could not create {}", path.display()))?;
    writer.write_record(["organization", "url", "tech_stack", "focus", "employees"])?;
    for lead in leads {
        writer.write_record([
            lead.organization.as_str(),
            lead.url.as_str(),
            &lead.tech_stack.join(", "),
            lead.focus_summary.as_str(),
            &lead.employee_count.to_string(),
        ])?;
    }
    writer.flush()?;

    Ok(path)
}

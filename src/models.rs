//! Pipeline data types.

/// A (organization, URL) pair discovered by harvesting, not yet validated as
/// a real posting. Organization names are unique within a run, first-seen wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateLink {
    pub organization: String,
    pub url: String,
}

/// Raw posting text for one candidate. Transient: consumed by enrichment and
/// discarded. The text has already passed the minimum-length and login-wall
/// checks when this value exists.
#[derive(Debug, Clone)]
pub struct PostingContent {
    pub candidate: CandidateLink,
    pub text: String,
}

/// Structured summary of one posting.
///
/// `valid` is false when the service flagged the text as a login wall or
/// error page; such candidates are dropped, not retried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichmentResult {
    pub tech_stack: Vec<String>,
    pub focus_summary: String,
    pub valid: bool,
}

/// A fully enriched, accepted lead. Immutable once accepted; the sorted view
/// for display and export never mutates insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lead {
    pub organization: String,
    pub url: String,
    pub tech_stack: Vec<String>,
    pub focus_summary: String,
    pub employee_count: u64,
}

/// One run's result set. Constructed fresh per invocation so no state leaks
/// across runs; appended monotonically in acceptance order.
#[derive(Debug, Default)]
pub struct PipelineRun {
    leads: Vec<Lead>,
}

impl PipelineRun {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, lead: Lead) {
        self.leads.push(lead);
    }

    pub fn len(&self) -> usize {
        self.leads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.leads.is_empty()
    }

    /// Leads in acceptance order.
    pub fn leads(&self) -> &[Lead] {
        &self.leads
    }

    /// Presentation view: descending by employee count. The sort is stable,
    /// so ties keep acceptance order.
    pub fn sorted_view(&self) -> Vec<Lead> {
        let mut view = self.leads.clone();
        view.sort_by(|a, b| b.employee_count.cmp(&a.employee_count));
        view
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lead(organization: &str, employee_count: u64) -> Lead {
        Lead {
            organization: organization.to_string(),
            url: format!("https://{}.myworkdayjobs.com/job", organization.to_lowercase()),
            tech_stack: vec![],
            focus_summary: String::new(),
            employee_count,
        }
    }

    #[test]
    fn sorted_view_is_descending_by_employee_count() {
        let mut run = PipelineRun::new();
        run.push(lead("Acme", 50));
        run.push(lead("Globex", 5000));
        run.push(lead("Initech", 0));

        let counts: Vec<u64> = run.sorted_view().iter().map(|l| l.employee_count).collect();
        assert_eq!(counts, vec![5000, 50, 0]);
    }

    #[test]
    fn sorted_view_keeps_insertion_order_intact() {
        let mut run = PipelineRun::new();
        run.push(lead("Acme", 50));
        run.push(lead("Globex", 5000));

        let _ = run.sorted_view();
        let order: Vec<&str> = run.leads().iter().map(|l| l.organization.as_str()).collect();
        assert_eq!(order, vec!["Acme", "Globex"]);
    }

    #[test]
    fn ties_keep_acceptance_order() {
        let mut run = PipelineRun::new();
        run.push(lead("Acme", 100));
        run.push(lead("Globex", 100));

        let order: Vec<String> = run
            .sorted_view()
            .into_iter()
            .map(|l| l.organization)
            .collect();
        assert_eq!(order, vec!["Acme", "Globex"]);
    }
}

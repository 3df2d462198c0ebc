use std::time::Duration;

use thiserror::Error;

/// Browser-driver failures.
///
/// Always recoverable: call sites skip the current step or candidate, never
/// abort the run. Only `App::initialize` treats browser errors as fatal.
#[derive(Debug, Error)]
pub enum DriverError {
    #[error("navigation to {url} failed: {source}")]
    Navigation {
        url: String,
        #[source]
        source: chromiumoxide::error::CdpError,
    },
    #[error("navigation to {url} timed out after {timeout:?}")]
    NavigationTimeout { url: String, timeout: Duration },
    #[error("script evaluation failed: {0}")]
    Evaluation(#[from] chromiumoxide::error::CdpError),
    #[error("evaluation returned an unexpected shape: {0}")]
    ResultDecode(#[from] serde_json::Error),
    #[error("timed out waiting for selector {selector}")]
    WaitTimeout { selector: String },
}

/// Why a candidate's posting was rejected before enrichment.
///
/// The caller drops the candidate and moves on; there is no retry.
#[derive(Debug, Error)]
pub enum ExtractionFailed {
    #[error("could not load the posting page: {0}")]
    PageUnavailable(#[from] DriverError),
    #[error("posting text too short ({len} chars)")]
    TooShort { len: usize },
    #[error("posting hidden behind a login wall")]
    LoginWall,
}

/// The text-extraction service could not be reached.
///
/// Call sites degrade to a fixed placeholder (enrichment) or zero (headcount)
/// instead of propagating.
#[derive(Debug, Error)]
#[error("extraction service unreachable: {0}")]
pub struct ServiceUnavailable(#[from] pub reqwest::Error);

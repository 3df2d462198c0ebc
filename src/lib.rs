//! # Lead Harvester
//!
//! Browser-driven lead generation pipeline: harvest job-posting links from a
//! search engine, extract posting text, enrich it through a local LLM, and
//! publish a ranked, exportable lead table.
//!
//! Layering:
//!
//! - `browser/`: owns the Chrome session; exposes navigate/wait/read/click
//!   capabilities over CDP and knows nothing about leads.
//! - `clients/`: the Ollama text-extraction endpoint.
//! - `pipeline/`: the five pipeline stages (harvest, extract, enrich,
//!   headcount, aggregate), one candidate at a time.
//! - `parse`: the narrow natural-language response parsing seam.
//! - `app`: wires the stages together and drives a single run.

pub mod app;
pub mod browser;
pub mod clients;
pub mod config;
pub mod error;
pub mod models;
pub mod parse;
pub mod pipeline;
pub mod report;
pub mod utils;

pub use app::App;
pub use config::Config;
pub use error::{DriverError, ExtractionFailed, ServiceUnavailable};
pub use models::{CandidateLink, EnrichmentResult, Lead, PipelineRun, PostingContent};
pub use report::{LogReporter, StatusReporter};

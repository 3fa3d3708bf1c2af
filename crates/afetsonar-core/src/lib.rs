//! Synthetic damage classification and reporting engine
//!
//! This crate powers the AfetSonar browser demo: it generates a
//! pseudo-random population of labeled damage regions for an image,
//! reduces the population to an overall severity verdict, and renders
//! a narrative response plan — either computed from the live tally or
//! one of four pre-authored demo scenarios.
//!
//! There is deliberately no image analysis here. The canvas dimensions
//! and a random source are the only inputs; the UI layers (canvas
//! drawing, file pickers, image decoding) are external collaborators.

pub mod error;
pub mod region;
pub mod report;
pub mod sampler;
pub mod scenario;
pub mod session;
pub mod verdict;

pub use error::TriageError;
pub use region::{Batch, Region, Severity, Tally};
pub use report::{Report, ReportSource};
pub use sampler::sample_batch;
pub use scenario::{render_canned, Scenario, ScenarioId};
pub use session::AnalysisSession;
pub use verdict::overall_severity;

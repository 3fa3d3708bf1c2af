//! Computed report rendering
//!
//! Three fixed assessment templates keyed by verdict, with the live
//! tally interpolated into the header. There is no logic here beyond
//! the verdict switch; the prose is static data.

use serde::Serialize;

use crate::region::{Severity, Tally};
use crate::scenario::ScenarioId;

/// Assessment prose per verdict.
const SEVERE_ASSESSMENT: &str = "The region shows widespread severe destruction. Multiple rescue teams, aerial support, and reinforced logistics are required.";
const MODERATE_ASSESSMENT: &str =
    "The area shows partial structural damage. A phased and localized intervention is recommended.";
const MINOR_ASSESSMENT: &str = "The area consists mostly of lightly damaged or intact buildings. Priority is reconnaissance, safety checks, and infrastructure control.";

/// Where a report's text came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ReportSource {
    /// Derived from a live tally.
    Computed { verdict: Severity },
    /// One of the fixed demo scenarios; unrelated to any live tally.
    Canned { scenario: ScenarioId },
}

/// A narrative response plan ready for the plan panel.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub source: ReportSource,
    pub html: String,
}

impl Report {
    pub fn is_canned(&self) -> bool {
        matches!(self.source, ReportSource::Canned { .. })
    }
}

fn assessment(verdict: Severity) -> &'static str {
    match verdict {
        Severity::Severe => SEVERE_ASSESSMENT,
        Severity::Moderate => MODERATE_ASSESSMENT,
        Severity::Minor => MINOR_ASSESSMENT,
    }
}

/// Render the automatic tally-based report.
pub fn render_computed(tally: &Tally, verdict: Severity) -> Report {
    let html = format!(
        "<strong>Automatic Damage Summary (Simulation)</strong><br><br>\n\
         Estimated structure count: <strong>{total}</strong><br>\n\
         Severe (red): <strong>{severe}</strong><br>\n\
         Moderate (yellow): <strong>{moderate}</strong><br>\n\
         Minor/Intact (green): <strong>{minor}</strong><br><br>\n\
         <strong>General Assessment:</strong><br>\n\
         {assessment}",
        total = tally.total(),
        severe = tally.severe,
        moderate = tally.moderate,
        minor = tally.minor,
        assessment = assessment(verdict),
    );

    Report {
        source: ReportSource::Computed { verdict },
        html,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_interpolates_counts_and_sum() {
        let report = render_computed(&Tally::new(12, 20, 30), Severity::Severe);
        assert!(report.html.contains("<strong>62</strong>"));
        assert!(report.html.contains("Severe (red): <strong>12</strong>"));
        assert!(report.html.contains("Moderate (yellow): <strong>20</strong>"));
        assert!(report.html.contains("Minor/Intact (green): <strong>30</strong>"));
    }

    #[test]
    fn test_template_follows_verdict() {
        let tally = Tally::new(1, 2, 3);
        let severe = render_computed(&tally, Severity::Severe);
        let moderate = render_computed(&tally, Severity::Moderate);
        let minor = render_computed(&tally, Severity::Minor);
        assert!(severe.html.contains("widespread severe destruction"));
        assert!(moderate.html.contains("phased and localized intervention"));
        assert!(minor.html.contains("reconnaissance, safety checks"));
    }

    #[test]
    fn test_computed_report_is_not_canned() {
        let report = render_computed(&Tally::default(), Severity::Minor);
        assert!(!report.is_canned());
    }
}

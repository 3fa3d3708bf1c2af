//! Core data model: regions, tallies and batches

use serde::{Deserialize, Serialize};

/// Damage severity, used both as the per-region label and as the
/// overall verdict of a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Severe,
    Moderate,
    Minor,
}

/// One labeled rectangle representing a single "structure" in the
/// simulated damage overlay. Coordinates are canvas pixels.
///
/// Invariant: the rectangle lies fully on the drawing surface
/// (`x >= 0`, `y >= 0`, `x + w <= canvas_width`, `y + h <= canvas_height`).
#[derive(Debug, Clone, Serialize)]
pub struct Region {
    /// Unique within its batch, assigned densely from 1 in generation order.
    pub id: u32,
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
    pub severity: Severity,
}

/// Per-severity region counts for one batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Tally {
    pub severe: u32,
    pub moderate: u32,
    pub minor: u32,
}

impl Tally {
    pub fn new(severe: u32, moderate: u32, minor: u32) -> Self {
        Self {
            severe,
            moderate,
            minor,
        }
    }

    pub fn record(&mut self, severity: Severity) {
        match severity {
            Severity::Severe => self.severe += 1,
            Severity::Moderate => self.moderate += 1,
            Severity::Minor => self.minor += 1,
        }
    }

    pub fn total(&self) -> u32 {
        self.severe + self.moderate + self.minor
    }
}

/// The full output of one sampling run: the regions in generation
/// order plus the derived tally and overall verdict.
///
/// A batch is immutable once built. The session discards and replaces
/// it wholesale on each analysis run; there is no incremental update.
#[derive(Debug, Clone, Serialize)]
pub struct Batch {
    regions: Vec<Region>,
    tally: Tally,
    verdict: Severity,
}

impl Batch {
    pub fn from_regions(regions: Vec<Region>) -> Self {
        let mut tally = Tally::default();
        for region in &regions {
            tally.record(region.severity);
        }
        let verdict = crate::verdict::overall_severity(&tally);
        Self {
            regions,
            tally,
            verdict,
        }
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn tally(&self) -> &Tally {
        &self.tally
    }

    pub fn verdict(&self) -> Severity {
        self.verdict
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

//! Analysis session
//!
//! Explicit state object for one page session, replacing ambient
//! globals: the current batch, the current report and the canned-mode
//! flag live here and are overwritten wholesale by each UI intent.
//! Single-threaded by design; every operation runs to completion
//! before the next event fires.

use rand::Rng;

use crate::error::TriageError;
use crate::region::Batch;
use crate::report::{render_computed, Report};
use crate::sampler::sample_batch;
use crate::scenario::{render_canned, ScenarioId};

/// Engine state for one page session.
#[derive(Debug, Default)]
pub struct AnalysisSession {
    image_loaded: bool,
    canned: Option<ScenarioId>,
    batch: Option<Batch>,
    report: Option<Report>,
}

impl AnalysisSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// A fresh user image finished decoding. Canned mode switches off
    /// and any stale batch or report is discarded.
    pub fn load_user_image(&mut self) {
        self.image_loaded = true;
        self.canned = None;
        self.batch = None;
        self.report = None;
    }

    /// A demo scenario was chosen. Canned mode switches on and the
    /// canned report is set immediately; the demo's image pair counts
    /// as a loaded image.
    pub fn select_scenario(&mut self, id: u8) -> Result<(), TriageError> {
        let id = ScenarioId::new(id)?;
        self.image_loaded = true;
        self.canned = Some(id);
        self.batch = None;
        self.report = Some(render_canned(id));
        Ok(())
    }

    /// Run one analysis pass over the current image.
    ///
    /// In computed mode this discards the previous batch, samples a
    /// fresh one, aggregates it and renders the tally-based report. In
    /// canned mode the pre-authored report stays untouched and the
    /// sampler is not invoked for it.
    ///
    /// Errors with [`TriageError::NoImageLoaded`] when no image has
    /// been loaded yet; this is the only user-facing failure.
    pub fn run_analysis<R: Rng>(
        &mut self,
        canvas_width: f64,
        canvas_height: f64,
        rng: &mut R,
    ) -> Result<&Report, TriageError> {
        if !self.image_loaded {
            return Err(TriageError::NoImageLoaded);
        }

        let report = match self.canned {
            None => {
                let batch = sample_batch(canvas_width, canvas_height, rng);
                let report = render_computed(batch.tally(), batch.verdict());
                self.batch = Some(batch);
                self.report.insert(report)
            }
            // select_scenario already set the canned report; leave it as is.
            Some(id) => self.report.get_or_insert_with(|| render_canned(id)),
        };

        Ok(report)
    }

    pub fn image_loaded(&self) -> bool {
        self.image_loaded
    }

    pub fn canned_mode(&self) -> bool {
        self.canned.is_some()
    }

    pub fn active_scenario(&self) -> Option<ScenarioId> {
        self.canned
    }

    pub fn batch(&self) -> Option<&Batch> {
        self.batch.as_ref()
    }

    pub fn report(&self) -> Option<&Report> {
        self.report.as_ref()
    }
}

//! Stateful demo session
//!
//! JS-facing wrapper around the engine's `AnalysisSession`. The page
//! calls in on discrete intents (image decoded, demo chosen, analyze
//! clicked); all state and the random source live in Rust.

use afetsonar_core::AnalysisSession;
use rand::rngs::StdRng;
use rand::SeedableRng;
use wasm_bindgen::prelude::*;
use web_sys::CanvasRenderingContext2d;

use crate::overlay;

/// Engine session plus its random source, held for the page lifetime.
#[wasm_bindgen]
pub struct AfetSession {
    inner: AnalysisSession,
    rng: StdRng,
}

#[wasm_bindgen]
impl AfetSession {
    /// Create a new session with an entropy-seeded sampler
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            inner: AnalysisSession::new(),
            rng: StdRng::from_entropy(),
        }
    }

    /// Create a session with a fixed seed, for reproducible runs
    #[wasm_bindgen(js_name = withSeed)]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            inner: AnalysisSession::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Notify the session that a fresh user image finished decoding.
    /// Leaves canned mode and discards any stale batch and report.
    #[wasm_bindgen(js_name = userImageLoaded)]
    pub fn user_image_loaded(&mut self) {
        self.inner.load_user_image();
    }

    /// Internal method to switch scenarios (testable without JsValue)
    fn load_scenario_internal(&mut self, id: u8) -> Result<String, String> {
        self.inner
            .select_scenario(id)
            .map_err(|e| e.to_string())?;

        // select_scenario sets the canned report before returning Ok.
        Ok(self.report_html().unwrap_or_default())
    }

    /// Switch to a demo scenario (1-4) and return its canned plan HTML
    #[wasm_bindgen(js_name = loadScenario)]
    pub fn load_scenario(&mut self, id: u8) -> Result<String, JsValue> {
        self.load_scenario_internal(id)
            .map_err(|e| JsValue::from_str(&e))
    }

    /// Run one analysis pass and paint the overlay.
    ///
    /// The caller draws the decoded image onto the canvas first; this
    /// method runs the engine against the canvas dimensions, draws the
    /// resulting batch (if any) on top, and returns the plan HTML.
    /// Fails with a user-facing message when no image is loaded.
    #[wasm_bindgen]
    pub fn analyze(
        &mut self,
        ctx: &CanvasRenderingContext2d,
        canvas_width: f64,
        canvas_height: f64,
    ) -> Result<String, JsValue> {
        let html = self
            .inner
            .run_analysis(canvas_width, canvas_height, &mut self.rng)
            .map_err(|e| JsValue::from_str(&e.to_string()))?
            .html
            .clone();

        if let Some(batch) = self.inner.batch() {
            overlay::draw_batch(ctx, batch)?;
        }

        Ok(html)
    }

    /// Current plan HTML, if any analysis or scenario produced one
    #[wasm_bindgen(js_name = reportHtml)]
    pub fn report_html(&self) -> Option<String> {
        self.inner.report().map(|r| r.html.clone())
    }

    /// Whether a canned demo plan is active
    #[wasm_bindgen(js_name = cannedMode)]
    pub fn canned_mode(&self) -> bool {
        self.inner.canned_mode()
    }

    /// Number of regions in the current batch (0 when none)
    #[wasm_bindgen(js_name = regionCount)]
    pub fn region_count(&self) -> u32 {
        self.inner.batch().map(|b| b.len() as u32).unwrap_or(0)
    }

    /// Per-severity counts of the current batch, or null when none
    #[wasm_bindgen]
    pub fn tally(&self) -> Result<JsValue, JsValue> {
        match self.inner.batch() {
            Some(batch) => serde_wasm_bindgen::to_value(batch.tally())
                .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e))),
            None => Ok(JsValue::NULL),
        }
    }
}

impl Default for AfetSession {
    fn default() -> Self {
        Self::new()
    }
}

//! WASM bindings for the AfetSonar damage-triage demo
//!
//! This module provides a stateful, session-based API for the demo.
//! All engine state is held in Rust; JavaScript only handles DOM
//! events, file reading and image decoding.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { AfetSession, demoImagePair } from './pkg/afetsonar_wasm.js';
//!
//! await init();
//!
//! const session = new AfetSession();
//!
//! // User upload: notify the session only after the image decoded,
//! // then run an analysis pass against the canvas.
//! img.onload = () => {
//!   session.userImageLoaded();
//!   ctx.drawImage(img, 0, 0, canvas.width, canvas.height);
//!   planElement.innerHTML = session.analyze(ctx, canvas.width, canvas.height);
//! };
//!
//! // Demo scenario: the canned plan is available immediately.
//! planElement.innerHTML = session.loadScenario(3);
//! const { before, after } = demoImagePair(3);
//! ```

pub mod demo_images;
pub mod overlay;
pub mod session;

use wasm_bindgen::prelude::*;

// Re-export main types for JavaScript
pub use session::AfetSession;

/// Initialize the WASM module
/// Called automatically by wasm-bindgen
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    web_sys::console::log_1(&"AfetSonar WASM initialized".into());
}

/// Get the library version
#[wasm_bindgen]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Get the before/after asset paths for a demo image pair (1-4)
#[wasm_bindgen(js_name = demoImagePair)]
pub fn demo_image_pair(id: u8) -> Result<JsValue, JsValue> {
    let pair = demo_images::demo_image_pair(id)
        .ok_or_else(|| JsValue::from_str(&format!("Unknown demo image pair: {}", id)))?;

    serde_wasm_bindgen::to_value(&pair)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_version() {
        let version = get_version();
        assert!(!version.is_empty());
    }
}

//! Fixed demo image pairs
//!
//! Four before/after satellite image pairs ship with the demo, indexed
//! by the same ids as the canned scenarios. Decoding happens in the
//! host page; this module only owns the path table.

use serde::Serialize;

/// Number of bundled demo pairs.
pub const DEMO_IMAGE_COUNT: u8 = 4;

/// Asset paths for one before/after pair, relative to the site root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DemoImagePair {
    pub before: String,
    pub after: String,
}

/// Look up the path pair for a demo id (1-4).
pub fn demo_image_pair(id: u8) -> Option<DemoImagePair> {
    if !(1..=DEMO_IMAGE_COUNT).contains(&id) {
        return None;
    }
    Some(DemoImagePair {
        before: format!("assets/oncesi-{}.jpg", id),
        after: format!("assets/sonrasi-{}.jpg", id),
    })
}

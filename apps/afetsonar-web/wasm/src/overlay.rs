//! Canvas overlay drawing
//!
//! Paints a batch of damage regions on top of the result canvas: a
//! translucent filled rectangle per region, color-keyed by severity,
//! plus a small numbered badge at the region's top-left corner. No
//! classification logic lives here; the batch is consumed as-is.

use afetsonar_core::{Batch, Region, Severity};
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

const STROKE_WIDTH: f64 = 3.0;

const BADGE_WIDTH: f64 = 24.0;
const BADGE_HEIGHT: f64 = 18.0;
const BADGE_INSET: f64 = 4.0;
const BADGE_FILL: &str = "rgba(0,0,0,0.85)";
const BADGE_TEXT_FILL: &str = "#fff";
const BADGE_FONT: &str = "11px Poppins, system-ui";

/// Translucent fill color for a severity.
pub fn severity_fill(severity: Severity) -> &'static str {
    match severity {
        Severity::Severe => "rgba(255,0,0,0.18)",
        Severity::Moderate => "rgba(255,215,0,0.18)",
        Severity::Minor => "rgba(0,255,0,0.18)",
    }
}

/// Opaque stroke color for a severity.
pub fn severity_stroke(severity: Severity) -> &'static str {
    match severity {
        Severity::Severe => "rgba(255,0,0,1)",
        Severity::Moderate => "rgba(255,215,0,1)",
        Severity::Minor => "rgba(0,255,0,1)",
    }
}

/// Top-left corner of a region's numbered badge.
pub fn badge_anchor(region: &Region) -> (f64, f64) {
    (region.x + BADGE_INSET, region.y + BADGE_INSET)
}

/// Draw every region of a batch onto the 2d context.
pub fn draw_batch(ctx: &CanvasRenderingContext2d, batch: &Batch) -> Result<(), JsValue> {
    for region in batch.regions() {
        draw_region(ctx, region)?;
    }
    Ok(())
}

fn draw_region(ctx: &CanvasRenderingContext2d, region: &Region) -> Result<(), JsValue> {
    ctx.save();

    ctx.set_fill_style_str(severity_fill(region.severity));
    ctx.fill_rect(region.x, region.y, region.w, region.h);

    ctx.set_line_width(STROKE_WIDTH);
    ctx.set_stroke_style_str(severity_stroke(region.severity));
    ctx.stroke_rect(region.x, region.y, region.w, region.h);

    let (badge_x, badge_y) = badge_anchor(region);
    ctx.set_fill_style_str(BADGE_FILL);
    ctx.fill_rect(badge_x, badge_y, BADGE_WIDTH, BADGE_HEIGHT);

    ctx.set_fill_style_str(BADGE_TEXT_FILL);
    ctx.set_font(BADGE_FONT);
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    ctx.fill_text(
        &region.id.to_string(),
        badge_x + BADGE_WIDTH / 2.0,
        badge_y + BADGE_HEIGHT / 2.0,
    )?;

    ctx.restore();
    Ok(())
}

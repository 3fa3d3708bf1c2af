//! Synthetic region sampling
//!
//! This is the "detector" of the demo: a pseudo-random population of
//! labeled rectangles with a fixed severity distribution. It performs
//! no image analysis — the supplied canvas dimensions are the only
//! input besides the random source.

use rand::Rng;

use crate::region::{Batch, Region, Severity};

/// Inset kept between every region and the canvas edge, in pixels.
pub const CANVAS_INSET: f64 = 5.0;

/// Region count is drawn uniformly from `[MIN_REGIONS, MIN_REGIONS + REGION_SPREAD - 1]`.
const MIN_REGIONS: u32 = 55;
const REGION_SPREAD: u32 = 15;

/// Region sides are drawn uniformly from `[SIDE_MIN, SIDE_MAX)`.
const SIDE_MIN: f64 = 35.0;
const SIDE_MAX: f64 = 115.0;

/// Severity split: 25% severe, 30% moderate, 45% minor.
const SEVERE_CUTOFF: f64 = 0.25;
const MODERATE_CUTOFF: f64 = 0.55;

/// Sample a fresh batch of labeled regions for a canvas of the given size.
///
/// Pure with respect to `rng`: a seeded generator reproduces the same
/// batch, and repeated calls are independent runs. Every returned
/// region lies fully inside the canvas bounds, including on canvases
/// too small to honor the inset.
pub fn sample_batch<R: Rng>(canvas_width: f64, canvas_height: f64, rng: &mut R) -> Batch {
    let count = MIN_REGIONS + rng.gen_range(0..REGION_SPREAD);

    let mut regions = Vec::with_capacity(count as usize);
    for id in 1..=count {
        let severity = sample_severity(rng);
        let (x, w) = place_axis(canvas_width, rng);
        let (y, h) = place_axis(canvas_height, rng);
        regions.push(Region {
            id,
            x,
            y,
            w,
            h,
            severity,
        });
    }

    Batch::from_regions(regions)
}

fn sample_severity<R: Rng>(rng: &mut R) -> Severity {
    let r: f64 = rng.gen();
    if r < SEVERE_CUTOFF {
        Severity::Severe
    } else if r < MODERATE_CUTOFF {
        Severity::Moderate
    } else {
        Severity::Minor
    }
}

/// Draw one side length and offset along a single axis.
///
/// The side is clamped to the span available inside the inset, and the
/// offset range collapses instead of going negative when the canvas is
/// too small, so `offset >= 0` and `offset + side <= extent` hold for
/// any `extent >= 0`.
fn place_axis<R: Rng>(extent: f64, rng: &mut R) -> (f64, f64) {
    let side = rng.gen_range(SIDE_MIN..SIDE_MAX);
    let side = side.min((extent - 2.0 * CANVAS_INSET).max(0.0));

    let span = extent - side - 2.0 * CANVAS_INSET;
    let offset = if span > 0.0 {
        CANVAS_INSET + rng.gen::<f64>() * span
    } else {
        CANVAS_INSET.min((extent - side).max(0.0))
    };

    (offset, side)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn assert_in_bounds(batch: &Batch, width: f64, height: f64) {
        for region in batch.regions() {
            assert!(region.x >= 0.0, "x out of bounds: {:?}", region);
            assert!(region.y >= 0.0, "y out of bounds: {:?}", region);
            assert!(
                region.x + region.w <= width,
                "right edge out of bounds: {:?}",
                region
            );
            assert!(
                region.y + region.h <= height,
                "bottom edge out of bounds: {:?}",
                region
            );
        }
    }

    #[test]
    fn test_count_within_advertised_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let batch = sample_batch(900.0, 620.0, &mut rng);
            assert!((55..=69).contains(&(batch.len() as u32)));
        }
    }

    #[test]
    fn test_ids_dense_from_one() {
        let mut rng = StdRng::seed_from_u64(11);
        let batch = sample_batch(900.0, 620.0, &mut rng);
        for (i, region) in batch.regions().iter().enumerate() {
            assert_eq!(region.id, i as u32 + 1);
        }
    }

    #[test]
    fn test_tally_sums_to_region_count() {
        let mut rng = StdRng::seed_from_u64(23);
        let batch = sample_batch(900.0, 620.0, &mut rng);
        assert_eq!(batch.tally().total() as usize, batch.len());
    }

    #[test]
    fn test_seeded_sampling_is_reproducible() {
        let a = sample_batch(900.0, 620.0, &mut StdRng::seed_from_u64(42));
        let b = sample_batch(900.0, 620.0, &mut StdRng::seed_from_u64(42));
        assert_eq!(a.len(), b.len());
        for (ra, rb) in a.regions().iter().zip(b.regions()) {
            assert_eq!(ra.id, rb.id);
            assert_eq!(ra.x, rb.x);
            assert_eq!(ra.y, rb.y);
            assert_eq!(ra.w, rb.w);
            assert_eq!(ra.h, rb.h);
            assert_eq!(ra.severity, rb.severity);
        }
    }

    #[test]
    fn test_degenerate_canvas_clamps_instead_of_panicking() {
        let mut rng = StdRng::seed_from_u64(3);
        // Narrower than a minimum region side, narrower than the inset,
        // and fully zero-sized.
        for (w, h) in [(20.0, 620.0), (900.0, 8.0), (4.0, 4.0), (0.0, 0.0)] {
            let batch = sample_batch(w, h, &mut rng);
            assert_in_bounds(&batch, w, h);
        }
    }

    proptest! {
        /// Property: for any seed and reasonable canvas, every region is
        /// fully inside the canvas and the count is in [55, 69].
        #[test]
        fn sampled_batch_respects_bounds(
            seed in any::<u64>(),
            width in 1.0f64..2000.0,
            height in 1.0f64..2000.0,
        ) {
            let mut rng = StdRng::seed_from_u64(seed);
            let batch = sample_batch(width, height, &mut rng);
            prop_assert!((55..=69).contains(&(batch.len() as u32)));
            for region in batch.regions() {
                prop_assert!(region.x >= 0.0);
                prop_assert!(region.y >= 0.0);
                prop_assert!(region.x + region.w <= width);
                prop_assert!(region.y + region.h <= height);
            }
        }

        /// Property: the tally always sums to the region count.
        #[test]
        fn tally_matches_count(seed in any::<u64>()) {
            let mut rng = StdRng::seed_from_u64(seed);
            let batch = sample_batch(900.0, 620.0, &mut rng);
            prop_assert_eq!(batch.tally().total() as usize, batch.len());
        }
    }
}

//! Overall severity verdict for a batch tally

use crate::region::{Severity, Tally};

/// Region counts at or above which a batch is classified severe.
const SEVERE_COUNT_THRESHOLD: u32 = 15;
const SEVERE_COMBINED_THRESHOLD: u32 = 30;
/// Combined severe + moderate count at or above which a batch is moderate.
const MODERATE_COMBINED_THRESHOLD: u32 = 18;

/// Reduce a tally to a single overall verdict.
///
/// Rules are checked in order and the first match wins: the severe
/// rule is evaluated before the moderate rule, so a tally of
/// `severe=16, moderate=0` is severe even though the combined count
/// alone would not reach the moderate threshold. Total over all
/// inputs; never fails.
pub fn overall_severity(tally: &Tally) -> Severity {
    let damaged = tally.severe + tally.moderate;

    if tally.severe >= SEVERE_COUNT_THRESHOLD || damaged >= SEVERE_COMBINED_THRESHOLD {
        Severity::Severe
    } else if damaged >= MODERATE_COMBINED_THRESHOLD {
        Severity::Moderate
    } else {
        Severity::Minor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn test_severe_count_boundary() {
        assert_eq!(
            overall_severity(&Tally::new(15, 0, 40)),
            Severity::Severe
        );
        assert_eq!(overall_severity(&Tally::new(14, 0, 40)), Severity::Minor);
    }

    #[test]
    fn test_combined_severe_boundary_with_zero_severe() {
        assert_eq!(overall_severity(&Tally::new(0, 30, 0)), Severity::Severe);
        assert_eq!(
            overall_severity(&Tally::new(0, 29, 0)),
            Severity::Moderate
        );
    }

    #[test]
    fn test_moderate_boundary() {
        assert_eq!(
            overall_severity(&Tally::new(5, 13, 37)),
            Severity::Moderate
        );
    }

    #[test]
    fn test_just_under_moderate_is_minor() {
        assert_eq!(overall_severity(&Tally::new(5, 12, 38)), Severity::Minor);
    }

    #[test]
    fn test_severe_rule_checked_before_moderate() {
        // severe=16 alone satisfies only rule 1, not the sum rules
        assert_eq!(overall_severity(&Tally::new(16, 0, 0)), Severity::Severe);
        // sum=19 lands in the moderate band even with severe present
        assert_eq!(
            overall_severity(&Tally::new(5, 14, 0)),
            Severity::Moderate
        );
    }

    proptest! {
        /// Property: the verdict is total — every tally maps to exactly
        /// one of the three severities without panicking.
        #[test]
        fn verdict_is_total(severe in 0u32..200, moderate in 0u32..200, minor in 0u32..200) {
            let verdict = overall_severity(&Tally::new(severe, moderate, minor));
            prop_assert!(matches!(
                verdict,
                Severity::Severe | Severity::Moderate | Severity::Minor
            ));
        }

        /// Property: adding severe regions never lowers the verdict below severe
        /// once the severe threshold is reached.
        #[test]
        fn severe_threshold_dominates(severe in 15u32..200, moderate in 0u32..200, minor in 0u32..200) {
            prop_assert_eq!(
                overall_severity(&Tally::new(severe, moderate, minor)),
                Severity::Severe
            );
        }
    }
}

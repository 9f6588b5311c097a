//! Range Expander
//!
//! Expands a parsed descriptor into per-level cost results using the growth
//! formula `base_cost * multiplier^level`, rounded to the nearest integer.

use serde::{Deserialize, Serialize};

use crate::parser::{self, FormulaDescriptor};

// ============================================================================
// Level result
// ============================================================================

/// A single computed `(level, answer)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelResult {
    /// The integer exponent step.
    pub level: u32,
    /// Rounded value of the formula at this level.
    pub answer: i64,
}

// ============================================================================
// Expansion
// ============================================================================

/// Unrounded formula value at one level.
///
/// The level is always an integer exponent, so this is well-defined for any
/// finite base and multiplier.
#[inline]
fn raw_value(base_cost: f64, multiplier: f64, level: u32) -> f64 {
    base_cost * multiplier.powi(level as i32)
}

/// Expand one descriptor into its per-level results.
///
/// Levels run from `min_level` to `max_level` inclusive, ascending. Each
/// value is rounded half away from zero (`f64::round`), which matches
/// conventional rounding on the non-negative domain these formulas live in.
/// A descriptor with `min_level > max_level` expands to an empty vector;
/// that is not an error.
///
/// There is no overflow bound: a large enough level/multiplier combination
/// saturates the integer answer, which is accepted as an inherent property
/// of unbounded exponential growth.
///
/// # Arguments
/// * `base_cost` - Scalar multiplied into every level's value
/// * `descriptor` - The parsed level range and growth base
///
/// # Returns
/// Results in ascending level order
pub fn expand(base_cost: f64, descriptor: &FormulaDescriptor) -> Vec<LevelResult> {
    if descriptor.min_level > descriptor.max_level {
        return Vec::new();
    }

    (descriptor.min_level..=descriptor.max_level)
        .map(|level| LevelResult {
            level,
            answer: raw_value(base_cost, descriptor.multiplier, level).round() as i64,
        })
        .collect()
}

/// Parse `text` and expand every descriptor found in it.
///
/// Descriptors are expanded in the order they appear in the text and their
/// results concatenated, so the output preserves descriptor encounter order
/// first and ascending level order within each descriptor.
pub fn evaluate(base_cost: f64, text: &str) -> Vec<LevelResult> {
    parser::parse(text)
        .iter()
        .flat_map(|descriptor| expand(base_cost, descriptor))
        .collect()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use test_case::test_case;

    fn descriptor(min_level: u32, max_level: u32, multiplier: f64) -> FormulaDescriptor {
        FormulaDescriptor {
            min_level,
            max_level,
            multiplier,
        }
    }

    #[test]
    fn test_raw_value_growth() {
        assert_relative_eq!(raw_value(1000.0, 1.5, 1), 1500.0);
        assert_relative_eq!(raw_value(1000.0, 1.5, 3), 3375.0);
        assert_relative_eq!(raw_value(500.0, 1.1, 5), 805.255, max_relative = 1e-9);
    }

    #[test]
    fn test_raw_value_level_zero_is_base() {
        // multiplier^0 == 1 for any multiplier
        assert_relative_eq!(raw_value(1000.0, 2.0, 0), 1000.0);
        assert_relative_eq!(raw_value(250.0, 9.9, 0), 250.0);
    }

    #[test]
    fn test_expand_count_and_levels() {
        let results = expand(1000.0, &descriptor(3, 7, 1.5));
        assert_eq!(results.len(), 5);
        let levels: Vec<u32> = results.iter().map(|r| r.level).collect();
        assert_eq!(levels, vec![3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_expand_inverted_range_is_empty() {
        assert!(expand(1000.0, &descriptor(5, 2, 1.5)).is_empty());
    }

    #[test]
    fn test_expand_single_level_range() {
        let results = expand(1000.0, &descriptor(0, 0, 2.0));
        assert_eq!(
            results,
            vec![LevelResult {
                level: 0,
                answer: 1000,
            }]
        );
    }

    // 500 * 1.1^5 = 805.255 -> 805, 500 * 1.1^6 = 885.78 -> 886
    #[test_case(5, 805 ; "rounds down below half")]
    #[test_case(6, 886 ; "rounds up above half")]
    fn test_expand_rounding(level: u32, expected: i64) {
        let results = expand(500.0, &descriptor(level, level, 1.1));
        assert_eq!(results[0].answer, expected);
    }

    #[test]
    fn test_evaluate_scenario_growth() {
        let results = evaluate(1000.0, "1;3;1.5");
        let answers: Vec<i64> = results.iter().map(|r| r.answer).collect();
        assert_eq!(answers, vec![1500, 2250, 3375]);
    }

    #[test]
    fn test_evaluate_no_descriptors() {
        assert!(evaluate(1000.0, "not a formula").is_empty());
    }

    #[test]
    fn test_evaluate_preserves_descriptor_order() {
        let results = evaluate(500.0, "1;2;1.5\n5;6;1.1");
        let pairs: Vec<(u32, i64)> = results.iter().map(|r| (r.level, r.answer)).collect();
        assert_eq!(pairs, vec![(1, 750), (2, 1125), (5, 805), (6, 886)]);
    }

    #[test]
    fn test_evaluate_nan_base_propagates() {
        // A NaN base flows through the arithmetic; the cast pins it to 0.
        let results = evaluate(f64::NAN, "1;1;1.5");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].answer, 0);
    }

    #[test]
    fn test_expand_huge_growth_saturates() {
        let results = expand(1000.0, &descriptor(500, 500, 10.0));
        assert_eq!(results[0].answer, i64::MAX);
    }
}

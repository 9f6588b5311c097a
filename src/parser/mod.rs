//! Descriptor Parser
//!
//! Extracts formula descriptors from free-form text. A descriptor is a
//! `minLevel;maxLevel;multiplier` triple where the multiplier must carry a
//! fractional part (`1.5` matches, `1` does not). All other text around and
//! between descriptors is ignored.

use log::debug;
use regex::Regex;

// ============================================================================
// Constants
// ============================================================================

/// Pattern for one descriptor: two integers and a decimal with a mandatory
/// fractional part, separated by literal semicolons. Not anchored to line
/// boundaries; matches are taken non-overlapping, left to right.
const DESCRIPTOR_PATTERN: &str = r"(\d+);(\d+);(\d+\.\d+)";

// ============================================================================
// Descriptor
// ============================================================================

/// A parsed `(min_level, max_level, multiplier)` triple.
///
/// No ordering invariant is enforced between the levels; a descriptor with
/// `min_level > max_level` simply expands to an empty range.
#[derive(Debug, Clone, PartialEq)]
pub struct FormulaDescriptor {
    /// First level of the range (inclusive).
    pub min_level: u32,
    /// Last level of the range (inclusive).
    pub max_level: u32,
    /// Growth base applied once per level.
    pub multiplier: f64,
}

// ============================================================================
// Parser
// ============================================================================

/// Reusable descriptor parser holding the compiled pattern.
#[derive(Debug, Clone)]
pub struct DescriptorParser {
    pattern: Regex,
}

impl DescriptorParser {
    /// Create a parser with the descriptor pattern compiled.
    pub fn new() -> Self {
        Self {
            // The pattern is a compile-time constant; a failure here is a bug,
            // not an input condition.
            pattern: Regex::new(DESCRIPTOR_PATTERN).expect("descriptor pattern must compile"),
        }
    }

    /// Scan `text` for descriptors.
    ///
    /// Matches are found left to right, non-overlapping, across line
    /// boundaries. Text containing no descriptor yields an empty vector;
    /// nothing is ever an error. A match whose captures cannot be converted
    /// (empty capture, or an integer too large for a level) is skipped and
    /// the scan continues.
    ///
    /// # Arguments
    /// * `text` - Arbitrary text, typically multi-line
    ///
    /// # Returns
    /// Descriptors in the order they appear in `text`
    pub fn parse(&self, text: &str) -> Vec<FormulaDescriptor> {
        let mut descriptors = Vec::new();

        for caps in self.pattern.captures_iter(text) {
            let min_raw = caps.get(1).map_or("", |m| m.as_str());
            let max_raw = caps.get(2).map_or("", |m| m.as_str());
            let mult_raw = caps.get(3).map_or("", |m| m.as_str());

            // Each group requires at least one digit, so an empty capture
            // should be impossible. Skip the match rather than abort the
            // whole scan if one ever comes back hollow.
            if min_raw.is_empty() || max_raw.is_empty() || mult_raw.is_empty() {
                debug!("skipping descriptor match with empty capture");
                continue;
            }

            // Digits-only captures can still overflow the level type.
            // Treat that like the empty-capture case: skip and keep scanning.
            let (Ok(min_level), Ok(max_level), Ok(multiplier)) = (
                min_raw.parse::<u32>(),
                max_raw.parse::<u32>(),
                mult_raw.parse::<f64>(),
            ) else {
                debug!(
                    "skipping unconvertible descriptor match: {};{};{}",
                    min_raw, max_raw, mult_raw
                );
                continue;
            };

            descriptors.push(FormulaDescriptor {
                min_level,
                max_level,
                multiplier,
            });
        }

        descriptors
    }
}

impl Default for DescriptorParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse descriptors out of `text` with a one-shot parser.
///
/// Convenience wrapper around [`DescriptorParser::parse`]; callers that parse
/// repeatedly should hold a `DescriptorParser` to reuse the compiled pattern.
pub fn parse(text: &str) -> Vec<FormulaDescriptor> {
    DescriptorParser::new().parse(text)
}

// ============================================================================
// Tests
// ============================================================================

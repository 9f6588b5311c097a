//! Calculator Session
//!
//! Transient state for one calculator view: the current base cost and the
//! results of the last submission. Changing the base cost never recomputes
//! existing results on its own; only submitting formula text does.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::formula::{expand, LevelResult};
use crate::parser::DescriptorParser;

// ============================================================================
// Constants
// ============================================================================

/// Base cost a fresh session starts with.
pub const DEFAULT_BASE_COST: f64 = 1000.0;

// ============================================================================
// Session
// ============================================================================

/// One calculator view's worth of state.
///
/// Holds the user-editable base cost and the ordered results of the last
/// submission. Results are replaced wholesale on every submission; editing
/// the base cost leaves previously computed results untouched until the next
/// submission.
#[derive(Debug)]
pub struct Session {
    base_cost: f64,
    results: Vec<LevelResult>,
    parser: DescriptorParser,
}

impl Session {
    /// Create a session with the default base cost and no results.
    pub fn new() -> Self {
        Self {
            base_cost: DEFAULT_BASE_COST,
            results: Vec::new(),
            parser: DescriptorParser::new(),
        }
    }

    /// Current base cost.
    pub fn base_cost(&self) -> f64 {
        self.base_cost
    }

    /// Set the base cost.
    ///
    /// Takes effect on the next submission; the stored results are not
    /// recomputed.
    pub fn set_base_cost(&mut self, base_cost: f64) {
        self.base_cost = base_cost;
    }

    /// Results of the last submission, in production order.
    pub fn results(&self) -> &[LevelResult] {
        &self.results
    }

    /// Submit formula text, replacing the stored results wholesale.
    ///
    /// Parses every descriptor out of `text` and expands them in encounter
    /// order against the current base cost. Text with no descriptors leaves
    /// the session with an empty result set.
    pub fn submit(&mut self, text: &str) -> &[LevelResult] {
        let descriptors = self.parser.parse(text);
        debug!(
            "submission parsed {} descriptor(s) at base cost {}",
            descriptors.len(),
            self.base_cost
        );

        self.results = descriptors
            .iter()
            .flat_map(|descriptor| expand(self.base_cost, descriptor))
            .collect();

        &self.results
    }

    /// Render the stored results, one `<level> = <answer>` line per result.
    pub fn render(&self) -> String {
        self.results
            .iter()
            .map(|result| format!("{} = {}", result.level, result.answer))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Result sheet
// ============================================================================

/// Serializable snapshot of one evaluation, for the JSON output surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultSheet {
    /// Base cost the results were computed against.
    pub base_cost: f64,
    /// Results in production order.
    pub results: Vec<LevelResult>,
}

impl ResultSheet {
    /// Snapshot a base cost and its computed results.
    pub fn new(base_cost: f64, results: Vec<LevelResult>) -> Self {
        Self { base_cost, results }
    }

    /// Serialize the sheet as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_session_defaults() {
        let session = Session::new();
        assert_eq!(session.base_cost(), DEFAULT_BASE_COST);
        assert!(session.results().is_empty());
    }

    #[test]
    fn test_submit_computes_results() {
        let mut session = Session::new();
        session.submit("1;3;1.5");

        let answers: Vec<i64> = session.results().iter().map(|r| r.answer).collect();
        assert_eq!(answers, vec![1500, 2250, 3375]);
    }

    #[test]
    fn test_submit_replaces_wholesale() {
        let mut session = Session::new();
        session.submit("1;3;1.5");
        session.submit("0;0;2.0");

        assert_eq!(session.results().len(), 1);
        assert_eq!(session.results()[0].level, 0);
        assert_eq!(session.results()[0].answer, 1000);
    }

    #[test]
    fn test_submit_empty_text_clears_results() {
        let mut session = Session::new();
        session.submit("1;3;1.5");
        session.submit("nothing to see");
        assert!(session.results().is_empty());
    }

    #[test]
    fn test_base_cost_change_is_not_retroactive() {
        let mut session = Session::new();
        session.submit("1;1;1.5");
        assert_eq!(session.results()[0].answer, 1500);

        // Editing the base cost leaves the displayed results alone.
        session.set_base_cost(2000.0);
        assert_eq!(session.results()[0].answer, 1500);

        // It applies on the next submission.
        session.submit("1;1;1.5");
        assert_eq!(session.results()[0].answer, 3000);
    }

    #[test]
    fn test_render_line_format() {
        let mut session = Session::new();
        session.submit("1;3;1.5");
        assert_eq!(session.render(), "1 = 1500\n2 = 2250\n3 = 3375");
    }

    #[test]
    fn test_render_empty_results() {
        let session = Session::new();
        assert_eq!(session.render(), "");
    }

    #[test]
    fn test_result_sheet_round_trip() {
        let mut session = Session::new();
        session.set_base_cost(500.0);
        session.submit("1;2;1.5");

        let sheet = ResultSheet::new(session.base_cost(), session.results().to_vec());
        let json = sheet.to_json().unwrap();
        let restored: ResultSheet = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, sheet);
    }
}

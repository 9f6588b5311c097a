//! Levelcost - Exponential Level-Cost Calculator
//!
//! Levelcost expands compact formula descriptors into upgrade-cost curves of
//! the form `base_cost * multiplier^level`.
//!
//! # Architecture
//!
//! Two pure components do all the computation:
//! - Descriptor parser: extracts `min;max;multiplier` triples from free-form
//!   text, ignoring everything else
//! - Range expander: turns each triple into one rounded result per level
//!
//! `session` carries the transient calculator state (base cost plus the last
//! computed results) and `cli` exposes the command-line surface.

pub mod cli;
pub mod error;
pub mod formula;
pub mod parser;
pub mod session;

pub use error::{LevelCostError, Result};
pub use formula::{evaluate, expand, LevelResult};
pub use parser::{parse, DescriptorParser, FormulaDescriptor};
pub use session::{ResultSheet, Session, DEFAULT_BASE_COST};

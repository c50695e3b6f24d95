//! Weighted decision tree evaluation

mod eval;
mod tree;

pub use eval::{expected_value, resolve_path, select_branch};
pub use tree::{DecisionBranch, DecisionNode, RiskLevel};

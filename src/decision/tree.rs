//! Weighted decision tree structures
//!
//! A node is a decision point with ordered branches. Branches carry a
//! subjective probability weight and may open a follow-on decision node,
//! so multi-level scenarios need no structural changes.

use serde::{Deserialize, Serialize};

/// Severity of the tail risk attached to a branch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Minimal,
    Moderate,
    Severe,
}

/// A selectable branch under a decision node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionBranch {
    /// Identifier unique among siblings
    pub id: u32,

    pub label: String,

    /// Subjective weight in [0, 1]. Sibling probabilities are not required
    /// to sum to 1; coherence is a caller concern.
    pub probability: f64,

    /// Short description of the expected outcome
    pub outcome: String,

    pub risk: RiskLevel,

    /// Narrative rationale shown when the branch is selected
    pub narrative: String,

    /// Follow-on decision for multi-level scenarios. Terminal branches
    /// carry no child node.
    pub next: Option<DecisionNode>,
}

/// A decision point with its ordered branches
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionNode {
    pub label: String,
    pub branches: Vec<DecisionBranch>,
}

impl DecisionNode {
    /// Find an immediate branch by id
    pub fn branch(&self, branch_id: u32) -> Option<&DecisionBranch> {
        self.branches.iter().find(|b| b.id == branch_id)
    }
}

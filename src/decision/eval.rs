//! Path resolution and expected value over decision trees

use super::tree::{DecisionBranch, DecisionNode};
use crate::error::EngineError;

/// Look up an immediate branch of a node by id.
///
/// This is the interactive selection entry point: one branch at a time,
/// no optimization across siblings.
pub fn select_branch(node: &DecisionNode, branch_id: u32) -> Result<&DecisionBranch, EngineError> {
    resolve_path(node, &[branch_id])
}

/// Resolve a chain of branch ids, one per level, to the branch reached by
/// following child nodes down from the root.
///
/// Fails with `BranchNotFound` carrying the offending id and depth when an
/// id matches no child at its level, including when the path continues past
/// a terminal branch.
pub fn resolve_path<'a>(
    root: &'a DecisionNode,
    path: &[u32],
) -> Result<&'a DecisionBranch, EngineError> {
    if path.is_empty() {
        return Err(EngineError::InvalidInput(
            "decision path must name at least one branch".to_string(),
        ));
    }
    resolve_from(root, path, 0)
}

fn resolve_from<'a>(
    node: &'a DecisionNode,
    path: &[u32],
    depth: usize,
) -> Result<&'a DecisionBranch, EngineError> {
    let branch_id = path[0];
    let branch = node
        .branch(branch_id)
        .ok_or(EngineError::BranchNotFound { branch_id, depth })?;

    let rest = &path[1..];
    if rest.is_empty() {
        return Ok(branch);
    }
    match &branch.next {
        Some(child) => resolve_from(child, rest, depth + 1),
        None => Err(EngineError::BranchNotFound {
            branch_id: rest[0],
            depth: depth + 1,
        }),
    }
}

/// Probability-weighted aggregate over the immediate branches of a node:
/// Σ probability × value_fn(branch).
///
/// The result is only meaningful when sibling probabilities sum to 1; the
/// engine does not enforce that.
pub fn expected_value<F>(node: &DecisionNode, value_fn: F) -> f64
where
    F: Fn(&DecisionBranch) -> f64,
{
    node.branches
        .iter()
        .map(|b| b.probability * value_fn(b))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decision::tree::RiskLevel;
    use approx::assert_relative_eq;

    fn branch(id: u32, probability: f64, next: Option<DecisionNode>) -> DecisionBranch {
        DecisionBranch {
            id,
            label: format!("branch {id}"),
            probability,
            outcome: "outcome".to_string(),
            risk: RiskLevel::Moderate,
            narrative: "narrative".to_string(),
            next,
        }
    }

    fn two_level_tree() -> DecisionNode {
        let second_level = DecisionNode {
            label: "follow-on".to_string(),
            branches: vec![branch(10, 0.5, None), branch(11, 0.5, None)],
        };
        DecisionNode {
            label: "root".to_string(),
            branches: vec![branch(1, 0.6, Some(second_level)), branch(2, 0.4, None)],
        }
    }

    #[test]
    fn select_branch_finds_immediate_child() {
        let tree = two_level_tree();
        let selected = select_branch(&tree, 2).unwrap();
        assert_eq!(selected.id, 2);
    }

    #[test]
    fn select_branch_reports_unknown_id() {
        let tree = two_level_tree();
        let err = select_branch(&tree, 99).unwrap_err();
        assert_eq!(
            err,
            EngineError::BranchNotFound {
                branch_id: 99,
                depth: 0
            }
        );
    }

    #[test]
    fn resolve_path_descends_through_child_nodes() {
        let tree = two_level_tree();
        let terminal = resolve_path(&tree, &[1, 11]).unwrap();
        assert_eq!(terminal.id, 11);
    }

    #[test]
    fn resolve_path_reports_depth_of_failure() {
        let tree = two_level_tree();
        let err = resolve_path(&tree, &[1, 99]).unwrap_err();
        assert_eq!(
            err,
            EngineError::BranchNotFound {
                branch_id: 99,
                depth: 1
            }
        );
    }

    #[test]
    fn resolve_path_fails_past_terminal_branch() {
        let tree = two_level_tree();
        let err = resolve_path(&tree, &[2, 10]).unwrap_err();
        assert_eq!(
            err,
            EngineError::BranchNotFound {
                branch_id: 10,
                depth: 1
            }
        );
    }

    #[test]
    fn resolve_path_rejects_empty_path() {
        let tree = two_level_tree();
        assert!(matches!(
            resolve_path(&tree, &[]),
            Err(EngineError::InvalidInput(_))
        ));
    }

    #[test]
    fn expected_value_weights_by_probability() {
        let tree = two_level_tree();

        // Constant valuation returns the probability mass itself.
        assert_relative_eq!(expected_value(&tree, |_| 1.0), 1.0);

        // Value keyed off the branch id: 0.6 * 100 + 0.4 * 200.
        let ev = expected_value(&tree, |b| if b.id == 1 { 100.0 } else { 200.0 });
        assert_relative_eq!(ev, 140.0);
    }

    #[test]
    fn expected_value_tolerates_incoherent_weights() {
        let node = DecisionNode {
            label: "incoherent".to_string(),
            branches: vec![branch(1, 0.9, None), branch(2, 0.9, None)],
        };
        assert_relative_eq!(expected_value(&node, |_| 1.0), 1.8);
    }
}

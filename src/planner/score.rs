//! Component C — the scoring function (spec.md §4.3).
//!
//! Constants follow the table in spec.md §4.3 exactly: `T=1`, `L=2*T`,
//! `F=4*T`, `B=8*F`. Kept as `i64` throughout since the reward terms can
//! dwarf the penalty for larger `n` and the spec only requires a consistent
//! total ordering, not a bounded range.

use std::collections::HashSet;

use super::validity::source_resolved;
use crate::bound_vars::BoundVars;
use crate::expression::{Expression, OperationKind};
use crate::query_graph::QueryGraph;

pub(crate) const T: i64 = 1;
pub(crate) const L: i64 = 2 * T;
pub(crate) const F: i64 = 4 * T;
pub(crate) const B: i64 = 8 * F;

/// Score one valid ordering. Higher is better; ties go to whichever
/// ordering the caller saw first (spec.md §4.3 tie-breaking).
pub fn score_ordering(
    exprs: &[Box<dyn Expression>],
    graph: &impl QueryGraph,
    filtered: &HashSet<String>,
    bound_vars: Option<&BoundVars>,
    maintain_transpose: bool,
    ordering: &[usize],
) -> i64 {
    let penalty = if maintain_transpose {
        0
    } else {
        penalty_for(exprs, ordering)
    };
    reward_for(exprs, graph, filtered, bound_vars, ordering) - penalty
}

fn penalty_for(exprs: &[Box<dyn Expression>], ordering: &[usize]) -> i64 {
    let n = ordering.len();
    let e0 = exprs[ordering[0]].as_ref();
    let mut penalty = T * e0.operation_count(OperationKind::Transpose) as i64;

    for i in 1..n {
        let ei = exprs[ordering[i]].as_ref();
        if source_resolved(exprs, ordering, i) {
            penalty += T * ei.operation_count(OperationKind::Transpose) as i64;
        } else {
            let untransposed =
                ei.operand_count() as i64 - ei.operation_count(OperationKind::Transpose) as i64;
            penalty += T * untransposed;
        }
    }
    penalty
}

fn reward_for(
    exprs: &[Box<dyn Expression>],
    graph: &impl QueryGraph,
    filtered: &HashSet<String>,
    bound_vars: Option<&BoundVars>,
    ordering: &[usize],
) -> i64 {
    let n = ordering.len() as i64;
    let mut reward = 0;

    for (i, &idx) in ordering.iter().enumerate() {
        let ei = exprs[idx].as_ref();
        let factor = n - i as i64;

        if let Some(bound) = bound_vars {
            if bound.contains(ei.source()) {
                reward += B * factor;
            }
            if bound.contains(ei.destination()) {
                reward += B * factor;
            }
        }
        if filtered.contains(ei.source()) {
            reward += F * factor;
        }
        if filtered.contains(ei.destination()) {
            reward += F * factor;
        }
        // Destination labels are deliberately not rewarded here (spec.md
        // §4.3's documented asymmetry — only the entry-point selector in
        // §4.4 weighs both endpoints' labels).
        if graph.has_label(ei.source()) {
            reward += L * factor;
        }
    }
    reward
}

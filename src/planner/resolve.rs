//! Component D — sequence resolver and entry-point selector (spec.md §4.4).
//!
//! Both phases run on the winning ordering after it has already been
//! written back into the caller's array, so they operate directly on a
//! `&mut [Box<dyn Expression>]` rather than on index permutations.

use std::collections::HashSet;

use super::score::{F, L};
use super::validity::source_resolved;
use crate::bound_vars::BoundVars;
use crate::expression::Expression;
use crate::query_graph::QueryGraph;

/// Phase 1: for each non-opener position, transpose the expression in
/// place if its source isn't resolved by a predecessor. Transposing `ei`
/// only swaps which of its own two fields is called "source" — it never
/// changes the *set* of aliases earlier predecessors expose, so resolving
/// left-to-right in a single pass is sufficient.
pub fn resolve_sequence(exprs: &mut [Box<dyn Expression>]) {
    let identity: Vec<usize> = (0..exprs.len()).collect();
    for i in 1..exprs.len() {
        if !source_resolved(exprs, &identity, i) {
            exprs[i].transpose();
        }
    }
}

/// Phase 2: decide whether to transpose the opener (position 0) so
/// execution starts from the cheapest entry point.
pub fn select_entry_point(
    exprs: &mut [Box<dyn Expression>],
    graph: &impl QueryGraph,
    filtered: &HashSet<String>,
    bound_vars: Option<&BoundVars>,
) {
    let source = exprs[0].source().to_string();
    let destination = exprs[0].destination().to_string();
    let operand_count = exprs[0].operand_count();

    if operand_count == 1 && source == destination {
        return; // self-loop single operand: leave untouched (spec.md §3 invariant 4)
    }

    if let Some(bound) = bound_vars {
        if bound.contains(&source) {
            return;
        }
        if bound.contains(&destination) {
            exprs[0].transpose();
            return;
        }
    }

    let src_score = score_endpoint(&source, graph, filtered);
    let dest_score = score_endpoint(&destination, graph, filtered);
    if dest_score > src_score {
        exprs[0].transpose();
    }
}

fn score_endpoint(alias: &str, graph: &impl QueryGraph, filtered: &HashSet<String>) -> i64 {
    let mut score = 0;
    if filtered.contains(alias) {
        score += F;
    }
    if graph.has_label(alias) {
        score += L;
    }
    score
}

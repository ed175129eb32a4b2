//! The traversal-order planner: the top-level driver of spec.md §4.5.
//!
//! `order_expressions` is a single pure function composed of the four
//! components in spec.md §2: permutation generation, validity filtering,
//! scoring, and the sequence resolver / entry-point selector. It mutates
//! the caller's expression array in place and returns a typed error only
//! for the two precondition violations spec.md §7 names — everything else
//! is total.

mod permute;
mod resolve;
mod score;
mod validity;

use std::collections::HashSet;

use crate::bound_vars::BoundVars;
use crate::config::PlannerConfig;
use crate::error::PlannerError;
use crate::expression::Expression;
use crate::filter_tree::FilterTree;
use crate::query_graph::QueryGraph;

pub use validity::is_valid;

/// Order and transpose `expressions` in place for one connected component
/// of a graph pattern match.
///
/// `maintain_transpose` controls whether the scoring function's transpose
/// penalty applies (spec.md §4.3); `max_permutation_len` is the guard rail
/// of spec.md §9/§4.9 — exceeding it returns `TooManyExpressions` instead of
/// enumerating `n!` orderings.
pub fn order_expressions(
    query_graph: &impl QueryGraph,
    expressions: &mut [Box<dyn Expression>],
    filter_tree: &FilterTree,
    bound_vars: Option<&BoundVars>,
    maintain_transpose: bool,
    max_permutation_len: usize,
) -> Result<(), PlannerError> {
    let n = expressions.len();
    if n == 0 {
        return Err(PlannerError::EmptyExpressionSet);
    }
    if n > max_permutation_len {
        return Err(PlannerError::TooManyExpressions {
            n,
            limit: max_permutation_len,
        });
    }

    log::debug!(
        "order_expressions: n={n}, maintain_transpose={maintain_transpose}"
    );

    // Fast path (spec.md §4.5 step 1 / §3 invariant 4): a lone self-loop
    // single-operand expression is already optimal.
    if n == 1 && expressions[0].operand_count() == 1 && expressions[0].source() == expressions[0].destination() {
        log::debug!("order_expressions: single self-loop expression, returning untouched");
        return Ok(());
    }

    let filtered = filter_tree.collect_modified_aliases();
    let orderings = permute::generate_permutations(n);

    let winner = if orderings.len() == 1 {
        // Only one arrangement exists; skip validity/scoring entirely
        // (spec.md §4.5 step 4) and fall through to the entry-point
        // selector only.
        orderings.into_iter().next().expect("exactly one ordering")
    } else {
        select_winner(
            &orderings,
            expressions,
            query_graph,
            &filtered,
            bound_vars,
            maintain_transpose,
        )
        .ok_or(PlannerError::NoValidOrdering { n })?
    };

    apply_permutation(expressions, &winner);
    resolve::resolve_sequence(expressions);
    resolve::select_entry_point(expressions, query_graph, &filtered, bound_vars);

    log::debug!("order_expressions: winning ordering = {winner:?}");
    Ok(())
}

/// Convenience entry point that sources `maintain_transpose` and the
/// permutation guard rail from a loaded [`PlannerConfig`].
pub fn order_expressions_with_config(
    query_graph: &impl QueryGraph,
    expressions: &mut [Box<dyn Expression>],
    filter_tree: &FilterTree,
    bound_vars: Option<&BoundVars>,
    config: &PlannerConfig,
) -> Result<(), PlannerError> {
    order_expressions(
        query_graph,
        expressions,
        filter_tree,
        bound_vars,
        config.maintain_transpose,
        config.max_permutation_len,
    )
}

fn select_winner(
    orderings: &[Vec<usize>],
    expressions: &[Box<dyn Expression>],
    query_graph: &impl QueryGraph,
    filtered: &HashSet<String>,
    bound_vars: Option<&BoundVars>,
    maintain_transpose: bool,
) -> Option<Vec<usize>> {
    let mut best: Option<(i64, &Vec<usize>)> = None;

    for ordering in orderings {
        if !validity::is_valid(expressions, query_graph, ordering) {
            continue;
        }
        let score = score::score_ordering(
            expressions,
            query_graph,
            filtered,
            bound_vars,
            maintain_transpose,
            ordering,
        );
        log::trace!("order_expressions: ordering {ordering:?} scored {score}");
        match best {
            Some((best_score, _)) if score <= best_score => {}
            _ => best = Some((score, ordering)),
        }
    }

    best.map(|(_, ordering)| ordering.clone())
}

/// Rearrange `slice` in place so that `slice[i]` becomes the element that
/// was originally at `slice[perm[i]]`, using only swaps (no clone, no
/// placeholder value needed for the trait-object elements).
fn apply_permutation<T>(slice: &mut [T], perm: &[usize]) {
    let mut order: Vec<usize> = perm.to_vec();
    for i in 0..order.len() {
        while order[i] != i {
            let j = order[i];
            slice.swap(i, j);
            order.swap(i, j);
        }
    }
}

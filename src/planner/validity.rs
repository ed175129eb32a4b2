//! Component B — the validity filter (spec.md §4.2).
//!
//! Also hosts the two chaining predicates reused by the scorer and the
//! sequence resolver: the full (both-endpoint) chaining rule used for
//! ordering validity, and the source-only predicate used wherever the spec
//! says "same chaining predicate as §4.2 but restricted to source-side".

use crate::expression::Expression;
use crate::query_graph::QueryGraph;

/// Does `exprs[ordering[i]]` share an endpoint with some predecessor at
/// `ordering[j]`, `j < i`? This is the full chaining rule of spec.md §4.2.
pub(crate) fn chained_full(exprs: &[Box<dyn Expression>], ordering: &[usize], i: usize) -> bool {
    let ei = exprs[ordering[i]].as_ref();
    (0..i).any(|j| {
        let ej = exprs[ordering[j]].as_ref();
        ej.source() == ei.source()
            || ej.destination() == ei.source()
            || ej.source() == ei.destination()
            || ej.destination() == ei.destination()
    })
}

/// Is `source(exprs[ordering[i]])` resolved by some predecessor's source or
/// destination? This is the source-side-only restriction spec.md §4.3 and
/// §4.4 reuse from the chaining rule.
pub(crate) fn source_resolved(exprs: &[Box<dyn Expression>], ordering: &[usize], i: usize) -> bool {
    let ei = exprs[ordering[i]].as_ref();
    (0..i).any(|j| {
        let ej = exprs[ordering[j]].as_ref();
        ej.source() == ei.source() || ej.destination() == ei.source()
    })
}

/// The opener rule (spec.md §4.2): the first expression can't be a bare,
/// single-operand, labeled traversal — that can't be realized as a scan.
fn violates_opener_rule(e0: &dyn Expression, graph: &impl QueryGraph) -> bool {
    e0.edge().is_some()
        && e0.operand_count() == 1
        && (graph.has_label(e0.source()) || graph.has_label(e0.destination()))
}

/// Is `ordering` valid: every non-opener position chains to a predecessor,
/// and the opener itself is not a bare labeled traversal?
pub fn is_valid(
    exprs: &[Box<dyn Expression>],
    graph: &impl QueryGraph,
    ordering: &[usize],
) -> bool {
    let e0 = exprs[ordering[0]].as_ref();
    if violates_opener_rule(e0, graph) {
        return false;
    }
    (1..ordering.len()).all(|i| chained_full(exprs, ordering, i))
}

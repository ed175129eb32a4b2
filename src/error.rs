//! Error types for the traversal-order planner.
//!
//! A violation here means the caller handed the planner a malformed
//! connected-component decomposition (spec.md §7: "a valid graph pattern
//! always yields at least one valid ordering"). These are modeled as a
//! typed, returned error rather than a bare panic, the way every analyzer
//! pass in this codebase reports its own internal-invariant violations.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum PlannerError {
    #[error("order_expressions called with an empty expression array")]
    EmptyExpressionSet,

    #[error(
        "no valid ordering survived the chaining/opener filter for {n} expression(s); the \
         connected-component decomposition that produced them is malformed"
    )]
    NoValidOrdering { n: usize },

    #[error(
        "{n} expressions exceed the configured permutation guard rail ({limit}); cap the size \
         of connected components passed to the planner or raise max_permutation_len"
    )]
    TooManyExpressions { n: usize, limit: usize },
}

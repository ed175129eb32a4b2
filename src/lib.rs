//! clickgraph-traversal-planner - traversal-order planner for a property-graph query engine
//!
//! Given the algebraic expressions produced for one connected component of a
//! graph pattern match, this crate decides the order those expressions
//! execute in and, for each, whether to transpose it (swap source and
//! destination) so execution is cheapest. It is a pure, synchronous,
//! single-threaded planning pass with no I/O.

pub mod bound_vars;
pub mod config;
pub mod error;
pub mod expression;
pub mod filter_tree;
pub mod planner;
pub mod query_graph;

pub use bound_vars::BoundVars;
pub use config::PlannerConfig;
pub use error::PlannerError;
pub use expression::{AlgebraicExpression, Expression};
pub use filter_tree::FilterTree;
pub use planner::order_expressions;
pub use query_graph::{QueryGraph, QueryGraphEdge, QueryGraphNode};

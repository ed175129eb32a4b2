//! The query graph — the opaque structure spec.md §1 describes as "mapping
//! an alias to a node (with an optional label) or an edge (with min/max
//! hops, relation-type list, bidirectionality)". Reduced here to exactly
//! the fields the planner reads, shaped after
//! `src/graph_catalog/graph_schema.rs`'s `NodeSchema`/relationship schema
//! split in the full engine.

use std::collections::HashMap;

/// A graph pattern node, keyed by its match-clause alias.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryGraphNode {
    pub label: Option<String>,
}

/// A graph pattern edge, keyed by its match-clause alias.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryGraphEdge {
    pub min_hops: u32,
    pub max_hops: Option<u32>,
    pub relation_types: Vec<String>,
    pub bidirectional: bool,
}

impl Default for QueryGraphEdge {
    fn default() -> Self {
        Self {
            min_hops: 1,
            max_hops: Some(1),
            relation_types: Vec::new(),
            bidirectional: false,
        }
    }
}

/// Capability the planner needs from the query graph: alias -> node/edge
/// lookups. The real engine backs this with a resolved `GraphSchema`; tests
/// back it with a couple of `HashMap`s.
pub trait QueryGraph {
    fn node_by_alias(&self, alias: &str) -> Option<&QueryGraphNode>;
    fn edge_by_alias(&self, alias: &str) -> Option<&QueryGraphEdge>;

    /// Convenience used throughout scoring: does the node at `alias` carry
    /// a label? Missing nodes (e.g. an edge alias) are unlabeled.
    fn has_label(&self, alias: &str) -> bool {
        self.node_by_alias(alias)
            .is_some_and(|n| n.label.is_some())
    }
}

/// A plain in-memory query graph, built once per query from the AST.
#[derive(Debug, Clone, Default)]
pub struct InMemoryQueryGraph {
    nodes: HashMap<String, QueryGraphNode>,
    edges: HashMap<String, QueryGraphEdge>,
}

impl InMemoryQueryGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_node(mut self, alias: impl Into<String>, node: QueryGraphNode) -> Self {
        self.nodes.insert(alias.into(), node);
        self
    }

    pub fn with_edge(mut self, alias: impl Into<String>, edge: QueryGraphEdge) -> Self {
        self.edges.insert(alias.into(), edge);
        self
    }
}

impl QueryGraph for InMemoryQueryGraph {
    fn node_by_alias(&self, alias: &str) -> Option<&QueryGraphNode> {
        self.nodes.get(alias)
    }

    fn edge_by_alias(&self, alias: &str) -> Option<&QueryGraphEdge> {
        self.edges.get(alias)
    }
}

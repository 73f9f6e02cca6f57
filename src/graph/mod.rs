//! Graph-store abstraction for the ingestion pipeline
//!
//! The pipeline only needs a narrow capability from the database: clear
//! everything, upsert a node by (label, canonical name), upsert an edge
//! between two already-created nodes, and report counts. The `GraphStore`
//! trait captures that capability with two implementations:
//! - `Neo4jStore` — Bolt connection to a running Neo4j server
//! - `MemoryStore` — embedded in-memory store (tests, examples)

pub mod memory;
pub mod neo4j;
pub mod property;

use async_trait::async_trait;
use thiserror::Error;

pub use memory::MemoryStore;
pub use neo4j::Neo4jStore;
pub use property::{PropertyMap, PropertyValue};

/// Errors that can occur during graph operations
#[derive(Error, Debug)]
pub enum GraphError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Write rejected: {0}")]
    WriteError(String),

    #[error("Query error: {0}")]
    QueryError(String),
}

pub type GraphResult<T> = Result<T, GraphError>;

/// Reference to a node by its identity pair (label, canonical name).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NodeRef {
    pub label: String,
    pub name: String,
}

impl NodeRef {
    pub fn new(label: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            name: name.into(),
        }
    }
}

/// A directed, typed edge between two node references.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EdgeSpec {
    pub from: NodeRef,
    pub rel_type: String,
    pub to: NodeRef,
}

impl EdgeSpec {
    pub fn new(from: NodeRef, rel_type: impl Into<String>, to: NodeRef) -> Self {
        Self {
            from,
            rel_type: rel_type.into(),
            to,
        }
    }
}

/// Node and edge counts, used by tests and the `status` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphStats {
    pub nodes: u64,
    pub edges: u64,
}

/// The write capability the ingestion pipeline consumes.
///
/// All mutations are idempotent upserts keyed by canonical identity:
/// running the same sequence twice leaves the graph unchanged.
#[async_trait]
pub trait GraphStore: Send + Sync {
    /// Remove every node and relationship.
    async fn clear(&self) -> GraphResult<()>;

    /// Match-or-create the node identified by (label, name), then overwrite
    /// its properties with `props` (last-write-wins).
    async fn upsert_node(&self, node: &NodeRef, props: PropertyMap) -> GraphResult<()>;

    /// Match both endpoints and merge the edge between them. If either
    /// endpoint does not exist the call succeeds without creating anything.
    async fn upsert_edge(&self, edge: &EdgeSpec) -> GraphResult<()>;

    /// Current node and edge counts.
    async fn stats(&self) -> GraphResult<GraphStats>;
}

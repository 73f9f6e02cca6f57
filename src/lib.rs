//! Herograph — game knowledge-graph ingestion and natural-language Q&A
//!
//! The core of the crate is the ingestion pipeline: it consumes four
//! cross-referencing JSON datasets (heroes, abilities, items, hero skill
//! layouts) and materializes them as a property graph of typed nodes and
//! relationships in Neo4j. Entities are keyed by canonical display name,
//! every write is an idempotent upsert, and relationships are only linked
//! once both endpoints exist, so the graph is safely re-buildable from
//! scratch at any time.
//!
//! Around the pipeline sit the dataset loader, a narrow graph-store
//! abstraction (Bolt-backed and in-memory implementations), and the
//! LLM-backed question-to-Cypher / answer-generation layer used by the
//! interactive shell.

#![warn(clippy::all)]

pub mod config;
pub mod dataset;
pub mod graph;
pub mod nlq;
pub mod seed;

// Re-export main types for convenience
pub use config::{GraphConfig, LlmConfig, LlmProvider, SeedConfig};
pub use dataset::{DatasetError, GameData};
pub use graph::{
    EdgeSpec, GraphError, GraphResult, GraphStats, GraphStore, MemoryStore, Neo4jStore,
    NodeRef, PropertyMap, PropertyValue,
};
pub use nlq::{NlqError, QueryTranslator, ResponseGenerator, GRAPH_SCHEMA};
pub use seed::Seeder;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//! Embedded in-memory implementation of `GraphStore`
//!
//! Mirrors the upsert semantics of the Neo4j implementation over plain
//! `RwLock`-guarded collections. Used by the test suite and as an
//! embedded mode where no server is available.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use tokio::sync::RwLock;

use super::{EdgeSpec, GraphResult, GraphStats, GraphStore, NodeRef, PropertyMap};

/// In-memory graph keyed the same way the real database is: nodes by
/// (label, canonical name), edges by the full endpoint/type triple.
#[derive(Default)]
pub struct MemoryStore {
    nodes: RwLock<HashMap<(String, String), PropertyMap>>,
    edges: RwLock<HashSet<EdgeSpec>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Properties of a node, if present.
    pub async fn node(&self, node: &NodeRef) -> Option<PropertyMap> {
        self.nodes
            .read()
            .await
            .get(&(node.label.clone(), node.name.clone()))
            .cloned()
    }

    /// Whether the exact edge exists.
    pub async fn has_edge(&self, edge: &EdgeSpec) -> bool {
        self.edges.read().await.contains(edge)
    }

    /// Number of nodes carrying the given label.
    pub async fn nodes_with_label(&self, label: &str) -> usize {
        self.nodes
            .read()
            .await
            .keys()
            .filter(|(l, _)| l == label)
            .count()
    }

    /// Number of edges of the given relationship type.
    pub async fn edges_of_type(&self, rel_type: &str) -> usize {
        self.edges
            .read()
            .await
            .iter()
            .filter(|e| e.rel_type == rel_type)
            .count()
    }
}

#[async_trait]
impl GraphStore for MemoryStore {
    async fn clear(&self) -> GraphResult<()> {
        self.nodes.write().await.clear();
        self.edges.write().await.clear();
        Ok(())
    }

    async fn upsert_node(&self, node: &NodeRef, props: PropertyMap) -> GraphResult<()> {
        self.nodes
            .write()
            .await
            .insert((node.label.clone(), node.name.clone()), props);
        Ok(())
    }

    async fn upsert_edge(&self, edge: &EdgeSpec) -> GraphResult<()> {
        let nodes = self.nodes.read().await;
        let from_key = (edge.from.label.clone(), edge.from.name.clone());
        let to_key = (edge.to.label.clone(), edge.to.name.clone());
        // Missing endpoint: the MATCH side of match-match-merge found
        // nothing, so the merge is a no-op rather than an error.
        if !nodes.contains_key(&from_key) || !nodes.contains_key(&to_key) {
            return Ok(());
        }
        drop(nodes);
        self.edges.write().await.insert(edge.clone());
        Ok(())
    }

    async fn stats(&self) -> GraphResult<GraphStats> {
        Ok(GraphStats {
            nodes: self.nodes.read().await.len() as u64,
            edges: self.edges.read().await.len() as u64,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::PropertyValue;

    fn props(name: &str) -> PropertyMap {
        let mut map = PropertyMap::new();
        map.insert("name".to_string(), PropertyValue::from(name));
        map
    }

    #[tokio::test]
    async fn test_upsert_node_is_idempotent() {
        let store = MemoryStore::new();
        let hero = NodeRef::new("Hero", "Axe");

        store.upsert_node(&hero, props("Axe")).await.unwrap();
        store.upsert_node(&hero, props("Axe")).await.unwrap();

        let stats = store.stats().await.unwrap();
        assert_eq!(stats.nodes, 1);
    }

    #[tokio::test]
    async fn test_upsert_overwrites_properties() {
        let store = MemoryStore::new();
        let hero = NodeRef::new("Hero", "Axe");

        let mut first = PropertyMap::new();
        first.insert("moveSpeed".to_string(), PropertyValue::from(290.0));
        store.upsert_node(&hero, first).await.unwrap();

        let mut second = PropertyMap::new();
        second.insert("moveSpeed".to_string(), PropertyValue::from(310.0));
        store.upsert_node(&hero, second).await.unwrap();

        let stored = store.node(&hero).await.unwrap();
        assert_eq!(stored["moveSpeed"].as_float(), Some(310.0));
    }

    #[tokio::test]
    async fn test_edge_requires_both_endpoints() {
        let store = MemoryStore::new();
        let hero = NodeRef::new("Hero", "Axe");
        store.upsert_node(&hero, props("Axe")).await.unwrap();

        let missing = NodeRef::new("Ability", "Culling Blade");
        let edge = EdgeSpec::new(hero.clone(), "HAS_ABILITY", missing);
        store.upsert_edge(&edge).await.unwrap();

        assert_eq!(store.stats().await.unwrap().edges, 0);
    }

    #[tokio::test]
    async fn test_edge_merge_deduplicates() {
        let store = MemoryStore::new();
        let a = NodeRef::new("Item", "Blade Mail");
        let b = NodeRef::new("Item", "Broadsword");
        store.upsert_node(&a, props("Blade Mail")).await.unwrap();
        store.upsert_node(&b, props("Broadsword")).await.unwrap();

        let edge = EdgeSpec::new(a, "REQUIRES_COMPONENT", b);
        store.upsert_edge(&edge).await.unwrap();
        store.upsert_edge(&edge).await.unwrap();

        assert_eq!(store.stats().await.unwrap().edges, 1);
        assert!(store.has_edge(&edge).await);
    }
}

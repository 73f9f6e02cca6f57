//! Neo4j implementation of `GraphStore` over the Bolt protocol
//!
//! Every upsert is a single parametrized auto-commit statement. Labels,
//! relationship types and property keys come from the crate's own fixed
//! vocabulary, so they are interpolated into the statement text; all
//! values travel as Bolt parameters.

use async_trait::async_trait;
use neo4rs::{query, BoltType, Graph, Query};
use tracing::error;

use super::{
    EdgeSpec, GraphError, GraphResult, GraphStats, GraphStore, NodeRef, PropertyMap,
    PropertyValue,
};
use crate::config::GraphConfig;

pub struct Neo4jStore {
    graph: Graph,
}

impl Neo4jStore {
    /// Connect to the configured Bolt endpoint.
    pub async fn connect(config: &GraphConfig) -> GraphResult<Self> {
        let graph = Graph::new(config.uri.as_str(), config.user.as_str(), config.password.as_str())
            .await
            .map_err(|e| GraphError::ConnectionError(e.to_string()))?;
        Ok(Self { graph })
    }

    /// Execute a read query and render each result row as a line of text.
    ///
    /// Used by the Q&A shell to show the database result for a generated
    /// query; the pipeline itself never reads.
    pub async fn execute_readonly(&self, cypher: &str) -> GraphResult<Vec<String>> {
        let mut result = self
            .graph
            .execute(query(cypher))
            .await
            .map_err(|e| GraphError::QueryError(e.to_string()))?;

        let mut lines = Vec::new();
        while let Some(row) = result
            .next()
            .await
            .map_err(|e| GraphError::QueryError(e.to_string()))?
        {
            let value: serde_json::Value = row
                .to()
                .map_err(|e| GraphError::QueryError(e.to_string()))?;
            lines.push(value.to_string());
        }
        Ok(lines)
    }

    async fn run(&self, q: Query) -> GraphResult<()> {
        self.graph.run(q).await.map_err(|e| {
            // A rejected write invalidates the whole run; the caller aborts
            // and the next run rebuilds from a clean graph.
            error!(error = %e, "graph write failed");
            GraphError::WriteError(e.to_string())
        })
    }

    async fn count(&self, cypher: &str) -> GraphResult<u64> {
        let mut result = self
            .graph
            .execute(query(cypher))
            .await
            .map_err(|e| GraphError::QueryError(e.to_string()))?;
        let row = result
            .next()
            .await
            .map_err(|e| GraphError::QueryError(e.to_string()))?
            .ok_or_else(|| GraphError::QueryError("count query returned no row".to_string()))?;
        let n: i64 = row
            .get("count")
            .map_err(|e| GraphError::QueryError(e.to_string()))?;
        Ok(n.max(0) as u64)
    }
}

fn to_bolt(value: &PropertyValue) -> Option<BoltType> {
    match value {
        PropertyValue::String(s) => Some(BoltType::from(s.as_str())),
        PropertyValue::Integer(i) => Some(BoltType::from(*i)),
        PropertyValue::Float(f) => Some(BoltType::from(*f)),
        PropertyValue::Boolean(b) => Some(BoltType::from(*b)),
        PropertyValue::StringList(items) => Some(BoltType::from(items.clone())),
        // Absent property rather than an explicit null (SET to null would
        // remove the key anyway).
        PropertyValue::Null => None,
    }
}

#[async_trait]
impl GraphStore for Neo4jStore {
    async fn clear(&self) -> GraphResult<()> {
        self.run(query("MATCH (n) DETACH DELETE n")).await
    }

    async fn upsert_node(&self, node: &NodeRef, props: PropertyMap) -> GraphResult<()> {
        let mut assignments = Vec::new();
        let mut q_props = Vec::new();
        for (key, value) in &props {
            if let Some(bolt) = to_bolt(value) {
                assignments.push(format!("n.{key} = ${key}"));
                q_props.push((key.clone(), bolt));
            }
        }

        let cypher = if assignments.is_empty() {
            format!("MERGE (n:{} {{name: $name}})", node.label)
        } else {
            format!(
                "MERGE (n:{} {{name: $name}}) SET {}",
                node.label,
                assignments.join(", ")
            )
        };

        let mut q = query(&cypher).param("name", node.name.as_str());
        for (key, bolt) in q_props {
            q = q.param(&key, bolt);
        }
        self.run(q).await
    }

    async fn upsert_edge(&self, edge: &EdgeSpec) -> GraphResult<()> {
        // Match-match-merge: if either MATCH finds nothing the statement
        // succeeds without touching the graph.
        let cypher = format!(
            "MATCH (a:{} {{name: $from}}) \
             MATCH (b:{} {{name: $to}}) \
             MERGE (a)-[:{}]->(b)",
            edge.from.label, edge.to.label, edge.rel_type
        );
        let q = query(&cypher)
            .param("from", edge.from.name.as_str())
            .param("to", edge.to.name.as_str());
        self.run(q).await
    }

    async fn stats(&self) -> GraphResult<GraphStats> {
        let nodes = self.count("MATCH (n) RETURN count(n) AS count").await?;
        let edges = self
            .count("MATCH ()-[r]->() RETURN count(r) AS count")
            .await?;
        Ok(GraphStats { nodes, edges })
    }
}

//! Configuration passed explicitly into the pipeline and NLQ layer
//!
//! Nothing in the library reads the environment on its own; the CLI
//! resolves flags and `HEROGRAPH_*` env vars into these structs and hands
//! them to the constructors.

use serde::{Deserialize, Serialize};

/// Bolt endpoint and credentials for the graph database.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphConfig {
    pub uri: String,
    pub user: String,
    pub password: String,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            uri: "bolt://localhost:7687".to_string(),
            user: "neo4j".to_string(),
            password: "password".to_string(),
        }
    }
}

/// LLM provider options.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum LlmProvider {
    /// Any endpoint speaking the OpenAI chat-completions API.
    OpenAi,
    Ollama,
}

/// Configuration for the text-to-Cypher and answer-generation calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    pub provider: LlmProvider,
    /// Model name (e.g. "llama-4-scout", "gpt-4o", "llama3")
    pub model: String,
    /// API key (optional for local endpoints)
    pub api_key: Option<String>,
    /// Base URL (required for Ollama and self-hosted OpenAI-compatible
    /// endpoints, optional otherwise)
    pub api_base_url: Option<String>,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: LlmProvider::OpenAi,
            model: "llama-4-scout".to_string(),
            api_key: None,
            api_base_url: None,
        }
    }
}

/// Policy knobs for the ingestion pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Zero-based position within a hero's ability-key sequence that is
    /// treated as the ultimate. Slot 5 is the convention of the source
    /// dataset's schema, not a structural guarantee.
    pub ultimate_slot: usize,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self { ultimate_slot: 5 }
    }
}

//! Natural-language querying
//!
//! Two prompt-templated LLM calls: question-to-Cypher translation and
//! natural-language answer generation over a query result. Both are
//! stateless; the graph schema summary travels with every call.

pub mod client;
pub mod schema;

use thiserror::Error;

use crate::config::LlmConfig;
pub use schema::GRAPH_SCHEMA;

#[derive(Error, Debug)]
pub enum NlqError {
    #[error("LLM API error: {0}")]
    ApiError(String),
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("Serialization error: {0}")]
    SerializationError(String),
    #[error("Validation error: {0}")]
    ValidationError(String),
}

pub type NlqResult<T> = Result<T, NlqError>;

/// Sentinel the model is instructed to answer with for off-schema
/// questions.
const IRRELEVANT: &str = "IRRELEVANT";

const TRANSLATE_SYSTEM_PROMPT: &str = "You are an expert Neo4j developer. \
Translate the user's natural language question into a standard Cypher query \
based on the provided schema. Do NOT include explanations, markdown \
formatting, or preamble. If the user's question is unrelated to the provided \
schema, or cannot be answered by it, return exactly the word: IRRELEVANT. \
Otherwise, return ONLY the raw Cypher query string.";

const EXPLAIN_SYSTEM_PROMPT: &str = "Answer the user question using the \
provided Neo4j context. Only respond with the query result in natural \
language.";

/// Translates questions into read-only Cypher queries.
pub struct QueryTranslator {
    client: client::LlmClient,
    schema: String,
}

impl QueryTranslator {
    pub fn new(config: &LlmConfig, schema: impl Into<String>) -> NlqResult<Self> {
        Ok(Self {
            client: client::LlmClient::new(config)?,
            schema: schema.into(),
        })
    }

    /// Translate a question into a Cypher query. `None` means the model
    /// judged the question unrelated to the schema.
    pub async fn translate(&self, question: &str) -> NlqResult<Option<String>> {
        let user_prompt = format!("Schema:\n{}\n\nQuestion: {}", self.schema, question);
        let raw = self
            .client
            .chat(TRANSLATE_SYSTEM_PROMPT, &user_prompt, 256)
            .await?;

        if raw.contains(IRRELEVANT) {
            return Ok(None);
        }

        let query = strip_fences(&raw);
        if query.is_empty() {
            return Ok(None);
        }
        if !is_read_only(&query) {
            return Err(NlqError::ValidationError(
                "generated query contains write operations".to_string(),
            ));
        }
        Ok(Some(query))
    }
}

/// Generates a prose answer from a question, the executed query and its
/// textual result.
pub struct ResponseGenerator {
    client: client::LlmClient,
    schema: String,
}

impl ResponseGenerator {
    pub fn new(config: &LlmConfig, schema: impl Into<String>) -> NlqResult<Self> {
        Ok(Self {
            client: client::LlmClient::new(config)?,
            schema: schema.into(),
        })
    }

    pub async fn explain(
        &self,
        question: &str,
        query: &str,
        query_result: &str,
    ) -> NlqResult<String> {
        let prompt = format!(
            "{}\n\nQuestion:\n{}\n\nQuery:\n{}\n\nQuery result:\n{}\n\nAnswer:",
            self.schema, question, query, query_result
        );
        self.client.chat(EXPLAIN_SYSTEM_PROMPT, &prompt, 512).await
    }
}

/// Strip markdown code fences the model may wrap the query in.
fn strip_fences(response: &str) -> String {
    let trimmed = response.trim();

    if let Some(start) = trimmed.find("```") {
        let after_fence = &trimmed[start + 3..];
        // Skip language tag (e.g. "cypher\n")
        let code_start = after_fence.find('\n').map(|i| i + 1).unwrap_or(0);
        if let Some(end) = after_fence[code_start..].find("```") {
            return after_fence[code_start..code_start + end].trim().to_string();
        }
    }

    trimmed
        .trim_start_matches("```cypher")
        .trim_start_matches("```")
        .trim_end_matches("```")
        .trim()
        .to_string()
}

fn is_read_only(query: &str) -> bool {
    let upper = query.to_uppercase();
    !["CREATE", "DELETE", "SET", "MERGE", "DROP", "REMOVE"]
        .iter()
        .any(|kw| upper.contains(kw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_fences_plain() {
        assert_eq!(
            strip_fences("MATCH (h:Hero) RETURN h.name"),
            "MATCH (h:Hero) RETURN h.name"
        );
    }

    #[test]
    fn test_strip_fences_with_language_tag() {
        let fenced = "```cypher\nMATCH (h:Hero) RETURN h.name\n```";
        assert_eq!(strip_fences(fenced), "MATCH (h:Hero) RETURN h.name");
    }

    #[test]
    fn test_strip_fences_bare() {
        let fenced = "```\nMATCH (n) RETURN n\n```";
        assert_eq!(strip_fences(fenced), "MATCH (n) RETURN n");
    }

    #[test]
    fn test_read_only_rejects_writes() {
        assert!(is_read_only("MATCH (h:Hero) RETURN h"));
        assert!(!is_read_only("MATCH (n) DETACH DELETE n"));
        assert!(!is_read_only("MERGE (h:Hero {name: 'x'})"));
        assert!(!is_read_only("create (n:Hero)"));
    }
}

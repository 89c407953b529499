use thiserror::Error;

/// Rule tables that fail to load must stop the process from serving:
/// an empty or inconsistent table would silently produce no recommendations.
#[derive(Debug, Error)]
pub enum RuleError {
    #[error("invalid rule configuration: {0}")]
    Configuration(String),

    #[error("failed to read rule file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("rule file is not valid JSON: {0}")]
    Serialization(#[from] serde_json::Error),
}

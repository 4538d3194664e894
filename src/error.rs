use std::path::PathBuf;
use thiserror::Error;

/// Core library errors
#[derive(Error, Debug)]
pub enum TreePrintError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error at path '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write output: {0}")]
    Output(#[source] std::io::Error),

    #[error("Node at {} has an empty label", format_node_path(.path))]
    EmptyLabel { path: Vec<usize> },

    #[error("Cycle detected: node at depth {depth} is its own ancestor")]
    Cycle { depth: usize },

    #[error("Tree is deeper than the limit of {limit} levels")]
    DepthLimitExceeded { limit: usize },

    #[error("Invalid JSON tree: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Input contains no tree")]
    EmptyInput,

    #[error("Invalid outline at line {line}: {message}")]
    Outline { line: usize, message: String },
}

/// Configuration-specific errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, TreePrintError>;

/// Renders a child-index path as `root/0/2`.
fn format_node_path(path: &[usize]) -> String {
    let mut out = String::from("root");
    for index in path {
        out.push('/');
        out.push_str(&index.to_string());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        let err = ConfigError::Invalid("max_depth must be positive".into());
        assert!(err.to_string().contains("max_depth"));
    }

    #[test]
    fn error_conversion() {
        let config_err = ConfigError::Invalid("test".into());
        let err: TreePrintError = config_err.into();
        assert!(matches!(err, TreePrintError::Config(_)));
    }

    #[test]
    fn empty_label_names_node_path() {
        let err = TreePrintError::EmptyLabel { path: vec![1, 0] };
        assert_eq!(err.to_string(), "Node at root/1/0 has an empty label");

        let err = TreePrintError::EmptyLabel { path: vec![] };
        assert_eq!(err.to_string(), "Node at root has an empty label");
    }
}

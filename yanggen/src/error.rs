//! Error types for generator orchestration.

use thiserror::Error;

use crate::config::ConfigError;
use yanggen_ir::{QueryError, WalkError};
use yanggen_schema::TreeError;

/// Error type for generation runs.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Schema tree construction error.
    #[error("schema tree error: {0}")]
    Tree(#[from] TreeError),

    /// Traversal error.
    #[error("walk error: {0}")]
    Walk(#[from] WalkError),

    /// Registry lookup error.
    #[error("query error: {0}")]
    Query(#[from] QueryError),

    /// A schema tree was supplied for a module the configuration does not
    /// name.
    #[error("module '{name}' is not configured")]
    UnknownModule {
        /// Module name of the offending tree.
        name: String,
    },
}

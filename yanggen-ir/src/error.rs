//! Error types for the walkers and registry queries.

use thiserror::Error;

/// Error type for traversal and registry construction.
///
/// Every variant is a precondition violation: the walkers are deterministic
/// functions of the input tree and configuration, so nothing here is
/// retried. A failed walk aborts generation for the module and no partial
/// registry is handed out.
#[derive(Debug, Error)]
pub enum WalkError {
    /// A field had to be attached but no ancestor struct is accepting
    /// fields at this point of the traversal.
    #[error("no enclosing struct accepts fields at '{path}'")]
    StructuralViolation {
        /// Structural path of the offending node.
        path: String,
    },

    /// Two distinct nodes produced the same struct name.
    #[error("struct name '{name}' at '{path}' collides with definition from '{previous}'")]
    StructNameCollision {
        /// The colliding struct name.
        name: String,
        /// Structural path of the second definition.
        path: String,
        /// Structural path of the first definition.
        previous: String,
    },

    /// A leaf or leaf-list node carries no type descriptor.
    #[error("node '{path}' has no type descriptor")]
    MissingTypeDescriptor {
        /// Structural path of the offending node.
        path: String,
    },
}

/// Error type for registry lookups that must succeed.
#[derive(Debug, Error)]
pub enum QueryError {
    /// An artifact file name was never recorded by the API walker.
    #[error("artifact '{file}' does not resolve to any recorded entry")]
    UnknownArtifact {
        /// The unresolvable file name.
        file: String,
    },
}

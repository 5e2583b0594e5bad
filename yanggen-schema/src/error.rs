//! Error types for schema tree construction.

use thiserror::Error;

/// Error type for tree building operations.
#[derive(Debug, Error)]
pub enum TreeError {
    /// A child was attached under a leaf or leaf-list node.
    #[error("node '{parent}' is a leaf and cannot own child '{child}'")]
    LeafParent {
        /// Structural path of the offending parent.
        parent: String,
        /// Name of the rejected child.
        child: String,
    },

    /// Two siblings share one name under the same parent.
    #[error("duplicate child '{child}' under '{parent}'")]
    DuplicateChild {
        /// Structural path of the parent (or the module for top level).
        parent: String,
        /// Duplicated child name.
        child: String,
    },

    /// A non-operation kind was passed to the operation constructor.
    #[error("'{kind}' is not an operation kind")]
    NotAnOperation {
        /// The rejected kind name.
        kind: String,
    },
}

impl TreeError {
    /// Creates a leaf-parent error.
    pub fn leaf_parent(parent: impl Into<String>, child: impl Into<String>) -> Self {
        Self::LeafParent {
            parent: parent.into(),
            child: child.into(),
        }
    }

    /// Creates a duplicate-child error.
    pub fn duplicate_child(parent: impl Into<String>, child: impl Into<String>) -> Self {
        Self::DuplicateChild {
            parent: parent.into(),
            child: child.into(),
        }
    }
}

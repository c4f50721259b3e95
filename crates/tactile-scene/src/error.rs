//! Error types for scene graph operations.

use crate::node::NodeId;
use std::fmt;

/// Errors that can occur while manipulating a [`SceneGraph`](crate::SceneGraph).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SceneError {
    /// The node does not exist (never added, or already removed).
    NodeNotFound {
        /// The missing node.
        node: NodeId,
    },

    /// Re-parenting would make a node its own ancestor.
    InvalidParent {
        /// The node being moved.
        child: NodeId,
        /// The requested parent.
        parent: NodeId,
    },

    /// A sprite was created from an empty texture identifier.
    EmptyTextureName,
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SceneError::NodeNotFound { node } => {
                write!(f, "Node not found: {:?}", node)
            }
            SceneError::InvalidParent { child, parent } => {
                write!(
                    f,
                    "Cannot attach {:?} to {:?}: the parent is inside the child's subtree",
                    child, parent
                )
            }
            SceneError::EmptyTextureName => write!(f, "Texture identifier is empty"),
        }
    }
}

impl std::error::Error for SceneError {}

/// Result type for scene graph operations.
pub type SceneResult<T> = Result<T, SceneError>;

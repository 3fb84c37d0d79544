//! Error types for forest operations.

use thiserror::Error;

/// Result type for forest operations.
pub type Result<T> = std::result::Result<T, ForestError>;

/// Caller-contract violations detected before any link is rewired.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForestError {
    #[error("invalid node id {id} (forest has {len} nodes)")]
    InvalidNodeId { id: usize, len: usize },

    #[error("nodes {0} and {1} are already connected")]
    AlreadyConnected(usize, usize),

    #[error("nodes {0} and {1} are not joined by a tree edge")]
    NotAdjacent(usize, usize),

    #[error("nodes {0} and {1} are in different trees")]
    NotConnected(usize, usize),

    #[error("operation needs two distinct nodes, got {0} twice")]
    SameNode(usize),
}

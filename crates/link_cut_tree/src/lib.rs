pub mod config;
pub mod error;
pub mod policy;
pub mod traits;

mod access;
mod forest;
mod node;
mod query;
mod splay;

pub use config::ForestConfig;
pub use error::{ForestError, Result};
pub use forest::Forest;
pub use node::NodeId;
pub use policy::{PathMonoid, PathStats, Stats};

pub use traits::{DynamicForest, PathOps};

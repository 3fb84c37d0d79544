//! Trait-based API for dynamic forest operations.

use crate::error::Result;
use crate::forest::Forest;
use crate::node::NodeId;
use crate::policy::PathMonoid;

pub trait DynamicForest: Sized {
    type Key: Copy;

    fn new(values: &[Self::Key]) -> Self;
    fn len(&self) -> usize;
    #[inline(always)]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Link `u` and `v` if they are in different components.
    fn link(&mut self, u: NodeId, v: NodeId) -> Result<()>;

    /// Cut edge `(u, v)` if it exists.
    fn cut(&mut self, u: NodeId, v: NodeId) -> Result<()>;

    fn connected(&mut self, u: NodeId, v: NodeId) -> Result<bool>;
}

pub trait PathOps: DynamicForest {
    type Agg: Copy;

    fn make_root(&mut self, v: NodeId) -> Result<()>;
    fn find_root(&mut self, v: NodeId) -> Result<NodeId>;

    fn query_path(&mut self, u: NodeId, v: NodeId) -> Result<Self::Agg>;
    fn update_node(&mut self, v: NodeId, key: Self::Key) -> Result<()>;

    fn path_len(&mut self, u: NodeId, v: NodeId) -> Result<usize>;
    fn path_kth(&mut self, u: NodeId, v: NodeId, k: usize) -> Result<Option<NodeId>>;
}

impl<P: PathMonoid> DynamicForest for Forest<P> {
    type Key = P::Key;

    fn new(values: &[Self::Key]) -> Self {
        Self::new(values)
    }

    fn len(&self) -> usize {
        self.len()
    }

    fn link(&mut self, u: NodeId, v: NodeId) -> Result<()> {
        self.link(u, v)
    }

    fn cut(&mut self, u: NodeId, v: NodeId) -> Result<()> {
        self.cut(u, v)
    }

    fn connected(&mut self, u: NodeId, v: NodeId) -> Result<bool> {
        self.is_connected(u, v)
    }
}

impl<P: PathMonoid> PathOps for Forest<P> {
    type Agg = P::Agg;

    fn make_root(&mut self, v: NodeId) -> Result<()> {
        self.make_root(v)
    }

    fn find_root(&mut self, v: NodeId) -> Result<NodeId> {
        self.find_root(v)
    }

    fn query_path(&mut self, u: NodeId, v: NodeId) -> Result<Self::Agg> {
        self.query_path(u, v)
    }

    fn update_node(&mut self, v: NodeId, key: Self::Key) -> Result<()> {
        self.update_node(v, key)
    }

    fn path_len(&mut self, u: NodeId, v: NodeId) -> Result<usize> {
        self.path_len(u, v)
    }

    fn path_kth(&mut self, u: NodeId, v: NodeId, k: usize) -> Result<Option<NodeId>> {
        self.path_kth(u, v, k)
    }
}

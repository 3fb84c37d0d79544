use tracing::{debug, trace};

use crate::config::ForestConfig;
use crate::error::{ForestError, Result};
use crate::node::{Arena, Id, NodeId};
use crate::policy::{PathMonoid, PathStats};

/// Link-Cut Tree over a forest of rooted, unordered trees (splay-based).
///
/// Generic over a `PathMonoid` policy. Every operation is amortized
/// `O(log n)`; a single call may be linear.
pub struct Forest<P: PathMonoid = PathStats> {
    arena: Arena<P>,
    config: ForestConfig,
}

impl<P: PathMonoid> Forest<P> {
    /// One isolated node per value, ids `0..values.len()`.
    pub fn new(values: &[P::Key]) -> Self {
        Self {
            arena: Arena::new(values),
            config: ForestConfig::default(),
        }
    }

    pub fn with_config(values: &[P::Key], config: ForestConfig) -> Self {
        Self {
            arena: Arena::with_capacity(values, config.capacity),
            config,
        }
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.len() == 0
    }

    pub fn config(&self) -> &ForestConfig {
        &self.config
    }

    /// Total number of splay rotations performed so far.
    pub fn rotations(&self) -> u64 {
        self.arena.rotations
    }

    /// Append a new isolated node.
    pub fn new_node(&mut self, value: P::Key) -> NodeId {
        let v = self.arena.new_node(value);
        trace!(node = v, "new node");
        v
    }

    pub fn get_value(&self, v: NodeId) -> Result<P::Key> {
        let x = self.arena.check(v)?;
        Ok(self.arena.get_value(x))
    }

    pub fn set_value(&mut self, v: NodeId, value: P::Key) -> Result<()> {
        let x = self.arena.check(v)?;
        self.arena.set_value(x, value);
        Ok(())
    }

    pub fn update_node(&mut self, v: NodeId, value: P::Key) -> Result<()> {
        self.set_value(v, value)
    }

    fn check_pair(&self, u: NodeId, v: NodeId) -> Result<(Id, Id)> {
        Ok((self.arena.check(u)?, self.arena.check(v)?))
    }

    /// Re-root `v`'s tree at `v`.
    pub fn make_root(&mut self, v: NodeId) -> Result<()> {
        let x = self.arena.check(v)?;
        self.arena.make_root(x);
        Ok(())
    }

    pub fn find_root(&mut self, v: NodeId) -> Result<NodeId> {
        let x = self.arena.check(v)?;
        Ok(self.arena.find_root(x, self.config.splay_found_root).idx())
    }

    pub fn is_connected(&mut self, u: NodeId, v: NodeId) -> Result<bool> {
        let (x, y) = self.check_pair(u, v)?;
        if x == y {
            return Ok(true);
        }
        let splay_found = self.config.splay_found_root;
        Ok(self.arena.find_root(x, splay_found) == self.arena.find_root(y, splay_found))
    }

    /// Add the tree edge `(u, v)`. `u` and `v` must be in different trees.
    pub fn link(&mut self, u: NodeId, v: NodeId) -> Result<()> {
        let (x, y) = self.check_pair(u, v)?;
        if self.is_connected(u, v)? {
            debug!(u, v, "link rejected: already connected");
            return Err(ForestError::AlreadyConnected(u, v));
        }
        self.arena.make_root(x);
        self.arena.node_mut(x).p = y;
        trace!(u, v, "link");
        Ok(())
    }

    /// Remove the tree edge `(u, v)`.
    pub fn cut(&mut self, u: NodeId, v: NodeId) -> Result<()> {
        let (x, y) = self.check_pair(u, v)?;
        if x != y {
            self.arena.make_root(x);
            self.arena.access(y);
            if self.arena.node(y).ch[0] == x && self.arena.node(x).ch[1].is_nil() {
                self.arena.node_mut(y).ch[0] = Id::NIL;
                self.arena.node_mut(x).p = Id::NIL;
                self.arena.push_up(y);
                trace!(u, v, "cut");
                return Ok(());
            }
        }
        debug!(u, v, "cut rejected: not a tree edge");
        Err(ForestError::NotAdjacent(u, v))
    }

    /// Sever `v` from its predecessor on the `u..v` path, so `u` and `v` end
    /// up in different trees.
    pub fn split(&mut self, u: NodeId, v: NodeId) -> Result<()> {
        let (x, y) = self.check_pair(u, v)?;
        if x == y {
            debug!(u, "split rejected: same node");
            return Err(ForestError::SameNode(u));
        }
        if !self.arena.expose_path(x, y) {
            debug!(u, v, "split rejected: not connected");
            return Err(ForestError::NotConnected(u, v));
        }
        let l = self.arena.node(y).ch[0];
        debug_assert!(!l.is_nil());
        self.arena.node_mut(y).ch[0] = Id::NIL;
        self.arena.node_mut(l).p = Id::NIL;
        self.arena.push_up(y);
        trace!(u, v, "split");
        Ok(())
    }

    /// Fold of the keys on the path `u..v`, in order from `u` to `v`.
    pub fn query_path(&mut self, u: NodeId, v: NodeId) -> Result<P::Agg> {
        let (x, y) = self.check_pair(u, v)?;
        if !self.arena.expose_path(x, y) {
            debug!(u, v, "path query across trees");
            return Err(ForestError::NotConnected(u, v));
        }
        Ok(self.arena.node(y).agg)
    }

    /// Number of vertices on the path `u..v`.
    pub fn path_len(&mut self, u: NodeId, v: NodeId) -> Result<usize> {
        let (x, y) = self.check_pair(u, v)?;
        if !self.arena.expose_path(x, y) {
            return Err(ForestError::NotConnected(u, v));
        }
        Ok(self.arena.node(y).sz as usize)
    }

    /// The `k`-th vertex (0-based) on the path from `u` to `v`, or `None`
    /// when the path is shorter than `k + 1`.
    pub fn path_kth(&mut self, u: NodeId, v: NodeId, mut k: usize) -> Result<Option<NodeId>> {
        let (x, y) = self.check_pair(u, v)?;
        if !self.arena.expose_path(x, y) {
            return Err(ForestError::NotConnected(u, v));
        }
        if k >= self.arena.node(y).sz as usize {
            return Ok(None);
        }
        let mut z = y;
        loop {
            self.arena.push_down(z);
            let l = self.arena.node(z).ch[0];
            let lsz = self.arena.sz(l) as usize;
            if k < lsz {
                z = l;
                continue;
            }
            if k == lsz {
                self.arena.splay(z);
                return Ok(Some(z.idx()));
            }
            k -= lsz + 1;
            z = self.arena.node(z).ch[1];
        }
    }

    /// Lowest common ancestor of `u` and `v` in the tree rooted at `root`.
    pub fn lca(&mut self, root: NodeId, u: NodeId, v: NodeId) -> Result<NodeId> {
        let r = self.arena.check(root)?;
        let (x, y) = self.check_pair(u, v)?;
        for (a, b) in [(root, u), (root, v)] {
            if !self.is_connected(a, b)? {
                return Err(ForestError::NotConnected(a, b));
            }
        }
        self.arena.make_root(r);
        self.arena.access(x);
        Ok(self.arena.access(y).idx())
    }

    /// Parent of `v` in the tree rooted at `root`; `None` for `root` itself.
    pub fn parent(&mut self, root: NodeId, v: NodeId) -> Result<Option<NodeId>> {
        let (r, y) = self.check_pair(root, v)?;
        if !self.arena.expose_path(r, y) {
            return Err(ForestError::NotConnected(root, v));
        }
        // Predecessor of `y` in the exposed path: rightmost node of its left subtree.
        let mut z = self.arena.node(y).ch[0];
        if z.is_nil() {
            return Ok(None);
        }
        loop {
            self.arena.push_down(z);
            let next = self.arena.node(z).ch[1];
            if next.is_nil() {
                break;
            }
            z = next;
        }
        self.arena.splay(z);
        Ok(Some(z.idx()))
    }
}

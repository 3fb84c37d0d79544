use crate::error::{ForestError, Result};
use crate::policy::PathMonoid;

/// Public handle of a forest node: its position in the arena.
pub type NodeId = usize;

#[repr(transparent)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Id(u32);

impl Id {
    pub(crate) const NIL: Self = Self(u32::MAX);

    #[inline(always)]
    pub(crate) fn is_nil(self) -> bool {
        self.0 == u32::MAX
    }

    #[inline(always)]
    pub(crate) fn idx(self) -> usize {
        self.0 as usize
    }
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct Node<P: PathMonoid> {
    /// Left / right child inside the current splay tree.
    pub(crate) ch: [Id; 2],
    /// Splay parent or path-parent; `is_root` tells them apart.
    pub(crate) p: Id,
    pub(crate) rev: bool,

    pub(crate) key: P::Key,
    pub(crate) agg: P::Agg,
    pub(crate) agg_rev: P::Agg,
    pub(crate) sz: u32,
}

impl<P: PathMonoid> Node<P> {
    fn new(key: P::Key) -> Self {
        let agg = P::agg_from_key(&key);
        Self {
            ch: [Id::NIL, Id::NIL],
            p: Id::NIL,
            rev: false,
            key,
            agg,
            agg_rev: agg,
            sz: 1,
        }
    }
}

/// Append-only node storage. Every cross-reference is an `Id` into `nodes`.
pub(crate) struct Arena<P: PathMonoid> {
    nodes: Vec<Node<P>>,
    /// Scratch buffer for the ancestor chain in `splay`.
    pub(crate) stack: Vec<Id>,
    pub(crate) rotations: u64,
}

impl<P: PathMonoid> Arena<P> {
    pub(crate) fn new(values: &[P::Key]) -> Self {
        Self::with_capacity(values, 0)
    }

    /// Like `new`, with room for `extra` more nodes before reallocating.
    pub(crate) fn with_capacity(values: &[P::Key], extra: usize) -> Self {
        let mut nodes = Vec::with_capacity(values.len() + extra);
        for &v in values {
            debug_assert!(nodes.len() < u32::MAX as usize);
            nodes.push(Node::<P>::new(v));
        }
        Self {
            nodes,
            stack: Vec::with_capacity(values.len()),
            rotations: 0,
        }
    }

    #[inline(always)]
    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) fn new_node(&mut self, key: P::Key) -> NodeId {
        assert!(
            self.nodes.len() < u32::MAX as usize,
            "arena is limited to u32::MAX - 1 nodes"
        );
        self.nodes.push(Node::<P>::new(key));
        self.nodes.len() - 1
    }

    /// Turns a caller-supplied id into an internal one.
    #[inline]
    pub(crate) fn check(&self, v: NodeId) -> Result<Id> {
        if v < self.nodes.len() {
            Ok(Id(v as u32))
        } else {
            Err(ForestError::InvalidNodeId {
                id: v,
                len: self.nodes.len(),
            })
        }
    }

    #[inline(always)]
    pub(crate) fn node(&self, x: Id) -> &Node<P> {
        debug_assert!(!x.is_nil());
        debug_assert!(x.idx() < self.nodes.len());
        if cfg!(debug_assertions) {
            &self.nodes[x.idx()]
        } else {
            // SAFETY: `Id` values only come from `check` or from links between
            // existing nodes, and nodes are never removed.
            unsafe { self.nodes.get_unchecked(x.idx()) }
        }
    }

    #[inline(always)]
    pub(crate) fn node_mut(&mut self, x: Id) -> &mut Node<P> {
        debug_assert!(!x.is_nil());
        debug_assert!(x.idx() < self.nodes.len());
        if cfg!(debug_assertions) {
            &mut self.nodes[x.idx()]
        } else {
            // SAFETY: see `node`.
            unsafe { self.nodes.get_unchecked_mut(x.idx()) }
        }
    }

    #[inline(always)]
    pub(crate) fn sz(&self, x: Id) -> u32 {
        if x.is_nil() { 0 } else { self.node(x).sz }
    }

    #[inline(always)]
    pub(crate) fn agg(&self, x: Id) -> P::Agg {
        if x.is_nil() {
            P::agg_unit()
        } else {
            self.node(x).agg
        }
    }

    #[inline(always)]
    pub(crate) fn agg_rev(&self, x: Id) -> P::Agg {
        if x.is_nil() {
            P::agg_unit()
        } else {
            self.node(x).agg_rev
        }
    }

    /// Key of `x`. Lazy flags never touch keys, so no splay is needed.
    pub(crate) fn get_value(&self, x: Id) -> P::Key {
        self.node(x).key
    }

    /// Overwrite the key of `x` and refresh aggregates.
    pub(crate) fn set_value(&mut self, x: Id, key: P::Key) {
        self.splay(x);
        self.node_mut(x).key = key;
        self.push_up(x);
    }
}

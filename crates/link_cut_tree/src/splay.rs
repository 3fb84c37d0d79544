//! Splay engine over the arena: rotations, lazy reversal and aggregate upkeep.
//!
//! A reversal flag on `x` means `x`'s own children are already swapped (and
//! `agg`/`agg_rev` exchanged) but its children still owe the same treatment.

use crate::node::{Arena, Id};
use crate::policy::PathMonoid;

impl<P: PathMonoid> Arena<P> {
    /// `x` is the root of its splay tree, i.e. its parent link (if any) is a path-parent.
    #[inline]
    pub(crate) fn is_root(&self, x: Id) -> bool {
        let p = self.node(x).p;
        if p.is_nil() {
            return true;
        }
        self.node(p).ch[0] != x && self.node(p).ch[1] != x
    }

    pub(crate) fn apply_rev(&mut self, x: Id) {
        if x.is_nil() {
            return;
        }
        let nx = self.node_mut(x);
        nx.ch.swap(0, 1);
        if !P::REVERSAL_INVARIANT {
            std::mem::swap(&mut nx.agg, &mut nx.agg_rev);
        }
        nx.rev ^= true;
    }

    pub(crate) fn push_down(&mut self, x: Id) {
        if x.is_nil() {
            return;
        }
        let (rev, l, r) = {
            let nx = self.node(x);
            (nx.rev, nx.ch[0], nx.ch[1])
        };
        if rev {
            self.apply_rev(l);
            self.apply_rev(r);
            self.node_mut(x).rev = false;
        }
    }

    pub(crate) fn push_up(&mut self, x: Id) {
        if x.is_nil() {
            return;
        }
        let (l, r, key) = {
            let nx = self.node(x);
            (nx.ch[0], nx.ch[1], nx.key)
        };
        let sz = 1_u32.wrapping_add(self.sz(l)).wrapping_add(self.sz(r));
        let agg = P::agg_merge(&self.agg(l), &key, &self.agg(r));
        let agg_rev = if P::REVERSAL_INVARIANT {
            agg
        } else {
            P::agg_merge(&self.agg_rev(r), &key, &self.agg_rev(l))
        };
        let nx = self.node_mut(x);
        nx.sz = sz;
        nx.agg = agg;
        nx.agg_rev = agg_rev;
    }

    /// Rotate `x` above its splay parent. Both must already be pushed.
    fn rotate(&mut self, x: Id) {
        let p = self.node(x).p;
        let g = self.node(p).p;

        let dir = usize::from(self.node(p).ch[1] == x);
        let b = self.node(x).ch[dir ^ 1];

        if !self.is_root(p) {
            if self.node(g).ch[0] == p {
                self.node_mut(g).ch[0] = x;
            } else {
                self.node_mut(g).ch[1] = x;
            }
        }
        // When `p` was a splay root, `g` is its path-parent and `x` inherits it.
        self.node_mut(x).p = g;

        self.node_mut(x).ch[dir ^ 1] = p;
        self.node_mut(p).p = x;

        self.node_mut(p).ch[dir] = b;
        if !b.is_nil() {
            self.node_mut(b).p = p;
        }

        self.push_up(p);
        self.push_up(x);
        self.rotations += 1;
    }

    /// Resolve pending reversals from the splay root down to `x`.
    fn push_path(&mut self, x: Id) {
        let mut stack = std::mem::take(&mut self.stack);
        stack.clear();
        let mut y = x;
        stack.push(y);
        while !self.is_root(y) {
            y = self.node(y).p;
            stack.push(y);
        }
        for &v in stack.iter().rev() {
            self.push_down(v);
        }
        self.stack = stack;
    }

    pub(crate) fn splay(&mut self, x: Id) {
        self.push_path(x);

        while !self.is_root(x) {
            let p = self.node(x).p;
            if !self.is_root(p) {
                let g = self.node(p).p;
                let zigzig = (self.node(g).ch[0] == p) == (self.node(p).ch[0] == x);
                if zigzig {
                    self.rotate(p);
                } else {
                    self.rotate(x);
                }
            }
            self.rotate(x);
        }
    }
}

use crate::node::{Arena, Id};
use crate::policy::PathMonoid;

impl<P: PathMonoid> Arena<P> {
    /// Expose the root-to-`x` path as a single splay tree rooted at `x`.
    ///
    /// Returns the last preferred path the walk joined. Right after
    /// `access(u)` this is the LCA of `u` and `x`.
    pub(crate) fn access(&mut self, x: Id) -> Id {
        let mut last = Id::NIL;
        let mut y = x;
        while !y.is_nil() {
            self.splay(y);
            self.node_mut(y).ch[1] = last;
            if !last.is_nil() {
                self.node_mut(last).p = y;
            }
            self.push_up(y);
            last = y;
            y = self.node(y).p;
        }
        self.splay(x);
        last
    }

    /// Re-root the represented tree at `x`.
    pub(crate) fn make_root(&mut self, x: Id) {
        self.access(x);
        self.apply_rev(x);
    }

    /// Leftmost node of `x`'s represented tree after exposing it.
    pub(crate) fn find_root(&mut self, x: Id, splay_found: bool) -> Id {
        self.access(x);
        let mut y = x;
        self.push_down(y);
        while !self.node(y).ch[0].is_nil() {
            y = self.node(y).ch[0];
            self.push_down(y);
        }
        if splay_found {
            self.splay(y);
        }
        y
    }

    /// Make `x` the represented root and expose `x..y`. Returns `false`
    /// (leaving `y` exposed alone) when they are in different trees.
    pub(crate) fn expose_path(&mut self, x: Id, y: Id) -> bool {
        self.make_root(x);
        self.access(y);
        x == y || !self.node(x).p.is_nil()
    }
}

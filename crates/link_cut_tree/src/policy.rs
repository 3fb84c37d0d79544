//! Aggregate policies (monoids over path keys) for [`Forest`](crate::Forest).
//!
//! A policy decides what a node caches about its splay subtree. Several
//! reducers at once are expressed as one tuple-valued monoid, see [`PathStats`].

/// A monoid over `Key`.
///
/// `Agg` represents an aggregate over an *ordered* sequence of keys, and
/// `agg_unit()` must be neutral in `agg_merge`.
pub trait PathMonoid {
    type Key: Copy;
    type Agg: Copy;

    /// Whether the aggregate is invariant under sequence reversal.
    ///
    /// If `false`, nodes also maintain a reverse-order aggregate so that
    /// `make_root` keeps folds correct.
    const REVERSAL_INVARIANT: bool;

    fn agg_unit() -> Self::Agg;
    fn agg_from_key(key: &Self::Key) -> Self::Agg;

    /// Merge aggregates as `left + [key] + right`.
    fn agg_merge(left: &Self::Agg, key: &Self::Key, right: &Self::Agg) -> Self::Agg;
}

/// Sum, min, max and xor of a path, computed together.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stats {
    pub sum: i64,
    pub min: i64,
    pub max: i64,
    pub xor: i64,
}

#[derive(Clone, Copy, Debug)]
pub enum PathStats {}

impl PathMonoid for PathStats {
    type Key = i64;
    type Agg = Stats;

    const REVERSAL_INVARIANT: bool = true;

    #[inline(always)]
    fn agg_unit() -> Self::Agg {
        Stats {
            sum: 0,
            min: i64::MAX,
            max: i64::MIN,
            xor: 0,
        }
    }

    #[inline(always)]
    fn agg_from_key(key: &Self::Key) -> Self::Agg {
        Stats {
            sum: *key,
            min: *key,
            max: *key,
            xor: *key,
        }
    }

    #[inline(always)]
    fn agg_merge(left: &Self::Agg, key: &Self::Key, right: &Self::Agg) -> Self::Agg {
        Stats {
            sum: left.sum.wrapping_add(*key).wrapping_add(right.sum),
            min: left.min.min(*key).min(right.min),
            max: left.max.max(*key).max(right.max),
            xor: left.xor ^ *key ^ right.xor,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub enum PathSum {}

impl PathMonoid for PathSum {
    type Key = i64;
    type Agg = i64;

    const REVERSAL_INVARIANT: bool = true;

    #[inline(always)]
    fn agg_unit() -> Self::Agg {
        0
    }

    #[inline(always)]
    fn agg_from_key(key: &Self::Key) -> Self::Agg {
        *key
    }

    #[inline(always)]
    fn agg_merge(left: &Self::Agg, key: &Self::Key, right: &Self::Agg) -> Self::Agg {
        left.wrapping_add(*key).wrapping_add(*right)
    }
}

#[derive(Clone, Copy, Debug)]
pub enum PathMin {}

impl PathMonoid for PathMin {
    type Key = i64;
    type Agg = i64;

    const REVERSAL_INVARIANT: bool = true;

    #[inline(always)]
    fn agg_unit() -> Self::Agg {
        i64::MAX
    }

    #[inline(always)]
    fn agg_from_key(key: &Self::Key) -> Self::Agg {
        *key
    }

    #[inline(always)]
    fn agg_merge(left: &Self::Agg, key: &Self::Key, right: &Self::Agg) -> Self::Agg {
        (*left).min(*key).min(*right)
    }
}

#[derive(Clone, Copy, Debug)]
pub enum PathMax {}

impl PathMonoid for PathMax {
    type Key = i64;
    type Agg = i64;

    const REVERSAL_INVARIANT: bool = true;

    #[inline(always)]
    fn agg_unit() -> Self::Agg {
        i64::MIN
    }

    #[inline(always)]
    fn agg_from_key(key: &Self::Key) -> Self::Agg {
        *key
    }

    #[inline(always)]
    fn agg_merge(left: &Self::Agg, key: &Self::Key, right: &Self::Agg) -> Self::Agg {
        (*left).max(*key).max(*right)
    }
}

#[derive(Clone, Copy, Debug)]
pub enum PathXor {}

impl PathMonoid for PathXor {
    type Key = i64;
    type Agg = i64;

    const REVERSAL_INVARIANT: bool = true;

    #[inline(always)]
    fn agg_unit() -> Self::Agg {
        0
    }

    #[inline(always)]
    fn agg_from_key(key: &Self::Key) -> Self::Agg {
        *key
    }

    #[inline(always)]
    fn agg_merge(left: &Self::Agg, key: &Self::Key, right: &Self::Agg) -> Self::Agg {
        left ^ key ^ right
    }
}

#[inline(always)]
fn affine_compose(f: (i64, i64), g: (i64, i64)) -> (i64, i64) {
    // f ∘ g
    // (a_f, b_f) ∘ (a_g, b_g) = (a_f*a_g, a_f*b_g + b_f)
    (
        f.0.wrapping_mul(g.0),
        f.0.wrapping_mul(g.1).wrapping_add(f.1),
    )
}

/// Composition of affine maps `x -> a*x + b` along a path, first vertex applied first.
#[derive(Clone, Copy, Debug)]
pub enum PathComposite {}

impl PathMonoid for PathComposite {
    type Key = (i64, i64);
    type Agg = (i64, i64);

    const REVERSAL_INVARIANT: bool = false;

    #[inline(always)]
    fn agg_unit() -> Self::Agg {
        (1, 0)
    }

    #[inline(always)]
    fn agg_from_key(key: &Self::Key) -> Self::Agg {
        *key
    }

    #[inline(always)]
    fn agg_merge(left: &Self::Agg, key: &Self::Key, right: &Self::Agg) -> Self::Agg {
        // Sequence: left + [key] + right
        // Composite: right ∘ key ∘ left
        let tmp = affine_compose(*key, *left);
        affine_compose(*right, tmp)
    }
}

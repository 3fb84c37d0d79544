use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const SIZES: [usize; 4] = [1_024, 4_096, 16_384, 65_536];
pub const OPS_PER_SIZE: usize = 5_000;
pub const VALUE_RANGE: std::ops::RangeInclusive<i64> = -1_000_000_000..=1_000_000_000;

const SEED_MIX: u64 = 0x9E37_79B9_7F4A_7C15;

fn mix_seed(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

fn rng_for(kind: u64, size: usize) -> StdRng {
    let seed = bench::default_seed()
        ^ (kind.wrapping_mul(SEED_MIX))
        ^ (size as u64).wrapping_mul(SEED_MIX.rotate_left(17));
    StdRng::seed_from_u64(mix_seed(seed))
}

fn generate_values(rng: &mut impl Rng, n: usize) -> Vec<i64> {
    (0..n).map(|_| rng.random_range(VALUE_RANGE)).collect()
}

#[derive(Clone, Copy, Debug)]
pub enum ConnOp {
    Link { u: usize, v: usize },
    Cut { u: usize, v: usize },
    Connected { u: usize, v: usize },
}

#[derive(Clone, Copy, Debug)]
pub enum PathOp {
    Update { v: usize, key: i64 },
    Query { u: usize, v: usize },
    Split { u: usize, v: usize },
    Link { u: usize, v: usize },
}

#[derive(Clone, Debug)]
pub struct Case<Op> {
    pub values: Vec<i64>,
    pub edges: Vec<(usize, usize)>,
    pub ops: Vec<Op>,
}

/// Component bookkeeping used only to emit valid operation sequences.
struct ForestState {
    n: usize,
    adj: Vec<Vec<usize>>,
    comp_id: Vec<usize>,
    comps: Vec<Vec<usize>>,
    edges: Vec<(usize, usize)>,
}

impl ForestState {
    fn new(n: usize) -> Self {
        Self {
            n,
            adj: vec![Vec::new(); n],
            comp_id: (0..n).collect(),
            comps: (0..n).map(|i| vec![i]).collect(),
            edges: Vec::new(),
        }
    }

    fn with_random_tree(rng: &mut impl Rng, n: usize) -> Self {
        let mut state = Self::new(n);
        for i in 1..n {
            let parent = rng.random_range(0..i);
            state.link(i, parent);
        }
        state
    }

    fn link(&mut self, u: usize, v: usize) {
        debug_assert!(self.comp_id[u] != self.comp_id[v]);
        self.adj[u].push(v);
        self.adj[v].push(u);
        self.edges.push((u, v));
        let mut a = self.comp_id[u];
        let mut b = self.comp_id[v];
        if self.comps[a].len() < self.comps[b].len() {
            std::mem::swap(&mut a, &mut b);
        }
        let moved = std::mem::take(&mut self.comps[b]);
        for x in moved {
            self.comp_id[x] = a;
            self.comps[a].push(x);
        }
    }

    fn remove_edge(&mut self, u: usize, v: usize) {
        for (a, b) in [(u, v), (v, u)] {
            let pos = self.adj[a].iter().position(|&x| x == b);
            debug_assert!(pos.is_some(), "edge not found in adjacency");
            if let Some(pos) = pos {
                self.adj[a].swap_remove(pos);
            }
        }
        if let Some(pos) = self
            .edges
            .iter()
            .position(|&e| e == (u, v) || e == (v, u))
        {
            self.edges.swap_remove(pos);
        }

        // Relabel the side of `u` by DFS.
        let old = self.comp_id[u];
        let new_id = self.comps.len();
        let mut side = vec![u];
        let mut stack = vec![u];
        self.comp_id[u] = new_id;
        while let Some(x) = stack.pop() {
            for i in 0..self.adj[x].len() {
                let to = self.adj[x][i];
                if self.comp_id[to] == old {
                    self.comp_id[to] = new_id;
                    side.push(to);
                    stack.push(to);
                }
            }
        }
        self.comps[old].retain(|&x| self.comp_id[x] == old);
        self.comps.push(side);
    }

    fn path(&self, s: usize, t: usize) -> Vec<usize> {
        let mut par = vec![usize::MAX; self.n];
        let mut stack = vec![s];
        par[s] = s;
        while let Some(x) = stack.pop() {
            if x == t {
                break;
            }
            for &to in &self.adj[x] {
                if par[to] == usize::MAX {
                    par[to] = x;
                    stack.push(to);
                }
            }
        }
        let mut path = vec![t];
        let mut cur = t;
        while cur != s {
            cur = par[cur];
            path.push(cur);
        }
        path.reverse();
        path
    }

    fn random_vertex(&self, rng: &mut impl Rng, comp: usize) -> usize {
        let list = &self.comps[comp];
        list[rng.random_range(0..list.len())]
    }

    fn random_cross_pair(&self, rng: &mut impl Rng) -> Option<(usize, usize)> {
        for _ in 0..100 {
            let u = rng.random_range(0..self.n);
            let v = rng.random_range(0..self.n);
            if self.comp_id[u] != self.comp_id[v] {
                return Some((u, v));
            }
        }
        None
    }
}

pub fn generate_connectivity_case(n: usize) -> Case<ConnOp> {
    let mut rng = rng_for(1, n);
    let values = vec![0_i64; n];
    let mut state = ForestState::with_random_tree(&mut rng, n);
    for _ in 0..n / 4 {
        let (u, v) = state.edges[rng.random_range(0..state.edges.len())];
        state.remove_edge(u, v);
    }
    let edges = state.edges.clone();

    let mut ops = Vec::with_capacity(OPS_PER_SIZE);
    for _ in 0..OPS_PER_SIZE {
        let roll = rng.random_range(0..100_u32);
        let u = rng.random_range(0..n);
        let v = rng.random_range(0..n);
        if roll < 50 {
            ops.push(ConnOp::Connected { u, v });
        } else if roll < 75 {
            match state.random_cross_pair(&mut rng) {
                Some((u, v)) => {
                    state.link(u, v);
                    ops.push(ConnOp::Link { u, v });
                }
                None => ops.push(ConnOp::Connected { u, v }),
            }
        } else if state.edges.is_empty() {
            ops.push(ConnOp::Connected { u, v });
        } else {
            let (u, v) = state.edges[rng.random_range(0..state.edges.len())];
            state.remove_edge(u, v);
            ops.push(ConnOp::Cut { u, v });
        }
    }

    Case { values, edges, ops }
}

pub fn generate_path_case(n: usize) -> Case<PathOp> {
    let mut rng = rng_for(2, n);
    let values = generate_values(&mut rng, n);
    let mut state = ForestState::with_random_tree(&mut rng, n);
    let edges = state.edges.clone();

    let mut ops = Vec::with_capacity(OPS_PER_SIZE);
    for _ in 0..OPS_PER_SIZE {
        let roll = rng.random_range(0..100_u32);
        if roll < 30 {
            let v = rng.random_range(0..n);
            let key = rng.random_range(VALUE_RANGE);
            ops.push(PathOp::Update { v, key });
        } else if roll < 70 {
            let c = state.comp_id[rng.random_range(0..n)];
            let u = state.random_vertex(&mut rng, c);
            let v = state.random_vertex(&mut rng, c);
            ops.push(PathOp::Query { u, v });
        } else {
            // split a random path, then reconnect the two halves elsewhere
            let c = state.comp_id[rng.random_range(0..n)];
            let u = state.random_vertex(&mut rng, c);
            let v = state.random_vertex(&mut rng, c);
            if u == v {
                ops.push(PathOp::Query { u, v });
                continue;
            }
            let path = state.path(u, v);
            state.remove_edge(path[path.len() - 2], v);
            ops.push(PathOp::Split { u, v });
            let (cu, cv) = (state.comp_id[u], state.comp_id[v]);
            let a = state.random_vertex(&mut rng, cu);
            let b = state.random_vertex(&mut rng, cv);
            state.link(a, b);
            ops.push(PathOp::Link { u: a, v: b });
        }
    }

    Case { values, edges, ops }
}

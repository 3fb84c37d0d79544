//! Construction-time knobs for [`Forest`](crate::Forest).

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ForestConfig {
    /// Extra arena slots reserved for nodes added later with `new_node`.
    pub capacity: usize,
    /// Splay the found root back up in `find_root`.
    ///
    /// Turning this off keeps answers correct but loses the amortized bound.
    pub splay_found_root: bool,
}

impl Default for ForestConfig {
    fn default() -> Self {
        Self {
            capacity: 0,
            splay_found_root: true,
        }
    }
}

impl ForestConfig {
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn with_splay_found_root(mut self, on: bool) -> Self {
        self.splay_found_root = on;
        self
    }
}

use crate::error::Result;
use crate::forest::Forest;
use crate::node::NodeId;
use crate::policy::{PathStats, Stats};

impl Forest<PathStats> {
    pub fn query_path_stats(&mut self, u: NodeId, v: NodeId) -> Result<Stats> {
        self.query_path(u, v)
    }

    pub fn query_path_sum(&mut self, u: NodeId, v: NodeId) -> Result<i64> {
        self.query_path(u, v).map(|s| s.sum)
    }

    pub fn query_path_min(&mut self, u: NodeId, v: NodeId) -> Result<i64> {
        self.query_path(u, v).map(|s| s.min)
    }

    pub fn query_path_max(&mut self, u: NodeId, v: NodeId) -> Result<i64> {
        self.query_path(u, v).map(|s| s.max)
    }

    pub fn query_path_xor(&mut self, u: NodeId, v: NodeId) -> Result<i64> {
        self.query_path(u, v).map(|s| s.xor)
    }
}

pub mod dijkstra;
pub mod a_star;
pub mod heuristics;
mod path;

pub use path::{Path, PathResult};
use path::shortest_path;

use crate::collections::FxIndexMap;
use crate::graph::NodeIndex;

/// Search record shared by Dijkstra and A*
/// Keyed by the graph index of each discovered node
/// The tuple contains (parent_position, cost) where:
/// - parent_position is the position of the parent entry in this map, NO_PARENT for the start node
/// - cost is the best accumulated cost found so far from the start
pub(crate) type GraphNodeMap<C> = FxIndexMap<NodeIndex, (usize, C)>;

/// Parent marker of the start node
pub(crate) const NO_PARENT: usize = usize::MAX;

/// Result of one frontier traversal
pub(crate) struct SearchRecord<C> {
    pub(crate) node_map: GraphNodeMap<C>,
    pub(crate) goal: Option<(usize, C)>, // position and accumulated cost of the goal entry
    pub(crate) expanded: usize, // nodes whose connections were relaxed
    pub(crate) stale: usize, // outdated frontier entries popped and skipped
}

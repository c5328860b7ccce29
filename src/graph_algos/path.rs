use super::GraphNodeMap;
use crate::graph::Graph;

use std::{hash::Hash, fmt::Debug};


/// Path from start to goal, both inclusive
#[derive(Clone, Debug, PartialEq)]
pub struct Path<N, C> {
    pub nodes: Vec<N>,
    pub cost: C, // sum of connection costs along nodes
}

/// Outcome of a search
/// An unreachable goal is a normal outcome, distinct from a zero cost path
#[derive(Clone, Debug, PartialEq)]
pub enum PathResult<N, C> {
    Found(Path<N, C>),
    NotFound,
}

impl<N, C: Copy> PathResult<N, C> {

    pub fn is_found(&self) -> bool {
        matches!(self, PathResult::Found(_))
    }

    pub fn path(&self) -> Option<&Path<N, C>> {
        match self {
            PathResult::Found(path) => Some(path),
            PathResult::NotFound => None,
        }
    }

    pub fn cost(&self) -> Option<C> {
        self.path().map(|path| path.cost)
    }

    pub fn into_path(self) -> Option<Path<N, C>> {
        match self {
            PathResult::Found(path) => Some(path),
            PathResult::NotFound => None,
        }
    }
}


/// Construct the shortest path from the goal node back to the start node
/// Returns the ordered node ids from start to goal
/// node_map: search record, parent links are positions in the same map
/// goal_position: position of the goal node in the node_map
pub(crate) fn shortest_path<N, C>(graph: &Graph<N, C>, node_map: &GraphNodeMap<C>, goal_position: usize) -> Vec<N>
where
    N: Eq + Hash + Clone + Debug,
{

    let mut path = Vec::new();
    let mut current_position = goal_position;

    // Trace back from goal to start, the start entry points at NO_PARENT which is never a valid position
    while let Some((&node_index, &(parent_position, _))) = node_map.get_index(current_position) {
        path.push(graph.node_at(node_index).id().clone());
        current_position = parent_position;
    }

    // The path is in reverse order, so reverse it
    path.reverse();
    path
}

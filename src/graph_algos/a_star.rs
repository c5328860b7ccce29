use crate::errors::PathPlannerError;
use crate::collections::FxIndexMap;
use crate::graph::{Graph, NodeIndex, PathCost};
use super::heuristics::Heuristic;
use super::{shortest_path, GraphNodeMap, Path, PathResult, SearchRecord, NO_PARENT};

use std::{
    collections::BinaryHeap, 
    hash::Hash, 
    fmt::Debug,
    cmp::Ordering
};
use num_traits::Zero;
use indexmap::map::Entry::{Occupied, Vacant};
use log::{debug, trace};



/// Frontier entry of the A* open list
#[derive(Debug)]
struct OpenNode<T> {
    index: usize, // position in the closed_list
    cost: T, // Cost to reach this node
    f_cost: T, // Total cost = cost + h(n) aka estimated cost
}

impl<T: Ord> Ord for OpenNode<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.f_cost.cmp(&self.f_cost)
    }
}
impl<T: Ord> PartialOrd for OpenNode<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<T: PartialEq> PartialEq for OpenNode<T> {
    fn eq(&self, other: &Self) -> bool {
        self.f_cost == other.f_cost
    }
}
impl<T: PartialEq> Eq for OpenNode<T> {}

/// A* Algorithm
/// https://en.wikipedia.org/wiki/A*_search_algorithm
/// Holds the heuristic strategy, the planner itself keeps no state between calls
#[derive(Clone, Debug, Default)]
pub struct AStar<H> {
    heuristic: H,
}

impl<H> AStar<H> {

    pub fn new(heuristic: H) -> Self {
        Self { heuristic }
    }

    pub fn heuristic(&self) -> &H {
        &self.heuristic
    }

    /// From start node, traverse through the graph until the goal node is expanded
    /// The returned cost is only guaranteed minimal when the heuristic is
    /// admissible (never overestimates the true cost to reach the goal) and
    /// consistent (h(a) <= cost(a, b) + h(b) along every connection)
    pub fn plan<N, C>(&self, graph: &Graph<N, C>, start: &N, goal: &N) -> Result<PathResult<N, C>, PathPlannerError>
    where 
        N: Eq + Hash + Clone + Debug,
        C: PathCost,
        H: Heuristic<N, C>,
        {

        let start_index = graph.resolve(start)?;
        let goal_index = graph.resolve(goal)?;
        debug!("Running A* from {start:?} to {goal:?}");

        // build_a_star_graph
        let record = self.build_graph(graph, start_index, goal_index);

        // Return the shortest path
        match record.goal {
            Some((goal_position, cost)) => {
                let nodes = shortest_path(graph, &record.node_map, goal_position);
                debug!("A* found a path of {} nodes, cost {cost:?}", nodes.len());
                Ok(PathResult::Found(Path { nodes, cost }))
            }
            None => {
                debug!("A* found no path from {start:?} to {goal:?}");
                Ok(PathResult::NotFound)
            }
        }
    }


    /// Traverses the graph using A* algorithm 
    /// Returns the search record along with the position and accumulated cost of the goal entry
    fn build_graph<N, C>(&self, graph: &Graph<N, C>, start: NodeIndex, goal: NodeIndex) -> SearchRecord<C>
    where 
        N: Eq + Hash + Clone + Debug,
        C: PathCost,
        H: Heuristic<N, C>,
    {
        let goal_node = graph.node_at(goal);

        // Open List
        // Nodes that need to be evaluated, implemented as priority queue
        // Sorting is done by f_cost (cost + heuristic)
        let mut open_list: BinaryHeap<OpenNode<C>> = BinaryHeap::new();

        // Discovered nodes with the best accumulated cost found so far
        // Only the accumulated cost is recorded, the heuristic inflated f_cost lives in the open list
        // The tuple contains (parent_position, cost), the start node has NO_PARENT
        let mut closed_list: GraphNodeMap<C> = FxIndexMap::default();

        // Add the start node to both open & closed list
        let start_position = closed_list.insert_full(start, (NO_PARENT, Zero::zero())).0;
        open_list.push(OpenNode{
            index: start_position,
            cost: Zero::zero(), // This is the cost from the start node
            f_cost: self.heuristic.estimate(graph.node_at(start), goal_node),
        });

        let mut expanded = 0usize;
        let mut stale = 0usize;

        while let Some(OpenNode{index, cost, ..}) = open_list.pop() {

            // fetch current best cost for node, open list positions always come from closed_list
            let Some((&node_index, &(_, c))) = closed_list.get_index(index) else {
                continue;
            };

            // If cost of new node from BinaryHeap is higher than the best cost, skip it
            // This implies we've already found a better path to this node
            // h(n) is fixed per node so this is the same as comparing f_cost
            if cost > c {
                trace!("Skipping stale entry for node {} at cost {cost:?}", node_index.index());
                stale += 1;
                continue;
            }

            // Check if we've reached the goal
            if node_index == goal {
                debug!("A* reached the goal after {expanded} expansions, {stale} stale entries skipped");
                return SearchRecord { node_map: closed_list, goal: Some((index, c)), expanded, stale };
            }

            expanded += 1;

            // loop over neighbors
            for connection in graph.node_at(node_index).connections() {

                // new cost to reach this node = edge cost + node cost
                // This is confirmed cost, not heuristic
                // a sum that overflows the cost type can't be the cheaper route
                let Some(new_cost) = c.checked_sum(connection.cost()) else {
                    trace!("Cost overflow reaching node {} from node {}", connection.to().index(), node_index.index());
                    continue;
                };

                let neighbor_position: usize;

                match closed_list.entry(connection.to()) {
                    Vacant(e) => {
                        // This is the first time we're seeing this neighbor
                        neighbor_position = e.index();
                        e.insert((index, new_cost));
                    }
                    Occupied(mut e) => {
                        if e.get().1 > new_cost {
                            // We've found a better path to this neighbor
                            neighbor_position = e.index();
                            e.insert((index, new_cost));
                        } else {
                            // The existing path is better or equal, do nothing
                            continue;
                        }
                    }
                }

                // calculate heuristic cost
                // an estimate too large to add is dropped, underestimating keeps the ordering admissible
                let h_cost: C = self.heuristic.estimate(graph.node_at(connection.to()), goal_node);
                let f_cost = new_cost.checked_sum(h_cost).unwrap_or(new_cost);
                
                // Only add to the queue if we've found a better path
                open_list.push(OpenNode {
                    index: neighbor_position,
                    cost: new_cost,
                    f_cost,
                });
            }
        }

        debug!("A* exhausted the open list after {expanded} expansions, {stale} stale entries skipped");
        SearchRecord { node_map: closed_list, goal: None, expanded, stale }
    }
}


/// Shorthand for AStar::new(heuristic).plan(graph, start, goal)
pub fn a_star<N, C, H>(graph: &Graph<N, C>, start: &N, goal: &N, heuristic: H) -> Result<PathResult<N, C>, PathPlannerError>
where 
    N: Eq + Hash + Clone + Debug,
    C: PathCost,
    H: Heuristic<N, C>,
{
    AStar::new(heuristic).plan(graph, start, goal)
}

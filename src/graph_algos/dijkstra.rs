use crate::errors::PathPlannerError;
use crate::collections::FxIndexMap;
use crate::graph::{Graph, NodeIndex, PathCost};
use super::{shortest_path, GraphNodeMap, Path, PathResult, SearchRecord, NO_PARENT};

use std::{collections::BinaryHeap, hash::Hash, cmp::Ordering, fmt::Debug};
use num_traits::Zero;
use indexmap::map::Entry::{Occupied, Vacant};
use log::{debug, trace};




/// Identify the shortest path using Dijkstra's Algorithm
/// https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
/// From start node, traverse through the graph until the goal node is expanded
/// Fails only if start or goal are not part of the graph
pub fn dijkstra<N, C>(graph: &Graph<N, C>, start: &N, goal: &N) -> Result<PathResult<N, C>, PathPlannerError>
where 
    N: Eq + Hash + Clone + Debug,
    C: PathCost,
    {

    let start_index = graph.resolve(start)?;
    let goal_index = graph.resolve(goal)?;
    debug!("Running Dijkstra from {start:?} to {goal:?}");

    // Build the graph - terminates when the goal is met
    let record = build_dijkstra_graph(graph, start_index, |index| index == goal_index);

    match record.goal {
        Some((goal_position, cost)) => {
            let nodes = shortest_path(graph, &record.node_map, goal_position);
            debug!("Dijkstra found a path of {} nodes, cost {cost:?}", nodes.len());
            Ok(PathResult::Found(Path { nodes, cost }))
        }
        None => {
            debug!("Dijkstra found no path from {start:?} to {goal:?}");
            Ok(PathResult::NotFound)
        }
    }
}


/// Returns the best cost of every node reachable from start, start included at zero
pub fn dijkstra_costs<N, C>(graph: &Graph<N, C>, start: &N) -> Result<FxIndexMap<N, C>, PathPlannerError>
where 
    N: Eq + Hash + Clone + Debug,
    C: PathCost,
    {

    let start_index = graph.resolve(start)?;

    // No goal - runs until every reachable node is expanded
    let record = build_dijkstra_graph(graph, start_index, |_| false);

    Ok(record.node_map
        .into_iter()
        .map(|(index, (_, cost))| (graph.node_at(index).id().clone(), cost))
        .collect())
}


/// Traverses the graph using Dijkstra's algorithm 
/// Returns the search record along with the position and cost of the goal entry
fn build_dijkstra_graph<N, C, G>(graph: &Graph<N, C>, start: NodeIndex, goal_fn: G) -> SearchRecord<C>
where 
    N: Eq + Hash + Clone + Debug,
    C: PathCost,
    G: Fn(NodeIndex) -> bool // Returns true if goal is met
    {

    // Nodes to visit - binary heap sorts Biggest to Smallest, NodeId reverses the order
    // Entries are never updated in place, a better cost pushes a new entry
    // and the outdated one is skipped when it is popped
    let mut nodes_to_visit: BinaryHeap<NodeId<C>> = BinaryHeap::new();

    // discovered nodes with their best known cost
    // The tuple contains (parent_position, cost), the start node has NO_PARENT
    let mut nodes_map: GraphNodeMap<C> = FxIndexMap::default();
    
    // Add start node to the map and queue
    let start_position = nodes_map.insert_full(start, (NO_PARENT, Zero::zero())).0;
    nodes_to_visit.push(NodeId{
        index: start_position,
        cost: Zero::zero(), // This is the cost from the start node
    });

    let mut expanded = 0usize;
    let mut stale = 0usize;

    // Loop over each node to visit, removing the smallest node
    while let Some(NodeId {cost, index}) = nodes_to_visit.pop() {

        // fetch current best cost for node, heap positions always come from nodes_map
        let Some((&node_index, &(_, c))) = nodes_map.get_index(index) else {
            continue;
        };

        // If cost of new node from BinaryHeap is higher than the best cost, skip it
        // This implies we've already found a better path to this node
        // Equal costs are kept
        if cost > c {
            trace!("Skipping stale entry for node {} at cost {cost:?}", node_index.index());
            stale += 1;
            continue;
        }

        // Check if we've reached the goal
        if goal_fn(node_index) {
            debug!("Dijkstra reached the goal after {expanded} expansions, {stale} stale entries skipped");
            return SearchRecord { node_map: nodes_map, goal: Some((index, c)), expanded, stale };
        }

        expanded += 1;
        
        // loop over neighbors
        for connection in graph.node_at(node_index).connections() {

            // new cost to reach this node = edge cost + node cost
            // a sum that overflows the cost type can't be the cheaper route
            let Some(new_cost) = c.checked_sum(connection.cost()) else {
                trace!("Cost overflow reaching node {} from node {}", connection.to().index(), node_index.index());
                continue;
            };

            // Check if we've found a better path to this neighbor
            let neighbor_position;
            
            match nodes_map.entry(connection.to()) {
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
            
            // Only add to the queue if we've found a better path
            nodes_to_visit.push(NodeId {
                index: neighbor_position,
                cost: new_cost,
            });
        }
    }

    debug!("Dijkstra exhausted the frontier after {expanded} expansions, {stale} stale entries skipped");
    SearchRecord { node_map: nodes_map, goal: None, expanded, stale }
}


/// Frontier entry 
/// - for ordering we only need cost and a way to identify the node
/// - index is the position of the node in the search record
#[derive(Debug)]
struct NodeId<T> {
    index: usize,
    cost: T
}

impl<T: Ord> Ord for NodeId<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.cost.cmp(&self.cost)
    }
}
impl<T: Ord> PartialOrd for NodeId<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<T: PartialEq> PartialEq for NodeId<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost
    }
}
impl<T: PartialEq> Eq for NodeId<T> {}

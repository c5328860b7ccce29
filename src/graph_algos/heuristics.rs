use crate::geometry::Point;
use crate::graph::Node;

use num_traits::{NumCast, Zero};


/// Estimate of the remaining cost from node to goal
/// A* only returns optimal paths when the estimate is admissible (never overestimates)
/// and consistent (obeys the triangle inequality along every connection), neither is checked
pub trait Heuristic<N, C> {
    fn estimate(&self, node: &Node<N, C>, goal: &Node<N, C>) -> C;
}

/// Any closure over (node, goal) is a heuristic
impl<N, C, F> Heuristic<N, C> for F
where
    F: Fn(&Node<N, C>, &Node<N, C>) -> C,
{
    fn estimate(&self, node: &Node<N, C>, goal: &Node<N, C>) -> C {
        self(node, goal)
    }
}


/// Always zero - A* then expands nodes in the same order as Dijkstra
#[derive(Clone, Copy, Debug, Default)]
pub struct ZeroHeuristic;

impl<N, C: Zero> Heuristic<N, C> for ZeroHeuristic {
    fn estimate(&self, _node: &Node<N, C>, _goal: &Node<N, C>) -> C {
        C::zero()
    }
}


/// Straight-line distance between node locations
/// Admissible whenever no connection is cheaper than the distance it spans
#[derive(Clone, Copy, Debug, Default)]
pub struct StraightLine;

impl<N, C: Zero + NumCast> Heuristic<N, C> for StraightLine {
    fn estimate(&self, node: &Node<N, C>, goal: &Node<N, C>) -> C {
        from_locations(node, goal, Point::distance)
    }
}


/// Manhattan distance between node locations
/// Only admissible on maps limited to axis aligned moves
#[derive(Clone, Copy, Debug, Default)]
pub struct Manhattan;

impl<N, C: Zero + NumCast> Heuristic<N, C> for Manhattan {
    fn estimate(&self, node: &Node<N, C>, goal: &Node<N, C>) -> C {
        from_locations(node, goal, Point::manhattan)
    }
}


/// Converts a distance between the two locations into the cost type
/// Zero when either node has no location, integer costs are truncated - both keep the estimate admissible
fn from_locations<N, C>(node: &Node<N, C>, goal: &Node<N, C>, distance: fn(&Point, &Point) -> f64) -> C
where
    C: Zero + NumCast,
{
    match (node.location(), goal.location()) {
        (Some(a), Some(b)) => C::from(distance(a, b)).unwrap_or_else(C::zero),
        _ => C::zero(),
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Cost, Graph};

    #[test]
    fn test_location_heuristics() {
        let mut graph: Graph<u8, Cost> = Graph::new();
        graph.add_node_at(0, Point::new(0.0, 0.0)).unwrap();
        graph.add_node_at(1, Point::new(3.0, 4.0)).unwrap();
        graph.add_node(2).unwrap();

        let a = graph.node(&0).unwrap();
        let b = graph.node(&1).unwrap();
        let unplaced = graph.node(&2).unwrap();

        assert_eq!(StraightLine.estimate(a, b), Cost::new(5.0).unwrap());
        assert_eq!(Manhattan.estimate(a, b), Cost::new(7.0).unwrap());
        assert_eq!(ZeroHeuristic.estimate(a, b), Cost::new(0.0).unwrap());

        // no location, no information
        assert_eq!(StraightLine.estimate(a, unplaced), Cost::new(0.0).unwrap());
        assert_eq!(Manhattan.estimate(unplaced, b), Cost::new(0.0).unwrap());
    }

    #[test]
    fn test_integer_costs_truncate() {
        let mut graph: Graph<u8, u32> = Graph::new();
        graph.add_node_at(0, Point::new(0.0, 0.0)).unwrap();
        graph.add_node_at(1, Point::new(1.0, 1.0)).unwrap();

        let a = graph.node(&0).unwrap();
        let b = graph.node(&1).unwrap();

        // sqrt(2) rounds down
        assert_eq!(StraightLine.estimate(a, b), 1);
    }

    #[test]
    fn test_closure_heuristic() {
        let mut graph: Graph<i32, u32> = Graph::new();
        graph.add_node(3).unwrap();
        graph.add_node(10).unwrap();

        let id_gap = |node: &Node<i32, u32>, goal: &Node<i32, u32>| (goal.id() - node.id()).unsigned_abs();
        assert_eq!(id_gap.estimate(graph.node(&3).unwrap(), graph.node(&10).unwrap()), 7);
    }
}

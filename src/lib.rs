mod collections;
pub mod errors;
pub mod geometry;
pub mod graph;
pub mod graph_algos;
pub mod random_map;

pub use errors::PathPlannerError;
pub use geometry::Point;
pub use graph::{Connection, Cost, Graph, Node, NodeIndex, PathCost};
pub use graph_algos::{Path, PathResult};
pub use graph_algos::a_star::{a_star, AStar};
pub use graph_algos::dijkstra::{dijkstra, dijkstra_costs};
pub use graph_algos::heuristics::{Heuristic, Manhattan, StraightLine, ZeroHeuristic};

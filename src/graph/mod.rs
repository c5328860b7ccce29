mod cost;

pub use cost::{Cost, PathCost};

use crate::collections::FxHashMap;
use crate::errors::PathPlannerError;
use crate::geometry::Point;

use std::{hash::Hash, fmt::Debug};
use num_traits::Zero;


/// Position of a node inside the graph that created it
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeIndex(usize);

impl NodeIndex {
    pub fn index(self) -> usize {
        self.0
    }
}


/// Directed connection to a target node
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Connection<C> {
    to: NodeIndex,
    cost: C, // always >= 0, checked in Graph::connect
}

impl<C: Copy> Connection<C> {
    pub fn to(&self) -> NodeIndex {
        self.to
    }

    pub fn cost(&self) -> C {
        self.cost
    }
}


/// Node with its outgoing connections, in insertion order
#[derive(Clone, Debug)]
pub struct Node<N, C> {
    id: N,
    location: Option<Point>, // only read by heuristics
    connections: Vec<Connection<C>>,
}

impl<N, C> Node<N, C> {
    pub fn id(&self) -> &N {
        &self.id
    }

    pub fn location(&self) -> Option<&Point> {
        self.location.as_ref()
    }

    pub fn connections(&self) -> &[Connection<C>] {
        &self.connections
    }
}


/// Weighted directed graph
/// Nodes live in a flat vector, connections point at targets by index so cycles need no shared ownership
/// The graph only grows, nothing can be removed or re-costed
/// N: unique node id
/// C: connection cost, never negative
#[derive(Clone, Debug)]
pub struct Graph<N, C> {
    nodes: Vec<Node<N, C>>,
    index: FxHashMap<N, NodeIndex>,
}

impl<N, C> Default for Graph<N, C> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            index: FxHashMap::default(),
        }
    }
}

impl<N, C> Graph<N, C>
where
    N: Eq + Hash + Clone + Debug,
    C: Zero + PartialOrd + Copy + Debug,
{

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(nodes: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(nodes),
            index: FxHashMap::with_capacity_and_hasher(nodes, Default::default()),
        }
    }

    /// Add a node without a location
    pub fn add_node(&mut self, id: N) -> Result<NodeIndex, PathPlannerError> {
        self.insert(id, None)
    }

    /// Add a node placed at a location, usable by distance heuristics
    pub fn add_node_at(&mut self, id: N, location: Point) -> Result<NodeIndex, PathPlannerError> {
        self.insert(id, Some(location))
    }

    fn insert(&mut self, id: N, location: Option<Point>) -> Result<NodeIndex, PathPlannerError> {
        if self.index.contains_key(&id) {
            return Err(PathPlannerError::DuplicateNode(format!("{id:?}")));
        }

        let node_index = NodeIndex(self.nodes.len());
        self.index.insert(id.clone(), node_index);
        self.nodes.push(Node {
            id,
            location,
            connections: Vec::new(),
        });
        Ok(node_index)
    }

    /// Add a directed connection from -> to
    /// Costs below zero are rejected here so searches never have to check
    pub fn connect(&mut self, from: &N, to: &N, cost: C) -> Result<(), PathPlannerError> {
        let from_index = self.resolve(from)?;
        let to_index = self.resolve(to)?;

        // written this way so a NaN plain float is rejected too, Cost cannot hold NaN at all
        if !(cost >= C::zero()) {
            return Err(PathPlannerError::NegativeCost {
                from: format!("{from:?}"),
                to: format!("{to:?}"),
                cost: format!("{cost:?}"),
            });
        }

        self.nodes[from_index.0].connections.push(Connection {
            to: to_index,
            cost,
        });
        Ok(())
    }

    /// Connect both ways with the same cost, as two independent directed connections
    pub fn connect_bidirectional(&mut self, a: &N, b: &N, cost: C) -> Result<(), PathPlannerError> {
        self.connect(a, b, cost)?;
        self.connect(b, a, cost)
    }

    /// Sum of connection costs along consecutive pairs of the path
    /// Uses the cheapest connection when a pair has several
    /// Returns None if the path is empty, names an unknown node or a pair is not connected
    pub fn path_cost(&self, path: &[N]) -> Option<C> {
        let first = self.index_of(path.first()?)?;
        let mut total = C::zero();
        let mut current = first;

        for id in &path[1..] {
            let next = self.index_of(id)?;
            let step = self.node_at(current)
                .connections
                .iter()
                .filter(|connection| connection.to == next)
                .map(|connection| connection.cost)
                .fold(None, |best: Option<C>, cost| match best {
                    Some(b) if b <= cost => Some(b),
                    _ => Some(cost),
                })?;
            total = total + step;
            current = next;
        }

        Some(total)
    }
}

impl<N, C> Graph<N, C>
where
    N: Eq + Hash + Debug,
{

    pub fn index_of(&self, id: &N) -> Option<NodeIndex> {
        self.index.get(id).copied()
    }

    /// Like index_of but fails with UnknownNode
    pub(crate) fn resolve(&self, id: &N) -> Result<NodeIndex, PathPlannerError> {
        self.index_of(id).ok_or_else(|| PathPlannerError::unknown_node(id))
    }

    pub fn contains(&self, id: &N) -> bool {
        self.index.contains_key(id)
    }

    pub fn node(&self, id: &N) -> Option<&Node<N, C>> {
        self.index_of(id).map(|index| &self.nodes[index.0])
    }

    /// Node by index
    /// Panics if the index was produced by another graph and is out of range
    pub fn node_at(&self, index: NodeIndex) -> &Node<N, C> {
        &self.nodes[index.0]
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node<N, C>> {
        self.nodes.iter()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of directed connections
    pub fn connection_count(&self) -> usize {
        self.nodes.iter().map(|node| node.connections.len()).sum()
    }
}

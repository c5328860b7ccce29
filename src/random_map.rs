use crate::errors::PathPlannerError;
use crate::geometry::Point;
use crate::graph::{Cost, Graph};

use rand::Rng;
use log::debug;


/// Shape of a generated map
#[derive(Clone, Debug, PartialEq)]
pub struct RandomMapConfig {
    /// Number of nodes
    pub size: usize,
    /// How many preceding nodes a new node may connect to
    pub connectedness: usize,
    /// Chance of each optional connection forming, in [0, 1]
    pub connect_probability: f64,
    /// Nodes are placed at y in 0..height
    pub height: u32,
    /// Upper bound of the random surcharge on top of the distance
    pub cost_jitter: f64,
}

impl Default for RandomMapConfig {
    fn default() -> Self {
        Self {
            size: 20,
            connectedness: 4,
            connect_probability: 1.0,
            height: 20,
            cost_jitter: 5.0,
        }
    }
}

impl RandomMapConfig {

    pub fn new(size: usize, connectedness: usize, connect_probability: f64) -> Self {
        Self {
            size,
            connectedness,
            connect_probability,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), PathPlannerError> {
        if self.size == 0 {
            return Err(PathPlannerError::InvalidConfig("size must be at least 1".to_string()));
        }
        if self.connectedness == 0 {
            return Err(PathPlannerError::InvalidConfig("connectedness must be at least 1".to_string()));
        }
        if !(0.0..=1.0).contains(&self.connect_probability) {
            return Err(PathPlannerError::InvalidConfig(format!(
                "connect_probability {} is outside [0, 1]",
                self.connect_probability
            )));
        }
        if self.height == 0 {
            return Err(PathPlannerError::InvalidConfig("height must be at least 1".to_string()));
        }
        if !(self.cost_jitter >= 0.0 && self.cost_jitter.is_finite()) {
            return Err(PathPlannerError::InvalidConfig(format!(
                "cost_jitter {} must be finite and not negative",
                self.cost_jitter
            )));
        }
        Ok(())
    }
}


/// Generate a random test map, node ids are 0..size
/// Node i sits at x = i + 1 and a random y, and connects back to some of the nodes just before it,
/// always at least one so the map is connected
/// Costs are the straight-line distance plus a random surcharge, which keeps the
/// straight-line heuristic admissible and consistent on these maps
pub fn generate<R: Rng + ?Sized>(config: &RandomMapConfig, rng: &mut R) -> Result<Graph<usize, Cost>, PathPlannerError> {
    config.validate()?;

    let mut graph = Graph::with_capacity(config.size);
    let mut locations: Vec<Point> = Vec::with_capacity(config.size);

    for i in 0..config.size {
        let location = Point::new((i + 1) as f64, rng.random_range(0..config.height) as f64);
        graph.add_node_at(i, location)?;
        locations.push(location);

        if i == 0 {
            continue;
        }

        // connect back to at most `connectedness` nodes, one of them unconditionally
        let first = i.saturating_sub(config.connectedness);
        let certain = rng.random_range(first..i);

        for j in first..i {
            if j != certain && !rng.random_bool(config.connect_probability) {
                continue;
            }
            let cost = locations[j].distance(&location) + rng.random::<f64>() * config.cost_jitter;
            let cost = Cost::new(cost)
                .map_err(|_| PathPlannerError::InvalidConfig(format!("connection {j} - {i} has no valid cost")))?;
            graph.connect_bidirectional(&j, &i, cost)?;
        }
    }

    debug!(
        "Generated random map with {} nodes and {} connections",
        graph.len(),
        graph.connection_count()
    );
    Ok(graph)
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph_algos::dijkstra::dijkstra_costs;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_default_config_is_valid() {
        assert!(RandomMapConfig::default().validate().is_ok());
    }

    #[test]
    fn test_invalid_configs() {
        let bad = [
            RandomMapConfig { size: 0, ..Default::default() },
            RandomMapConfig { connectedness: 0, ..Default::default() },
            RandomMapConfig { connect_probability: 1.5, ..Default::default() },
            RandomMapConfig { connect_probability: f64::NAN, ..Default::default() },
            RandomMapConfig { height: 0, ..Default::default() },
            RandomMapConfig { cost_jitter: -1.0, ..Default::default() },
        ];
        let mut rng = StdRng::seed_from_u64(1);

        for config in bad {
            assert!(matches!(config.validate(), Err(PathPlannerError::InvalidConfig(_))), "{config:?}");
            assert!(generate(&config, &mut rng).is_err());
        }
    }

    #[test]
    fn test_single_node_map() {
        let mut rng = StdRng::seed_from_u64(3);
        let graph = generate(&RandomMapConfig::new(1, 4, 1.0), &mut rng).unwrap();

        assert_eq!(graph.len(), 1);
        assert_eq!(graph.connection_count(), 0);
    }

    #[test]
    fn test_connection_counts() {
        let mut rng = StdRng::seed_from_u64(7);

        // every optional connection forms: node i links to min(i, 4) predecessors, both ways
        let full = generate(&RandomMapConfig::new(20, 4, 1.0), &mut rng).unwrap();
        assert_eq!(full.connection_count(), 2 * (1 + 2 + 3 + 4 * 16));

        // only the guaranteed connection forms
        let sparse = generate(&RandomMapConfig::new(20, 4, 0.0), &mut rng).unwrap();
        assert_eq!(sparse.connection_count(), 2 * 19);
    }

    #[test]
    fn test_map_is_connected() {
        let mut rng = StdRng::seed_from_u64(11);
        let graph = generate(&RandomMapConfig::new(50, 5, 0.2), &mut rng).unwrap();

        let costs = dijkstra_costs(&graph, &0).unwrap();
        assert_eq!(costs.len(), 50);
    }

    #[test]
    fn test_costs_cover_distance() {
        let mut rng = StdRng::seed_from_u64(5);
        let config = RandomMapConfig::default();
        let graph = generate(&config, &mut rng).unwrap();

        for node in graph.nodes() {
            let from = node.location().unwrap();
            assert_eq!(from.x, (*node.id() + 1) as f64);
            assert!(from.y >= 0.0 && from.y < config.height as f64);

            for connection in node.connections() {
                let to = graph.node_at(connection.to()).location().unwrap();
                let distance = from.distance(to);
                assert!(connection.cost().into_inner() >= distance);
                assert!(connection.cost().into_inner() <= distance + config.cost_jitter);
            }
        }
    }

    #[test]
    fn test_same_seed_same_map() {
        let config = RandomMapConfig::new(30, 3, 0.5);
        let a = generate(&config, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = generate(&config, &mut StdRng::seed_from_u64(42)).unwrap();

        let locations = |graph: &Graph<usize, Cost>| graph.nodes().map(|n| *n.location().unwrap()).collect::<Vec<_>>();
        assert_eq!(locations(&a), locations(&b));
        assert_eq!(a.connection_count(), b.connection_count());
    }
}

use thiserror::Error;


/// Failures surfaced by graph construction and searches
/// Ids are rendered with `Debug` so the error stays independent of the id type
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PathPlannerError {
    #[error("unknown node {0}")]
    UnknownNode(String), // start, goal or connection endpoint not in the graph

    #[error("duplicate node {0}")]
    DuplicateNode(String),

    #[error("negative connection cost {cost} from {from} to {to}")]
    NegativeCost {
        from: String,
        to: String,
        cost: String,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl PathPlannerError {

    pub(crate) fn unknown_node<N: std::fmt::Debug>(id: &N) -> Self {
        PathPlannerError::UnknownNode(format!("{id:?}"))
    }
}

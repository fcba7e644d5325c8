//! Value types returned by the measures facade.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Degree → number of nodes with that degree, ascending by degree.
pub type DegreeDistribution = BTreeMap<usize, usize>;

/// A measure that is a single value for undirected graphs and an
/// (incoming, outgoing) pair for directed graphs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Directional<T> {
    /// Value for an undirected graph
    Undirected(T),
    /// Values for a directed graph
    Directed {
        /// Computed over in-edges
        incoming: T,
        /// Computed over out-edges
        outgoing: T,
    },
}

impl<T> Directional<T> {
    /// Whether this is the directed (pair) form.
    pub fn is_directed(&self) -> bool {
        matches!(self, Directional::Directed { .. })
    }

    /// The single value, if undirected.
    pub fn as_undirected(&self) -> Option<&T> {
        match self {
            Directional::Undirected(value) => Some(value),
            Directional::Directed { .. } => None,
        }
    }

    /// The (incoming, outgoing) pair, if directed.
    pub fn as_directed(&self) -> Option<(&T, &T)> {
        match self {
            Directional::Undirected(_) => None,
            Directional::Directed { incoming, outgoing } => Some((incoming, outgoing)),
        }
    }

    /// Apply `f` to every contained value.
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Directional<U> {
        match self {
            Directional::Undirected(value) => Directional::Undirected(f(value)),
            Directional::Directed { incoming, outgoing } => Directional::Directed {
                incoming: f(incoming),
                outgoing: f(outgoing),
            },
        }
    }
}

/// A node paired with one of its centrality scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CentralNode<N> {
    /// Node identifier
    pub node: N,
    /// Centrality score
    pub score: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directional_accessors() {
        let pair = Directional::Directed {
            incoming: 2,
            outgoing: 3,
        };
        assert!(pair.is_directed());
        assert_eq!(pair.as_directed(), Some((&2, &3)));
        assert_eq!(pair.as_undirected(), None);

        let single = Directional::Undirected(4).map(|v| v * 2);
        assert_eq!(single.as_undirected(), Some(&8));
    }
}

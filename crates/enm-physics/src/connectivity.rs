//! Structural connectivity of the network encoded by a Kirchhoff matrix

use petgraph::algo::connected_components as petgraph_components;
use petgraph::graph::UnGraph;

use crate::kirchhoff::Kirchhoff;

/// Build the contact graph from the non-zero off-diagonal pattern.
pub fn contact_graph(kirchhoff: &Kirchhoff) -> UnGraph<usize, f64> {
    let matrix = kirchhoff.matrix();
    let n = kirchhoff.dim();

    let mut graph = UnGraph::with_capacity(n, 0);
    let nodes: Vec<_> = (0..n).map(|i| graph.add_node(i)).collect();

    for i in 0..n {
        for j in (i + 1)..n {
            let weight = -matrix[(i, j)];
            if weight > 0.0 {
                graph.add_edge(nodes[i], nodes[j], weight);
            }
        }
    }

    graph
}

/// Number of connected components in the network.
pub fn connected_components(kirchhoff: &Kirchhoff) -> usize {
    petgraph_components(&contact_graph(kirchhoff))
}

/// True when every node can reach every other node.
pub fn is_connected(kirchhoff: &Kirchhoff) -> bool {
    connected_components(kirchhoff) == 1
}

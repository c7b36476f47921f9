//! Counts, average degree and connected components.

use std::collections::VecDeque;
use std::fmt;

use super::model::Network;

/// Summary shown next to a rendered network.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NetworkStats {
	/// Number of nodes.
	pub node_count: usize,
	/// Number of edges, counting each stored direction once.
	pub edge_count: usize,
	/// `2E / V` at full precision; 0 for an empty network.
	pub average_degree: f64,
	/// Connected components, ignoring edge direction.
	pub component_count: usize,
}

impl NetworkStats {
	/// Average degree rounded to two decimals.
	pub fn rounded_average_degree(&self) -> f64 {
		(self.average_degree * 100.0).round() / 100.0
	}
}

impl fmt::Display for NetworkStats {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"{} nodes, {} edges, average degree {:.2}, {} components",
			self.node_count, self.edge_count, self.average_degree, self.component_count
		)
	}
}

/// Compute [`NetworkStats`] in O(V + E).
pub fn compute_stats(network: &Network) -> NetworkStats {
	let (node_count, edge_count) = (network.node_count(), network.edge_count());
	let average_degree = if node_count > 0 {
		(2 * edge_count) as f64 / node_count as f64
	} else {
		0.0
	};

	NetworkStats {
		node_count,
		edge_count,
		average_degree,
		component_count: count_components(network),
	}
}

/// Undirected adjacency over node insertion indices.
fn adjacency(network: &Network) -> Vec<Vec<usize>> {
	let mut adj = vec![Vec::new(); network.node_count()];
	for edge in network.edges() {
		let (Some(s), Some(t)) = (
			network.node_index(&edge.source),
			network.node_index(&edge.target),
		) else {
			continue;
		};
		adj[s].push(t);
		adj[t].push(s);
	}
	adj
}

/// Number of BFS roots needed to visit every node.
pub fn count_components(network: &Network) -> usize {
	let adj = adjacency(network);
	let mut visited = vec![false; adj.len()];
	let mut queue = VecDeque::new();
	let mut components = 0;

	for root in 0..adj.len() {
		if visited[root] {
			continue;
		}
		components += 1;
		visited[root] = true;
		queue.push_back(root);
		while let Some(current) = queue.pop_front() {
			for &next in &adj[current] {
				if !visited[next] {
					visited[next] = true;
					queue.push_back(next);
				}
			}
		}
	}
	components
}

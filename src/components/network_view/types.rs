use crate::network::{GraphView, NetworkStats};

#[derive(Clone, Debug)]
pub struct GraphNode {
	pub id: String,
	pub highlighted: bool,
}

#[derive(Clone, Debug)]
pub struct GraphLink {
	pub id: String,
	pub source: String,
	pub target: String,
	pub interaction: Option<String>,
}

/// Owned snapshot of a rendered view, cheap to keep in a signal.
#[derive(Clone, Debug, Default)]
pub struct GraphData {
	pub nodes: Vec<GraphNode>,
	pub links: Vec<GraphLink>,
	pub stats: NetworkStats,
}

impl From<GraphView<'_>> for GraphData {
	fn from(view: GraphView<'_>) -> Self {
		let nodes = view
			.network
			.nodes()
			.map(|id| GraphNode {
				id: id.clone(),
				highlighted: view.highlight.contains(id),
			})
			.collect();
		let links = view
			.network
			.edges()
			.iter()
			.map(|e| GraphLink {
				id: e.id.clone(),
				source: e.source.clone(),
				target: e.target.clone(),
				interaction: e.interaction.clone(),
			})
			.collect();
		Self {
			nodes,
			links,
			stats: view.stats,
		}
	}
}

#[cfg(test)]
mod tests {
	use std::collections::HashSet;

	use super::*;
	use crate::network::{Network, compute_stats};

	#[test]
	fn snapshot_marks_highlighted_nodes() {
		let mut net = Network::new();
		net.add_edge("A", "B", Some("pp"));
		let highlight: HashSet<String> = ["B".to_string()].into();
		let data = GraphData::from(GraphView {
			network: &net,
			stats: compute_stats(&net),
			highlight: &highlight,
		});

		let marked: Vec<_> = data.nodes.iter().map(|n| (n.id.as_str(), n.highlighted)).collect();
		assert_eq!(marked, [("A", false), ("B", true)]);
		assert_eq!(data.links[0].interaction.as_deref(), Some("pp"));
		assert_eq!(data.stats.edge_count, 1);
	}
}

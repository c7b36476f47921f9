//! First-degree neighbourhood queries.

use std::collections::HashSet;

use indexmap::IndexSet;

use super::error::{NetworkError, Result};
use super::model::{NodeId, Network, Subgraph};

/// Split query text on whitespace and commas.
pub fn parse_query(text: &str) -> Result<Vec<NodeId>> {
	let ids: Vec<NodeId> = text
		.split(|c: char| c.is_whitespace() || c == ',')
		.filter(|t| !t.is_empty())
		.map(str::to_owned)
		.collect();
	if ids.is_empty() {
		return Err(NetworkError::EmptyQuery);
	}
	Ok(ids)
}

/// The query nodes, their direct neighbours, and every edge touching a query node.
///
/// Node and edge order follow `network`. Unknown ids are ignored.
pub fn extract(network: &Network, query: &HashSet<NodeId>) -> Subgraph {
	let mut members: HashSet<&str> = query.iter().map(String::as_str).collect();
	let mut edges = Vec::new();

	for edge in network.edges() {
		if query.contains(&edge.source) || query.contains(&edge.target) {
			members.insert(&edge.source);
			members.insert(&edge.target);
			edges.push(edge.clone());
		}
	}

	let nodes: IndexSet<NodeId> = network
		.nodes()
		.filter(|id| members.contains(id.as_str()))
		.cloned()
		.collect();
	Subgraph::from_parts(nodes, edges)
}

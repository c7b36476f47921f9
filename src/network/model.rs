//! The in-memory network: unique nodes and the edges between them.

use indexmap::IndexSet;

/// Opaque node identifier.
pub type NodeId = String;

/// A parsed edge. Stored directed, analysed undirected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Edge {
	/// `e<ordinal>`, unique within the network it was parsed into.
	pub id: String,
	/// First endpoint as written in the file.
	pub source: NodeId,
	/// Second endpoint.
	pub target: NodeId,
	/// Only set for interaction-format input.
	pub interaction: Option<String>,
}

/// Unique nodes in insertion order plus edges in append order.
///
/// Every edge endpoint is a member of the node set.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Network {
	nodes: IndexSet<NodeId>,
	edges: Vec<Edge>,
}

/// A neighbourhood projection of a [`Network`]; owns its own copies.
pub type Subgraph = Network;

impl Network {
	/// An empty network.
	pub fn new() -> Self {
		Self::default()
	}

	/// Add a node if it is not already present.
	pub fn add_node(&mut self, id: &str) {
		if !self.nodes.contains(id) {
			self.nodes.insert(id.to_owned());
		}
	}

	/// Append an edge with the next sequential id, adding both endpoints.
	pub fn add_edge(&mut self, source: &str, target: &str, interaction: Option<&str>) {
		self.add_node(source);
		self.add_node(target);
		self.edges.push(Edge {
			id: format!("e{}", self.edges.len()),
			source: source.to_owned(),
			target: target.to_owned(),
			interaction: interaction.map(str::to_owned),
		});
	}

	/// Whether `id` is a node.
	pub fn contains_node(&self, id: &str) -> bool {
		self.nodes.contains(id)
	}

	/// Position of `id` in insertion order.
	pub fn node_index(&self, id: &str) -> Option<usize> {
		self.nodes.get_index_of(id)
	}

	/// Nodes in insertion order.
	pub fn nodes(&self) -> impl ExactSizeIterator<Item = &NodeId> + '_ {
		self.nodes.iter()
	}

	/// Edges in append order.
	pub fn edges(&self) -> &[Edge] {
		&self.edges
	}

	/// Number of nodes.
	pub fn node_count(&self) -> usize {
		self.nodes.len()
	}

	/// Number of edges.
	pub fn edge_count(&self) -> usize {
		self.edges.len()
	}

	/// True when there are no nodes.
	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}

	/// Assemble a projection from already-selected parts of another network.
	pub(crate) fn from_parts(nodes: IndexSet<NodeId>, edges: Vec<Edge>) -> Self {
		debug_assert!(
			edges
				.iter()
				.all(|e| nodes.contains(&e.source) && nodes.contains(&e.target))
		);
		Self { nodes, edges }
	}
}

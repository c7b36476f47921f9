use std::collections::{HashMap, HashSet};

use futures::executor::block_on;
use network_explorer::network::{
	Delimiter, InputFormat, Network, compute_stats, extract, ingest,
};
use proptest::prelude::*;

mod common;
use common::{MemorySource, config_with_chunk};

fn arb_id() -> impl Strategy<Value = String> {
	prop::sample::select(vec!["a", "b", "c", "dé", "ßx", "n1", "n2", "中"]).prop_map(str::to_owned)
}

fn arb_edges() -> impl Strategy<Value = Vec<(String, String)>> {
	prop::collection::vec((arb_id(), arb_id()), 0..40)
}

fn csv_text(edges: &[(String, String)], junk_every: usize) -> String {
	let mut out = String::from("Target,Source\n");
	for (i, (s, t)) in edges.iter().enumerate() {
		if junk_every > 0 && i % junk_every == 0 {
			out.push_str("lonely\n\n");
		}
		out.push_str(&format!("{t},{s}\n"));
	}
	out
}

fn parse(text: &str, chunk: usize) -> Network {
	let mut source = MemorySource::new("p.csv", text);
	block_on(ingest(
		&mut source,
		InputFormat::Tabular(Delimiter::Comma),
		&config_with_chunk(chunk),
		&mut |_: f64| {},
	))
	.map(|upload| upload.network)
	.unwrap()
}

fn network_of(nodes: usize, edges: &[(usize, usize)]) -> Network {
	let mut net = Network::new();
	for n in 0..nodes {
		net.add_node(&n.to_string());
	}
	for (s, t) in edges {
		net.add_edge(&(s % nodes).to_string(), &(t % nodes).to_string(), None);
	}
	net
}

fn union_find_components(nodes: usize, edges: &[(usize, usize)]) -> usize {
	let mut parent: Vec<usize> = (0..nodes).collect();
	fn root(parent: &mut [usize], mut x: usize) -> usize {
		while parent[x] != x {
			parent[x] = parent[parent[x]];
			x = parent[x];
		}
		x
	}
	for (s, t) in edges {
		let (a, b) = (root(&mut parent, s % nodes), root(&mut parent, t % nodes));
		parent[a] = b;
	}
	(0..nodes).filter(|&n| root(&mut parent, n) == n).count()
}

proptest! {
	#[test]
	fn chunk_size_does_not_change_the_network(
		edges in arb_edges(),
		chunk in 1usize..64,
		junk_every in 0usize..5,
	) {
		let text = csv_text(&edges, junk_every);
		let whole = parse(&text, text.len().max(1));
		prop_assert_eq!(&parse(&text, 1), &whole);
		prop_assert_eq!(&parse(&text, chunk), &whole);

		let got: Vec<(String, String)> = whole
			.edges()
			.iter()
			.map(|e| (e.source.clone(), e.target.clone()))
			.collect();
		prop_assert_eq!(got, edges);
	}

	#[test]
	fn components_match_union_find(
		nodes in 1usize..30,
		edges in prop::collection::vec((0usize..30, 0usize..30), 0..60),
	) {
		let net = network_of(nodes, &edges);
		let stats = compute_stats(&net);
		prop_assert_eq!(stats.component_count, union_find_components(nodes, &edges));
		prop_assert_eq!(stats.node_count, nodes);
		prop_assert_eq!(stats.edge_count, edges.len());
		let expected = (2.0 * edges.len() as f64 / nodes as f64 * 100.0).round() / 100.0;
		prop_assert_eq!(stats.rounded_average_degree(), expected);
	}

	#[test]
	fn extraction_is_first_degree(
		nodes in 1usize..20,
		edges in prop::collection::vec((0usize..20, 0usize..20), 0..40),
		query in prop::collection::hash_set(0usize..25, 1..4),
	) {
		let net = network_of(nodes, &edges);
		let query: HashSet<String> = query.iter().map(usize::to_string).collect();
		let sub = extract(&net, &query);

		for edge in sub.edges() {
			prop_assert!(query.contains(&edge.source) || query.contains(&edge.target));
		}
		let touching = net
			.edges()
			.iter()
			.filter(|e| query.contains(&e.source) || query.contains(&e.target))
			.count();
		prop_assert_eq!(sub.edge_count(), touching);

		let endpoints: HashSet<&String> = sub
			.edges()
			.iter()
			.flat_map(|e| [&e.source, &e.target])
			.collect();
		for id in sub.nodes() {
			prop_assert!(query.contains(id) || endpoints.contains(id));
			prop_assert!(net.contains_node(id));
		}

		// node order follows the source network
		let position: HashMap<&String, usize> =
			net.nodes().enumerate().map(|(i, id)| (id, i)).collect();
		let order: Vec<usize> = sub.nodes().map(|id| position[id]).collect();
		prop_assert!(order.windows(2).all(|w| w[0] < w[1]));
	}
}

use leptos::prelude::*;

use super::types::GraphData;
use crate::network::NetworkStats;

#[component]
fn StatsPanel(stats: NetworkStats) -> impl IntoView {
	view! {
		<dl class="network-stats">
			<dt>"Nodes"</dt>
			<dd>{stats.node_count.to_string()}</dd>
			<dt>"Edges"</dt>
			<dd>{stats.edge_count.to_string()}</dd>
			<dt>"Average degree"</dt>
			<dd>{format!("{:.2}", stats.rounded_average_degree())}</dd>
			<dt>"Components"</dt>
			<dd>{stats.component_count.to_string()}</dd>
		</dl>
	}
}

/// Plain listing of the rendered nodes and edges.
#[component]
pub fn NetworkView(#[prop(into)] data: Signal<Option<GraphData>>) -> impl IntoView {
	move || {
		let Some(graph) = data.get() else {
			return view! { <p class="network-empty">"No network displayed."</p> }.into_any();
		};
		let nodes = graph
			.nodes
			.into_iter()
			.map(|node| view! { <li class:highlighted=node.highlighted>{node.id}</li> })
			.collect_view();
		let links = graph
			.links
			.into_iter()
			.map(|link| {
				view! {
					<tr title=link.id>
						<td>{link.source}</td>
						<td>{link.interaction.unwrap_or_default()}</td>
						<td>{link.target}</td>
					</tr>
				}
			})
			.collect_view();

		view! {
			<section class="network-view">
				<StatsPanel stats=graph.stats />
				<ul class="node-list">{nodes}</ul>
				<table class="edge-table">
					<thead>
						<tr>
							<th>"Source"</th>
							<th>"Interaction"</th>
							<th>"Target"</th>
						</tr>
					</thead>
					<tbody>{links}</tbody>
				</table>
			</section>
		}
		.into_any()
	}
}

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;
use log::info;
use web_sys::File;

use crate::components::file_source::BrowserFile;
use crate::components::network_view::{GraphData, NetworkView, SignalSink};
use crate::network::{Delimiter, ExplorerConfig, LoadOutcome, Session, ViewSink};

/// Upload, query and export page
#[component]
pub fn Home() -> impl IntoView {
	let query_map = use_query_map();
	let config = query_map.with_untracked(|q| ExplorerConfig::from_lookup(|key| q.get(key)));
	info!("explorer config: {config:?}");
	let session = Rc::new(RefCell::new(Session::new(config)));

	let (graph, set_graph) = signal(None::<GraphData>);
	let (error, set_error) = signal(None::<String>);
	let (progress, set_progress) = signal(None::<f64>);
	let (outcome, set_outcome) = signal(None::<LoadOutcome>);
	let (query, set_query) = signal(String::new());
	let (export_text, set_export_text) = signal(None::<String>);
	let sink = SignalSink {
		graph: set_graph,
		error: set_error,
	};
	let file_input = NodeRef::<leptos::html::Input>::new();

	let session_up = session.clone();
	let on_upload = move |_| {
		let file: Option<File> = file_input
			.get()
			.and_then(|input| input.files())
			.and_then(|files| files.get(0));
		let name = file.as_ref().map(File::name);

		let mut sink = sink;
		let ticket = match session_up.borrow_mut().start_upload(name.as_deref()) {
			Ok(ticket) => ticket,
			Err(e) => {
				sink.report_error(&e);
				return;
			}
		};
		let Some(file) = file else {
			return;
		};

		set_progress.set(Some(0.0));
		set_export_text.set(None);
		let session = session_up.clone();
		wasm_bindgen_futures::spawn_local(async move {
			let mut source = BrowserFile::new(file);
			let mut report = move |percent: f64| set_progress.set(Some(percent));
			let result = ticket.ingest(&mut source, &mut report).await;
			if let Ok(loaded) = session.borrow_mut().finish_upload(ticket, result, &mut sink) {
				set_outcome.set(Some(loaded));
			}
			set_progress.set(None);
		});
	};

	let session_q = session.clone();
	let on_query = move |_| {
		let mut sink = sink;
		let _ = session_q.borrow_mut().query(&query.get_untracked(), &mut sink);
	};

	let session_full = session.clone();
	let on_show_full = move |_| {
		let mut sink = sink;
		let _ = session_full.borrow_mut().show_full_network(&mut sink);
	};

	let session_export = session;
	let on_export = move |_| {
		let mut sink = sink;
		match session_export.borrow().export_last_view(Delimiter::Comma) {
			Ok(text) => {
				sink.clear_error();
				set_export_text.set(Some(text));
			}
			Err(e) => {
				sink.report_error(&e);
				set_export_text.set(None);
			}
		}
	};

	view! {
		<main class="explorer">
			<h1>"Network Explorer"</h1>

			<section class="upload-panel">
				<input type="file" accept=".csv,.tsv,.txt,.sif" node_ref=file_input />
				<button on:click=on_upload>"Upload"</button>
				{move || {
					progress.get().map(|p| view! { <progress max="100" value=p.to_string()></progress> })
				}}
				{move || {
					outcome
						.get()
						.filter(|o| o.skipped_lines > 0)
						.map(|o| {
							view! {
								<p class="skipped">
									{format!("{} malformed lines skipped", o.skipped_lines)}
								</p>
							}
						})
				}}
			</section>

			<section class="query-panel">
				<input
					type="text"
					placeholder="Node IDs, separated by spaces or commas"
					prop:value=query
					on:input=move |ev| set_query.set(event_target_value(&ev))
				/>
				<button on:click=on_query>"Query"</button>
				<button on:click=on_show_full>"Show full network"</button>
				<button on:click=on_export>"Export CSV"</button>
			</section>

			{move || error.get().map(|msg| view! { <div class="error-message">{msg}</div> })}

			<NetworkView data=graph />

			{move || {
				export_text
					.get()
					.map(|text| view! { <textarea class="export" readonly=true prop:value=text></textarea> })
			}}
		</main>
	}
}

//! The loaded network and the operations a user drives against it.

use std::cell::Cell;
use std::collections::HashSet;
use std::rc::Rc;

use log::{info, warn};

use super::config::ExplorerConfig;
use super::error::{NetworkError, Result};
use super::export::export_delimited;
use super::format::{Delimiter, InputFormat, detect_format};
use super::ingest::{ChunkSource, ProgressSink, Upload, ingest};
use super::model::{Network, NodeId, Subgraph};
use super::stats::{NetworkStats, compute_stats};
use super::subgraph::{extract, parse_query};

/// What the renderer is handed.
#[derive(Clone, Copy, Debug)]
pub struct GraphView<'a> {
	/// The full network or a query result.
	pub network: &'a Network,
	/// Statistics of `network`.
	pub stats: NetworkStats,
	/// Nodes to emphasise; empty for a full-network view.
	pub highlight: &'a HashSet<NodeId>,
}

/// The rendering layer, as seen from the session.
pub trait ViewSink {
	/// Replace whatever is displayed with `view`.
	fn render(&mut self, view: GraphView<'_>);

	/// Show a user-facing message.
	fn report_error(&mut self, error: &NetworkError);

	/// Called after an operation succeeds.
	fn clear_error(&mut self) {}
}

/// Permission to run one upload; obtained from [`Session::start_upload`].
///
/// The session's upload slot is held until the ticket is passed to
/// [`Session::finish_upload`] or dropped.
#[derive(Debug)]
pub struct UploadTicket {
	filename: String,
	format: InputFormat,
	config: ExplorerConfig,
	slot: Rc<Cell<bool>>,
}

impl UploadTicket {
	/// Name of the chosen file.
	pub fn filename(&self) -> &str {
		&self.filename
	}

	/// Format detected from the file name.
	pub fn format(&self) -> InputFormat {
		self.format
	}

	fn release(&self) {
		self.slot.set(false);
	}

	/// Read the whole source. The session is not borrowed meanwhile.
	pub async fn ingest<S, P>(&self, source: &mut S, progress: &mut P) -> Result<Upload>
	where
		S: ChunkSource,
		P: ProgressSink + ?Sized,
	{
		ingest(source, self.format, &self.config, progress).await
	}
}

impl Drop for UploadTicket {
	fn drop(&mut self) {
		if self.slot.get() {
			warn!("upload of {} abandoned", self.filename);
		}
		self.release();
	}
}

/// Summary of a committed upload.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LoadOutcome {
	/// Statistics of the committed network.
	pub stats: NetworkStats,
	/// False when the network is above the render ceiling.
	pub rendered: bool,
	/// Malformed lines left out of the network.
	pub skipped_lines: usize,
}

#[derive(Clone, Debug)]
enum LastView {
	Full,
	Query(Subgraph),
}

/// One user's loaded network.
#[derive(Debug, Default)]
pub struct Session {
	config: ExplorerConfig,
	network: Network,
	upload_slot: Rc<Cell<bool>>,
	last_view: Option<LastView>,
}

fn fail<T>(sink: &mut impl ViewSink, error: NetworkError) -> Result<T> {
	warn!("{error}");
	sink.report_error(&error);
	Err(error)
}

impl Session {
	/// An empty session.
	pub fn new(config: ExplorerConfig) -> Self {
		Self {
			config,
			..Self::default()
		}
	}

	/// Settings uploads and renders run with.
	pub fn config(&self) -> &ExplorerConfig {
		&self.config
	}

	/// The last successfully uploaded network, empty before the first.
	pub fn network(&self) -> &Network {
		&self.network
	}

	/// Whether an [`UploadTicket`] is outstanding.
	pub fn is_uploading(&self) -> bool {
		self.upload_slot.get()
	}

	/// Validate the file choice and claim the upload slot.
	///
	/// Fails before anything is read if no file was chosen, its extension is
	/// unsupported, or another upload is still running.
	pub fn start_upload(&mut self, filename: Option<&str>) -> Result<UploadTicket> {
		let Some(filename) = filename else {
			return Err(NetworkError::NoFileSelected);
		};
		if self.upload_slot.get() {
			return Err(NetworkError::UploadInProgress);
		}
		let format = detect_format(filename)?;
		self.upload_slot.set(true);
		info!("starting upload of {filename}");
		Ok(UploadTicket {
			filename: filename.to_owned(),
			format,
			config: self.config.clone(),
			slot: Rc::clone(&self.upload_slot),
		})
	}

	/// Release the upload slot and commit `result` if it succeeded.
	///
	/// On failure the previously loaded network stays in place.
	pub fn finish_upload(
		&mut self,
		ticket: UploadTicket,
		result: Result<Upload>,
		sink: &mut impl ViewSink,
	) -> Result<LoadOutcome> {
		ticket.release();
		let upload = match result {
			Ok(upload) => upload,
			Err(error) => return fail(sink, error),
		};

		self.network = upload.network;
		self.last_view = None;
		let stats = compute_stats(&self.network);
		info!("loaded {}: {stats}", ticket.filename);

		let rendered = self
			.config
			.within_render_ceiling(stats.node_count, stats.edge_count);
		if rendered {
			sink.clear_error();
			self.render_full(stats, sink);
		} else {
			sink.report_error(&NetworkError::NetworkTooLarge {
				nodes: stats.node_count,
				edges: stats.edge_count,
			});
		}
		Ok(LoadOutcome {
			stats,
			rendered,
			skipped_lines: upload.diagnostics.skipped(),
		})
	}

	/// Run a whole upload: claim, ingest, commit.
	pub async fn upload<S, P>(
		&mut self,
		source: &mut S,
		progress: &mut P,
		sink: &mut impl ViewSink,
	) -> Result<LoadOutcome>
	where
		S: ChunkSource,
		P: ProgressSink + ?Sized,
	{
		let ticket = match self.start_upload(Some(source.name())) {
			Ok(ticket) => ticket,
			Err(error) => return fail(sink, error),
		};
		let result = ticket.ingest(source, progress).await;
		self.finish_upload(ticket, result, sink)
	}

	/// Render the first-degree neighbourhood of the ids in `text`.
	///
	/// On error the previous view is left as it was.
	pub fn query(&mut self, text: &str, sink: &mut impl ViewSink) -> Result<NetworkStats> {
		let ids: HashSet<NodeId> = match parse_query(text) {
			Ok(ids) => ids.into_iter().collect(),
			Err(error) => return fail(sink, error),
		};
		let sub = extract(&self.network, &ids);
		if sub.is_empty() {
			return fail(sink, NetworkError::NoMatchingNodes);
		}

		let stats = compute_stats(&sub);
		info!("query matched {stats}");
		sink.render(GraphView {
			network: &sub,
			stats,
			highlight: &ids,
		});
		sink.clear_error();
		self.last_view = Some(LastView::Query(sub));
		Ok(stats)
	}

	/// Render the whole loaded network if it is under the ceiling.
	pub fn show_full_network(&mut self, sink: &mut impl ViewSink) -> Result<NetworkStats> {
		if self.network.is_empty() {
			return fail(sink, NetworkError::NoNetworkLoaded);
		}
		let (nodes, edges) = (self.network.node_count(), self.network.edge_count());
		if !self.config.within_render_ceiling(nodes, edges) {
			return fail(sink, NetworkError::NetworkTooLarge { nodes, edges });
		}
		let stats = compute_stats(&self.network);
		sink.clear_error();
		self.render_full(stats, sink);
		Ok(stats)
	}

	fn render_full(&mut self, stats: NetworkStats, sink: &mut impl ViewSink) {
		sink.render(GraphView {
			network: &self.network,
			stats,
			highlight: &HashSet::new(),
		});
		self.last_view = Some(LastView::Full);
	}

	/// Delimited text of whatever was rendered last.
	///
	/// Fails with [`NetworkError::NoNetworkLoaded`] when nothing has been
	/// rendered yet.
	pub fn export_last_view(&self, delimiter: Delimiter) -> Result<String> {
		match &self.last_view {
			None => Err(NetworkError::NoNetworkLoaded),
			Some(LastView::Full) => export_delimited(&self.network, delimiter),
			Some(LastView::Query(sub)) => export_delimited(sub, delimiter),
		}
	}
}

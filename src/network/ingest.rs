//! Chunked, sequential ingestion of an uploaded file.
//!
//! Each chunk is read, decoded, split into lines and folded into the network
//! before the next read is issued, so the parse state is never touched by two
//! chunks at once. The first fatal error ends the upload and the partial
//! network is dropped with the [`ParseState`].

use std::future::Future;

use log::{debug, info};

use super::config::ExplorerConfig;
use super::error::{NetworkError, Result};
use super::format::InputFormat;
use super::line_buffer::LineBuffer;
use super::model::Network;
use super::parser::{Diagnostics, RecordParser};

/// A readable, sized input such as a browser `File`.
pub trait ChunkSource {
	/// Display name, used for logging.
	fn name(&self) -> &str;

	/// Total size in bytes.
	fn size(&self) -> u64;

	/// Read up to `len` bytes starting at `offset`.
	///
	/// Errors carry a human readable reason.
	fn read_chunk(
		&mut self,
		offset: u64,
		len: usize,
	) -> impl Future<Output = std::result::Result<Vec<u8>, String>>;
}

/// Receives percent-complete updates after every chunk.
pub trait ProgressSink {
	/// `percent` runs from 0 to 100.
	fn report_progress(&mut self, percent: f64);
}

impl<F: FnMut(f64)> ProgressSink for F {
	fn report_progress(&mut self, percent: f64) {
		self(percent)
	}
}

/// Result of a completed upload, ready to be committed to a session.
#[derive(Clone, Debug)]
pub struct Upload {
	/// Every well-formed line folded in.
	pub network: Network,
	/// What was skipped.
	pub diagnostics: Diagnostics,
	/// Lines read, header included.
	pub lines: usize,
}

/// Transient state of one upload.
#[derive(Debug)]
pub struct ParseState {
	offset: u64,
	buffer: LineBuffer,
	parser: RecordParser,
	network: Network,
	diagnostics: Diagnostics,
}

impl ParseState {
	/// Fresh state for one upload of `format`.
	pub fn new(format: InputFormat, config: &ExplorerConfig) -> Self {
		Self {
			offset: 0,
			buffer: LineBuffer::new(),
			parser: RecordParser::new(format),
			network: Network::new(),
			diagnostics: Diagnostics::with_limit(config.max_diagnostics),
		}
	}

	/// Bytes consumed so far.
	pub fn offset(&self) -> u64 {
		self.offset
	}

	/// Fold a raw chunk.
	pub fn fold_bytes(&mut self, bytes: &[u8]) -> Result<()> {
		self.offset += bytes.len() as u64;
		let lines = self.buffer.feed_bytes(bytes);
		self.parser
			.parse_lines(lines, &mut self.network, &mut self.diagnostics)
	}

	/// Fold an already-decoded chunk.
	pub fn fold_str(&mut self, chunk: &str) -> Result<()> {
		self.offset += chunk.len() as u64;
		let lines = self.buffer.feed(chunk);
		self.parser
			.parse_lines(lines, &mut self.network, &mut self.diagnostics)
	}

	/// End of input: parse the trailing line and hand over the network.
	pub fn finish(mut self) -> Result<Upload> {
		if let Some(last) = self.buffer.flush() {
			self.parser
				.parse_line(&last, &mut self.network, &mut self.diagnostics)?;
		}
		self.parser.finish()?;
		Ok(Upload {
			network: self.network,
			diagnostics: self.diagnostics,
			lines: self.parser.lines_seen(),
		})
	}
}

fn percent(done: u64, total: u64) -> f64 {
	if total == 0 {
		100.0
	} else {
		(done as f64 / total as f64 * 100.0).min(100.0)
	}
}

/// Read `source` to the end in `config.chunk_size` pieces.
pub async fn ingest<S, P>(
	source: &mut S,
	format: InputFormat,
	config: &ExplorerConfig,
	progress: &mut P,
) -> Result<Upload>
where
	S: ChunkSource,
	P: ProgressSink + ?Sized,
{
	let size = source.size();
	info!("ingesting {} ({size} bytes, {format:?})", source.name());

	let mut state = ParseState::new(format, config);
	let chunk_size = config.chunk_size.max(1);
	while state.offset() < size {
		let offset = state.offset();
		let want = chunk_size.min(usize::try_from(size - offset).unwrap_or(usize::MAX));
		let bytes = source
			.read_chunk(offset, want)
			.await
			.map_err(|reason| NetworkError::ChunkReadFailure { offset, reason })?;
		if bytes.is_empty() {
			return Err(NetworkError::ChunkReadFailure {
				offset,
				reason: "unexpected end of input".into(),
			});
		}
		state.fold_bytes(&bytes)?;
		debug!("folded {} bytes, offset now {}", bytes.len(), state.offset());
		progress.report_progress(percent(state.offset(), size));
	}
	if size == 0 {
		progress.report_progress(100.0);
	}

	let upload = state.finish()?;
	info!(
		"ingested {}: {} nodes, {} edges, {} lines skipped",
		source.name(),
		upload.network.node_count(),
		upload.network.edge_count(),
		upload.diagnostics.skipped()
	);
	Ok(upload)
}

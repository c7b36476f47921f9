//! Ingestion and rendering limits.

use log::warn;

/// Bytes read per chunk.
pub const DEFAULT_CHUNK_SIZE: usize = 1024 * 1024;
/// Above this many nodes the full network is kept in memory but not rendered.
pub const DEFAULT_MAX_RENDER_NODES: usize = 5000;
/// Above this many edges the full network is kept in memory but not rendered.
pub const DEFAULT_MAX_RENDER_EDGES: usize = 10_000;
/// Skipped lines beyond this are counted but not kept.
pub const DEFAULT_MAX_DIAGNOSTICS: usize = 100;

/// Tunables for ingestion and the render ceiling.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExplorerConfig {
	/// Bytes requested from the source per read.
	pub chunk_size: usize,
	/// Node ceiling for automatic full-network rendering.
	pub max_render_nodes: usize,
	/// Edge ceiling for automatic full-network rendering.
	pub max_render_edges: usize,
	/// How many malformed-line diagnostics an upload retains.
	pub max_diagnostics: usize,
}

impl Default for ExplorerConfig {
	fn default() -> Self {
		Self {
			chunk_size: DEFAULT_CHUNK_SIZE,
			max_render_nodes: DEFAULT_MAX_RENDER_NODES,
			max_render_edges: DEFAULT_MAX_RENDER_EDGES,
			max_diagnostics: DEFAULT_MAX_DIAGNOSTICS,
		}
	}
}

impl ExplorerConfig {
	/// Build a config from string settings such as URL query parameters.
	///
	/// Recognised keys are `chunk_size`, `max_nodes`, `max_edges` and
	/// `max_diagnostics`. Missing keys keep their defaults; unparsable or zero
	/// values are logged and ignored. `max_diagnostics` may be zero.
	pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
		let mut config = Self::default();
		let read = |key: &str, allow_zero: bool| -> Option<usize> {
			let raw = lookup(key)?;
			match raw.trim().parse::<usize>() {
				Ok(0) if !allow_zero => {
					warn!("ignoring {key}=0");
					None
				}
				Ok(v) => Some(v),
				Err(e) => {
					warn!("ignoring {key}={raw:?}: {e}");
					None
				}
			}
		};

		if let Some(v) = read("chunk_size", false) {
			config.chunk_size = v;
		}
		if let Some(v) = read("max_nodes", false) {
			config.max_render_nodes = v;
		}
		if let Some(v) = read("max_edges", false) {
			config.max_render_edges = v;
		}
		if let Some(v) = read("max_diagnostics", true) {
			config.max_diagnostics = v;
		}
		config
	}

	/// Whether a graph of this size may be handed to the renderer unasked.
	pub fn within_render_ceiling(&self, nodes: usize, edges: usize) -> bool {
		nodes <= self.max_render_nodes && edges <= self.max_render_edges
	}
}

#![allow(dead_code)]

use network_explorer::network::{
	ChunkSource, ExplorerConfig, GraphView, NetworkError, NodeId, ViewSink,
};

/// In-memory file that records every read it serves.
pub struct MemorySource {
	pub name: String,
	pub data: Vec<u8>,
	pub fail_from: Option<u64>,
	pub reads: Vec<(u64, usize)>,
}

impl MemorySource {
	pub fn new(name: &str, data: impl Into<Vec<u8>>) -> Self {
		Self {
			name: name.to_owned(),
			data: data.into(),
			fail_from: None,
			reads: Vec::new(),
		}
	}

	pub fn failing_from(mut self, offset: u64) -> Self {
		self.fail_from = Some(offset);
		self
	}
}

impl ChunkSource for MemorySource {
	fn name(&self) -> &str {
		&self.name
	}

	fn size(&self) -> u64 {
		self.data.len() as u64
	}

	async fn read_chunk(&mut self, offset: u64, len: usize) -> Result<Vec<u8>, String> {
		self.reads.push((offset, len));
		if self.fail_from.is_some_and(|at| offset >= at) {
			return Err("device unplugged".into());
		}
		let start = offset as usize;
		let end = (start + len).min(self.data.len());
		Ok(self.data[start..end].to_vec())
	}
}

/// Sink that remembers what it was asked to show.
#[derive(Default)]
pub struct Recorder {
	pub rendered: Vec<(Vec<NodeId>, Vec<(String, String)>)>,
	pub errors: Vec<NetworkError>,
}

impl ViewSink for Recorder {
	fn render(&mut self, view: GraphView<'_>) {
		let nodes = view.network.nodes().cloned().collect();
		let edges = view
			.network
			.edges()
			.iter()
			.map(|e| (e.source.clone(), e.target.clone()))
			.collect();
		self.rendered.push((nodes, edges));
	}

	fn report_error(&mut self, error: &NetworkError) {
		self.errors.push(error.clone());
	}
}

pub fn config_with_chunk(chunk_size: usize) -> ExplorerConfig {
	ExplorerConfig {
		chunk_size,
		..ExplorerConfig::default()
	}
}

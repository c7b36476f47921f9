use leptos::prelude::*;

use super::types::GraphData;
use crate::network::{GraphView, NetworkError, ViewSink};

/// Forwards session output into page signals.
#[derive(Clone, Copy)]
pub struct SignalSink {
	pub graph: WriteSignal<Option<GraphData>>,
	pub error: WriteSignal<Option<String>>,
}

impl ViewSink for SignalSink {
	fn render(&mut self, view: GraphView<'_>) {
		self.graph.set(Some(GraphData::from(view)));
	}

	fn report_error(&mut self, error: &NetworkError) {
		self.error.set(Some(error.to_string()));
	}

	fn clear_error(&mut self) {
		self.error.set(None);
	}
}

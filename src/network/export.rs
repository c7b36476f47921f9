//! Delimited-text export of a rendered network.

use super::error::{NetworkError, Result};
use super::format::Delimiter;
use super::model::Subgraph;

fn export_failed(error: impl std::fmt::Display) -> NetworkError {
	NetworkError::ExportFailed {
		reason: error.to_string(),
	}
}

/// Render edges as delimited text with a `source`/`target` header.
///
/// An `interaction` column is added when any edge carries a label. Fields
/// holding the delimiter or a quote are quoted, so the output re-parses as a
/// tabular upload with the same edge pairs.
pub fn export_delimited(subgraph: &Subgraph, delimiter: Delimiter) -> Result<String> {
	let with_interaction = subgraph.edges().iter().any(|e| e.interaction.is_some());
	let mut writer = csv::WriterBuilder::new()
		.delimiter(delimiter.as_byte())
		.terminator(csv::Terminator::Any(b'\n'))
		.from_writer(Vec::new());

	let mut header = vec!["source", "target"];
	if with_interaction {
		header.push("interaction");
	}
	writer.write_record(&header).map_err(export_failed)?;

	for edge in subgraph.edges() {
		let mut row = vec![edge.source.as_str(), edge.target.as_str()];
		if with_interaction {
			row.push(edge.interaction.as_deref().unwrap_or_default());
		}
		writer.write_record(&row).map_err(export_failed)?;
	}

	let bytes = writer.into_inner().map_err(export_failed)?;
	String::from_utf8(bytes).map_err(export_failed)
}

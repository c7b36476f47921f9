//! Line parsers for the two supported formats.
//!
//! Lines are folded into a caller-owned [`Network`]; malformed lines are
//! skipped and recorded in [`Diagnostics`] rather than failing the upload.

use log::warn;

use super::error::{MalformedLine, NetworkError, ParseDiagnostic, Result};
use super::format::{self, InputFormat, TabularHeader};
use super::model::Network;

/// Skipped-line record for one upload.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Diagnostics {
	kept: Vec<ParseDiagnostic>,
	skipped: usize,
	limit: usize,
}

impl Diagnostics {
	/// Retain at most `limit` diagnostics; the rest are only counted.
	pub fn with_limit(limit: usize) -> Self {
		Self {
			limit,
			..Self::default()
		}
	}

	/// Log and count a skipped line.
	pub fn record(&mut self, line: usize, issue: MalformedLine) {
		let diag = ParseDiagnostic { line, issue };
		warn!("skipping {diag}");
		self.skipped += 1;
		if self.kept.len() < self.limit {
			self.kept.push(diag);
		}
	}

	/// Total number of skipped lines.
	pub fn skipped(&self) -> usize {
		self.skipped
	}

	/// The retained diagnostics, oldest first.
	pub fn entries(&self) -> &[ParseDiagnostic] {
		&self.kept
	}
}

/// Parse one data row of a delimited file.
///
/// Fields may be double-quoted, as [`export_delimited`](super::export_delimited)
/// writes ids that contain the delimiter.
pub fn parse_tabular_line(
	line: &str,
	header: &TabularHeader,
	network: &mut Network,
) -> std::result::Result<(), MalformedLine> {
	if line.trim().is_empty() {
		return Ok(());
	}
	let parts = format::split_fields(line, header.delimiter)
		.map_err(|e| MalformedLine::Unreadable {
			reason: e.to_string(),
		})?;
	let required = header.required_fields();
	if parts.len() < required {
		return Err(MalformedLine::TooFewFields {
			found: parts.len(),
			required,
		});
	}

	let (source, target) = (&parts[header.source_idx], &parts[header.target_idx]);
	if source.is_empty() || target.is_empty() {
		return Err(MalformedLine::EmptyIdentifier);
	}
	network.add_edge(source, target, None);
	Ok(())
}

/// Parse one `source interaction target...` line.
///
/// A line with no targets still contributes its source as a lone node.
pub fn parse_interaction_line(
	line: &str,
	network: &mut Network,
) -> std::result::Result<(), MalformedLine> {
	if line.trim().is_empty() {
		return Ok(());
	}
	let parts: Vec<&str> = line.split_whitespace().collect();
	let [source, interaction, targets @ ..] = parts.as_slice() else {
		return Err(MalformedLine::TooFewTokens { found: parts.len() });
	};
	if source.is_empty() || targets.iter().any(|t| t.is_empty()) {
		return Err(MalformedLine::EmptyIdentifier);
	}

	network.add_node(source);
	for target in targets {
		network.add_edge(source, target, Some(*interaction));
	}
	Ok(())
}

/// Per-upload line dispatcher. Consumes the header on the first tabular line.
#[derive(Clone, Debug)]
pub struct RecordParser {
	format: InputFormat,
	header: Option<TabularHeader>,
	line_no: usize,
}

impl RecordParser {
	/// A parser that has seen no lines yet.
	pub fn new(format: InputFormat) -> Self {
		Self {
			format,
			header: None,
			line_no: 0,
		}
	}

	/// Lines seen so far, header included.
	pub fn lines_seen(&self) -> usize {
		self.line_no
	}

	/// The resolved header, once the first tabular line has been read.
	pub fn header(&self) -> Option<&TabularHeader> {
		self.header.as_ref()
	}

	/// Fold one line into `network`.
	///
	/// Only a bad header is fatal; malformed data lines land in `diagnostics`.
	pub fn parse_line(
		&mut self,
		line: &str,
		network: &mut Network,
		diagnostics: &mut Diagnostics,
	) -> Result<()> {
		self.line_no += 1;
		let outcome = match (self.format, self.header) {
			(InputFormat::Interaction, _) => parse_interaction_line(line, network),
			(InputFormat::Tabular(delimiter), None) => {
				self.header = Some(format::parse_header(line, delimiter)?);
				Ok(())
			}
			(InputFormat::Tabular(_), Some(header)) => parse_tabular_line(line, &header, network),
		};
		if let Err(issue) = outcome {
			diagnostics.record(self.line_no, issue);
		}
		Ok(())
	}

	/// [`parse_line`](Self::parse_line) over a batch, stopping at the first fatal error.
	pub fn parse_lines<I, S>(
		&mut self,
		lines: I,
		network: &mut Network,
		diagnostics: &mut Diagnostics,
	) -> Result<()>
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		lines
			.into_iter()
			.try_for_each(|line| self.parse_line(line.as_ref(), network, diagnostics))
	}

	/// End of input. A tabular file that never produced a header is invalid.
	pub fn finish(&self) -> Result<()> {
		match (self.format, self.header) {
			(InputFormat::Tabular(_), None) => Err(NetworkError::MissingRequiredColumns),
			_ => Ok(()),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::network::format::Delimiter;

	fn csv_header() -> TabularHeader {
		TabularHeader {
			delimiter: Delimiter::Comma,
			source_idx: 1,
			target_idx: 0,
		}
	}

	fn pairs(net: &Network) -> Vec<(&str, &str)> {
		net.edges()
			.iter()
			.map(|e| (e.source.as_str(), e.target.as_str()))
			.collect()
	}

	#[test]
	fn tabular_uses_resolved_columns_and_trims() {
		let mut net = Network::new();
		parse_tabular_line(" B , A ,x", &csv_header(), &mut net).unwrap();
		assert_eq!(pairs(&net), [("A", "B")]);
		assert_eq!(net.edges()[0].interaction, None);
	}

	#[test]
	fn tabular_short_or_empty_rows_are_malformed() {
		let mut net = Network::new();
		assert_eq!(
			parse_tabular_line("A", &csv_header(), &mut net),
			Err(MalformedLine::TooFewFields {
				found: 1,
				required: 2
			})
		);
		assert_eq!(
			parse_tabular_line("A, ", &csv_header(), &mut net),
			Err(MalformedLine::EmptyIdentifier)
		);
		assert_eq!(parse_tabular_line("   ", &csv_header(), &mut net), Ok(()));
		assert!(net.is_empty());
	}

	#[test]
	fn tabular_quoted_ids_may_hold_the_delimiter() {
		let mut net = Network::new();
		parse_tabular_line("\"b,c\",\"a \"\"1\"\"\"", &csv_header(), &mut net).unwrap();
		assert_eq!(pairs(&net), [("a \"1\"", "b,c")]);
	}

	#[test]
	fn interaction_line_fans_out_targets() {
		let mut net = Network::new();
		parse_interaction_line("  A\tpp  B C\r", &mut net).unwrap();
		assert_eq!(pairs(&net), [("A", "B"), ("A", "C")]);
		assert!(
			net.edges()
				.iter()
				.all(|e| e.interaction.as_deref() == Some("pp"))
		);
	}

	#[test]
	fn interaction_line_without_targets_adds_lone_node() {
		let mut net = Network::new();
		parse_interaction_line("A pp", &mut net).unwrap();
		assert_eq!(net.node_count(), 1);
		assert_eq!(net.edge_count(), 0);
		assert_eq!(
			parse_interaction_line("A", &mut net),
			Err(MalformedLine::TooFewTokens { found: 1 })
		);
	}

	#[test]
	fn record_parser_consumes_header_once() {
		let mut parser = RecordParser::new(InputFormat::Tabular(Delimiter::Comma));
		let (mut net, mut diags) = (Network::new(), Diagnostics::with_limit(10));
		parser
			.parse_lines(
				["Target,Source", "B,A", "oops", "D,C", ""],
				&mut net,
				&mut diags,
			)
			.unwrap();
		parser.finish().unwrap();

		assert_eq!(pairs(&net), [("A", "B"), ("C", "D")]);
		assert_eq!(diags.skipped(), 1);
		assert_eq!(diags.entries()[0].line, 3);
		assert_eq!(parser.lines_seen(), 5);
	}

	#[test]
	fn record_parser_rejects_bad_header() {
		let mut parser = RecordParser::new(InputFormat::Tabular(Delimiter::Tab));
		let (mut net, mut diags) = (Network::new(), Diagnostics::default());
		assert_eq!(
			parser.parse_line("from\tto", &mut net, &mut diags),
			Err(NetworkError::MissingRequiredColumns)
		);
	}

	#[test]
	fn tabular_without_any_line_is_missing_columns() {
		let parser = RecordParser::new(InputFormat::Tabular(Delimiter::Comma));
		assert_eq!(parser.finish(), Err(NetworkError::MissingRequiredColumns));
		assert_eq!(RecordParser::new(InputFormat::Interaction).finish(), Ok(()));
	}

	#[test]
	fn diagnostics_limit_counts_everything() {
		let mut diags = Diagnostics::with_limit(1);
		diags.record(2, MalformedLine::EmptyIdentifier);
		diags.record(5, MalformedLine::EmptyIdentifier);
		assert_eq!(diags.skipped(), 2);
		assert_eq!(diags.entries().len(), 1);
	}
}

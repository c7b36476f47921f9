//! Error kinds surfaced by uploads and queries.

/// A failure reported to the user through [`ViewSink::report_error`](super::ViewSink::report_error).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NetworkError {
	/// Upload was requested without a file.
	#[error("Please select a file first")]
	NoFileSelected,

	/// The file extension is not one of `csv`, `tsv`, `txt` or `sif`.
	#[error("Unsupported file format '{extension}'. Please use .csv, .tsv, .txt, or .sif files")]
	UnsupportedFormat {
		/// Lower-cased extension, empty when the name has none.
		extension: String,
	},

	/// The tabular header lacks a `source` or `target` column.
	#[error(
		"Invalid format: missing source or target columns. Header must contain \"source\" and \"target\" columns."
	)]
	MissingRequiredColumns,

	/// The underlying reader failed part way through the file.
	#[error("Error reading file chunk at byte {offset}: {reason}")]
	ChunkReadFailure {
		/// Byte position of the failed read.
		offset: u64,
		/// What the source reported.
		reason: String,
	},

	/// The query text held no node ids.
	#[error("Please enter node IDs to query")]
	EmptyQuery,

	/// None of the queried ids exist in the loaded network.
	#[error("No matching nodes found in the network")]
	NoMatchingNodes,

	/// Another upload on the same session has not finished yet.
	#[error("An upload is already in progress")]
	UploadInProgress,

	/// Nothing has been loaded yet.
	#[error("No network loaded yet.")]
	NoNetworkLoaded,

	/// The full network is above the render ceiling.
	#[error(
		"Large network loaded in memory ({nodes} nodes, {edges} edges). Please query a subgraph below."
	)]
	NetworkTooLarge {
		/// Nodes in the loaded network.
		nodes: usize,
		/// Edges in the loaded network.
		edges: usize,
	},

	/// The delimited writer failed.
	#[error("Could not export the network: {reason}")]
	ExportFailed {
		/// Writer error text.
		reason: String,
	},
}

impl NetworkError {
	/// Whether this error aborts an upload in progress.
	pub fn is_fatal(&self) -> bool {
		matches!(
			self,
			Self::UnsupportedFormat { .. } | Self::MissingRequiredColumns | Self::ChunkReadFailure { .. }
		)
	}
}

/// Why a single line was skipped.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MalformedLine {
	/// A tabular row is shorter than the header-resolved columns require.
	#[error("expected at least {required} fields, found {found}")]
	TooFewFields {
		/// Fields on the line.
		found: usize,
		/// Fields needed to reach both columns.
		required: usize,
	},

	/// An interaction line lacks its source or interaction token.
	#[error("expected a source and an interaction, found {found} token(s)")]
	TooFewTokens {
		/// Whitespace-separated tokens on the line.
		found: usize,
	},

	/// The source or a target is blank.
	#[error("empty node identifier")]
	EmptyIdentifier,

	/// A quoted row could not be split into fields.
	#[error("unreadable row: {reason}")]
	Unreadable {
		/// Reader error text.
		reason: String,
	},
}

/// A skipped line together with its 1-based position in the file.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("line {line}: {issue}")]
pub struct ParseDiagnostic {
	/// Line number, counting the header.
	pub line: usize,
	/// What was wrong with it.
	pub issue: MalformedLine,
}

/// Shorthand for results carrying a [`NetworkError`].
pub type Result<T> = std::result::Result<T, NetworkError>;

//! Streaming network ingestion, statistics and neighbourhood queries.
//!
//! Nothing in here touches the DOM; the browser side supplies a
//! [`ChunkSource`] for reading and a [`ViewSink`] for output.

mod config;
mod error;
mod export;
mod format;
mod ingest;
mod line_buffer;
mod model;
mod parser;
mod session;
mod stats;
mod subgraph;

pub use config::ExplorerConfig;
pub use error::{MalformedLine, NetworkError, ParseDiagnostic, Result};
pub use export::export_delimited;
pub use format::{Delimiter, InputFormat, TabularHeader, detect_format, extension, parse_header};
pub use ingest::{ChunkSource, ParseState, ProgressSink, Upload, ingest};
pub use line_buffer::LineBuffer;
pub use model::{Edge, Network, NodeId, Subgraph};
pub use parser::{Diagnostics, RecordParser, parse_interaction_line, parse_tabular_line};
pub use session::{GraphView, LoadOutcome, Session, UploadTicket, ViewSink};
pub use stats::{NetworkStats, compute_stats, count_components};
pub use subgraph::{extract, parse_query};

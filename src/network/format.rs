//! Input format detection and tabular header resolution.

use log::debug;

use super::error::{NetworkError, Result};

/// How the lines of an upload are interpreted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputFormat {
	/// Delimited rows under a header naming `source` and `target`.
	Tabular(Delimiter),
	/// Simple interaction format: `source interaction target...`.
	Interaction,
}

/// Field separator for tabular files.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Delimiter {
	/// `,` (`.csv`)
	Comma,
	/// `\t` (`.tsv`, `.txt`)
	Tab,
}

impl Delimiter {
	/// The separator character.
	pub fn as_char(self) -> char {
		match self {
			Self::Comma => ',',
			Self::Tab => '\t',
		}
	}

	/// The separator as the single byte the `csv` reader and writer take.
	pub fn as_byte(self) -> u8 {
		match self {
			Self::Comma => b',',
			Self::Tab => b'\t',
		}
	}
}

/// Column positions resolved from the header line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TabularHeader {
	/// Separator the header was split with.
	pub delimiter: Delimiter,
	/// Index of the `source` column.
	pub source_idx: usize,
	/// Index of the `target` column.
	pub target_idx: usize,
}

impl TabularHeader {
	/// Fields a data row needs to reach both columns.
	pub fn required_fields(&self) -> usize {
		self.source_idx.max(self.target_idx) + 1
	}
}

/// Lower-cased extension of `filename`, empty when there is none.
pub fn extension(filename: &str) -> String {
	filename
		.rsplit_once('.')
		.map(|(_, ext)| ext.to_ascii_lowercase())
		.unwrap_or_default()
}

/// Pick the parser for a file by its extension.
pub fn detect_format(filename: &str) -> Result<InputFormat> {
	match extension(filename).as_str() {
		"csv" => Ok(InputFormat::Tabular(Delimiter::Comma)),
		"tsv" | "txt" => Ok(InputFormat::Tabular(Delimiter::Tab)),
		"sif" => Ok(InputFormat::Interaction),
		other => Err(NetworkError::UnsupportedFormat {
			extension: other.to_owned(),
		}),
	}
}

/// Split one delimited line into trimmed fields.
///
/// A field that starts with `"` runs to its closing quote and may contain the
/// delimiter; `""` inside it is a literal quote. Lines without any quote are
/// split plainly.
pub fn split_fields(
	line: &str,
	delimiter: Delimiter,
) -> std::result::Result<Vec<String>, csv::Error> {
	if !line.contains('"') {
		return Ok(line
			.split(delimiter.as_char())
			.map(|f| f.trim().to_owned())
			.collect());
	}
	let mut reader = csv::ReaderBuilder::new()
		.has_headers(false)
		.flexible(true)
		.delimiter(delimiter.as_byte())
		.from_reader(line.as_bytes());
	let mut record = csv::StringRecord::new();
	reader.read_record(&mut record)?;
	Ok(record.iter().map(|f| f.trim().to_owned()).collect())
}

/// Locate the `source` and `target` columns (case-insensitive).
pub fn parse_header(line: &str, delimiter: Delimiter) -> Result<TabularHeader> {
	let fields: Vec<String> = match split_fields(line, delimiter) {
		Ok(fields) => fields.iter().map(|f| f.to_lowercase()).collect(),
		Err(e) => {
			debug!("unreadable header: {e}");
			return Err(NetworkError::MissingRequiredColumns);
		}
	};
	let position = |name: &str| fields.iter().position(|f| f == name);

	let (Some(source_idx), Some(target_idx)) = (position("source"), position("target")) else {
		return Err(NetworkError::MissingRequiredColumns);
	};
	debug!("header resolved: source column {source_idx}, target column {target_idx}");
	Ok(TabularHeader {
		delimiter,
		source_idx,
		target_idx,
	})
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn formats_by_extension() {
		assert_eq!(
			detect_format("net.csv"),
			Ok(InputFormat::Tabular(Delimiter::Comma))
		);
		assert_eq!(
			detect_format("NET.TSV"),
			Ok(InputFormat::Tabular(Delimiter::Tab))
		);
		assert_eq!(
			detect_format("a.b.txt"),
			Ok(InputFormat::Tabular(Delimiter::Tab))
		);
		assert_eq!(detect_format("x.sif"), Ok(InputFormat::Interaction));
	}

	#[test]
	fn unknown_extension_is_rejected() {
		assert_eq!(
			detect_format("graph.json"),
			Err(NetworkError::UnsupportedFormat {
				extension: "json".into()
			})
		);
		assert!(matches!(
			detect_format("README"),
			Err(NetworkError::UnsupportedFormat { .. })
		));
	}

	#[test]
	fn header_columns_any_order_and_case() {
		let h = parse_header(" Weight , TARGET,Source \r", Delimiter::Comma).unwrap();
		assert_eq!((h.source_idx, h.target_idx), (2, 1));
		assert_eq!(h.required_fields(), 3);

		let h = parse_header("source\ttarget\tscore", Delimiter::Tab).unwrap();
		assert_eq!((h.source_idx, h.target_idx), (0, 1));

		let h = parse_header("\"Target\",\"source\"", Delimiter::Comma).unwrap();
		assert_eq!((h.source_idx, h.target_idx), (1, 0));
	}

	#[test]
	fn quoted_fields_keep_their_delimiter() {
		assert_eq!(
			split_fields("\"x,y\", z ,\"say \"\"hi\"\"\"", Delimiter::Comma).unwrap(),
			["x,y", "z", "say \"hi\""]
		);
		assert_eq!(
			split_fields("\"a\tb\"\tc", Delimiter::Tab).unwrap(),
			["a\tb", "c"]
		);
		// quotes inside an unquoted field are literal
		assert_eq!(
			split_fields("a\"b,c", Delimiter::Comma).unwrap(),
			["a\"b", "c"]
		);
		assert_eq!(split_fields(" A , B ", Delimiter::Comma).unwrap(), ["A", "B"]);
	}

	#[test]
	fn header_without_target_fails() {
		assert_eq!(
			parse_header("source,dest", Delimiter::Comma),
			Err(NetworkError::MissingRequiredColumns)
		);
		// a comma header read as tab-separated is a single field
		assert_eq!(
			parse_header("source,target", Delimiter::Tab),
			Err(NetworkError::MissingRequiredColumns)
		);
	}
}

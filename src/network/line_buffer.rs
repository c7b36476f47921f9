//! Splits a stream of chunks into complete lines.

/// Carries the unfinished tail of the input between chunks.
#[derive(Clone, Debug, Default)]
pub struct LineBuffer {
	partial: String,
	pending: Vec<u8>,
}

impl LineBuffer {
	/// An empty buffer.
	pub fn new() -> Self {
		Self::default()
	}

	/// Append `chunk` and return every line it completes.
	///
	/// The text after the last `\n` (possibly empty) is held back.
	pub fn feed(&mut self, chunk: &str) -> Vec<String> {
		self.partial.push_str(chunk);
		let Some(last_nl) = self.partial.rfind('\n') else {
			return Vec::new();
		};
		let rest = self.partial.split_off(last_nl + 1);
		let complete = std::mem::replace(&mut self.partial, rest);
		complete[..last_nl].split('\n').map(str::to_owned).collect()
	}

	/// Decode raw bytes as UTF-8 and feed them.
	///
	/// A multi-byte sequence cut by the chunk boundary is kept until the next
	/// call; invalid bytes become U+FFFD.
	pub fn feed_bytes(&mut self, bytes: &[u8]) -> Vec<String> {
		self.pending.extend_from_slice(bytes);
		let mut text = String::with_capacity(self.pending.len());
		let mut consumed = 0;
		loop {
			match std::str::from_utf8(&self.pending[consumed..]) {
				Ok(valid) => {
					text.push_str(valid);
					consumed = self.pending.len();
					break;
				}
				Err(e) => {
					let valid_end = consumed + e.valid_up_to();
					text.push_str(&String::from_utf8_lossy(&self.pending[consumed..valid_end]));
					match e.error_len() {
						Some(bad) => {
							text.push(char::REPLACEMENT_CHARACTER);
							consumed = valid_end + bad;
						}
						None => {
							consumed = valid_end;
							break;
						}
					}
				}
			}
		}
		self.pending.drain(..consumed);
		self.feed(&text)
	}

	/// End of input: the held-back line if it has any content.
	pub fn flush(&mut self) -> Option<String> {
		if !self.pending.is_empty() {
			let tail = String::from_utf8_lossy(&self.pending).into_owned();
			self.pending.clear();
			self.partial.push_str(&tail);
		}
		let line = std::mem::take(&mut self.partial);
		(!line.trim().is_empty()).then_some(line)
	}
}

use js_sys::Uint8Array;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::File;

use crate::network::ChunkSource;

fn js_reason(err: JsValue) -> String {
	err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

/// A user-selected file, read one `Blob` slice at a time.
pub struct BrowserFile {
	file: File,
	name: String,
}

impl BrowserFile {
	pub fn new(file: File) -> Self {
		let name = file.name();
		Self { file, name }
	}
}

impl ChunkSource for BrowserFile {
	fn name(&self) -> &str {
		&self.name
	}

	fn size(&self) -> u64 {
		self.file.size() as u64
	}

	async fn read_chunk(&mut self, offset: u64, len: usize) -> Result<Vec<u8>, String> {
		let end = offset + len as u64;
		let blob = self
			.file
			.slice_with_f64_and_f64(offset as f64, end as f64)
			.map_err(js_reason)?;
		let buffer = JsFuture::from(blob.array_buffer())
			.await
			.map_err(js_reason)?;
		Ok(Uint8Array::new(&buffer).to_vec())
	}
}

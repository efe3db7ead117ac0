//! # Image File Reading
//!
//! Turns files picked in an `<input type="file">` into `data:` URLs the sell
//! form can preview. Publishing later uploads them to remote storage.

use futures::future::join_all;
use js_sys::Uint8Array;
use lib_utils::b64::encode_data_url;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, HtmlInputElement};

const FALLBACK_MIME: &str = "application/octet-stream";

/// Up to `limit` image files from a file input, in selection order.
pub fn files_from_input(input: &HtmlInputElement, limit: usize) -> Vec<File> {
    let Some(list) = input.files() else {
        return Vec::new();
    };

    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter(|file| file.type_().starts_with("image/"))
        .take(limit)
        .collect()
}

async fn read_image(file: File) -> Result<String, JsValue> {
    let buffer = JsFuture::from(file.array_buffer()).await?;
    let bytes = Uint8Array::new(&buffer).to_vec();

    let mime_type = file.type_();
    let mime_type = if mime_type.is_empty() { FALLBACK_MIME.to_string() } else { mime_type };
    Ok(encode_data_url(&mime_type, bytes))
}

/// Read every file concurrently, keeping the input order. Files that fail to
/// read are skipped and logged.
pub async fn read_images(files: Vec<File>) -> Vec<String> {
    let names: Vec<String> = files.iter().map(|file| file.name()).collect();
    let results = join_all(files.into_iter().map(read_image)).await;

    results
        .into_iter()
        .zip(names)
        .filter_map(|(result, name)| match result {
            Ok(url) => Some(url),
            Err(e) => {
                log::warn!("Failed to read image '{}': {:?}", name, e);
                None
            }
        })
        .collect()
}

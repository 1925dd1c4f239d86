use js_sys::Promise;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FileReader, HtmlInputElement};

fn js_error(context: &str, err: JsValue) -> String {
    let message = format!("{}: {:?}", context, err);
    log::error!("{}", message);
    message
}

/// Reads `file` into a `data:` URL for previews.
pub async fn read_as_data_url(file: File) -> Result<String, String> {
    log::debug!("Reading '{}' ({} bytes) as data URL", file.name(), file.size());
    let reader = FileReader::new().map_err(|e| js_error("Could not create file reader", e))?;

    let done = Promise::new(&mut |resolve, reject| {
        reader.set_onload(Some(&resolve));
        reader.set_onerror(Some(&reject));
    });
    reader
        .read_as_data_url(&file)
        .map_err(|e| js_error("Could not start reading file", e))?;
    JsFuture::from(done)
        .await
        .map_err(|e| js_error("Could not read file", e))?;

    reader
        .result()
        .map_err(|e| js_error("Could not read file", e))?
        .as_string()
        .ok_or_else(|| "File reader returned no text".to_string())
}

/// First file picked in a file input, if any.
pub fn selected_file(input: &HtmlInputElement) -> Option<File> {
    input.files().and_then(|files| files.get(0))
}

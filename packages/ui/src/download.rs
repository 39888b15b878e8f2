//! Hand a downloaded report to the browser as a file.

use api::ReportFile;

/// Save `file` through a temporary object URL and a synthetic `<a download>`
/// click. Outside the browser this only logs.
#[cfg(target_arch = "wasm32")]
pub fn save_file(file: &ReportFile) -> Result<(), String> {
    use wasm_bindgen::JsCast;

    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;

    let bytes = js_sys::Uint8Array::from(file.bytes.as_slice());
    let parts = js_sys::Array::of1(&bytes);
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(file.mime);
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(|e| format!("{e:?}"))?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(|e| format!("{e:?}"))?;

    let anchor: web_sys::HtmlAnchorElement = document
        .create_element("a")
        .map_err(|e| format!("{e:?}"))?
        .dyn_into()
        .map_err(|_| "not an anchor".to_string())?;
    anchor.set_href(&url);
    anchor.set_download(&file.filename);
    anchor.click();

    web_sys::Url::revoke_object_url(&url).map_err(|e| format!("{e:?}"))?;
    tracing::info!("saved {}", file.filename);
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn save_file(file: &ReportFile) -> Result<(), String> {
    tracing::info!(
        "download of {} ({} bytes) is only available in the browser",
        file.filename,
        file.bytes.len()
    );
    Ok(())
}

//! Browser-side saving of encoded PNG bytes.
//!
//! The normal path builds a `Blob`, wraps it in an object URL, and
//! clicks a synthetic anchor with a `download` attribute. Some
//! embedders (sandboxed iframes, certain in-app browsers) refuse
//! programmatic downloads; in that case the bytes are presented in a
//! new tab instead so the user can save them manually. An error is
//! returned only when both paths fail.

use js_sys::{Array, Uint8Array};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, HtmlImageElement, Url};

/// Save PNG bytes to the user's machine under the given filename.
pub fn save_png(bytes: &[u8], filename: &str) -> Result<(), JsValue> {
    let url = object_url(bytes)?;

    match trigger_download(&url, filename) {
        Ok(()) => {
            // The click has dereferenced the URL; it can go.
            let _ = Url::revoke_object_url(&url);
            Ok(())
        }
        Err(_) => {
            // Keep the URL alive: the new tab's <img> still points at it.
            present_in_new_tab(&url, filename)
        }
    }
}

/// Wrap the bytes in a Blob and mint an object URL for it.
fn object_url(bytes: &[u8]) -> Result<String, JsValue> {
    let parts = Array::new();
    parts.push(&Uint8Array::from(bytes));

    let props = BlobPropertyBag::new();
    props.set_type("image/png");

    let blob = Blob::new_with_u8_array_sequence_and_options(parts.as_ref(), &props)?;
    Url::create_object_url_with_blob(&blob)
}

/// Click a synthetic `<a download>` pointing at the URL.
fn trigger_download(url: &str, filename: &str) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("no document body"))?;

    let anchor: HtmlAnchorElement = document
        .create_element("a")?
        .dyn_into()
        .map_err(JsValue::from)?;
    anchor.set_href(url);
    anchor.set_download(filename);

    // The anchor must be in the DOM for the click to count in some
    // browsers.
    body.append_child(&anchor)?;
    anchor.click();
    anchor.remove();

    Ok(())
}

/// Fallback: open the image in a new tab for a manual save.
fn present_in_new_tab(url: &str, filename: &str) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let tab = window
        .open_with_url_and_target("about:blank", "_blank")?
        .ok_or_else(|| JsValue::from_str("popup blocked"))?;

    let document = tab
        .document()
        .ok_or_else(|| JsValue::from_str("no document in new tab"))?;
    document.set_title(filename);

    let img: HtmlImageElement = document
        .create_element("img")?
        .dyn_into()
        .map_err(JsValue::from)?;
    img.set_src(url);
    img.set_alt(filename);

    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("no body in new tab"))?;
    body.append_child(&img)?;

    Ok(())
}

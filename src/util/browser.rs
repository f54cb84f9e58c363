//! Browser glue: confirm dialogs, file downloads, theme class, reload.
//!
//! TRADE-OFFS
//! ==========
//! Every helper is best effort. A missing window or a rejected DOM call is
//! logged and otherwise ignored; the app keeps running on in-memory state.

use wasm_bindgen::JsValue;

use super::confirm::Confirm;
use crate::state::Theme;

/// `window.confirm`. Answers no when the dialog cannot be shown.
#[derive(Clone, Copy, Debug, Default)]
pub struct WindowConfirm;

impl Confirm for WindowConfirm {
    fn confirm(&self, message: &str) -> bool {
        let Some(window) = web_sys::window() else {
            return false;
        };
        window.confirm_with_message(message).unwrap_or_else(|e| {
            tracing::warn!(error = ?e, "confirm dialog failed");
            false
        })
    }
}

/// Offer `json` as a download named `file_name`.
pub fn download_json(file_name: &str, json: &str) {
    if let Err(e) = try_download(file_name, json) {
        tracing::warn!(file = %file_name, error = ?e, "download failed");
    }
}

fn try_download(file_name: &str, json: &str) -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let parts = js_sys::Array::of1(&JsValue::from_str(json));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("application/json");
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)?;

    let anchor: web_sys::HtmlAnchorElement = wasm_bindgen::JsCast::dyn_into(document.create_element("a")?)?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();
    web_sys::Url::revoke_object_url(&url)
}

/// Put `theme-<name>` on the `<html>` element, removing the other themes.
pub fn apply_theme(theme: Theme) {
    let Some(root) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) else {
        return;
    };
    let classes = root.class_list();
    for other in Theme::ALL {
        if let Err(e) = classes.remove_1(&other.class()) {
            tracing::warn!(error = ?e, "failed to clear theme class");
        }
    }
    if let Err(e) = classes.add_1(&theme.class()) {
        tracing::warn!(theme = theme.as_str(), error = ?e, "failed to apply theme class");
    }
}

/// Reload the page so every slot is reopened from storage.
pub fn reload() {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.location().reload() {
        tracing::warn!(error = ?e, "page reload failed");
    }
}

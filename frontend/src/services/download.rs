//! Browser download plumbing: object-URL downloads for generated
//! bytes and data-URL downloads for canvas snapshots.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Derived filename for the CSV export of a date range.
pub fn csv_export_filename(from: &str, to: &str) -> String {
    format!("expenses_{}_to_{}.csv", from, to)
}

/// The export endpoint requires both bounds; an empty bound must block
/// the request before any network call happens.
pub fn export_range_ready(from: &str, to: &str) -> bool {
    !from.trim().is_empty() && !to.trim().is_empty()
}

/// Saves raw bytes as a file via an object-URL anchor click.
pub fn save_bytes(filename: &str, bytes: &[u8], mime: &str) -> Result<(), JsValue> {
    let array = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::of1(&array);
    let options = BlobPropertyBag::new();
    options.set_type(mime);
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)?;
    let url = Url::create_object_url_with_blob(&blob)?;
    let result = click_anchor(&url, filename);
    Url::revoke_object_url(&url)?;
    result
}

/// Saves an already-encoded data URL (e.g. a canvas PNG snapshot).
pub fn save_data_url(filename: &str, data_url: &str) -> Result<(), JsValue> {
    click_anchor(data_url, filename)
}

fn click_anchor(href: &str, download: &str) -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let anchor: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(href);
    anchor.set_download(download);
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("no body"))?;
    body.append_child(&anchor)?;
    anchor.click();
    anchor.remove();
    Ok(())
}

/// Blocking user-facing alert, used by the export flows.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_filename_embeds_both_bounds() {
        assert_eq!(
            csv_export_filename("2026-01-01", "2026-01-31"),
            "expenses_2026-01-01_to_2026-01-31.csv"
        );
    }

    #[test]
    fn export_blocked_unless_both_bounds_present() {
        assert!(!export_range_ready("", ""));
        assert!(!export_range_ready("2026-01-01", ""));
        assert!(!export_range_ready("", "2026-01-31"));
        assert!(!export_range_ready("   ", "2026-01-31"));
        assert!(export_range_ready("2026-01-01", "2026-01-31"));
    }
}

//! Form serialization
//!
//! Reads a submitted form as key/value pairs, the way `FormData` sees it:
//! unchecked checkboxes are absent and every value is a string.

use wasm_bindgen::JsCast;
use web_sys::{FormData, HtmlFormElement};

/// Text entries of a form, in document order
pub fn form_entries(form: &HtmlFormElement) -> Vec<(String, String)> {
    let data = match FormData::new_with_form(form) {
        Ok(data) => data,
        Err(e) => {
            tracing::error!("Could not read form: {:?}", e);
            return Vec::new();
        }
    };

    let iter = match js_sys::try_iter(&data) {
        Ok(Some(iter)) => iter,
        _ => return Vec::new(),
    };

    iter.filter_map(Result::ok)
        .filter_map(|entry| {
            let pair = entry.dyn_into::<js_sys::Array>().ok()?;
            Some((pair.get(0).as_string()?, pair.get(1).as_string()?))
        })
        .collect()
}

/// Single text value of a form field
pub fn form_value(form: &HtmlFormElement, key: &str) -> Option<String> {
    form_entries(form)
        .into_iter()
        .find(|(name, _)| name == key)
        .map(|(_, value)| value)
}

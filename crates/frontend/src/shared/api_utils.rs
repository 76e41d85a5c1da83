//! HTTP helpers for the product form
//!
//! Endpoints are same-origin paths served by the page's own backend.

use super::error::FormError;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Request, RequestInit, RequestMode, Response};

pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// POST an already encoded form body
///
/// # Returns
/// - HTTP status of whatever response arrived; non-2xx is not an error here
/// - `Err` only when the request cannot be built or the fetch itself rejects
pub async fn post_form(url: &str, body: &str) -> Result<u16, FormError> {
    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&JsValue::from_str(body));

    let request = Request::new_with_str_and_init(url, &opts).map_err(FormError::fetch)?;
    request
        .headers()
        .set("Content-Type", FORM_CONTENT_TYPE)
        .map_err(FormError::fetch)?;

    let window = web_sys::window().ok_or(FormError::NoWindow)?;
    let resp_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(FormError::fetch)?;
    let resp: Response = resp_value.dyn_into().map_err(FormError::fetch)?;

    Ok(resp.status())
}

/// Reload the current page from the server
pub fn reload_page() -> Result<(), FormError> {
    let window = web_sys::window().ok_or(FormError::NoWindow)?;
    window.location().reload().map_err(FormError::dom)
}

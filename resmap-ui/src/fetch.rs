//! Browser fetch wrapper for GeoServer requests.
//!
//! Applies the typed error taxonomy at the async boundary: a rejected
//! fetch promise is a `Transport` failure, a non-success status is
//! `Status`, and body parsing stays the caller's concern.

use resmap_geo::{GeoError, Result};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

/// GET a URL and return the response body as text.
pub async fn get_text(url: &str) -> Result<String> {
    request_text(url, "GET", None).await
}

/// POST a text body to a URL and return the response body as text.
pub async fn post_text(url: &str, body: &str) -> Result<String> {
    request_text(url, "POST", Some(body)).await
}

async fn request_text(url: &str, method: &str, body: Option<&str>) -> Result<String> {
    let window =
        web_sys::window().ok_or_else(|| GeoError::Transport("no window object".to_string()))?;

    let init = RequestInit::new();
    init.set_method(method);
    if let Some(body) = body {
        init.set_body(&JsValue::from_str(body));
    }

    let request = Request::new_with_str_and_init(url, &init).map_err(transport)?;
    let response_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(transport)?;
    let response: Response = response_value.dyn_into().map_err(transport)?;

    if !response.ok() {
        return Err(GeoError::Status(response.status()));
    }

    let text_value = JsFuture::from(response.text().map_err(transport)?)
        .await
        .map_err(transport)?;
    text_value
        .as_string()
        .ok_or_else(|| GeoError::Transport("response body was not text".to_string()))
}

fn transport(err: JsValue) -> GeoError {
    GeoError::Transport(format!("{err:?}"))
}

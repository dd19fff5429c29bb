//! REST Command Layer
//!
//! One async function per backend endpoint, organized by domain. All
//! requests go through [`send`], which attaches the bearer token and turns
//! non-2xx responses into the server's `detail` message.

mod attachments;
mod auth;
mod comments;
mod projects;
mod summary;
mod tasks;
mod tools;

use serde::de::DeserializeOwned;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use crate::config;

// Re-export all public items
pub use attachments::*;
pub use auth::*;
pub use comments::*;
pub use projects::*;
pub use summary::*;
pub use tasks::*;
pub use tools::*;

/// Request body variants. Multipart bodies get their content type (with
/// boundary) from the browser, so only JSON sets the header explicitly.
pub(crate) enum Body {
    None,
    Json(String),
    Form(web_sys::FormData),
}

pub(crate) fn js_err(err: JsValue) -> String {
    err.as_string()
        .or_else(|| js_sys::JSON::stringify(&err).ok().map(String::from))
        .unwrap_or_else(|| "Network error".to_string())
}

/// Issue a request against the configured base URL and return the raw
/// response, or the server's error detail for non-2xx statuses.
pub(crate) async fn send(
    method: &str,
    path: &str,
    body: Body,
    token: Option<&str>,
) -> Result<Response, String> {
    let opts = RequestInit::new();
    opts.set_method(method);
    match &body {
        Body::Json(json) => opts.set_body(&JsValue::from_str(json)),
        Body::Form(form) => opts.set_body(form.as_ref()),
        Body::None => {}
    }

    let url = format!("{}{}", config::base_url(), path);
    let request = Request::new_with_str_and_init(&url, &opts).map_err(js_err)?;
    if matches!(body, Body::Json(_)) {
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(js_err)?;
    }
    if let Some(token) = token {
        request
            .headers()
            .set("Authorization", &format!("Bearer {}", token))
            .map_err(js_err)?;
    }

    let window = web_sys::window().ok_or_else(|| "No window".to_string())?;
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_err)?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| "Unexpected fetch result".to_string())?;

    if !response.ok() {
        let text = response_text(&response).await.unwrap_or_default();
        return Err(error_detail(response.status(), &text));
    }
    Ok(response)
}

pub(crate) async fn response_text(response: &Response) -> Result<String, String> {
    let text = JsFuture::from(response.text().map_err(js_err)?)
        .await
        .map_err(js_err)?;
    Ok(text.as_string().unwrap_or_default())
}

/// Send a request and decode its JSON response.
pub(crate) async fn fetch_json<T: DeserializeOwned>(
    method: &str,
    path: &str,
    body: Body,
    token: Option<&str>,
) -> Result<T, String> {
    let response = send(method, path, body, token).await?;
    let text = response_text(&response).await?;
    serde_json::from_str(&text).map_err(|e| e.to_string())
}

/// Send a request and discard the response body.
pub(crate) async fn fetch_unit(
    method: &str,
    path: &str,
    body: Body,
    token: Option<&str>,
) -> Result<(), String> {
    send(method, path, body, token).await.map(|_| ())
}

pub(crate) fn json_body<T: serde::Serialize>(value: &T) -> Result<Body, String> {
    serde_json::to_string(value)
        .map(Body::Json)
        .map_err(|e| e.to_string())
}

/// Extract a displayable message from an error response. The backend sends
/// `{"detail": "..."}` for its own errors and `{"detail": [{"msg": ...}]}`
/// for validation failures.
pub(crate) fn error_detail(status: u16, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        match value.get("detail") {
            Some(serde_json::Value::String(detail)) => return detail.clone(),
            Some(serde_json::Value::Array(items)) => {
                let messages: Vec<&str> = items
                    .iter()
                    .filter_map(|item| item.get("msg").and_then(|m| m.as_str()))
                    .collect();
                if !messages.is_empty() {
                    return messages.join("\n");
                }
            }
            _ => {}
        }
    }
    format!("Request failed ({})", status)
}

#[cfg(test)]
mod tests {
    use super::error_detail;

    #[test]
    fn test_error_detail_string() {
        assert_eq!(
            error_detail(400, r#"{"detail":"Wrong email or Password"}"#),
            "Wrong email or Password"
        );
    }

    #[test]
    fn test_error_detail_validation_list() {
        let body = r#"{"detail":[{"loc":["body","file"],"msg":"field required"},{"msg":"value error"}]}"#;
        assert_eq!(error_detail(422, body), "field required\nvalue error");
    }

    #[test]
    fn test_error_detail_fallback() {
        assert_eq!(error_detail(502, "<html>bad gateway</html>"), "Request failed (502)");
        assert_eq!(error_detail(500, ""), "Request failed (500)");
        assert_eq!(error_detail(403, r#"{"detail":[]}"#), "Request failed (403)");
        assert_eq!(error_detail(404, r#"{"error":"nope"}"#), "Request failed (404)");
    }
}

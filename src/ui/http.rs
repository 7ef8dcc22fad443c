//! Thin gloo-net wrappers for the backend under `/api`.
//!
//! Every call reduces failures to [`ApiError`]: transport problems become
//! `Network`, non-2xx answers become `Status` carrying the server's reason,
//! unexpected bodies become `Decode`. No retries.

use gloo_net::http::{Request, RequestBuilder, Response};
use leptos::logging::warn;
use serde::{Serialize, de::DeserializeOwned};

use crate::core::api::{ApiError, ApiResult, api_url};

pub type Query<'a> = &'a [(&'a str, &'a str)];

fn network(e: gloo_net::Error) -> ApiError {
    ApiError::Network(e.to_string())
}

fn build(builder: RequestBuilder, query: Query<'_>) -> RequestBuilder {
    if query.is_empty() {
        builder
    } else {
        builder.query(query.iter().copied())
    }
}

async fn check(response: Response) -> ApiResult<Response> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    warn!("{} -> {}", response.url(), status);
    Err(ApiError::from_status(status, &body))
}

async fn decode<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    check(response)
        .await?
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

async fn send_json<B: Serialize + ?Sized>(builder: RequestBuilder, body: &B) -> ApiResult<Response> {
    builder
        .json(body)
        .map_err(|e| ApiError::Request(e.to_string()))?
        .send()
        .await
        .map_err(network)
}

pub async fn get_json<T: DeserializeOwned>(path: &str, query: Query<'_>) -> ApiResult<T> {
    let response = build(Request::get(&api_url(path)), query)
        .send()
        .await
        .map_err(network)?;
    decode(response).await
}

pub async fn post_json<B, T>(path: &str, body: &B) -> ApiResult<T>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    decode(send_json(Request::post(&api_url(path)), body).await?).await
}

pub async fn put_json<B, T>(path: &str, query: Query<'_>, body: &B) -> ApiResult<T>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    decode(send_json(build(Request::put(&api_url(path)), query), body).await?).await
}

pub async fn delete(path: &str) -> ApiResult<()> {
    let response = Request::delete(&api_url(path))
        .send()
        .await
        .map_err(network)?;
    check(response).await.map(|_| ())
}

/// POST a JSON body and return the raw response bytes
pub async fn post_json_for_blob<B: Serialize + ?Sized>(path: &str, body: &B) -> ApiResult<Vec<u8>> {
    let response = check(send_json(Request::post(&api_url(path)), body).await?).await?;
    response.binary().await.map_err(|e| ApiError::Decode(e.to_string()))
}

/// POST with only query parameters and return the raw response bytes
pub async fn post_query_for_blob(path: &str, query: Query<'_>) -> ApiResult<Vec<u8>> {
    let response = build(Request::post(&api_url(path)), query)
        .send()
        .await
        .map_err(network)?;
    check(response)
        .await?
        .binary()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Multipart upload; `timeout_ms` aborts the request when it elapses
#[cfg(not(feature = "ssr"))]
pub async fn post_multipart<T: DeserializeOwned>(
    path: &str,
    form: web_sys::FormData,
    timeout_ms: Option<u32>,
) -> ApiResult<T> {
    let controller = web_sys::AbortController::new().ok();
    // Dropping the timer cancels it.
    let _timer = match (&controller, timeout_ms) {
        (Some(controller), Some(ms)) => {
            let controller = controller.clone();
            Some(gloo_timers::callback::Timeout::new(ms, move || controller.abort()))
        }
        _ => None,
    };

    let response = Request::post(&api_url(path))
        .abort_signal(controller.as_ref().map(|c| c.signal()).as_ref())
        .body(form)
        .map_err(|e| ApiError::Request(e.to_string()))?
        .send()
        .await
        .map_err(|e| match (&controller, timeout_ms) {
            (Some(c), Some(ms)) if c.signal().aborted() => {
                ApiError::Network(format!("timeout of {}ms exceeded", ms))
            }
            _ => network(e),
        })?;
    decode(response).await
}

/// Save bytes as a file through a temporary object URL
#[cfg(not(feature = "ssr"))]
pub fn trigger_download(bytes: &[u8], mime: &str, filename: &str) -> ApiResult<()> {
    let parts = js_sys::Array::of1(&js_sys::Uint8Array::from(bytes));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(mime);
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(|_| ApiError::Request("Failed to create file".to_string()))?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)
        .map_err(|_| ApiError::Request("Failed to create download link".to_string()))?;
    let result = trigger_href_download(&url, filename);
    let _ = web_sys::Url::revoke_object_url(&url);
    result
}

#[cfg(feature = "ssr")]
pub fn trigger_download(_bytes: &[u8], _mime: &str, _filename: &str) -> ApiResult<()> {
    Err(ApiError::Request("Downloads are not available on server".to_string()))
}

/// Click a temporary `<a download>` pointing at `href`
#[cfg(not(feature = "ssr"))]
pub fn trigger_href_download(href: &str, filename: &str) -> ApiResult<()> {
    use wasm_bindgen::JsCast;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| ApiError::Request("No document".to_string()))?;
    let anchor = document
        .create_element("a")
        .map_err(|_| ApiError::Request("Failed to create download link".to_string()))?;
    let _ = anchor.set_attribute("href", href);
    let _ = anchor.set_attribute("download", filename);
    anchor
        .dyn_ref::<web_sys::HtmlElement>()
        .map(|el| el.click())
        .ok_or_else(|| ApiError::Request("Failed to start download".to_string()))
}

#[cfg(feature = "ssr")]
pub fn trigger_href_download(_href: &str, _filename: &str) -> ApiResult<()> {
    Err(ApiError::Request("Downloads are not available on server".to_string()))
}

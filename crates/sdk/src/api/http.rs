use std::sync::Arc;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::{debug, warn};
use url::form_urlencoded;

use crate::api::{
    transport::{
        PreparedBody, PreparedRequest, RawResponse, ReqwestTransport, Transport, parse_header,
    },
    types::{ApiError, ApiResult, ClientConfig, Method, RequestBody, RequestOptions},
};

const NETWORK_FAILURE_MESSAGE: &str = "Network request failed";

/// The single request primitive every resource facade goes through.
///
/// Holds only immutable configuration and a transport, so one instance can be
/// shared across tasks and called concurrently.
#[derive(Clone)]
pub struct HttpClient {
    config: Arc<ClientConfig>,
    transport: Arc<dyn Transport>,
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient").field("base_url", &self.config.base_url).finish_non_exhaustive()
    }
}

impl HttpClient {
    pub fn new(config: ClientConfig) -> Self {
        Self::with_transport(config, Arc::new(ReqwestTransport::new()))
    }

    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Self {
        Self { config: Arc::new(config), transport }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// A client sharing this one's transport but using `config`.
    pub fn reconfigured(&self, config: ClientConfig) -> Self {
        Self { config: Arc::new(config), transport: Arc::clone(&self.transport) }
    }

    /// Runs one authenticated round trip against `endpoint` and decodes the body into `T`.
    ///
    /// Never panics and never retries: a missing token, a rejected token, a
    /// non-2xx status, a transport failure and an unparsable body all come
    /// back as an [`ApiError`].
    pub async fn request<T>(&self, endpoint: &str, options: RequestOptions) -> ApiResult<T>
    where
        T: DeserializeOwned,
    {
        if self.config.api_token.is_empty() {
            return Err(ApiError::MissingToken);
        }

        let RequestOptions { method, query, body, headers } = options;
        let url = build_url(&self.config.base_url, endpoint, query.as_ref());
        let body = prepare_body(method, body)?;
        let headers = build_headers(&self.config, &body, headers.as_ref())?;

        debug!("ClickUp request {} {}", method, url);

        let response = self
            .transport
            .send(PreparedRequest { method, url, headers, body })
            .await
            .map_err(|e| {
                warn!("ClickUp transport failure - {}", e);
                network_error(e.as_ref())
            })?;

        debug!("ClickUp response status {}", response.status);
        resolve_response(response)
    }
}

/// Joins `base` and `endpoint` and appends the encoded query, if any survives filtering.
pub fn build_url(base: &str, endpoint: &str, query: Option<&Map<String, Value>>) -> String {
    let url = if endpoint.starts_with('/') {
        format!("{base}{endpoint}")
    } else {
        format!("{base}/{endpoint}")
    };

    let Some(query) = query.filter(|q| !q.is_empty()) else {
        return url;
    };

    let mut serializer = form_urlencoded::Serializer::new(String::new());
    let mut emitted = false;
    for (key, value) in query {
        match value {
            Value::Null => {}
            Value::Array(items) => {
                let name = format!("{key}[]");
                for item in items.iter().filter(|item| !item.is_null()) {
                    serializer.append_pair(&name, &value_to_string(item));
                    emitted = true;
                }
            }
            Value::Object(_) => {
                serializer.append_pair(key, &value.to_string());
                emitted = true;
            }
            scalar => {
                serializer.append_pair(key, &value_to_string(scalar));
                emitted = true;
            }
        }
    }

    if emitted { format!("{url}?{}", serializer.finish()) } else { url }
}

/// Builds the final header set. The token always wins the `Authorization` slot.
pub fn build_headers(
    config: &ClientConfig,
    body: &PreparedBody,
    call_headers: Option<&Map<String, Value>>,
) -> ApiResult<HeaderMap> {
    let mut headers = HeaderMap::new();

    let mut token = HeaderValue::from_str(&config.api_token).map_err(|_| ApiError::InvalidToken)?;
    token.set_sensitive(true);
    headers.insert(AUTHORIZATION, token);

    if matches!(body, PreparedBody::Json(_)) {
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    }

    for extra in [config.headers.as_ref(), call_headers].into_iter().flatten() {
        merge_headers(&mut headers, extra);
    }

    Ok(headers)
}

fn merge_headers(headers: &mut HeaderMap, extra: &Map<String, Value>) {
    for (key, value) in extra {
        if value.is_null() || key.eq_ignore_ascii_case(AUTHORIZATION.as_str()) {
            continue;
        }
        match parse_header(key, &value_to_string(value)) {
            Some((name, value)) => {
                headers.insert(name, value);
            }
            None => warn!("Skipping header {} - not a valid HTTP header", key),
        }
    }
}

/// Decides what goes on the wire for `method`.
pub fn prepare_body(method: Method, body: Option<RequestBody>) -> ApiResult<PreparedBody> {
    if !method.allows_body() {
        return Ok(PreparedBody::None);
    }

    match body {
        None => Ok(PreparedBody::None),
        Some(RequestBody::Multipart(payload)) => Ok(PreparedBody::Multipart(payload)),
        Some(RequestBody::Json(value)) => serde_json::to_string(&value)
            .map(PreparedBody::Json)
            .map_err(|e| ApiError::Serialization(e.to_string())),
    }
}

/// Turns a completed round trip into the uniform result.
pub fn resolve_response<T>(response: RawResponse) -> ApiResult<T>
where
    T: DeserializeOwned,
{
    if !(200..300).contains(&response.status) {
        return Err(http_error(&response));
    }

    let Some(body) = response.body.as_deref() else {
        return Err(ApiError::InvalidJson);
    };
    let value = if body.trim().is_empty() {
        Value::Object(Map::new())
    } else {
        serde_json::from_str::<Value>(body).map_err(|_| ApiError::InvalidJson)?
    };

    serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

fn http_error(response: &RawResponse) -> ApiError {
    let extracted = response.body.as_deref().and_then(extract_error_message);

    if response.status == 401 {
        let message = extracted.unwrap_or_else(|| "Unauthorized".to_string());
        return ApiError::Unauthorized { message };
    }

    let fallback = if response.status_text.is_empty() {
        "Request failed".to_string()
    } else {
        response.status_text.clone()
    };
    let message = extracted.unwrap_or(fallback);
    ApiError::Http { status: response.status, message }
}

/// First usable `message` or `err` field. Scalars are rendered as text; nulls,
/// empty strings, arrays and objects are skipped.
fn extract_error_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    ["message", "err"].into_iter().find_map(|field| match value.get(field)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        scalar @ (Value::Number(_) | Value::Bool(_)) => Some(value_to_string(scalar)),
        _ => None,
    })
}

fn network_error(error: &(dyn std::error::Error + Send + Sync)) -> ApiError {
    let message = error.to_string();
    if message.is_empty() {
        ApiError::Network(NETWORK_FAILURE_MESSAGE.to_string())
    } else {
        ApiError::Network(message)
    }
}

/// Literal text of a scalar. Whole floats drop the fraction (`2.0` renders as `2`).
fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
            _ => n.to_string(),
        },
        other => other.to_string(),
    }
}

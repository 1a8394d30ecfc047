use async_trait::async_trait;
use reqwest::{
    Client,
    header::{HeaderMap, HeaderName, HeaderValue},
    multipart::{Form, Part},
};

use tracing::warn;

use crate::api::types::{Method, MultipartPayload, PartContent};

pub type TransportError = Box<dyn std::error::Error + Send + Sync>;

/// Outgoing body after negotiation.
#[derive(Debug, Clone, PartialEq)]
pub enum PreparedBody {
    None,
    Json(String),
    Multipart(MultipartPayload),
}

/// A fully built request, ready for one round trip.
#[derive(Debug, Clone)]
pub struct PreparedRequest {
    pub method: Method,
    pub url: String,
    pub headers: HeaderMap,
    pub body: PreparedBody,
}

/// The raw outcome of a completed round trip, before any interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub status_text: String,
    /// `None` when the status line arrived but the body could not be read.
    pub body: Option<String>,
}

/// Performs a single HTTP round trip. Implementations must not retry.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: PreparedRequest) -> Result<RawResponse, TransportError>;
}

#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self { client: Client::new() }
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

fn multipart_form(payload: MultipartPayload) -> Result<Form, TransportError> {
    let mut form = Form::new();
    for part in payload.parts {
        form = match part.content {
            PartContent::Text(value) => form.text(part.name, value),
            PartContent::File { bytes, file_name, mime_type } => {
                let mut file = Part::bytes(bytes).file_name(file_name);
                if let Some(mime) = mime_type {
                    file = file.mime_str(&mime)?;
                }
                form.part(part.name, file)
            }
        };
    }
    Ok(form)
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: PreparedRequest) -> Result<RawResponse, TransportError> {
        let mut builder =
            self.client.request(request.method.into(), &request.url).headers(request.headers);

        builder = match request.body {
            PreparedBody::None => builder,
            PreparedBody::Json(body) => builder.body(body),
            PreparedBody::Multipart(payload) => builder.multipart(multipart_form(payload)?),
        };

        let response = builder.send().await?;
        let status = response.status();
        let body = match response.text().await {
            Ok(body) => Some(body),
            Err(e) => {
                warn!("ClickUp response body unreadable (status {}) - {}", status.as_u16(), e);
                None
            }
        };

        Ok(RawResponse {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
            body,
        })
    }
}

/// Header name/value pair parsed for a `HeaderMap`, or `None` if either half is not valid HTTP.
pub(crate) fn parse_header(name: &str, value: &str) -> Option<(HeaderName, HeaderValue)> {
    let name = HeaderName::try_from(name).ok()?;
    let value = HeaderValue::try_from(value).ok()?;
    Some((name, value))
}

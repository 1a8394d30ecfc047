use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Root of every ClickUp v2 endpoint. Has no trailing separator.
pub const CLICKUP_API_BASE_URL: &str = "https://api.clickup.com/api/v2";

/// Environment variable read by [`ClientConfig::from_env`].
pub const API_TOKEN_ENV: &str = "CLICKUP_API_TOKEN";

/// Immutable per-client configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Personal token or OAuth access token, sent verbatim as `Authorization`.
    pub api_token: String,
    /// Extra headers attached to every request. Values may be strings,
    /// numbers or booleans; nulls are skipped.
    pub headers: Option<Map<String, Value>>,
    pub base_url: String,
}

impl ClientConfig {
    pub fn new(api_token: impl Into<String>) -> Self {
        Self { api_token: api_token.into(), headers: None, base_url: CLICKUP_API_BASE_URL.to_string() }
    }

    /// Loads the token from `CLICKUP_API_TOKEN`, reading a `.env` file first if one exists.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_env_var(API_TOKEN_ENV)
    }

    pub fn from_env_var(name: &str) -> Result<Self, ConfigError> {
        match std::env::var(name) {
            Ok(token) if !token.trim().is_empty() => Ok(Self::new(token)),
            _ => Err(ConfigError::MissingEnv(name.to_string())),
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.headers.get_or_insert_with(Map::new).insert(name.into(), value.into());
        self
    }

    pub fn with_headers(mut self, headers: Map<String, Value>) -> Self {
        self.headers = Some(headers);
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Shallow merge: every field present in `overrides` replaces the current one wholesale.
    pub fn merged(&self, overrides: ConfigOverrides) -> Self {
        Self {
            api_token: overrides.api_token.unwrap_or_else(|| self.api_token.clone()),
            headers: match overrides.headers {
                Some(headers) => Some(headers),
                None => self.headers.clone(),
            },
            base_url: overrides
                .base_url
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| self.base_url.clone()),
        }
    }
}

/// Partial configuration applied by `ClickUp::with_config`.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub api_token: Option<String>,
    pub headers: Option<Map<String, Value>>,
    pub base_url: Option<String>,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Environment variable {0} is missing or empty")]
    MissingEnv(String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }

    /// GET and DELETE never carry a request body.
    pub fn allows_body(&self) -> bool {
        matches!(self, Method::Post | Method::Put | Method::Patch)
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Patch => reqwest::Method::PATCH,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Payload handed to the request core. The variant decides how it travels:
/// JSON values are serialized, multipart payloads are passed through untouched.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Json(Value),
    Multipart(MultipartPayload),
}

impl RequestBody {
    pub fn json<T: Serialize + ?Sized>(body: &T) -> ApiResult<Self> {
        serde_json::to_value(body)
            .map(RequestBody::Json)
            .map_err(|e| ApiError::Serialization(e.to_string()))
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MultipartPayload {
    pub parts: Vec<MultipartPart>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MultipartPart {
    pub name: String,
    pub content: PartContent,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PartContent {
    Text(String),
    File { bytes: Vec<u8>, file_name: String, mime_type: Option<String> },
}

impl MultipartPayload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parts.push(MultipartPart { name: name.into(), content: PartContent::Text(value.into()) });
        self
    }

    pub fn file(
        mut self,
        name: impl Into<String>,
        bytes: Vec<u8>,
        file_name: impl Into<String>,
        mime_type: Option<String>,
    ) -> Self {
        self.parts.push(MultipartPart {
            name: name.into(),
            content: PartContent::File { bytes, file_name: file_name.into(), mime_type },
        });
        self
    }
}

/// Per-call request description consumed by `HttpClient::request`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestOptions {
    pub method: Method,
    pub query: Option<Map<String, Value>>,
    pub body: Option<RequestBody>,
    pub headers: Option<Map<String, Value>>,
}

impl RequestOptions {
    pub fn new(method: Method) -> Self {
        Self { method, ..Default::default() }
    }

    pub fn get() -> Self {
        Self::new(Method::Get)
    }

    pub fn post() -> Self {
        Self::new(Method::Post)
    }

    pub fn put() -> Self {
        Self::new(Method::Put)
    }

    pub fn patch() -> Self {
        Self::new(Method::Patch)
    }

    pub fn delete() -> Self {
        Self::new(Method::Delete)
    }

    /// Accepts a `json!({...})` object; anything else is ignored.
    pub fn query(mut self, query: Value) -> Self {
        if let Value::Object(map) = query {
            self.query = Some(map);
        }
        self
    }

    pub fn body(mut self, body: RequestBody) -> Self {
        self.body = Some(body);
        self
    }

    pub fn json<T: Serialize + ?Sized>(self, body: &T) -> ApiResult<Self> {
        Ok(self.body(RequestBody::json(body)?))
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.headers.get_or_insert_with(Map::new).insert(name.into(), value.into());
        self
    }
}

/// Classification tag carried by every error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    Unauthorized,
    UnknownError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::Unauthorized => "unauthorized",
            ErrorCode::UnknownError => "unknown_error",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("API token is required")]
    MissingToken,

    #[error("API token is not a valid header value")]
    InvalidToken,

    #[error("{message}")]
    Unauthorized { message: String },

    #[error("{message}")]
    Http { status: u16, message: String },

    #[error("Invalid JSON response")]
    InvalidJson,

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("{0}")]
    Network(String),

    #[error("Failed to serialize request: {0}")]
    Serialization(String),
}

impl ApiError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ApiError::MissingToken | ApiError::InvalidToken | ApiError::Unauthorized { .. } => {
                ErrorCode::Unauthorized
            }
            _ => ErrorCode::UnknownError,
        }
    }

    /// `Some` only when an HTTP round trip completed.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ApiError::Unauthorized { .. } => Some(401),
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn message(&self) -> String {
        self.to_string()
    }

    pub fn is_unauthorized(&self) -> bool {
        self.code() == ErrorCode::Unauthorized
    }

    pub fn to_info(&self) -> ErrorInfo {
        ErrorInfo { message: self.message(), status_code: self.status_code(), name: self.code() }
    }
}

/// Wire-friendly view of an [`ApiError`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorInfo {
    pub message: String,
    pub status_code: Option<u16>,
    pub name: ErrorCode,
}

impl From<&ApiError> for ErrorInfo {
    fn from(error: &ApiError) -> Self {
        error.to_info()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Response type for endpoints that answer with an empty body or an object we don't model.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmptyResponse {}

//! Domain DTOs for the short.io public link API.
//!
//! # Design
//! Field names on the wire are the API contract, so every struct spells out
//! its renames instead of trusting a blanket case conversion for acronyms
//! like `originalURL` or `skipQS`.
//!
//! `expiresAt`, `ttl` and `createdAt` accept either a string or an integer
//! from callers. They are held as `TimeValue` only until the request is
//! built; `LinkRequest` carries the normalized string form and is the only
//! thing that reaches the wire.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Error codes synthesized locally when the API payload cannot be used.
pub mod codes {
    /// 2xx response whose body was empty or not a link object.
    pub const MALFORMED_SUCCESS: &str = "MALFORMED_SUCCESS";
    /// Non-2xx response with an empty body.
    pub const UNKNOWN: &str = "UNKNOWN";
    /// Non-2xx response whose body was not an error object.
    pub const INVALID_JSON: &str = "INVALID_JSON";
}

/// A timestamp or duration supplied as either text or an integer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum TimeValue {
    Integer(i64),
    Text(String),
}

impl TimeValue {
    /// Canonical wire form: text as-is, integers in decimal.
    pub fn normalize(&self) -> String {
        match self {
            TimeValue::Integer(n) => n.to_string(),
            TimeValue::Text(s) => s.clone(),
        }
    }
}

impl From<i64> for TimeValue {
    fn from(n: i64) -> Self {
        TimeValue::Integer(n)
    }
}

impl From<&str> for TimeValue {
    fn from(s: &str) -> Self {
        TimeValue::Text(s.to_string())
    }
}

impl From<String> for TimeValue {
    fn from(s: String) -> Self {
        TimeValue::Text(s)
    }
}

/// Parameters for creating a short link. Only `original_url` is required;
/// every `None` field is left out of the request body.
///
/// The three `TimeValue` fields are skipped when this struct is serialized
/// directly. Use `LinkRequest` to get the complete wire body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShortenParams {
    #[serde(rename = "originalURL")]
    pub original_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cloaking: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(rename = "redirectType", skip_serializing_if = "Option::is_none")]
    pub redirect_type: Option<u16>,
    #[serde(rename = "expiresAt", default, skip_serializing)]
    pub expires_at: Option<TimeValue>,
    #[serde(rename = "expiredURL", skip_serializing_if = "Option::is_none")]
    pub expired_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(rename = "utmSource", skip_serializing_if = "Option::is_none")]
    pub utm_source: Option<String>,
    #[serde(rename = "utmMedium", skip_serializing_if = "Option::is_none")]
    pub utm_medium: Option<String>,
    #[serde(rename = "utmCampaign", skip_serializing_if = "Option::is_none")]
    pub utm_campaign: Option<String>,
    #[serde(rename = "utmTerm", skip_serializing_if = "Option::is_none")]
    pub utm_term: Option<String>,
    #[serde(rename = "utmContent", skip_serializing_if = "Option::is_none")]
    pub utm_content: Option<String>,
    #[serde(default, skip_serializing)]
    pub ttl: Option<TimeValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(rename = "androidURL", skip_serializing_if = "Option::is_none")]
    pub android_url: Option<String>,
    #[serde(rename = "iphoneURL", skip_serializing_if = "Option::is_none")]
    pub iphone_url: Option<String>,
    #[serde(rename = "createdAt", default, skip_serializing)]
    pub created_at: Option<TimeValue>,
    #[serde(rename = "clicksLimit", skip_serializing_if = "Option::is_none")]
    pub clicks_limit: Option<u64>,
    #[serde(rename = "passwordContact", skip_serializing_if = "Option::is_none")]
    pub password_contact: Option<bool>,
    #[serde(rename = "skipQS", skip_serializing_if = "Option::is_none")]
    pub skip_qs: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
    #[serde(rename = "splitURL", skip_serializing_if = "Option::is_none")]
    pub split_url: Option<String>,
    #[serde(rename = "splitPercent", skip_serializing_if = "Option::is_none")]
    pub split_percent: Option<u8>,
    #[serde(rename = "integrationAdroll", skip_serializing_if = "Option::is_none")]
    pub integration_adroll: Option<String>,
    #[serde(rename = "integrationFB", skip_serializing_if = "Option::is_none")]
    pub integration_fb: Option<String>,
    #[serde(rename = "integrationGA", skip_serializing_if = "Option::is_none")]
    pub integration_ga: Option<String>,
    #[serde(rename = "integrationGTM", skip_serializing_if = "Option::is_none")]
    pub integration_gtm: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(rename = "folderId", skip_serializing_if = "Option::is_none")]
    pub folder_id: Option<String>,
    #[serde(rename = "allowDuplicates", skip_serializing_if = "Option::is_none")]
    pub allow_duplicates: Option<bool>,
}

impl ShortenParams {
    pub fn new(original_url: impl Into<String>) -> Self {
        Self {
            original_url: original_url.into(),
            ..Self::default()
        }
    }
}

/// The request body as sent: every parameter plus the normalized time
/// fields.
#[derive(Debug, Serialize)]
pub struct LinkRequest<'a> {
    #[serde(flatten)]
    params: &'a ShortenParams,
    #[serde(rename = "expiresAt", skip_serializing_if = "Option::is_none")]
    expires_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ttl: Option<String>,
    #[serde(rename = "createdAt", skip_serializing_if = "Option::is_none")]
    created_at: Option<String>,
}

impl<'a> From<&'a ShortenParams> for LinkRequest<'a> {
    fn from(params: &'a ShortenParams) -> Self {
        Self {
            params,
            expires_at: params.expires_at.as_ref().map(TimeValue::normalize),
            ttl: params.ttl.as_ref().map(TimeValue::normalize),
            created_at: params.created_at.as_ref().map(TimeValue::normalize),
        }
    }
}

/// A link resource returned by the API.
///
/// The commonly used fields are typed; everything else the API sends is kept
/// in `extra`. Re-serializing yields the received object, except that an
/// explicit `null` on a typed field is omitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinkResponse {
    #[serde(rename = "idString", skip_serializing_if = "Option::is_none")]
    pub id_string: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "shortURL", skip_serializing_if = "Option::is_none")]
    pub short_url: Option<String>,
    #[serde(rename = "secureShortURL", skip_serializing_if = "Option::is_none")]
    pub secure_short_url: Option<String>,
    #[serde(rename = "originalURL", skip_serializing_if = "Option::is_none")]
    pub original_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cloaking: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duplicate: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Error payload, either sent by the API or synthesized by the client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[serde(default)]
#[error("{code} ({status_code}): {message}")]
pub struct ErrorModel {
    pub message: String,
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub code: String,
    pub success: bool,
}

impl ErrorModel {
    pub fn new(message: impl Into<String>, status_code: u16, code: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status_code,
            code: code.into(),
            success: false,
        }
    }

    /// Parse a remote error body. Only JSON objects qualify.
    ///
    /// Inside the object parsing is lenient: `null` or missing `message` and
    /// `code` become empty strings, other scalars are rendered as text, and
    /// `statusCode`/`success` are read only when they have the expected type.
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        let object: Map<String, Value> = serde_json::from_str(body)?;
        Ok(Self {
            message: lenient_text(object.get("message")),
            status_code: object
                .get("statusCode")
                .and_then(Value::as_u64)
                .and_then(|n| u16::try_from(n).ok())
                .unwrap_or_default(),
            code: lenient_text(object.get("code")),
            success: object.get("success").and_then(Value::as_bool).unwrap_or_default(),
        })
    }
}

fn lenient_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Outcome of a shorten call: the created link or a structured error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "data", rename_all = "lowercase")]
pub enum ShortenResult {
    Success(LinkResponse),
    Error(ErrorModel),
}

impl ShortenResult {
    pub fn is_success(&self) -> bool {
        matches!(self, ShortenResult::Success(_))
    }

    /// Convert into a standard `Result` so callers can use `?`.
    pub fn into_result(self) -> Result<LinkResponse, ErrorModel> {
        match self {
            ShortenResult::Success(link) => Ok(link),
            ShortenResult::Error(err) => Err(err),
        }
    }
}

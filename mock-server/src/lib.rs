use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::{debug, info};
use uuid::Uuid;

/// Domains the mock accepts. The first one is used when a request names none.
pub const KNOWN_DOMAINS: &[&str] = &["x.sh", "go.example"];

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Link {
    #[serde(rename = "idString")]
    pub id_string: String,
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "shortURL")]
    pub short_url: String,
    #[serde(rename = "secureShortURL")]
    pub secure_short_url: String,
    #[serde(rename = "originalURL")]
    pub original_url: String,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<Value>,
    #[serde(rename = "expiresAt", skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<Value>,
    pub archived: bool,
    pub duplicate: bool,
}

#[derive(Deserialize)]
pub struct CreateLink {
    #[serde(rename = "originalURL")]
    pub original_url: Option<String>,
    pub domain: Option<String>,
    pub path: Option<String>,
    pub title: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub ttl: Option<Value>,
    #[serde(rename = "expiresAt")]
    pub expires_at: Option<Value>,
    #[serde(default)]
    pub archived: bool,
}

/// Links keyed by `(domain, path)`.
pub type Db = Arc<RwLock<HashMap<(String, String), Link>>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(HashMap::new()));
    Router::new()
        .route("/links/public", post(create_link))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn error_response(status: StatusCode, message: &str, code: &str) -> Response {
    let body = json!({
        "message": message,
        "code": code,
        "statusCode": status.as_u16(),
        "success": false,
    });
    (status, Json(body)).into_response()
}

async fn create_link(
    State(db): State<Db>,
    headers: HeaderMap,
    payload: Result<Json<CreateLink>, JsonRejection>,
) -> Response {
    let authorized = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| !v.trim().is_empty());
    if !authorized {
        // 401 carries no body
        return StatusCode::UNAUTHORIZED.into_response();
    }

    let Json(input) = match payload {
        Ok(json) => json,
        Err(rejection) => {
            debug!(%rejection, "rejected request body");
            return error_response(StatusCode::BAD_REQUEST, &rejection.body_text(), "INVALID_PARAMS");
        }
    };

    let original_url = match input.original_url {
        Some(url) if !url.trim().is_empty() => url,
        _ => return error_response(StatusCode::BAD_REQUEST, "originalURL is required", "INVALID_PARAMS"),
    };

    let domain = input.domain.unwrap_or_else(|| KNOWN_DOMAINS[0].to_string());
    if !KNOWN_DOMAINS.contains(&domain.as_str()) {
        let body = json!({
            "message": "domain not found",
            "code": "DOMAIN_NOT_FOUND",
            "success": false,
        });
        return (StatusCode::BAD_REQUEST, Json(body)).into_response();
    }

    let path = input
        .path
        .unwrap_or_else(|| Uuid::new_v4().simple().to_string()[..6].to_string());

    let mut links = db.write().await;
    let key = (domain.clone(), path.clone());
    if let Some(existing) = links.get(&key) {
        if existing.original_url == original_url {
            let mut link = existing.clone();
            link.duplicate = true;
            return (StatusCode::OK, Json(link)).into_response();
        }
        return error_response(StatusCode::CONFLICT, "Link already exists", "LINK_EXISTS");
    }

    let link = Link {
        id_string: format!("lnk_{}", &Uuid::new_v4().simple().to_string()[..12]),
        short_url: format!("https://{domain}/{path}"),
        secure_short_url: format!("https://{domain}/{path}"),
        path,
        title: input.title,
        original_url,
        tags: input.tags,
        ttl: input.ttl,
        expires_at: input.expires_at,
        archived: input.archived,
        duplicate: false,
    };
    links.insert(key, link.clone());
    info!(short_url = %link.short_url, "created link");
    (StatusCode::OK, Json(link)).into_response()
}

//! Command-line arguments and their mapping onto client types.

use std::time::Duration;

use clap::Parser;
use shortio_core::config::DEFAULT_BASE_URL;
use shortio_core::{ClientConfig, ShortenParams, TimeValue};

/// Shorten one URL with the short.io API and print the result as JSON.
#[derive(Parser, Debug, Clone)]
#[command(name = "shortio")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Shorten a URL with the short.io API")]
pub struct Args {
    /// URL to shorten
    pub original_url: String,

    /// short.io API key, sent as the authorization header
    #[arg(long, env = "SHORTIO_API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// API origin
    #[arg(long, default_value = DEFAULT_BASE_URL, env = "SHORTIO_BASE_URL")]
    pub base_url: String,

    /// Request deadline in seconds (transport default when unset)
    #[arg(long, env = "SHORTIO_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,

    /// Short link domain
    #[arg(long, env = "SHORTIO_DOMAIN")]
    pub domain: Option<String>,

    /// Path of the short link; generated when omitted
    #[arg(long)]
    pub path: Option<String>,

    /// Link title
    #[arg(long)]
    pub title: Option<String>,

    /// Tag to attach, repeatable
    #[arg(long = "tag")]
    pub tags: Vec<String>,

    /// Time to live: a number or a duration string
    #[arg(long)]
    pub ttl: Option<String>,

    /// Expiry: a millisecond timestamp or a date string
    #[arg(long)]
    pub expires_at: Option<String>,

    /// HTTP redirect status (301, 302, 307, 308)
    #[arg(long)]
    pub redirect_type: Option<u16>,

    /// Enable debug logging
    #[arg(short, long, env = "SHORTIO_DEBUG")]
    pub debug: bool,
}

/// Numbers go out as integers, anything else as text.
fn time_value(raw: &str) -> TimeValue {
    raw.parse::<i64>()
        .map(TimeValue::Integer)
        .unwrap_or_else(|_| TimeValue::Text(raw.to_string()))
}

impl From<&Args> for ClientConfig {
    fn from(args: &Args) -> Self {
        let config = ClientConfig::default().with_base_url(&args.base_url);
        match args.timeout_secs {
            Some(secs) => config.with_timeout(Duration::from_secs(secs)),
            None => config,
        }
    }
}

impl From<&Args> for ShortenParams {
    fn from(args: &Args) -> Self {
        ShortenParams {
            domain: args.domain.clone(),
            path: args.path.clone(),
            title: args.title.clone(),
            tags: (!args.tags.is_empty()).then(|| args.tags.clone()),
            ttl: args.ttl.as_deref().map(time_value),
            expires_at: args.expires_at.as_deref().map(time_value),
            redirect_type: args.redirect_type,
            ..ShortenParams::new(args.original_url.clone())
        }
    }
}

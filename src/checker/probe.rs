// src/checker/probe.rs
// =============================================================================
// This module checks whether a single URL is reachable.
//
// Key functionality:
// - Makes one HTTP HEAD request (lightweight, no body download)
// - Does not follow redirects: a 3xx answer is reported as offline
// - Turns every failure (timeout, DNS, refused, TLS, bad URL) into a value
//
// A probe never returns an error and never retries: whatever happens on the
// single attempt is the answer.
// =============================================================================

use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Upper bound for a single probe, connection and response included.
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(10);

const USER_AGENT: &str = concat!("site-checker/", env!("CARGO_PKG_VERSION"));

/// Errors raised while setting up the checker (not while probing).
#[derive(Debug, thiserror::Error)]
pub enum CheckerError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

// The outcome of probing one URL
//
// Serialized as {"status": "reachable"} or
// {"status": "unreachable", "detail": "..."}
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ProbeOutcome {
    /// The site answered with a 2xx status
    Reachable,
    /// Anything else, with a short human-readable cause
    Unreachable { detail: String },
}

impl ProbeOutcome {
    pub fn unreachable(detail: impl Into<String>) -> Self {
        ProbeOutcome::Unreachable { detail: detail.into() }
    }

    pub fn reachable(&self) -> bool {
        matches!(self, ProbeOutcome::Reachable)
    }

    /// Empty when reachable.
    pub fn error_detail(&self) -> &str {
        match self {
            ProbeOutcome::Reachable => "",
            ProbeOutcome::Unreachable { detail } => detail,
        }
    }
}

/// Runs probes with a shared HTTP client.
///
/// `Client` is reference counted internally, so cloning a `Checker` is cheap
/// and every clone shares the same connection pool.
#[derive(Debug, Clone)]
pub struct Checker {
    client: Client,
}

impl Checker {
    pub fn new() -> Result<Self, CheckerError> {
        Self::with_timeout(PROBE_TIMEOUT)
    }

    pub(crate) fn with_timeout(timeout: Duration) -> Result<Self, CheckerError> {
        let client = Client::builder()
            .timeout(timeout)
            .use_rustls_tls()
            .redirect(reqwest::redirect::Policy::none())
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self { client })
    }

    // Probes a single URL
    //
    // The URL is parsed up front so that garbage input never reaches reqwest
    // and fails with a clear message instead of a generic builder error.
    pub async fn probe(&self, url: &str) -> ProbeOutcome {
        let parsed = match parse_target(url) {
            Ok(parsed) => parsed,
            Err(detail) => {
                debug!(url, %detail, "rejected before sending");
                return ProbeOutcome::Unreachable { detail };
            }
        };

        let outcome = match self.client.head(parsed).send().await {
            Ok(response) => classify_status(response.status()),
            Err(e) => classify_error(&e),
        };

        debug!(url, reachable = outcome.reachable(), detail = outcome.error_detail(), "probe finished");
        outcome
    }
}

fn parse_target(url: &str) -> Result<Url, String> {
    let parsed = Url::parse(url).map_err(|e| format!("invalid URL: {}", e))?;

    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(format!("invalid URL: unsupported scheme '{}'", other)),
    }
}

// Only 2xx counts as online. The client never follows redirects, so 3xx
// lands here along with 4xx and 5xx.
fn classify_status(status: reqwest::StatusCode) -> ProbeOutcome {
    if status.is_success() {
        return ProbeOutcome::Reachable;
    }

    let detail = match status.canonical_reason() {
        Some(reason) => format!("HTTP {} {}", status.as_u16(), reason),
        None => format!("HTTP {}", status.as_u16()),
    };
    ProbeOutcome::Unreachable { detail }
}

// reqwest hides the interesting part (hyper / io / rustls error) in the
// source chain. The top-level message is skipped since it embeds the URL.
fn classify_error(error: &reqwest::Error) -> ProbeOutcome {
    let chain = source_chain(error);

    let detail = match known_cause(&chain, error.is_timeout(), error.is_connect()) {
        Some(cause) => cause.to_string(),
        None => error.to_string(),
    };

    ProbeOutcome::Unreachable { detail }
}

// Markers left in the chain by hyper-rustls / rustls when the handshake fails
const TLS_MARKERS: [&str; 6] = [
    "certificate",
    "handshake",
    "invalid peer",
    "corrupt message",
    "alert received",
    "peer is incompatible",
];

// Maps an error source chain to a short cause. TLS markers are only trusted
// for connect-phase errors, since the handshake happens while connecting.
fn known_cause(chain: &str, is_timeout: bool, is_connect: bool) -> Option<&'static str> {
    let chain = chain.to_lowercase();

    if is_timeout || chain.contains("timed out") {
        Some("request timed out")
    } else if chain.contains("dns error")
        || chain.contains("failed to lookup address")
        || chain.contains("name or service not known")
        || chain.contains("no such host")
    {
        Some("name resolution failed")
    } else if chain.contains("connection refused") {
        Some("connection refused")
    } else if !is_connect {
        None
    } else if TLS_MARKERS.iter().any(|marker| chain.contains(marker)) {
        Some("TLS handshake failed")
    } else {
        Some("connection failed")
    }
}

fn source_chain(error: &(dyn StdError + 'static)) -> String {
    let mut causes = Vec::new();
    let mut source = error.source();
    while let Some(cause) = source {
        causes.push(cause.to_string());
        source = cause.source();
    }
    causes.join(": ")
}

//! HTTP routes
//!
//! One route: `GET /`. Command-line clients get the terminal rendering as
//! plain text, everyone else an HTML page. Every request builds a fresh
//! report.

use crate::report::{render_markup_document, render_terminal};
use crate::server::AppState;
use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use nanosys_common::ThemeKind;
use std::sync::Arc;
use tracing::{debug, error};

type AppStateArc = Arc<AppState>;

/// User-Agent substrings of clients that want terminal output. Matched
/// case-sensitively.
pub const CLI_CLIENTS: [&str; 2] = ["Wget", "curl"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientKind {
    CommandLine,
    Browser,
}

impl ClientKind {
    /// A missing User-Agent counts as a browser.
    pub fn from_user_agent(user_agent: Option<&str>) -> Self {
        match user_agent {
            Some(ua) if CLI_CLIENTS.iter().any(|client| ua.contains(client)) => {
                ClientKind::CommandLine
            }
            _ => ClientKind::Browser,
        }
    }

    pub fn from_headers(headers: &HeaderMap) -> Self {
        let user_agent = headers
            .get(header::USER_AGENT)
            .and_then(|value| value.to_str().ok());
        Self::from_user_agent(user_agent)
    }

    pub fn theme_kind(self) -> ThemeKind {
        match self {
            ClientKind::CommandLine => ThemeKind::Terminal,
            ClientKind::Browser => ThemeKind::Markup,
        }
    }

    pub fn content_type(self) -> &'static str {
        match self.theme_kind() {
            ThemeKind::Terminal => "text/plain; charset=utf-8",
            ThemeKind::Markup => "text/html; charset=utf-8",
        }
    }
}

pub fn report_routes() -> Router<AppStateArc> {
    Router::new().route("/", get(serve_report))
}

async fn serve_report(
    State(state): State<AppStateArc>,
    headers: HeaderMap,
) -> Result<Response, (StatusCode, String)> {
    let client = ClientKind::from_headers(&headers);
    debug!("Building report for {:?} client", client);

    let probe = state.probe.clone();
    let body = tokio::task::spawn_blocking(move || match client.theme_kind() {
        ThemeKind::Terminal => render_terminal(probe.as_ref()),
        ThemeKind::Markup => render_markup_document(probe.as_ref()),
    })
    .await
    .map_err(|e| {
        error!("Report generation failed: {}", e);
        (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
    })?;

    Ok(([(header::CONTENT_TYPE, client.content_type())], body).into_response())
}

/// Anything but `/` gets an empty 404.
pub async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}

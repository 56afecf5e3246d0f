//! HTTP client for the shepherd service.
//!
//! The service's add operation answers with a bare string: empty when it
//! could not produce a port, a message when it refused, or the decimal port
//! it allocated. That string is decoded exactly once, here, into
//! [`RegisterOutcome`]; the rest of the application only ever sees the
//! tagged variants.

use std::time::Duration;

use anyhow::{Context, Result};

use crate::session::{ToolKind, clean_path};

/// Outcome of an add-session request, decoded at the network boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegisterOutcome {
    /// The service allocated this port for the session.
    Registered(u16),
    /// Transport failure or empty body: the service is unreachable or its
    /// backing tools are misconfigured.
    ServiceDown,
    /// The service answered with a message instead of a port. Shown to the
    /// user verbatim.
    Rejected(String),
}

/// Parameters for one add-session request.
///
/// Paths are normalized on construction so the same cleaning applies no
/// matter which surface (TUI form or one-shot CLI) built the request.
#[derive(Debug, Clone)]
pub struct RegisterRequest {
    pub tool: ToolKind,
    /// Display-only project label; never sent to the service.
    pub name: String,
    pub path1: String,
    pub path2: Option<String>,
}

impl RegisterRequest {
    pub fn new(tool: ToolKind, name: &str, path1: &str, path2: Option<&str>) -> Self {
        let path2 = path2.map(clean_path).filter(|p| !p.is_empty());
        Self {
            tool,
            name: name.trim().to_string(),
            path1: clean_path(path1),
            path2,
        }
    }
}

/// Client for the shepherd service's HTTP API.
#[derive(Debug, Clone)]
pub struct ShepherdClient {
    base_url: String,
    http: reqwest::Client,
}

impl ShepherdClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("build http client")?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Asks the service to allocate a port for a tool/path combination.
    ///
    /// Transport failures and non-success statuses fold into
    /// [`RegisterOutcome::ServiceDown`]; the caller decides how to surface
    /// them. The underlying error is logged here since the outcome does not
    /// carry it.
    pub async fn register(&self, request: &RegisterRequest) -> RegisterOutcome {
        let url = format!("{}/api", self.base_url);
        let response = self
            .http
            .get(&url)
            .query(&[
                ("op", "add"),
                ("tool", request.tool.wire_value()),
                ("path1", request.path1.as_str()),
                ("path2", request.path2.as_deref().unwrap_or("")),
            ])
            .send()
            .await;

        let response = match response {
            Ok(response) => response,
            Err(err) => {
                tracing::warn!(error = %err, "add request failed to reach the service");
                return RegisterOutcome::ServiceDown;
            }
        };

        if !response.status().is_success() {
            tracing::warn!(status = %response.status(), "add request answered with an error status");
            return RegisterOutcome::ServiceDown;
        }

        match response.text().await {
            Ok(body) => decode_add_body(&body),
            Err(err) => {
                tracing::warn!(error = %err, "failed to read add response body");
                RegisterOutcome::ServiceDown
            }
        }
    }

    /// Asks the service to release a previously allocated port.
    ///
    /// The response body is intentionally not interpreted. Errors are
    /// returned so the caller can log them, nothing more: by the time this
    /// runs the row is already gone from the table.
    pub async fn release(&self, port: u16) -> Result<()> {
        let url = format!("{}/api", self.base_url);
        let port = port.to_string();
        let response = self
            .http
            .get(&url)
            .query(&[("op", "rmv"), ("port", port.as_str())])
            .send()
            .await
            .context("send release request")?;
        response
            .error_for_status()
            .context("release request rejected")?;
        Ok(())
    }

    /// Address a browser can open for the session on `port`.
    pub fn session_address(&self, port: u16) -> String {
        session_address(&self.base_url, port)
    }
}

/// Address a browser can open for a session on `port`: the service URL's
/// scheme and host with the allocated port.
pub fn session_address(base_url: &str, port: u16) -> String {
    if let Ok(mut url) = url::Url::parse(base_url) {
        if url.set_port(Some(port)).is_ok() {
            url.set_path("");
            return url.to_string().trim_end_matches('/').to_string();
        }
    }
    format!("http://localhost:{port}")
}

/// Decodes the add operation's response body.
fn decode_add_body(body: &str) -> RegisterOutcome {
    if body.is_empty() {
        return RegisterOutcome::ServiceDown;
    }
    match body.trim().parse::<u16>() {
        Ok(port) => RegisterOutcome::Registered(port),
        Err(_) => RegisterOutcome::Rejected(body.to_string()),
    }
}

use std::fmt;
use std::io::Write;
use std::process::{Command, Stdio};

use tracing::debug;

use crate::sync::errors::SyncError;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
}

impl Method {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Patch => "PATCH",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub token: Option<String>,
    pub body: Option<String>,
}

/// Sends one JSON request and returns the response body.
pub trait HttpTransport {
    fn send(&self, request: &HttpRequest) -> Result<String, SyncError>;
}

impl<T: HttpTransport + ?Sized> HttpTransport for &T {
    fn send(&self, request: &HttpRequest) -> Result<String, SyncError> {
        (**self).send(request)
    }
}

/// Shells out to `curl`; the token and body are piped through stdin as curl config.
#[derive(Debug, Clone)]
pub struct CurlTransport {
    program: String,
}

impl CurlTransport {
    #[must_use]
    pub fn new() -> Self {
        Self::with_program("curl")
    }

    #[must_use]
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Public flags only. Credentials and the body go through [`Self::config`].
    fn arguments(request: &HttpRequest) -> Vec<String> {
        [
            "--silent",
            "--show-error",
            "--fail-with-body",
            "--request",
            request.method.as_str(),
            "--header",
            "Accept: application/vnd.github+json",
            "--config",
            "-",
            request.url.as_str(),
        ]
        .into_iter()
        .map(str::to_string)
        .collect()
    }

    /// Curl config text fed through stdin, keeping the token off the command line.
    fn config(request: &HttpRequest) -> String {
        let mut config = String::new();

        if let Some(token) = &request.token {
            config.push_str(&config_line("header", &format!("Authorization: token {token}")));
        }

        if let Some(body) = &request.body {
            config.push_str(&config_line("header", "Content-Type: application/json"));
            config.push_str(&config_line("data-binary", body));
        }

        config
    }
}

fn config_line(option: &str, value: &str) -> String {
    let mut quoted = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\\' => quoted.push_str("\\\\"),
            '"' => quoted.push_str("\\\""),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            other => quoted.push(other),
        }
    }

    format!("{option} = \"{quoted}\"\n")
}

impl Default for CurlTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpTransport for CurlTransport {
    fn send(&self, request: &HttpRequest) -> Result<String, SyncError> {
        debug!(method = %request.method, url = %request.url, "sending gist request");

        let spawn_error = |source| SyncError::Spawn {
            program: self.program.clone(),
            source,
        };

        let mut child = Command::new(&self.program)
            .args(Self::arguments(request))
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(spawn_error)?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(Self::config(request).as_bytes())
                .map_err(spawn_error)?;
        }

        let output = child.wait_with_output().map_err(spawn_error)?;

        if !output.status.success() {
            return Err(SyncError::CommandFailed {
                program: self.program.clone(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

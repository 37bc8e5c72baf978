use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::sync::errors::SyncError;
use crate::sync::transport::{HttpRequest, HttpTransport, Method};

pub const GIST_API: &str = "https://api.github.com/gists";
pub const DEFAULT_DESCRIPTION: &str = "Benchmark Results";

/// Opaque identifier of a published gist.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GistId(String);

impl GistId {
    pub fn new(id: impl AsRef<str>) -> Result<Self, SyncError> {
        let id = id.as_ref().trim();

        if id.is_empty() {
            return Err(SyncError::EmptyId);
        }

        Ok(Self(id.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GistId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Published {
    pub id: GistId,
    pub html_url: Option<String>,
    /// `true` when a new gist was created rather than an existing one updated.
    pub created: bool,
}

/// Remote copy of the ledger.
pub trait RemoteSync {
    /// Content of the stored ledger file.
    fn fetch(&self, id: &GistId, filename: &str) -> Result<String, SyncError>;

    /// Creates a gist when `id` is `None`, updates it otherwise.
    fn publish(
        &self,
        id: Option<&GistId>,
        filename: &str,
        content: &str,
    ) -> Result<Published, SyncError>;
}

impl<R: RemoteSync + ?Sized> RemoteSync for &R {
    fn fetch(&self, id: &GistId, filename: &str) -> Result<String, SyncError> {
        (**self).fetch(id, filename)
    }

    fn publish(
        &self,
        id: Option<&GistId>,
        filename: &str,
        content: &str,
    ) -> Result<Published, SyncError> {
        (**self).publish(id, filename, content)
    }
}

#[derive(Debug, Serialize)]
struct GistPayload<'a> {
    description: &'a str,
    public: bool,
    files: BTreeMap<&'a str, FilePayload<'a>>,
}

#[derive(Debug, Serialize)]
struct FilePayload<'a> {
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct GistResponse {
    id: String,
    #[serde(default)]
    html_url: Option<String>,
    #[serde(default)]
    files: BTreeMap<String, FileResponse>,
}

#[derive(Debug, Deserialize)]
struct FileResponse {
    #[serde(default)]
    content: Option<String>,
}

/// GitHub gist API over an [`HttpTransport`].
#[derive(Debug, Clone)]
pub struct GistSync<T: HttpTransport> {
    transport: T,
    token: Option<String>,
    description: String,
}

impl<T: HttpTransport> GistSync<T> {
    #[must_use]
    pub fn new(transport: T, token: Option<String>) -> Self {
        Self {
            transport,
            token: token.filter(|token| !token.trim().is_empty()),
            description: DEFAULT_DESCRIPTION.to_string(),
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    fn payload(&self, filename: &str, content: &str) -> Result<String, SyncError> {
        let payload = GistPayload {
            description: &self.description,
            public: true,
            files: BTreeMap::from([(filename, FilePayload { content })]),
        };

        Ok(serde_json::to_string(&payload)?)
    }
}

impl<T: HttpTransport> RemoteSync for GistSync<T> {
    fn fetch(&self, id: &GistId, filename: &str) -> Result<String, SyncError> {
        let body = self.transport.send(&HttpRequest {
            method: Method::Get,
            url: format!("{GIST_API}/{id}"),
            token: self.token.clone(),
            body: None,
        })?;

        let mut response: GistResponse = serde_json::from_str(&body)?;

        // prefer the ledger's own file name, then whatever file comes first
        let file = match response.files.remove(filename) {
            Some(file) => Some(file),
            None => response.files.into_values().next(),
        };

        file.and_then(|file| file.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or_else(|| SyncError::MissingContent(id.to_string()))
    }

    fn publish(
        &self,
        id: Option<&GistId>,
        filename: &str,
        content: &str,
    ) -> Result<Published, SyncError> {
        let (method, url) = match id {
            Some(id) if self.token.is_none() => {
                return Err(SyncError::TokenRequired(id.to_string()));
            }
            Some(id) => (Method::Patch, format!("{GIST_API}/{id}")),
            None => (Method::Post, GIST_API.to_string()),
        };

        let body = self.transport.send(&HttpRequest {
            method,
            url,
            token: self.token.clone(),
            body: Some(self.payload(filename, content)?),
        })?;

        let response: GistResponse = serde_json::from_str(&body)?;
        let published = Published {
            id: GistId::new(&response.id)?,
            html_url: response.html_url,
            created: id.is_none(),
        };

        info!(
            id = %published.id,
            url = ?published.html_url,
            created = published.created,
            "ledger published"
        );
        Ok(published)
    }
}

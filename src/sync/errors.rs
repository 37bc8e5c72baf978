use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SyncError {
    #[error("failed to launch {program}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("{program} exited with {status}: {stderr}")]
    CommandFailed {
        program: String,
        status: String,
        stderr: String,
    },
    #[error("malformed gist response")]
    MalformedResponse(#[from] serde_json::Error),
    #[error("gist {0} has no file content")]
    MissingContent(String),
    #[error("a GitHub token is required to update gist {0}")]
    TokenRequired(String),
    #[error("gist id is empty")]
    EmptyId,
}

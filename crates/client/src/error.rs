use std::fmt;

use thiserror::Error;

/// The remote operation a failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Create,
    Update,
    Delete,
    Reset,
    List,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Create => "create",
            Operation::Update => "update",
            Operation::Delete => "delete",
            Operation::Reset => "reset",
            Operation::List => "list",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never produced a response.
    #[error("{operation} request failed: {source}")]
    Transport {
        operation: Operation,
        #[source]
        source: reqwest::Error,
    },
    /// The server answered with a non-success status.
    #[error("{operation} rejected with status {status}")]
    Rejected { operation: Operation, status: u16 },
    /// The body was not the JSON the endpoint promises.
    #[error("{operation} response could not be decoded: {source}")]
    Decode {
        operation: Operation,
        #[source]
        source: serde_json::Error,
    },
    /// The body decoded but does not describe the expected book.
    #[error("{operation} response is unexpected: {reason}")]
    UnexpectedBody { operation: Operation, reason: String },
}

impl ClientError {
    pub fn operation(&self) -> Operation {
        match self {
            ClientError::Transport { operation, .. }
            | ClientError::Rejected { operation, .. }
            | ClientError::Decode { operation, .. }
            | ClientError::UnexpectedBody { operation, .. } => *operation,
        }
    }

    /// True when the server was reached and said no.
    pub fn is_rejection(&self) -> bool {
        matches!(self, ClientError::Rejected { .. })
    }
}

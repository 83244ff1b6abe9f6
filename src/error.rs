use crate::cmd::ParseError;

/// Reasons a session ends other than the peer closing the connection.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("connection i/o failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed command from client: {0}")]
    Parse(#[from] ParseError),
}

pub type Result<T> = std::result::Result<T, Error>;

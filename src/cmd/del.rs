use crate::cmd::ParseError;
use crate::{Response, StoreBase};

/// Remove a key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Del {
    key: String,
}

impl Del {
    /// Create a new `Del` command
    pub fn new(key: impl Into<String>) -> Del {
        Del { key: key.into() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Syntax:
    /// DEL key
    pub fn parse(tokens: &[&str]) -> Result<Del, ParseError> {
        match tokens.get(1) {
            Some(key) => Ok(Del::new(*key)),
            None => Err(ParseError::NotEnoughArguments),
        }
    }

    /// Deleting a missing key is not an error, the reply is always `0`
    pub fn apply(self, store: &dyn StoreBase) -> Response {
        store.delete(&self.key);

        Response::Ok
    }
}

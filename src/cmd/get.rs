use crate::cmd::ParseError;
use crate::{Response, StoreBase};

/// Look up the value stored at a key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Get {
    // The key to search for
    key: String,
}

impl Get {
    /// Create a new `Get` command
    pub fn new(key: impl Into<String>) -> Get {
        Get { key: key.into() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Parsing the necessary arguments for the `Get` command
    ///
    /// Syntax:
    /// GET key
    ///
    /// Tokens after the key are ignored.
    pub fn parse(tokens: &[&str]) -> Result<Get, ParseError> {
        match tokens.get(1) {
            Some(key) => Ok(Get::new(*key)),
            None => Err(ParseError::NotEnoughArguments),
        }
    }

    /// Replies with the value, or `-1` if the key holds nothing
    pub fn apply(self, store: &dyn StoreBase) -> Response {
        Response::from_value(store.get(&self.key))
    }
}

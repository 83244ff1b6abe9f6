use crate::cmd::ParseError;
use crate::{Response, StoreBase};

/// Store a value at a key, overwriting whatever was there
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Set {
    // The key to store at
    key: String,

    // The value to be stored
    value: String,
}

impl Set {
    /// Create a new `Set` command
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Set {
        Set {
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Parsing the necessary arguments for the `Set` command
    ///
    /// Syntax:
    /// SET key value
    ///
    /// Tokens after the value are ignored.
    pub fn parse(tokens: &[&str]) -> Result<Set, ParseError> {
        match tokens {
            [_, key, value, ..] => Ok(Set::new(*key, *value)),
            _ => Err(ParseError::MissingValue),
        }
    }

    pub fn apply(self, store: &dyn StoreBase) -> Response {
        store.set(self.key, self.value);

        Response::Ok
    }
}

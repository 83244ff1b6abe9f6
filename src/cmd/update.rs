use crate::cmd::ParseError;
use crate::{Response, StoreBase};

/// Same upsert as `Set`, exposed under its own name.
/// There is no check that the key already exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Update {
    key: String,
    value: String,
}

impl Update {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Update {
        Update {
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

    /// Syntax:
    /// UPDATE key value
    pub fn parse(tokens: &[&str]) -> Result<Update, ParseError> {
        match tokens {
            [_, key, value, ..] => Ok(Update::new(*key, *value)),
            _ => Err(ParseError::MissingValue),
        }
    }

    pub fn apply(self, store: &dyn StoreBase) -> Response {
        store.update(self.key, self.value);

        Response::Ok
    }
}

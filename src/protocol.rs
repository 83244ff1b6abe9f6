// Wire format for the line protocol: one command per read, one raw payload per reply.
use std::fmt;

const NOT_FOUND: &str = "-1";
const OK: &str = "0";

/// A reply written back on the connection.
///
/// Nothing frames the payload: it is the literal value, the literal error
/// text, or one of the two status tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// The value stored at a key, written verbatim
    Value(String),
    /// GET on a missing (or empty) value, encoded as `-1`
    NotFound,
    /// Acknowledges SET, UPDATE and DEL, encoded as `0`
    Ok,
    /// Protocol error text, sent right before the connection closes
    Error(String),
}

impl Response {
    /// Reply for a GET that returned `value`
    ///
    /// The store uses the empty string for "absent", so an empty value
    /// is reported as not found.
    pub fn from_value(value: String) -> Response {
        if value.is_empty() {
            Response::NotFound
        } else {
            Response::Value(value)
        }
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        self.to_string().into_bytes()
    }
}

impl fmt::Display for Response {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Response::Value(value) => fmt.write_str(value),
            Response::NotFound => fmt.write_str(NOT_FOUND),
            Response::Ok => fmt.write_str(OK),
            Response::Error(msg) => fmt.write_str(msg),
        }
    }
}

/// Interpret the bytes of one read as text.
///
/// Invalid UTF-8 sequences are replaced rather than rejected; the parser
/// then fails on them like on any other unknown token.
pub fn decode_chunk(chunk: &[u8]) -> String {
    String::from_utf8_lossy(chunk).into_owned()
}

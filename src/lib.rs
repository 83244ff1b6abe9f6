pub mod client;
pub mod cmd;
pub mod config;
pub mod connection;
pub mod error;
pub mod protocol;
pub mod server;
pub mod store;

pub use client::Client;
pub use connection::Connection;
pub use connection::ConnectionBase;
pub use connection::MockConnectionBase;
pub use error::{Error, Result};
pub use protocol::Response;
pub use store::MockStoreBase;
pub use store::Store;
pub use store::StoreBase;

pub const DEFAULT_PORT: u16 = 8001;

/// Upper bound on the bytes consumed by a single read, and therefore on
/// the size of one command.
pub const READ_BUFFER_SIZE: usize = 4 * 1024;

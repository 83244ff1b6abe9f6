use std::net::SocketAddr;

use clap::Parser;

use crate::READ_BUFFER_SIZE;

/// Options for the `tinykv-server` binary
#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "In-memory key-value server, one store per connection")]
pub struct ServerConfig {
    /// Socket address to listen on. Use port 0 for an ephemeral port.
    #[arg(long, default_value = "127.0.0.1:8001")]
    pub listen: SocketAddr,

    /// Bytes consumed by one read; longer commands are cut at this size.
    #[arg(long, default_value_t = READ_BUFFER_SIZE)]
    pub read_buffer_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: SocketAddr::from(([127, 0, 0, 1], crate::DEFAULT_PORT)),
            read_buffer_size: READ_BUFFER_SIZE,
        }
    }
}

/// Options for the `tinykv-client` binary
#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Interactive client for tinykv")]
pub struct ClientConfig {
    /// Address of the server to connect to.
    #[arg(long, default_value = "127.0.0.1:8001")]
    pub server: SocketAddr,
}

use crate::protocol::decode_chunk;
use crate::{Response, READ_BUFFER_SIZE};
use async_trait::async_trait;
use mockall::automock;
use tokio::io::{self, AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

/// Cannot have `mockall` as a dev-dependency
/// and also import the Mocked attr in the tests/ dir
///
/// "those in a tests directory, behave like independent crates that use your main library.
/// As a consequence the library itself is not compiled in test mode for integration tests,
/// and your cfg_attr disables automock"
///
/// Refer to:
/// https://stackoverflow.com/q/76831451
/// https://github.com/rust-lang/cargo/issues/2911
///
#[automock]
#[async_trait]
pub trait ConnectionBase: Send + Sync {
    /// Read the next command line. `None` means the peer closed the connection.
    async fn read_command(&mut self) -> io::Result<Option<String>>;

    async fn write_response(&mut self, response: &Response) -> io::Result<()>;
}

/// The purpose of `Connection` is to read commands from and write replies
/// to the `TcpStream` established between the client and the server.
///
/// There is no framing: whatever a single read returns is taken to be
/// exactly one complete command. A command split across two reads is seen
/// as two commands, and two commands arriving in one read are seen as one.
#[derive(Debug)]
pub struct Connection {
    // The TCP Stream for reading and writing to the client
    stream: TcpStream,

    // Fixed-size buffer, one command at most this long
    buffer: Vec<u8>,
}

impl Connection {
    pub fn new(socket: TcpStream) -> Connection {
        Connection::with_buffer_size(socket, READ_BUFFER_SIZE)
    }

    /// A zero-sized buffer would make every read look like EOF, so the size
    /// is clamped to at least one byte.
    pub fn with_buffer_size(socket: TcpStream, size: usize) -> Connection {
        Connection {
            stream: socket,
            buffer: vec![0; size.max(1)],
        }
    }
}

#[async_trait]
impl ConnectionBase for Connection {
    async fn read_command(&mut self) -> io::Result<Option<String>> {
        // `0` indicates the end of the stream
        let n: usize = self.stream.read(&mut self.buffer).await?;
        if n == 0 {
            return Ok(None);
        }

        Ok(Some(decode_chunk(&self.buffer[..n])))
    }

    /// Write the whole payload and flush it
    async fn write_response(&mut self, response: &Response) -> io::Result<()> {
        self.stream.write_all(&response.to_bytes()).await?;

        // Make sure that any buffered contents are written.
        self.stream.flush().await
    }
}

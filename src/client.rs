use crate::protocol::decode_chunk;
use crate::READ_BUFFER_SIZE;
use tokio::io::{self, AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpStream, ToSocketAddrs};

/// Minimal client for the line protocol.
///
/// Commands are sent one at a time and each is answered with a single read,
/// mirroring how the server frames its side of the exchange.
#[derive(Debug)]
pub struct Client {
    stream: TcpStream,
    buffer: Vec<u8>,
}

impl Client {
    pub async fn connect(addr: impl ToSocketAddrs) -> io::Result<Client> {
        let stream = TcpStream::connect(addr).await?;

        Ok(Client {
            stream,
            buffer: vec![0; READ_BUFFER_SIZE],
        })
    }

    /// Send one command and wait for its reply.
    ///
    /// The command is trimmed before sending. Returns `None` if the server
    /// closed the connection instead of replying, which is what happens
    /// after it has reported a malformed command.
    pub async fn send(&mut self, command: &str) -> io::Result<Option<String>> {
        self.stream.write_all(command.trim().as_bytes()).await?;
        self.stream.flush().await?;

        self.recv().await
    }

    /// Read one reply without sending anything
    pub async fn recv(&mut self) -> io::Result<Option<String>> {
        let n: usize = self.stream.read(&mut self.buffer).await?;
        if n == 0 {
            return Ok(None);
        }

        Ok(Some(decode_chunk(&self.buffer[..n])))
    }
}

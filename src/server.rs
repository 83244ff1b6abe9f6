use crate::config::ServerConfig;
use crate::{cmd::Command, Connection, ConnectionBase, Error, Response, Result, Store};
use std::future::Future;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::{debug, error, info, warn};

/// Server listener state. Created in the `run` call. It includes a `run` method
/// which performs the TCP listening and initialization of per-connection state.
#[derive(Debug)]
struct Listener {
    listener: TcpListener,

    read_buffer_size: usize,
}

/// Per-connection session. Reads commands from the connection and applies
/// them to a store that lives exactly as long as the session.
///
/// No two sessions share a `Store`: data written on one connection is
/// never visible on another, and is dropped when the connection closes.
#[derive(Debug)]
pub struct Session<C> {
    connection: C,
    store: Store,
}

impl Listener {
    /// Run the server
    ///
    /// Listen for inbound connections. For each inbound connection, spawn a
    /// tokio task to process that connection.
    ///
    /// A failed accept is logged and skipped; it does not stop the server.
    async fn run(&mut self) {
        loop {
            let (socket, peer) = match self.listener.accept().await {
                Ok(accepted) => accepted,
                Err(err) => {
                    error!(error = %err, "failed to accept connection");
                    continue;
                }
            };

            debug!(%peer, "accepted connection");

            let connection = Connection::with_buffer_size(socket, self.read_buffer_size);
            let mut session = Session::new(connection);

            // Spawn a new task to process the connection.
            tokio::spawn(async move {
                match session.run().await {
                    Ok(()) => debug!(%peer, "connection closed"),
                    Err(Error::Parse(err)) => {
                        warn!(%peer, error = %err, "closing connection after malformed command")
                    }
                    Err(err) => error!(%peer, error = %err, "connection error"),
                }
            });
        }
    }
}

impl<C: ConnectionBase> Session<C> {
    /// Start a session with a fresh, empty store
    pub fn new(connection: C) -> Session<C> {
        Session {
            connection,
            store: Store::new(),
        }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Process a single connection.
    ///
    /// Each read is one command; each command gets exactly one reply.
    /// Returns `Ok` when the peer closes the connection. A malformed command
    /// has its error text written back and then ends the session with
    /// `Error::Parse`.
    pub async fn run(&mut self) -> Result<()> {
        loop {
            let line: String = match self.connection.read_command().await? {
                Some(line) => line,
                None => return Ok(()),
            };

            match Command::parse(&line) {
                Ok(cmd) => {
                    debug!(?cmd, "executing command");
                    cmd.execute(&self.store, &mut self.connection).await?;
                }
                Err(err) => {
                    let response = Response::Error(err.to_string());
                    self.connection.write_response(&response).await?;
                    return Err(err.into());
                }
            }
        }
    }
}

/// Serve connections from `listener` until `shutdown` completes.
///
/// Sessions already running are not interrupted by shutdown; they end
/// with their connections or with the runtime.
pub async fn run<F>(listener: TcpListener, config: &ServerConfig, shutdown: F)
where
    F: Future<Output = ()>,
{
    if let Ok(addr) = listener.local_addr() {
        info!(%addr, "server listening");
    }

    let mut server = Listener {
        listener,
        read_buffer_size: config.read_buffer_size,
    };

    tokio::select! {
        _ = server.run() => {}
        _ = shutdown => {
            info!("shutting down");
        }
    }
}

/// `run` until the process receives ctrl-c
pub async fn run_until_ctrl_c(listener: TcpListener, config: &ServerConfig) {
    run(listener, config, async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            warn!(error = %err, "failed to install ctrl-c handler");
            // Without a handler there is no shutdown signal; keep serving.
            std::future::pending::<()>().await;
        }
    })
    .await
}

/// Bind `config.listen` and return the listener with its resolved address
pub async fn bind(config: &ServerConfig) -> std::io::Result<(TcpListener, SocketAddr)> {
    let listener = TcpListener::bind(config.listen).await?;
    let addr = listener.local_addr()?;

    Ok((listener, addr))
}

mod get;
pub use get::Get;

mod set;
pub use set::Set;

mod update;
pub use update::Update;

mod del;
pub use del::Del;

use crate::{ConnectionBase, Response, StoreBase};

/// Methods called on `Command` are delegated to the command implementation.
/// `Command` essentially is acting as a Catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Get(Get),
    Set(Set),
    Update(Update),
    Del(Del),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("malformed: at least two arguments required")]
    NotEnoughArguments,

    #[error("malformed: SET/UPDATE require key and value")]
    MissingValue,

    #[error("unknown command")]
    UnknownCommand,
}

impl Command {
    /// Parse a command from one line of client input
    ///
    /// Only a single ASCII space separates fields, so runs of spaces yield
    /// empty tokens. The command name is case-insensitive.
    ///
    /// Syntax:
    /// GET key | DEL key | SET key value | UPDATE key value
    pub fn parse(line: &str) -> Result<Command, ParseError> {
        let tokens: Vec<&str> = line.trim().split(' ').collect();

        if tokens.len() < 2 {
            return Err(ParseError::NotEnoughArguments);
        }

        let cmd: Command = match tokens[0].to_uppercase().as_str() {
            "GET" => Command::Get(Get::parse(&tokens)?),
            "SET" => Command::Set(Set::parse(&tokens)?),
            "UPDATE" => Command::Update(Update::parse(&tokens)?),
            "DEL" => Command::Del(Del::parse(&tokens)?),
            _ => return Err(ParseError::UnknownCommand),
        };

        Ok(cmd)
    }

    /// Run the command against `store` and produce its reply
    pub fn apply(self, store: &dyn StoreBase) -> Response {
        match self {
            Command::Get(cmd) => cmd.apply(store),
            Command::Set(cmd) => cmd.apply(store),
            Command::Update(cmd) => cmd.apply(store),
            Command::Del(cmd) => cmd.apply(store),
        }
    }

    /// Apply the command and write exactly one reply to the connection
    pub async fn execute(
        self,
        store: &dyn StoreBase,
        cnxn: &mut dyn ConnectionBase,
    ) -> std::io::Result<()> {
        let response: Response = self.apply(store);

        cnxn.write_response(&response).await
    }
}

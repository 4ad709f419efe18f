//! Client proxy that invokes commands over the raw text surface.
//!
//! Plays the part of the host's caller: it serialises a document argument,
//! sends it through the host's raw command table, and converts a `false`
//! status into a typed error. The output document is independent of the
//! status and is parsed either way before the status is applied.

use scenelink_module::host::InMemoryHost;
use serde_yaml::Value;
use thiserror::Error;

/// Errors surfaced to a command's caller.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The named command is not bound on the host.
    #[error("command '{name}' is not supported by this module")]
    UnknownCommand {
        /// Name that was invoked.
        name: String,
    },

    /// The command ran and reported failure through its status.
    #[error("command '{name}' failed to complete")]
    CommandFailed {
        /// Name of the failing command.
        name: String,
    },

    /// The argument document could not be serialised.
    #[error("failed to serialise command arguments: {source}")]
    EncodeArguments {
        /// Underlying serialisation failure.
        #[source]
        source: serde_yaml::Error,
    },

    /// The command's output stream did not hold a well-formed document.
    #[error("command '{name}' wrote a malformed reply: {source}")]
    MalformedReply {
        /// Name of the replying command.
        name: String,
        /// Underlying parse failure.
        #[source]
        source: serde_yaml::Error,
    },
}

/// Typed caller over an in-memory host's command table.
pub struct CommandClient<'host> {
    host: &'host InMemoryHost,
}

impl<'host> CommandClient<'host> {
    /// Creates a client over the given host.
    #[must_use]
    pub const fn new(host: &'host InMemoryHost) -> Self {
        Self { host }
    }

    /// Invokes a command with a document argument and parses its reply.
    ///
    /// A null argument is sent as a blank input stream, which the wrapper
    /// treats as the null document.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::UnknownCommand`] for an unbound name,
    /// [`ClientError::CommandFailed`] when the command reports a `false`
    /// status, and the serialisation variants when either document cannot
    /// cross the text boundary.
    pub fn call(&self, name: &str, arguments: &Value) -> Result<Value, ClientError> {
        let input = if arguments.is_null() {
            String::new()
        } else {
            serde_yaml::to_string(arguments)
                .map_err(|source| ClientError::EncodeArguments { source })?
        };

        let reply = self
            .host
            .send(name, &input)
            .ok_or_else(|| ClientError::UnknownCommand {
                name: name.to_owned(),
            })?;

        let output = serde_yaml::from_str(reply.output()).map_err(|source| {
            ClientError::MalformedReply {
                name: name.to_owned(),
                source,
            }
        })?;

        if reply.is_success() {
            Ok(output)
        } else {
            Err(ClientError::CommandFailed {
                name: name.to_owned(),
            })
        }
    }
}

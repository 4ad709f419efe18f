//! In-memory raw-command host for tests.
//!
//! Emulates the host module base's command table: raw bindings keyed by
//! name, invoked over in-memory streams. Used by unit and integration tests
//! in place of a real host process; never on the production path.

use std::collections::BTreeMap;

use crate::handler::RawCommandFn;
use crate::registry::RawCommandHost;

/// A raw-command table with an in-process invocation surface.
#[derive(Default)]
pub struct InMemoryHost {
    commands: BTreeMap<String, RegisteredCommand>,
}

struct RegisteredCommand {
    command: RawCommandFn,
    help: String,
}

/// Outcome of one in-memory command invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandReply {
    status: bool,
    output: String,
}

impl CommandReply {
    /// Returns whether the command reported success.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status
    }

    /// Returns the text written to the command's output stream.
    #[must_use]
    pub const fn output(&self) -> &str {
        self.output.as_str()
    }
}

impl InMemoryHost {
    /// Creates an empty host.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Invokes a bound command with the given input text.
    ///
    /// Returns `None` when no command of that name is bound.
    #[must_use]
    pub fn send(&self, name: &str, input: &str) -> Option<CommandReply> {
        let entry = self.commands.get(name)?;
        let mut output = Vec::new();
        let mut reader = input.as_bytes();
        let status = (entry.command)(&mut output, &mut reader);
        Some(CommandReply {
            status,
            output: String::from_utf8_lossy(&output).into_owned(),
        })
    }

    /// Returns whether a command of the given name is bound.
    #[must_use]
    pub fn supports(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    /// Returns the help text recorded for a bound command.
    #[must_use]
    pub fn help(&self, name: &str) -> Option<&str> {
        self.commands.get(name).map(|entry| entry.help.as_str())
    }
}

impl RawCommandHost for InMemoryHost {
    // Last-wins at the raw layer; rejection of duplicates is the bridge's
    // responsibility.
    fn register_raw(&mut self, name: &str, command: RawCommandFn, help: &str) {
        self.commands.insert(
            name.to_owned(),
            RegisteredCommand {
                command,
                help: help.to_owned(),
            },
        );
    }
}

#[cfg(test)]
mod tests;

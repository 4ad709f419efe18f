//! Command registration bridge over a raw-command host.
//!
//! The [`CommandBridge`] composes structured-command capability onto any
//! host that can register raw text-stream commands. It wraps each handler
//! with the [`wrapper`](crate::wrapper), forwards the binding to the host,
//! and keeps the help text for introspection. Duplicate registrations for
//! the same command name are rejected.

use std::collections::BTreeMap;

use serde_yaml::Value;
use tracing::debug;

use crate::error::ModuleError;
use crate::handler::RawCommandFn;
use crate::wrapper::wrap_command;

/// Tracing target for registration diagnostics.
pub(crate) const REGISTRY_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::registry");

/// The narrow capability a host module base must provide.
///
/// The host owns command routing and the surfacing of a `false` status to
/// its own caller; the bridge only feeds it wrapped bindings.
pub trait RawCommandHost {
    /// Binds a raw command under the given name with accompanying help text.
    fn register_raw(&mut self, name: &str, command: RawCommandFn, help: &str);
}

/// Bridge that registers structured commands on a wrapped host.
///
/// Command entries live for the bridge's lifetime; there is no removal.
pub struct CommandBridge<H: RawCommandHost> {
    host: H,
    help: BTreeMap<String, String>,
}

impl<H: RawCommandHost> CommandBridge<H> {
    /// Creates a bridge over the given host.
    #[must_use]
    pub const fn new(host: H) -> Self {
        Self {
            host,
            help: BTreeMap::new(),
        }
    }

    /// Registers a structured command with help text.
    ///
    /// The handler is wrapped per the stream wrapper's contract before being
    /// handed to the host's raw registration primitive.
    ///
    /// # Errors
    ///
    /// Returns [`ModuleError::DuplicateCommand`] when the name is already
    /// bound on this bridge; the first binding stays in effect.
    pub fn register<F>(&mut self, name: &str, help: &str, handler: F) -> Result<(), ModuleError>
    where
        F: Fn(&mut Value, &Value) -> bool + Send + Sync + 'static,
    {
        if self.help.contains_key(name) {
            return Err(ModuleError::DuplicateCommand {
                name: name.to_owned(),
            });
        }

        debug!(target: REGISTRY_TARGET, command = name, "registering structured command");
        self.host.register_raw(name, wrap_command(name, Box::new(handler)), help);
        self.help.insert(name.to_owned(), help.to_owned());
        Ok(())
    }

    /// Returns the help text stored for a registered command.
    #[must_use]
    pub fn help(&self, name: &str) -> Option<&str> {
        self.help.get(name).map(String::as_str)
    }

    /// Returns the wrapped host.
    #[must_use]
    pub const fn host(&self) -> &H {
        &self.host
    }

    /// Returns the wrapped host mutably.
    pub const fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Consumes the bridge, returning the wrapped host.
    #[must_use]
    pub fn into_host(self) -> H {
        self.host
    }
}

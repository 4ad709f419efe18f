//! Domain errors raised by module registration and entry dispatch.

use thiserror::Error;

/// Errors arising from the command bridge and the module entry shim.
#[derive(Debug, Error)]
pub enum ModuleError {
    /// A command name was registered twice on the same bridge.
    ///
    /// Re-registration is rejected rather than silently overwriting the
    /// first binding, which stays in effect.
    #[error("command '{name}' is already registered")]
    DuplicateCommand {
        /// Name of the rejected registration.
        name: String,
    },

    /// The module's bare argument string failed to parse as a document.
    ///
    /// This is fatal for the invocation; there is no partial or default
    /// entry behaviour.
    #[error("malformed module arguments: {source}")]
    EntryArguments {
        /// Underlying parse failure.
        #[source]
        source: serde_yaml::Error,
    },
}

#[cfg(test)]
mod tests;

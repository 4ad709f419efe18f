//! Domain errors raised by reference decoding.
//!
//! All errors use `thiserror`-derived enums with structured context so
//! callers can inspect the failure programmatically. Decode failures are
//! terminal for the invocation that raised them; nothing here is retried.

use thiserror::Error;

use crate::lookup::ContainerId;

/// Errors arising from decoding a reference fragment.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The fragment does not have the wire shape of any reference.
    ///
    /// Shape is validated before any registry lookup, so a malformed
    /// fragment never touches the directory.
    #[error("malformed reference, expected {expected}: {message}")]
    Malformed {
        /// Human-readable description of the expected wire shape.
        expected: &'static str,
        /// Description of the shape violation.
        message: String,
    },

    /// A well-shaped reference names a container absent from the directory.
    #[error("no container with id {id} in the directory")]
    UnresolvedContainer {
        /// Container id that failed to resolve.
        id: ContainerId,
    },

    /// A well-shaped reference names an object or member absent from its
    /// resolved container.
    #[error("no member '{path}' in container {container}")]
    UnresolvedMember {
        /// Container the lookup was performed against.
        container: ContainerId,
        /// Slash-separated path of names that failed to resolve.
        path: String,
    },
}

#[cfg(test)]
mod tests;

//! Stream wrapper converting raw text I/O into document-level calls.
//!
//! The wrapper reads the whole input stream, parses it as one document,
//! invokes the handler with a fresh null output node, and serialises the
//! result back. Whatever happens, the output stream ends up holding one
//! complete, newline-terminated document, and the reported status is exactly
//! the handler's boolean. The wrapper itself never raises: boundary failures
//! (unreadable input, malformed document text, a panicking handler) are
//! logged and reported as a `false` status without the handler's involvement.

use std::io::{Read, Write};
use std::panic::{AssertUnwindSafe, catch_unwind};

use serde_yaml::Value;
use tracing::error;

use crate::handler::{DocumentCommandFn, RawCommandFn};

/// Tracing target for boundary diagnostics.
pub(crate) const WRAPPER_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::wrapper");

/// Canonical serialised form of a null output document.
pub const NULL_TOKEN: &str = "~";

/// Wraps a structured handler into the host's raw command shape.
///
/// The command name is captured for diagnostics only; routing stays with the
/// host.
#[must_use]
pub fn wrap_command(name: impl Into<String>, handler: DocumentCommandFn) -> RawCommandFn {
    let name = name.into();
    Box::new(move |output: &mut dyn Write, input: &mut dyn Read| {
        run_command(&name, &handler, output, input)
    })
}

/// Runs one structured command invocation over raw streams.
///
/// Returns the handler's status verbatim, or `false` when a boundary guard
/// fired before or instead of the handler.
#[must_use]
pub fn run_command(
    name: &str,
    handler: &DocumentCommandFn,
    output: &mut dyn Write,
    input: &mut dyn Read,
) -> bool {
    let mut text = String::new();
    if let Err(source) = input.read_to_string(&mut text) {
        error!(target: WRAPPER_TARGET, command = name, error = %source, "failed to read command input");
        write_document(name, output, &Value::Null);
        return false;
    }

    let document = if text.trim().is_empty() {
        Value::Null
    } else {
        match serde_yaml::from_str(&text) {
            Ok(document) => document,
            Err(source) => {
                error!(target: WRAPPER_TARGET, command = name, error = %source, "received malformed command input");
                write_document(name, output, &Value::Null);
                return false;
            }
        }
    };

    let mut result = Value::Null;
    let status = match catch_unwind(AssertUnwindSafe(|| handler(&mut result, &document))) {
        Ok(status) => status,
        Err(_) => {
            error!(target: WRAPPER_TARGET, command = name, "command handler panicked");
            result = Value::Null;
            false
        }
    };

    write_document(name, output, &result);
    status
}

/// Serialises a document to the output stream, newline-terminated.
///
/// A null document becomes the canonical null token. Write failures are
/// logged; the command status is decided by the handler alone.
fn write_document(name: &str, output: &mut dyn Write, document: &Value) {
    let mut rendered = if document.is_null() {
        NULL_TOKEN.to_owned()
    } else {
        match serde_yaml::to_string(document) {
            Ok(text) => text,
            Err(source) => {
                error!(target: WRAPPER_TARGET, command = name, error = %source, "failed to serialise command output");
                NULL_TOKEN.to_owned()
            }
        }
    };
    if !rendered.ends_with('\n') {
        rendered.push('\n');
    }
    if let Err(source) = output.write_all(rendered.as_bytes()) {
        error!(target: WRAPPER_TARGET, command = name, error = %source, "failed to write command output");
    }
}

#[cfg(test)]
mod tests;

//! Module entry shim adapting a bare argument string to a document call.
//!
//! Hosts invoke a module's generic entry point with a single argument
//! string. The shim parses that string as one document and forwards it to
//! the module's overridable [`DocumentMain`] entry point, whose integer
//! status is returned verbatim. A string that fails to parse is a fatal
//! entry error; there is no partial or default behaviour.

use serde_yaml::Value;

use crate::error::ModuleError;

/// Document-level entry point of a module.
///
/// The default implementation is a no-op returning a neutral status;
/// modules override it to implement their own startup behaviour.
///
/// # Example
///
/// ```
/// use scenelink_module::{DocumentMain, dispatch_main};
/// use serde_yaml::Value;
///
/// struct Recorder(Option<Value>);
///
/// impl DocumentMain for Recorder {
///     fn document_main(&mut self, arguments: &Value) -> i32 {
///         self.0 = Some(arguments.clone());
///         0
///     }
/// }
///
/// let mut module = Recorder(None);
/// assert_eq!(dispatch_main(&mut module, "- 1\n- 2").expect("parses"), 0);
/// assert!(module.0.expect("recorded").is_sequence());
/// ```
pub trait DocumentMain {
    /// Handles the module's parsed startup arguments.
    fn document_main(&mut self, arguments: &Value) -> i32 {
        let _ = arguments;
        0
    }
}

/// Parses a bare argument string and forwards it to the module's entry point.
///
/// A blank string is forwarded as the null document.
///
/// # Errors
///
/// Returns [`ModuleError::EntryArguments`] when the string is not a
/// well-formed document; the entry point is not invoked.
pub fn dispatch_main<M: DocumentMain>(module: &mut M, arguments: &str) -> Result<i32, ModuleError> {
    let document = if arguments.trim().is_empty() {
        Value::Null
    } else {
        serde_yaml::from_str(arguments).map_err(|source| ModuleError::EntryArguments { source })?
    };
    Ok(module.document_main(&document))
}

#[cfg(test)]
mod tests;

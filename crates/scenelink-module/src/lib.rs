//! Structured command bridge for host modules.
//!
//! The `scenelink-module` crate adapts a host's raw text-stream command
//! surface to typed, document-level handlers. A registered command reads one
//! parsed document, produces one output document (or an explicit null), and
//! reports success through a plain boolean; the wrapper owns all stream
//! marshalling at the boundary.
//!
//! The bridge composes over, rather than inherits from, the host module
//! base: any type implementing the narrow [`RawCommandHost`] capability can
//! carry structured commands.
//!
//! # Example
//!
//! ```
//! use scenelink_module::wrapper::wrap_command;
//!
//! let raw = wrap_command("Echo", Box::new(|output, input| {
//!     *output = input.clone();
//!     true
//! }));
//! let mut rendered = Vec::new();
//! let status = raw(&mut rendered, &mut "- 1\n- 2\n".as_bytes());
//! assert!(status);
//! assert_eq!(rendered, b"- 1\n- 2\n");
//! ```

pub mod entry;
pub mod error;
pub mod handler;
pub mod registry;
pub mod wrapper;

#[cfg(any(test, feature = "test-support"))]
pub mod host;

pub use self::entry::{DocumentMain, dispatch_main};
pub use self::error::ModuleError;
pub use self::handler::{DocumentCommandFn, RawCommandFn};
pub use self::registry::{CommandBridge, RawCommandHost};
pub use self::wrapper::{NULL_TOKEN, wrap_command};

//! End-to-end harness for the scenelink command bridge.
//!
//! Wires the codec and the module bridge together the way a real host
//! would: a [`demo::DemoModule`] registers echo commands over an in-memory
//! host, and a [`client::CommandClient`] invokes them through the raw text
//! surface, converting a failed status into a typed error the way a host
//! surfaces command failure to its own caller. The integration tests under
//! `tests/` drive complete parse → handle → serialise round trips through
//! this harness.

pub mod client;
pub mod demo;

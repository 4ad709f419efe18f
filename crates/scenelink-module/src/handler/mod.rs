//! Function shapes for structured and raw commands.
//!
//! A structured handler works purely in terms of parsed documents; the raw
//! shape is what the host module base understands. The
//! [`wrapper`](crate::wrapper) converts between the two.

use std::io::{Read, Write};

use serde_yaml::Value;

/// The typed shape every structured command implements.
///
/// The handler may read the input document freely, including decoding
/// reference fragments from its subtrees. It must either populate the output
/// with a well-formed document or leave it as the explicit null it was given,
/// and must return `true` only when the command's domain-level intent
/// succeeded. Domain failures are conveyed through the returned boolean and
/// the host's logging channel, never by panicking across the boundary; a
/// handler that panics anyway is contained by the wrapper and reported as a
/// failure.
pub type DocumentCommandFn = Box<dyn Fn(&mut Value, &Value) -> bool + Send + Sync>;

/// The host's raw command shape: text streams in and out, status back.
///
/// One newline-terminated document per call on each stream; input is
/// EOF-delimited with no framing.
pub type RawCommandFn = Box<dyn Fn(&mut dyn Write, &mut dyn Read) -> bool + Send + Sync>;

//! Demo module exercising the full bridge surface.
//!
//! Registers one command per boundary behaviour: unconditional success and
//! failure, plus an echo per reference kind that decodes its input against a
//! shared scene directory and re-encodes whatever it resolved. Decode
//! failures are logged and reported through the command status, never
//! propagated.

use std::sync::Arc;

use scenelink_codec::scene::SceneDirectory;
use scenelink_codec::{
    decode_member, decode_object, decode_transform, encode_member, encode_object, encode_transform,
};
use scenelink_module::host::InMemoryHost;
use scenelink_module::{CommandBridge, DocumentMain, ModuleError};
use serde_yaml::Value;
use tracing::warn;

/// Tracing target for demo command diagnostics.
const DEMO_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::demo");

/// A module wired with the demo command set over an in-memory host.
pub struct DemoModule {
    bridge: CommandBridge<InMemoryHost>,
    start_arguments: Option<Value>,
}

impl DemoModule {
    /// Creates the module and registers its commands against the scene.
    ///
    /// # Errors
    ///
    /// Returns [`ModuleError::DuplicateCommand`] if the fixed command set
    /// ever collides, which would be a programming error here.
    pub fn new(scene: Arc<SceneDirectory>) -> Result<Self, ModuleError> {
        let mut bridge = CommandBridge::new(InMemoryHost::new());

        bridge.register("Succeed", "Return success for any input.", |_, _| true)?;
        bridge.register("Fail", "Return failure for any input.", |_, _| false)?;

        let directory = Arc::clone(&scene);
        bridge.register(
            "EchoObject",
            "Decode an object reference and echo it back.",
            move |output, input| match decode_object(input, directory.as_ref()) {
                Ok(body) => {
                    *output = encode_object(body);
                    true
                }
                Err(error) => {
                    warn!(target: DEMO_TARGET, %error, "EchoObject could not decode its input");
                    false
                }
            },
        )?;

        bridge.register(
            "EchoMember",
            "Decode a member reference and echo it back.",
            move |output, input| match decode_member(input, scene.as_ref()) {
                Ok(resolved) => {
                    *output = encode_member(resolved.object(), resolved.member());
                    true
                }
                Err(error) => {
                    warn!(target: DEMO_TARGET, %error, "EchoMember could not decode its input");
                    false
                }
            },
        )?;

        bridge.register(
            "EchoTransform",
            "Decode a transform and echo it back.",
            |output, input| match decode_transform(input) {
                Ok(transform) => {
                    *output = encode_transform(&transform);
                    true
                }
                Err(error) => {
                    warn!(target: DEMO_TARGET, %error, "EchoTransform could not decode its input");
                    false
                }
            },
        )?;

        Ok(Self {
            bridge,
            start_arguments: None,
        })
    }

    /// Returns the host carrying the registered commands.
    #[must_use]
    pub const fn host(&self) -> &InMemoryHost {
        self.bridge.host()
    }

    /// Returns the help text for one of the demo commands.
    #[must_use]
    pub fn help(&self, name: &str) -> Option<&str> {
        self.bridge.help(name)
    }

    /// Returns the arguments recorded by the last entry-point invocation.
    #[must_use]
    pub fn start_arguments(&self) -> Option<&Value> {
        self.start_arguments.as_ref()
    }
}

impl DocumentMain for DemoModule {
    fn document_main(&mut self, arguments: &Value) -> i32 {
        self.start_arguments = Some(arguments.clone());
        0
    }
}

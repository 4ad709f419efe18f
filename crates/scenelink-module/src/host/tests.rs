//! Unit tests for the in-memory host.

use super::*;
use crate::wrapper::wrap_command;

fn succeed() -> RawCommandFn {
    wrap_command("Succeed", Box::new(|_, _| true))
}

#[test]
fn send_returns_none_for_unbound_command() {
    let host = InMemoryHost::new();
    assert!(host.send("Missing", "").is_none());
}

#[test]
fn registered_command_is_invocable() {
    let mut host = InMemoryHost::new();
    host.register_raw("Succeed", succeed(), "Return success.");

    assert!(host.supports("Succeed"));
    assert_eq!(host.help("Succeed"), Some("Return success."));
    let reply = host.send("Succeed", "").expect("command is bound");
    assert!(reply.is_success());
    assert_eq!(reply.output(), "~\n");
}

#[test]
fn raw_registration_is_last_wins() {
    let mut host = InMemoryHost::new();
    host.register_raw("Flip", wrap_command("Flip", Box::new(|_, _| true)), "First.");
    host.register_raw("Flip", wrap_command("Flip", Box::new(|_, _| false)), "Second.");

    let reply = host.send("Flip", "").expect("command is bound");
    assert!(!reply.is_success());
    assert_eq!(host.help("Flip"), Some("Second."));
}

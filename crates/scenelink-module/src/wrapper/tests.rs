//! Unit tests for the stream wrapper.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use serde_yaml::Value;

use super::*;

fn run(handler: DocumentCommandFn, input: &str) -> (bool, String) {
    let raw = wrap_command("Test", handler);
    let mut output = Vec::new();
    let status = raw(&mut output, &mut input.as_bytes());
    (status, String::from_utf8(output).expect("utf8 output"))
}

fn echo() -> DocumentCommandFn {
    Box::new(|output, input| {
        *output = input.clone();
        true
    })
}

#[test]
fn echoes_parsed_document() {
    let (status, output) = run(echo(), "- 1\n- two\n");
    assert!(status);
    assert_eq!(output, "- 1\n- two\n");
}

#[test]
fn output_is_always_newline_terminated() {
    let (_, output) = run(echo(), "plain scalar");
    assert!(output.ends_with('\n'));
    assert_eq!(output.matches('\n').count(), 1);
}

#[test]
fn null_output_serialises_as_null_token() {
    let (status, output) = run(Box::new(|_, _| true), "anything");
    assert!(status);
    assert_eq!(output, "~\n");
}

#[test]
fn blank_input_is_the_null_document() {
    let (status, output) = run(
        Box::new(|output, input| {
            assert!(input.is_null());
            *output = Value::from("saw null");
            true
        }),
        "   \n",
    );
    assert!(status);
    assert_eq!(output, "saw null\n");
}

#[test]
fn status_matches_handler_verbatim() {
    let (status, output) = run(
        Box::new(|output, _| {
            *output = Value::from("diagnostic detail");
            false
        }),
        "input",
    );
    assert!(!status);
    assert_eq!(output, "diagnostic detail\n");
}

#[test]
fn parse_failure_short_circuits_handler() {
    let calls = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&calls);
    let handler: DocumentCommandFn = Box::new(move |_, _| {
        seen.fetch_add(1, Ordering::SeqCst);
        true
    });

    let (status, output) = run(handler, "- [unclosed");
    assert!(!status);
    assert_eq!(output, "~\n");
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn panicking_handler_is_contained() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(|_| ()));
    let (status, output) = run(
        Box::new(|output, _| {
            *output = Value::from("partial");
            panic!("handler bug")
        }),
        "input",
    );
    std::panic::set_hook(previous);

    assert!(!status);
    assert_eq!(output, "~\n");
}

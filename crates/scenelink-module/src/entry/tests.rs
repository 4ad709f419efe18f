//! Unit tests for the module entry shim.

use serde_yaml::Value;

use super::*;

struct DefaultEntry;

impl DocumentMain for DefaultEntry {}

struct Recording {
    arguments: Option<Value>,
    status: i32,
}

impl DocumentMain for Recording {
    fn document_main(&mut self, arguments: &Value) -> i32 {
        self.arguments = Some(arguments.clone());
        self.status
    }
}

#[test]
fn default_entry_is_neutral() {
    let mut module = DefaultEntry;
    assert_eq!(dispatch_main(&mut module, "- anything").expect("parses"), 0);
}

#[test]
fn forwards_parsed_arguments() {
    let mut module = Recording {
        arguments: None,
        status: 0,
    };
    dispatch_main(&mut module, "- 1\n- two").expect("parses");
    let seen = module.arguments.expect("entry point invoked");
    let items = seen.as_sequence().expect("sequence arguments");
    assert_eq!(items.len(), 2);
}

#[test]
fn returns_status_verbatim() {
    let mut module = Recording {
        arguments: None,
        status: 7,
    };
    assert_eq!(dispatch_main(&mut module, "go").expect("parses"), 7);
}

#[test]
fn blank_arguments_become_null() {
    let mut module = Recording {
        arguments: None,
        status: 0,
    };
    dispatch_main(&mut module, "   ").expect("blank is fine");
    assert!(module.arguments.expect("entry point invoked").is_null());
}

#[test]
fn malformed_arguments_are_fatal() {
    let mut module = Recording {
        arguments: None,
        status: 0,
    };
    let error = dispatch_main(&mut module, "- [unclosed").expect_err("must fail");
    assert!(matches!(error, ModuleError::EntryArguments { .. }));
    assert!(module.arguments.is_none(), "entry point must not run");
}

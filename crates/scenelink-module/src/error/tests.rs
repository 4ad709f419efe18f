//! Unit tests for module error formatting.

use std::error::Error as _;

use super::*;

#[test]
fn duplicate_command_names_the_command() {
    let error = ModuleError::DuplicateCommand {
        name: "Echo".to_owned(),
    };
    assert_eq!(error.to_string(), "command 'Echo' is already registered");
}

#[test]
fn entry_arguments_carries_parse_source() {
    let source = serde_yaml::from_str::<serde_yaml::Value>("- [unclosed")
        .expect_err("malformed yaml must fail");
    let error = ModuleError::EntryArguments { source };
    assert!(error.to_string().starts_with("malformed module arguments:"));
    assert!(error.source().is_some());
}

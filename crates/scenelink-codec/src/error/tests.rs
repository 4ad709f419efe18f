//! Unit tests for codec error formatting.

use super::*;

#[test]
fn malformed_names_expected_shape() {
    let error = CodecError::Malformed {
        expected: "[container_id, object_name]",
        message: "expected 2 elements, found 1".to_owned(),
    };
    let text = error.to_string();
    assert!(text.contains("[container_id, object_name]"));
    assert!(text.contains("found 1"));
}

#[test]
fn unresolved_container_names_id() {
    let error = CodecError::UnresolvedContainer {
        id: ContainerId::new(7),
    };
    assert_eq!(error.to_string(), "no container with id 7 in the directory");
}

#[test]
fn unresolved_member_names_path_and_container() {
    let error = CodecError::UnresolvedMember {
        container: ContainerId::new(3),
        path: "table1/top".to_owned(),
    };
    assert_eq!(
        error.to_string(),
        "no member 'table1/top' in container 3"
    );
}

//! Tests for the two failure kinds and their exact messages

use idag::{Builder, NodeError};
use test_case::test_case;

fn missing_parent(id: &str) -> String {
    format!("Missing Parent: Cannot find one or more parents for node '{id}'")
}

fn duplicate_nodes(id: &str) -> String {
    format!("Duplicate Nodes Not Allowed: node '{id}' already in graph.")
}

#[test]
fn test_missing_parent_names_child_not_parent() {
    let err = Builder::new()
        .add_node("10".to_string(), &["12"])
        .build()
        .unwrap_err();

    assert_eq!(err.to_string(), missing_parent("10"));
    assert_eq!(
        err.failures(),
        [NodeError::MissingParent {
            node_id: "10".to_string()
        }]
    );
}

#[test]
fn test_duplicate_node() {
    let err = Builder::new()
        .add_node("12", &[])
        .add_node("12", &[])
        .build()
        .unwrap_err();

    assert_eq!(err.to_string(), duplicate_nodes("12"));
    assert!(matches!(err.failures()[0], NodeError::DuplicateNode { .. }));
}

#[test]
fn test_self_parent_is_missing_parent() {
    let err = Builder::new().add_node("12", &["12"]).build().unwrap_err();
    assert_eq!(err.to_string(), missing_parent("12"));
}

#[test_case(&["ghost"] ; "only parent missing")]
#[test_case(&["root", "ghost"] ; "second parent missing")]
#[test_case(&["ghost", "root"] ; "first parent missing")]
fn test_any_missing_parent_fails(parents: &[&str]) {
    let err = Builder::new()
        .add_node("root", &[])
        .add_node("child", parents)
        .build()
        .unwrap_err();

    assert_eq!(err.to_string(), missing_parent("child"));
}

#[test]
fn test_duplicate_of_seeded_node() {
    let dag = Builder::new().add_node("a", &[]).build().unwrap();
    let err = Builder::from_dag(dag).add_node("a", &[]).build().unwrap_err();

    assert_eq!(err.to_string(), duplicate_nodes("a"));
}

#[test]
fn test_duplicate_with_different_payload() {
    #[derive(Debug, Clone, idag::Node)]
    struct Labeled {
        id: &'static str,
        #[allow(dead_code)]
        label: &'static str,
    }

    let err = Builder::new()
        .add_node(Labeled { id: "x", label: "first" }, &[])
        .add_node(Labeled { id: "x", label: "second" }, &[])
        .build()
        .unwrap_err();

    assert_eq!(err.to_string(), duplicate_nodes("x"));
}

#[test]
fn test_build_error_is_std_error() {
    fn takes_error(_: &dyn std::error::Error) {}

    let err = Builder::new().add_node("a", &["b"]).build().unwrap_err();
    takes_error(&err);
    takes_error(&err.failures()[0]);
}

//! Tests for empty DAGs and minimal builders

use idag::{Builder, Dag, DagResult};

#[test]
fn test_build_nothing() -> DagResult<()> {
    let dag: Dag<String> = Builder::new().build()?;

    assert_eq!(dag.size(), 0);
    assert!(dag.edges().is_empty());
    Ok(())
}

#[test]
fn test_extend_empty_dag_with_nothing() -> DagResult<()> {
    let dag: Dag<&str> = Builder::from_dag(Dag::empty()).build()?;
    assert!(dag.is_empty());
    Ok(())
}

#[test]
fn test_empty_string_id_is_a_valid_id() -> DagResult<()> {
    let dag = Builder::new()
        .add_node("", &[])
        .add_node("child", &[""])
        .build()?;

    assert_eq!(dag.get_height(""), Some(0));
    assert_eq!(dag.get_height("child"), Some(1));
    Ok(())
}

#[test]
fn test_ids_are_case_and_whitespace_sensitive() -> DagResult<()> {
    let dag = Builder::new()
        .add_node("node", &[])
        .add_node("Node", &[])
        .add_node("node ", &[])
        .build()?;

    assert_eq!(dag.size(), 3);
    Ok(())
}

#[test]
fn test_single_node_many_root_siblings() -> DagResult<()> {
    let mut builder = Builder::new();
    for i in 0..100 {
        builder = builder.add_node(format!("root-{i}"), &[]);
    }
    let dag = builder.build()?;

    assert_eq!(dag.size(), 100);
    assert!(dag.nodes().all(|info| info.height() == 0));
    Ok(())
}

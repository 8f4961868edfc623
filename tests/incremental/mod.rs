//! Tests for extending a previously built DAG

use crate::common::steps::*;
use crate::common::{assert_well_formed, Privilege};
use idag::{Builder, DagResult};

#[test]
fn test_seeded_builder_extends_dag() -> DagResult<()> {
    let edit_only = add_edit_all(add_edit_own(add_admin(Builder::<Privilege>::new()))).build()?;
    assert_eq!(edit_only.size(), 3);

    let dag = add_view_all(add_view_own(Builder::from_dag(edit_only.clone()))).build()?;

    assert_eq!(dag.size(), 5);
    assert_well_formed(&dag);

    // Everything from the seed survives unchanged
    for info in edit_only.nodes() {
        let id = info.node().id.as_str();
        assert_eq!(dag.get(id), Some(info.node()));
        assert_eq!(dag.get_height(id), Some(info.height()));
    }
    assert_eq!(&dag.edges()[..edit_only.edges().len()], edit_only.edges());
    Ok(())
}

#[test]
fn test_seed_is_untouched() -> DagResult<()> {
    let seed = Builder::new().add_node("a", &[]).build()?;
    let snapshot = seed.clone();

    let _extended = seed.clone().into_builder().add_node("b", &["a"]).build()?;

    assert_eq!(seed, snapshot);
    Ok(())
}

#[test]
fn test_repeated_extension() -> DagResult<()> {
    let mut dag = Builder::new().add_node("0".to_string(), &[]).build()?;

    for i in 1..20 {
        let parent = (i - 1).to_string();
        dag = dag
            .into_builder()
            .add_node(i.to_string(), &[parent.as_str()])
            .build()?;
    }

    assert_eq!(dag.size(), 20);
    assert_eq!(dag.get_height("19"), Some(19));
    assert_eq!(dag.edges().len(), 19);
    Ok(())
}

#[test]
fn test_new_nodes_can_hang_off_seeded_nodes_out_of_order() -> DagResult<()> {
    let seed = Builder::new()
        .add_node("root", &[])
        .add_node("mid", &["root"])
        .build()?;

    let dag = Builder::from(seed)
        .add_node("leaf", &["new", "mid"])
        .add_node("new", &["root"])
        .build()?;

    assert_eq!(dag.get_height("new"), Some(1));
    assert_eq!(dag.get_height("leaf"), Some(2));
    Ok(())
}

#[test]
fn test_failed_extension_leaves_seed_usable() {
    let seed = Builder::new().add_node("a", &[]).build().unwrap();

    let failed = seed.clone().into_builder().add_node("b", &["ghost"]).build();
    assert!(failed.is_err());

    let ok = seed.into_builder().add_node("b", &["a"]).build().unwrap();
    assert_eq!(ok.size(), 2);
}

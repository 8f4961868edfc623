//! Tests with tracing feature enabled

use idag::{Builder, DagResult};

use tracing_subscriber::{fmt, EnvFilter};

fn init_subscriber() {
    let _ = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn test_tracing_with_subscriber() -> DagResult<()> {
    init_subscriber();

    let dag = Builder::new()
        .add_node("a", &[])
        .add_node("b", &["a"])
        .build()?;

    assert_eq!(dag.get_height("b"), Some(1));
    Ok(())
}

#[test]
fn test_tracing_with_deferred_instructions() -> DagResult<()> {
    init_subscriber();

    let dag = Builder::new()
        .add_node("c", &["b"])
        .add_node("b", &["a"])
        .add_node("a", &[])
        .build()?;

    let extended = dag.into_builder().add_node("d", &["c"]).build()?;
    assert_eq!(extended.get_height("d"), Some(3));
    Ok(())
}

#[test]
fn test_tracing_with_failed_build() {
    init_subscriber();

    let result = Builder::new()
        .add_node("a", &[])
        .add_node("a", &[])
        .add_node("b", &["ghost"])
        .build();

    assert_eq!(result.unwrap_err().failures().len(), 2);
}

use super::*;
use crate::fixtures::reference_connector;

#[test]
fn registers_and_looks_up_by_id() {
    let registry = InMemoryConnectorRegistry::new();
    let (connector, _init, _destroy) = reference_connector("test-connector-id");
    registry.register(connector);

    let found = registry.get_connector(&"test-connector-id".into());
    assert!(found.is_some());
    assert_eq!(found.unwrap().name, "test-connector");
}

#[test]
fn unknown_id_returns_none() {
    let registry = InMemoryConnectorRegistry::new();
    assert!(registry.get_connector(&"does-not-exist".into()).is_none());
}

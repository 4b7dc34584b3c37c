//! `MFramework` is registered with the repository exactly once, and the
//! manager's in-memory reference is replaced by the registered
//! (id-bearing) copy.

use xfer_storage::Repository as _;

use crate::harness::{framework_schema, harness_for};

#[tokio::test]
async fn initialize_registers_framework_and_repository_assigns_an_id() {
    let h = harness_for("job-framework").await;

    // The repository only accepts one registration ever; since `initialize`
    // already consumed it, a second direct registration on the same
    // repository must be rejected.
    let err = h.repository.register_framework(framework_schema()).await.unwrap_err();
    assert!(matches!(err, xfer_storage::RepositoryError::FrameworkAlreadyRegistered));
}

// SPDX-License-Identifier: MIT

//! A minimal in-memory reference connector used by tests across the
//! workspace, gated behind the `test-support` feature.

use crate::callbacks::{CallbackPair, Destroyer, Initializer, NoopDestroyer};
use crate::connector::Connector;
use crate::context::ConnectorContext;
use crate::error::ConnectorError;
use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use xfer_core::{FieldDescriptor, FieldKind, FormSchema, JobType};

/// Records every call made to it — lets tests assert initializer/destroyer
/// dispatch, including the destroyer-on-error rollback path.
#[derive(Default)]
pub struct RecordingInitializer {
    pub calls: Mutex<Vec<(String, Value, Value)>>,
    pub fails: bool,
}

#[async_trait]
impl Initializer for RecordingInitializer {
    async fn initialize(
        &self,
        context: &ConnectorContext,
        connector_connection_config: &Value,
        connector_job_config: &Value,
    ) -> Result<(), ConnectorError> {
        self.calls.lock().push((
            context.job_id.to_string(),
            connector_connection_config.clone(),
            connector_job_config.clone(),
        ));
        if self.fails {
            return Err(ConnectorError::InitializerFailed("forced failure".into()));
        }
        Ok(())
    }

    fn jars(&self) -> Vec<String> {
        vec!["connector-support.jar".to_string()]
    }
}

#[derive(Default)]
pub struct RecordingDestroyer {
    pub calls: Mutex<Vec<String>>,
}

#[async_trait]
impl Destroyer for RecordingDestroyer {
    async fn run(&self, context: &ConnectorContext) -> Result<(), ConnectorError> {
        self.calls.lock().push(context.job_id.to_string());
        Ok(())
    }
}

/// Builds a connector named `test-connector` with one IMPORT field
/// (`output_directory`) and a no-op EXPORT form, recording initializer and
/// destroyer for both directions so tests can assert on them.
pub fn reference_connector(id: &str) -> (Connector, Arc<RecordingInitializer>, Arc<RecordingDestroyer>) {
    let initializer = Arc::new(RecordingInitializer::default());
    let destroyer = Arc::new(RecordingDestroyer::default());

    let mut job_forms = HashMap::new();
    job_forms.insert(
        JobType::Import,
        FormSchema::new(vec![FieldDescriptor::new("output_directory", FieldKind::Text, true)]),
    );
    job_forms.insert(JobType::Export, FormSchema::default());

    let connector = Connector {
        id: id.into(),
        name: "test-connector".to_string(),
        connection_form: FormSchema::new(vec![FieldDescriptor::new(
            "connection_string",
            FieldKind::Text,
            true,
        )]),
        job_forms,
        importer: CallbackPair { initializer: initializer.clone(), destroyer: destroyer.clone() },
        exporter: CallbackPair { initializer: Arc::new(NoopInitializer), destroyer: Arc::new(NoopDestroyer) },
    };

    (connector, initializer, destroyer)
}

struct NoopInitializer;

#[async_trait]
impl Initializer for NoopInitializer {
    async fn initialize(
        &self,
        _context: &ConnectorContext,
        _connector_connection_config: &Value,
        _connector_job_config: &Value,
    ) -> Result<(), ConnectorError> {
        Ok(())
    }
}

// SPDX-License-Identifier: MIT

//! xfer-connector: connector SPI and registry contract.
//!
//! A connector contributes configuration shapes (forms) plus initializer and
//! destroyer callbacks per job direction. `xfer-manager` never talks to a
//! concrete connector type directly — it goes through [`ConnectorRegistry`].

#![cfg_attr(test, allow(clippy::unwrap_used))]

mod callbacks;
mod connector;
mod context;
mod error;
mod form;
mod registry;

#[cfg(any(test, feature = "test-support"))]
pub mod fixtures;

pub use callbacks::{CallbackPair, Destroyer, Initializer, NoopDestroyer};
pub use connector::Connector;
pub use context::ConnectorContext;
pub use error::ConnectorError;
pub use form::{materialize, MaterializeError};
pub use registry::ConnectorRegistry;

#[cfg(any(test, feature = "test-support"))]
pub use registry::InMemoryConnectorRegistry;

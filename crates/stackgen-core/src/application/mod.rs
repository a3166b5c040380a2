//! Application layer: orchestration of the scaffold use cases.
//!
//! The service coordinates the reader, renderers, materializer and mutator
//! through the driven ports. Everything here is synchronous and testable
//! against mock ports.

pub mod context;
pub mod error;
pub mod materializer;
pub mod mutator;
pub mod ports;
pub mod reader;
pub mod service;

pub use context::InvocationContext;
pub use error::ApplicationError;
pub use materializer::{Applied, Materializer, WriteAction};
pub use mutator::{DependencySection, ProjectMutator};
pub use reader::WorkspaceReader;
pub use service::{ScaffoldOutcome, ScaffoldService, ServiceOptions};

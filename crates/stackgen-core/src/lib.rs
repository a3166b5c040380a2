//! Stackgen Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Stackgen
//! monorepo scaffolding tool, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          stackgen-cli (CLI)             │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │   (ScaffoldService: init / add ops)     │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │    (Driven: Filesystem, Processes)      │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    stackgen-adapters (Infrastructure)   │
//! │  (LocalFilesystem, SystemProcessRunner) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (ArtifactSpec, RenderPlan, Manifest)   │
//! │         No External Dependencies        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use stackgen_core::application::{
//!     InvocationContext, ScaffoldService, ServiceOptions,
//! };
//! use stackgen_core::domain::{FeatureFlags, Framework};
//!
//! // 1. Build the service with injected adapters
//! let ctx = InvocationContext::new("/tmp/proj");
//! let service = ScaffoldService::new(ctx, filesystem, runner, ServiceOptions::default());
//!
//! // 2. Run use cases
//! service.init("proj")?;
//! service.add_app("web", Framework::React, FeatureFlags::default())?;
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Pure renderers: (kind, name, scope, flags) -> RenderPlan
pub mod render;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ApplicationError, InvocationContext, Materializer, ProjectMutator, ScaffoldOutcome,
        ScaffoldService, ServiceOptions, WorkspaceReader,
        ports::{Filesystem, ProcessRunner},
    };
    pub use crate::domain::{
        ArtifactKind, ArtifactSpec, Capability, FeatureFlags, FileUnit, Framework, Member,
        MemberGroup, RenderPlan, WorkspaceDescriptor, WriteMode,
    };
    pub use crate::error::{Error, Result};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

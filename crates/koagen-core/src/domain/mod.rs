// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for koagen.
//!
//! This module contains the pure half of the scaffolding engine: option
//! model, manifest builder, dependency resolver, package descriptor and
//! render context. All I/O is handled via ports defined in the application
//! layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No external crates**: Only std library + thiserror + serde derive
//! - **Deterministic**: identical options always yield identical output
//!
// Public API - what the world sees
pub mod dependencies;
pub mod entities;
pub mod error;
pub mod value_objects;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use dependencies::{
    DependencyFragment, DependencySection, ResolvedDependencies, resolve_dependencies,
};
pub use entities::{
    manifest::{ArtifactKind, ContentKey, Manifest, ManifestEntry, ViewPage, build_manifest},
    options::{ProjectOptions, ProjectOptionsBuilder, derive_app_name},
    package::{OrderedMap, PackageDescriptor},
    render_context::RenderContext,
};

pub use error::{DomainError, ErrorCategory};

pub use value_objects::{FrameworkVersion, ViewEngine};

pub use entities::common::{Permissions, RelativePath};
pub use validation::DomainValidator;

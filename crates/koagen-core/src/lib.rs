//! Koagen Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the koagen
//! project generator, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            koagen-cli (CLI)             │
//! │   (parses flags, prints progress)       │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │            (ScaffoldService)            │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │  (Filesystem, TemplateRenderer,         │
//! │   ProgressSink)                         │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     koagen-adapters (Infrastructure)    │
//! │ (LocalFilesystem, MemoryFilesystem,     │
//! │  EmbeddedRenderer)                      │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (ProjectOptions, Manifest,              │
//! │  ResolvedDependencies, PackageDescriptor)│
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use koagen_core::prelude::*;
//!
//! let options = ProjectOptions::builder("/work/blog")
//!     .view_engine(ViewEngine::Handlebars)
//!     .include_git(true)
//!     .build()?;
//!
//! // Adapters are injected by the caller.
//! let service = ScaffoldService::new(renderer, filesystem);
//! let report = service.scaffold(&options, &progress)?;
//! ```

pub mod domain;

pub mod application;

pub mod error;

/// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ScaffoldReport, ScaffoldService,
        ports::{Filesystem, ProgressSink, TemplateRenderer},
    };
    pub use crate::domain::{
        ArtifactKind, ContentKey, FrameworkVersion, Manifest, ManifestEntry, PackageDescriptor,
        ProjectOptions, RenderContext, ResolvedDependencies, ViewEngine,
    };
    pub use crate::error::{KoagenError, KoagenResult};
}

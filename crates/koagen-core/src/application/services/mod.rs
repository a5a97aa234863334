//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish the
//! "generate a project" use case.

pub mod scaffold_service;

pub use scaffold_service::{ScaffoldReport, ScaffoldService};

pub mod common;
pub mod manifest;
pub mod options;
pub mod package;
pub mod render_context;

pub use crate::domain::DomainError;
pub use manifest::Manifest;
pub use options::ProjectOptions;
pub use package::PackageDescriptor;
pub use render_context::RenderContext;

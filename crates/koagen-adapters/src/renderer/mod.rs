//! Template rendering for generated projects.
//!
//! Bodies are embedded at compile time via [`include_str!`] in the
//! [`embedded`] module. At run time [`EmbeddedRenderer`] either copies a body
//! verbatim, substitutes `{{APP_NAME}}` and `{{VIEW_EXTENSION}}`, or
//! serializes the `package.json` descriptor.
//!
//! ## Adding a new template
//!
//! 1. Create the file under `templates/`
//! 2. Add a `pub const` with `include_str!` in [`embedded`]
//! 3. Map its `ContentKey` in `embedded::static_body` or
//!    `embedded::template_body`

pub mod embedded;
mod embedded_renderer;

pub use embedded_renderer::EmbeddedRenderer;

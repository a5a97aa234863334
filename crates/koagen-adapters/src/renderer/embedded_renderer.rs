use koagen_core::{
    application::{ApplicationError, ports::TemplateRenderer},
    domain::{
        ArtifactKind, ContentKey, ManifestEntry, PackageDescriptor, ProjectOptions,
        RenderContext, ResolvedDependencies,
    },
    error::{KoagenError, KoagenResult},
};
use thiserror::Error;
use tracing::{instrument, trace};

use super::embedded;

#[derive(Debug, Error)]
enum EmbedError {
    #[error("no static body for {0:?}")]
    NoStaticBody(ContentKey),

    #[error("no template body for {0:?}")]
    NoTemplateBody(ContentKey),

    #[error("failed to serialize package.json: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl From<EmbedError> for KoagenError {
    fn from(e: EmbedError) -> Self {
        ApplicationError::RenderingFailed {
            reason: e.to_string(),
        }
        .into()
    }
}

/// Renderer backed by the template bodies compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedRenderer;

impl EmbeddedRenderer {
    pub fn new() -> Self {
        Self
    }

    fn render_template(
        &self,
        key: ContentKey,
        options: &ProjectOptions,
        dependencies: &ResolvedDependencies,
    ) -> Result<String, EmbedError> {
        if key == ContentKey::PackageManifest {
            let descriptor = PackageDescriptor::new(options.app_name(), dependencies);
            return Ok(serde_json::to_string_pretty(&descriptor)?);
        }

        let body = embedded::template_body(key).ok_or(EmbedError::NoTemplateBody(key))?;
        Ok(RenderContext::for_options(options).render(body))
    }
}

impl TemplateRenderer for EmbeddedRenderer {
    #[instrument(skip_all, fields(path = %entry.path))]
    fn render(
        &self,
        entry: &ManifestEntry,
        options: &ProjectOptions,
        dependencies: &ResolvedDependencies,
    ) -> KoagenResult<Option<Vec<u8>>> {
        let content = match entry.kind {
            ArtifactKind::Directory => return Ok(None),
            ArtifactKind::StaticFile(key) => embedded::static_body(key)
                .ok_or(EmbedError::NoStaticBody(key))?
                .to_string(),
            ArtifactKind::RenderedFile(key) => {
                self.render_template(key, options, dependencies)?
            }
        };

        trace!(bytes = content.len(), "rendered");
        Ok(Some(content.into_bytes()))
    }
}

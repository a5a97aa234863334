use crate::domain::{dependencies::ResolvedDependencies, entities::Manifest, error::DomainError};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across entities.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_manifest(manifest: &Manifest) -> Result<(), DomainError> {
        manifest.validate()
    }

    pub fn validate_dependencies(dependencies: &ResolvedDependencies) -> Result<(), DomainError> {
        dependencies.validate()
    }
}

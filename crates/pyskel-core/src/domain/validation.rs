use crate::domain::{
    entities::{ProjectRequest, Template},
    error::DomainError,
};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across callers.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_request(request: &ProjectRequest) -> Result<(), DomainError> {
        request.validate()
    }

    /// A template is valid when every `$` in it forms a well-formed placeholder.
    pub fn validate_template(template: &Template) -> Result<(), DomainError> {
        template.placeholders().map(|_| ())
    }
}

use thiserror::Error;

/// Result type for metadata validation
pub type Result<T> = std::result::Result<T, ModelError>;

/// Errors raised while validating one interceptor's declared metadata.
///
/// All variants are configuration-time authoring mistakes: they are
/// detected eagerly, surfaced with the offending interceptor's name, and
/// never retried.
#[derive(Error, Debug)]
pub enum ModelError {
    /// A role declaration is present but its value is empty or whitespace
    #[error("interceptor '{interceptor}' declares an empty role")]
    EmptyRole { interceptor: String },

    /// An interceptor declares an ordering dependency on its own role
    #[error("interceptor '{interceptor}' cannot be ordered before or after its own role '{role}'")]
    SelfDependency { interceptor: String, role: String },
}

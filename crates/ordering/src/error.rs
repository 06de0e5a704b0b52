use interlace_model::OrderScope;
use thiserror::Error;

/// Result type for ordering operations
pub type Result<T> = std::result::Result<T, OrderingError>;

/// Configuration errors surfaced while resolving an interceptor order.
///
/// Both variants abort processing of the affected interceptor or target;
/// neither is retryable, since they describe authoring mistakes in the
/// declarative metadata.
#[derive(Error, Debug)]
pub enum OrderingError {
    /// More than one explicit order index for the same interceptor at one scope
    #[error("interceptor '{interceptor}' has multiple order indices declared at {scope} scope")]
    DuplicateOrderIndex {
        interceptor: String,
        scope: OrderScope,
    },

    /// The role-dependency graph admits no total order
    #[error("cyclic role ordering between roles [{}]", .roles.join(", "))]
    CyclicRoleOrdering { roles: Vec<String> },
}

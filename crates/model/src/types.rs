use serde::{Deserialize, Serialize};
use std::fmt;

/// Position of a role dependency relative to the related role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DependencyPosition {
    /// The declaring role wraps outside the related role
    Before,

    /// The declaring role wraps inside the related role
    After,
}

/// A declared Before/After constraint between the declaring interceptor's
/// role and another named role
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleDependency {
    /// The role the constraint is declared against
    pub related_role: String,

    /// Where the declaring role sits relative to `related_role`
    pub position: DependencyPosition,
}

impl RoleDependency {
    /// Create a new role dependency
    pub fn new(related_role: impl Into<String>, position: DependencyPosition) -> Self {
        Self {
            related_role: related_role.into(),
            position,
        }
    }

    /// Constraint: the declaring role is ordered before `related_role`
    pub fn before(related_role: impl Into<String>) -> Self {
        Self::new(related_role, DependencyPosition::Before)
    }

    /// Constraint: the declaring role is ordered after `related_role`
    pub fn after(related_role: impl Into<String>) -> Self {
        Self::new(related_role, DependencyPosition::After)
    }
}

/// Override level at which an explicit order index may be declared.
///
/// Scopes are ordered by precedence: a narrower scope overrides a broader
/// one, so `Assembly < Class < Method`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum OrderScope {
    Assembly,
    Class,
    Method,
}

impl OrderScope {
    /// All scopes, broadest first
    pub const ALL: [OrderScope; 3] = [OrderScope::Assembly, OrderScope::Class, OrderScope::Method];

    /// Get human-readable name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Assembly => "assembly",
            Self::Class => "class",
            Self::Method => "method",
        }
    }
}

impl fmt::Display for OrderScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Member visibility of a target operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Visibility {
    Private,
    PrivateProtected,
    Internal,
    Protected,
    ProtectedInternal,
    Public,
}

impl Visibility {
    /// The open default: every visibility
    #[must_use]
    pub fn all() -> Vec<Visibility> {
        vec![
            Self::Private,
            Self::PrivateProtected,
            Self::Internal,
            Self::Protected,
            Self::ProtectedInternal,
            Self::Public,
        ]
    }

    /// Get human-readable name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Private => "private",
            Self::PrivateProtected => "private protected",
            Self::Internal => "internal",
            Self::Protected => "protected",
            Self::ProtectedInternal => "protected internal",
            Self::Public => "public",
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

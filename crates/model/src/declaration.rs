use crate::error::{ModelError, Result};
use crate::filter::TargetFilter;
use crate::types::RoleDependency;
use serde::{Deserialize, Serialize};

/// Reserved role assigned to interceptors that do not declare one
pub const DEFAULT_ROLE: &str = "<Default>";

fn default_role() -> String {
    DEFAULT_ROLE.to_string()
}

/// Validated static metadata for one interceptor type.
///
/// Declarations are read-only shared data: the discovery collaborator
/// hands them over already parsed, once per compilation/analysis unit.
/// A declaration built through [`DeclarationBuilder`] is always valid;
/// one deserialized from stored form must pass [`validate`] before use.
///
/// [`validate`]: InterceptorDeclaration::validate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterceptorDeclaration {
    /// Unique symbolic identity (e.g. a fully qualified type name)
    pub name: String,

    /// Role tag grouping this interceptor for ordering purposes
    #[serde(default = "default_role")]
    pub role: String,

    /// Before/After constraints against other roles, in declaration order
    #[serde(default)]
    pub role_dependencies: Vec<RoleDependency>,

    /// Exclude property-accessor targets from this interceptor
    #[serde(default)]
    pub skip_properties: bool,

    /// Capability flag: the interceptor may rewrite input arguments.
    /// Informational only; no ordering effect.
    #[serde(default)]
    pub allow_changing_input_arguments: bool,

    /// Applicability restrictions (open by default)
    #[serde(default)]
    pub filter: TargetFilter,
}

impl InterceptorDeclaration {
    /// Start building a declaration for the named interceptor type
    pub fn builder(name: impl Into<String>) -> DeclarationBuilder {
        DeclarationBuilder {
            name: name.into(),
            role: None,
            role_dependencies: Vec::new(),
            skip_properties: false,
            allow_changing_input_arguments: false,
            filter: TargetFilter::default(),
        }
    }

    /// Check the per-interceptor invariants.
    ///
    /// Validation is pure and order-independent across interceptors: no
    /// check here looks at any other declaration.
    pub fn validate(&self) -> Result<()> {
        if self.role.trim().is_empty() {
            return Err(ModelError::EmptyRole {
                interceptor: self.name.clone(),
            });
        }

        for dependency in &self.role_dependencies {
            if dependency.related_role == self.role {
                return Err(ModelError::SelfDependency {
                    interceptor: self.name.clone(),
                    role: self.role.clone(),
                });
            }
        }

        Ok(())
    }

    /// Whether this interceptor carries the reserved default role
    #[must_use]
    pub fn has_default_role(&self) -> bool {
        self.role == DEFAULT_ROLE
    }
}

/// Builder for [`InterceptorDeclaration`]
#[derive(Debug, Clone)]
pub struct DeclarationBuilder {
    name: String,
    role: Option<String>,
    role_dependencies: Vec<RoleDependency>,
    skip_properties: bool,
    allow_changing_input_arguments: bool,
    filter: TargetFilter,
}

impl DeclarationBuilder {
    /// Builder: declare the role tag
    #[must_use]
    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    /// Builder: this interceptor's role must be ordered before `role`
    #[must_use]
    pub fn ordered_before(mut self, role: impl Into<String>) -> Self {
        self.role_dependencies.push(RoleDependency::before(role));
        self
    }

    /// Builder: this interceptor's role must be ordered after `role`
    #[must_use]
    pub fn ordered_after(mut self, role: impl Into<String>) -> Self {
        self.role_dependencies.push(RoleDependency::after(role));
        self
    }

    /// Builder: exclude property accessors
    #[must_use]
    pub fn skip_properties(mut self, skip: bool) -> Self {
        self.skip_properties = skip;
        self
    }

    /// Builder: mark the interceptor as rewriting input arguments
    #[must_use]
    pub fn allow_changing_input_arguments(mut self, allow: bool) -> Self {
        self.allow_changing_input_arguments = allow;
        self
    }

    /// Builder: set the applicability filter
    #[must_use]
    pub fn filter(mut self, filter: TargetFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Validate and produce the declaration.
    ///
    /// An undeclared role falls back to [`DEFAULT_ROLE`]; an explicitly
    /// declared role must be non-empty.
    pub fn build(self) -> Result<InterceptorDeclaration> {
        let declaration = InterceptorDeclaration {
            name: self.name,
            role: self.role.unwrap_or_else(default_role),
            role_dependencies: self.role_dependencies,
            skip_properties: self.skip_properties,
            allow_changing_input_arguments: self.allow_changing_input_arguments,
            filter: self.filter,
        };
        declaration.validate()?;
        Ok(declaration)
    }
}

/// Read-only registry of validated declarations.
///
/// Loaded once per compilation/analysis unit and shared by every
/// per-target resolution. The only ways in are `insert` and
/// `from_declarations`, both of which validate, so the set never holds
/// an invalid declaration.
#[derive(Debug, Clone, Default)]
pub struct InterceptorSet {
    declarations: Vec<InterceptorDeclaration>,
}

impl InterceptorSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from discovered declarations, validating each
    pub fn from_declarations(
        declarations: impl IntoIterator<Item = InterceptorDeclaration>,
    ) -> Result<Self> {
        let mut set = Self::new();
        for declaration in declarations {
            set.insert(declaration)?;
        }
        Ok(set)
    }

    /// Validate and add one declaration
    pub fn insert(&mut self, declaration: InterceptorDeclaration) -> Result<()> {
        declaration.validate()?;
        self.declarations.push(declaration);
        Ok(())
    }

    /// Look up a declaration by interceptor name
    pub fn get(&self, name: &str) -> Option<&InterceptorDeclaration> {
        self.declarations
            .iter()
            .find(|declaration| declaration.name == name)
    }

    /// Iterate over the declarations in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &InterceptorDeclaration> {
        self.declarations.iter()
    }

    /// Number of declarations in the set
    #[must_use]
    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    /// Whether the set is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }
}

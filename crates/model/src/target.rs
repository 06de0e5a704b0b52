use crate::types::Visibility;
use serde::{Deserialize, Serialize};

/// One type in a target's declaring chain, as reported by the discovery
/// collaborator.
///
/// `interfaces` carries the interfaces this type implements, including
/// the interfaces those interfaces extend; the collaborator flattens
/// interface hierarchies, the core walks only the base-type chain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDescription {
    /// Fully qualified type name
    pub name: String,

    /// Interfaces implemented by this type
    #[serde(default)]
    pub interfaces: Vec<String>,

    /// Marker attributes present on this type
    #[serde(default)]
    pub marker_attributes: Vec<String>,
}

impl TypeDescription {
    /// Create a type description with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            interfaces: Vec::new(),
            marker_attributes: Vec::new(),
        }
    }

    /// Builder: add an implemented interface
    #[must_use]
    pub fn implements(mut self, interface: impl Into<String>) -> Self {
        self.interfaces.push(interface.into());
        self
    }

    /// Builder: add a marker attribute
    #[must_use]
    pub fn marked_with(mut self, attribute: impl Into<String>) -> Self {
        self.marker_attributes.push(attribute.into());
        self
    }
}

/// Description of one target operation (a method-like unit).
///
/// Produced by the external discovery collaborator. The ancestor chain
/// is already walked, nearest base type first, so the core never touches
/// language-level inheritance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetDescription {
    /// Member name, for log and error context
    pub member_name: String,

    /// Member visibility
    pub visibility: Visibility,

    /// Whether the target is a property accessor
    #[serde(default)]
    pub is_property_accessor: bool,

    /// Marker attributes present on the member itself
    #[serde(default)]
    pub marker_attributes: Vec<String>,

    /// The type declaring the member
    pub declaring_type: TypeDescription,

    /// Base types of the declaring type, nearest first
    #[serde(default)]
    pub ancestors: Vec<TypeDescription>,
}

impl TargetDescription {
    /// Describe a member of `declaring_type`
    pub fn new(
        member_name: impl Into<String>,
        visibility: Visibility,
        declaring_type: TypeDescription,
    ) -> Self {
        Self {
            member_name: member_name.into(),
            visibility,
            is_property_accessor: false,
            marker_attributes: Vec::new(),
            declaring_type,
            ancestors: Vec::new(),
        }
    }

    /// Builder: mark the target as a property accessor
    #[must_use]
    pub fn property_accessor(mut self, is_accessor: bool) -> Self {
        self.is_property_accessor = is_accessor;
        self
    }

    /// Builder: add a marker attribute on the member
    #[must_use]
    pub fn marked_with(mut self, attribute: impl Into<String>) -> Self {
        self.marker_attributes.push(attribute.into());
        self
    }

    /// Builder: append the next base type in the chain
    #[must_use]
    pub fn ancestor(mut self, ancestor: TypeDescription) -> Self {
        self.ancestors.push(ancestor);
        self
    }

    /// Declaring type followed by its ancestors, nearest first
    pub fn type_chain(&self) -> impl Iterator<Item = &TypeDescription> {
        std::iter::once(&self.declaring_type).chain(self.ancestors.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_chain_starts_at_declaring_type() {
        let target = TargetDescription::new(
            "Save",
            Visibility::Public,
            TypeDescription::new("app::SqlRepository"),
        )
        .ancestor(TypeDescription::new("app::RepositoryBase"))
        .ancestor(TypeDescription::new("app::Disposable"));

        let chain: Vec<&str> = target.type_chain().map(|ty| ty.name.as_str()).collect();
        assert_eq!(
            chain,
            vec!["app::SqlRepository", "app::RepositoryBase", "app::Disposable"]
        );
    }

    #[test]
    fn test_target_defaults() {
        let target = TargetDescription::new(
            "get_Count",
            Visibility::Public,
            TypeDescription::new("app::Inventory"),
        );

        assert!(!target.is_property_accessor);
        assert!(target.marker_attributes.is_empty());
        assert!(target.ancestors.is_empty());
    }
}

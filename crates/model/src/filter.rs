use crate::types::Visibility;
use serde::{Deserialize, Serialize};

/// Applicability restrictions declared by one interceptor.
///
/// The default filter matches every target: all member visibilities, no
/// type, interface, or marker-attribute restriction. An empty category
/// list means "no restriction of that kind"; populated categories are
/// OR'd against each other when matching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetFilter {
    /// Member visibilities the interceptor attaches to
    #[serde(default = "Visibility::all")]
    pub member_visibilities: Vec<Visibility>,

    /// Declaring-type names; empty = unrestricted
    #[serde(default)]
    pub target_type_names: Vec<String>,

    /// Implemented-interface names, matched across the ancestor chain
    #[serde(default)]
    pub target_interface_names: Vec<String>,

    /// Marker-attribute names on the member or its declaring type
    #[serde(default)]
    pub target_marker_attribute_names: Vec<String>,
}

impl Default for TargetFilter {
    fn default() -> Self {
        Self {
            member_visibilities: Visibility::all(),
            target_type_names: Vec::new(),
            target_interface_names: Vec::new(),
            target_marker_attribute_names: Vec::new(),
        }
    }
}

impl TargetFilter {
    /// Whether any type/interface/marker category is populated
    #[must_use]
    pub fn has_category_restrictions(&self) -> bool {
        !self.target_type_names.is_empty()
            || !self.target_interface_names.is_empty()
            || !self.target_marker_attribute_names.is_empty()
    }

    /// Builder: restrict matching to the given visibilities
    #[must_use]
    pub fn visibilities(mut self, visibilities: impl IntoIterator<Item = Visibility>) -> Self {
        self.member_visibilities = visibilities.into_iter().collect();
        self
    }

    /// Builder: add a declaring-type restriction
    #[must_use]
    pub fn target_type(mut self, name: impl Into<String>) -> Self {
        self.target_type_names.push(name.into());
        self
    }

    /// Builder: add an implemented-interface restriction
    #[must_use]
    pub fn target_interface(mut self, name: impl Into<String>) -> Self {
        self.target_interface_names.push(name.into());
        self
    }

    /// Builder: add a marker-attribute restriction
    #[must_use]
    pub fn target_marker_attribute(mut self, name: impl Into<String>) -> Self {
        self.target_marker_attribute_names.push(name.into());
        self
    }
}

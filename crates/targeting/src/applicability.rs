use interlace_model::{InterceptorDeclaration, TargetDescription, TargetFilter};

/// Decide whether `declaration` attaches to `target`.
///
/// Property accessors are excluded first when the declaration skips
/// properties; the member visibility must always be allowed; then any
/// populated type/interface/marker category must match. Categories are
/// OR'd, never AND'd, and an empty category neither requires nor
/// excludes anything, so a declaration with no restrictions matches
/// every target.
pub fn applies_to(declaration: &InterceptorDeclaration, target: &TargetDescription) -> bool {
    if declaration.skip_properties && target.is_property_accessor {
        log::debug!(
            "interceptor '{}' skips property accessor '{}'",
            declaration.name,
            target.member_name
        );
        return false;
    }

    if !declaration
        .filter
        .member_visibilities
        .contains(&target.visibility)
    {
        log::debug!(
            "interceptor '{}' does not target {} members, pruned for '{}'",
            declaration.name,
            target.visibility,
            target.member_name
        );
        return false;
    }

    matches_categories(&declaration.filter, target)
}

fn matches_categories(filter: &TargetFilter, target: &TargetDescription) -> bool {
    if !filter.has_category_restrictions() {
        return true;
    }

    if filter
        .target_type_names
        .iter()
        .any(|name| *name == target.declaring_type.name)
    {
        return true;
    }

    if !filter.target_interface_names.is_empty() && implements_any(filter, target) {
        return true;
    }

    if !filter.target_marker_attribute_names.is_empty() && marked_with_any(filter, target) {
        return true;
    }

    false
}

/// Walk the declaring type and its full ancestor chain for an interface
/// match. The chain is supplied pre-walked by the discovery collaborator,
/// so the traversal always advances and always terminates.
fn implements_any(filter: &TargetFilter, target: &TargetDescription) -> bool {
    target.type_chain().any(|ty| {
        ty.interfaces
            .iter()
            .any(|implemented| filter.target_interface_names.contains(implemented))
    })
}

/// Marker attributes are honored on the member itself or its declaring
/// type; ancestor types do not contribute markers.
fn marked_with_any(filter: &TargetFilter, target: &TargetDescription) -> bool {
    target
        .marker_attributes
        .iter()
        .chain(target.declaring_type.marker_attributes.iter())
        .any(|attribute| filter.target_marker_attribute_names.contains(attribute))
}

use crate::error::Result;
use crate::graph::RoleGraph;
use crate::index::{OrderIndexTable, SortKey};
use interlace_model::{InterceptorDeclaration, InterceptorSet, TargetDescription};
use interlace_targeting::applies_to;
use serde::Serialize;
use std::collections::HashMap;

/// Final deterministic interceptor sequence for one target.
///
/// Outermost-first: the first identity wraps the outermost around the
/// target's execution. Immutable once produced; the weaving collaborator
/// reads it and discards it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedOrder {
    sequence: Vec<String>,
}

impl ResolvedOrder {
    fn from_sequence(sequence: Vec<String>) -> Self {
        Self { sequence }
    }

    /// Interceptor identities, outermost first
    #[must_use]
    pub fn sequence(&self) -> &[String] {
        &self.sequence
    }

    /// Iterate over the identities, outermost first
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.sequence.iter().map(String::as_str)
    }

    /// Number of interceptors in the order
    #[must_use]
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    /// Whether no interceptor applies to the target
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Consume into the raw identity sequence
    #[must_use]
    pub fn into_sequence(self) -> Vec<String> {
        self.sequence
    }
}

/// Per-target resolution pipeline over a shared declaration set.
///
/// Resolution is pure: the same declarations, index table, and target
/// description always produce the same order, and nothing is mutated, so
/// callers may resolve disjoint targets in parallel.
pub struct OrderResolver<'a> {
    interceptors: &'a InterceptorSet,
}

impl<'a> OrderResolver<'a> {
    /// Create a resolver over the shared declaration set
    pub fn new(interceptors: &'a InterceptorSet) -> Self {
        Self { interceptors }
    }

    /// Resolve the interceptor order for one target.
    ///
    /// Prunes non-applicable interceptors, orders the surviving roles by
    /// their dependency constraints, breaks ties by effective order index
    /// then lexical name, and expands roles back into interceptor
    /// identities.
    pub fn resolve(
        &self,
        target: &TargetDescription,
        indices: &OrderIndexTable,
    ) -> Result<ResolvedOrder> {
        let attached: Vec<&InterceptorDeclaration> = self
            .interceptors
            .iter()
            .filter(|declaration| applies_to(declaration, target))
            .collect();

        log::debug!(
            "{} of {} interceptors apply to '{}'",
            attached.len(),
            self.interceptors.len(),
            target.member_name
        );

        if attached.is_empty() {
            return Ok(ResolvedOrder::from_sequence(Vec::new()));
        }
        // A single interceptor has nothing to order against; its declared
        // dependencies are all non-binding on this target.
        if let [only] = attached.as_slice() {
            return Ok(ResolvedOrder::from_sequence(vec![only.name.clone()]));
        }

        let mut by_role: HashMap<&str, Vec<&InterceptorDeclaration>> = HashMap::new();
        for &declaration in &attached {
            by_role
                .entry(declaration.role.as_str())
                .or_default()
                .push(declaration);
        }

        let graph = RoleGraph::build(&attached);
        let roles = graph.sorted_roles(|role| role_key(role, &by_role, indices))?;

        let mut sequence = Vec::with_capacity(attached.len());
        for role in &roles {
            let mut members = by_role.remove(role.as_str()).unwrap_or_default();
            members.sort_by_key(|member| indices.sort_key(&member.name));
            sequence.extend(members.into_iter().map(|member| member.name.clone()));
        }

        Ok(ResolvedOrder::from_sequence(sequence))
    }
}

/// Tie-break key for a whole role: the best effective index among its
/// member interceptors, with the role name as the lexical fallback. An
/// indexed member pulls its role ahead of index-less roles.
fn role_key(
    role: &str,
    by_role: &HashMap<&str, Vec<&InterceptorDeclaration>>,
    indices: &OrderIndexTable,
) -> SortKey {
    let best_index = by_role
        .get(role)
        .into_iter()
        .flatten()
        .filter_map(|member| indices.effective_index(&member.name))
        .min();
    SortKey::new(best_index, role)
}

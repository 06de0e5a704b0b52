use crate::error::{OrderingError, Result};
use crate::index::SortKey;
use interlace_model::{DependencyPosition, InterceptorDeclaration};
use petgraph::algo::tarjan_scc;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

/// Role-dependency graph for one target.
///
/// Nodes are the distinct roles present among the interceptors attached
/// to the target; an edge `a -> b` means role `a` must be ordered before
/// role `b`. Built fresh per target, never persisted.
pub struct RoleGraph {
    graph: DiGraph<String, ()>,
}

impl RoleGraph {
    /// Build the graph over the roles present on one target.
    ///
    /// A `(related, Before)` dependency adds `role -> related`; a
    /// `(related, After)` dependency adds `related -> role`. Dependencies
    /// referencing roles absent from the target are non-binding and add
    /// no edge.
    pub fn build(attached: &[&InterceptorDeclaration]) -> Self {
        let mut graph = DiGraph::new();
        let mut roles: HashMap<&str, NodeIndex> = HashMap::new();

        for declaration in attached {
            roles
                .entry(declaration.role.as_str())
                .or_insert_with(|| graph.add_node(declaration.role.clone()));
        }

        for declaration in attached {
            let own = roles[declaration.role.as_str()];
            for dependency in &declaration.role_dependencies {
                let related = match roles.get(dependency.related_role.as_str()) {
                    Some(&idx) => idx,
                    None => continue,
                };
                let (first, second) = match dependency.position {
                    DependencyPosition::Before => (own, related),
                    DependencyPosition::After => (related, own),
                };
                // Same-role interceptors may restate a constraint; one
                // edge keeps the in-degree bookkeeping exact.
                if !graph.contains_edge(first, second) {
                    graph.add_edge(first, second, ());
                }
            }
        }

        Self { graph }
    }

    /// Number of distinct roles on the target
    #[must_use]
    pub fn role_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Roles participating in cycles, sorted and deduplicated
    fn cyclic_roles(&self) -> Vec<String> {
        let mut roles: Vec<String> = tarjan_scc(&self.graph)
            .into_iter()
            .filter(|component| component.len() > 1)
            .flatten()
            .map(|idx| self.graph[idx].clone())
            .collect();
        roles.sort();
        roles.dedup();
        roles
    }

    /// Deterministic topological order over the roles.
    ///
    /// Kahn's algorithm driven by a min-heap: among roles with no path
    /// between them, the one with the smallest key (per `key_of`) is
    /// emitted first, so the same input always yields the same order.
    pub fn sorted_roles<F>(&self, key_of: F) -> Result<Vec<String>>
    where
        F: Fn(&str) -> SortKey,
    {
        let cyclic = self.cyclic_roles();
        if !cyclic.is_empty() {
            return Err(OrderingError::CyclicRoleOrdering { roles: cyclic });
        }

        let mut in_degree: HashMap<NodeIndex, usize> = self
            .graph
            .node_indices()
            .map(|idx| {
                (
                    idx,
                    self.graph
                        .neighbors_directed(idx, Direction::Incoming)
                        .count(),
                )
            })
            .collect();

        let mut ready: BinaryHeap<Reverse<(SortKey, NodeIndex)>> = in_degree
            .iter()
            .filter(|(_, &degree)| degree == 0)
            .map(|(&idx, _)| Reverse((key_of(&self.graph[idx]), idx)))
            .collect();

        let mut order = Vec::with_capacity(self.graph.node_count());
        while let Some(Reverse((_, idx))) = ready.pop() {
            order.push(self.graph[idx].clone());
            for neighbor in self.graph.neighbors(idx) {
                if let Some(degree) = in_degree.get_mut(&neighbor) {
                    *degree -= 1;
                    if *degree == 0 {
                        ready.push(Reverse((key_of(&self.graph[neighbor]), neighbor)));
                    }
                }
            }
        }

        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn declaration(name: &str, role: &str) -> InterceptorDeclaration {
        InterceptorDeclaration::builder(name).role(role).build().unwrap()
    }

    fn lexical(role: &str) -> SortKey {
        SortKey::new(None, role)
    }

    #[test]
    fn test_before_constraint_orders_roles() {
        let a = InterceptorDeclaration::builder("app::A")
            .role("X")
            .ordered_before("Y")
            .build()
            .unwrap();
        let b = declaration("app::B", "Y");

        let graph = RoleGraph::build(&[&a, &b]);
        let roles = graph.sorted_roles(lexical).unwrap();
        assert_eq!(roles, vec!["X", "Y"]);
    }

    #[test]
    fn test_after_constraint_orders_roles() {
        let a = InterceptorDeclaration::builder("app::A")
            .role("A")
            .ordered_after("Z")
            .build()
            .unwrap();
        let z = declaration("app::Z", "Z");

        let graph = RoleGraph::build(&[&a, &z]);
        let roles = graph.sorted_roles(lexical).unwrap();
        // "A" would sort first lexically; the After constraint wins.
        assert_eq!(roles, vec!["Z", "A"]);
    }

    #[test]
    fn test_absent_role_is_non_binding() {
        let a = InterceptorDeclaration::builder("app::A")
            .role("X")
            .ordered_after("Missing")
            .build()
            .unwrap();
        let b = declaration("app::B", "Y");

        let graph = RoleGraph::build(&[&a, &b]);
        assert_eq!(graph.role_count(), 2);
        let roles = graph.sorted_roles(lexical).unwrap();
        assert_eq!(roles, vec!["X", "Y"]);
    }

    #[test]
    fn test_cycle_reported_with_participants() {
        let a = InterceptorDeclaration::builder("app::A")
            .role("X")
            .ordered_before("Y")
            .build()
            .unwrap();
        let b = InterceptorDeclaration::builder("app::B")
            .role("Y")
            .ordered_before("X")
            .build()
            .unwrap();

        let graph = RoleGraph::build(&[&a, &b]);
        let err = graph.sorted_roles(lexical).unwrap_err();
        match err {
            OrderingError::CyclicRoleOrdering { roles } => {
                assert_eq!(roles, vec!["X", "Y"]);
            }
            other => panic!("expected cycle error, got {other}"),
        }
    }

    #[test]
    fn test_unrelated_roles_sort_lexically() {
        let a = declaration("app::A", "Gamma");
        let b = declaration("app::B", "Alpha");
        let c = declaration("app::C", "Beta");

        let graph = RoleGraph::build(&[&a, &b, &c]);
        let roles = graph.sorted_roles(lexical).unwrap();
        assert_eq!(roles, vec!["Alpha", "Beta", "Gamma"]);
    }

    #[test]
    fn test_restated_constraint_adds_one_edge() {
        // Two interceptors of the same role restating the same dependency
        // must not corrupt the in-degree bookkeeping.
        let a1 = InterceptorDeclaration::builder("app::A1")
            .role("X")
            .ordered_before("Y")
            .build()
            .unwrap();
        let a2 = InterceptorDeclaration::builder("app::A2")
            .role("X")
            .ordered_before("Y")
            .build()
            .unwrap();
        let b = declaration("app::B", "Y");

        let graph = RoleGraph::build(&[&a1, &a2, &b]);
        let roles = graph.sorted_roles(lexical).unwrap();
        assert_eq!(roles, vec!["X", "Y"]);
    }
}

use crate::error::{OrderingError, Result};
use interlace_model::OrderScope;
use std::collections::{BTreeMap, HashMap};

/// Explicit order-index declarations for one target, one map per scope.
///
/// Assembled from the scope-level declarations the discovery collaborator
/// reports for the target; each declaration names the interceptor type it
/// applies to and an integer value. Declaring twice for the same
/// `(interceptor, scope)` pair is a configuration error.
#[derive(Debug, Clone, Default)]
pub struct OrderIndexTable {
    levels: BTreeMap<OrderScope, HashMap<String, i32>>,
}

impl OrderIndexTable {
    /// Create an empty table (no preferences anywhere)
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one index declaration
    pub fn declare(
        &mut self,
        scope: OrderScope,
        interceptor: impl Into<String>,
        index: i32,
    ) -> Result<()> {
        let interceptor = interceptor.into();
        let level = self.levels.entry(scope).or_default();
        if level.contains_key(&interceptor) {
            return Err(OrderingError::DuplicateOrderIndex { interceptor, scope });
        }
        level.insert(interceptor, index);
        Ok(())
    }

    /// Effective index for one interceptor.
    ///
    /// The most specific scope that declares an index wins: method over
    /// class over assembly. No declaration anywhere means no preference.
    #[must_use]
    pub fn effective_index(&self, interceptor: &str) -> Option<i32> {
        self.levels
            .iter()
            .rev()
            .find_map(|(_, level)| level.get(interceptor).copied())
    }

    /// Tie-break key for one interceptor
    #[must_use]
    pub fn sort_key(&self, interceptor: &str) -> SortKey {
        SortKey::new(self.effective_index(interceptor), interceptor)
    }
}

/// Deterministic tie-break key.
///
/// Entries carrying an index sort before entries without one, then by
/// ascending index value, then lexically by name. The derived `Ord`
/// follows exactly that field order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct SortKey {
    unindexed: bool,
    index: i32,
    name: String,
}

impl SortKey {
    /// Build a key from an optional effective index and a name
    #[must_use]
    pub fn new(index: Option<i32>, name: impl Into<String>) -> Self {
        Self {
            unindexed: index.is_none(),
            index: index.unwrap_or(0),
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_index_rejected() {
        let mut table = OrderIndexTable::new();
        table.declare(OrderScope::Class, "app::Logging", 1).unwrap();

        let result = table.declare(OrderScope::Class, "app::Logging", 2);
        assert!(matches!(
            result,
            Err(OrderingError::DuplicateOrderIndex {
                scope: OrderScope::Class,
                ..
            })
        ));

        // The same interceptor may still be indexed at another scope.
        table.declare(OrderScope::Method, "app::Logging", 2).unwrap();
    }

    #[test]
    fn test_method_scope_wins() {
        let mut table = OrderIndexTable::new();
        table.declare(OrderScope::Assembly, "app::Logging", 10).unwrap();
        table.declare(OrderScope::Class, "app::Logging", 5).unwrap();
        table.declare(OrderScope::Method, "app::Logging", 1).unwrap();

        assert_eq!(table.effective_index("app::Logging"), Some(1));
    }

    #[test]
    fn test_class_scope_overrides_assembly() {
        let mut table = OrderIndexTable::new();
        table.declare(OrderScope::Assembly, "app::Logging", 10).unwrap();
        table.declare(OrderScope::Class, "app::Logging", 5).unwrap();

        assert_eq!(table.effective_index("app::Logging"), Some(5));
    }

    #[test]
    fn test_assembly_scope_alone_applies() {
        let mut table = OrderIndexTable::new();
        table.declare(OrderScope::Assembly, "app::Logging", 10).unwrap();

        assert_eq!(table.effective_index("app::Logging"), Some(10));
    }

    #[test]
    fn test_absent_index_is_no_preference() {
        let table = OrderIndexTable::new();
        assert_eq!(table.effective_index("app::Logging"), None);
    }

    #[test]
    fn test_index_applies_only_to_named_interceptor() {
        let mut table = OrderIndexTable::new();
        table.declare(OrderScope::Method, "app::Logging", 1).unwrap();

        assert_eq!(table.effective_index("app::Security"), None);
    }

    #[test]
    fn test_sort_key_ordering() {
        // Indexed entries come first, ascending.
        assert!(SortKey::new(Some(1), "b") < SortKey::new(Some(5), "a"));
        // Any index beats no index.
        assert!(SortKey::new(Some(100), "z") < SortKey::new(None, "a"));
        // Name is the final fallback.
        assert!(SortKey::new(None, "a") < SortKey::new(None, "b"));
        assert!(SortKey::new(Some(3), "a") < SortKey::new(Some(3), "b"));
        // Negative indices sort ahead of positive ones.
        assert!(SortKey::new(Some(-2), "z") < SortKey::new(Some(0), "a"));
    }
}

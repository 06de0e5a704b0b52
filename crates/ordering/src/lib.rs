//! # Interlace Ordering
//!
//! Deterministic interceptor ordering per target.
//!
//! ## Features
//!
//! - **Role graph** - Before/After constraints over the roles present on one target
//! - **Cycle detection** - contradictory constraints fail loudly, never misorder
//! - **Index overrides** - explicit per-scope indices, narrower scope wins
//! - **Deterministic ties** - same input always yields the same order
//!
//! ## Architecture
//!
//! ```text
//! InterceptorSet + TargetDescription + OrderIndexTable
//!     │
//!     ├──> Applicability filter (interlace-targeting)
//!     │      └─ prune non-matching interceptors
//!     │
//!     ├──> RoleGraph (petgraph)
//!     │      ├─ Nodes: distinct roles on the target
//!     │      ├─ Edges: must-precede constraints
//!     │      └─ tarjan_scc cycle check
//!     │
//!     └──> Deterministic topological sort
//!            ├─ ties: effective index, then lexical name
//!            └─ ResolvedOrder (outermost-first identities)
//! ```
//!
//! Resolution is pure and single-threaded; callers may resolve disjoint
//! targets in parallel against the same shared declaration set.

mod error;
mod graph;
mod index;
mod resolver;

pub use error::{OrderingError, Result};
pub use graph::RoleGraph;
pub use index::{OrderIndexTable, SortKey};
pub use resolver::{OrderResolver, ResolvedOrder};

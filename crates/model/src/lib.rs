//! # Interlace Model
//!
//! Validated metadata model for interceptor declarations.
//!
//! ## Features
//!
//! - **Declaration model** - role, role dependencies, capability flags, filters
//! - **Extraction-time validation** - malformed metadata is rejected eagerly
//! - **Target descriptions** - the discovery collaborator's view of one target
//! - **Declaration registry** - read-only set loaded once per analysis unit
//!
//! ## Architecture
//!
//! ```text
//! discovered metadata (already parsed)
//!     │
//!     ├──> DeclarationBuilder / serde
//!     │      ├─ apply defaults (role, filters, flags)
//!     │      └─ validate (empty role, self-dependency)
//!     │
//!     ├──> InterceptorDeclaration (immutable value)
//!     │
//!     └──> InterceptorSet (shared, read-only registry)
//! ```
//!
//! Ordering and applicability decisions live in the `interlace-ordering`
//! and `interlace-targeting` crates; this crate holds the data they share.

mod declaration;
mod error;
mod filter;
mod target;
mod types;

pub use declaration::{DeclarationBuilder, InterceptorDeclaration, InterceptorSet, DEFAULT_ROLE};
pub use error::{ModelError, Result};
pub use filter::TargetFilter;
pub use target::{TargetDescription, TypeDescription};
pub use types::{DependencyPosition, OrderScope, RoleDependency, Visibility};

//! # dotattrs-rs — Dot-style Attribute Lists for Dynamic Property Graphs
//!
//! Formats, for one graph vertex, the ` [key=value, ...]` attribute list
//! that dot-style graph exports place after a vertex declaration.
//! Properties live in a dynamically-typed, insertion-ordered collection
//! shared across all vertices; each formatting pass selects a single
//! runtime value type and excludes the vertex's own identifier property.
//!
//! ## Design Principles
//!
//! 1. **Tagged values**: the polymorphic holder is an explicit sum type;
//!    tag dispatch is [`ValueKind`] equality, never type identity
//! 2. **Borrow per call**: the writer keeps no references between calls;
//!    vertex id and collection are per-call borrows
//! 3. **Pure fold**: one synchronous pass in stored order, no I/O, no
//!    allocation beyond the output text
//!
//! ## Quick Start
//!
//! ```rust
//! use dotattrs_rs::{DynamicProperties, ValueKind, vertex_attributes};
//!
//! # fn example() -> dotattrs_rs::Result<()> {
//! let props = DynamicProperties::new()
//!     .with("A", "red")
//!     .with("B", "blue")
//!     .with("A", 5);
//!
//! // "A" never lists its own entries; the Int entry is out of scope here.
//! assert_eq!(vertex_attributes("A", &props, ValueKind::String)?, " [B=blue]");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

// ============================================================================
// Modules
// ============================================================================

pub mod escape;
pub mod model;
pub mod writer;

// ============================================================================
// Re-exports: Model
// ============================================================================

pub use model::{DynamicProperties, PropertyEntry, PropertyValue, ValueKind};

// ============================================================================
// Re-exports: Formatting
// ============================================================================

pub use escape::escape_dot_string;
pub use writer::{vertex_attributes, write_vertex_attributes};

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A tag-matched property value could not be rendered as text.
    /// This indicates corrupted property storage and is fatal to the
    /// calling export operation.
    #[error("property value holds bytes that are not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    #[error("write error: {0}")]
    Fmt(#[from] std::fmt::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

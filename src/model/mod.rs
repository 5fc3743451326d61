//! # Dynamic Property Model
//!
//! The data types the attribute writer reads: a tagged value holder and
//! the insertion-ordered collection of (owner, value) entries shared
//! across all vertices of a graph.
//!
//! Design rule: this module is pure data — no I/O, no state, no escaping
//! or formatting knowledge.

pub mod properties;
pub mod value;

pub use properties::{DynamicProperties, PropertyEntry};
pub use value::{PropertyValue, ValueKind};

//! # standin-concept
//!
//! Declarative object schemas ("concepts") with validation and mock synthesis.
//!
//! A concept describes the expected shape of an object: field names, permitted
//! value categories, optionality, nested sub-concepts, and default sample
//! values. From one concept you can:
//! - [`ObjectConcept::mock`]: synthesize a representative sample object whose
//!   callable fields are live [`standin_core::Spy`] instances
//! - [`ObjectConcept::is_implemented_by`]: validate an arbitrary value
//!   against the declared shape
//!
//! Concepts are built from an ordered list of [`FieldSpec`] declarations,
//! usually accumulated through the fluent [`ConceptBuilder`].

pub mod builder;
pub mod concept;
pub mod field;

pub use builder::ConceptBuilder;
pub use concept::ObjectConcept;
pub use field::{DefaultSample, FieldSpec};

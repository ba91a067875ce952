//! Fluent accumulation of field declarations.

use std::rc::Rc;

use standin_core::{TypeCategory, Value};

use crate::concept::ObjectConcept;
use crate::field::{DefaultSample, FieldSpec};

/// Accumulates an ordered list of field declarations and hands them to
/// [`ObjectConcept`].
///
/// `make_optional`, `with_default`, and `with_default_fn` qualify the most
/// recent declaration; before any declaration they have no effect.
///
/// ```
/// use standin_concept::ConceptBuilder;
/// use standin_core::Value;
///
/// let dog = ConceptBuilder::new()
///     .add_integer("age")
///     .add_text("name").with_default(Value::text("Spot"))
///     .add_text("nickname").make_optional()
///     .build();
///
/// assert!(dog.is_implemented_by(&dog.mock()));
/// ```
#[derive(Default)]
pub struct ConceptBuilder {
    fields: Vec<FieldSpec>,
}

impl ConceptBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a field admitting the given category union.
    #[must_use]
    pub fn add_field(mut self, name: impl Into<String>, categories: Vec<TypeCategory>) -> Self {
        self.fields.push(FieldSpec::new(name, categories));
        self
    }

    #[must_use]
    pub fn add_none(self, name: impl Into<String>) -> Self {
        self.add_field(name, vec![TypeCategory::Null])
    }

    #[must_use]
    pub fn add_integer(self, name: impl Into<String>) -> Self {
        self.add_field(name, vec![TypeCategory::Integer])
    }

    #[must_use]
    pub fn add_number(self, name: impl Into<String>) -> Self {
        self.add_field(name, vec![TypeCategory::Number])
    }

    #[must_use]
    pub fn add_text(self, name: impl Into<String>) -> Self {
        self.add_field(name, vec![TypeCategory::Text])
    }

    /// Declare a callable field; its samples are live spies.
    #[must_use]
    pub fn add_method(self, name: impl Into<String>) -> Self {
        self.add_field(name, vec![TypeCategory::Callable])
    }

    #[must_use]
    pub fn add_array(self, name: impl Into<String>) -> Self {
        self.add_field(name, vec![TypeCategory::Array])
    }

    #[must_use]
    pub fn add_object(self, name: impl Into<String>) -> Self {
        self.add_field(name, vec![TypeCategory::Map])
    }

    #[must_use]
    pub fn add_pattern(self, name: impl Into<String>) -> Self {
        self.add_field(name, vec![TypeCategory::Pattern])
    }

    /// Declare a field whose shape is described by a nested concept.
    #[must_use]
    pub fn add_concept(mut self, name: impl Into<String>, concept: Rc<ObjectConcept>) -> Self {
        self.fields.push(FieldSpec::with_concept(name, concept));
        self
    }

    /// Mark the most recent declaration optional.
    #[must_use]
    pub fn make_optional(mut self) -> Self {
        if let Some(last) = self.fields.last_mut() {
            last.optional = true;
        }
        self
    }

    /// Attach a default sample value to the most recent declaration.
    #[must_use]
    pub fn with_default(mut self, value: Value) -> Self {
        if let Some(last) = self.fields.last_mut() {
            last.default = Some(DefaultSample::Value(value));
        }
        self
    }

    /// Attach a callable default to the most recent declaration; each mock
    /// wraps it in a fresh spy.
    #[must_use]
    pub fn with_default_fn(mut self, behavior: impl Fn() -> Value + 'static) -> Self {
        if let Some(last) = self.fields.last_mut() {
            last.default = Some(DefaultSample::Behavior(Rc::new(behavior)));
        }
        self
    }

    #[must_use]
    pub fn build(self) -> ObjectConcept {
        ObjectConcept::new(self.fields)
    }

    /// Build behind a shared handle, ready for nesting under other concepts.
    #[must_use]
    pub fn build_shared(self) -> Rc<ObjectConcept> {
        Rc::new(self.build())
    }
}

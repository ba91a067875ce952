//! One declared member of a concept.

use std::rc::Rc;

use standin_core::{Behavior, Spy, TypeCategory, Value};

use crate::concept::ObjectConcept;

/// A default sample attached to a field declaration.
///
/// The two constructors on [`ConceptBuilder`](crate::ConceptBuilder) decide
/// the variant: a plain value is returned verbatim from every `mock()`, while
/// a behavior is wrapped in a fresh [`Spy`] per `mock()` call.
#[derive(Clone)]
pub enum DefaultSample {
    Value(Value),
    Behavior(Behavior),
}

/// One named, categorized, optionally-defaulted member of a concept.
///
/// `categories` declares a one-or-more union, but only the first entry drives
/// sampling and validation. The remaining entries record declared intent and
/// are never consulted.
#[derive(Clone)]
pub struct FieldSpec {
    pub name: String,
    pub categories: Vec<TypeCategory>,
    pub optional: bool,
    pub default: Option<DefaultSample>,
    /// The nested schema, present when the field's category is `Concept`.
    /// Shared by reference: one concept may back many parent fields.
    pub nested: Option<Rc<ObjectConcept>>,
}

impl FieldSpec {
    /// A required field admitting the given category union.
    pub fn new(name: impl Into<String>, categories: Vec<TypeCategory>) -> Self {
        Self {
            name: name.into(),
            categories,
            optional: false,
            default: None,
            nested: None,
        }
    }

    /// A required field whose shape is described by a nested concept.
    pub fn with_concept(name: impl Into<String>, concept: Rc<ObjectConcept>) -> Self {
        Self {
            name: name.into(),
            categories: vec![TypeCategory::Concept],
            optional: false,
            default: None,
            nested: Some(concept),
        }
    }

    /// The category that drives sampling and validation.
    #[must_use]
    pub fn effective_category(&self) -> Option<TypeCategory> {
        self.categories.first().copied()
    }

    /// Synthesize this field's sample value.
    ///
    /// A recorded default always wins over category-driven sampling: a
    /// behavior default yields a distinct fresh spy per call (all sharing the
    /// one behavior), a callable value default likewise gets wrapped in a
    /// fresh spy, and any other value is returned by handle (aliasing, never
    /// deep-copied). Without a default, the first category's sample is used,
    /// with `Concept` recursing into the nested schema. Total; a `Concept`
    /// field missing its schema (or an empty category list) yields null.
    #[must_use]
    pub fn mock(&self) -> Value {
        if let Some(default) = &self.default {
            return match default {
                DefaultSample::Behavior(behavior) => {
                    Value::Callable(Spy::with_behavior(Rc::clone(behavior)))
                }
                DefaultSample::Value(Value::Callable(inner)) => {
                    let inner = inner.clone();
                    Value::Callable(Spy::wrapping(move || inner.call(Value::Null, Vec::new())))
                }
                DefaultSample::Value(value) => value.clone(),
            };
        }
        match self.effective_category() {
            Some(TypeCategory::Concept) => self
                .nested
                .as_ref()
                .map_or(Value::Null, |concept| concept.mock()),
            Some(category) => category.sample(),
            None => Value::Null,
        }
    }

    /// Membership validation. Optional fields accept anything, including the
    /// absent sentinel; otherwise the first category's predicate decides, with
    /// `Concept` delegating to the nested schema.
    #[must_use]
    pub fn is_implemented_by(&self, value: &Value) -> bool {
        if self.optional {
            return true;
        }
        match self.effective_category() {
            Some(TypeCategory::Concept) => self
                .nested
                .as_ref()
                .is_some_and(|concept| concept.is_implemented_by(value)),
            Some(category) => category.admits(value),
            None => false,
        }
    }
}

//! An ordered collection of field specs describing one object schema.

use indexmap::IndexMap;
use tracing::debug;

use standin_core::Value;

use crate::field::FieldSpec;

/// A declarative object schema.
///
/// The field list is fixed at construction; `mock` and `is_implemented_by`
/// are pure computations over it, so independent calls never interact through
/// shared state inside the concept.
pub struct ObjectConcept {
    fields: Vec<FieldSpec>,
}

impl ObjectConcept {
    #[must_use]
    pub fn new(fields: Vec<FieldSpec>) -> Self {
        Self { fields }
    }

    /// The declared fields, in declaration order.
    #[must_use]
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Synthesize a sample object: each field's name mapped to its sample, in
    /// declaration order. A duplicated field name overwrites the earlier
    /// sample under the same key, last declaration wins.
    #[must_use]
    pub fn mock(&self) -> Value {
        let mut entries = IndexMap::with_capacity(self.fields.len());
        for field in &self.fields {
            entries.insert(field.name.clone(), field.mock());
        }
        Value::map_of(entries)
    }

    /// Structural validation: does `value` satisfy every declared field?
    ///
    /// Anything that is not a mapping (null, sequences, scalars, callables,
    /// patterns) is rejected outright. Each field then validates the value
    /// under its name, with absence read as the undefined sentinel, failing
    /// fast on the first miss.
    #[must_use]
    pub fn is_implemented_by(&self, value: &Value) -> bool {
        if !value.is_map() {
            debug!(candidate = ?value, "candidate is not a mapping");
            return false;
        }
        for field in &self.fields {
            let member = value.get(&field.name).unwrap_or(Value::Null);
            if !field.is_implemented_by(&member) {
                debug!(field = %field.name, "candidate rejected");
                return false;
            }
        }
        true
    }

    /// Validate a plain JSON document against this concept.
    #[must_use]
    pub fn is_implemented_by_json(&self, json: &serde_json::Value) -> bool {
        self.is_implemented_by(&Value::from_json(json))
    }
}

//! The closed enumeration of value categories a field may declare.
//!
//! Categories are compared by variant tag. The eight data categories carry
//! their own membership predicate ([`TypeCategory::admits`]) and sample
//! synthesis ([`TypeCategory::sample`]); the `Concept` category is routed by
//! the field layer, which owns the nested schema reference, so both methods
//! fall through to the caller-contract result for it.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::spy::Spy;
use crate::value::Value;

/// A category of value a field may hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeCategory {
    /// The absent/none category; admits anything, samples to null.
    Null,
    /// Whole numbers (a numeric value equal to its own truncation).
    Integer,
    /// Any numeric value.
    Number,
    /// Textual values.
    Text,
    /// Invocable values; samples are live [`Spy`] instances.
    Callable,
    /// Ordered sequences.
    Array,
    /// String-keyed mappings.
    Map,
    /// Compiled pattern values.
    Pattern,
    /// A nested schema reference; resolved by the field layer.
    Concept,
}

impl TypeCategory {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Integer => "integer",
            Self::Number => "number",
            Self::Text => "text",
            Self::Callable => "callable",
            Self::Array => "array",
            Self::Map => "map",
            Self::Pattern => "pattern",
            Self::Concept => "concept",
        }
    }

    /// Membership predicate: does `value` belong to this category?
    ///
    /// `Concept` always answers false here; nested-schema membership needs the
    /// schema reference, which lives on the field.
    #[must_use]
    pub fn admits(self, value: &Value) -> bool {
        match self {
            Self::Null => true,
            Self::Integer => value.is_integral(),
            Self::Number => value.is_numeric(),
            Self::Text => value.is_text(),
            Self::Callable => value.is_callable(),
            Self::Array => value.is_array(),
            Self::Map => value.is_map(),
            Self::Pattern => value.is_pattern(),
            Self::Concept => false,
        }
    }

    /// Synthesize this category's representative sample value.
    ///
    /// Aggregate and callable samples are fresh on every call: a new empty
    /// sequence, a new empty mapping, a new bare [`Spy`]. `Concept` has no
    /// intrinsic sample and yields null; the field layer recurses into the
    /// nested schema instead of calling this.
    #[must_use]
    pub fn sample(self) -> Value {
        match self {
            Self::Null | Self::Concept => Value::Null,
            Self::Integer => Value::Int(0),
            Self::Number => Value::Float(0.0),
            Self::Text => Value::text(""),
            Self::Callable => Value::Callable(Spy::new()),
            Self::Array => Value::array(),
            Self::Map => Value::map(),
            Self::Pattern => Value::empty_pattern(),
        }
    }
}

impl fmt::Display for TypeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_sample_belongs_to_its_category() {
        for category in [
            TypeCategory::Null,
            TypeCategory::Integer,
            TypeCategory::Number,
            TypeCategory::Text,
            TypeCategory::Callable,
            TypeCategory::Array,
            TypeCategory::Map,
            TypeCategory::Pattern,
        ] {
            let sample = category.sample();
            assert!(
                category.admits(&sample),
                "sample {sample:?} not admitted by {category}"
            );
        }
    }

    #[test]
    fn null_admits_anything() {
        assert!(TypeCategory::Null.admits(&Value::Null));
        assert!(TypeCategory::Null.admits(&Value::Int(7)));
        assert!(TypeCategory::Null.admits(&Value::text("x")));
        assert!(TypeCategory::Null.admits(&Value::array()));
    }

    #[test]
    fn integer_requires_whole_numbers() {
        assert!(TypeCategory::Integer.admits(&Value::Int(-3)));
        assert!(TypeCategory::Integer.admits(&Value::Float(2.0)));
        assert!(!TypeCategory::Integer.admits(&Value::Float(2.5)));
        assert!(!TypeCategory::Integer.admits(&Value::text("2")));
    }

    #[test]
    fn number_admits_both_numeric_kinds() {
        assert!(TypeCategory::Number.admits(&Value::Int(3)));
        assert!(TypeCategory::Number.admits(&Value::Float(2.5)));
        assert!(!TypeCategory::Number.admits(&Value::Null));
    }

    #[test]
    fn map_rejects_sequences_and_null() {
        assert!(TypeCategory::Map.admits(&Value::map()));
        assert!(!TypeCategory::Map.admits(&Value::array()));
        assert!(!TypeCategory::Map.admits(&Value::Null));
    }

    #[test]
    fn concept_has_no_intrinsic_membership() {
        assert!(!TypeCategory::Concept.admits(&Value::map()));
        assert_eq!(TypeCategory::Concept.sample(), Value::Null);
    }

    #[test]
    fn serde_uses_snake_case_tags() {
        let json = serde_json::to_string(&TypeCategory::Callable).unwrap();
        assert_eq!(json, "\"callable\"");
        let back: TypeCategory = serde_json::from_str("\"pattern\"").unwrap();
        assert_eq!(back, TypeCategory::Pattern);
    }

    #[test]
    fn display_matches_as_str() {
        assert_eq!(TypeCategory::Integer.to_string(), "integer");
        assert_eq!(TypeCategory::Concept.to_string(), "concept");
    }
}

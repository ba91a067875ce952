//! The shared dynamic value model.
//!
//! `Value` is a closed tagged variant covering every kind of value the host
//! environment can hand to a concept: null, booleans, the two numeric kinds,
//! text, callables (always [`Spy`] handles), sequences, mappings, and compiled
//! patterns. Aggregates are shared, interiorly-mutable handles, so cloning a
//! `Value` clones the handle rather than the contents and a default sample
//! returned from several `mock()` calls genuinely aliases one underlying
//! object.
//!
//! Equality is the host's strict identity: by content for null, booleans,
//! numbers (across the two numeric kinds), and text; by handle identity for
//! sequences, mappings, callables, and patterns. Deep comparison is the
//! separate, explicit [`Value::structural_eq`].

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use indexmap::IndexMap;
use regex::Regex;

use crate::category::TypeCategory;
use crate::error::ValueError;
use crate::spy::Spy;

/// Shared handle to a sequence value.
pub type ArrayRef = Rc<RefCell<Vec<Value>>>;
/// Shared handle to a mapping value. Iteration follows insertion order.
pub type MapRef = Rc<RefCell<IndexMap<String, Value>>>;
/// Shared handle to a compiled pattern value.
pub type PatternRef = Rc<Regex>;

/// A dynamically-typed value.
#[derive(Clone)]
pub enum Value {
    /// The absent/undefined sentinel.
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Callable(Spy),
    Array(ArrayRef),
    Map(MapRef),
    Pattern(PatternRef),
}

impl Value {
    /// A textual value.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// A new, empty sequence.
    #[must_use]
    pub fn array() -> Self {
        Self::Array(Rc::new(RefCell::new(Vec::new())))
    }

    /// A sequence holding `items`.
    #[must_use]
    pub fn array_of(items: Vec<Self>) -> Self {
        Self::Array(Rc::new(RefCell::new(items)))
    }

    /// A new, empty mapping.
    #[must_use]
    pub fn map() -> Self {
        Self::Map(Rc::new(RefCell::new(IndexMap::new())))
    }

    /// A mapping holding `entries`, in iteration order.
    #[must_use]
    pub fn map_of(entries: IndexMap<String, Self>) -> Self {
        Self::Map(Rc::new(RefCell::new(entries)))
    }

    /// Compile `source` into a pattern value.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::Pattern`] if `source` is not a valid pattern.
    pub fn pattern(source: &str) -> Result<Self, ValueError> {
        Ok(Self::Pattern(Rc::new(Regex::new(source)?)))
    }

    /// The empty pattern, the Pattern category's sample.
    ///
    /// # Panics
    ///
    /// Never in practice; the empty pattern always compiles.
    #[must_use]
    pub fn empty_pattern() -> Self {
        Self::pattern("").expect("empty pattern always compiles")
    }

    /// The category this value belongs to, if any.
    ///
    /// Booleans answer `None`: no declarable category admits them, matching
    /// the host, whose concept vocabulary never covered its boolean kind.
    #[must_use]
    pub const fn kind(&self) -> Option<TypeCategory> {
        match self {
            Self::Null => Some(TypeCategory::Null),
            Self::Bool(_) => None,
            Self::Int(_) => Some(TypeCategory::Integer),
            Self::Float(_) => Some(TypeCategory::Number),
            Self::Text(_) => Some(TypeCategory::Text),
            Self::Callable(_) => Some(TypeCategory::Callable),
            Self::Array(_) => Some(TypeCategory::Array),
            Self::Map(_) => Some(TypeCategory::Map),
            Self::Pattern(_) => Some(TypeCategory::Pattern),
        }
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Int(_) | Self::Float(_))
    }

    /// Numeric content, unified across the two numeric kinds.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(i) => Some(*i as f64),
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Numeric and equal to its own truncation.
    #[must_use]
    pub fn is_integral(&self) -> bool {
        match self {
            Self::Int(_) => true,
            Self::Float(f) => f.trunc() == *f,
            _ => false,
        }
    }

    #[must_use]
    pub const fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }

    #[must_use]
    pub const fn is_callable(&self) -> bool {
        matches!(self, Self::Callable(_))
    }

    /// The spy behind a callable value.
    #[must_use]
    pub const fn as_spy(&self) -> Option<&Spy> {
        match self {
            Self::Callable(spy) => Some(spy),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Self::Array(_))
    }

    #[must_use]
    pub const fn is_map(&self) -> bool {
        matches!(self, Self::Map(_))
    }

    #[must_use]
    pub const fn is_pattern(&self) -> bool {
        matches!(self, Self::Pattern(_))
    }

    /// Look up `key` on a mapping value. Answers `None` for absent keys and
    /// for values that are not mappings; callers treating absence as the
    /// undefined sentinel use `.unwrap_or(Value::Null)`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<Self> {
        match self {
            Self::Map(entries) => entries.borrow().get(key).cloned(),
            _ => None,
        }
    }

    /// Deep content comparison.
    ///
    /// Sequences and mappings compare element-wise; callables and patterns
    /// still compare by identity, having no meaningful content equality.
    #[must_use]
    pub fn structural_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Array(a), Self::Array(b)) => {
                if Rc::ptr_eq(a, b) {
                    return true;
                }
                let (a, b) = (a.borrow(), b.borrow());
                a.len() == b.len() && a.iter().zip(b.iter()).all(|(x, y)| x.structural_eq(y))
            }
            (Self::Map(a), Self::Map(b)) => {
                if Rc::ptr_eq(a, b) {
                    return true;
                }
                let (a, b) = (a.borrow(), b.borrow());
                a.len() == b.len()
                    && a.iter()
                        .all(|(key, x)| b.get(key).is_some_and(|y| x.structural_eq(y)))
            }
            _ => self == other,
        }
    }

    /// Import a JSON document. Total: every JSON value has a `Value` form.
    #[must_use]
    pub fn from_json(json: &serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Bool(*b),
            serde_json::Value::Number(n) => n
                .as_i64()
                .map_or_else(|| Self::Float(n.as_f64().unwrap_or(f64::NAN)), Self::Int),
            serde_json::Value::String(s) => Self::Text(s.clone()),
            serde_json::Value::Array(items) => {
                Self::array_of(items.iter().map(Self::from_json).collect())
            }
            serde_json::Value::Object(entries) => Self::map_of(
                entries
                    .iter()
                    .map(|(key, json)| (key.clone(), Self::from_json(json)))
                    .collect(),
            ),
        }
    }

    /// Export to JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::Unrepresentable`] for callables and patterns and
    /// [`ValueError::NonFiniteNumber`] for NaN or infinite numbers; JSON has
    /// no form for any of them.
    pub fn to_json(&self) -> Result<serde_json::Value, ValueError> {
        match self {
            Self::Null => Ok(serde_json::Value::Null),
            Self::Bool(b) => Ok((*b).into()),
            Self::Int(i) => Ok((*i).into()),
            Self::Float(f) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .ok_or(ValueError::NonFiniteNumber(*f)),
            Self::Text(s) => Ok(s.clone().into()),
            Self::Callable(_) => Err(ValueError::Unrepresentable(TypeCategory::Callable)),
            Self::Pattern(_) => Err(ValueError::Unrepresentable(TypeCategory::Pattern)),
            Self::Array(items) => Ok(items
                .borrow()
                .iter()
                .map(Self::to_json)
                .collect::<Result<Vec<_>, _>>()?
                .into()),
            Self::Map(entries) => Ok(serde_json::Value::Object(
                entries
                    .borrow()
                    .iter()
                    .map(|(key, value)| Ok((key.clone(), value.to_json()?)))
                    .collect::<Result<serde_json::Map<_, _>, ValueError>>()?,
            )),
        }
    }
}

/// Strict identity, the host's `===`: content equality for null, booleans,
/// numbers, and text; handle identity for everything shared.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (a, b) if a.is_numeric() && b.is_numeric() => a.as_f64() == b.as_f64(),
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::Callable(a), Self::Callable(b)) => a.ptr_eq(b),
            (Self::Array(a), Self::Array(b)) => Rc::ptr_eq(a, b),
            (Self::Map(a), Self::Map(b)) => Rc::ptr_eq(a, b),
            (Self::Pattern(a), Self::Pattern(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Text(s) => write!(f, "{s:?}"),
            Self::Callable(spy) => write!(f, "{spy:?}"),
            Self::Array(items) => write!(f, "[array; {}]", items.borrow().len()),
            Self::Map(entries) => write!(f, "[map; {}]", entries.borrow().len()),
            Self::Pattern(pattern) => write!(f, "/{}/", pattern.as_str()),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<Spy> for Value {
    fn from(spy: Spy) -> Self {
        Self::Callable(spy)
    }
}

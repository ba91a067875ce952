//! # standin-core
//!
//! Dynamic value model, type categories, and the Spy call recorder for Standin.
//!
//! This crate provides the foundational types shared across all Standin crates:
//! - `Value`: a closed tagged variant covering every kind of value a concept
//!   field may hold, with the host language's identity semantics
//! - `TypeCategory`: the closed enumeration of value categories a field may
//!   declare, with membership predicates and sample synthesis
//! - `Spy`: a call-recording, behavior-stubbing callable stand-in
//! - `ValueError`: the crate's error type (pattern compilation, JSON export)
//!
//! The model is single-threaded: spies and aggregate values share state
//! through `Rc`/`RefCell`, and callers embedding them in a threaded host must
//! serialize access themselves.

pub mod category;
pub mod spy;
pub mod value;

mod error;

pub use category::TypeCategory;
pub use error::ValueError;
pub use spy::{Behavior, CallRecord, Spy};
pub use value::Value;

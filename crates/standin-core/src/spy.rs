//! The call-recording, behavior-stubbing callable stand-in.
//!
//! A [`Spy`] is a cheaply-cloneable handle over one shared state bundle: the
//! append-only call history, the base behavior, an optional unconditional
//! override return value, and an ordered list of conditional reactions. The
//! return value of every invocation is computed fresh from that state:
//!
//! 1. record the call (receiver plus full argument list);
//! 2. invoke the base behavior (without the call's arguments) for the
//!    fallback result;
//! 3. the override return value, if set, supersedes the fallback;
//! 4. reactions are scanned in registration order: every satisfied
//!    return-substitution overwrites the candidate (last satisfied wins),
//!    and every satisfied side effect runs immediately, with no arguments,
//!    interleaved in order.
//!
//! The shared state's borrow is released before any user code (base behavior
//! or side effect) runs, so a reaction may invoke or reconfigure the spy it
//! is registered on.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use tracing::trace;

use crate::value::Value;

/// Fallback behavior invoked on every call. Receives none of the call's
/// arguments.
pub type Behavior = Rc<dyn Fn() -> Value>;

type SideEffect = Rc<RefCell<dyn FnMut()>>;

/// One recorded invocation.
#[derive(Clone, Debug)]
pub struct CallRecord {
    /// The receiver the callable was invoked on.
    pub receiver: Value,
    /// The full positional argument list, in order.
    pub args: Vec<Value>,
}

impl CallRecord {
    /// Prefix-identity matching: the call must carry at least `expected.len()`
    /// arguments and each expected argument must be identical to the argument
    /// in the same position. Trailing call arguments are ignored.
    fn matches_prefix(&self, expected: &[Value]) -> bool {
        self.args.len() >= expected.len()
            && expected.iter().zip(&self.args).all(|(e, a)| e == a)
    }
}

#[derive(Clone)]
enum Condition {
    /// Matches every call.
    Always,
    /// Matches calls whose leading arguments are identical to these.
    ArgsPrefix(Vec<Value>),
}

impl Condition {
    fn holds(&self, call: &CallRecord) -> bool {
        match self {
            Self::Always => true,
            Self::ArgsPrefix(expected) => call.matches_prefix(expected),
        }
    }
}

#[derive(Clone)]
enum Effect {
    /// Substitute the return value.
    Return(Value),
    /// Run a side effect, with no arguments.
    Run(SideEffect),
}

#[derive(Clone)]
struct Reaction {
    condition: Condition,
    effect: Effect,
}

struct SpyState {
    base: Behavior,
    override_return: Option<Value>,
    reactions: Vec<Reaction>,
    calls: Vec<CallRecord>,
}

/// A callable stand-in that records every invocation and can be configured to
/// substitute return values or trigger side effects on matching calls.
///
/// Cloning yields another handle to the same spy; equality is handle identity.
/// Not safe for concurrent invocation; callers in a threaded host serialize
/// access themselves.
#[derive(Clone)]
pub struct Spy {
    state: Rc<RefCell<SpyState>>,
}

impl Spy {
    /// A spy with a no-op base behavior returning null.
    #[must_use]
    pub fn new() -> Self {
        Self::with_behavior(Rc::new(|| Value::Null))
    }

    /// A spy wrapping `behavior` as its base.
    pub fn wrapping(behavior: impl Fn() -> Value + 'static) -> Self {
        Self::with_behavior(Rc::new(behavior))
    }

    /// A spy wrapping an already-shared base behavior.
    #[must_use]
    pub fn with_behavior(base: Behavior) -> Self {
        Self {
            state: Rc::new(RefCell::new(SpyState {
                base,
                override_return: None,
                reactions: Vec::new(),
                calls: Vec::new(),
            })),
        }
    }

    /// Invoke the spy: record the call and compute its return value.
    pub fn call(&self, receiver: Value, args: Vec<Value>) -> Value {
        let record = CallRecord { receiver, args };

        // Snapshot the configuration while recording, then release the borrow
        // so the base behavior and side effects may re-enter this spy.
        let (base, override_return, reactions, index) = {
            let mut state = self.state.borrow_mut();
            state.calls.push(record.clone());
            (
                state.base.clone(),
                state.override_return.clone(),
                state.reactions.clone(),
                state.calls.len(),
            )
        };
        trace!(call = index, args = record.args.len(), "spy invoked");

        let mut result = base();
        if let Some(value) = override_return {
            result = value;
        }
        for reaction in &reactions {
            if !reaction.condition.holds(&record) {
                continue;
            }
            match &reaction.effect {
                Effect::Return(value) => result = value.clone(),
                Effect::Run(effect) => (&mut *effect.borrow_mut())(),
            }
        }
        result
    }

    /// Set the unconditional override return value, superseding the base
    /// behavior's result (but not matching return-substitutions).
    pub fn set_return(&self, value: Value) {
        self.state.borrow_mut().override_return = Some(value);
    }

    /// Replace the base behavior.
    pub fn replace_base(&self, behavior: impl Fn() -> Value + 'static) {
        self.state.borrow_mut().base = Rc::new(behavior);
    }

    /// On every call, substitute `value` as the return value.
    pub fn when_called_return(&self, value: Value) {
        self.register(Condition::Always, Effect::Return(value));
    }

    /// On every call, run `effect`.
    pub fn when_called_run(&self, effect: impl FnMut() + 'static) {
        self.register(Condition::Always, Effect::Run(Rc::new(RefCell::new(effect))));
    }

    /// On calls whose leading arguments are identical to `expected`,
    /// substitute `value` as the return value.
    pub fn when_called_with_return(&self, expected: Vec<Value>, value: Value) {
        self.register(Condition::ArgsPrefix(expected), Effect::Return(value));
    }

    /// On calls whose leading arguments are identical to `expected`, run
    /// `effect`.
    pub fn when_called_with_run(&self, expected: Vec<Value>, effect: impl FnMut() + 'static) {
        self.register(
            Condition::ArgsPrefix(expected),
            Effect::Run(Rc::new(RefCell::new(effect))),
        );
    }

    fn register(&self, condition: Condition, effect: Effect) {
        self.state
            .borrow_mut()
            .reactions
            .push(Reaction { condition, effect });
    }

    /// Whether at least one historical call matches the argument prefix.
    /// False when never called.
    #[must_use]
    pub fn was_called_with(&self, expected: &[Value]) -> bool {
        self.state
            .borrow()
            .calls
            .iter()
            .any(|call| call.matches_prefix(expected))
    }

    /// Whether the spy was ever invoked.
    #[must_use]
    pub fn was_called(&self) -> bool {
        self.call_count() > 0
    }

    /// Number of recorded invocations.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.state.borrow().calls.len()
    }

    /// The recorded call history, oldest first.
    #[must_use]
    pub fn calls(&self) -> Vec<CallRecord> {
        self.state.borrow().calls.clone()
    }

    /// Whether both handles refer to the same spy.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }
}

impl Default for Spy {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Spy {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for Spy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[spy; {} calls]", self.call_count())
    }
}

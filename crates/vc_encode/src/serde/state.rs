use alloc::string::ToString;
use alloc::vec::Vec;
use core::cell::RefCell;

use serde_core::ser::Error;

use crate::registry::{EncoderFn, Encoders};
use crate::{EncodeError, LocItem};

// -----------------------------------------------------------------------------
// Scope

/// The type-declared encoders of the enclosing models, innermost first.
#[derive(Clone, Copy)]
pub(super) struct Scope<'a> {
    pub encoders: &'a Encoders,
    pub parent: Option<&'a Scope<'a>>,
}

impl<'a> Scope<'a> {
    pub fn iter(this: Option<&'a Scope<'a>>) -> impl Iterator<Item = &'a Encoders> {
        core::iter::successors(this, |scope| scope.parent).map(|scope| scope.encoders)
    }
}

// -----------------------------------------------------------------------------
// EncodeState

/// Per-call state shared by every serializer of one top-level value.
///
/// Serde errors only carry a message, so the first [`EncodeError`] is kept
/// here and handed back to the caller as it is.
pub(super) struct EncodeState<'a> {
    /// The call-scoped table.
    pub encoders: Option<&'a Encoders>,
    /// The universal override.
    pub encoder: Option<&'a EncoderFn>,
    /// Whether the type-declared encoders of models are consulted.
    pub model_configs: bool,
    error: RefCell<Option<EncodeError>>,
    loc: RefCell<Vec<LocItem>>,
}

impl<'a> EncodeState<'a> {
    pub const fn new(
        encoders: Option<&'a Encoders>,
        encoder: Option<&'a EncoderFn>,
        model_configs: bool,
    ) -> Self {
        Self {
            encoders,
            encoder,
            model_configs,
            error: RefCell::new(None),
            loc: RefCell::new(Vec::new()),
        }
    }

    pub fn reset(&self) {
        self.error.borrow_mut().take();
        self.loc.borrow_mut().clear();
    }

    pub fn take_error(&self) -> Option<EncodeError> {
        self.error.borrow_mut().take()
    }

    /// Runs `f` with `item` pushed on the location stack.
    pub fn with_loc<R>(&self, item: LocItem, f: impl FnOnce() -> R) -> R {
        self.loc.borrow_mut().push(item);
        let output = f();
        self.loc.borrow_mut().pop();
        output
    }

    /// Records `err` unchanged and returns it as a serde error.
    pub fn fail<E: Error>(&self, err: EncodeError) -> E {
        let msg = err.to_string();
        let mut slot = self.error.borrow_mut();
        if slot.is_none() {
            *slot = Some(err);
        }
        E::custom(msg)
    }

    /// Records a dispatcher error at the current location.
    pub fn fail_here<E: Error>(&self, err: EncodeError) -> E {
        let err = err.at(&self.loc.borrow());
        self.fail(err)
    }

    /// Converts the error of a nested `serde_json` call.
    pub fn nested_error<E: Error>(&self, err: serde_json::Error) -> E {
        if let Some(recorded) = &*self.error.borrow() {
            return E::custom(recorded);
        }
        self.fail(EncodeError::Json(err))
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::EncodeState;
    use crate::{EncodeError, LocItem};

    #[test]
    fn first_error_wins() {
        let state = EncodeState::new(None, None, true);
        let first: serde_json::Error = state.with_loc(LocItem::Index(1), || {
            state.fail_here(EncodeError::type_mismatch("Foo"))
        });
        let _: serde_json::Error = state.fail(EncodeError::custom("later"));

        assert_eq!(
            first.to_string(),
            "Object of type Foo is not JSON serializable (at 1)"
        );
        let kept = state.take_error().unwrap();
        assert_eq!(kept.loc().unwrap().to_string(), "1");
        assert!(state.take_error().is_none());
    }
}

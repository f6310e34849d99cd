//! # Scoped Cleanup
//!
//! A cleanup stack tied to a lexical scope. Actions registered with
//! [`Scope::defer`] run in reverse registration order when the scope is
//! dropped, whichever way control leaves it: falling off the end, an early
//! `return`, `?` propagation, or a panic unwinding through it.
//!
//! The scope owns a *context* value that the body reaches through `Deref`
//! and that every deferred action receives as `&mut C`. Passing `&mut W`
//! for some writer lets both the body and its deferred actions print to the
//! same sink without shared-ownership wrappers.
//!
//! ## Example
//!
//! ```
//! use tour_common::Scope;
//!
//! let mut log = Vec::new();
//! {
//!     let mut scope = Scope::new(&mut log);
//!     scope.push("start");
//!     scope.defer(|log| log.push("deferred 1"));
//!     scope.defer(|log| log.push("deferred 2"));
//!     scope.push("end");
//! } // deferred actions run here, last registered first
//!
//! assert_eq!(log, ["start", "end", "deferred 2", "deferred 1"]);
//! ```

use std::ops::{Deref, DerefMut};
use std::panic::{AssertUnwindSafe, catch_unwind, resume_unwind};

type Action<'a, C> = Box<dyn FnOnce(&mut C) + 'a>;

/// A context value paired with a LIFO stack of deferred actions.
///
/// A panicking action does not stop the ones registered before it: every
/// action runs, then the first panic is resumed. If the thread is already
/// unwinding, the action's panic is logged and swallowed so the original
/// one keeps going.
pub struct Scope<'a, C> {
    // Only `finish` takes the context, and it consumes the scope.
    context: Option<C>,
    actions: Vec<Action<'a, C>>,
}

impl<'a, C> Scope<'a, C> {
    /// Opens a scope around `context` with no deferred actions.
    #[must_use]
    pub fn new(context: C) -> Self {
        Self {
            context: Some(context),
            actions: Vec::new(),
        }
    }

    /// Registers an action to run when the scope exits.
    pub fn defer<F>(&mut self, action: F)
    where
        F: FnOnce(&mut C) + 'a,
    {
        self.actions.push(Box::new(action));
    }

    /// Number of actions still waiting to run.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.actions.len()
    }

    /// Runs the deferred actions now, newest first, and hands the context back.
    ///
    /// ```
    /// use tour_common::Scope;
    ///
    /// let mut scope = Scope::new(Vec::new());
    /// scope.push("body");
    /// scope.defer(|log| log.push("cleanup"));
    /// assert_eq!(scope.finish(), ["body", "cleanup"]);
    /// ```
    pub fn finish(mut self) -> C {
        self.unwind();
        match self.context.take() {
            Some(context) => context,
            None => unreachable!("scope context taken before finish"),
        }
    }

    /// Closes the scope now instead of at the end of the enclosing block.
    pub fn close(self) {
        drop(self.finish());
    }

    fn unwind(&mut self) {
        let Some(context) = self.context.as_mut() else {
            return;
        };
        if !self.actions.is_empty() {
            tracing::trace!(pending = self.actions.len(), "running deferred actions");
        }

        let mut first_panic = None;
        while let Some(action) = self.actions.pop() {
            if let Err(payload) = catch_unwind(AssertUnwindSafe(|| action(&mut *context))) {
                tracing::warn!(
                    remaining = self.actions.len(),
                    "deferred action panicked"
                );
                first_panic.get_or_insert(payload);
            }
        }

        if let Some(payload) = first_panic.filter(|_| !std::thread::panicking()) {
            resume_unwind(payload);
        }
    }
}

impl<C> Deref for Scope<'_, C> {
    type Target = C;

    fn deref(&self) -> &C {
        match &self.context {
            Some(context) => context,
            None => unreachable!("scope context taken before finish"),
        }
    }
}

impl<C> DerefMut for Scope<'_, C> {
    fn deref_mut(&mut self) -> &mut C {
        match &mut self.context {
            Some(context) => context,
            None => unreachable!("scope context taken before finish"),
        }
    }
}

impl<C> Drop for Scope<'_, C> {
    fn drop(&mut self) {
        self.unwind();
    }
}

//! Section 3.4: Deferred Cleanup
//!
//! Rust has no `defer` statement. Cleanup is attached to values instead:
//! when a value goes out of scope its `Drop` impl runs, and values are
//! dropped in reverse declaration order. [`tour_common::Scope`] packages
//! that into an explicit cleanup stack, so actions registered
//! `[X, Y]` run `[Y, X]` on every exit path.
//!
//! The demo's deferred actions print through the same writer as the body.
//! The scope owns the `&mut W`, and the body reaches it through `Deref`.

use std::cell::RefCell;
use std::io::Write;

use tour_common::console::heading;
use tour_common::{Result, Scope};

/// Prints one line from inside a deferred action.
///
/// A drop cannot return an error, so a failed write is logged rather than
/// propagated.
fn say<W: Write>(out: &mut W, line: &str) {
    if let Err(err) = writeln!(out, "{line}") {
        tracing::warn!(%err, text = line, "deferred write failed");
    }
}

/// A guard that records its label in a shared log when dropped.
pub struct Announced<'a> {
    label: &'static str,
    log: &'a RefCell<Vec<&'static str>>,
}

impl<'a> Announced<'a> {
    pub fn new(label: &'static str, log: &'a RefCell<Vec<&'static str>>) -> Self {
        Announced { label, log }
    }
}

impl Drop for Announced<'_> {
    fn drop(&mut self) {
        self.log.borrow_mut().push(self.label);
    }
}

pub fn demonstrate_defer<W: Write>(out: &mut W) -> Result<()> {
    heading(out, "Deferred Cleanup")?;

    {
        let mut scope = Scope::new(&mut *out);
        writeln!(scope, "start")?;
        scope.defer(|out| say(out, "deferred 1 (runs last)"));
        scope.defer(|out| say(out, "deferred 2 (runs second to last)"));
        writeln!(scope, "middle")?;
        writeln!(scope, "end")?;
    }

    // The same ordering falls out of plain `Drop` on local guards
    let released = RefCell::new(Vec::new());
    {
        let _first = Announced::new("first", &released);
        let _second = Announced::new("second", &released);
        let _third = Announced::new("third", &released);
    }
    writeln!(out, "guards dropped in order: {}", released.borrow().join(", "))?;

    Ok(())
}

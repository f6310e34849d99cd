//! Section 3.3: References
//!
//! Rust's everyday "pointers" are references, checked at compile time:
//!
//! - `&T`: shared borrow, any number at once, read-only
//! - `&mut T`: exclusive borrow, exactly one at a time, may write
//! - `Box<T>`: an owning pointer to a heap allocation
//!
//! A reference can never dangle or be null. `{:p}` prints the address a
//! reference points at; the value varies between runs.

use std::io::Write;

use tour_common::Result;
use tour_common::console::heading;

/// Writes `value` through an exclusive borrow.
///
/// # Examples
/// ```
/// use tour_chapter3::section_3_3::set_through;
/// let mut x = 42;
/// set_through(&mut x, 100);
/// assert_eq!(x, 100);
/// ```
pub fn set_through(target: &mut i32, value: i32) {
    *target = value;
}

/// Swaps two values via exclusive borrows.
pub fn swap_values(a: &mut i32, b: &mut i32) {
    std::mem::swap(a, b);
}

/// Returns a reference to the larger element, tied to the slice's lifetime.
pub fn largest(values: &[i32]) -> Option<&i32> {
    values.iter().max()
}

pub fn demonstrate_references<W: Write>(out: &mut W) -> Result<()> {
    heading(out, "References")?;

    let mut x = 42;
    {
        let p = &x;
        writeln!(out, "value of x: {x}")?;
        writeln!(out, "address of x: {:p}", &x)?;
        writeln!(out, "p points at: {p:p}")?;
        writeln!(out, "value through p: {}", *p)?;
    }

    set_through(&mut x, 100);
    writeln!(out, "x after writing through &mut: {x}")?;

    let (mut a, mut b) = (1, 2);
    swap_values(&mut a, &mut b);
    writeln!(out, "after swap: a={a}, b={b}")?;

    // Heap allocation owned by a Box; freed when `boxed` goes out of scope
    let boxed = Box::new(7);
    writeln!(out, "boxed value: {}, doubled: {}", boxed, *boxed * 2)?;

    let values = [3, 9, 4];
    if let Some(max) = largest(&values) {
        writeln!(out, "largest borrowed element: {max}")?;
    }

    Ok(())
}

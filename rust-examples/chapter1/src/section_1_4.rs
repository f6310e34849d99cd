//! Section 1.4: Arrays and Slices
//!
//! | Type | Size known | Owns data | Grows |
//! |------|-----------|-----------|-------|
//! | `[T; N]` | compile time | yes | no |
//! | `Vec<T>` | run time | yes | yes |
//! | `&[T]` | run time | no (borrows) | no |
//!
//! A slice is a view into contiguous elements owned by someone else, so
//! taking `&v[1..4]` copies nothing.

use std::io::Write;

use tour_common::Result;
use tour_common::console::{bracketed, heading};

/// Builds a vector of `len` zeros with room for at least `capacity` elements.
///
/// # Examples
/// ```
/// use tour_chapter1::section_1_4::zeroed_with_capacity;
/// let v = zeroed_with_capacity(3, 5);
/// assert_eq!(v, [0, 0, 0]);
/// assert!(v.capacity() >= 5);
/// ```
pub fn zeroed_with_capacity(len: usize, capacity: usize) -> Vec<i32> {
    let mut v = Vec::with_capacity(capacity.max(len));
    v.resize(len, 0);
    v
}

/// Returns `items[start..end]`, or `None` when the range is out of bounds
/// instead of panicking like plain indexing would.
pub fn window(items: &[i32], start: usize, end: usize) -> Option<&[i32]> {
    items.get(start..end)
}

pub fn demonstrate_arrays_and_slices<W: Write>(out: &mut W) -> Result<()> {
    heading(out, "Arrays and Slices")?;

    // Fixed-size arrays
    let arr: [i32; 3] = [1, 2, 3];
    let arr2 = [4, 5, 6]; // length inferred

    // Growable vectors
    let mut numbers = vec![1, 2, 3, 4, 5];
    let preallocated = zeroed_with_capacity(3, 5);

    numbers.extend([6, 7]);
    let sub = &numbers[1..4];

    writeln!(out, "arrays: {}, {}", bracketed(arr), bracketed(arr2))?;
    writeln!(out, "vector: {}", bracketed(&numbers))?;
    writeln!(
        out,
        "preallocated length: {}, room for five: {}",
        preallocated.len(),
        preallocated.capacity() >= 5
    )?;
    writeln!(out, "slice [1..4]: {}", bracketed(sub))?;

    match window(&numbers, 5, 10) {
        Some(items) => writeln!(out, "window [5..10]: {}", bracketed(items))?,
        None => writeln!(out, "window [5..10] is out of bounds for length {}", numbers.len())?,
    }

    Ok(())
}

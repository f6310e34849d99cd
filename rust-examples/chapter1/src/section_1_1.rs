//! Section 1.1: Variables
//!
//! Every binding in Rust is introduced with `let`:
//! - **Explicit type**: `let age: u32 = 25;`
//! - **Inferred type**: `let city = "Beijing";` (the compiler picks `&str`)
//! - **Mutable**: `let mut count = 0;` is required before assigning again
//! - **Shadowing**: a second `let` with the same name makes a new binding
//! - **Destructuring**: `let (x, y, z) = (1, 2, 3);` binds several names at once
//!
//! Bindings are immutable unless marked `mut`, and every binding must be
//! initialised before it is read.

use std::io::Write;

use tour_common::Result;
use tour_common::console::heading;

/// Sums a slice using a `mut` accumulator.
///
/// # Examples
/// ```
/// use tour_chapter1::section_1_1::running_total;
/// assert_eq!(running_total(&[1, 2, 3, 4]), 10);
/// assert_eq!(running_total(&[]), 0);
/// ```
pub fn running_total(values: &[i64]) -> i64 {
    let mut total = 0;
    for value in values {
        total += value;
    }
    total
}

/// Shadows `text` twice: first with a trimmed `&str`, then with its length.
///
/// # Examples
/// ```
/// use tour_chapter1::section_1_1::shadowed_length;
/// assert_eq!(shadowed_length("  hello  "), 5);
/// ```
#[allow(clippy::let_and_return)]
pub fn shadowed_length(text: &str) -> usize {
    let text = text.trim();
    let text = text.len();
    text
}

pub fn demonstrate_variables<W: Write>(out: &mut W) -> Result<()> {
    heading(out, "Variables")?;

    // Explicit type annotations
    let name: &str = "Zhang San";
    let age: u32 = 25;

    // Type inference
    let city = "Beijing";

    // `String` when the value must be owned
    let country = String::from("China");

    // Several bindings at once via a tuple pattern
    let (x, y, z): (i32, i32, i32) = (1, 2, 3);

    writeln!(out, "name: {name}, age: {age}, city: {city}, country: {country}")?;
    writeln!(out, "x={x}, y={y}, z={z}")?;

    let mut counter = 0;
    counter += 1;
    counter += 1;
    writeln!(out, "mutable counter after two increments: {counter}")?;

    let spaces = "   ";
    let spaces = spaces.len();
    writeln!(out, "shadowed binding: spaces = {spaces}")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tour_common::console::captured;

    #[test]
    fn test_running_total() {
        assert_eq!(running_total(&[5, -2, 7]), 10);
        assert_eq!(running_total(&[]), 0);
    }

    #[test]
    fn test_shadowed_length() {
        assert_eq!(shadowed_length("abc"), 3);
        assert_eq!(shadowed_length("   "), 0);
    }

    #[test]
    fn test_demonstrate_variables() {
        let mut out = Vec::new();
        demonstrate_variables(&mut out).unwrap();
        let text = captured(&out);

        assert!(text.starts_with("\n=== Variables ===\n"));
        assert!(text.contains("name: Zhang San, age: 25, city: Beijing, country: China"));
        assert!(text.contains("x=1, y=2, z=3"));
        assert!(text.contains("mutable counter after two increments: 2"));
        assert!(text.contains("shadowed binding: spaces = 3"));
    }
}

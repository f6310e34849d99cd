//! Section 2.2: Loops
//!
//! Rust has three loop forms:
//!
//! | Form | Use |
//! |------|-----|
//! | `for x in iter` | walk any iterator: ranges, collections, adapters |
//! | `while cond` | repeat while a condition holds |
//! | `loop` | repeat until `break`; `break value` makes the loop an expression |
//!
//! Most loops in idiomatic code are `for` loops over iterators, often with
//! adapters such as `enumerate`, `rev` or `step_by`.

use std::io::Write;

use tour_common::Result;
use tour_common::console::heading;

/// Sums `1..=n` with a `while` loop.
///
/// # Panics
///
/// In debug builds, when the sum no longer fits in a `u64` (`n` above
/// roughly six billion).
///
/// # Examples
/// ```
/// use tour_chapter2::section_2_2::sum_to;
/// assert_eq!(sum_to(10), 55);
/// ```
pub fn sum_to(n: u64) -> u64 {
    let mut sum = 0;
    let mut i = 1;
    while i <= n {
        sum += i;
        i += 1;
    }
    sum
}

/// Counts upward with `loop` until the counter exceeds `limit`, returning
/// every value seen before the `break`.
pub fn count_until(limit: u32) -> Vec<u32> {
    let mut seen = Vec::new();
    let mut count = 0;
    loop {
        count += 1;
        if count > limit {
            break;
        }
        seen.push(count);
    }
    seen
}

/// Returns the first power of two at or above `n`, using `break` with a value.
/// `None` when that power would not fit in a `u64`.
pub fn first_power_of_two_at_least(n: u64) -> Option<u64> {
    let mut candidate: u64 = 1;
    loop {
        if candidate >= n {
            break Some(candidate);
        }
        candidate = candidate.checked_mul(2)?;
    }
}

pub fn demonstrate_loops<W: Write>(out: &mut W) -> Result<()> {
    heading(out, "Loops")?;

    write!(out, "1-5:")?;
    for i in 1..=5 {
        write!(out, " {i}")?;
    }
    writeln!(out)?;

    writeln!(out, "sum of 1 to 10: {}", sum_to(10))?;

    for count in count_until(3) {
        writeln!(out, "count: {count}")?;
    }

    writeln!(
        out,
        "first power of two >= 100: {:?}",
        first_power_of_two_at_least(100)
    )?;

    let fruits = ["apple", "banana", "orange"];
    for (index, fruit) in fruits.iter().enumerate() {
        writeln!(out, "{index}: {fruit}")?;
    }

    let countdown: Vec<String> = (1..=3).rev().map(|n| n.to_string()).collect();
    writeln!(out, "countdown: {}", countdown.join(", "))?;

    Ok(())
}

//! Section 2.4: Functions
//!
//! - Parameters and return types are always spelled out in signatures
//! - The last expression of a body is its return value; `return` is for early exits
//! - Several values come back as a tuple
//! - Failure is part of the return type: `Result<T, E>`, handled by the caller
//!   with `match`, combinators, or `?`
//! - Closures are anonymous functions that can capture their environment, and
//!   functions that take them are generic over `Fn` traits

use std::io::Write;

use tour_common::console::heading;
use tour_common::{Result, TourError};

/// # Examples
/// ```
/// use tour_chapter2::section_2_4::add;
/// assert_eq!(add(3, 5), 8);
/// ```
pub fn add(a: i64, b: i64) -> i64 {
    a + b
}

/// Returns the two arguments in reverse order.
pub fn swap<A, B>(x: A, y: B) -> (B, A) {
    (y, x)
}

/// Divides `a` by `b`, refusing a zero divisor.
///
/// Both `0.0` and `-0.0` count as zero. Callers that want the zero result
/// that such APIs traditionally pair with an error can ask for it with
/// `unwrap_or_default()`.
///
/// # Examples
/// ```
/// use tour_chapter2::divide;
///
/// assert_eq!(divide(10.0, 2.0).unwrap(), 5.0);
/// assert!(divide(1.0, 0.0).is_err());
/// assert_eq!(divide(1.0, 0.0).unwrap_or_default(), 0.0);
/// ```
pub fn divide(a: f64, b: f64) -> Result<f64> {
    if b == 0.0 {
        return Err(TourError::DivisionByZero);
    }
    Ok(a / b)
}

/// Calls `f` twice, feeding the first result into the second call.
pub fn apply_twice<F>(f: F, x: i64) -> i64
where
    F: Fn(i64) -> i64,
{
    f(f(x))
}

/// Returns a closure that adds `n` to its argument.
pub fn make_adder(n: i64) -> impl Fn(i64) -> i64 {
    move |x| x + n
}

fn report_division<W: Write>(out: &mut W, a: f64, b: f64) -> Result<()> {
    match divide(a, b) {
        Ok(quotient) => writeln!(out, "{a} / {b} = {quotient:.2}")?,
        Err(err) => {
            tracing::debug!(dividend = a, divisor = b, %err, "division rejected");
            writeln!(out, "error: {a} / {b}: {err}")?;
        }
    }
    Ok(())
}

pub fn demonstrate_functions<W: Write>(out: &mut W) -> Result<()> {
    heading(out, "Functions")?;

    writeln!(out, "3 + 5 = {}", add(3, 5))?;

    let (a, b) = swap("hello", "world");
    writeln!(out, "swapped: {a}, {b}")?;

    report_division(out, 10.0, 2.0)?;
    report_division(out, 1.0, 0.0)?;

    let double = |x: i64| x * 2;
    writeln!(out, "double of 5: {}", double(5))?;
    writeln!(out, "double applied twice to 5: {}", apply_twice(double, 5))?;

    let add_ten = make_adder(10);
    writeln!(out, "add_ten(32) = {}", add_ten(32))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use tour_common::console::captured;

    #[test]
    fn test_add_and_swap() {
        assert_eq!(add(-2, 2), 0);
        assert_eq!(swap("hello", "world"), ("world", "hello"));
        assert_eq!(swap(1, 'x'), ('x', 1));
    }

    #[test]
    fn test_divide() {
        assert_eq!(divide(10.0, 2.0).unwrap(), 5.0);
        assert_eq!(divide(-9.0, 3.0).unwrap(), -3.0);
    }

    #[test]
    fn test_divide_by_zero() {
        assert!(matches!(divide(10.0, 0.0), Err(TourError::DivisionByZero)));
        assert!(matches!(divide(10.0, -0.0), Err(TourError::DivisionByZero)));
        assert_eq!(divide(10.0, 0.0).unwrap_or_default(), 0.0);
    }

    #[test]
    fn test_closures() {
        assert_eq!(apply_twice(|x| x + 3, 1), 7);
        assert_eq!(make_adder(10)(32), 42);

        let offset = 100;
        assert_eq!(apply_twice(|x| x + offset, 0), 200);
    }

    #[test]
    fn test_demonstrate_functions() {
        let mut out = Vec::new();
        demonstrate_functions(&mut out).unwrap();
        let text = captured(&out);

        assert!(text.contains("3 + 5 = 8"));
        assert!(text.contains("swapped: world, hello"));
        assert!(text.contains("10 / 2 = 5.00"));
        assert!(text.contains("error: 1 / 0: division by zero"));
        assert!(text.contains("double of 5: 10"));
        assert!(text.contains("double applied twice to 5: 20"));
        assert!(text.contains("add_ten(32) = 42"));
    }

    proptest! {
        /// Property: any non-zero divisor yields exactly a / b
        #[test]
        fn prop_divide_nonzero(a in -1e12f64..1e12, b in -1e12f64..1e12) {
            prop_assume!(b != 0.0);
            prop_assert_eq!(divide(a, b).unwrap(), a / b);
        }

        /// Property: a zero divisor is always an error whose default result is zero
        #[test]
        fn prop_divide_by_zero(a in any::<f64>()) {
            prop_assert!(divide(a, 0.0).is_err());
            prop_assert_eq!(divide(a, 0.0).unwrap_or_default(), 0.0);
        }
    }
}

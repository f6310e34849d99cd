//! Section 2.1: if/else
//!
//! `if` is an expression: every branch produces a value of the same type,
//! so the result can be bound directly with `let`. Conditions must be
//! `bool`; there is no truthiness.
//!
//! `if let` combines a pattern match with a branch, which is how optional
//! values are usually unpacked.

use std::fmt;
use std::io::Write;

use tour_common::Result;
use tour_common::console::heading;

/// Letter-style classification of a 0-100 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Grade {
    Fail,
    Pass,
    Good,
    Excellent,
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Grade::Excellent => "excellent",
            Grade::Good => "good",
            Grade::Pass => "pass",
            Grade::Fail => "fail",
        };
        f.write_str(label)
    }
}

/// Classifies a score with an `if`/`else if` chain.
///
/// # Examples
/// ```
/// use tour_chapter2::{Grade, grade};
/// assert_eq!(grade(85), Grade::Good);
/// assert_eq!(grade(59), Grade::Fail);
/// ```
pub fn grade(score: u32) -> Grade {
    if score >= 90 {
        Grade::Excellent
    } else if score >= 80 {
        Grade::Good
    } else if score >= 60 {
        Grade::Pass
    } else {
        Grade::Fail
    }
}

/// Returns the value only when it is even.
pub fn even(n: i64) -> Option<i64> {
    if n % 2 == 0 { Some(n) } else { None }
}

pub fn demonstrate_if_else<W: Write>(out: &mut W) -> Result<()> {
    heading(out, "if/else")?;

    let score = 85;
    writeln!(out, "score {score} is {}", grade(score))?;

    // `if` as an expression
    let verdict = if score >= 60 { "passed" } else { "failed" };
    writeln!(out, "the student {verdict}")?;

    // `if let` unpacks the Option produced by `even`
    if let Some(n) = even(10) {
        writeln!(out, "{n} is even")?;
    }
    if let Some(n) = even(7) {
        writeln!(out, "{n} is even")?;
    } else {
        writeln!(out, "7 is odd")?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;
    use tour_common::console::captured;

    #[test_case(100, Grade::Excellent; "perfect")]
    #[test_case(90, Grade::Excellent; "lower bound of excellent")]
    #[test_case(89, Grade::Good; "just below excellent")]
    #[test_case(80, Grade::Good; "lower bound of good")]
    #[test_case(60, Grade::Pass; "lower bound of pass")]
    #[test_case(59, Grade::Fail; "just below pass")]
    #[test_case(0, Grade::Fail; "zero")]
    fn grades_scores(score: u32, expected: Grade) {
        assert_eq!(grade(score), expected);
    }

    #[test]
    fn test_grade_is_monotonic() {
        let grades: Vec<Grade> = (0..=100).map(grade).collect();
        assert!(grades.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn test_even() {
        assert_eq!(even(10), Some(10));
        assert_eq!(even(-4), Some(-4));
        assert_eq!(even(7), None);
        assert_eq!(even(-3), None);
    }

    #[test]
    fn test_demonstrate_if_else() {
        let mut out = Vec::new();
        demonstrate_if_else(&mut out).unwrap();
        let text = captured(&out);

        assert!(text.contains("score 85 is good"));
        assert!(text.contains("the student passed"));
        assert!(text.contains("10 is even"));
        assert!(text.contains("7 is odd"));
    }
}

//! Section 1.3: Primitive Types
//!
//! - Signed and unsigned integers of explicit width (`i32`, `u32`, `i64`, ...)
//! - IEEE-754 floats (`f64` is the default for literals like `3.14`)
//! - `bool`
//! - `char`, a Unicode scalar value (4 bytes), not a byte
//! - `&str`, a borrowed UTF-8 string slice
//!
//! Conversions between numeric types are explicit: `From` for lossless
//! widening, `TryFrom` when the value might not fit.

use std::io::Write;

use tour_common::Result;
use tour_common::console::heading;

/// What a `char` looks like from the inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharInfo {
    pub ch: char,
    pub code_point: u32,
    pub utf8_len: usize,
}

/// # Examples
/// ```
/// use tour_chapter1::section_1_3::describe_char;
/// let info = describe_char('中');
/// assert_eq!(info.code_point, 0x4E2D);
/// assert_eq!(info.utf8_len, 3);
/// ```
pub fn describe_char(ch: char) -> CharInfo {
    CharInfo {
        ch,
        code_point: u32::from(ch),
        utf8_len: ch.len_utf8(),
    }
}

/// Narrows an `i64` to `i32`, returning `None` when it does not fit.
pub fn narrow(value: i64) -> Option<i32> {
    i32::try_from(value).ok()
}

#[allow(clippy::approx_constant)]
pub fn demonstrate_data_types<W: Write>(out: &mut W) -> Result<()> {
    heading(out, "Primitive Types")?;

    let i: i32 = 42;
    let u: u32 = 42;
    let f: f64 = 3.14;
    let b: bool = true;
    let s: &str = "Hello, Rust!";
    let c: char = '中';

    writeln!(out, "i32: {i}, u32: {u}, f64: {f:.2}")?;
    writeln!(out, "bool: {b}, &str: {s}, char: {c}")?;

    let info = describe_char(c);
    writeln!(
        out,
        "'{}' is U+{:04X} and takes {} bytes in UTF-8",
        info.ch, info.code_point, info.utf8_len
    )?;

    // Lossless widening is `From`; narrowing goes through `TryFrom`
    let widened = i64::from(i);
    writeln!(out, "i32 -> i64: {widened}")?;
    match narrow(i64::from(i32::MAX) + 1) {
        Some(v) => writeln!(out, "narrowed to {v}")?,
        None => writeln!(out, "i64 {} does not fit in i32", i64::from(i32::MAX) + 1)?,
    }

    // Overflow is explicit with the checked_* family
    writeln!(out, "250u8.checked_add(10) = {:?}", 250u8.checked_add(10))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;
    use tour_common::console::captured;

    #[test_case('A', 0x41, 1; "ascii")]
    #[test_case('é', 0xE9, 2; "latin accent")]
    #[test_case('中', 0x4E2D, 3; "cjk")]
    #[test_case('🦀', 0x1F980, 4; "emoji")]
    fn describes_char(ch: char, code_point: u32, utf8_len: usize) {
        let info = describe_char(ch);
        assert_eq!(info.ch, ch);
        assert_eq!(info.code_point, code_point);
        assert_eq!(info.utf8_len, utf8_len);
    }

    #[test_case(42 => Some(42); "small")]
    #[test_case(i64::from(i32::MIN) => Some(i32::MIN); "lower bound")]
    #[test_case(i64::from(i32::MAX) => Some(i32::MAX); "upper bound")]
    #[test_case(i64::from(i32::MIN) - 1 => None; "below lower bound")]
    #[test_case(i64::from(i32::MAX) + 1 => None; "above upper bound")]
    fn narrows(value: i64) -> Option<i32> {
        narrow(value)
    }

    #[test]
    fn test_demonstrate_data_types() {
        let mut out = Vec::new();
        demonstrate_data_types(&mut out).unwrap();
        let text = captured(&out);

        assert!(text.contains("i32: 42, u32: 42, f64: 3.14"));
        assert!(text.contains("bool: true, &str: Hello, Rust!, char: 中"));
        assert!(text.contains("'中' is U+4E2D and takes 3 bytes in UTF-8"));
        assert!(text.contains("i64 2147483648 does not fit in i32"));
        assert!(text.contains("250u8.checked_add(10) = None"));
    }
}
